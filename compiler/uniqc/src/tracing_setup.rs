//! Subscriber installation for the `uniq` binary.
//!
//! Nothing is installed unless `RUST_LOG` is set, so library `trace!` calls
//! cost a disabled-callsite check and nothing more.
//!
//! ```text
//! RUST_LOG=uniq_rename=trace uniq rename input.uq
//! RUST_LOG=debug UNIQ_LOG_TREE=1 uniq rename input.uq
//! ```

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// `UNIQ_LOG_TREE=1` switches from flat lines to an indented span tree,
/// which makes nested scope pushes and pops easy to follow.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("UNIQ_LOG_TREE").is_ok_and(|value| value == "1");

        if tree {
            let layer = tracing_tree::HierarchicalLayer::new(2).with_targets(true);
            tracing_subscriber::registry().with(layer).with(filter).init();
        } else {
            let layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(layer).with(filter).init();
        }
    });
}
