//! Lexical scope frames mapping source names to their unique replacements.
//!
//! Frames form a stack; the innermost frame is last. Lookup walks from the
//! innermost frame outwards, so an inner binding hides an outer one with the
//! same source name until its frame is popped.

use rustc_hash::FxHashMap;
use uniq_ir::Name;

/// Bookkeeping failure inside the renamer.
///
/// Never caused by user source: these mean the traversal pushed and popped
/// frames unevenly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// Pop or bind with no frame on the stack.
    #[error("cannot {operation}: scope stack is empty")]
    Underflow { operation: &'static str },
    /// Callable finished with frames other than the root still pushed.
    #[error("scope stack unbalanced after callable body: depth {depth}, expected 1")]
    Unbalanced { depth: usize },
}

/// One frame: source name → unique name.
type Frame = FxHashMap<Name, Name>;

#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<Frame>,
}

impl ScopeStack {
    /// A stack holding a single empty root frame.
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![Frame::default()],
        }
    }

    /// Drop every frame and start again from a single empty root frame.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::default());
    }

    pub fn enter(&mut self) {
        self.frames.push(Frame::default());
    }

    pub fn exit(&mut self) -> Result<(), ScopeError> {
        match self.frames.pop() {
            Some(_) => Ok(()),
            None => Err(ScopeError::Underflow {
                operation: "exit scope",
            }),
        }
    }

    /// Bind `name` in the innermost frame, replacing any binding of the same
    /// name in that frame.
    pub fn bind(&mut self, name: Name, unique: Name) -> Result<(), ScopeError> {
        let frame = self.frames.last_mut().ok_or(ScopeError::Underflow {
            operation: "bind name",
        })?;
        frame.insert(name, unique);
        Ok(())
    }

    /// Innermost binding of `name`, if any frame has one.
    pub fn lookup(&self, name: &str) -> Option<&Name> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Number of frames currently pushed.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
