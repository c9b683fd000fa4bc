use super::*;
use std::collections::HashSet;

#[test]
fn test_name_borrow_lookup() {
    let mut set = HashSet::new();
    set.insert(Name::new("x"));
    set.insert(Name::from("x".to_string())); // duplicate
    set.insert(Name::new("y"));
    assert_eq!(set.len(), 2);
    assert!(set.contains("x"));
    assert!(!set.contains("z"));
}

#[test]
fn test_name_display_and_eq() {
    let name = Name::new("counter");
    assert_eq!(name.to_string(), "counter");
    assert_eq!(name, "counter");
    assert_eq!(format!("{name:?}"), "Name(\"counter\")");
}

#[test]
fn test_name_clone_shares_text() {
    let a = Name::new("shared");
    let b = a.clone();
    assert!(std::ptr::eq(a.as_str(), b.as_str()));
}
