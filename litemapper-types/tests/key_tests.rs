use litemapper_types::TypeKey;
use std::collections::HashSet;

mod models {
    pub struct User;
    pub struct Wrapper<T>(pub T);
}

use models::{User, Wrapper};

// ── Identity ──────────────────────────────────────────────────────

#[test]
fn same_type_same_key() {
    assert_eq!(TypeKey::of::<User>(), TypeKey::of::<User>());
}

#[test]
fn different_types_different_keys() {
    assert_ne!(TypeKey::of::<User>(), TypeKey::of::<String>());
}

#[test]
fn of_val_matches_of() {
    let user = User;
    assert_eq!(TypeKey::of_val(&user), TypeKey::of::<User>());
}

#[test]
fn generic_instantiations_are_distinct() {
    assert_ne!(TypeKey::of::<Wrapper<u8>>(), TypeKey::of::<Wrapper<u16>>());
}

#[test]
fn hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(TypeKey::of::<User>());
    set.insert(TypeKey::of::<User>()); // duplicate
    set.insert(TypeKey::of::<String>());
    assert_eq!(set.len(), 2);
}

// ── Names ─────────────────────────────────────────────────────────

#[test]
fn simple_name_is_last_segment() {
    assert_eq!(TypeKey::of::<User>().name(), "User");
}

#[test]
fn full_name_includes_module_path() {
    let key = TypeKey::of::<User>();
    assert!(key.full_name().ends_with("models::User"));
    assert!(key.module_path().ends_with("models"));
}

#[test]
fn simple_name_strips_generics() {
    assert_eq!(TypeKey::of::<Wrapper<String>>().name(), "Wrapper");
}

#[test]
fn primitive_has_no_module_path() {
    let key = TypeKey::of::<u32>();
    assert_eq!(key.name(), "u32");
    assert_eq!(key.module_path(), "");
}

#[test]
fn display_uses_simple_name() {
    assert_eq!(TypeKey::of::<User>().to_string(), "User");
}

#[test]
fn debug_uses_full_name() {
    let debug = format!("{:?}", TypeKey::of::<User>());
    assert!(debug.starts_with("TypeKey("));
    assert!(debug.contains("models::User"));
}
