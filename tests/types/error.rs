use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use outcome_rail::{Error, ErrorClass, ErrorKind};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_trees_are_equal_and_hash_alike() {
    let build = || {
        Error::with_causes("outer", [Error::new("a"), Error::with_causes("b", [Error::new("c")])])
    };

    let left = build();
    let right = build();

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn cause_order_matters_for_equality() {
    let left = Error::with_causes("outer", [Error::new("a"), Error::new("b")]);
    let right = Error::with_causes("outer", [Error::new("b"), Error::new("a")]);

    assert_ne!(left, right);
}

#[test]
fn kind_participates_in_equality() {
    let domain = Error::with_causes("msg", [Error::new("x")]);
    let indexed = Error::index(0, "msg", [Error::new("x")]);
    let other_index = Error::index(1, "msg", [Error::new("x")]);

    assert_ne!(domain, indexed);
    assert_ne!(indexed, other_index);
}

#[test]
fn with_root_cause_leaves_clones_untouched() {
    let original = Error::new("outer");
    let snapshot = original.clone();

    let extended = original.with_root_cause(Error::new("inner"));

    assert!(snapshot.inner_errors().is_empty());
    assert_eq!(extended.inner_errors(), &[Error::new("inner")]);
}

#[test]
fn with_root_causes_appends_in_order() {
    let err = Error::with_causes("outer", [Error::new("a")])
        .with_root_causes([Error::new("b"), Error::new("c")]);

    let messages: Vec<_> = err.inner_errors().iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn flatten_is_pre_order() {
    let tree = Error::with_causes("1", [
        Error::with_causes("2", [Error::new("3"), Error::new("4")]),
        Error::with_causes("5", [Error::with_causes("6", [Error::new("7")])]),
    ]);

    let order: Vec<_> = tree.flatten().map(Error::message).collect();
    assert_eq!(order, ["1", "2", "3", "4", "5", "6", "7"]);
}

#[test]
fn flatten_of_leaf_yields_itself() {
    let leaf = Error::new("leaf");
    assert_eq!(leaf.flatten().collect::<Vec<_>>(), vec![&leaf]);
}

#[test]
fn contains_finds_nested_kinds() {
    let tree = Error::new("root").with_root_cause(Error::member(
        "Address",
        "invalid member",
        [Error::index(2, "bad line", [Error::new("empty")])],
    ));

    assert!(tree.contains(ErrorClass::Domain));
    assert!(tree.contains(ErrorClass::Member));
    assert!(tree.contains(ErrorClass::Index));
    assert!(!tree.contains(ErrorClass::Context));
    assert!(!tree.contains(ErrorClass::Exceptional));

    assert!(tree.contains_where(ErrorClass::Index, |e| e.index_of() == Some(2)));
    assert!(!tree.contains_where(ErrorClass::Index, |e| e.index_of() == Some(3)));
}

#[test]
fn structural_accessors_match_kind() {
    let index = Error::index(4, "row", []);
    let member = Error::member("Name", "field", []);
    let context = Error::context("signup", "form", []);

    assert_eq!(index.index_of(), Some(4));
    assert_eq!(index.member_name(), None);
    assert_eq!(member.member_name(), Some("Name"));
    assert_eq!(context.context_label(), Some("signup"));
    assert_eq!(context.kind(), &ErrorKind::Context { label: "signup".into() });
    assert_eq!(Error::new("plain").kind(), &ErrorKind::Domain);
}

#[test]
fn exceptional_keeps_native_error() {
    let native = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = Error::exceptional(native);

    assert_eq!(err.class(), ErrorClass::Exceptional);
    assert_eq!(err.message(), "no such file");

    let info = err.exception().expect("exceptional error carries info");
    assert_eq!(info.type_name(), std::any::type_name::<std::io::Error>());
    assert!(!info.is_panic());
    assert_eq!(
        info.downcast_ref::<std::io::Error>().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
}

#[test]
fn exceptional_equality_ignores_the_handle() {
    let a = Error::exceptional("x".parse::<i32>().unwrap_err());
    let b = Error::exceptional("y".parse::<i32>().unwrap_err());

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn exceptional_boxed_records_generic_type_name() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = "boxed failure".into();
    let err = Error::exceptional_boxed(boxed);

    assert_eq!(err.message(), "boxed failure");
    assert!(err.exception().is_some_and(|info| info.source().is_some()));
}

#[cfg(feature = "std")]
#[test]
fn panic_payload_becomes_message() {
    let from_str = Error::panic(Box::new("static message"));
    let from_string = Error::panic(Box::new(String::from("owned message")));
    let opaque = Error::panic(Box::new(42_u8));

    assert_eq!(from_str.message(), "static message");
    assert_eq!(from_string.message(), "owned message");
    assert_eq!(opaque.message(), "panic with a non-string payload");
    assert!(from_str.exception().is_some_and(|info| info.is_panic() && info.source().is_none()));
}

#[test]
fn string_conversions_build_domain_errors() {
    assert_eq!(Error::from("a"), Error::new("a"));
    assert_eq!(Error::from(String::from("b")), Error::new("b"));
}
