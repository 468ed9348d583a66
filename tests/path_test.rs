//! Integration tests for FieldPath.

use debrief::{FieldPath, PathSegment};

#[test]
fn test_path_construction_and_display() {
    // Root path renders the placeholder
    assert_eq!(FieldPath::root().to_string(), "<root>");

    // Simple field
    assert_eq!(FieldPath::root().push_field("name").to_string(), "name");

    // Leading index has no leading dot
    assert_eq!(FieldPath::root().push_index(0).to_string(), "[0]");

    // Complex nested path
    let path = FieldPath::root()
        .push_field("users")
        .push_index(0)
        .push_field("address")
        .push_field("city");
    assert_eq!(path.to_string(), "users[0].address.city");
}

#[test]
fn test_canonical_renderings() {
    assert_eq!(FieldPath::from_segments([]).to_string(), "<root>");
    assert_eq!(
        FieldPath::from_segments([PathSegment::field("name")]).to_string(),
        "name"
    );
    assert_eq!(
        FieldPath::from_segments([PathSegment::index(0)]).to_string(),
        "[0]"
    );
    assert_eq!(
        FieldPath::from_segments([
            PathSegment::field("a"),
            PathSegment::field("b"),
            PathSegment::field("c"),
        ])
        .to_string(),
        "a.b.c"
    );
    assert_eq!(
        FieldPath::from_segments([PathSegment::field("a"), PathSegment::index(0)]).to_string(),
        "a[0]"
    );
    assert_eq!(
        FieldPath::from_segments([
            PathSegment::field("a"),
            PathSegment::index(0),
            PathSegment::field("b"),
            PathSegment::index(1),
            PathSegment::field("c"),
        ])
        .to_string(),
        "a[0].b[1].c"
    );
    assert_eq!(
        FieldPath::from_segments([
            PathSegment::field("items"),
            PathSegment::Wildcard,
            PathSegment::field("x"),
        ])
        .to_string(),
        "items[*].x"
    );
}

#[test]
fn test_path_segments_preserved() {
    let path = FieldPath::root()
        .push_field("data")
        .push_index(42)
        .push_field("value");

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(segments.len(), 3);

    match &segments[0] {
        PathSegment::Field(name) => assert_eq!(name, "data"),
        _ => panic!("Expected Field segment"),
    }

    match &segments[1] {
        PathSegment::Index(idx) => assert_eq!(*idx, 42),
        _ => panic!("Expected Index segment"),
    }

    match &segments[2] {
        PathSegment::Field(name) => assert_eq!(name, "value"),
        _ => panic!("Expected Field segment"),
    }
}

#[test]
fn test_path_is_immutable() {
    let base = FieldPath::root().push_field("items");

    let path1 = base.push_index(0);
    let path2 = base.push_index(1);
    let path3 = base.push_field("count");

    // Base path unchanged
    assert_eq!(base.to_string(), "items");

    // Each branch is independent
    assert_eq!(path1.to_string(), "items[0]");
    assert_eq!(path2.to_string(), "items[1]");
    assert_eq!(path3.to_string(), "items.count");
}

#[test]
fn test_path_equality() {
    let path1 = FieldPath::root().push_field("a").push_index(0);
    let path2 = FieldPath::root().push_field("a").push_index(0);
    let path3 = FieldPath::root().push_field("a").push_index(1);
    let path4 = FieldPath::root().push_field("b").push_index(0);

    assert_eq!(path1, path2);
    assert_ne!(path1, path3);
    assert_ne!(path1, path4);
}

#[test]
fn test_collect_into_path() {
    let path: FieldPath = ["users", "email"].into_iter().map(PathSegment::from).collect();
    assert_eq!(path.to_string(), "users.email");
}

#[test]
fn test_display_is_pure() {
    let path = FieldPath::root()
        .push_field("items")
        .push_wildcard()
        .push_field("x");

    // Rendering twice gives the same string and leaves the path usable.
    assert_eq!(path.to_string(), path.to_string());
    assert_eq!(path.len(), 3);
}
