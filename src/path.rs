//! Canonical field paths for locating values in nested structures.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types for building
//! and rendering paths to failing fields, e.g. `users[0].email` or
//! `items[*].name`.

use std::fmt::{self, Display};

/// A segment of a field path.
///
/// Paths are built from segments that represent field access, array
/// indexing, or the every-item wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
    /// The every-item marker, rendered as `[*]`
    Wildcard,
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a failing field in a nested structure.
///
/// `FieldPath` represents locations like `users[0].email` and provides
/// methods for building paths incrementally. The empty path renders as the
/// `<root>` placeholder.
///
/// # Example
///
/// ```rust
/// use debrief::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// assert_eq!(FieldPath::root().to_string(), "<root>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from an ordered sequence of segments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use debrief::{FieldPath, PathSegment};
    ///
    /// let path = FieldPath::from_segments([
    ///     PathSegment::field("items"),
    ///     PathSegment::Wildcard,
    ///     PathSegment::field("x"),
    /// ]);
    /// assert_eq!(path.to_string(), "items[*].x");
    /// ```
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with the every-item wildcard appended.
    pub fn push_wildcard(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Wildcard);
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for FieldPath {
    /// Renders the canonical path string.
    ///
    /// Indices and wildcards append `[i]`/`[*]` with no separator; a field
    /// name is preceded by `.` only when a token was already emitted. The
    /// empty path renders as `<root>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
                PathSegment::Wildcard => write!(f, "[*]")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for FieldPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_renders_placeholder() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "<root>");
    }

    #[test]
    fn test_single_field() {
        let path = FieldPath::root().push_field("user");
        assert_eq!(path.to_string(), "user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_single_index_has_no_leading_dot() {
        let path = FieldPath::root().push_index(0);
        assert_eq!(path.to_string(), "[0]");
    }

    #[test]
    fn test_nested_fields() {
        let path = FieldPath::root().push_field("user").push_field("email");
        assert_eq!(path.to_string(), "user.email");
    }

    #[test]
    fn test_field_with_index() {
        let path = FieldPath::root().push_field("users").push_index(0);
        assert_eq!(path.to_string(), "users[0]");
    }

    #[test]
    fn test_alternating_fields_and_indices() {
        let path = FieldPath::root()
            .push_field("a")
            .push_index(0)
            .push_field("b")
            .push_index(1)
            .push_field("c");
        assert_eq!(path.to_string(), "a[0].b[1].c");
    }

    #[test]
    fn test_wildcard_segment() {
        let path = FieldPath::root()
            .push_field("items")
            .push_wildcard()
            .push_field("x");
        assert_eq!(path.to_string(), "items[*].x");
    }

    #[test]
    fn test_deeply_nested() {
        let path = FieldPath::root()
            .push_field("body")
            .push_field("data")
            .push_index(42)
            .push_field("items")
            .push_index(0)
            .push_field("name");
        assert_eq!(path.to_string(), "body.data[42].items[0].name");
    }

    #[test]
    fn test_path_immutability() {
        let base = FieldPath::root().push_field("users");
        let path_a = base.push_index(0);
        let path_b = base.push_index(1);

        assert_eq!(base.to_string(), "users");
        assert_eq!(path_a.to_string(), "users[0]");
        assert_eq!(path_b.to_string(), "users[1]");
    }

    #[test]
    fn test_from_segments() {
        let path = FieldPath::from_segments([
            PathSegment::field("addresses"),
            PathSegment::index(1),
            PathSegment::field("zipcode"),
        ]);
        assert_eq!(path.to_string(), "addresses[1].zipcode");
    }

    #[test]
    fn test_segment_conversions() {
        assert_eq!(PathSegment::from("name"), PathSegment::field("name"));
        assert_eq!(PathSegment::from(3usize), PathSegment::index(3));
    }

    #[test]
    fn test_parent_path() {
        let path = FieldPath::root()
            .push_field("users")
            .push_index(0)
            .push_field("email");

        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "users[0]");

        let grandparent = parent.parent().unwrap();
        assert_eq!(grandparent.to_string(), "users");

        let root = grandparent.parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_last_segment() {
        let path = FieldPath::root().push_field("users").push_index(0);
        assert_eq!(path.last(), Some(&PathSegment::Index(0)));

        let root = FieldPath::root();
        assert_eq!(root.last(), None);
    }

    #[test]
    fn test_equality() {
        let path1 = FieldPath::root().push_field("a").push_index(0);
        let path2 = FieldPath::root().push_field("a").push_index(0);
        let path3 = FieldPath::root().push_field("a").push_index(1);

        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
    }
}
