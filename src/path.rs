//! Document path representation for locating members in a JSON:API document.
//!
//! This module provides [`DocumentPath`] and [`PathSegment`] types for building
//! and representing the location of a value inside the document under
//! validation. Paths are rooted at the document itself, which displays as
//! `<document>`.

use std::fmt::{self, Display};

/// A segment of a document path.
///
/// Paths are built from segments that represent either member access or array
/// indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A member access (e.g., `jsonapi`, `meta`)
    Member(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new member segment.
    pub fn member(name: impl Into<String>) -> Self {
        PathSegment::Member(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path from the document root to a value under validation.
///
/// `DocumentPath` represents locations like `<document>.included[0].type` and
/// provides methods for building paths incrementally. Pushing never modifies
/// the original path, so a rule can hand extended paths to sub-checks while
/// keeping its own.
///
/// # Example
///
/// ```rust
/// use jsonapi_lint::DocumentPath;
///
/// let path = DocumentPath::document()
///     .push_member("included")
///     .push_index(0)
///     .push_member("type");
///
/// assert_eq!(path.to_string(), "<document>.included[0].type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DocumentPath {
    segments: Vec<PathSegment>,
}

impl DocumentPath {
    /// Creates an empty path representing the document root (`<document>`).
    pub fn document() -> Self {
        Self::default()
    }

    /// Returns a new path with a member segment appended.
    pub fn push_member(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Member(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this path points at the document root itself.
    pub fn is_document(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments below the document root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments below the root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Splits the path into display parts for excerpt rendering.
    ///
    /// The root label is the first part and index segments stay glued to the
    /// member they index, mirroring how the path displays:
    /// `<document>.included[0]` becomes `["<document>", "included[0]"]`.
    pub(crate) fn excerpt_parts(&self) -> Vec<String> {
        let mut parts = vec!["<document>".to_string()];
        for segment in &self.segments {
            match segment {
                PathSegment::Member(name) => parts.push(name.clone()),
                PathSegment::Index(idx) => {
                    // is_empty is unreachable here, the root label is part 0
                    if let Some(last) = parts.last_mut() {
                        last.push_str(&format!("[{}]", idx));
                    }
                }
            }
        }
        parts
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<document>")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Member(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
