//! Error types for chart option decoding.
//!
//! Decoding failures are raised at the offending field and carry a
//! [`FieldPath`] relative to that field, so a message such as
//! `$[2]: endpoint pair must have exactly 2 elements, found 3` points at the
//! third element of a mark-data array. When a converter runs inside serde the
//! same text travels as a custom message and `serde_json` appends the
//! line/column of the enclosing document.

use std::cell::RefCell;
use std::fmt;
use thiserror::Error;

/// Result type alias for chart option operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for whole-document operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure raised by a shape-aware converter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The JSON token kind is not one of the shapes the target type accepts.
    #[error("{}unexpected {found}, expected {expected}", .path.prefix())]
    UnexpectedToken {
        path: FieldPath,
        found: TokenKind,
        expected: &'static str,
    },

    /// A mark-data element was an array, but not a start/end pair.
    #[error(
        "{}endpoint pair must have exactly 2 elements, found {len}",
        .path.prefix()
    )]
    ShapeArity { path: FieldPath, len: usize },

    /// A color object carried a `type` that names no known fill.
    #[error("{}unknown color type `{kind}`", .path.prefix())]
    UnknownColorType { path: FieldPath, kind: String },

    /// A nested value had the right shape but failed its own decoding.
    #[error("{}{message}", .path.prefix())]
    Invalid { path: FieldPath, message: String },
}

impl DecodeError {
    /// Location of the failure relative to the decoded field.
    pub fn path(&self) -> &FieldPath {
        match self {
            DecodeError::UnexpectedToken { path, .. }
            | DecodeError::ShapeArity { path, .. }
            | DecodeError::UnknownColorType { path, .. }
            | DecodeError::Invalid { path, .. } => path,
        }
    }

    pub(crate) fn unexpected(
        path: FieldPath,
        value: &serde_json::Value,
        expected: &'static str,
    ) -> Self {
        DecodeError::UnexpectedToken {
            path,
            found: TokenKind::of(value),
            expected,
        }
    }

    pub(crate) fn invalid(path: FieldPath, err: impl fmt::Display) -> Self {
        DecodeError::Invalid {
            path,
            message: err.to_string(),
        }
    }

    /// The same failure, with its path re-anchored under `root`.
    pub fn rooted_at(self, root: &FieldPath) -> Self {
        match self {
            DecodeError::UnexpectedToken {
                path,
                found,
                expected,
            } => DecodeError::UnexpectedToken {
                path: root.join(&path),
                found,
                expected,
            },
            DecodeError::ShapeArity { path, len } => DecodeError::ShapeArity {
                path: root.join(&path),
                len,
            },
            DecodeError::UnknownColorType { path, kind } => DecodeError::UnknownColorType {
                path: root.join(&path),
                kind,
            },
            DecodeError::Invalid { path, message } => DecodeError::Invalid {
                path: root.join(&path),
                message,
            },
        }
    }

    /// Convert into a serde error for a `Deserialize` impl.
    ///
    /// serde errors only carry text, so the typed failure is also parked for
    /// the current thread; a path-tracking decode picks it back up.
    pub(crate) fn into_de_error<E: serde::de::Error>(self) -> E {
        let err = E::custom(&self);
        LAST_FAILURE.with(|slot| *slot.borrow_mut() = Some(self));
        err
    }
}

thread_local! {
    static LAST_FAILURE: RefCell<Option<DecodeError>> = const { RefCell::new(None) };
}

/// Take the most recent failure parked by [`DecodeError::into_de_error`].
pub(crate) fn take_last_failure() -> Option<DecodeError> {
    LAST_FAILURE.with(|slot| slot.borrow_mut().take())
}

/// Kind of a JSON token, as seen by shape-sniffing converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl TokenKind {
    pub fn of(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => TokenKind::Null,
            Value::Bool(_) => TokenKind::Bool,
            Value::Number(_) => TokenKind::Number,
            Value::String(_) => TokenKind::String,
            Value::Array(_) => TokenKind::Array,
            Value::Object(_) => TokenKind::Object,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Null => "null",
            TokenKind::Bool => "boolean",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Array => "array",
            TokenKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// One step from a field's root value into its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// JSONPath-like location inside a single field, rooted at `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        FieldPath::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Extend the path with an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Index(index));
        next
    }

    /// Extend the path with an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.segments.push(PathSegment::Key(key.into()));
        next
    }

    /// `self` followed by every segment of `tail`.
    pub fn join(&self, tail: &FieldPath) -> Self {
        let mut next = self.clone();
        next.segments.extend(tail.segments.iter().cloned());
        next
    }

    /// Message prefix, empty at the root so nested messages do not stutter.
    fn prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}: ", self)
        }
    }
}

impl From<&serde_path_to_error::Path> for FieldPath {
    fn from(path: &serde_path_to_error::Path) -> Self {
        use serde_path_to_error::Segment;
        let segments = path
            .iter()
            .filter_map(|segment| match segment {
                Segment::Seq { index } => Some(PathSegment::Index(*index)),
                Segment::Map { key } => Some(PathSegment::Key(key.clone())),
                Segment::Enum { .. } | Segment::Unknown => None,
            })
            .collect();
        FieldPath { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::Key(k) => write!(f, ".{}", k)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_display() {
        let path = FieldPath::root().index(2).index(1).key("coord");
        assert_eq!(path.to_string(), "$[2][1].coord");
        assert_eq!(FieldPath::root().to_string(), "$");
    }

    #[test]
    fn test_root_errors_have_no_prefix() {
        let err = DecodeError::unexpected(FieldPath::root(), &json!({}), "a string");
        assert_eq!(err.to_string(), "unexpected object, expected a string");
    }

    #[test]
    fn test_shape_arity_message_names_index_and_length() {
        let err = DecodeError::ShapeArity {
            path: FieldPath::root().index(4),
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "$[4]: endpoint pair must have exactly 2 elements, found 3"
        );
    }

    #[test]
    fn test_rooted_at_keeps_variant() {
        let root = FieldPath::root().key("series").index(1).key("markLine").key("data");
        let err = DecodeError::ShapeArity {
            path: FieldPath::root().index(0),
            len: 1,
        }
        .rooted_at(&root);
        assert_eq!(
            err,
            DecodeError::ShapeArity {
                path: root.index(0),
                len: 1,
            }
        );
        assert_eq!(err.path().to_string(), "$.series[1].markLine.data[0]");
    }

    #[test]
    fn test_parked_failure_is_taken_once() {
        let err = DecodeError::unexpected(FieldPath::root().index(3), &json!(true), "a string");
        let de_err: serde_json::Error = err.clone().into_de_error();
        assert_eq!(de_err.to_string(), err.to_string());
        assert_eq!(take_last_failure(), Some(err));
        assert_eq!(take_last_failure(), None);
    }

    #[test]
    fn test_token_kind_of() {
        assert_eq!(TokenKind::of(&json!(null)), TokenKind::Null);
        assert_eq!(TokenKind::of(&json!(true)), TokenKind::Bool);
        assert_eq!(TokenKind::of(&json!(1.5)), TokenKind::Number);
        assert_eq!(TokenKind::of(&json!("x")), TokenKind::String);
        assert_eq!(TokenKind::of(&json!([])), TokenKind::Array);
        assert_eq!(TokenKind::of(&json!({})), TokenKind::Object);
    }
}
