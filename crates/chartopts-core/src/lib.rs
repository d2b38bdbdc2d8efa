//! Typed chart option documents with shape-aware JSON codecs.
//!
//! Chart option JSON is loosely shaped: one property may be a number, a
//! string, a boolean, an array or an object, and several arrays mix element
//! shapes. This crate decodes such documents into closed Rust types and writes
//! them back in the same shape.
//!
//! - [`codec`]: scalar unions, bare-or-array lists, the category/legend/mark
//!   data converters and color values
//! - [`model`]: the option components and the [`ChartOption`] root
//! - [`document`]: whole-document entry points
//! - [`error`]: [`Error`] and the path-carrying [`DecodeError`]
//!
//! ```
//! use chartopts_core::ChartOption;
//!
//! let option = ChartOption::from_json_str(
//!     r#"{"xAxis":{"type":"category","data":["Mon","Tue"]},"series":{"type":"bar","data":[3,5]}}"#,
//! )?;
//! assert_eq!(option.series().len(), 1);
//! assert_eq!(
//!     option.to_json_string()?,
//!     r#"{"xAxis":{"type":"category","data":["Mon","Tue"]},"series":[{"type":"bar","data":[3,5]}]}"#
//! );
//! # Ok::<(), chartopts_core::Error>(())
//! ```

pub mod codec;
pub mod document;
pub mod error;
pub mod model;

pub use codec::{
    AxisDataItem, CategoryData, ColorStop, ColorValue, Gradient, ImagePattern, LegendData,
    LegendDataItem, LegendEntry, ListOrSingle, MarkData, MarkDataItem, MarkEndpoint,
    NumberOrBool, Shape, StringOrBool, StringOrNumber,
};
pub use document::dropped_keys;
pub use error::{DecodeError, Error, FieldPath, PathSegment, Result, TokenKind};
pub use model::ChartOption;
