//! Polymorphic value types and shape-aware converters.
//!
//! The chart option schema lets a single property be a bare number, a string,
//! a boolean, an array or a rich object depending on caller intent. The types
//! here turn each of those shape-shifting properties into a closed enum or a
//! normalized sequence:
//! - Scalar unions: `StringOrNumber`, `StringOrBool`, `NumberOrBool`
//! - `ListOrSingle<T>` and the `one_or_many` converter for bare-or-array values
//! - `CategoryData`, `LegendData` and `MarkData` for irregular mixed arrays
//! - `ColorValue` for solid colors, gradients and image patterns

pub mod axis_data;
pub mod color;
pub(crate) mod json;
pub mod legend_data;
pub mod list;
pub mod mark_data;
pub mod number;
pub mod scalar;

pub use axis_data::{AxisDataItem, CategoryData};
pub use color::{ColorStop, ColorValue, Gradient, ImagePattern};
pub use legend_data::{LegendData, LegendDataItem, LegendEntry};
pub use list::{ListOrSingle, Shape, one_or_many};
pub use mark_data::{MarkData, MarkDataItem, MarkEndpoint};
pub use scalar::{NumberOrBool, StringOrBool, StringOrNumber};
