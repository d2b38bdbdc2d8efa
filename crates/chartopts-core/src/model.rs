//! Typed chart option components.
//!
//! Every optional field is omitted on output when absent; an explicit `null`
//! on input reads as absent. Keys are the camelCase names of the option schema.

pub mod axis;
pub mod layer;
pub mod legend;
pub mod option;
pub mod series;
pub mod style;
pub mod timeline;
pub mod title;
pub mod toolbox;

pub use axis::{Axis, AxisLine, Grid};
pub use layer::OverlayLayer;
pub use legend::Legend;
pub use option::ChartOption;
pub use series::{DataPoint, MarkArea, MarkLine, MarkPoint, Series, SeriesDataItem};
pub use style::{AreaStyle, ItemStyle, Label, LineStyle, TextStyle};
pub use timeline::Timeline;
pub use title::Title;
pub use toolbox::{SaveAsImage, Toolbox, ToolboxFeature};
