pub mod axis;
pub mod data_set;
pub mod types;
pub mod value_range;

pub use axis::Axis;
pub use data_set::{ChartLabel, ChartSet, Point};
pub use types::{Frame, Padding, Viewport};
pub use value_range::ValueRange;
