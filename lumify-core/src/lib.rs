pub mod color;
pub mod orient;
pub mod recolor;
pub mod thresholds;
