/// Common data types for hardware abstraction interfaces
pub use nalgebra::{Point2, Vector2};

/// 2D point in plot space using nalgebra
pub type Point2d = Point2<f64>;

/// 2D direction/offset in plot space
pub type Vector2d = Vector2<f64>;
