mod app;
mod transform;

pub use app::{EguiFlapRenderer, FlapPlotApp};
pub use transform::PlotTransform;
