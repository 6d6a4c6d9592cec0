use egui::{pos2, Pos2, Rect};
use sorter::Viewport;

/// Maps plot coordinates into a screen rectangle with equal aspect ratio.
///
/// The viewport is scaled to fit and centered; the unused margin on the
/// longer side stays empty. Screen y grows downward, plot y grows upward.
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    viewport: Viewport,
    center: Pos2,
    scale: f32,
}

impl PlotTransform {
    pub fn fit(screen: Rect, viewport: Viewport) -> Self {
        let scale_x = screen.width() / viewport.width() as f32;
        let scale_y = screen.height() / viewport.height() as f32;
        Self {
            viewport,
            center: screen.center(),
            scale: scale_x.min(scale_y).max(0.0),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let mid_x = (self.viewport.x_min + self.viewport.x_max) / 2.0;
        let mid_y = (self.viewport.y_min + self.viewport.y_max) / 2.0;
        pos2(
            self.center.x + (x - mid_x) as f32 * self.scale,
            self.center.y - (y - mid_y) as f32 * self.scale,
        )
    }

    /// Screen rectangle covered by the whole viewport
    pub fn frame(&self) -> Rect {
        Rect::from_two_pos(
            self.to_screen(self.viewport.x_min, self.viewport.y_min),
            self.to_screen(self.viewport.x_max, self.viewport.y_max),
        )
    }
}
