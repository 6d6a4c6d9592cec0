use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect, Sense, Shape, Stroke};
use sorter::{FlapGeometry, FlapPair, FlapRenderer, Segment, SorterError, VIEWPORT};

use crate::PlotTransform;

const WINDOW_TITLE: &str = "Flap Sorter";
const GRID_STEP: f64 = 0.5;

const LEFT_FLAP_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
const RIGHT_FLAP_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
const CENTERLINE_COLOR: Color32 = Color32::GRAY;
const FLAP_WIDTH: f32 = 3.0;

pub struct FlapPlotApp {
    geometry: FlapGeometry,
}

impl FlapPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, pair: FlapPair) -> Self {
        Self {
            geometry: FlapGeometry::from_pair(pair),
        }
    }

    fn draw_grid(&self, painter: &Painter, transform: &PlotTransform, color: Color32) {
        let stroke = Stroke::new(0.5, color.gamma_multiply(0.3));
        let label_color = color.gamma_multiply(0.8);
        let font = FontId::proportional(11.0);

        let steps_x = (VIEWPORT.width() / GRID_STEP).round() as i32;
        for i in 0..=steps_x {
            let x = VIEWPORT.x_min + i as f64 * GRID_STEP;
            let bottom = transform.to_screen(x, VIEWPORT.y_min);
            painter.line_segment([transform.to_screen(x, VIEWPORT.y_max), bottom], stroke);
            painter.text(
                bottom + vec2(0.0, 2.0),
                Align2::CENTER_TOP,
                format!("{x}"),
                font.clone(),
                label_color,
            );
        }

        let steps_y = (VIEWPORT.height() / GRID_STEP).round() as i32;
        for i in 0..=steps_y {
            let y = VIEWPORT.y_min + i as f64 * GRID_STEP;
            let left = transform.to_screen(VIEWPORT.x_min, y);
            painter.line_segment([left, transform.to_screen(VIEWPORT.x_max, y)], stroke);
            painter.text(
                left - vec2(4.0, 0.0),
                Align2::RIGHT_CENTER,
                format!("{y}"),
                font.clone(),
                label_color,
            );
        }
    }

    fn draw_centerline(&self, painter: &Painter, transform: &PlotTransform) {
        let line = [
            transform.to_screen(VIEWPORT.x_min, 0.0),
            transform.to_screen(VIEWPORT.x_max, 0.0),
        ];
        painter.extend(Shape::dashed_line(
            &line,
            Stroke::new(1.5, CENTERLINE_COLOR),
            8.0,
            5.0,
        ));
    }

    fn draw_flap(&self, painter: &Painter, transform: &PlotTransform, segment: &Segment, color: Color32) {
        let pivot = transform.to_screen(segment.pivot.x, segment.pivot.y);
        let tip = transform.to_screen(segment.tip.x, segment.tip.y);
        painter.line_segment([pivot, tip], Stroke::new(FLAP_WIDTH, color));
    }

    fn draw_legend(&self, painter: &Painter, frame: Rect, text_color: Color32) {
        let entries = [("Left Flap", LEFT_FLAP_COLOR), ("Right Flap", RIGHT_FLAP_COLOR)];
        let font = FontId::proportional(13.0);
        let row_height = 18.0;
        let size = vec2(120.0, row_height * entries.len() as f32 + 8.0);
        let legend = Rect::from_min_size(frame.right_top() + vec2(-size.x - 8.0, 8.0), size);

        painter.rect_filled(legend, 4.0, Color32::from_black_alpha(40));
        for (row, (name, color)) in entries.iter().enumerate() {
            let y = legend.top() + 4.0 + row_height * (row as f32 + 0.5);
            let start = pos2(legend.left() + 6.0, y);
            painter.line_segment([start, start + vec2(24.0, 0.0)], Stroke::new(FLAP_WIDTH, *color));
            painter.text(
                start + vec2(32.0, 0.0),
                Align2::LEFT_CENTER,
                *name,
                font.clone(),
                text_color,
            );
        }
    }
}

impl eframe::App for FlapPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.geometry.title());
            });

            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            // leave room for axis labels
            let plot_area = response.rect.shrink2(vec2(28.0, 18.0));
            let transform = PlotTransform::fit(plot_area, VIEWPORT);
            let text_color = ui.visuals().text_color();

            self.draw_grid(&painter, &transform, text_color);
            self.draw_centerline(&painter, &transform);
            self.draw_flap(&painter, &transform, &self.geometry.left, LEFT_FLAP_COLOR);
            self.draw_flap(&painter, &transform, &self.geometry.right, RIGHT_FLAP_COLOR);
            self.draw_legend(&painter, transform.frame(), text_color);
        });
    }
}

/// Opens a plot window per move and blocks until the operator closes it.
#[derive(Default)]
pub struct EguiFlapRenderer {}

impl EguiFlapRenderer {
    pub fn new() -> Self {
        EguiFlapRenderer {}
    }
}

impl FlapRenderer for EguiFlapRenderer {
    fn render(&mut self, pair: FlapPair) -> Result<(), SorterError> {
        log::info!("showing flap plot, close the window to continue");
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 540.0]),
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |cc| Ok(Box::new(FlapPlotApp::new(cc, pair)))),
        )
        .map_err(|e| SorterError::Render(e.to_string()))
    }
}
