use crate::follow::{self, follow_step};
use crate::path::PlotPath;
use crate::plotter::Plotter;
use crate::utils::geometry::{to_paper, Paper};
use eframe::egui::{self, Color32, Pos2, Stroke, Ui, Vec2};
use std::time::Instant;

/// The canvas window: tracks the cursor, runs the follow loop, and mirrors
/// every stroke to both the on-screen path and the plotter.
pub struct SketchApp {
    plotter: Plotter,
    paper: Paper,
    path: PlotPath,
    /// Raw cursor position, updated on every pointer move.
    cursor: Pos2,
    /// Smoothed pen position, updated only by the follow tick.
    current: Pos2,
    pen_down: bool,
    last_tick: Instant,
}

impl SketchApp {
    pub fn new(plotter: Plotter, paper: Paper) -> Self {
        SketchApp {
            plotter,
            paper,
            path: PlotPath::default(),
            cursor: Pos2::new(1.0, 1.0),
            current: Pos2::new(1.0, 1.0),
            pen_down: false,
            last_tick: Instant::now(),
        }
    }

    /// One follow-loop tick: smooth toward the cursor, then take the
    /// unified go-to path in both screen and paper space.
    fn tick(&mut self, window: Vec2) {
        self.current = follow_step(self.current, self.cursor, self.pen_down);
        self.go_to(window);
    }

    fn go_to(&mut self, window: Vec2) {
        // A zero-sized window would make the paper mapping divide by zero.
        if window.x <= 0.0 || window.y <= 0.0 {
            return;
        }

        let target = to_paper(self.current, window, self.paper);

        if self.pen_down {
            self.path.line_to(self.current);
        } else {
            self.path.move_to(self.current);
        }

        self.plotter.go_to(target, self.pen_down);
    }

    fn handle_pointer(&mut self, ctx: &egui::Context) {
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            self.cursor = pos;
        }

        // The physical pen drops right away, at wherever the last tick
        // left it; only the travel is smoothed.
        if ctx.input(|i| i.pointer.primary_pressed()) {
            self.pen_down = true;
            self.plotter.set_pen(true);
        }

        if ctx.input(|i| i.pointer.primary_released()) {
            self.pen_down = false;
            self.plotter.set_pen(false);
        }
    }

    fn paint(&self, ui: &Ui) {
        let painter = ui.painter();
        let stroke = Stroke::new(1.5, ui.visuals().text_color());

        for subpath in self.path.subpaths() {
            for pair in subpath.windows(2) {
                painter.line_segment([pair[0], pair[1]], stroke);
            }
        }

        if let Some(last) = self.path.last_point() {
            painter.circle_stroke(last, 5.0, stroke);
        }

        // Crosshair through the raw cursor, full window in both axes.
        let rect = ui.ctx().screen_rect();
        let guide = Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 0, 0, 50));
        painter.line_segment(
            [
                Pos2::new(self.cursor.x, rect.top()),
                Pos2::new(self.cursor.x, rect.bottom()),
            ],
            guide,
        );
        painter.line_segment(
            [
                Pos2::new(rect.left(), self.cursor.y),
                Pos2::new(rect.right(), self.cursor.y),
            ],
            guide,
        );
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_pointer(ctx);

        // Re-armed only after the previous tick finished, so a stalled
        // hardware call delays later ticks instead of piling them up.
        if self.last_tick.elapsed() >= follow::TICK {
            self.last_tick = Instant::now();
            self.tick(ctx.screen_rect().size());
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.paint(ui));

        ctx.request_repaint_after(follow::TICK);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.plotter.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotter::DetachedPort;
    use eframe::egui::{pos2, vec2};

    const WINDOW: Vec2 = vec2(720.0, 576.0);

    fn offline_app() -> SketchApp {
        SketchApp::new(Plotter::new(Box::new(DetachedPort)), Paper::FULL_BED)
    }

    #[test]
    fn free_tick_snaps_to_cursor_without_segments() {
        let mut app = offline_app();
        app.cursor = pos2(100.0, 80.0);

        app.tick(WINDOW);

        assert_eq!(app.current, pos2(100.0, 80.0));
        assert_eq!(app.path.segment_count(), 0);
    }

    #[test]
    fn drag_ticks_grow_the_visible_path_while_offline() {
        let mut app = offline_app();
        app.cursor = pos2(100.0, 100.0);
        app.current = pos2(0.0, 0.0);
        app.pen_down = true;

        for _ in 0..5 {
            app.tick(WINDOW);
        }

        assert_eq!(app.path.segment_count(), 5);
        assert!(!app.plotter.is_connected());
    }

    #[test]
    fn zero_sized_window_tick_draws_nothing() {
        let mut app = offline_app();
        app.cursor = pos2(50.0, 50.0);

        app.tick(vec2(0.0, 576.0));
        app.tick(vec2(720.0, 0.0));

        assert_eq!(app.path.last_point(), None);
    }
}
