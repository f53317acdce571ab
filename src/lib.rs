pub mod types;
mod ui;
use crate::types::*;
use crate::ui::{Align, Painter};
use tracing::debug;

///horizontal distance between function samples, shared by range
///estimation and curve drawing so both see the same singularities
pub const SAMPLE_STEP: f64 = 0.001;
///vertical range used when the samples give none
const FALLBACK_RANGE: Vec2 = Vec2 { x: -5.0, y: 5.0 };
///length of the tick marks under the plot
const TICK_LEN: f32 = 6.0;

impl Graph {
    ///creates a new graph of func over [start, end] with labeled ticks
    ///every tick_dx, name is the formula text shown in the caption
    pub fn new(func: fn(f64) -> f64, name: String, start: f64, end: f64, tick_dx: f64) -> Self {
        let mut graph = Graph {
            func,
            name,
            bound: Vec2::new(start, end),
            tick_dx,
            margin: 50.0,
            line_width: 2.0,
            axis_width: 2.0,
            grid_width: 1.0,
            font_size: 13.0,
            main_color: Color::default(),
            axis_color: Color::default(),
            axis_color_light: Color::default(),
            background_color: Color::default(),
            border_color: Color::default(),
            text_color: Color::default(),
            screen: Vec2::splat(0.0),
            range: Vec2::splat(0.0),
        };
        graph.set_light_mode();
        graph
    }
    //use dark mode default colors
    pub fn set_dark_mode(&mut self) {
        self.axis_color = Color::splat(220);
        self.axis_color_light = Color::splat(35);
        self.background_color = Color::splat(0);
        self.border_color = Color::splat(128);
        self.main_color = Color::new(255, 85, 85);
        self.set_text_color(Color::splat(255));
    }
    //use light mode default colors
    pub fn set_light_mode(&mut self) {
        self.axis_color = Color::splat(0);
        self.axis_color_light = Color::splat(211);
        self.background_color = Color::splat(255);
        self.border_color = Color::splat(128);
        self.main_color = Color::new(255, 0, 0);
        self.set_text_color(Color::splat(0));
    }
    ///sets the font color
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }
    ///sets screen dimensions
    pub fn set_screen(&mut self, width: f64, height: f64) {
        let screen = Vec2::new(width, height);
        if screen != self.screen {
            debug!(width, height, "surface resized");
            self.screen = screen;
        }
    }
    ///pixel rectangle the plot maps into, the surface minus margins,
    ///floored at 1px so extreme shrink keeps draw calls valid
    pub fn viewport(&self) -> Viewport {
        Viewport {
            left: self.margin,
            top: self.margin,
            width: (self.screen.x as f32 - 2.0 * self.margin).max(1.0),
            height: (self.screen.y as f32 - 2.0 * self.margin).max(1.0),
        }
    }
    ///min/max finite output over the sampled domain, falling back to a
    ///fixed range when no sample is finite or the range would be empty
    pub fn update_range(&mut self) -> Vec2 {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut x = self.bound.x;
        while x <= self.bound.y {
            let y = (self.func)(x);
            if y.is_finite() {
                min = min.min(y);
                max = max.max(y);
            }
            x += SAMPLE_STEP;
        }
        self.range = if !min.is_finite() || !max.is_finite() || min == max {
            FALLBACK_RANGE
        } else {
            Vec2::new(min, max)
        };
        self.range
    }
    ///tick positions from one bound to the other stepping by tick_dx,
    ///the far endpoint kept within float tolerance
    pub fn ticks(&self) -> Vec<f64> {
        let mut ticks = Vec::new();
        let mut x = self.bound.x;
        while x <= self.bound.y + 1e-9 {
            ticks.push(x);
            x += self.tick_dx;
        }
        ticks
    }
    ///the curve as screen space polylines, split wherever a sample
    ///leaves the finite reals, expects set_screen and update_range to
    ///have run for the current frame
    pub fn curve(&self) -> Vec<Vec<Pos>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        let mut x = self.bound.x;
        while x <= self.bound.y {
            let y = (self.func)(x);
            if y.is_finite() {
                current.push(self.to_screen(x, y));
            } else if current.len() > 1 {
                segments.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
            x += SAMPLE_STEP;
        }
        if current.len() > 1 {
            segments.push(current);
        }
        segments
    }
    ///caption describing the function, its bounds and the tick spacing
    pub fn caption(&self) -> String {
        format!(
            "{},  x ∈ [{}; {}],  Δx = {}",
            self.name, self.bound.x, self.bound.y, self.tick_dx
        )
    }
    fn to_screen(&self, x: f64, y: f64) -> Pos {
        let view = self.viewport();
        let sx = (x - self.bound.x) / (self.bound.y - self.bound.x);
        let sy = (y - self.range.x) / (self.range.y - self.range.x);
        Pos::new(
            view.left + (sx * view.width as f64) as f32,
            view.bottom() - (sy * view.height as f64) as f32,
        )
    }
    ///repaints the screen
    pub fn update(&mut self, ctx: &egui::Context, ui: &egui::Ui) {
        let rect = ctx.available_rect();
        self.set_screen(rect.width() as f64, rect.height() as f64);
        self.update_range();
        let mut painter = Painter::new(ui, self.font_size);
        self.write_frame(&mut painter);
        self.write_axis(&mut painter);
        self.write_grid(&mut painter);
        self.plot(&mut painter);
        self.write_text(&mut painter);
    }
    fn write_frame(&self, painter: &mut Painter) {
        let view = self.viewport();
        painter.rect_filled(view, &self.background_color);
        painter.rect_stroke(view, self.grid_width, &self.border_color);
    }
    ///zero line when the range straddles it, then the y axis on the
    ///left edge of the plot
    fn write_axis(&self, painter: &mut Painter) {
        let view = self.viewport();
        if self.range.x < 0.0 && 0.0 < self.range.y {
            painter.line_segment(
                [
                    self.to_screen(self.bound.x, 0.0),
                    self.to_screen(self.bound.y, 0.0),
                ],
                self.axis_width,
                &self.axis_color,
            );
        }
        painter.line_segment(
            [
                Pos::new(view.left, view.top),
                Pos::new(view.left, view.bottom()),
            ],
            self.axis_width,
            &self.axis_color,
        );
    }
    ///per tick a dotted gridline over the full plot height, a tick mark
    ///under the plot and a one decimal label, then five dotted lines
    ///cutting the value range into six bands
    fn write_grid(&self, painter: &mut Painter) {
        let view = self.viewport();
        for x in self.ticks() {
            let p = self.to_screen(x, self.range.x);
            painter.dotted_line(
                [Pos::new(p.x, view.top), Pos::new(p.x, view.bottom())],
                self.grid_width,
                &self.axis_color_light,
            );
            painter.line_segment(
                [
                    Pos::new(p.x, view.bottom()),
                    Pos::new(p.x, view.bottom() + TICK_LEN),
                ],
                self.grid_width,
                &self.axis_color,
            );
            painter.text(
                Pos::new(p.x, view.bottom() + TICK_LEN),
                Align::CenterTop,
                &format!("{x:.1}"),
                &self.text_color,
            );
        }
        for i in 1..=5 {
            let y = self.range.x + i as f64 * (self.range.y - self.range.x) / 6.0;
            painter.dotted_line(
                [
                    self.to_screen(self.bound.x, y),
                    self.to_screen(self.bound.y, y),
                ],
                self.grid_width,
                &self.axis_color_light,
            );
        }
    }
    ///draws the function, restarting the line wherever a sample is not
    ///finite
    fn plot(&self, painter: &mut Painter) {
        for segment in self.curve() {
            painter.polyline(segment, self.line_width, &self.main_color);
        }
    }
    fn write_text(&self, painter: &mut Painter) {
        let view = self.viewport();
        painter.text(
            Pos::new(view.right() + 15.0, view.bottom() - 15.0),
            Align::LeftTop,
            "X",
            &self.text_color,
        );
        painter.text(
            Pos::new(view.left - 15.0, view.top - 20.0),
            Align::LeftTop,
            "Y",
            &self.text_color,
        );
        painter.text(
            Pos::new(view.left, view.top - 30.0),
            Align::LeftTop,
            &self.caption(),
            &self.text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(x: f64) -> f64 {
        (x + 2.0) * (x + 2.0) / (x * x + 1.0).sqrt()
    }

    fn graph() -> Graph {
        Graph::new(f, "y = (x+2)^2/√(x^2+1)".to_string(), 2.3, 8.3, 0.6)
    }

    #[test]
    fn range_of_monotone_curve() {
        let mut g = graph();
        g.set_screen(900.0, 550.0);
        let range = g.update_range();
        // f is strictly increasing on [2.3, 8.3], so the sampled min is
        // the left endpoint and the max a sample within one step of the
        // right endpoint
        assert!((range.x - f(2.3)).abs() < 1e-9);
        assert!((range.y - f(8.3)).abs() < 5e-3);
        assert_eq!(g.update_range(), range);
    }

    #[test]
    fn mapping_hits_viewport_corners() {
        let mut g = graph();
        g.set_screen(900.0, 550.0);
        g.update_range();
        let view = g.viewport();
        let bl = g.to_screen(g.bound.x, g.range.x);
        let tr = g.to_screen(g.bound.y, g.range.y);
        assert!((bl.x - view.left).abs() < 0.5);
        assert!((bl.y - view.bottom()).abs() < 0.5);
        assert!((tr.x - view.right()).abs() < 0.5);
        assert!((tr.y - view.top).abs() < 0.5);
    }

    #[test]
    fn constant_function_falls_back() {
        let mut g = Graph::new(|_| 3.0, "y = 3".to_string(), 2.3, 8.3, 0.6);
        g.set_screen(900.0, 550.0);
        assert_eq!(g.update_range(), FALLBACK_RANGE);
    }

    #[test]
    fn nowhere_finite_function_falls_back() {
        let mut g = Graph::new(|_| f64::NAN, "y = 0/0".to_string(), 2.3, 8.3, 0.6);
        g.set_screen(900.0, 550.0);
        assert_eq!(g.update_range(), FALLBACK_RANGE);
    }

    #[test]
    fn curve_breaks_at_singularity() {
        let mut g = Graph::new(
            |x| {
                if (4.9..=5.1).contains(&x) {
                    f64::NAN
                } else {
                    (x - 5.0).recip()
                }
            },
            "y = 1/(x-5)".to_string(),
            2.3,
            8.3,
            0.6,
        );
        g.set_screen(900.0, 550.0);
        g.update_range();
        let cut = g.to_screen(5.0, 0.0).x;
        let segments = g.curve();
        assert!(segments.len() >= 2);
        for segment in &segments {
            assert!(segment.iter().all(|p| p.x < cut) || segment.iter().all(|p| p.x > cut));
        }
    }

    #[test]
    fn viewport_never_collapses() {
        let mut g = graph();
        g.set_screen(10.0, 40.0);
        let view = g.viewport();
        assert!(view.width >= 1.0);
        assert!(view.height >= 1.0);
    }

    #[test]
    fn ticks_cover_both_bounds() {
        let g = graph();
        let ticks = g.ticks();
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 2.3);
        assert!((ticks[ticks.len() - 1] - 8.3).abs() < 1e-6);
        assert_eq!(format!("{:.1}", ticks[0]), "2.3");
        assert_eq!(format!("{:.1}", ticks[10]), "8.3");
    }

    #[test]
    fn caption_lists_domain_and_spacing() {
        let g = graph();
        assert_eq!(
            g.caption(),
            "y = (x+2)^2/√(x^2+1),  x ∈ [2.3; 8.3],  Δx = 0.6"
        );
    }
}
