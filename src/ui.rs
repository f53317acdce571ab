use crate::types::{Color, Pos, Viewport};

#[derive(Copy, Clone)]
pub(crate) enum Align {
    LeftTop,
    CenterTop,
}
impl Align {
    fn to_align2(self) -> egui::Align2 {
        match self {
            Align::LeftTop => egui::Align2::LEFT_TOP,
            Align::CenterTop => egui::Align2::CENTER_TOP,
        }
    }
}
pub(crate) struct Painter<'a> {
    painter: &'a egui::Painter,
    font_size: f32,
}
impl<'a> Painter<'a> {
    pub(crate) fn new(ui: &'a egui::Ui, font_size: f32) -> Self {
        Self {
            painter: ui.painter(),
            font_size,
        }
    }
    pub(crate) fn line_segment(&mut self, p: [Pos; 2], width: f32, color: &Color) {
        self.painter.line_segment(
            [p[0].to_pos2(), p[1].to_pos2()],
            egui::Stroke::new(width, color.to_col()),
        );
    }
    ///dotted line, short dashes with wide gaps
    pub(crate) fn dotted_line(&mut self, p: [Pos; 2], width: f32, color: &Color) {
        self.painter.extend(egui::Shape::dashed_line(
            &[p[0].to_pos2(), p[1].to_pos2()],
            egui::Stroke::new(width, color.to_col()),
            1.0,
            3.0,
        ));
    }
    pub(crate) fn polyline(&mut self, points: Vec<Pos>, width: f32, color: &Color) {
        self.painter.add(egui::Shape::line(
            points.into_iter().map(Pos::to_pos2).collect(),
            egui::Stroke::new(width, color.to_col()),
        ));
    }
    pub(crate) fn rect_filled(&mut self, view: Viewport, color: &Color) {
        self.painter
            .rect_filled(view.to_rect(), egui::CornerRadius::ZERO, color.to_col());
    }
    pub(crate) fn rect_stroke(&mut self, view: Viewport, width: f32, color: &Color) {
        self.painter.rect_stroke(
            view.to_rect(),
            egui::CornerRadius::ZERO,
            egui::Stroke::new(width, color.to_col()),
            egui::StrokeKind::Middle,
        );
    }
    pub(crate) fn text(&mut self, pos: Pos, align: Align, text: &str, color: &Color) {
        self.painter.text(
            pos.to_pos2(),
            align.to_align2(),
            text,
            egui::FontId::monospace(self.font_size),
            color.to_col(),
        );
    }
}
