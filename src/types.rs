#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub(crate) fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub(crate) fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    pub(crate) fn to_col(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub(crate) fn to_pos2(self) -> egui::Pos2 {
        egui::Pos2 {
            x: self.x,
            y: self.y,
        }
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}
impl Vec2 {
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
///a graph of one function of x, rendered into a host supplied surface
pub struct Graph {
    ///the plotted function
    pub func: fn(f64) -> f64,
    ///formula text used in the caption
    pub name: String,
    ///x bounds of the plot
    pub bound: Vec2,
    ///distance between labeled ticks on the x axis
    pub tick_dx: f64,
    ///space between the surface edge and the plot on all sides
    pub margin: f32,
    ///width of the function line
    pub line_width: f32,
    ///width of the axis lines
    pub axis_width: f32,
    ///width of gridlines and tick marks
    pub grid_width: f32,
    pub font_size: f32,
    ///function line color
    pub main_color: Color,
    ///axis color
    pub axis_color: Color,
    ///gridline color
    pub axis_color_light: Color,
    ///plot area fill
    pub background_color: Color,
    ///plot area outline
    pub border_color: Color,
    pub(crate) text_color: Color,
    pub(crate) screen: Vec2,
    pub(crate) range: Vec2,
}
///pixel rectangle the graph is mapped into, the surface minus margins
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}
impl Viewport {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
    pub(crate) fn to_rect(self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::Pos2::new(self.left, self.top),
            egui::Vec2::new(self.width, self.height),
        )
    }
}
