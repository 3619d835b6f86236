use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::geometry::{CenterKind, CenterSet, Point, Triangle};
use crate::quiz::Quiz;

pub const TRIANGLE_STROKE_WIDTH: f32 = 2.0;
pub const CENTER_RADIUS: f32 = 5.0;
pub const LABEL_OFFSET: f32 = 10.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;

pub fn center_color(kind: CenterKind) -> Color32 {
    match kind {
        CenterKind::Centroid => Color32::from_rgb(255, 0, 0),
        CenterKind::Circumcenter => Color32::from_rgb(0, 0, 255),
        CenterKind::Incenter => Color32::from_rgb(0, 128, 0),
        CenterKind::Orthocenter => Color32::from_rgb(128, 0, 128),
    }
}

/// Drawing surface the quiz is shown on
pub trait Renderer {
    fn clear(&mut self);
    fn draw_triangle(&mut self, triangle: &Triangle);
    fn draw_center(&mut self, kind: CenterKind, point: Point, highlighted: bool);
    fn draw_click(&mut self, kind: CenterKind, point: Point);
}

/// Everything that is visible for the current quiz state
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub triangle: Triangle,
    /// Only revealed once the game is over.
    pub centers: Option<CenterSet>,
    pub highlight: Option<CenterKind>,
    pub clicks: Vec<(CenterKind, Point)>,
}

impl Scene {
    pub fn from_quiz(quiz: &Quiz, highlight: Option<CenterKind>) -> Option<Self> {
        let challenge = quiz.challenge()?;
        let revealed = quiz.is_finished();
        Some(Self {
            triangle: challenge.triangle,
            centers: revealed.then_some(challenge.centers),
            highlight: highlight.filter(|_| revealed),
            clicks: quiz.results().iter().map(|r| (r.kind, r.click)).collect(),
        })
    }
}

pub fn render_scene<R: Renderer + ?Sized>(renderer: &mut R, scene: &Scene) {
    renderer.clear();
    renderer.draw_triangle(&scene.triangle);
    if let Some(centers) = &scene.centers {
        for (kind, point) in centers.iter() {
            renderer.draw_center(kind, point, scene.highlight == Some(kind));
        }
    }
    for &(kind, point) in &scene.clicks {
        renderer.draw_click(kind, point);
    }
}

/// Maps the quiz plane `[0, width] × [0, height]` into a screen rect
///
/// The plane keeps its aspect ratio and is centered inside the rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneTransform {
    plane_width: f64,
    plane_height: f64,
    origin: Pos2,
    scale: f32,
}

impl PlaneTransform {
    pub fn new(plane_width: f64, plane_height: f64, screen: Rect) -> Self {
        let scale_x = screen.width() / plane_width.max(f64::EPSILON) as f32;
        let scale_y = screen.height() / plane_height.max(f64::EPSILON) as f32;
        let scale = scale_x.min(scale_y).max(f32::EPSILON);
        let size = egui::vec2(plane_width as f32 * scale, plane_height as f32 * scale);
        Self {
            plane_width,
            plane_height,
            origin: screen.center() - size / 2.0,
            scale,
        }
    }

    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.origin + Pos2::from(point).to_vec2() * self.scale
    }

    pub fn to_plane(&self, pos: Pos2) -> Point {
        let offset = (pos - self.origin) / self.scale;
        Point::new(f64::from(offset.x), f64::from(offset.y))
    }

    /// Screen area covered by the plane.
    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_max(
            self.to_screen(Point::ZERO),
            self.to_screen(Point::new(self.plane_width, self.plane_height)),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.plane_width).contains(&point.x)
            && (0.0..=self.plane_height).contains(&point.y)
    }
}

/// [`Renderer`] painting onto an egui layer
pub struct PainterRenderer<'a> {
    painter: &'a Painter,
    transform: PlaneTransform,
}

impl<'a> PainterRenderer<'a> {
    pub fn new(painter: &'a Painter, transform: PlaneTransform) -> Self {
        Self { painter, transform }
    }
}

impl Renderer for PainterRenderer<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.transform.screen_rect(), 0.0, Color32::WHITE);
    }

    fn draw_triangle(&mut self, triangle: &Triangle) {
        let points = triangle
            .vertices()
            .into_iter()
            .map(|p| self.transform.to_screen(p))
            .collect();
        self.painter.add(Shape::closed_line(
            points,
            Stroke::new(TRIANGLE_STROKE_WIDTH, Color32::BLACK),
        ));
    }

    fn draw_center(&mut self, kind: CenterKind, point: Point, highlighted: bool) {
        let pos = self.transform.to_screen(point);
        let color = center_color(kind);
        self.painter.circle_filled(pos, CENTER_RADIUS, color);
        if highlighted {
            self.painter
                .circle_stroke(pos, CENTER_RADIUS * 2.0, Stroke::new(2.0, color));
        }
        self.painter.text(
            pos + egui::vec2(LABEL_OFFSET, 0.0),
            Align2::LEFT_CENTER,
            kind.symbol(),
            FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }

    fn draw_click(&mut self, kind: CenterKind, point: Point) {
        let pos = self.transform.to_screen(point);
        let stroke = Stroke::new(1.5, center_color(kind));
        let d = CENTER_RADIUS * 0.8;
        self.painter
            .line_segment([pos + egui::vec2(-d, -d), pos + egui::vec2(d, d)], stroke);
        self.painter
            .line_segment([pos + egui::vec2(-d, d), pos + egui::vec2(d, -d)], stroke);
    }
}
