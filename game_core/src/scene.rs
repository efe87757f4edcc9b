//! Draw list handed to the host each frame

use glam::Vec2;

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A filled primitive in field coordinates (y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect {
        center: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Text anchored at its horizontal center
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub texts: Vec<TextItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, center: Vec2, size: Vec2, color: Color) {
        self.shapes.push(Shape::Rect {
            center,
            size,
            color,
        });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: Color) {
        self.texts.push(TextItem {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    /// Does any text item read exactly `text`?
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}
