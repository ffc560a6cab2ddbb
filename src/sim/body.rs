//! Axis-aligned box shared by every simulated object.
//!
//! Coordinates are screen space: origin at the top-left of the world, y grows
//! downward. `pos` is the top-left corner of the box.

use bevy::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    size: Vec2,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "body size must be positive, got {}x{}",
            width,
            height
        );
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Box of the given size whose centre sits at `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
