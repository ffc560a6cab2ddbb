use super::body::Body;

/// Index of a platform inside its level. Enemies use it to look up their
/// patrol bound without owning the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(pub usize);

/// Static collidable rectangle. Geometry is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    body: Body,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}
