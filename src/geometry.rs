use serde::{Deserialize, Serialize};

pub mod path;

pub use self::path::{parse_path, path_length, resample, PathCommand};

/// A coordinate in logical canvas space.
///
/// Used both for guide points sampled along a letter and for stroke samples
/// captured from the input surface. Index order of a stroke is time order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline(always)]
    pub fn distance(&self, other: &Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline(always)]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Evaluates the quadratic Bezier `from -> control -> to` at `t` in `[0, 1]`.
pub fn quad_point(from: Point, control: Point, to: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    Point {
        x: a * from.x + b * control.x + c * to.x,
        y: a * from.y + b * control.y + c * to.y,
    }
}

/// Maps viewport coordinates onto the logical canvas the letter paths live in.
///
/// The scorer knows nothing about device pixel ratio or CSS scaling, so the
/// input surface has to push every sample through one of these first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasTransform {
    /// Top-left corner of the rendered canvas in viewport coordinates.
    pub origin: Point,
    pub rendered_width: f32,
    pub rendered_height: f32,
    pub logical_width: f32,
    pub logical_height: f32,
}

impl CanvasTransform {
    pub fn new(origin: Point, rendered: (f32, f32), logical: (f32, f32)) -> Self {
        Self {
            origin,
            rendered_width: rendered.0,
            rendered_height: rendered.1,
            logical_width: logical.0,
            logical_height: logical.1,
        }
    }

    /// Identity mapping for a canvas rendered at its logical size.
    pub fn identity(size: f32) -> Self {
        Self::new(Point::default(), (size, size), (size, size))
    }

    pub fn to_logical(&self, client: Point) -> Point {
        let sx = scale_factor(self.logical_width, self.rendered_width);
        let sy = scale_factor(self.logical_height, self.rendered_height);
        Point {
            x: (client.x - self.origin.x) * sx,
            y: (client.y - self.origin.y) * sy,
        }
    }
}

// A collapsed canvas reports zero size; keep samples unscaled rather than infinite.
fn scale_factor(logical: f32, rendered: f32) -> f32 {
    if rendered > 0.0 && rendered.is_finite() {
        logical / rendered
    } else {
        1.0
    }
}
