use std::{fmt, ops::Sub};

pub type Scalar = f64;
pub const EPSILON: f64 = f64::EPSILON;

/// Pixel coordinate or offset in image space, origin at the top-left corner.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point(pub [Scalar; 2]);

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point([x, y]) = self;
        write!(f, "{},{}", x, y)
    }
}

impl Point {
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self([x, y])
    }

    /// Get `x` component of the point
    #[inline]
    pub fn x(self) -> Scalar {
        self.0[0]
    }

    /// Get `y` component of the point
    #[inline]
    pub fn y(self) -> Scalar {
        self.0[1]
    }

    /// Length of the vector (distance from the origin)
    ///
    /// Computed as `sqrt(x² + y²)` rather than `hypot` so results match the
    /// plain formula bit for bit.
    #[inline]
    pub fn length(self) -> Scalar {
        let Self([x, y]) = self;
        (x * x + y * y).sqrt()
    }

    /// Distance between two points
    #[inline]
    pub fn dist(self, other: Self) -> Scalar {
        (self - other).length()
    }
}

impl From<(Scalar, Scalar)> for Point {
    #[inline]
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Self([x, y])
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        let Point([x0, y0]) = self;
        let Point([x1, y1]) = other;
        Point([x0 - x1, y0 - y1])
    }
}
