use crate::{Config, Point, RGB, Scalar};
use std::fmt;

/// Color used for every pixel outside of the circle
pub const BACKGROUND: RGB = RGB::new(220, 220, 220);

/// Anything that can assign a color to a pixel coordinate
pub trait Paint: fmt::Debug {
    /// Color at a given point in image space
    fn at(&self, point: Point) -> RGB;
}

/// Radial color field: a solid inner disk of `center_color` that fades
/// linearly into `edge_color` at the circle boundary, with a flat background
/// outside of it.
///
/// The circle is centered in the image and its radius is half of the smaller
/// image dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TurrellCircle {
    center: Point,
    max_radius: Scalar,
    inner_ratio: Scalar,
    center_color: RGB,
    edge_color: RGB,
}

impl TurrellCircle {
    pub fn new(
        width: u32,
        height: u32,
        inner_ratio: Scalar,
        center_color: RGB,
        edge_color: RGB,
    ) -> Self {
        let center = Point::new(width as Scalar / 2.0, height as Scalar / 2.0);
        let max_radius = width.min(height) as Scalar / 2.0;
        Self {
            center,
            max_radius,
            inner_ratio,
            center_color,
            edge_color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let circle = Self::new(
            config.width,
            config.height,
            config.circle_radius_ratio,
            config.center_color(),
            config.edge_color(),
        );
        tracing::debug!(
            center = ?circle.center,
            max_radius = circle.max_radius,
            inner_ratio = circle.inner_ratio,
            "[circle]"
        );
        circle
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn max_radius(&self) -> Scalar {
        self.max_radius
    }

    /// Distance from the center normalized by the circle radius
    #[inline]
    pub fn dist_ratio(&self, point: Point) -> Scalar {
        point.dist(self.center) / self.max_radius
    }

    /// Blend factor for a normalized distance, `None` outside of the circle
    ///
    /// Distances up to and including the inner ratio map to `0`, the rest of
    /// the radius maps linearly onto `(0, 1]`. With an inner ratio of `1` the
    /// whole disk is inner disk, so the denominator is never zero.
    #[inline]
    pub fn offset(&self, dist_ratio: Scalar) -> Option<Scalar> {
        if dist_ratio > 1.0 {
            None
        } else if dist_ratio <= self.inner_ratio {
            Some(0.0)
        } else {
            Some((dist_ratio - self.inner_ratio) / (1.0 - self.inner_ratio))
        }
    }
}

impl Paint for TurrellCircle {
    #[inline]
    fn at(&self, point: Point) -> RGB {
        match self.offset(self.dist_ratio(point)) {
            None => BACKGROUND,
            Some(t) => self.center_color.lerp(self.edge_color, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;

    const RED: RGB = RGB::new(255, 0, 0);
    const BLUE: RGB = RGB::new(0, 0, 255);

    #[test]
    fn test_geometry() {
        let circle = TurrellCircle::new(300, 200, 0.4, RED, BLUE);
        assert_eq!(circle.center(), Point::new(150.0, 100.0));
        assert_approx_eq!(circle.max_radius(), 100.0);
        assert_approx_eq!(circle.dist_ratio(Point::new(150.0, 100.0)), 0.0);
        assert_approx_eq!(circle.dist_ratio(Point::new(200.0, 100.0)), 0.5);
        assert_approx_eq!(circle.dist_ratio(Point::new(150.0, 0.0)), 1.0);

        // odd dimensions keep the fractional center
        let circle = TurrellCircle::new(5, 7, 0.4, RED, BLUE);
        assert_eq!(circle.center(), Point::new(2.5, 3.5));
        assert_approx_eq!(circle.max_radius(), 2.5);
    }

    #[test]
    fn test_offset() {
        let circle = TurrellCircle::new(4, 4, 0.5, RED, BLUE);
        assert_eq!(circle.offset(0.0), Some(0.0));
        // tie with the inner ratio stays inside the solid disk
        assert_eq!(circle.offset(0.5), Some(0.0));
        assert_approx_eq!(circle.offset(0.75).unwrap(), 0.5);
        assert_approx_eq!(circle.offset(1.0).unwrap(), 1.0);
        assert_eq!(circle.offset(1.0 + 1e-9), None);
    }

    #[test]
    fn test_offset_zero_ratio() {
        let circle = TurrellCircle::new(4, 4, 0.0, RED, BLUE);
        assert_eq!(circle.offset(0.0), Some(0.0));
        assert_approx_eq!(circle.offset(0.1).unwrap(), 0.1);
        assert_approx_eq!(circle.offset(0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_offset_full_ratio() {
        let circle = TurrellCircle::new(4, 4, 1.0, RED, BLUE);
        for dist_ratio in [0.0, 0.3, 0.99, 1.0] {
            assert_eq!(circle.offset(dist_ratio), Some(0.0));
        }
        assert_eq!(circle.offset(1.01), None);
        assert_eq!(circle.at(Point::new(3.0, 3.0)), RED);
        assert_eq!(circle.at(Point::new(0.0, 0.0)), BACKGROUND);
    }

    #[test]
    fn test_paint() {
        let circle = TurrellCircle::new(4, 4, 0.5, RED, BLUE);
        assert_eq!(circle.at(Point::new(2.0, 2.0)), RED);
        assert_eq!(circle.at(Point::new(1.0, 2.0)), RED);
        assert_eq!(circle.at(Point::new(2.0, 1.0)), RED);
        // dist_ratio = sqrt(2) / 2, t = 0.4142..
        assert_eq!(circle.at(Point::new(1.0, 1.0)), RGB::new(149, 0, 105));
        assert_eq!(circle.at(Point::new(3.0, 3.0)), RGB::new(149, 0, 105));
        assert_eq!(circle.at(Point::new(0.0, 2.0)), BLUE);
        assert_eq!(circle.at(Point::new(0.0, 0.0)), BACKGROUND);
        assert_eq!(circle.at(Point::new(3.0, 0.0)), BACKGROUND);
        assert_eq!(circle.at(Point::new(0.0, 3.0)), BACKGROUND);
    }

    #[test]
    fn test_monotonic() -> Result<(), crate::ColorError> {
        let c0: RGB = "#00AEC9".parse()?;
        let c1: RGB = "#0D6586".parse()?;
        let circle = TurrellCircle::new(200, 100, 0.4, c0, c1);
        let mut prev = circle.at(Point::new(100.0, 50.0));
        assert_eq!(prev, c0);
        for x in 101..=150 {
            let color = circle.at(Point::new(x as Scalar, 50.0));
            assert!(prev.red() <= color.red());
            assert!(prev.green() >= color.green());
            assert!(prev.blue() >= color.blue());
            assert!((c0.red()..=c1.red()).contains(&color.red()));
            assert!((c1.green()..=c0.green()).contains(&color.green()));
            assert!((c1.blue()..=c0.blue()).contains(&color.blue()));
            prev = color;
        }
        assert_eq!(prev, c1);
        assert_eq!(circle.at(Point::new(151.0, 50.0)), BACKGROUND);
        Ok(())
    }
}
