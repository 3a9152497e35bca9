// SPDX-License-Identifier: GPL-3.0-or-later
use crate::point::Point;

/// The result of fitting a 2D Gaussian to a single emitter.
///
/// A [`SpotPair`](crate::SpotPair) only ever holds one of these behind an [`Arc`](std::sync::Arc),
/// so a single fit can be shared by every pair it takes part in.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedSpot {
    /// Acquisition indices the spot was found at.
    pub frame: u32,
    pub channel: u32,
    pub slice: u32,
    pub position: u32,

    /// Spot number within its frame.
    pub id: u32,

    /// The integer pixel the fit was started from.
    pub pixel: Point<u32>,

    /// The fitted sub-pixel center, in physical units.
    pub center: Point<f64>,

    /// Total intensity under the Gaussian.
    pub intensity: f64,
    pub background: f64,

    /// Width of the Gaussian, in physical units.
    pub width: f64,

    /// Ratio of the long to short axis. `1.0` for a symmetric fit.
    pub ellipticity: f64,

    /// Rotation of the long axis, in radians.
    pub theta: f64,

    /// Localization precision.
    pub sigma: f64,
}

impl FittedSpot {
    /// Create a record for a fit that has been started, but has no parameters yet.
    ///
    /// The center defaults to the starting pixel and every fit parameter to zero, except for
    /// `ellipticity` which defaults to a symmetric `1.0`.
    pub fn new(
        frame: u32,
        channel: u32,
        slice: u32,
        position: u32,
        id: u32,
        pixel: Point<u32>,
    ) -> Self {
        Self {
            frame,
            channel,
            slice,
            position,
            id,
            pixel,
            center: pixel.to_f64(),
            intensity: 0.0,
            background: 0.0,
            width: 0.0,
            ellipticity: 1.0,
            theta: 0.0,
            sigma: 0.0,
        }
    }

    pub fn with_center(mut self, center: Point<f64>) -> Self {
        self.center = center;
        self
    }

    pub fn with_intensity(mut self, intensity: f64, background: f64) -> Self {
        self.intensity = intensity;
        self.background = background;
        self
    }

    pub fn with_shape(mut self, width: f64, ellipticity: f64, theta: f64) -> Self {
        self.width = width;
        self.ellipticity = ellipticity;
        self.theta = theta;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }
}

#[cfg(test)]
mod test {
    use crate::point::Point;

    use super::FittedSpot;

    #[test]
    fn new_defaults() {
        let spot = FittedSpot::new(4, 1, 0, 2, 17, Point::new(12, 30));
        assert_eq!(spot.frame, 4);
        assert_eq!(spot.channel, 1);
        assert_eq!(spot.slice, 0);
        assert_eq!(spot.position, 2);
        assert_eq!(spot.id, 17);
        assert_eq!(
            spot.center,
            Point::new(12.0, 30.0),
            "An unfitted spot should be centered on its starting pixel"
        );
        assert_eq!(spot.intensity, 0.0);
        assert_eq!(spot.ellipticity, 1.0);
    }

    #[test]
    fn fitted_parameters() {
        let spot = FittedSpot::new(0, 0, 0, 0, 0, Point::new(5, 5))
            .with_center(Point::new(512.5, 498.25))
            .with_intensity(1500.0, 100.0)
            .with_shape(250.0, 1.1, 0.3)
            .with_sigma(12.5);
        assert_eq!(spot.pixel, Point::new(5, 5), "The starting pixel is kept");
        assert_eq!(spot.center, Point::new(512.5, 498.25));
        assert_eq!(spot.intensity, 1500.0);
        assert_eq!(spot.background, 100.0);
        assert_eq!(spot.width, 250.0);
        assert_eq!(spot.ellipticity, 1.1);
        assert_eq!(spot.theta, 0.3);
        assert_eq!(spot.sigma, 12.5);
    }
}
