// SPDX-License-Identifier: GPL-3.0-or-later
use std::fmt;
use std::ops::Sub;

use num_traits::{Float, Num, Signed};

/// A 2D coordinate. Units and origin are whatever the calling pipeline uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T: Num> {
    pub x: T,
    pub y: T,
}

impl<T: Num> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> Point<T> {
    pub fn squared_distance(&self, other: Self) -> T {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance(&self, other: Self) -> T {
        self.squared_distance(other).sqrt()
    }
}

impl Point<u32> {
    /// Widen an integer pixel coordinate to a floating point one.
    pub fn to_f64(self) -> Point<f64> {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Only for signed components, as unsigned pixel coordinates would underflow.
impl<T: Signed> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Num> From<(T, T)> for Point<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: Num> From<Point<T>> for (T, T) {
    fn from(pt: Point<T>) -> Self {
        (pt.x, pt.y)
    }
}

impl<T> fmt::Display for Point<T>
where
    T: Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
