// SPDX-License-Identifier: GPL-3.0-or-later
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{Error, Field, Result};
use crate::point::Point;
use crate::settings::PairLabels;
use crate::spot::FittedSpot;

/// A fitted spot together with its position in two different contexts.
///
/// The spot record is shared, not owned: every pair (and every copy of a pair) made from the
/// same [`Arc`] refers to the same record. The points are plain values. A pair has no mutators,
/// so once built it is a snapshot of the three values it was built from.
#[derive(Debug)]
pub struct SpotPair<S = FittedSpot> {
    spot: Arc<S>,
    first_point: Point<f64>,
    second_point: Point<f64>,
}

impl<S> SpotPair<S> {
    pub fn new(spot: Arc<S>, first_point: Point<f64>, second_point: Point<f64>) -> Self {
        Self {
            spot,
            first_point,
            second_point,
        }
    }

    pub fn builder() -> SpotPairBuilder<S> {
        SpotPairBuilder::default()
    }

    /// Build a pair from inputs that may be missing.
    ///
    /// Fails with [`Error::InvalidArgument`] naming the first missing input, checked in the order
    /// spot, first point, second point.
    pub fn try_from_parts(
        spot: Option<Arc<S>>,
        first_point: Option<Point<f64>>,
        second_point: Option<Point<f64>>,
    ) -> Result<Self> {
        match (spot, first_point, second_point) {
            (Some(spot), Some(first_point), Some(second_point)) => {
                trace!(first = %first_point, second = %second_point, "built spot pair");
                Ok(Self::new(spot, first_point, second_point))
            }
            (spot, first_point, _) => {
                let field = if spot.is_none() {
                    Field::Spot
                } else if first_point.is_none() {
                    Field::FirstPoint
                } else {
                    Field::SecondPoint
                };
                debug!(%field, "rejecting incomplete spot pair");
                Err(Error::InvalidArgument(field))
            }
        }
    }

    pub fn spot(&self) -> &Arc<S> {
        &self.spot
    }

    pub fn first_point(&self) -> Point<f64> {
        self.first_point
    }

    pub fn second_point(&self) -> Point<f64> {
        self.second_point
    }

    /// A new pair sharing this pair's spot record, with copies of its points.
    ///
    /// The spot itself is *not* cloned; only the handle to it is.
    pub fn shallow_copy(&self) -> Self {
        Self::new(Arc::clone(&self.spot), self.first_point, self.second_point)
    }

    /// The vector from the first point to the second.
    pub fn offset(&self) -> Point<f64> {
        self.second_point - self.first_point
    }

    pub fn distance(&self) -> f64 {
        self.first_point.distance(self.second_point)
    }

    pub fn into_parts(self) -> (Arc<S>, Point<f64>, Point<f64>) {
        (self.spot, self.first_point, self.second_point)
    }

    /// Display this pair using pipeline specific names for the two points.
    pub fn labeled<'a>(&'a self, labels: &'a PairLabels) -> LabeledPair<'a, S> {
        LabeledPair { pair: self, labels }
    }
}

// Implemented by hand so that cloning a pair doesn't require `S: Clone`.
impl<S> Clone for SpotPair<S> {
    fn clone(&self) -> Self {
        self.shallow_copy()
    }
}

fn same_bits(a: Point<f64>, b: Point<f64>) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

/// Pairs are equal when they share the same spot record and their points have identical bits.
///
/// Comparing bits keeps a pair with a NaN coordinate equal to its copies, but it also means
/// `0.0` and `-0.0` are different coordinates.
impl<S> PartialEq for SpotPair<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.spot, &other.spot)
            && same_bits(self.first_point, other.first_point)
            && same_bits(self.second_point, other.second_point)
    }
}

/// Collects the inputs for a [`SpotPair`] when some of them may not be available.
#[derive(Debug)]
pub struct SpotPairBuilder<S> {
    spot: Option<Arc<S>>,
    first_point: Option<Point<f64>>,
    second_point: Option<Point<f64>>,
}

impl<S> Default for SpotPairBuilder<S> {
    fn default() -> Self {
        Self {
            spot: None,
            first_point: None,
            second_point: None,
        }
    }
}

impl<S> SpotPairBuilder<S> {
    pub fn spot(mut self, spot: Arc<S>) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn first_point(mut self, point: Point<f64>) -> Self {
        self.first_point = Some(point);
        self
    }

    pub fn second_point(mut self, point: Point<f64>) -> Self {
        self.second_point = Some(point);
        self
    }

    pub fn build(self) -> Result<SpotPair<S>> {
        SpotPair::try_from_parts(self.spot, self.first_point, self.second_point)
    }
}

/// A [`SpotPair`] displayed with the names from a [`PairLabels`].
pub struct LabeledPair<'a, S> {
    pair: &'a SpotPair<S>,
    labels: &'a PairLabels,
}

// The spot is left out so `S` doesn't need to be `Debug`.
impl<S> fmt::Debug for LabeledPair<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledPair")
            .field("first_point", &self.pair.first_point)
            .field("second_point", &self.pair.second_point)
            .field("labels", self.labels)
            .finish()
    }
}

impl<S> fmt::Display for LabeledPair<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.labels.first,
            self.pair.first_point,
            self.labels.second,
            self.pair.second_point
        )
    }
}
