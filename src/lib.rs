// SPDX-License-Identifier: GPL-3.0-or-later
//! Pairs of fitted spots and coordinates, for registration and tracking of localization
//! microscopy data.
//!
//! A [`SpotPair`] ties one Gaussian fit ([`FittedSpot`], or any other record) to the spot's
//! position in two contexts, for example the same emitter imaged in two channels. Finding those
//! pairs and fitting transforms to them is left to the pipeline using this crate.
mod error;
mod pair;
mod point;
mod settings;
mod spot;

pub use error::{Error, Field, Result};
pub use pair::{LabeledPair, SpotPair, SpotPairBuilder};
pub use point::Point;
pub use settings::PairLabels;
pub use spot::FittedSpot;
