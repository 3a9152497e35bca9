// SPDX-License-Identifier: GPL-3.0-or-later
use serde::Deserialize;

fn default_first() -> String {
    "first".to_string()
}

fn default_second() -> String {
    "second".to_string()
}

/// Names for the two contexts the points of a [`SpotPair`](crate::SpotPair) were measured in.
///
/// What the first and second points mean (two channels, two frames, a reference and a
/// measurement) is up to the pipeline building the pairs, so it names them here.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PairLabels {
    /// Label for the first point. Defaults to `first`.
    #[serde(default = "default_first")]
    pub first: String,

    /// Label for the second point. Defaults to `second`.
    #[serde(default = "default_second")]
    pub second: String,
}

impl PairLabels {
    pub fn new<F, S>(first: F, second: S) -> Self
    where
        F: Into<String>,
        S: Into<String>,
    {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Default for PairLabels {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
        }
    }
}
