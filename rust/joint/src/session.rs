// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-caller session state across builder invocations.
//!
//! Interactive callers re-run the builder with tweaked parameters on the same
//! face, or move on to a different face. The session remembers the last
//! measured face dimensions so the caller can tell "same face, keep the
//! user's sizes" apart from "new face, reset to suggested defaults". It is an
//! explicit value owned by the caller; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::math::nearly_equal;

/// Suggested starting sizes for a freshly selected face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestedSizes {
    /// One third of the shortest side.
    pub thickness: f64,
    /// Two thirds of the longest side.
    pub height: f64,
    /// The shortest side (a square-ish blind depth).
    pub depth: f64,
    /// One third of the depth.
    pub haunch_depth: f64,
}

/// Measured face dimensions remembered between invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BuilderSession {
    shortest_length: Option<f64>,
    longest_length: Option<f64>,
}

impl BuilderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the given dimensions differ from the previously observed
    /// ones (or nothing was observed yet).
    pub fn face_changed(&self, shortest_length: f64, longest_length: f64) -> bool {
        match (self.shortest_length, self.longest_length) {
            (Some(s), Some(l)) => {
                !nearly_equal(s, shortest_length) || !nearly_equal(l, longest_length)
            }
            _ => true,
        }
    }

    /// Records the dimensions of the face just processed.
    pub fn observe(&mut self, shortest_length: f64, longest_length: f64) {
        self.shortest_length = Some(shortest_length);
        self.longest_length = Some(longest_length);
    }

    /// Default sizes for a face of the given dimensions.
    pub fn suggest(shortest_length: f64, longest_length: f64) -> SuggestedSizes {
        let depth = shortest_length;
        SuggestedSizes {
            thickness: shortest_length / 3.0,
            height: longest_length * 2.0 / 3.0,
            depth,
            haunch_depth: depth / 3.0,
        }
    }
}
