// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the joint builder.
//!
//! Validation errors are raised before any mutation, so the mesh is untouched
//! and the caller may retry with corrected parameters. Through-cut errors are
//! raised mid-pipeline; the mesh keeps whatever progress the earlier stages
//! made (there is no transactional rollback at this layer). Internal
//! classification inconsistencies are programming-contract failures and panic
//! instead of surfacing here.

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a joint.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target face does not have exactly 4 boundary vertices.
    #[error("face is not a quad: has {0} vertices")]
    NotAQuad(usize),

    /// A vertex deviates from the face plane by more than the tolerance.
    #[error("face is not planar: vertex deviates {deviation} from the plane (tolerance {tolerance})")]
    NotPlanar { deviation: f64, tolerance: f64 },

    /// A corner angle deviates from a right angle by more than the tolerance.
    #[error("face is not rectangular: corner angle off by {deviation} rad (tolerance {tolerance})")]
    NotRectangular { deviation: f64, tolerance: f64 },

    /// Feature size plus shoulder size exceeds the axis length.
    #[error("{axis} size conflict: feature {value} + shoulder {shoulder} exceeds axis length {axis_length}")]
    SizeConflict {
        axis: &'static str,
        value: f64,
        shoulder: f64,
        axis_length: f64,
    },

    /// A negative feature or shoulder size.
    #[error("{axis} size is negative: {value}")]
    NegativeSize { axis: &'static str, value: f64 },

    /// Through-cut found more than 4 exit intersections.
    #[error("through cut is ambiguous: {0} intersections (expected 4)")]
    AmbiguousThroughCut(usize),

    /// Through-cut found 1 to 3 exit intersections; the exit geometry cannot
    /// be resolved into a hole.
    #[error("through cut is under-determined: {0} intersections (expected 0 or 4)")]
    PartialThroughCut(usize),

    /// An error bubbled up from the mesh kernel.
    #[error(transparent)]
    Mesh(#[from] joinery_mesh::Error),
}
