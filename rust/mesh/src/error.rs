// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh operations.

use crate::keys::{EdgeKey, FaceKey, VertexKey};

/// Result type alias for mesh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vertex key not found in the arena.
    #[error("vertex not found: {0:?}")]
    VertexNotFound(VertexKey),

    /// Edge key not found in the arena.
    #[error("edge not found: {0:?}")]
    EdgeNotFound(EdgeKey),

    /// Face key not found in the arena.
    #[error("face not found: {0:?}")]
    FaceNotFound(FaceKey),

    /// A face needs at least 3 boundary vertices.
    #[error("face boundary has fewer than 3 vertices")]
    DegenerateFace,

    /// Boundary vertices are not connectable into a closed loop.
    #[error("face boundary is not a closed loop: break between positions {0} and {1}")]
    OpenBoundary(usize, usize),

    /// An operation that requires a quad face got something else.
    #[error("face is not a quad: has {0} boundary edges")]
    NotAQuad(usize),

    /// Subdivision was asked for edges that are not on the face boundary,
    /// or a selection that is neither one opposite pair nor all four sides.
    #[error("invalid subdivision edge selection")]
    InvalidSubdivision,

    /// An edge split parameter outside the open interval (0, 1).
    #[error("edge split parameter {0} outside (0, 1)")]
    SplitOutOfRange(f64),

    /// Dissolving an edge requires exactly two incident faces.
    #[error("edge has {0} incident faces, dissolve needs exactly 2")]
    DissolveNonManifold(usize),

    /// A face region to dissolve or bridge produced no usable boundary.
    #[error("region boundary is empty or not a closed loop")]
    DegenerateRegion,

    /// Loop bridging needs two disjoint boundary loops of equal length.
    #[error("cannot bridge loops: {0}")]
    BridgeMismatch(String),

    /// The face is too degenerate to compute a normal.
    #[error("face normal is undefined (degenerate geometry)")]
    DegenerateNormal,

    /// A world matrix whose linear part cannot be inverted.
    #[error("world matrix is singular")]
    SingularMatrix,

    /// An operation that needs at least one element got an empty selection.
    #[error("operation requires a non-empty selection")]
    EmptySelection,
}
