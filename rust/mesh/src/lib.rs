// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based polygon mesh kernel.
//!
//! Vertices, edges and faces live in slot maps behind generational keys, so a
//! handle to a deleted element fails lookup instead of silently pointing at a
//! recycled slot. Faces store an ordered, oriented edge loop; upward adjacency
//! (vertex→edges, edge→faces) is indexed in hash maps for O(1) traversal.
//!
//! The crate is split by concern:
//! - [`arena`]: element storage and adjacency bookkeeping
//! - [`construction`]: building vertices, edges, faces, quads and boxes
//! - [`traversal`]: ordered boundary walks and adjacency queries
//! - [`geometry`]: normals, centroids, triangulation, containment
//! - [`transform`]: vertex translation and directional scaling
//! - [`ops`]: topology edits (split, subdivide, extrude, delete, dissolve,
//!   weld, bridge)

pub mod arena;
pub mod construction;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod ops;
pub mod transform;
pub mod traversal;

pub use arena::{EdgeData, FaceData, MeshArena, VertexData};
pub use construction::{make_box, make_quad, BoxFaces};
pub use error::{Error, Result};
pub use geometry::{
    closest_point_on_line, line_plane_intersect, ray_triangle_intersect,
    signed_distance_to_plane, triangle_normal,
};
pub use keys::{EdgeKey, ElementKey, ElementType, FaceKey, VertexKey};
pub use ops::{DeleteMode, Extrusion};
