// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology-editing operations.
//!
//! Each operation mutates the arena in place and keeps the adjacency indices
//! consistent. Keys of deleted elements are invalidated by the slot maps'
//! generation counters, so stale handles fail lookups instead of aliasing
//! recycled slots.

mod bridge;
mod delete;
mod dissolve;
mod extrude;
mod merge;
mod subdivide;

pub use delete::DeleteMode;
pub use extrude::Extrusion;
