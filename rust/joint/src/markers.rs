// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named handles to geometry held across destructive passes.
//!
//! The pipeline stages hand faces and edges to each other by role ("the
//! extruded haunch top", "the edge to raise"). Because the kernel's keys are
//! generational, a marker stays a plain key: it survives unrelated mutations
//! for free, and retrieval detects deletion instead of silently rebinding to
//! recycled storage. The registry is created per invocation and dropped at
//! the end; nothing is stamped into the mesh itself.

use rustc_hash::FxHashMap;

use joinery_mesh::{EdgeKey, FaceKey, MeshArena};

/// Roles a marked element can play during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    FirstHeightShoulder,
    SecondHeightShoulder,
    FirstThicknessShoulder,
    SecondThicknessShoulder,
    Extruded,
    TenonHaunchAdjacentFace,
    EdgeToRaise,
    HaunchAdjacentEdge,
}

/// Per-invocation registry of role → element key.
#[derive(Debug, Default)]
pub struct GeometryMarkers {
    faces: FxHashMap<Marker, FaceKey>,
    edges: FxHashMap<Marker, EdgeKey>,
}

impl GeometryMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_face(&mut self, marker: Marker, face: FaceKey) {
        self.faces.insert(marker, face);
    }

    pub fn save_edge(&mut self, marker: Marker, edge: EdgeKey) {
        self.edges.insert(marker, edge);
    }

    /// Takes the face saved under `marker`, if it is still alive in the mesh.
    pub fn take_face(&mut self, mesh: &MeshArena, marker: Marker) -> Option<FaceKey> {
        let face = self.faces.remove(&marker)?;
        mesh.contains_face(face).then_some(face)
    }

    /// Reads the face saved under `marker` without clearing it.
    pub fn peek_face(&self, mesh: &MeshArena, marker: Marker) -> Option<FaceKey> {
        let face = *self.faces.get(&marker)?;
        mesh.contains_face(face).then_some(face)
    }

    /// Takes the edge saved under `marker`, if it is still alive in the mesh.
    pub fn take_edge(&mut self, mesh: &MeshArena, marker: Marker) -> Option<EdgeKey> {
        let edge = self.edges.remove(&marker)?;
        mesh.contains_edge(edge).then_some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joinery_mesh::{make_box, DeleteMode};

    #[test]
    fn markers_survive_unrelated_mutation() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        let mut markers = GeometryMarkers::new();
        markers.save_face(Marker::Extruded, faces.front);

        // Deleting a different face does not disturb the marker.
        mesh.delete_faces(&[faces.back], DeleteMode::FacesOnly).unwrap();
        assert_eq!(markers.take_face(&mesh, Marker::Extruded), Some(faces.front));
    }

    #[test]
    fn stale_marker_is_detected() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        let mut markers = GeometryMarkers::new();
        markers.save_face(Marker::Extruded, faces.front);
        mesh.delete_faces(&[faces.front], DeleteMode::FacesOnly).unwrap();

        assert_eq!(markers.take_face(&mesh, Marker::Extruded), None);
    }

    #[test]
    fn take_clears_peek_does_not() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        let mut markers = GeometryMarkers::new();
        markers.save_face(Marker::TenonHaunchAdjacentFace, faces.top);

        assert!(markers.peek_face(&mesh, Marker::TenonHaunchAdjacentFace).is_some());
        assert!(markers.peek_face(&mesh, Marker::TenonHaunchAdjacentFace).is_some());
        assert!(markers.take_face(&mesh, Marker::TenonHaunchAdjacentFace).is_some());
        assert!(markers.take_face(&mesh, Marker::TenonHaunchAdjacentFace).is_none());
    }
}
