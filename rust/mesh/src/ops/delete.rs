// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face deletion.

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::FaceKey;

/// What deleting faces should do to the elements beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove only the face records; edges and vertices survive even when
    /// nothing references them anymore.
    FacesOnly,
    /// Remove the faces, then sweep away any edges and vertices left without
    /// a referencing parent.
    FacesAndOrphans,
}

impl MeshArena {
    /// Deletes the given faces.
    ///
    /// Fails without mutating anything if any key is stale.
    pub fn delete_faces(&mut self, faces: &[FaceKey], mode: DeleteMode) -> Result<()> {
        for &fk in faces {
            if !self.faces.contains_key(fk) {
                return Err(Error::FaceNotFound(fk));
            }
        }

        let mut touched_edges = Vec::new();
        for &fk in faces {
            if let Some(fd) = self.faces.get(fk) {
                touched_edges.extend(fd.edges.iter().copied());
            }
            self.remove_face_record(fk);
        }

        if mode == DeleteMode::FacesAndOrphans {
            for ek in touched_edges {
                if !self.contains_edge(ek) {
                    continue;
                }
                let (start, end) = (self.edges[ek].start, self.edges[ek].end);
                if self.remove_edge_if_orphan(ek) {
                    self.remove_vertex_if_orphan(start);
                    self.remove_vertex_if_orphan(end);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::make_box;

    #[test]
    fn faces_only_keeps_skeleton() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        mesh.delete_faces(&[faces.top], DeleteMode::FacesOnly).unwrap();

        assert_eq!(mesh.face_count(), 5);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.open_boundary_edges().len(), 4);
    }

    #[test]
    fn orphan_sweep_removes_unreferenced_elements() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        // Deleting all six faces with the sweep empties the mesh.
        mesh.delete_faces(&faces.all(), DeleteMode::FacesAndOrphans)
            .unwrap();

        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn shared_edges_survive_partial_delete() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        mesh.delete_faces(&[faces.top], DeleteMode::FacesAndOrphans)
            .unwrap();

        // Every top edge still bounds a side face, so nothing is orphaned.
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn stale_key_fails_without_mutation() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();
        mesh.delete_faces(&[faces.top], DeleteMode::FacesOnly).unwrap();

        let before = mesh.face_count();
        assert!(matches!(
            mesh.delete_faces(&[faces.top, faces.bottom], DeleteMode::FacesOnly),
            Err(Error::FaceNotFound(_))
        ));
        assert_eq!(mesh.face_count(), before);
    }
}
