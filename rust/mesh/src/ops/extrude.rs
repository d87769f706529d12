// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face extrusion.

use nalgebra::Vector3;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::FaceKey;

/// The faces produced by extruding a single face.
#[derive(Debug, Clone)]
pub struct Extrusion {
    /// The translated copy of the original face (same winding).
    pub top: FaceKey,
    /// One wall quad per boundary edge, in boundary order. Wall `i` sits on
    /// the original face's edge between ordered vertices `i` and `i + 1`.
    pub sides: Vec<FaceKey>,
}

impl MeshArena {
    /// Extrudes a face along `offset`.
    ///
    /// The boundary vertices are duplicated and translated; wall quads connect
    /// the original boundary to the copy; the original face record is removed
    /// so a closed mesh stays closed. When `offset` points along the face
    /// normal, the walls wind outward.
    pub fn extrude_face(&mut self, face: FaceKey, offset: &Vector3<f64>) -> Result<Extrusion> {
        let bottom = self
            .face_vertices_ordered(face)
            .ok_or(Error::FaceNotFound(face))?;

        let mut top = Vec::with_capacity(bottom.len());
        for &vk in &bottom {
            let p = self.vertex_point(vk).ok_or(Error::VertexNotFound(vk))?;
            top.push(self.add_vertex(p.x + offset.x, p.y + offset.y, p.z + offset.z));
        }

        self.remove_face_record(face);

        let n = bottom.len();
        let mut sides = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            sides.push(self.add_face_from_verts(&[bottom[i], bottom[j], top[j], top[i]])?);
        }
        let top_face = self.add_face_from_verts(&top)?;

        Ok(Extrusion {
            top: top_face,
            sides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::make_box;
    use approx::assert_relative_eq;

    #[test]
    fn extrude_box_face_stays_closed() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        let ext = mesh
            .extrude_face(faces.top, &Vector3::new(0.0, 0.0, 0.5))
            .unwrap();

        assert!(!mesh.contains_face(faces.top));
        assert_eq!(ext.sides.len(), 4);
        // 5 remaining box faces + 4 walls + 1 top
        assert_eq!(mesh.face_count(), 10);
        // closed: every edge has exactly two faces
        assert!(mesh.open_boundary_edges().is_empty());

        let top_centroid = mesh.face_centroid(ext.top).unwrap();
        assert_relative_eq!(top_centroid.z, 1.5, epsilon = 1e-10);

        let normal = mesh.face_normal(ext.top).unwrap();
        assert_relative_eq!(normal.z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn wall_normals_point_outward() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 2.0, 2.0, 1.0).unwrap();

        let ext = mesh
            .extrude_face(faces.top, &Vector3::new(0.0, 0.0, 1.0))
            .unwrap();

        let center = nalgebra::Point3::new(1.0, 1.0, 1.5);
        for &wall in &ext.sides {
            let n = mesh.face_normal(wall).unwrap();
            let c = mesh.face_centroid(wall).unwrap();
            assert!((c - center).dot(&n) > 0.0);
        }
    }
}
