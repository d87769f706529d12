// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction methods for mesh elements.
//!
//! Each element is created through the arena, which ensures referential
//! integrity (all referenced sub-elements must exist) and maintains the
//! bidirectional adjacency index. Faces are built from ordered vertex loops;
//! boundary edges shared with existing faces are found and reused rather
//! than duplicated, which is what keeps the mesh manifold as features are
//! carved into it.

use smallvec::SmallVec;

use crate::arena::*;
use crate::error::{Error, Result};
use crate::keys::*;

impl MeshArena {
    /// Creates an edge between two existing vertices.
    ///
    /// Returns an error if either vertex does not exist in the arena.
    pub fn add_edge(&mut self, start: VertexKey, end: VertexKey) -> Result<EdgeKey> {
        if !self.vertices.contains_key(start) {
            return Err(Error::VertexNotFound(start));
        }
        if !self.vertices.contains_key(end) {
            return Err(Error::VertexNotFound(end));
        }

        let key = self.edges.insert(EdgeData { start, end });
        self.link_vertex_edge(start, key);
        self.link_vertex_edge(end, key);
        Ok(key)
    }

    /// Returns the existing edge connecting two vertices, if any.
    pub fn find_edge(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        let a_edges = self.vertex_to_edges.get(&a)?;
        for &ek in a_edges {
            let edge = self.edges.get(ek)?;
            if edge.start == b || edge.end == b {
                return Some(ek);
            }
        }
        None
    }

    /// Returns the edge connecting two vertices, creating it if absent.
    pub fn find_or_add_edge(&mut self, a: VertexKey, b: VertexKey) -> Result<EdgeKey> {
        if let Some(ek) = self.find_edge(a, b) {
            return Ok(ek);
        }
        self.add_edge(a, b)
    }

    /// Creates a face from an ordered loop of vertices.
    ///
    /// Consecutive vertices (and the last→first pair) are connected by edges,
    /// reusing existing edges where they exist. The winding order of the
    /// vertex list defines the face normal (right-hand rule).
    pub fn add_face_from_verts(&mut self, verts: &[VertexKey]) -> Result<FaceKey> {
        if verts.len() < 3 {
            return Err(Error::DegenerateFace);
        }
        for &vk in verts {
            if !self.vertices.contains_key(vk) {
                return Err(Error::VertexNotFound(vk));
            }
        }

        let n = verts.len();
        let mut edge_keys: SmallVec<[EdgeKey; 4]> = SmallVec::with_capacity(n);
        let mut orientations: SmallVec<[bool; 4]> = SmallVec::with_capacity(n);

        for i in 0..n {
            let a = verts[i];
            let b = verts[(i + 1) % n];
            if a == b {
                return Err(Error::OpenBoundary(i, (i + 1) % n));
            }
            let ek = self.find_or_add_edge(a, b)?;
            let edge = &self.edges[ek];
            // forward when the stored edge runs a→b
            orientations.push(edge.start == a);
            edge_keys.push(ek);
        }

        let key = self.faces.insert(FaceData {
            edges: edge_keys.clone(),
            orientations,
        });
        for ek in edge_keys {
            self.link_edge_face(ek, key);
        }
        Ok(key)
    }
}

/// Helper to build a rectangular face from four corner vertices.
///
/// Creates (or reuses) 4 edges and 1 face. Returns `(face_key, edge_keys)`.
pub fn make_quad(
    mesh: &mut MeshArena,
    v0: VertexKey,
    v1: VertexKey,
    v2: VertexKey,
    v3: VertexKey,
) -> Result<(FaceKey, [EdgeKey; 4])> {
    let face = mesh.add_face_from_verts(&[v0, v1, v2, v3])?;
    let data = mesh.face(face).expect("face was just created");
    let edges = [data.edges[0], data.edges[1], data.edges[2], data.edges[3]];
    Ok((face, edges))
}

/// The six faces of an axis-aligned box, named from the +Z-up convention.
#[derive(Debug, Clone, Copy)]
pub struct BoxFaces {
    pub bottom: FaceKey,
    pub top: FaceKey,
    pub front: FaceKey,
    pub back: FaceKey,
    pub left: FaceKey,
    pub right: FaceKey,
}

impl BoxFaces {
    /// All six faces as an array.
    pub fn all(&self) -> [FaceKey; 6] {
        [
            self.bottom,
            self.top,
            self.front,
            self.back,
            self.left,
            self.right,
        ]
    }
}

/// Builds a closed axis-aligned box with shared edges and outward-facing
/// normals. `origin` is the minimum corner; `dx`/`dy`/`dz` are the extents.
pub fn make_box(
    mesh: &mut MeshArena,
    origin: [f64; 3],
    dx: f64,
    dy: f64,
    dz: f64,
) -> Result<BoxFaces> {
    let [x, y, z] = origin;
    let v = [
        mesh.add_vertex(x, y, z),
        mesh.add_vertex(x + dx, y, z),
        mesh.add_vertex(x + dx, y + dy, z),
        mesh.add_vertex(x, y + dy, z),
        mesh.add_vertex(x, y, z + dz),
        mesh.add_vertex(x + dx, y, z + dz),
        mesh.add_vertex(x + dx, y + dy, z + dz),
        mesh.add_vertex(x, y + dy, z + dz),
    ];

    // Outward windings (right-hand rule).
    let bottom = mesh.add_face_from_verts(&[v[0], v[3], v[2], v[1]])?;
    let top = mesh.add_face_from_verts(&[v[4], v[5], v[6], v[7]])?;
    let front = mesh.add_face_from_verts(&[v[0], v[1], v[5], v[4]])?;
    let back = mesh.add_face_from_verts(&[v[2], v[3], v[7], v[6]])?;
    let left = mesh.add_face_from_verts(&[v[3], v[0], v[4], v[7]])?;
    let right = mesh.add_face_from_verts(&[v[1], v[2], v[6], v[5]])?;

    Ok(BoxFaces {
        bottom,
        top,
        front,
        back,
        left,
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_valid() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let edge = mesh.add_edge(v0, v1).unwrap();

        let data = mesh.edge(edge).unwrap();
        assert_eq!(data.start, v0);
        assert_eq!(data.end, v1);
        assert_eq!(mesh.edge_count(), 1);
    }

    #[test]
    fn add_edge_invalid_vertex() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);

        let v_temp = mesh.add_vertex(99.0, 99.0, 99.0);
        mesh.vertices.remove(v_temp);

        assert!(mesh.add_edge(v0, v_temp).is_err());
    }

    #[test]
    fn find_edge_either_direction() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let edge = mesh.add_edge(v0, v1).unwrap();

        assert_eq!(mesh.find_edge(v0, v1), Some(edge));
        assert_eq!(mesh.find_edge(v1, v0), Some(edge));
    }

    #[test]
    fn face_from_verts_tracks_orientation() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(1.0, 1.0, 0.0);

        // Pre-create one edge reversed relative to the face loop.
        mesh.add_edge(v2, v1).unwrap();

        let face = mesh.add_face_from_verts(&[v0, v1, v2]).unwrap();
        let data = mesh.face(face).unwrap();
        assert_eq!(data.edges.len(), 3);
        // v1→v2 traverses the stored v2→v1 edge backwards.
        assert_eq!(data.orientations[1], false);
        assert_eq!(mesh.edge_count(), 3);
    }

    #[test]
    fn shared_edge_is_reused() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(1.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);

        let f0 = mesh.add_face_from_verts(&[v0, v1, v2]).unwrap();
        let f1 = mesh.add_face_from_verts(&[v0, v2, v3]).unwrap();

        // 5 edges total: the diagonal v0–v2 is shared.
        assert_eq!(mesh.edge_count(), 5);
        let diagonal = mesh.find_edge(v0, v2).unwrap();
        let faces = &mesh.edge_to_faces[&diagonal];
        assert!(faces.contains(&f0));
        assert!(faces.contains(&f1));
    }

    #[test]
    fn degenerate_face_fails() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        assert!(mesh.add_face_from_verts(&[v0, v1]).is_err());
    }

    #[test]
    fn construct_box() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 12); // all edges shared by two faces
        assert_eq!(mesh.face_count(), 6);

        // Closed manifold: every edge borders exactly two faces.
        for ek in mesh.edge_keys().collect::<Vec<_>>() {
            assert_eq!(mesh.edge_to_faces[&ek].len(), 2);
        }
        assert!(mesh.contains_face(faces.top));
    }
}
