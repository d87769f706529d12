// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traversal methods for navigating mesh adjacency.
//!
//! Supports both downward traversal (face → edges → vertices) and upward
//! traversal (vertex → edges → faces) via the adjacency index. Also exposes
//! the loop-relative edge *tangent*: the in-plane direction of a boundary
//! edge as seen from one of its faces, pointing into that face. Tangents are
//! how non-coplanar neighbouring faces are classified as belonging to the
//! same axis of a joint.

use nalgebra::Vector3;
use rustc_hash::FxHashSet;

use crate::arena::MeshArena;
use crate::keys::*;

impl MeshArena {
    /// Returns the start and end vertex keys of an edge.
    pub fn edge_vertices(&self, key: EdgeKey) -> Option<(VertexKey, VertexKey)> {
        self.edges.get(key).map(|e| (e.start, e.end))
    }

    /// Returns the boundary vertex keys of a face in traversal order.
    pub fn face_vertices_ordered(&self, key: FaceKey) -> Option<Vec<VertexKey>> {
        let face = self.faces.get(key)?;
        let mut vertices = Vec::with_capacity(face.edges.len());

        for (i, &ek) in face.edges.iter().enumerate() {
            let edge = self.edges.get(ek)?;
            let start = if face.orientations[i] {
                edge.start
            } else {
                edge.end
            };
            vertices.push(start);
        }

        Some(vertices)
    }

    /// Returns all unique vertex keys referenced by a face.
    pub fn face_vertices(&self, key: FaceKey) -> Option<FxHashSet<VertexKey>> {
        let face = self.faces.get(key)?;
        let mut set = FxHashSet::default();
        for &ek in &face.edges {
            let edge = self.edges.get(ek)?;
            set.insert(edge.start);
            set.insert(edge.end);
        }
        Some(set)
    }

    /// Returns the boundary edge keys of a face, in traversal order.
    pub fn face_edges(&self, key: FaceKey) -> Option<&[EdgeKey]> {
        self.faces.get(key).map(|f| f.edges.as_slice())
    }

    /// Returns the faces incident to an edge.
    pub fn edge_faces(&self, key: EdgeKey) -> Vec<FaceKey> {
        self.edge_to_faces
            .get(&key)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the edges incident to a vertex.
    pub fn vertex_edges(&self, key: VertexKey) -> Vec<EdgeKey> {
        self.vertex_to_edges
            .get(&key)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the faces that share at least one edge with the vertex.
    pub fn vertex_faces(&self, key: VertexKey) -> FxHashSet<FaceKey> {
        let mut set = FxHashSet::default();
        if let Some(edges) = self.vertex_to_edges.get(&key) {
            for ek in edges {
                if let Some(faces) = self.edge_to_faces.get(ek) {
                    set.extend(faces.iter().copied());
                }
            }
        }
        set
    }

    /// Returns the faces adjacent to `face` across any of its boundary edges.
    pub fn face_neighbors(&self, key: FaceKey) -> Vec<FaceKey> {
        let mut out = Vec::new();
        let Some(face) = self.faces.get(key) else {
            return out;
        };
        for ek in &face.edges {
            if let Some(faces) = self.edge_to_faces.get(ek) {
                for &fk in faces {
                    if fk != key && !out.contains(&fk) {
                        out.push(fk);
                    }
                }
            }
        }
        out
    }

    /// Position of `edge` within the face's boundary, if it is on it.
    pub fn face_edge_index(&self, face: FaceKey, edge: EdgeKey) -> Option<usize> {
        self.faces.get(face)?.edges.iter().position(|&e| e == edge)
    }

    /// The direction of `edge` as traversed by `face`'s boundary loop
    /// (unit vector from the loop-start endpoint to the loop-end endpoint).
    pub fn oriented_edge_direction(&self, face: FaceKey, edge: EdgeKey) -> Option<Vector3<f64>> {
        let idx = self.face_edge_index(face, edge)?;
        let f = self.faces.get(face)?;
        let e = self.edges.get(edge)?;
        let (a, b) = if f.orientations[idx] {
            (e.start, e.end)
        } else {
            (e.end, e.start)
        };
        let pa = self.vertex_point(a)?;
        let pb = self.vertex_point(b)?;
        let d = pb - pa;
        let len = d.norm();
        if len < 1e-15 {
            return None;
        }
        Some(d / len)
    }

    /// The *tangent* of a boundary edge relative to a face: the unit vector
    /// lying in the face plane, perpendicular to the edge, pointing inward
    /// into the face.
    pub fn edge_tangent(&self, face: FaceKey, edge: EdgeKey) -> Option<Vector3<f64>> {
        let dir = self.oriented_edge_direction(face, edge)?;
        let normal = self.face_normal(face)?;
        let tangent = normal.cross(&dir);
        let len = tangent.norm();
        if len < 1e-15 {
            return None;
        }
        Some(tangent / len)
    }

    /// Edges of a face region that border at least one face outside the
    /// region, forming the region's outer edge loop.
    pub fn region_boundary_edges(&self, region: &FxHashSet<FaceKey>) -> FxHashSet<EdgeKey> {
        let mut boundary = FxHashSet::default();
        for &fk in region {
            let Some(face) = self.faces.get(fk) else {
                continue;
            };
            for &ek in &face.edges {
                let outside = self
                    .edge_to_faces
                    .get(&ek)
                    .map_or(true, |faces| faces.iter().any(|f| !region.contains(f)));
                if outside {
                    boundary.insert(ek);
                }
            }
        }
        boundary
    }

    /// Edges bordered by exactly one face (open mesh boundary).
    pub fn open_boundary_edges(&self) -> Vec<EdgeKey> {
        self.edges
            .keys()
            .filter(|ek| self.edge_to_faces.get(ek).map_or(0, |f| f.len()) == 1)
            .collect()
    }

    /// Orders a set of edges into a closed vertex cycle by walking shared
    /// endpoints. Returns `None` if the edges do not form a single closed
    /// loop.
    pub fn order_edge_cycle(&self, edges: &FxHashSet<EdgeKey>) -> Option<Vec<VertexKey>> {
        if edges.is_empty() {
            return None;
        }
        let first = *edges.iter().next()?;
        let (start, mut current) = self.edge_vertices(first)?;

        let mut used = FxHashSet::default();
        used.insert(first);
        let mut cycle = vec![start];

        while current != start {
            cycle.push(current);
            let next_edge = self.vertex_to_edges.get(&current)?.iter().copied().find(
                |ek| edges.contains(ek) && !used.contains(ek),
            )?;
            used.insert(next_edge);
            let (a, b) = self.edge_vertices(next_edge)?;
            current = if a == current { b } else { a };
        }

        if used.len() != edges.len() || cycle.len() < 3 {
            return None;
        }
        Some(cycle)
    }
}
