// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex welding.
//!
//! `point_merge` collapses an explicit set of vertices into one; `auto_merge`
//! finds clusters of coincident vertices and welds each. Degenerate edges and
//! faces produced by a weld (zero-length edges, faces left with fewer than
//! three sides) are cleaned up as part of the operation.

use nalgebra::Point3;
use rustc_hash::FxHashSet;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::{FaceKey, VertexKey};

impl MeshArena {
    /// Merges all given vertices into the first one, placed at `target`.
    ///
    /// Edges between merged vertices collapse and are removed; edges that
    /// become duplicates of an existing edge are folded into it. Faces whose
    /// boundary drops below three edges are removed. Returns the surviving
    /// vertex.
    pub fn point_merge(&mut self, verts: &[VertexKey], target: Point3<f64>) -> Result<VertexKey> {
        let survivor = *verts.first().ok_or(Error::EmptySelection)?;
        for &vk in verts {
            if !self.contains_vertex(vk) {
                return Err(Error::VertexNotFound(vk));
            }
        }

        let mut touched: FxHashSet<FaceKey> = FxHashSet::default();
        for &vk in &verts[1..] {
            if vk == survivor || !self.contains_vertex(vk) {
                continue;
            }
            self.merge_vertex_into(vk, survivor, &mut touched);
        }

        self.set_vertex_position(survivor, target)?;

        // Drop faces that the weld degenerated.
        for fk in touched {
            let degenerate = self
                .faces
                .get(fk)
                .map_or(false, |fd| fd.edges.len() < 3);
            if degenerate {
                let edges = self.faces[fk].edges.clone();
                self.remove_face_record(fk);
                for ek in edges {
                    self.remove_edge_if_orphan(ek);
                }
            }
        }

        Ok(survivor)
    }

    /// Welds every cluster of vertices closer than `epsilon` to each other.
    ///
    /// Returns the number of vertices removed. Clusters are grown
    /// transitively, matching the usual remove-doubles behavior.
    pub fn auto_merge(&mut self, epsilon: f64) -> Result<usize> {
        let keys: Vec<VertexKey> = self.vertex_keys().collect();
        let eps_sq = epsilon * epsilon;
        let mut merged: FxHashSet<VertexKey> = FxHashSet::default();
        let mut removed = 0usize;

        for (i, &a) in keys.iter().enumerate() {
            if merged.contains(&a) || !self.contains_vertex(a) {
                continue;
            }
            let pa = self.vertex_point(a).ok_or(Error::VertexNotFound(a))?;

            let mut cluster = vec![a];
            for &b in &keys[i + 1..] {
                if merged.contains(&b) || !self.contains_vertex(b) {
                    continue;
                }
                let pb = self.vertex_point(b).ok_or(Error::VertexNotFound(b))?;
                if (pb - pa).norm_squared() <= eps_sq {
                    cluster.push(b);
                    merged.insert(b);
                }
            }

            if cluster.len() > 1 {
                removed += cluster.len() - 1;
                self.point_merge(&cluster, pa)?;
            }
        }

        Ok(removed)
    }

    /// Re-points every edge of `old` onto `survivor`, collapsing and
    /// deduplicating as needed. Faces whose boundary changed are recorded in
    /// `touched`.
    fn merge_vertex_into(
        &mut self,
        old: VertexKey,
        survivor: VertexKey,
        touched: &mut FxHashSet<FaceKey>,
    ) {
        let edges = self.vertex_edges(old);
        for ek in edges {
            if !self.contains_edge(ek) {
                continue;
            }
            let (start, end) = (self.edges[ek].start, self.edges[ek].end);
            let other = if start == old { end } else { start };

            if other == survivor {
                // The edge collapses to a point: splice it out of its faces.
                for fk in self.edge_faces(ek) {
                    touched.insert(fk);
                    if let Some(fd) = self.faces.get_mut(fk) {
                        if let Some(i) = fd.edges.iter().position(|&k| k == ek) {
                            fd.edges.remove(i);
                            fd.orientations.remove(i);
                        }
                    }
                }
                self.remove_edge_record(ek);
                continue;
            }

            if let Some(existing) = self.find_edge(survivor, other) {
                // Folding would duplicate an existing edge: re-point faces at
                // the existing one and drop this edge.
                let existing_start = self.edges[existing].start;
                for fk in self.edge_faces(ek) {
                    touched.insert(fk);
                    {
                        let Some(fd) = self.faces.get_mut(fk) else {
                            continue;
                        };
                        if let Some(i) = fd.edges.iter().position(|&k| k == ek) {
                            let from = if fd.orientations[i] { start } else { end };
                            let from = if from == old { survivor } else { from };
                            fd.edges[i] = existing;
                            fd.orientations[i] = existing_start == from;
                        }
                    }
                    self.link_edge_face(existing, fk);
                }
                self.remove_edge_record(ek);
                continue;
            }

            // Plain re-point.
            {
                let edge = &mut self.edges[ek];
                if edge.start == old {
                    edge.start = survivor;
                } else {
                    edge.end = survivor;
                }
            }
            self.unlink_vertex_edge(old, ek);
            self.link_vertex_edge(survivor, ek);
            for fk in self.edge_faces(ek) {
                touched.insert(fk);
            }
        }

        self.vertices.remove(old);
        self.vertex_to_edges.remove(&old);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::make_quad;
    use approx::assert_relative_eq;

    #[test]
    fn merge_two_loose_vertices() {
        let mut mesh = MeshArena::new();
        let a = mesh.add_vertex(0.0, 0.0, 0.0);
        let b = mesh.add_vertex(1.0, 0.0, 0.0);
        let c = mesh.add_vertex(0.0, 1.0, 0.0);
        mesh.add_edge(a, b).unwrap();
        mesh.add_edge(b, c).unwrap();

        let s = mesh.point_merge(&[a, c], Point3::new(0.0, 0.5, 0.0)).unwrap();

        assert_eq!(s, a);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.edge_count(), 2);
        assert_relative_eq!(mesh.vertex_point(a).unwrap().y, 0.5);
        assert!(mesh.find_edge(a, b).is_some());
    }

    #[test]
    fn collapsing_a_quad_edge_leaves_a_triangle() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(1.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);
        let (face, _) = make_quad(&mut mesh, v0, v1, v2, v3).unwrap();

        mesh.point_merge(&[v0, v1], Point3::new(0.5, 0.0, 0.0)).unwrap();

        assert!(mesh.contains_face(face));
        assert_eq!(mesh.face_edges(face).unwrap().len(), 3);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge_count(), 3);
    }

    #[test]
    fn duplicate_edges_are_folded() {
        let mut mesh = MeshArena::new();
        // Two triangles sharing the vertical edge b-c, plus a stray vertex d
        // connected to c. Merging d into b must fold edge d-c into b-c.
        let a = mesh.add_vertex(0.0, 0.0, 0.0);
        let b = mesh.add_vertex(1.0, 0.0, 0.0);
        let c = mesh.add_vertex(1.0, 1.0, 0.0);
        let d = mesh.add_vertex(1.0, 0.1, 0.0);
        mesh.add_edge(a, b).unwrap();
        let bc = mesh.add_edge(b, c).unwrap();
        mesh.add_edge(d, c).unwrap();

        mesh.point_merge(&[b, d], Point3::new(1.0, 0.0, 0.0)).unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edge_count(), 2);
        assert!(mesh.contains_edge(bc));
    }

    #[test]
    fn auto_merge_welds_coincident_boundaries() {
        let mut mesh = MeshArena::new();
        // Two quads meeting along x = 1 with duplicated seam vertices.
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(1.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);
        make_quad(&mut mesh, v0, v1, v2, v3).unwrap();

        let w1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let w2 = mesh.add_vertex(1.0, 1.0, 0.0);
        let v4 = mesh.add_vertex(2.0, 0.0, 0.0);
        let v5 = mesh.add_vertex(2.0, 1.0, 0.0);
        make_quad(&mut mesh, w1, v4, v5, w2).unwrap();

        let removed = mesh.auto_merge(1e-6).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(mesh.vertex_count(), 6);
        // The seam edge is shared by both quads now.
        let seam = mesh.find_edge(v1, v2).unwrap();
        assert_eq!(mesh.edge_faces(seam).len(), 2);
        assert_eq!(mesh.edge_count(), 7);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let mut mesh = MeshArena::new();
        assert!(matches!(
            mesh.point_merge(&[], Point3::origin()),
            Err(Error::EmptySelection)
        ));
    }
}
