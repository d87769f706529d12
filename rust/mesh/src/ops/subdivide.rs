// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge splitting and quad subdivision.

use crate::arena::{EdgeData, MeshArena};
use crate::error::{Error, Result};
use crate::keys::{EdgeKey, FaceKey, VertexKey};

impl MeshArena {
    /// Splits an edge at parameter `t` in the open interval (0, 1), measured
    /// from the edge's start vertex.
    ///
    /// The original edge is shortened to `start → mid`; a new edge `mid → end`
    /// is created. Every face incident to the edge has its boundary patched,
    /// so neighbors stay stitched. Returns the new vertex and the new edge.
    pub fn split_edge(&mut self, edge: EdgeKey, t: f64) -> Result<(VertexKey, EdgeKey)> {
        if !(t > 0.0 && t < 1.0) {
            return Err(Error::SplitOutOfRange(t));
        }
        let data = self.edges.get(edge).ok_or(Error::EdgeNotFound(edge))?;
        let (start, end) = (data.start, data.end);

        let p0 = self.vertex_point(start).ok_or(Error::VertexNotFound(start))?;
        let p1 = self.vertex_point(end).ok_or(Error::VertexNotFound(end))?;
        let mid_pt = p0 + (p1 - p0) * t;
        let mid = self.add_vertex(mid_pt.x, mid_pt.y, mid_pt.z);

        // Shorten the original edge and hang a new one off the midpoint.
        self.edges[edge].end = mid;
        let new_edge = self.edges.insert(EdgeData { start: mid, end });
        self.unlink_vertex_edge(end, edge);
        self.link_vertex_edge(mid, edge);
        self.link_vertex_edge(mid, new_edge);
        self.link_vertex_edge(end, new_edge);

        let incident = self.edge_faces(edge);
        for face in incident {
            if let Some(fd) = self.faces.get_mut(face) {
                if let Some(idx) = fd.edges.iter().position(|&ek| ek == edge) {
                    if fd.orientations[idx] {
                        // traversed start→mid, then mid→end
                        fd.edges.insert(idx + 1, new_edge);
                        fd.orientations.insert(idx + 1, true);
                    } else {
                        // traversed end→mid, then mid→start
                        fd.edges.insert(idx, new_edge);
                        fd.orientations.insert(idx, false);
                    }
                }
            }
            self.link_edge_face(new_edge, face);
        }

        Ok((mid, new_edge))
    }

    /// Subdivides a quad face by cutting the given boundary edges at thirds.
    ///
    /// Two valid selections exist:
    /// - all four edges: the quad becomes a 3x3 grid of 9 faces, returned
    ///   row-major (the center face is at index 4);
    /// - one opposite pair: the quad becomes a strip of 3 faces (the middle
    ///   face is at index 1).
    ///
    /// The cuts also split the boundaries of neighboring faces, so a closed
    /// mesh stays closed. All new faces keep the original winding.
    pub fn subdivide_quad(&mut self, face: FaceKey, cuts: &[EdgeKey]) -> Result<Vec<FaceKey>> {
        let data = self.faces.get(face).ok_or(Error::FaceNotFound(face))?;
        if data.edges.len() != 4 {
            return Err(Error::NotAQuad(data.edges.len()));
        }

        let mut cut_idx: Vec<usize> = Vec::with_capacity(cuts.len());
        for &ek in cuts {
            let idx = data
                .edges
                .iter()
                .position(|&k| k == ek)
                .ok_or(Error::InvalidSubdivision)?;
            if !cut_idx.contains(&idx) {
                cut_idx.push(idx);
            }
        }
        cut_idx.sort_unstable();

        let corners = self
            .face_vertices_ordered(face)
            .ok_or(Error::FaceNotFound(face))?;

        match cut_idx.as_slice() {
            [0, 1, 2, 3] => self.subdivide_grid(face, &corners),
            [i, j] if j - i == 2 => self.subdivide_strip(face, &corners, *i),
            _ => Err(Error::InvalidSubdivision),
        }
    }

    /// Cuts the side running from corner `a` to corner `b` at 1/3 and 2/3.
    /// Returns the resulting chain `[a, m1, m2, b]` in that direction.
    fn split_side(&mut self, a: VertexKey, b: VertexKey) -> Result<[VertexKey; 4]> {
        let e1 = self.find_edge(a, b).ok_or(Error::InvalidSubdivision)?;
        let t1 = if self.edges[e1].start == a {
            1.0 / 3.0
        } else {
            2.0 / 3.0
        };
        let (m1, _) = self.split_edge(e1, t1)?;

        let e2 = self.find_edge(m1, b).ok_or(Error::InvalidSubdivision)?;
        let (m2, _) = self.split_edge(e2, 0.5)?;
        Ok([a, m1, m2, b])
    }

    fn subdivide_grid(&mut self, face: FaceKey, corners: &[VertexKey]) -> Result<Vec<FaceKey>> {
        let s0 = self.split_side(corners[0], corners[1])?;
        let s1 = self.split_side(corners[1], corners[2])?;
        let s2 = self.split_side(corners[2], corners[3])?;
        let s3 = self.split_side(corners[3], corners[0])?;

        // Rows run from side s0 to side s2; columns from side s3 to side s1.
        let mut grid = [[VertexKey::default(); 4]; 4];
        grid[0] = s0;
        grid[3] = [s2[3], s2[2], s2[1], s2[0]];
        grid[1][0] = s3[2];
        grid[2][0] = s3[1];
        grid[1][3] = s1[1];
        grid[2][3] = s1[2];

        for i in 1..3 {
            let left = self
                .vertex_point(grid[i][0])
                .ok_or(Error::VertexNotFound(grid[i][0]))?;
            let right = self
                .vertex_point(grid[i][3])
                .ok_or(Error::VertexNotFound(grid[i][3]))?;
            for j in 1..3 {
                let t = j as f64 / 3.0;
                let p = left + (right - left) * t;
                grid[i][j] = self.add_vertex(p.x, p.y, p.z);
            }
        }

        self.remove_face_record(face);

        let mut faces = Vec::with_capacity(9);
        for i in 0..3 {
            for j in 0..3 {
                faces.push(self.add_face_from_verts(&[
                    grid[i][j],
                    grid[i][j + 1],
                    grid[i + 1][j + 1],
                    grid[i + 1][j],
                ])?);
            }
        }
        Ok(faces)
    }

    fn subdivide_strip(
        &mut self,
        face: FaceKey,
        corners: &[VertexKey],
        side: usize,
    ) -> Result<Vec<FaceKey>> {
        let a = corners[side];
        let b = corners[(side + 1) % 4];
        let c = corners[(side + 2) % 4];
        let d = corners[(side + 3) % 4];

        let near = self.split_side(a, b)?;
        let far = self.split_side(c, d)?;
        // Align the far chain with the near one.
        let far = [far[3], far[2], far[1], far[0]];

        self.remove_face_record(face);

        let mut faces = Vec::with_capacity(3);
        for j in 0..3 {
            faces.push(self.add_face_from_verts(&[
                near[j],
                near[j + 1],
                far[j + 1],
                far[j],
            ])?);
        }
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::{make_box, make_quad};
    use approx::assert_relative_eq;

    #[test]
    fn split_edge_patches_both_faces() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 1.0, 1.0, 1.0).unwrap();

        // Pick an edge shared by the top face and a side face.
        let shared = *mesh.face_edges(faces.top).unwrap().first().unwrap();
        let incident = mesh.edge_faces(shared);
        assert_eq!(incident.len(), 2);

        let (mid, new_edge) = mesh.split_edge(shared, 0.25).unwrap();
        assert!(mesh.contains_vertex(mid));
        assert!(mesh.contains_edge(new_edge));

        for face in incident {
            assert_eq!(mesh.face_edges(face).unwrap().len(), 5);
            let verts = mesh.face_vertices_ordered(face).unwrap();
            assert!(verts.contains(&mid));
        }
    }

    #[test]
    fn split_edge_rejects_bad_parameter() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let e = mesh.add_edge(v0, v1).unwrap();

        assert!(matches!(
            mesh.split_edge(e, 0.0),
            Err(Error::SplitOutOfRange(_))
        ));
        assert!(matches!(
            mesh.split_edge(e, 1.5),
            Err(Error::SplitOutOfRange(_))
        ));
    }

    #[test]
    fn grid_subdivision_makes_nine_faces() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 3.0, 3.0, 3.0).unwrap();

        let cuts: Vec<EdgeKey> = mesh.face_edges(faces.top).unwrap().to_vec();
        let new_faces = mesh.subdivide_quad(faces.top, &cuts).unwrap();

        assert_eq!(new_faces.len(), 9);
        // 8 box corners + 8 edge midpoints + 4 interior
        assert_eq!(mesh.vertex_count(), 20);
        assert_eq!(mesh.face_count(), 14);

        // Side faces were patched and are now 6-gons.
        for side in [faces.front, faces.back, faces.left, faces.right] {
            assert_eq!(mesh.face_edges(side).unwrap().len(), 6);
        }

        // Center face spans the middle third.
        let centroid = mesh.face_centroid(new_faces[4]).unwrap();
        assert_relative_eq!(centroid.x, 1.5, epsilon = 1e-10);
        assert_relative_eq!(centroid.y, 1.5, epsilon = 1e-10);
    }

    #[test]
    fn strip_subdivision_makes_three_faces() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(3.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(3.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);
        let (face, edges) = make_quad(&mut mesh, v0, v1, v2, v3).unwrap();

        // Cut the two long sides (indices 0 and 2).
        let new_faces = mesh.subdivide_quad(face, &[edges[0], edges[2]]).unwrap();
        assert_eq!(new_faces.len(), 3);
        assert_eq!(mesh.face_count(), 3);

        let centroid = mesh.face_centroid(new_faces[1]).unwrap();
        assert_relative_eq!(centroid.x, 1.5, epsilon = 1e-10);

        // Winding preserved: all strips share the original normal.
        for &f in &new_faces {
            let n = mesh.face_normal(f).unwrap();
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn adjacent_pair_selection_is_rejected() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(1.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);
        let (face, edges) = make_quad(&mut mesh, v0, v1, v2, v3).unwrap();

        assert!(matches!(
            mesh.subdivide_quad(face, &[edges[0], edges[1]]),
            Err(Error::InvalidSubdivision)
        ));
    }
}
