// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge and region dissolving (the inverse of subdivision).

use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashSet;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::{EdgeKey, FaceKey};

impl MeshArena {
    /// Dissolves an edge, merging its two incident faces into one.
    ///
    /// The merged face keeps the orientation of the first incident face.
    pub fn dissolve_edge(&mut self, edge: EdgeKey) -> Result<FaceKey> {
        if !self.contains_edge(edge) {
            return Err(Error::EdgeNotFound(edge));
        }
        let incident = self.edge_faces(edge);
        if incident.len() != 2 {
            return Err(Error::DissolveNonManifold(incident.len()));
        }
        self.dissolve_region(&incident)
    }

    /// Dissolves faces region by region. Each edge-connected component of the
    /// input collapses into a single face spanning its outer boundary; interior
    /// edges and any vertices they strand are removed. Isolated faces with no
    /// companion are left untouched.
    pub fn dissolve_faces(&mut self, faces: &[FaceKey]) -> Result<Vec<FaceKey>> {
        if faces.is_empty() {
            return Err(Error::DegenerateRegion);
        }
        for &fk in faces {
            if !self.contains_face(fk) {
                return Err(Error::FaceNotFound(fk));
            }
        }

        let mut merged = Vec::new();
        for component in self.connected_components(faces) {
            if component.len() < 2 {
                merged.extend(component);
                continue;
            }
            merged.push(self.dissolve_region(&component)?);
        }
        Ok(merged)
    }

    fn connected_components(&self, faces: &[FaceKey]) -> Vec<Vec<FaceKey>> {
        let region: FxHashSet<FaceKey> = faces.iter().copied().collect();
        let mut seen: FxHashSet<FaceKey> = FxHashSet::default();
        let mut components = Vec::new();

        for &start in faces {
            if seen.contains(&start) {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![start];
            seen.insert(start);
            while let Some(fk) = stack.pop() {
                component.push(fk);
                if let Some(fd) = self.faces.get(fk) {
                    for &ek in &fd.edges {
                        for other in self.edge_faces(ek) {
                            if region.contains(&other) && seen.insert(other) {
                                stack.push(other);
                            }
                        }
                    }
                }
            }
            components.push(component);
        }
        components
    }

    fn dissolve_region(&mut self, faces: &[FaceKey]) -> Result<FaceKey> {
        let region: FxHashSet<FaceKey> = faces.iter().copied().collect();
        for &fk in faces {
            if !self.contains_face(fk) {
                return Err(Error::FaceNotFound(fk));
            }
        }

        let boundary = self.region_boundary_edges(&region);
        let cycle = self
            .order_edge_cycle(&boundary)
            .ok_or(Error::DegenerateRegion)?;

        let ref_normal = self
            .face_normal(faces[0])
            .ok_or(Error::DegenerateNormal)?;

        // Interior edges are region edges not on the outer boundary.
        let mut interior: FxHashSet<EdgeKey> = FxHashSet::default();
        for &fk in &region {
            if let Some(fd) = self.faces.get(fk) {
                for &ek in &fd.edges {
                    if !boundary.contains(&ek) {
                        interior.insert(ek);
                    }
                }
            }
        }

        for &fk in &region {
            self.remove_face_record(fk);
        }
        for ek in interior {
            if !self.contains_edge(ek) {
                continue;
            }
            let (start, end) = (self.edges[ek].start, self.edges[ek].end);
            self.remove_edge_record(ek);
            self.remove_vertex_if_orphan(start);
            self.remove_vertex_if_orphan(end);
        }

        // Keep the region's orientation on the merged face.
        let mut points = Vec::with_capacity(cycle.len());
        for &vk in &cycle {
            points.push(self.vertex_point(vk).ok_or(Error::VertexNotFound(vk))?);
        }
        let mut cycle = cycle;
        if let Some(n) = newell_normal(&points) {
            if n.dot(&ref_normal) < 0.0 {
                cycle.reverse();
            }
        }

        self.add_face_from_verts(&cycle)
    }
}

fn newell_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    let n = points.len();
    for i in 0..n {
        let curr = points[i];
        let next = points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < 1e-15 {
        return None;
    }
    Some(normal / len)
}
