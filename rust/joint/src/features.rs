// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature extraction for the face being transformed.
//!
//! Classifies a rectangular quad's two edge directions into the longest and
//! shortest axes (measured in world space), and derives the data every later
//! stage keys off: median, normal, per-axis tangents and edge pairs.

use nalgebra::{Matrix4, Point3, Vector3};
use tracing::debug;

use joinery_mesh::{EdgeKey, FaceKey, MeshArena};

use crate::error::Result;
use crate::params::ResolvedParams;

/// Derived data for the target face. The face key dies with subdivision;
/// the edge keys survive as the corner segments of the original sides, and
/// the vectors and lengths stay meaningful throughout.
#[derive(Debug, Clone)]
pub struct FaceFeatures {
    pub face: FaceKey,
    /// Face centroid, local space.
    pub median: Point3<f64>,
    /// Face normal, local space.
    pub normal: Vector3<f64>,
    /// Inward tangent at the longest edges. Perpendicular to those edges,
    /// so it runs across the face along the shortest axis.
    pub longest_side_tangent: Vector3<f64>,
    /// Inward tangent at the shortest edges, running along the longest axis.
    pub shortest_side_tangent: Vector3<f64>,
    /// The two boundary edges running along the longest axis.
    pub longest_edges: [EdgeKey; 2],
    pub shortest_edges: [EdgeKey; 2],
    /// World-space side lengths.
    pub longest_length: f64,
    pub shortest_length: f64,
}

impl FaceFeatures {
    /// Extracts features from a validated rectangular quad.
    ///
    /// Panics if the face is not a live quad; [`crate::validate::validate_face`]
    /// must have passed first.
    pub fn extract(mesh: &MeshArena, face: FaceKey, world: &Matrix4<f64>) -> Self {
        let edges = mesh.face_edges(face).expect("validated face is live");
        assert_eq!(edges.len(), 4, "validated face is a quad");
        let [e0, e1, e2, e3] = [edges[0], edges[1], edges[2], edges[3]];

        let median = mesh.face_centroid(face).expect("quad has a centroid");
        let normal = mesh.face_normal(face).expect("quad has a normal");

        let length0 = world_edge_length(mesh, e0, world);
        let length1 = world_edge_length(mesh, e1, world);

        let tangent0 = mesh
            .edge_tangent(face, e0)
            .expect("boundary edge has a tangent");
        let tangent1 = mesh
            .edge_tangent(face, e1)
            .expect("boundary edge has a tangent");

        let features = if length0 > length1 {
            FaceFeatures {
                face,
                median,
                normal,
                longest_side_tangent: tangent0,
                shortest_side_tangent: tangent1,
                longest_edges: [e0, e2],
                shortest_edges: [e1, e3],
                longest_length: length0,
                shortest_length: length1,
            }
        } else {
            FaceFeatures {
                face,
                median,
                normal,
                longest_side_tangent: tangent1,
                shortest_side_tangent: tangent0,
                longest_edges: [e1, e3],
                shortest_edges: [e0, e2],
                longest_length: length1,
                shortest_length: length0,
            }
        };

        debug!(
            longest = features.longest_length,
            shortest = features.shortest_length,
            "extracted face features"
        );
        features
    }

    /// Subdivides the face according to the axis configuration.
    ///
    /// A max-centered axis needs no flanking faces, so only the other axis is
    /// cut (3 sub-faces). Both axes active cuts a 3x3 grid (9 sub-faces).
    /// Both max-centered is the degenerate case: no subdivision at all and
    /// the original face remains live as the tenon face.
    pub fn subdivide(&self, mesh: &mut MeshArena, params: &ResolvedParams) -> Result<Vec<FaceKey>> {
        let max_centered_height = params.height.is_max_centered();
        let max_centered_thickness = params.thickness.is_max_centered();

        let cuts: Vec<EdgeKey> = if max_centered_height && !max_centered_thickness {
            self.shortest_edges.to_vec()
        } else if max_centered_thickness && !max_centered_height {
            self.longest_edges.to_vec()
        } else if !(max_centered_height && max_centered_thickness) {
            let mut all = self.longest_edges.to_vec();
            all.extend_from_slice(&self.shortest_edges);
            all
        } else {
            return Ok(Vec::new());
        };

        let faces = mesh.subdivide_quad(self.face, &cuts)?;
        debug!(sub_faces = faces.len(), "subdivided target face");
        Ok(faces)
    }

    /// Sinks the whole face along its negated world normal (the remove-wood
    /// pre-pass for protruding tenons).
    pub fn translate_along_normal(
        &self,
        mesh: &mut MeshArena,
        world: &Matrix4<f64>,
        depth: f64,
    ) -> Result<()> {
        let linear = world.fixed_view::<3, 3>(0, 0).into_owned();
        let normal_world = (linear * self.normal).normalize() * depth;

        let verts = mesh
            .face_vertices_ordered(self.face)
            .expect("validated face is live");
        mesh.translate_vertices_world(&verts, &normal_world, world)?;
        Ok(())
    }
}

fn world_edge_length(mesh: &MeshArena, edge: EdgeKey, world: &Matrix4<f64>) -> f64 {
    let (a, b) = mesh.edge_vertices(edge).expect("face edge is live");
    let pa = world.transform_point(&mesh.vertex_point(a).expect("edge vertex is live"));
    let pb = world.transform_point(&mesh.vertex_point(b).expect("edge vertex is live"));
    (pb - pa).norm()
}
