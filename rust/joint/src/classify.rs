// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of the subdivided grid around the tenon face.
//!
//! After subdivision the tenon is the center face. Its neighbors split into
//! two groups by the direction of the shared edge's inward tangent: faces
//! reached across the long-axis tangent belong to the height strip, the rest
//! to the thickness strip. Shoulders are the strip faces flanking the tenon
//! on a non-centered axis.

use nalgebra::{Matrix4, Vector3};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use joinery_mesh::{signed_distance_to_plane, EdgeKey, FaceKey, MeshArena, VertexKey};

use crate::error::Result;
use crate::features::FaceFeatures;
use crate::math::{distance_point_line, same_direction};
use crate::params::ResolvedParams;

/// The center face of the subdivided grid, with its strip neighbors and the
/// reference edges used to measure the current size along each axis.
#[derive(Debug, Clone)]
pub struct TenonFace {
    pub face: FaceKey,
    /// Tenon plus the neighbors reached along the thickness axis.
    pub thickness_faces: Vec<FaceKey>,
    /// Tenon plus the neighbors reached along the height axis.
    pub height_faces: Vec<FaceKey>,
    /// Tenon edge whose length is the current thickness.
    pub thickness_reference_edge: Option<EdgeKey>,
    /// Tenon edge whose length is the current height.
    pub height_reference_edge: Option<EdgeKey>,
}

impl TenonFace {
    pub fn new(face: FaceKey) -> Self {
        TenonFace {
            face,
            thickness_faces: Vec::new(),
            height_faces: Vec::new(),
            thickness_reference_edge: None,
            height_reference_edge: None,
        }
    }

    /// Sorts the faces sharing an edge with the tenon into the height and
    /// thickness strips and picks a reference edge per axis.
    ///
    /// A max-centered axis has no strip neighbors, so its reference edge is
    /// taken from the tenon's own boundary by tangent direction instead.
    pub fn find_adjacent_faces(
        &mut self,
        mesh: &MeshArena,
        features: &FaceFeatures,
        params: &ResolvedParams,
    ) {
        self.thickness_faces.push(self.face);
        self.height_faces.push(self.face);

        let edges: Vec<EdgeKey> = mesh
            .face_edges(self.face)
            .expect("tenon face is live")
            .to_vec();

        for &edge in &edges {
            for connected in mesh.edge_faces(edge) {
                if connected == self.face {
                    continue;
                }
                let Some(tangent) = mesh.edge_tangent(connected, edge) else {
                    continue;
                };
                if same_direction(&tangent, &features.longest_side_tangent) {
                    self.height_faces.push(connected);
                    if self.height_reference_edge.is_none() {
                        self.height_reference_edge = Some(edge);
                    }
                } else {
                    self.thickness_faces.push(connected);
                    if self.thickness_reference_edge.is_none() {
                        self.thickness_reference_edge = Some(edge);
                    }
                }
            }
        }

        if params.height.is_max_centered() {
            self.thickness_reference_edge = Some(own_edge_along(
                mesh,
                self.face,
                &edges,
                &features.shortest_side_tangent,
            ));
        } else if params.thickness.is_max_centered() {
            self.height_reference_edge = Some(own_edge_along(
                mesh,
                self.face,
                &edges,
                &features.longest_side_tangent,
            ));
        }

        debug!(
            height_faces = self.height_faces.len(),
            thickness_faces = self.thickness_faces.len(),
            "classified tenon neighborhood"
        );
    }

    /// Ratio between the requested size and the reference edge's current
    /// world-space length.
    pub fn get_scale_factor(
        mesh: &MeshArena,
        reference_edge: EdgeKey,
        world: &Matrix4<f64>,
        resize_value: f64,
    ) -> f64 {
        let (v0, v1) = mesh.edge_vertices(reference_edge).expect("edge is live");
        let w0 = world.transform_point(&mesh.vertex_point(v0).expect("vertex is live"));
        let w1 = world.transform_point(&mesh.vertex_point(v1).expect("vertex is live"));
        resize_value / (w0 - w1).norm()
    }

    /// World-space offset that stretches the reference edge by `scale_factor`
    /// away from the shoulder, keeping the shoulder-side end fixed.
    pub fn translation_given_shoulder(
        mesh: &MeshArena,
        reference_edge: EdgeKey,
        shoulder: &ShoulderFace,
        scale_factor: f64,
        world: &Matrix4<f64>,
    ) -> Vector3<f64> {
        let (v0, v1) = mesh.edge_vertices(reference_edge).expect("edge is live");
        let p0 = mesh.vertex_point(v0).expect("vertex is live");
        let p1 = mesh.vertex_point(v1).expect("vertex is live");
        let w0 = world.transform_point(&p0);
        let w1 = world.transform_point(&p1);

        let (oa, ob) = mesh
            .edge_vertices(shoulder.origin_face_edge)
            .expect("origin edge is live");
        let oa = mesh.vertex_point(oa).expect("vertex is live");
        let ob = mesh.vertex_point(ob).expect("vertex is live");

        let length0 = distance_point_line(&p0, &oa, &ob);
        let length1 = distance_point_line(&p1, &oa, &ob);

        let edge_vector = if length1 > length0 { w1 - w0 } else { w0 - w1 };
        edge_vector * scale_factor - edge_vector
    }

    /// Vertices of `tenon_faces` that are not pinned by the shoulder side.
    pub fn find_verts_to_translate(
        mesh: &MeshArena,
        tenon_faces: &[FaceKey],
        shoulder_verts: &FxHashSet<VertexKey>,
    ) -> FxHashSet<VertexKey> {
        let mut verts = verts_of_faces(mesh, tenon_faces);
        verts.retain(|v| !shoulder_verts.contains(v));
        verts
    }
}

/// One of the two strip faces flanking the tenon on a non-centered axis.
#[derive(Debug, Clone)]
pub struct ShoulderFace {
    pub face: FaceKey,
    /// Shoulder edge whose length is the current shoulder size.
    pub reference_edge: Option<EdgeKey>,
    /// Original-face boundary edge on this shoulder's outer side.
    pub origin_face_edge: EdgeKey,
}

/// Pairs the two flanking faces with the two original boundary edges by
/// proximity. The face nearer `origin_edges[0]` is the first shoulder.
pub fn shoulder_pair(
    mesh: &MeshArena,
    tenon: &TenonFace,
    adjacent_faces: &[FaceKey],
    origin_edges: [EdgeKey; 2],
) -> (ShoulderFace, ShoulderFace) {
    let candidates: Vec<FaceKey> = adjacent_faces
        .iter()
        .copied()
        .filter(|&f| f != tenon.face)
        .collect();
    assert_eq!(candidates.len(), 2, "a shouldered axis has two flanking faces");

    let (oa, ob) = mesh
        .edge_vertices(origin_edges[0])
        .expect("origin edge is live");
    let oa = mesh.vertex_point(oa).expect("vertex is live");
    let ob = mesh.vertex_point(ob).expect("vertex is live");

    let dist_to_first = |face: FaceKey| {
        let centroid = mesh.face_centroid(face).expect("shoulder face is live");
        distance_point_line(&centroid, &oa, &ob)
    };

    let (near, far) = if dist_to_first(candidates[0]) <= dist_to_first(candidates[1]) {
        (candidates[0], candidates[1])
    } else {
        (candidates[1], candidates[0])
    };
    trace!(?near, ?far, "paired shoulder faces with origin edges");

    (
        ShoulderFace {
            face: near,
            reference_edge: None,
            origin_face_edge: origin_edges[0],
        },
        ShoulderFace {
            face: far,
            reference_edge: None,
            origin_face_edge: origin_edges[1],
        },
    )
}

impl ShoulderFace {
    /// Grows the shoulder strip along `origin_face_tangent`, picks the
    /// reference edge, and returns the vertices shared with the tenon strip.
    /// Those shared vertices are the ones a shoulder translation moves.
    pub fn find_verts_to_translate(
        &mut self,
        mesh: &MeshArena,
        origin_face_tangent: &Vector3<f64>,
        tenon_faces: &[FaceKey],
    ) -> FxHashSet<VertexKey> {
        let mut shoulder_faces = vec![self.face];

        let edges: Vec<EdgeKey> = mesh
            .face_edges(self.face)
            .expect("shoulder face is live")
            .to_vec();
        for &edge in &edges {
            let Some(tangent) = mesh.edge_tangent(self.face, edge) else {
                continue;
            };
            if !same_direction(&tangent, origin_face_tangent) {
                continue;
            }
            for connected in mesh.edge_faces(edge) {
                if connected != self.face {
                    shoulder_faces.push(connected);
                    if self.reference_edge.is_none() {
                        self.reference_edge = Some(edge);
                    }
                }
            }
        }

        // On a singly subdivided mesh the strip has no in-plane neighbors;
        // fall back to the shoulder's own boundary.
        if self.reference_edge.is_none() {
            self.reference_edge = Some(own_edge_along(mesh, self.face, &edges, origin_face_tangent));
        }

        let shoulder_verts = verts_of_faces(mesh, &shoulder_faces);
        let tenon_verts = verts_of_faces(mesh, tenon_faces);
        shoulder_verts
            .intersection(&tenon_verts)
            .copied()
            .collect()
    }

    /// World-space offset for the shared vertices that sets the shoulder's
    /// length to `shoulder_value`, measured from the origin boundary.
    pub fn compute_translation_vector(
        &self,
        mesh: &MeshArena,
        shoulder_value: f64,
        world: &Matrix4<f64>,
    ) -> Vector3<f64> {
        let reference_edge = self
            .reference_edge
            .expect("reference edge found before translation");
        let (v0, v1) = mesh.edge_vertices(reference_edge).expect("edge is live");
        let p0 = mesh.vertex_point(v0).expect("vertex is live");
        let p1 = mesh.vertex_point(v1).expect("vertex is live");

        let (oa, ob) = mesh
            .edge_vertices(self.origin_face_edge)
            .expect("origin edge is live");
        let oa = mesh.vertex_point(oa).expect("vertex is live");
        let ob = mesh.vertex_point(ob).expect("vertex is live");

        let length0 = distance_point_line(&p0, &oa, &ob);
        let length1 = distance_point_line(&p1, &oa, &ob);

        let edge_vector = if length1 > length0 {
            world.transform_point(&p1) - world.transform_point(&p0)
        } else {
            world.transform_point(&p0) - world.transform_point(&p1)
        };
        let scale_factor = shoulder_value / edge_vector.norm();
        edge_vector * scale_factor - edge_vector
    }
}

/// Symmetric in-place resize of a face strip: every edge running along
/// `direction` has its endpoints pushed toward or away from the edge's own
/// midplane so the strip's extent along `direction` scales by `scale_factor`.
/// Works in local space; the scale factor is dimensionless so world scaling
/// cancels out.
pub fn resize_faces(
    mesh: &mut MeshArena,
    faces: &[FaceKey],
    direction: &Vector3<f64>,
    scale_factor: f64,
) -> Result<()> {
    let mut side_pos: FxHashSet<VertexKey> = FxHashSet::default();
    let mut side_neg: FxHashSet<VertexKey> = FxHashSet::default();
    let mut translate_pos: Option<Vector3<f64>> = None;
    let mut translate_neg: Option<Vector3<f64>> = None;

    for &face in faces {
        let edges: Vec<EdgeKey> = mesh.face_edges(face).expect("resize face is live").to_vec();
        for edge in edges {
            let (v0, v1) = mesh.edge_vertices(edge).expect("edge is live");
            let p0 = mesh.vertex_point(v0).expect("vertex is live");
            let p1 = mesh.vertex_point(v1).expect("vertex is live");
            let edge_vector = p1 - p0;
            if !same_direction(&edge_vector, direction) {
                continue;
            }

            let center = nalgebra::center(&p0, &p1);
            let signed = signed_distance_to_plane(&p0, &center, direction);
            if signed < 0.0 {
                side_neg.insert(v0);
                side_pos.insert(v1);
            } else {
                side_pos.insert(v0);
                side_neg.insert(v1);
            }

            if translate_pos.is_none() {
                let (to_neg, to_pos) = if signed < 0.0 {
                    (p0 - center, p1 - center)
                } else {
                    (p1 - center, p0 - center)
                };
                translate_neg = Some(to_neg * scale_factor - to_neg);
                translate_pos = Some(to_pos * scale_factor - to_pos);
            }
        }
    }

    if let (Some(vec_pos), Some(vec_neg)) = (translate_pos, translate_neg) {
        let pos: Vec<VertexKey> = side_pos.into_iter().collect();
        let neg: Vec<VertexKey> = side_neg.into_iter().collect();
        mesh.translate_vertices(&pos, &vec_pos)?;
        mesh.translate_vertices(&neg, &vec_neg)?;
    }
    Ok(())
}

fn verts_of_faces(mesh: &MeshArena, faces: &[FaceKey]) -> FxHashSet<VertexKey> {
    let mut verts = FxHashSet::default();
    for &face in faces {
        if let Some(face_verts) = mesh.face_vertices(face) {
            verts.extend(face_verts);
        }
    }
    verts
}

/// Picks, from a face's first two boundary edges, the one whose inward
/// tangent runs along `tangent`.
fn own_edge_along(
    mesh: &MeshArena,
    face: FaceKey,
    edges: &[EdgeKey],
    tangent: &Vector3<f64>,
) -> EdgeKey {
    let tangent0 = mesh
        .edge_tangent(face, edges[0])
        .expect("boundary edge has a tangent");
    if same_direction(&tangent0, tangent) {
        edges[0]
    } else {
        edges[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::JointParams;
    use approx::assert_relative_eq;
    use joinery_mesh::make_box;
    use nalgebra::Matrix4;

    // 3 x 2 top face, subdivided on both axes, tenon in the center.
    fn grid_fixture() -> (MeshArena, FaceFeatures, TenonFace, ResolvedParams) {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 3.0, 2.0, 1.0).unwrap();
        let features = FaceFeatures::extract(&mesh, faces.top, &Matrix4::identity());
        let params = JointParams::centered(0.4, 1.2, 0.5)
            .resolve(features.shortest_length, features.longest_length)
            .unwrap();

        let sub_faces = features.subdivide(&mut mesh, &params).unwrap();
        let tenon_key = sub_faces
            .into_iter()
            .find(|&f| mesh.face_contains_point(f, &features.median))
            .unwrap();
        let mut tenon = TenonFace::new(tenon_key);
        tenon.find_adjacent_faces(&mesh, &features, &params);
        (mesh, features, tenon, params)
    }

    #[test]
    fn strips_have_three_faces_each() {
        let (mesh, _, tenon, _) = grid_fixture();
        assert_eq!(tenon.height_faces.len(), 3);
        assert_eq!(tenon.thickness_faces.len(), 3);

        // Reference edges measure the tenon's current grid-cell size.
        let h = mesh.edge_length(tenon.height_reference_edge.unwrap()).unwrap();
        let t = mesh
            .edge_length(tenon.thickness_reference_edge.unwrap())
            .unwrap();
        assert_relative_eq!(h, 1.0, epsilon = 1e-9);
        assert_relative_eq!(t, 2.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn shoulders_pair_with_their_nearest_boundary() {
        let (mesh, features, tenon, _) = grid_fixture();
        let (first, second) = shoulder_pair(
            &mesh,
            &tenon,
            &tenon.thickness_faces,
            features.shortest_edges,
        );

        for shoulder in [&first, &second] {
            let centroid = mesh.face_centroid(shoulder.face).unwrap();
            let (a, b) = mesh.edge_vertices(shoulder.origin_face_edge).unwrap();
            let own = distance_point_line(
                &centroid,
                &mesh.vertex_point(a).unwrap(),
                &mesh.vertex_point(b).unwrap(),
            );
            assert!(own < 1.0, "shoulder sits next to its own origin edge");
        }
        assert_ne!(first.face, second.face);
        assert_ne!(first.origin_face_edge, second.origin_face_edge);
    }

    #[test]
    fn shoulder_translation_sets_requested_length() {
        let (mesh, features, tenon, _) = grid_fixture();
        let (mut first, _) = shoulder_pair(
            &mesh,
            &tenon,
            &tenon.thickness_faces,
            features.shortest_edges,
        );

        let shared = first.find_verts_to_translate(
            &mesh,
            &features.longest_side_tangent,
            &tenon.height_faces,
        );
        // The whole seam between the shoulder strip and the tenon strip.
        assert_eq!(shared.len(), 4);

        let offset = first.compute_translation_vector(&mesh, 0.2, &Matrix4::identity());
        // Shoulder spans a third of the 3.0 axis; shrinking it to 0.2 pulls
        // the seam 0.8 toward the origin boundary.
        assert_relative_eq!(offset.norm(), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn centered_resize_is_symmetric() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(2.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(2.0, 1.0, 0.0);
        let v3 = mesh.add_vertex(0.0, 1.0, 0.0);
        let (face, _) = joinery_mesh::make_quad(&mut mesh, v0, v1, v2, v3).unwrap();

        resize_faces(&mut mesh, &[face], &Vector3::new(1.0, 0.0, 0.0), 0.5).unwrap();

        for v in mesh.face_vertices(face).unwrap() {
            let p = mesh.vertex_point(v).unwrap();
            assert!(
                (p.x - 0.5).abs() < 1e-9 || (p.x - 1.5).abs() < 1e-9,
                "x extent halved around the center"
            );
        }
    }
}
