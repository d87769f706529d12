// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target-face preconditions, checked before any mutation.

use std::f64::consts::FRAC_PI_2;

use joinery_mesh::{signed_distance_to_plane, FaceKey, MeshArena};

use crate::error::{Error, Result};

/// Max vertex-to-plane deviation, in length units.
pub const PLANAR_TOLERANCE: f64 = 0.0005;

/// Max corner-angle deviation from a right angle, in radians.
pub const RECTANGULAR_TOLERANCE: f64 = 0.0005;

/// Checks that a face is a planar rectangular quad.
///
/// Runs before the builder mutates anything, so a failure leaves the mesh
/// untouched.
pub fn validate_face(mesh: &MeshArena, face: FaceKey) -> Result<()> {
    let verts = mesh
        .face_vertices_ordered(face)
        .ok_or(joinery_mesh::Error::FaceNotFound(face))?;

    if verts.len() != 4 {
        return Err(Error::NotAQuad(verts.len()));
    }

    let points: Vec<_> = verts
        .iter()
        .map(|&vk| {
            mesh.vertex_point(vk)
                .ok_or(joinery_mesh::Error::VertexNotFound(vk))
        })
        .collect::<std::result::Result<_, _>>()?;

    let normal = mesh
        .face_normal(face)
        .ok_or(joinery_mesh::Error::DegenerateNormal)?;

    for p in &points {
        let d = signed_distance_to_plane(p, &points[0], &normal).abs();
        if d > PLANAR_TOLERANCE {
            return Err(Error::NotPlanar {
                deviation: d,
                tolerance: PLANAR_TOLERANCE,
            });
        }
    }

    for i in 0..4 {
        let prev = points[(i + 3) % 4];
        let curr = points[i];
        let next = points[(i + 1) % 4];
        let a = (prev - curr).normalize();
        let b = (next - curr).normalize();
        let angle = a.dot(&b).clamp(-1.0, 1.0).acos();
        let deviation = (angle - FRAC_PI_2).abs();
        if deviation > RECTANGULAR_TOLERANCE {
            return Err(Error::NotRectangular {
                deviation,
                tolerance: RECTANGULAR_TOLERANCE,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joinery_mesh::make_quad;

    fn quad(mesh: &mut MeshArena, corners: [[f64; 3]; 4]) -> FaceKey {
        let keys: Vec<_> = corners
            .iter()
            .map(|c| mesh.add_vertex(c[0], c[1], c[2]))
            .collect();
        make_quad(mesh, keys[0], keys[1], keys[2], keys[3]).unwrap().0
    }

    #[test]
    fn rectangle_passes() {
        let mut mesh = MeshArena::new();
        let face = quad(
            &mut mesh,
            [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        );
        assert!(validate_face(&mesh, face).is_ok());
    }

    #[test]
    fn non_planar_quad_is_rejected() {
        let mut mesh = MeshArena::new();
        let face = quad(
            &mut mesh,
            [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.01], [0.0, 1.0, 0.0]],
        );
        assert!(matches!(
            validate_face(&mesh, face),
            Err(Error::NotPlanar { .. })
        ));
    }

    #[test]
    fn parallelogram_is_rejected() {
        let mut mesh = MeshArena::new();
        let face = quad(
            &mut mesh,
            [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.5, 1.0, 0.0], [0.5, 1.0, 0.0]],
        );
        assert!(matches!(
            validate_face(&mesh, face),
            Err(Error::NotRectangular { .. })
        ));
    }

    #[test]
    fn triangle_is_rejected() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
        let v2 = mesh.add_vertex(0.0, 1.0, 0.0);
        let face = mesh.add_face_from_verts(&[v0, v1, v2]).unwrap();

        assert!(matches!(validate_face(&mesh, face), Err(Error::NotAQuad(3))));
    }

    #[test]
    fn stale_face_key_reports_kernel_error() {
        let mut mesh = MeshArena::new();
        let face = quad(
            &mut mesh,
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        );
        mesh.delete_faces(&[face], joinery_mesh::DeleteMode::FacesOnly)
            .unwrap();

        assert!(matches!(validate_face(&mesh, face), Err(Error::Mesh(_))));
    }
}
