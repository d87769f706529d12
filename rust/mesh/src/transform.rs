// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex transforms.
//!
//! All mesh mutation that only moves vertices (without touching topology)
//! lives here: translation in local space, translation of a world-space
//! vector through an object matrix, and directional scaling about a plane.

use nalgebra::{Matrix4, Point3, Vector3};

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::VertexKey;

impl MeshArena {
    /// Moves a single vertex to a new position.
    pub fn set_vertex_position(&mut self, key: VertexKey, point: Point3<f64>) -> Result<()> {
        let v = self
            .vertices
            .get_mut(key)
            .ok_or(Error::VertexNotFound(key))?;
        v.x = point.x;
        v.y = point.y;
        v.z = point.z;
        Ok(())
    }

    /// Translates a set of vertices by a local-space offset.
    pub fn translate_vertices(&mut self, keys: &[VertexKey], offset: &Vector3<f64>) -> Result<()> {
        for &key in keys {
            let v = self
                .vertices
                .get_mut(key)
                .ok_or(Error::VertexNotFound(key))?;
            v.x += offset.x;
            v.y += offset.y;
            v.z += offset.z;
        }
        Ok(())
    }

    /// Translates vertices by a world-space offset, given the object's
    /// local-to-world matrix.
    ///
    /// The offset is a direction, so only the inverse of the linear part of
    /// the matrix is applied; the matrix translation is ignored.
    pub fn translate_vertices_world(
        &mut self,
        keys: &[VertexKey],
        world_offset: &Vector3<f64>,
        world_matrix: &Matrix4<f64>,
    ) -> Result<()> {
        let linear = world_matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let inv = linear.try_inverse().ok_or(Error::SingularMatrix)?;
        let local_offset = inv * world_offset;
        self.translate_vertices(keys, &local_offset)
    }

    /// Scales vertices along a direction about a plane.
    ///
    /// Each vertex's signed distance to the plane through `origin` with unit
    /// normal `dir` is multiplied by `factor`, moving the vertex along `dir`.
    /// Vertices on the plane stay fixed; `factor` < 1 pulls the set inward
    /// symmetrically about the plane.
    pub fn scale_vertices_along(
        &mut self,
        keys: &[VertexKey],
        origin: &Point3<f64>,
        dir: &Vector3<f64>,
        factor: f64,
    ) -> Result<()> {
        for &key in keys {
            let point = self.vertex_point(key).ok_or(Error::VertexNotFound(key))?;
            let dist = (point - origin).dot(dir);
            let shift = dir * (dist * (factor - 1.0));
            let v = self
                .vertices
                .get_mut(key)
                .ok_or(Error::VertexNotFound(key))?;
            v.x += shift.x;
            v.y += shift.y;
            v.z += shift.z;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translate_moves_only_selected() {
        let mut mesh = MeshArena::new();
        let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
        let v1 = mesh.add_vertex(1.0, 0.0, 0.0);

        mesh.translate_vertices(&[v0], &Vector3::new(0.0, 0.0, 2.0))
            .unwrap();

        assert_relative_eq!(mesh.vertex_point(v0).unwrap().z, 2.0);
        assert_relative_eq!(mesh.vertex_point(v1).unwrap().z, 0.0);
    }

    #[test]
    fn world_translate_unrotates_offset() {
        let mut mesh = MeshArena::new();
        let v = mesh.add_vertex(0.0, 0.0, 0.0);

        // Object rotated 90 degrees about Z: world +X is local -Y... actually
        // local +Y maps to world -X, so a world +X offset is local -Y.
        let rot = Matrix4::from_axis_angle(
            &Vector3::z_axis(),
            std::f64::consts::FRAC_PI_2,
        );
        mesh.translate_vertices_world(&[v], &Vector3::new(1.0, 0.0, 0.0), &rot)
            .unwrap();

        let p = mesh.vertex_point(v).unwrap();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn directional_scale_is_symmetric_about_plane() {
        let mut mesh = MeshArena::new();
        let lo = mesh.add_vertex(0.0, -2.0, 0.0);
        let hi = mesh.add_vertex(0.0, 2.0, 0.0);

        mesh.scale_vertices_along(
            &[lo, hi],
            &Point3::new(0.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
            0.5,
        )
        .unwrap();

        assert_relative_eq!(mesh.vertex_point(lo).unwrap().y, -1.0);
        assert_relative_eq!(mesh.vertex_point(hi).unwrap().y, 1.0);
    }
}
