// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric queries on mesh elements.
//!
//! Computes lengths, normals, centroids, triangulations and containment using
//! standard computational geometry algorithms (no external kernel required).
//! Free-function predicates (ray/triangle, point/plane, line/plane) are also
//! exported for callers that work on raw points.

use nalgebra::{Point3, Vector3};

use crate::arena::MeshArena;
use crate::keys::*;

impl MeshArena {
    /// Returns the 3D position of a vertex as a nalgebra Point3.
    pub fn vertex_point(&self, key: VertexKey) -> Option<Point3<f64>> {
        self.vertices.get(key).map(|v| Point3::new(v.x, v.y, v.z))
    }

    /// Computes the Euclidean length of an edge.
    pub fn edge_length(&self, key: EdgeKey) -> Option<f64> {
        let edge = self.edges.get(key)?;
        let p0 = self.vertex_point(edge.start)?;
        let p1 = self.vertex_point(edge.end)?;
        Some((p1 - p0).norm())
    }

    /// The (un-normalized) vector from an edge's start to its end vertex.
    pub fn edge_vector(&self, key: EdgeKey) -> Option<Vector3<f64>> {
        let edge = self.edges.get(key)?;
        let p0 = self.vertex_point(edge.start)?;
        let p1 = self.vertex_point(edge.end)?;
        Some(p1 - p0)
    }

    /// The midpoint of an edge.
    pub fn edge_midpoint(&self, key: EdgeKey) -> Option<Point3<f64>> {
        let edge = self.edges.get(key)?;
        let p0 = self.vertex_point(edge.start)?;
        let p1 = self.vertex_point(edge.end)?;
        Some(Point3::from((p0.coords + p1.coords) * 0.5))
    }

    /// Computes the face normal using Newell's method.
    ///
    /// Works for any planar polygon (convex or concave). The normal direction
    /// follows the right-hand rule relative to the vertex winding order.
    pub fn face_normal(&self, key: FaceKey) -> Option<Vector3<f64>> {
        let verts = self.face_vertices_ordered(key)?;

        if verts.len() < 3 {
            return None;
        }

        let mut normal = Vector3::new(0.0, 0.0, 0.0);
        let n = verts.len();

        for i in 0..n {
            let curr = self.vertex_point(verts[i])?;
            let next = self.vertex_point(verts[(i + 1) % n])?;

            normal.x += (curr.y - next.y) * (curr.z + next.z);
            normal.y += (curr.z - next.z) * (curr.x + next.x);
            normal.z += (curr.x - next.x) * (curr.y + next.y);
        }

        let len = normal.norm();
        if len < 1e-15 {
            return None; // degenerate face
        }

        Some(normal / len)
    }

    /// Computes the centroid (vertex average) of a face.
    pub fn face_centroid(&self, key: FaceKey) -> Option<Point3<f64>> {
        let verts = self.face_vertices_ordered(key)?;

        if verts.is_empty() {
            return None;
        }

        let mut sum = Vector3::new(0.0, 0.0, 0.0);
        for &vk in &verts {
            let p = self.vertex_point(vk)?;
            sum += p.coords;
        }

        let n = verts.len() as f64;
        Some(Point3::from(sum / n))
    }

    /// Triangulates a face into triangles (vertex key triples).
    ///
    /// Uses ear-clipping via projection onto the face's dominant plane.
    pub fn triangulate_face(&self, key: FaceKey) -> Option<Vec<(VertexKey, VertexKey, VertexKey)>> {
        let verts = self.face_vertices_ordered(key)?;

        if verts.len() < 3 {
            return None;
        }
        if verts.len() == 3 {
            return Some(vec![(verts[0], verts[1], verts[2])]);
        }

        let normal = self.face_normal(key)?;

        // Determine dominant axis for 2D projection
        let abs_n = Vector3::new(normal.x.abs(), normal.y.abs(), normal.z.abs());
        let (ax_u, ax_v) = if abs_n.z >= abs_n.x && abs_n.z >= abs_n.y {
            (0, 1) // project onto XY
        } else if abs_n.y >= abs_n.x {
            (0, 2) // project onto XZ
        } else {
            (1, 2) // project onto YZ
        };

        let mut coords_2d: Vec<f64> = Vec::with_capacity(verts.len() * 2);
        for &vk in &verts {
            let p = self.vertex_point(vk)?;
            let c = [p.x, p.y, p.z];
            coords_2d.push(c[ax_u]);
            coords_2d.push(c[ax_v]);
        }

        let indices = earcutr::earcut(&coords_2d, &[], 2).ok()?;

        let mut triangles = Vec::with_capacity(indices.len() / 3);
        for chunk in indices.chunks(3) {
            if chunk.len() == 3 {
                triangles.push((verts[chunk[0]], verts[chunk[1]], verts[chunk[2]]));
            }
        }

        Some(triangles)
    }

    /// Tests whether a point lying in (or near) the face plane is inside the
    /// face boundary. The point is tested against the face's triangulation
    /// with a small barycentric tolerance.
    pub fn face_contains_point(&self, key: FaceKey, point: &Point3<f64>) -> bool {
        let Some(triangles) = self.triangulate_face(key) else {
            return false;
        };
        for (a, b, c) in triangles {
            let (Some(pa), Some(pb), Some(pc)) = (
                self.vertex_point(a),
                self.vertex_point(b),
                self.vertex_point(c),
            ) else {
                continue;
            };
            if point_in_triangle(point, &pa, &pb, &pc, 1e-9) {
                return true;
            }
        }
        false
    }
}

/// The normal of the triangle (v0, v1, v2) by the right-hand rule, or `None`
/// for a degenerate triangle.
pub fn triangle_normal(
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> Option<Vector3<f64>> {
    let n = (v1 - v0).cross(&(v2 - v0));
    let len = n.norm();
    if len < 1e-15 {
        return None;
    }
    Some(n / len)
}

/// Möller–Trumbore ray/triangle intersection.
///
/// Casts an infinite ray from `origin` along `dir` and returns the hit point
/// on the triangle (v0, v1, v2), or `None` if the ray misses or points away.
pub fn ray_triangle_intersect(
    origin: &Point3<f64>,
    dir: &Vector3<f64>,
    v0: &Point3<f64>,
    v1: &Point3<f64>,
    v2: &Point3<f64>,
) -> Option<Point3<f64>> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = dir.cross(&edge2);
    let a = edge1.dot(&h);

    if a.abs() < 1e-12 {
        return None; // ray parallel to triangle
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * dir.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);
    if t <= 1e-12 {
        return None; // intersection behind the origin
    }
    Some(origin + dir * t)
}

/// Signed distance from `point` to the plane through `plane_point` with unit
/// `normal`. Positive on the side the normal points toward.
pub fn signed_distance_to_plane(
    point: &Point3<f64>,
    plane_point: &Point3<f64>,
    normal: &Vector3<f64>,
) -> f64 {
    (point - plane_point).dot(normal)
}

/// Intersection of the infinite line through `p0` and `p1` with a plane.
///
/// Returns `None` when the line is parallel to the plane.
pub fn line_plane_intersect(
    p0: &Point3<f64>,
    p1: &Point3<f64>,
    plane_point: &Point3<f64>,
    normal: &Vector3<f64>,
) -> Option<Point3<f64>> {
    let dir = p1 - p0;
    let denom = dir.dot(normal);
    if denom.abs() < 1e-12 {
        return None;
    }
    let t = (plane_point - p0).dot(normal) / denom;
    Some(p0 + dir * t)
}

/// Projection of `point` onto the infinite line through `a` and `b`.
///
/// Returns the closest point and the line parameter `t` (0 at `a`, 1 at `b`).
pub fn closest_point_on_line(
    point: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> (Point3<f64>, f64) {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < 1e-30 {
        return (*a, 0.0);
    }
    let t = (point - a).dot(&ab) / len_sq;
    (a + ab * t, t)
}

/// Barycentric point-in-triangle test with tolerance, for points assumed to
/// lie in or near the triangle plane.
fn point_in_triangle(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    eps: f64,
) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < 1e-30 {
        return false;
    }
    let inv = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv;
    let v = (dot00 * dot12 - dot01 * dot02) * inv;

    u >= -eps && v >= -eps && u + v <= 1.0 + eps
}
