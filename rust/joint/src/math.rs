// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric comparisons and geometric predicates used across the builder.

use nalgebra::{Point3, Vector3};
use joinery_mesh::{closest_point_on_line, signed_distance_to_plane, FaceKey, MeshArena};

/// Default relative tolerance for scalar comparisons.
pub const EPSILON: f64 = 1e-5;

/// Absolute distance below which two points are considered the same.
pub const POINTS_ARE_NEAR: f64 = 1e-4;

/// Relative-error float comparison.
///
/// Exactly equal values compare equal regardless of magnitude. When either
/// operand is zero, or the difference is denormal, the comparison falls back
/// to an absolute test scaled by the smallest positive normal float, so the
/// relative division never blows up.
pub fn nearly_equal(a: f64, b: f64) -> bool {
    nearly_equal_eps(a, b, EPSILON)
}

/// [`nearly_equal`] with an explicit tolerance.
pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = (a - b).abs();

    if a == b {
        true
    } else if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        diff < epsilon * f64::MIN_POSITIVE
    } else {
        diff / (a.abs() + b.abs()) < epsilon
    }
}

/// True when `value` is zero within the default tolerance.
pub fn almost_zero(value: f64) -> bool {
    nearly_equal(value, 0.0)
}

/// True when two vectors are parallel or antiparallel: the angle between them
/// is nearly 0 or nearly pi. Direction-line equality, ignoring sign.
pub fn same_direction(t0: &Vector3<f64>, t1: &Vector3<f64>) -> bool {
    let denom = t0.norm() * t1.norm();
    if denom < f64::MIN_POSITIVE {
        return false;
    }
    let angle = (t0.dot(t1) / denom).clamp(-1.0, 1.0).acos();
    nearly_equal(angle, 0.0) || nearly_equal(angle, std::f64::consts::PI)
}

/// Angle in radians between two vectors.
pub fn angle_between(t0: &Vector3<f64>, t1: &Vector3<f64>) -> f64 {
    let denom = t0.norm() * t1.norm();
    if denom < f64::MIN_POSITIVE {
        return 0.0;
    }
    (t0.dot(t1) / denom).clamp(-1.0, 1.0).acos()
}

/// Perpendicular distance from a point to the infinite line through an edge's
/// endpoints.
pub fn distance_point_line(point: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let (proj, _) = closest_point_on_line(point, a, b);
    (point - proj).norm()
}

/// Which side of a plane a face lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    InFront,
    Behind,
    OnPlane,
    Straddles,
}

/// Classifies a face against the plane through `plane_point` with `normal`.
///
/// Vertices within [`POINTS_ARE_NEAR`] of the plane count as on it.
pub fn face_plane_side(
    mesh: &MeshArena,
    face: FaceKey,
    plane_point: &Point3<f64>,
    normal: &Vector3<f64>,
) -> Option<PlaneSide> {
    let verts = mesh.face_vertices_ordered(face)?;
    let mut in_front = 0usize;
    let mut behind = 0usize;

    for vk in verts {
        let p = mesh.vertex_point(vk)?;
        let d = signed_distance_to_plane(&p, plane_point, normal);
        if d.abs() <= POINTS_ARE_NEAR {
            continue;
        } else if d > 0.0 {
            in_front += 1;
        } else {
            behind += 1;
        }
    }

    Some(if in_front > 0 && behind > 0 {
        PlaneSide::Straddles
    } else if in_front > 0 {
        PlaneSide::InFront
    } else if behind > 0 {
        PlaneSide::Behind
    } else {
        PlaneSide::OnPlane
    })
}

/// Axis-aligned bounding box used as a broad-phase rejection filter before
/// exact intersection tests.
#[derive(Debug, Clone, Copy)]
pub struct BBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BBox {
    /// The box spanning a face's vertices, or `None` for a stale key.
    pub fn from_face(mesh: &MeshArena, face: FaceKey) -> Option<BBox> {
        Self::from_faces(mesh, std::iter::once(face))
    }

    /// The combined box of several faces' vertices.
    pub fn from_faces(
        mesh: &MeshArena,
        faces: impl IntoIterator<Item = FaceKey>,
    ) -> Option<BBox> {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;

        for fk in faces {
            for vk in mesh.face_vertices_ordered(fk)? {
                let p = mesh.vertex_point(vk)?;
                min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
                max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
                any = true;
            }
        }
        if !any {
            return None;
        }
        Some(BBox { min, max })
    }

    /// Axis-aligned overlap test, inclusive at the boundary.
    pub fn intersect(&self, other: &BBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// True when a point is inside the box (inclusive, with tolerance).
    pub fn contains_point(&self, p: &Point3<f64>) -> bool {
        let eps = POINTS_ARE_NEAR;
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
            && p.z >= self.min.z - eps
            && p.z <= self.max.z + eps
    }

    /// Filters faces whose vertices all lie within the box.
    pub fn inside_faces(
        &self,
        mesh: &MeshArena,
        faces: impl IntoIterator<Item = FaceKey>,
    ) -> Vec<FaceKey> {
        let mut inside = Vec::new();
        'faces: for fk in faces {
            let Some(verts) = mesh.face_vertices_ordered(fk) else {
                continue;
            };
            for vk in verts {
                let Some(p) = mesh.vertex_point(vk) else {
                    continue 'faces;
                };
                if !self.contains_point(&p) {
                    continue 'faces;
                }
            }
            inside.push(fk);
        }
        inside
    }
}
