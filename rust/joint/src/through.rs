// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Through-mortise hole cutting.
//!
//! A mortise sunk deep enough pierces the far side of the solid. The sunken
//! top face's vertical edges are cast as rays against the faces behind the
//! original surface; exactly four hits mean the cut goes through, and the
//! pierced faces are replaced by a bridged hole.

use nalgebra::Point3;
use rustc_hash::FxHashSet;
use tracing::debug;

use joinery_mesh::{ray_triangle_intersect, DeleteMode, EdgeKey, FaceKey, MeshArena};

use crate::error::{Error, Result};
use crate::features::FaceFeatures;
use crate::math::{face_plane_side, same_direction, BBox, PlaneSide, POINTS_ARE_NEAR};

struct TriFace {
    face: FaceKey,
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
}

/// One ray hit: where a penetrating edge pierces the far side. Grazing a
/// triangulation diagonal reports both triangles, so a hit can carry more
/// than one source face at the same point.
struct Hit {
    edge: EdgeKey,
    point: Point3<f64>,
    faces: Vec<FaceKey>,
}

/// Cuts the hole for a through mortise, or leaves the mortise blind when the
/// sunken face's edges reach no opposite face.
///
/// Returns `true` when a hole was cut. Fails loudly on one to three hits
/// (the cut grazes the far side) and on more than four (the far side is not
/// a single face the cut can pierce cleanly).
pub(crate) fn create_hole_in_opposite_faces(
    mesh: &mut MeshArena,
    features: &FaceFeatures,
    top_face: FaceKey,
    not_intersecting: &[FaceKey],
) -> Result<bool> {
    let top_normal = mesh
        .face_normal(top_face)
        .ok_or(joinery_mesh::Error::DegenerateNormal)?;

    // Edges at the sunken face's corners running along its normal.
    let mut intersect_edges: Vec<EdgeKey> = Vec::new();
    let mut intersect_faces: FxHashSet<FaceKey> = FxHashSet::default();
    let top_verts = mesh
        .face_vertices_ordered(top_face)
        .ok_or(joinery_mesh::Error::FaceNotFound(top_face))?;
    for &vert in &top_verts {
        for edge in mesh.vertex_edges(vert) {
            let Some((a, b)) = mesh.edge_vertices(edge) else {
                continue;
            };
            let (Some(pa), Some(pb)) = (mesh.vertex_point(a), mesh.vertex_point(b)) else {
                continue;
            };
            if same_direction(&(pa - pb), &top_normal) && !intersect_edges.contains(&edge) {
                intersect_edges.push(edge);
                intersect_faces.extend(mesh.edge_faces(edge));
            }
        }
    }

    let wall_boxes: Vec<BBox> = intersect_faces
        .iter()
        .filter_map(|&f| BBox::from_face(mesh, f))
        .collect();

    let tri_faces = candidate_triangles(
        mesh,
        features,
        top_face,
        &intersect_faces,
        &wall_boxes,
        not_intersecting,
    );

    let hits = find_intersection_points(mesh, &intersect_edges, &tri_faces);
    let count = hits.len();
    debug!(count, "through-cut ray hits");

    match count {
        0 => Ok(false),
        4 => {
            snap_top_to_hits(mesh, top_face, &hits)?;
            cut_hole(mesh, top_face, &hits)?;
            Ok(true)
        }
        1..=3 => Err(Error::PartialThroughCut(count)),
        _ => Err(Error::AmbiguousThroughCut(count)),
    }
}

/// Triangulated view of every face that could lie in the cut's path: behind
/// the original surface and overlapping a penetrating wall's bounding box.
fn candidate_triangles(
    mesh: &MeshArena,
    features: &FaceFeatures,
    top_face: FaceKey,
    intersect_faces: &FxHashSet<FaceKey>,
    wall_boxes: &[BBox],
    not_intersecting: &[FaceKey],
) -> Vec<TriFace> {
    let mut tri_faces = Vec::new();
    for face in mesh.face_keys() {
        if face == top_face || intersect_faces.contains(&face) || not_intersecting.contains(&face) {
            continue;
        }
        let Some(face_box) = BBox::from_face(mesh, face) else {
            continue;
        };
        if !wall_boxes.iter().any(|wb| wb.intersect(&face_box)) {
            continue;
        }
        match face_plane_side(mesh, face, &features.median, &features.normal) {
            Some(PlaneSide::Behind) | Some(PlaneSide::Straddles) => {}
            _ => continue,
        }
        let Some(triangles) = mesh.triangulate_face(face) else {
            continue;
        };
        for (a, b, c) in triangles {
            let (Some(v0), Some(v1), Some(v2)) = (
                mesh.vertex_point(a),
                mesh.vertex_point(b),
                mesh.vertex_point(c),
            ) else {
                continue;
            };
            tri_faces.push(TriFace { face, v0, v1, v2 });
        }
    }
    tri_faces
}

fn find_intersection_points(
    mesh: &MeshArena,
    intersect_edges: &[EdgeKey],
    tri_faces: &[TriFace],
) -> Vec<Hit> {
    let mut hits: Vec<Hit> = Vec::new();
    for &edge in intersect_edges {
        let Some((a, b)) = mesh.edge_vertices(edge) else {
            continue;
        };
        let (Some(origin), Some(toward)) = (mesh.vertex_point(a), mesh.vertex_point(b)) else {
            continue;
        };
        let ray = toward - origin;

        for tri in tri_faces {
            let Some(point) = ray_triangle_intersect(&origin, &ray, &tri.v0, &tri.v1, &tri.v2)
            else {
                continue;
            };
            // Coalesce coincident hits from this edge into one.
            if let Some(existing) = hits
                .iter_mut()
                .find(|h| h.edge == edge && (h.point - point).norm() < POINTS_ARE_NEAR)
            {
                if !existing.faces.contains(&tri.face) {
                    existing.faces.push(tri.face);
                }
            } else {
                hits.push(Hit {
                    edge,
                    point,
                    faces: vec![tri.face],
                });
            }
        }
    }
    hits
}

/// Moves each sunken-face corner onto its ray's hit point so the hole rim
/// lies exactly in the pierced surface.
fn snap_top_to_hits(mesh: &mut MeshArena, top_face: FaceKey, hits: &[Hit]) -> Result<()> {
    for hit in hits {
        let (a, b) = mesh
            .edge_vertices(hit.edge)
            .ok_or(joinery_mesh::Error::EdgeNotFound(hit.edge))?;
        let vert = if mesh.vertex_faces(a).contains(&top_face) {
            a
        } else {
            b
        };
        mesh.set_vertex_position(vert, hit.point)?;
    }
    Ok(())
}

/// Pierced faces form a box lid when each is edge-linked to at least two
/// others in the set. Anything looser hides faces inside the cut region.
fn faces_are_box_connected(mesh: &MeshArena, faces: &FxHashSet<FaceKey>) -> bool {
    if faces.len() > 4 {
        return false;
    }
    if faces.len() <= 1 {
        return true;
    }
    for &face in faces {
        let Some(edges) = mesh.face_edges(face) else {
            return false;
        };
        let mut linked = 0usize;
        for &edge in edges {
            for other in mesh.edge_faces(edge) {
                if other != face && faces.contains(&other) {
                    linked += 1;
                }
            }
        }
        if linked < 2 {
            return false;
        }
    }
    true
}

fn outer_edge_loop(mesh: &MeshArena, faces: &FxHashSet<FaceKey>) -> FxHashSet<EdgeKey> {
    let mut outer = FxHashSet::default();
    for &face in faces {
        let Some(edges) = mesh.face_edges(face) else {
            continue;
        };
        for &edge in edges {
            if mesh.edge_faces(edge).iter().any(|f| !faces.contains(f)) {
                outer.insert(edge);
            }
        }
    }
    outer
}

fn cut_hole(mesh: &mut MeshArena, top_face: FaceKey, hits: &[Hit]) -> Result<()> {
    let mut faces_to_delete: FxHashSet<FaceKey> = FxHashSet::default();
    for hit in hits {
        faces_to_delete.extend(hit.faces.iter().copied());
    }

    // Faces strictly between the pierced ones fall inside the cut too.
    if !faces_are_box_connected(mesh, &faces_to_delete) {
        if let Some(bbox) = BBox::from_faces(mesh, faces_to_delete.iter().copied()) {
            let all: Vec<FaceKey> = mesh.face_keys().collect();
            faces_to_delete.extend(bbox.inside_faces(mesh, all));
        }
    }

    let outer_edges = outer_edge_loop(mesh, &faces_to_delete);
    let rim_edges: FxHashSet<EdgeKey> = mesh
        .face_edges(top_face)
        .ok_or(joinery_mesh::Error::FaceNotFound(top_face))?
        .iter()
        .copied()
        .collect();

    faces_to_delete.insert(top_face);
    let doomed: Vec<FaceKey> = faces_to_delete.into_iter().collect();
    mesh.delete_faces(&doomed, DeleteMode::FacesAndOrphans)?;

    mesh.bridge_loops(&rim_edges, &outer_edges)?;
    Ok(())
}
