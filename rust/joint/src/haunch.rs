// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Haunch construction on the shoulder faces.
//!
//! A haunch raises (or sinks, for a mortise) a shoulder face to a fraction of
//! the joint depth, either straight or sloped, then stitches the haunch flank
//! to the tenon so the side wall is a single clean face again.

use nalgebra::{Matrix4, Vector3};
use tracing::{debug, trace};

use joinery_mesh::{DeleteMode, EdgeKey, FaceKey, MeshArena};

use crate::classify::ShoulderFace;
use crate::error::Result;
use crate::features::FaceFeatures;
use crate::markers::{GeometryMarkers, Marker};
use crate::math::{almost_zero, angle_between, nearly_equal, same_direction, POINTS_ARE_NEAR};
use crate::params::{HaunchShape, ResolvedAxis, ResolvedHaunch};

/// Extrudes a face and pushes the top out along the face's world normal.
/// Negative depth sinks the face into the solid.
pub(crate) fn set_face_depth(
    mesh: &mut MeshArena,
    world: &Matrix4<f64>,
    face: FaceKey,
    depth: f64,
) -> Result<FaceKey> {
    let normal = mesh
        .face_normal(face)
        .ok_or(joinery_mesh::Error::DegenerateNormal)?;
    let extrusion = mesh.extrude_face(face, &Vector3::zeros())?;

    let linear = world.fixed_view::<3, 3>(0, 0).into_owned();
    let normal_world = (linear * normal).normalize() * depth;

    let top_verts = mesh
        .face_vertices_ordered(extrusion.top)
        .ok_or(joinery_mesh::Error::FaceNotFound(extrusion.top))?;
    mesh.translate_vertices_world(&top_verts, &normal_world, world)?;

    Ok(extrusion.top)
}

/// Extrudes a face and raises only one of its edges, leaving the opposite
/// edge in place. The walls on the still side collapse to nothing and the
/// side walls become triangles, producing a wedge.
pub(crate) fn set_face_sloped(
    mesh: &mut MeshArena,
    markers: &mut GeometryMarkers,
    world: &Matrix4<f64>,
    face: FaceKey,
    still_edge_tangent: &Vector3<f64>,
    depth: f64,
) -> Result<FaceKey> {
    let normal = mesh
        .face_normal(face)
        .ok_or(joinery_mesh::Error::DegenerateNormal)?;
    let extrusion = mesh.extrude_face(face, &Vector3::zeros())?;
    let top = extrusion.top;

    let linear = world.fixed_view::<3, 3>(0, 0).into_owned();
    let normal_world = (linear * normal).normalize() * depth;

    let mut still_edge = None;
    let mut edge_to_raise = None;
    let top_edges: Vec<EdgeKey> = mesh
        .face_edges(top)
        .ok_or(joinery_mesh::Error::FaceNotFound(top))?
        .to_vec();
    for &edge in &top_edges {
        let Some(tangent) = mesh.edge_tangent(top, edge) else {
            continue;
        };
        let angle = angle_between(&tangent, still_edge_tangent);
        if almost_zero(angle) {
            still_edge = Some(edge);
        } else if nearly_equal(angle, std::f64::consts::PI) {
            edge_to_raise = Some(edge);
        }
    }
    let still_edge = still_edge.expect("sloped face has an edge along the still tangent");
    let edge_to_raise = edge_to_raise.expect("sloped face has an edge opposite the still tangent");

    let wall_to_remove = mesh
        .edge_faces(still_edge)
        .into_iter()
        .find(|&f| f != top)
        .expect("extrusion left a wall on the still side");

    markers.save_face(Marker::Extruded, top);
    markers.save_edge(Marker::EdgeToRaise, edge_to_raise);

    mesh.delete_faces(&[wall_to_remove], DeleteMode::FacesAndOrphans)?;

    // The vertical edges flanking the removed wall still tie the top to the
    // base. Collapse them so the side walls turn into triangles.
    let top = markers
        .peek_face(mesh, Marker::Extruded)
        .expect("extruded face survives the wall removal");
    let mut edges_to_collapse: Vec<EdgeKey> = Vec::new();
    let top_edges: Vec<EdgeKey> = mesh
        .face_edges(top)
        .ok_or(joinery_mesh::Error::FaceNotFound(top))?
        .to_vec();
    for &edge in &top_edges {
        let Some(tangent) = mesh.edge_tangent(top, edge) else {
            continue;
        };
        if !almost_zero(angle_between(&tangent, still_edge_tangent)) {
            continue;
        }
        let (a, b) = mesh
            .edge_vertices(edge)
            .ok_or(joinery_mesh::Error::EdgeNotFound(edge))?;
        for vert in [a, b] {
            for linked in mesh.vertex_edges(vert) {
                if linked == edge {
                    continue;
                }
                let touches_top = mesh.edge_faces(linked).contains(&top);
                if !touches_top && !edges_to_collapse.contains(&linked) {
                    edges_to_collapse.push(linked);
                }
            }
        }
    }
    for edge in edges_to_collapse {
        if let Some((a, b)) = mesh.edge_vertices(edge) {
            let target = mesh
                .vertex_point(a)
                .ok_or(joinery_mesh::Error::VertexNotFound(a))?;
            mesh.point_merge(&[a, b], target)?;
        }
    }

    let top = markers
        .take_face(mesh, Marker::Extruded)
        .expect("extruded face survives the collapse");
    let edge_to_raise = markers
        .take_edge(mesh, Marker::EdgeToRaise)
        .expect("raised edge survives the collapse");
    let (a, b) = mesh
        .edge_vertices(edge_to_raise)
        .ok_or(joinery_mesh::Error::EdgeNotFound(edge_to_raise))?;
    mesh.translate_vertices_world(&[a, b], &normal_world, world)?;

    debug!(?top, "raised sloped haunch");
    Ok(top)
}

/// The face sharing an edge with the haunch top whose normal runs along the
/// outward side tangent.
fn find_haunch_external_face(
    mesh: &MeshArena,
    haunch_top: FaceKey,
    side_tangent: &Vector3<f64>,
) -> Option<FaceKey> {
    let edges = mesh.face_edges(haunch_top)?;
    for &edge in edges {
        for face in mesh.edge_faces(edge) {
            if face == haunch_top {
                continue;
            }
            let Some(normal) = mesh.face_normal(face) else {
                continue;
            };
            if almost_zero(angle_between(side_tangent, &normal)) {
                return Some(face);
            }
        }
    }
    None
}

/// A sunken haunch on a mortise leaves its outer wall split in two by an
/// edge on the original surface. Project the haunch rim onto the outer
/// wall's plane and dissolve that edge so the wall stays a single flat face.
pub(crate) fn make_mortise_haunch_hole_on_side_face(
    mesh: &mut MeshArena,
    features: &FaceFeatures,
    haunch_top: FaceKey,
    side_tangent: &Vector3<f64>,
) -> Result<()> {
    let Some(hole_face) = find_haunch_external_face(mesh, haunch_top, side_tangent) else {
        return Ok(());
    };

    let mut top_edge_to_dissolve = None;
    let hole_edges: Vec<EdgeKey> = mesh
        .face_edges(hole_face)
        .ok_or(joinery_mesh::Error::FaceNotFound(hole_face))?
        .to_vec();
    for &edge in &hole_edges {
        let Some(center) = mesh.edge_midpoint(edge) else {
            continue;
        };
        let distance =
            joinery_mesh::signed_distance_to_plane(&center, &features.median, &features.normal);
        if almost_zero(distance.abs()) {
            top_edge_to_dissolve = Some(edge);
            break;
        }
    }
    let Some(top_edge) = top_edge_to_dissolve else {
        return Ok(());
    };

    let linked = mesh.edge_faces(top_edge);
    if linked.len() != 2 {
        return Ok(());
    }
    let adjacent_face = linked
        .into_iter()
        .find(|&f| f != hole_face)
        .expect("two linked faces include one beside the hole");

    let plane_point = {
        let verts = mesh
            .face_vertices_ordered(adjacent_face)
            .ok_or(joinery_mesh::Error::FaceNotFound(adjacent_face))?;
        mesh.vertex_point(verts[0])
            .ok_or(joinery_mesh::Error::VertexNotFound(verts[0]))?
    };
    let plane_normal = mesh
        .face_normal(adjacent_face)
        .ok_or(joinery_mesh::Error::DegenerateNormal)?;

    // Move the rim vertices of the haunch top onto the adjacent face's plane
    // along their cross edges.
    let mut could_intersect = true;
    let haunch_edges: Vec<EdgeKey> = mesh
        .face_edges(haunch_top)
        .ok_or(joinery_mesh::Error::FaceNotFound(haunch_top))?
        .to_vec();
    for &edge in &haunch_edges {
        let Some(tangent) = mesh.edge_tangent(haunch_top, edge) else {
            continue;
        };
        if same_direction(&tangent, side_tangent) {
            continue;
        }
        let (v0, v1) = mesh
            .edge_vertices(edge)
            .ok_or(joinery_mesh::Error::EdgeNotFound(edge))?;
        let p0 = mesh
            .vertex_point(v0)
            .ok_or(joinery_mesh::Error::VertexNotFound(v0))?;
        let p1 = mesh
            .vertex_point(v1)
            .ok_or(joinery_mesh::Error::VertexNotFound(v1))?;

        let Some(intersection) =
            joinery_mesh::line_plane_intersect(&p0, &p1, &plane_point, &plane_normal)
        else {
            could_intersect = false;
            break;
        };

        let d0 = joinery_mesh::signed_distance_to_plane(&p0, &plane_point, &plane_normal).abs();
        let d1 = joinery_mesh::signed_distance_to_plane(&p1, &plane_point, &plane_normal).abs();
        let origin = if d0 < d1 { v0 } else { v1 };
        mesh.set_vertex_position(origin, intersection)?;
    }

    if could_intersect {
        mesh.dissolve_edge(top_edge)?;
    }
    Ok(())
}

/// Tenon-top neighbor whose normal opposes the side tangent. For a mortise
/// the walls face inward, so the test flips.
fn find_tenon_haunch_adjacent_face(
    mesh: &MeshArena,
    tenon_top: FaceKey,
    side_tangent: &Vector3<f64>,
    is_mortise: bool,
) -> Option<FaceKey> {
    let edges = mesh.face_edges(tenon_top)?;
    for &edge in edges {
        for face in mesh.edge_faces(edge) {
            if face == tenon_top {
                continue;
            }
            let Some(mut normal) = mesh.face_normal(face) else {
                continue;
            };
            if is_mortise {
                normal = -normal;
            }
            if nearly_equal(angle_between(side_tangent, &normal), std::f64::consts::PI) {
                return Some(face);
            }
        }
    }
    None
}

/// Haunch-top edge closest to the plane of the adjacent tenon wall.
fn find_haunch_adjacent_edge(
    mesh: &MeshArena,
    adjacent_face: FaceKey,
    haunch_top: FaceKey,
) -> Option<EdgeKey> {
    let verts = mesh.face_vertices_ordered(adjacent_face)?;
    let plane_point = mesh.vertex_point(verts[0])?;
    let plane_normal = mesh.face_normal(adjacent_face)?;

    let mut best = None;
    let mut best_distance = f64::MAX;
    for &edge in mesh.face_edges(haunch_top)? {
        let center = mesh.edge_midpoint(edge)?;
        let distance =
            joinery_mesh::signed_distance_to_plane(&center, &plane_point, &plane_normal).abs();
        if distance < best_distance {
            best = Some(edge);
            best_distance = distance;
        }
    }
    best
}

/// Faces linked to `reference_face` whose normal runs along the in-plane
/// direction perpendicular to `direction`.
fn find_linked_faces_by_opposite_direction(
    mesh: &MeshArena,
    features: &FaceFeatures,
    reference_face: FaceKey,
    direction: &Vector3<f64>,
) -> Vec<FaceKey> {
    let perpendicular = direction.cross(&features.normal);
    let mut found = Vec::new();
    let Some(edges) = mesh.face_edges(reference_face) else {
        return found;
    };
    for &edge in edges {
        for face in mesh.edge_faces(edge) {
            if face == reference_face {
                continue;
            }
            let Some(normal) = mesh.face_normal(face) else {
                continue;
            };
            if same_direction(&perpendicular, &normal) && !found.contains(&face) {
                found.push(face);
                break;
            }
        }
    }
    found
}

/// Stitches the haunch flank to the tenon wall.
///
/// The extrusions left a stepped wall between the haunch top and the tenon:
/// the tenon wall overshoots the haunch rim and small connecting faces fill
/// the gap. Split the tenon wall's edges level with the haunch rim, merge
/// the seam, drop the connecting faces, and rebuild the wall as one quad.
pub(crate) fn beautify_haunched_tenon(
    mesh: &mut MeshArena,
    markers: &mut GeometryMarkers,
    features: &FaceFeatures,
    tenon_top: FaceKey,
    haunch_top: FaceKey,
    side_tangent: &Vector3<f64>,
    dissolve_sides: bool,
    is_mortise: bool,
) -> Result<()> {
    let adjacent_face = find_tenon_haunch_adjacent_face(mesh, tenon_top, side_tangent, is_mortise)
        .expect("tenon has a wall facing the haunch");
    markers.save_face(Marker::TenonHaunchAdjacentFace, adjacent_face);

    let adjacent_edge = find_haunch_adjacent_edge(mesh, adjacent_face, haunch_top)
        .expect("haunch top has an edge level with the tenon wall");
    markers.save_edge(Marker::HaunchAdjacentEdge, adjacent_edge);

    // Split the tenon wall edges level with the haunch rim.
    let (rim_a, rim_b) = mesh
        .edge_vertices(adjacent_edge)
        .ok_or(joinery_mesh::Error::EdgeNotFound(adjacent_edge))?;
    for rim_vert in [rim_a, rim_b] {
        let rim_point = mesh
            .vertex_point(rim_vert)
            .ok_or(joinery_mesh::Error::VertexNotFound(rim_vert))?;

        let mut nearest_edge = None;
        let mut best_distance = f64::MAX;
        let wall_edges: Vec<EdgeKey> = mesh
            .face_edges(adjacent_face)
            .ok_or(joinery_mesh::Error::FaceNotFound(adjacent_face))?
            .to_vec();
        for &edge in &wall_edges {
            let (a, b) = mesh
                .edge_vertices(edge)
                .ok_or(joinery_mesh::Error::EdgeNotFound(edge))?;
            let pa = mesh
                .vertex_point(a)
                .ok_or(joinery_mesh::Error::VertexNotFound(a))?;
            let pb = mesh
                .vertex_point(b)
                .ok_or(joinery_mesh::Error::VertexNotFound(b))?;
            let distance = crate::math::distance_point_line(&rim_point, &pa, &pb);
            if distance < best_distance {
                nearest_edge = Some(edge);
                best_distance = distance;
            }
        }
        let nearest_edge = nearest_edge.expect("tenon wall has edges");

        let (a, b) = mesh
            .edge_vertices(nearest_edge)
            .ok_or(joinery_mesh::Error::EdgeNotFound(nearest_edge))?;
        let pa = mesh
            .vertex_point(a)
            .ok_or(joinery_mesh::Error::VertexNotFound(a))?;
        let pb = mesh
            .vertex_point(b)
            .ok_or(joinery_mesh::Error::VertexNotFound(b))?;
        let (_, t) = joinery_mesh::closest_point_on_line(&rim_point, &pa, &pb);
        // A rim vertex projecting onto an endpoint still gets a split vertex;
        // the weld below absorbs it.
        mesh.split_edge(nearest_edge, t.clamp(1e-6, 1.0 - 1e-6))?;
    }

    // Weld the split vertices onto the rim.
    mesh.auto_merge(POINTS_ARE_NEAR)?;

    // The merge can fold the rim edge into the freshly split wall segment,
    // so recover it from the haunch top if the key went stale.
    let adjacent_face = markers
        .take_face(mesh, Marker::TenonHaunchAdjacentFace)
        .expect("tenon wall survives the weld");
    let adjacent_edge = match markers.take_edge(mesh, Marker::HaunchAdjacentEdge) {
        Some(edge) => edge,
        None => find_haunch_adjacent_edge(mesh, adjacent_face, haunch_top)
            .expect("haunch rim survives the weld"),
    };

    // Drop the small faces connecting haunch and tenon.
    let connecting: Vec<FaceKey> = mesh
        .edge_faces(adjacent_edge)
        .into_iter()
        .filter(|&f| f != haunch_top)
        .collect();
    if !connecting.is_empty() {
        mesh.delete_faces(&connecting, DeleteMode::FacesOnly)?;
    }

    // Drop the old stepped wall.
    mesh.delete_faces(&[adjacent_face], DeleteMode::FacesAndOrphans)?;

    // Rebuild the wall from the rim and the tenon-top edge along the side.
    let (rim_a, rim_b) = mesh
        .edge_vertices(adjacent_edge)
        .ok_or(joinery_mesh::Error::EdgeNotFound(adjacent_edge))?;
    let mut top_pair = None;
    let top_edges: Vec<EdgeKey> = mesh
        .face_edges(tenon_top)
        .ok_or(joinery_mesh::Error::FaceNotFound(tenon_top))?
        .to_vec();
    for &edge in &top_edges {
        let Some(tangent) = mesh.edge_tangent(tenon_top, edge) else {
            continue;
        };
        if almost_zero(angle_between(&tangent, side_tangent)) {
            top_pair = mesh.edge_vertices(edge);
            break;
        }
    }
    let (top_a, top_b) = top_pair.expect("tenon top has an edge along the side tangent");

    let p = |v| mesh.vertex_point(v).expect("wall vertex is live");
    let (third, fourth) = if (p(top_a) - p(rim_b)).norm() <= (p(top_b) - p(rim_b)).norm() {
        (top_a, top_b)
    } else {
        (top_b, top_a)
    };
    let mut ring = [rim_a, rim_b, third, fourth];

    // Wind the rebuilt wall outward like the wall it replaces.
    let desired = if is_mortise {
        *side_tangent
    } else {
        -side_tangent
    };
    let points: Vec<_> = ring.iter().map(|&v| p(v)).collect();
    if let Some(normal) = joinery_mesh::triangle_normal(&points[0], &points[1], &points[2]) {
        if normal.dot(&desired) < 0.0 {
            ring.reverse();
        }
    }
    mesh.add_face_from_verts(&ring)?;
    trace!("rebuilt tenon side wall");

    // Merge the coplanar faces left on both flanks into single walls.
    if dissolve_sides {
        let mut to_dissolve =
            find_linked_faces_by_opposite_direction(mesh, features, tenon_top, side_tangent);
        for face in
            find_linked_faces_by_opposite_direction(mesh, features, haunch_top, side_tangent)
        {
            if !to_dissolve.contains(&face) {
                to_dissolve.push(face);
            }
        }
        if to_dissolve.len() > 1 {
            mesh.dissolve_faces(&to_dissolve)?;
        }
    }
    Ok(())
}

fn raise_haunch_side(
    mesh: &mut MeshArena,
    markers: &mut GeometryMarkers,
    world: &Matrix4<f64>,
    features: &FaceFeatures,
    tenon_top: FaceKey,
    side_tangent: &Vector3<f64>,
    shoulder: &ShoulderFace,
    haunch: &ResolvedHaunch,
    dissolve_sides: bool,
) -> Result<FaceKey> {
    let is_mortise = haunch.depth < 0.0;
    let haunch_top = match haunch.shape {
        HaunchShape::Sloped => set_face_sloped(
            mesh,
            markers,
            world,
            shoulder.face,
            side_tangent,
            haunch.depth,
        )?,
        HaunchShape::Straight => {
            let top = set_face_depth(mesh, world, shoulder.face, haunch.depth)?;
            if haunch.depth < 0.0 {
                make_mortise_haunch_hole_on_side_face(mesh, features, top, side_tangent)?;
            }
            top
        }
    };

    beautify_haunched_tenon(
        mesh,
        markers,
        features,
        tenon_top,
        haunch_top,
        side_tangent,
        dissolve_sides,
        is_mortise,
    )?;
    Ok(haunch_top)
}

/// Raises the configured haunches of one axis on its two shoulders and
/// returns their top faces.
#[allow(clippy::too_many_arguments)]
pub(crate) fn raise_haunches(
    mesh: &mut MeshArena,
    markers: &mut GeometryMarkers,
    world: &Matrix4<f64>,
    features: &FaceFeatures,
    tenon_top: FaceKey,
    first_shoulder: Option<&ShoulderFace>,
    second_shoulder: Option<&ShoulderFace>,
    side_tangent: &Vector3<f64>,
    axis: &ResolvedAxis,
    dissolve_sides: bool,
) -> Result<Vec<FaceKey>> {
    let mut haunch_tops = Vec::new();

    if let Some(haunch) = &axis.haunch_first {
        let shoulder = first_shoulder.expect("haunched axis has a first shoulder");
        haunch_tops.push(raise_haunch_side(
            mesh,
            markers,
            world,
            features,
            tenon_top,
            side_tangent,
            shoulder,
            haunch,
            dissolve_sides,
        )?);
    }
    if let Some(haunch) = &axis.haunch_second {
        let shoulder = second_shoulder.expect("haunched axis has a second shoulder");
        let flipped = -side_tangent;
        haunch_tops.push(raise_haunch_side(
            mesh,
            markers,
            world,
            features,
            tenon_top,
            &flipped,
            shoulder,
            haunch,
            dissolve_sides,
        )?);
    }
    Ok(haunch_tops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use joinery_mesh::make_box;
    use nalgebra::{Matrix4, Point3};

    #[test]
    fn straight_depth_raises_the_face() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 2.0, 1.0, 1.0).unwrap();

        let top = set_face_depth(&mut mesh, &Matrix4::identity(), faces.top, 0.5).unwrap();

        let centroid = mesh.face_centroid(top).unwrap();
        assert_relative_eq!(centroid.z, 1.5, epsilon = 1e-10);
        // Four walls plus top: the box gained a full story.
        assert_eq!(mesh.face_count(), 10);
    }

    #[test]
    fn negative_depth_sinks_the_face() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 2.0, 1.0, 1.0).unwrap();

        let top = set_face_depth(&mut mesh, &Matrix4::identity(), faces.top, -0.4).unwrap();

        let centroid = mesh.face_centroid(top).unwrap();
        assert_relative_eq!(centroid.z, 0.6, epsilon = 1e-10);
    }

    #[test]
    fn sloped_face_keeps_still_edge_in_place() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 2.0, 1.0, 1.0).unwrap();
        let mut markers = GeometryMarkers::default();

        // Still edge on the -x side of the top face: its inward tangent is +x.
        let still_tangent = Vector3::new(1.0, 0.0, 0.0);
        let top = set_face_sloped(
            &mut mesh,
            &mut markers,
            &Matrix4::identity(),
            faces.top,
            &still_tangent,
            0.5,
        )
        .unwrap();

        let mut min_z = f64::MAX;
        let mut max_z = f64::MIN;
        for v in mesh.face_vertices(top).unwrap() {
            let p = mesh.vertex_point(v).unwrap();
            min_z = min_z.min(p.z);
            max_z = max_z.max(p.z);
        }
        // One edge stayed on the original plane, the opposite one went up.
        assert_relative_eq!(min_z, 1.0, epsilon = 1e-10);
        assert_relative_eq!(max_z, 1.5, epsilon = 1e-10);

        // The still-side verts at x=0 keep their position.
        for v in mesh.face_vertices(top).unwrap() {
            let p = mesh.vertex_point(v).unwrap();
            if p.x.abs() < 1e-9 {
                assert_relative_eq!(p.z, 1.0, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn external_face_found_by_side_tangent() {
        let mut mesh = MeshArena::new();
        let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 2.0, 1.0, 1.0).unwrap();

        // The +x wall of the box has normal +x and shares an edge with top.
        let side = Vector3::new(1.0, 0.0, 0.0);
        let external = find_haunch_external_face(&mesh, faces.top, &side).unwrap();
        let normal = mesh.face_normal(external).unwrap();
        assert_relative_eq!(normal.dot(&side), 1.0, epsilon = 1e-9);

        let centroid = mesh.face_centroid(external).unwrap();
        assert_relative_eq!(centroid, Point3::new(2.0, 0.5, 0.5), epsilon = 1e-9);
    }
}
