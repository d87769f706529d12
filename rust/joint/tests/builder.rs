// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end builder scenarios on a 3 x 2 x 1 board.
//!
//! The board's top face has its longest axis along x and its shortest along
//! y, so tenon height is measured along x and thickness along y.

use approx::assert_relative_eq;
use joinery_joint::{
    AxisParams, BuilderSession, Error, HaunchParams, HaunchShape, JointBuilder, JointParams, Sizing,
};
use joinery_mesh::{make_box, BoxFaces, FaceKey, MeshArena};
use nalgebra::{Matrix4, Point3};

fn board() -> (MeshArena, BoxFaces) {
    let mut mesh = MeshArena::new();
    let faces = make_box(&mut mesh, [0.0, 0.0, 0.0], 3.0, 2.0, 1.0).unwrap();
    (mesh, faces)
}

/// Axis-aligned extent of a face's vertices.
fn face_extent(mesh: &MeshArena, face: FaceKey) -> (Point3<f64>, Point3<f64>) {
    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for v in mesh.face_vertices(face).unwrap() {
        let p = mesh.vertex_point(v).unwrap();
        min = min.inf(&p);
        max = max.sup(&p);
    }
    (min, max)
}

#[test]
fn centered_tenon_has_requested_sizes() {
    let (mut mesh, faces) = board();
    let builder = JointBuilder::new(JointParams::centered(0.4, 1.2, 0.5));

    let outcome = builder
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    let top = outcome.tenon_top.unwrap();
    let (min, max) = face_extent(&mesh, top);
    assert_relative_eq!(max.x - min.x, 1.2, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 0.4, epsilon = 1e-9);
    assert_relative_eq!(min.z, 1.5, epsilon = 1e-9);

    let centroid = mesh.face_centroid(top).unwrap();
    assert_relative_eq!(centroid, Point3::new(1.5, 1.0, 1.5), epsilon = 1e-9);

    assert!(!outcome.pierced);
    assert!(mesh.open_boundary_edges().is_empty());
}

#[test]
fn shouldered_tenon_sits_off_center() {
    let (mut mesh, faces) = board();
    let params = JointParams {
        thickness: AxisParams::centered(0.4),
        height: AxisParams::shouldered(1.2, 0.3),
        depth: 0.5,
        remove_wood: false,
    };

    let outcome = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    let top = outcome.tenon_top.unwrap();
    let (min, max) = face_extent(&mesh, top);
    assert_relative_eq!(max.x - min.x, 1.2, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 0.4, epsilon = 1e-9);
    // 0.3 of shoulder on one end of the 3.0 axis.
    assert!(
        (min.x - 0.3).abs() < 1e-9 || (max.x - 2.7).abs() < 1e-9,
        "tenon starts a shoulder's width from one end: {min:?} {max:?}"
    );
}

#[test]
fn max_centered_axes_extrude_the_whole_face() {
    let (mut mesh, faces) = board();
    let params = JointParams {
        thickness: AxisParams::max_centered(),
        height: AxisParams::max_centered(),
        depth: 0.25,
        remove_wood: false,
    };

    let outcome = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    let top = outcome.tenon_top.unwrap();
    let (min, max) = face_extent(&mesh, top);
    assert_relative_eq!(max.x - min.x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 2.0, epsilon = 1e-9);
    assert_relative_eq!(min.z, 1.25, epsilon = 1e-9);
}

#[test]
fn blind_mortise_keeps_a_floor() {
    let (mut mesh, faces) = board();
    let builder = JointBuilder::new(JointParams::centered(0.4, 1.2, -0.5));

    let outcome = builder
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    assert!(!outcome.pierced);
    let floor = outcome.tenon_top.unwrap();
    let centroid = mesh.face_centroid(floor).unwrap();
    assert_relative_eq!(centroid.z, 0.5, epsilon = 1e-9);
    assert!(mesh.open_boundary_edges().is_empty());
}

#[test]
fn deep_mortise_pierces_through() {
    let (mut mesh, faces) = board();
    let builder = JointBuilder::new(JointParams::centered(0.4, 1.2, -1.4));

    let outcome = builder
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    assert!(outcome.pierced);
    assert!(outcome.tenon_top.is_none());
    assert!(mesh.open_boundary_edges().is_empty());

    // The hole rim snapped back up to the bottom surface.
    for v in mesh.vertex_keys().collect::<Vec<_>>() {
        let p = mesh.vertex_point(v).unwrap();
        assert!(p.z >= -1e-9 && p.z <= 1.0 + 1e-9);
    }
}

#[test]
fn remove_wood_keeps_tenon_tip_flush() {
    let (mut mesh, faces) = board();
    let params = JointParams {
        remove_wood: true,
        ..JointParams::centered(0.4, 1.2, 0.5)
    };

    let outcome = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    // The surrounding face sank by the depth, so the tip ends at the
    // original surface.
    let top = outcome.tenon_top.unwrap();
    let centroid = mesh.face_centroid(top).unwrap();
    assert_relative_eq!(centroid.z, 1.0, epsilon = 1e-9);
}

#[test]
fn straight_haunch_rises_partway() {
    let (mut mesh, faces) = board();
    let mut height = AxisParams::shouldered(1.2, 0.3);
    height.haunch_first_side = Some(HaunchParams {
        depth: Sizing::Value(0.2),
        shape: HaunchShape::Straight,
    });
    let params = JointParams {
        thickness: AxisParams::centered(0.4),
        height,
        depth: 0.5,
        remove_wood: false,
    };

    let outcome = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    let top = outcome.tenon_top.unwrap();
    assert_relative_eq!(mesh.face_centroid(top).unwrap().z, 1.5, epsilon = 1e-9);

    assert_eq!(outcome.haunch_tops.len(), 1);
    let haunch_top = outcome.haunch_tops[0];
    assert!(mesh.contains_face(haunch_top));
    assert_relative_eq!(
        mesh.face_centroid(haunch_top).unwrap().z,
        1.2,
        epsilon = 1e-9
    );
}

#[test]
fn sloped_haunch_keeps_one_edge_on_the_surface() {
    let (mut mesh, faces) = board();
    let mut height = AxisParams::shouldered(1.2, 0.3);
    height.haunch_first_side = Some(HaunchParams {
        depth: Sizing::Value(0.2),
        shape: HaunchShape::Sloped,
    });
    let params = JointParams {
        thickness: AxisParams::centered(0.4),
        height,
        depth: 0.5,
        remove_wood: false,
    };

    let outcome = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap();

    assert_eq!(outcome.haunch_tops.len(), 1);
    let haunch_top = outcome.haunch_tops[0];

    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    for v in mesh.face_vertices(haunch_top).unwrap() {
        let z = mesh.vertex_point(v).unwrap().z;
        min_z = min_z.min(z);
        max_z = max_z.max(z);
    }
    assert_relative_eq!(min_z, 1.0, epsilon = 1e-9);
    assert_relative_eq!(max_z, 1.2, epsilon = 1e-9);
}

#[test]
fn invalid_faces_leave_the_mesh_untouched() {
    // A parallelogram fails the right-angle check.
    let mut mesh = MeshArena::new();
    let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
    let v1 = mesh.add_vertex(2.0, 0.0, 0.0);
    let v2 = mesh.add_vertex(2.5, 1.0, 0.0);
    let v3 = mesh.add_vertex(0.5, 1.0, 0.0);
    let face = mesh.add_face_from_verts(&[v0, v1, v2, v3]).unwrap();

    let verts_before = mesh.vertex_count();
    let faces_before = mesh.face_count();

    let err = JointBuilder::new(JointParams::centered(0.2, 0.5, 0.3))
        .build(&mut mesh, face, &Matrix4::identity(), None)
        .unwrap_err();
    assert!(matches!(err, Error::NotRectangular { .. }));
    assert_eq!(mesh.vertex_count(), verts_before);
    assert_eq!(mesh.face_count(), faces_before);
}

#[test]
fn oversized_sizes_are_rejected_before_mutation() {
    let (mut mesh, faces) = board();
    let params = JointParams {
        thickness: AxisParams::centered(0.4),
        height: AxisParams::shouldered(2.0, 1.5),
        depth: 0.5,
        remove_wood: false,
    };

    let verts_before = mesh.vertex_count();
    let faces_before = mesh.face_count();

    let err = JointBuilder::new(params)
        .build(&mut mesh, faces.top, &Matrix4::identity(), None)
        .unwrap_err();
    assert!(matches!(err, Error::SizeConflict { .. }));
    assert_eq!(mesh.vertex_count(), verts_before);
    assert_eq!(mesh.face_count(), faces_before);
}

#[test]
fn session_tracks_the_measured_face() {
    let (mut mesh, faces) = board();
    let mut session = BuilderSession::new();

    JointBuilder::new(JointParams::centered(0.4, 1.2, 0.5))
        .build(&mut mesh, faces.top, &Matrix4::identity(), Some(&mut session))
        .unwrap();

    assert!(!session.face_changed(2.0, 3.0));
    assert!(session.face_changed(1.0, 3.0));

    let suggested = BuilderSession::suggest(2.0, 3.0);
    assert_relative_eq!(suggested.thickness, 2.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(suggested.height, 2.0, epsilon = 1e-9);
}

#[test]
fn world_matrix_scales_are_respected() {
    // Same board, but the object is scaled 2x in world space. Sizes are
    // world-space values, so the tenon is half as big in local units.
    let (mut mesh, faces) = board();
    let world = Matrix4::new_scaling(2.0);

    let outcome = JointBuilder::new(JointParams::centered(0.4, 1.2, 0.5))
        .build(&mut mesh, faces.top, &world, None)
        .unwrap();

    let top = outcome.tenon_top.unwrap();
    let (min, max) = face_extent(&mesh, top);
    assert_relative_eq!(max.x - min.x, 0.6, epsilon = 1e-9);
    assert_relative_eq!(max.y - min.y, 0.2, epsilon = 1e-9);
    // Depth 0.5 in world units is 0.25 local.
    assert_relative_eq!(min.z, 1.25, epsilon = 1e-9);
}
