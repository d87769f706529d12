// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The joint builder: validates the target face, carves the tenon or
//! mortise, and reports the surviving top faces.

use nalgebra::{Matrix4, Vector3};
use rustc_hash::FxHashSet;
use tracing::debug;

use joinery_mesh::{FaceKey, MeshArena, VertexKey};

use crate::classify::{resize_faces, shoulder_pair, ShoulderFace, TenonFace};
use crate::error::Result;
use crate::features::FaceFeatures;
use crate::haunch;
use crate::markers::GeometryMarkers;
use crate::params::{JointParams, ResolvedAxis};
use crate::session::BuilderSession;
use crate::through;
use crate::validate::validate_face;

/// What the build left behind on the mesh.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Top face of the tenon, or the floor of a blind mortise. `None` when a
    /// through cut removed it.
    pub tenon_top: Option<FaceKey>,
    /// Top faces of the raised haunches, in axis order.
    pub haunch_tops: Vec<FaceKey>,
    /// Whether a through mortise pierced the far side.
    pub pierced: bool,
}

/// Carves a tenon or mortise into a mesh, starting from one rectangular
/// face. The same parameters drive both: positive depth raises a tenon,
/// negative depth sinks a mortise.
#[derive(Debug, Clone)]
pub struct JointBuilder {
    params: JointParams,
}

struct AxisShoulders {
    first: ShoulderFace,
    second: ShoulderFace,
    reverse: bool,
    moved_verts: FxHashSet<VertexKey>,
}

impl AxisShoulders {
    fn chosen(&self) -> &ShoulderFace {
        if self.reverse {
            &self.second
        } else {
            &self.first
        }
    }
}

impl JointBuilder {
    pub fn new(params: JointParams) -> Self {
        JointBuilder { params }
    }

    /// Runs the whole construction. The mesh is untouched if validation or
    /// parameter resolution fails.
    pub fn build(
        &self,
        mesh: &mut MeshArena,
        face: FaceKey,
        world: &Matrix4<f64>,
        mut session: Option<&mut BuilderSession>,
    ) -> Result<BuildOutcome> {
        validate_face(mesh, face)?;

        let features = FaceFeatures::extract(mesh, face, world);
        if let Some(session) = session.as_deref_mut() {
            session.observe(features.shortest_length, features.longest_length);
        }
        let params = self
            .params
            .resolve(features.shortest_length, features.longest_length)?;

        if params.depth > 0.0 && params.remove_wood {
            debug!(depth = params.depth, "sinking face to remove wood");
            features.translate_along_normal(mesh, world, -params.depth)?;
        }

        let subdivided = features.subdivide(mesh, &params)?;
        let tenon_face = if subdivided.is_empty() {
            features.face
        } else {
            subdivided
                .into_iter()
                .find(|&f| mesh.face_contains_point(f, &features.median))
                .expect("one sub-face contains the original median")
        };
        let mut tenon = TenonFace::new(tenon_face);
        tenon.find_adjacent_faces(mesh, &features, &params);

        // Off-center axes first get their shoulder seam moved into place.
        let height_shoulders = if !params.height.centered {
            Some(apply_shoulder(
                mesh,
                world,
                &params.height,
                &tenon,
                &tenon.thickness_faces,
                features.shortest_edges,
                &features.longest_side_tangent,
                &tenon.height_faces,
            )?)
        } else {
            None
        };
        let thickness_shoulders = if !params.thickness.centered {
            Some(apply_shoulder(
                mesh,
                world,
                &params.thickness,
                &tenon,
                &tenon.height_faces,
                features.longest_edges,
                &features.shortest_side_tangent,
                &tenon.thickness_faces,
            )?)
        } else {
            None
        };

        // Then each sized axis is brought to its requested dimension.
        apply_size(
            mesh,
            world,
            &params.thickness,
            tenon.thickness_reference_edge,
            &tenon.thickness_faces,
            &features.longest_side_tangent,
            thickness_shoulders.as_ref(),
        )?;
        apply_size(
            mesh,
            world,
            &params.height,
            tenon.height_reference_edge,
            &tenon.height_faces,
            &features.shortest_side_tangent,
            height_shoulders.as_ref(),
        )?;

        let mut markers = GeometryMarkers::default();
        let tenon_top = haunch::set_face_depth(mesh, world, tenon.face, params.depth)?;
        debug!(depth = params.depth, "raised joint body");

        let mut haunch_tops = Vec::new();
        if params.is_haunched() {
            // Two haunched axes would dissolve each other's side walls.
            let dissolve_sides = !(params.height.is_haunched() && params.thickness.is_haunched());

            if params.height.is_haunched() {
                let shoulders = height_shoulders
                    .as_ref()
                    .expect("haunched height axis has shoulders");
                haunch_tops.extend(haunch::raise_haunches(
                    mesh,
                    &mut markers,
                    world,
                    &features,
                    tenon_top,
                    Some(&shoulders.first),
                    Some(&shoulders.second),
                    &features.shortest_side_tangent,
                    &params.height,
                    dissolve_sides,
                )?);
            }
            if params.thickness.is_haunched() {
                let shoulders = thickness_shoulders
                    .as_ref()
                    .expect("haunched thickness axis has shoulders");
                haunch_tops.extend(haunch::raise_haunches(
                    mesh,
                    &mut markers,
                    world,
                    &features,
                    tenon_top,
                    Some(&shoulders.first),
                    Some(&shoulders.second),
                    &features.longest_side_tangent,
                    &params.thickness,
                    dissolve_sides,
                )?);
            }
        }

        let mut pierced = false;
        if params.is_mortise() {
            pierced = through::create_hole_in_opposite_faces(mesh, &features, tenon_top, &haunch_tops)?;
        }

        Ok(BuildOutcome {
            tenon_top: (!pierced).then_some(tenon_top),
            haunch_tops,
            pierced,
        })
    }
}

/// Moves one axis's chosen shoulder seam so the shoulder reaches its
/// requested size, and returns both flanking shoulders for later steps.
#[allow(clippy::too_many_arguments)]
fn apply_shoulder(
    mesh: &mut MeshArena,
    world: &Matrix4<f64>,
    axis: &ResolvedAxis,
    tenon: &TenonFace,
    adjacent_faces: &[FaceKey],
    origin_edges: [joinery_mesh::EdgeKey; 2],
    seam_tangent: &Vector3<f64>,
    seam_faces: &[FaceKey],
) -> Result<AxisShoulders> {
    let (mut first, mut second) = shoulder_pair(mesh, tenon, adjacent_faces, origin_edges);

    let chosen = if axis.reverse_shoulder {
        &mut second
    } else {
        &mut first
    };
    let moved_verts = chosen.find_verts_to_translate(mesh, seam_tangent, seam_faces);
    let offset = chosen.compute_translation_vector(mesh, axis.shoulder_value, world);

    let verts: Vec<VertexKey> = moved_verts.iter().copied().collect();
    mesh.translate_vertices_world(&verts, &offset, world)?;
    debug!(shoulder = axis.shoulder_value, "moved shoulder seam");

    Ok(AxisShoulders {
        first,
        second,
        reverse: axis.reverse_shoulder,
        moved_verts,
    })
}

/// Resizes one axis of the tenon to its requested value: symmetrically for a
/// centered axis, or by sliding the free side when a shoulder anchors the
/// other one.
fn apply_size(
    mesh: &mut MeshArena,
    world: &Matrix4<f64>,
    axis: &ResolvedAxis,
    reference_edge: Option<joinery_mesh::EdgeKey>,
    strip_faces: &[FaceKey],
    resize_direction: &Vector3<f64>,
    shoulders: Option<&AxisShoulders>,
) -> Result<()> {
    if axis.is_max {
        return Ok(());
    }
    let reference_edge = reference_edge.expect("sized axis has a reference edge");
    let scale_factor = TenonFace::get_scale_factor(mesh, reference_edge, world, axis.value);

    if axis.centered {
        resize_faces(mesh, strip_faces, resize_direction, scale_factor)?;
    } else {
        let shoulders = shoulders.expect("off-center axis has shoulders");
        let verts = TenonFace::find_verts_to_translate(mesh, strip_faces, &shoulders.moved_verts);
        let offset = TenonFace::translation_given_shoulder(
            mesh,
            reference_edge,
            shoulders.chosen(),
            scale_factor,
            world,
        );
        let verts: Vec<VertexKey> = verts.into_iter().collect();
        mesh.translate_vertices_world(&verts, &offset, world)?;
    }
    debug!(value = axis.value, "sized axis");
    Ok(())
}
