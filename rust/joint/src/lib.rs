// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Joinery Joint Builder
//!
//! Carves tenon and mortise joints into polygon meshes. Pick a rectangular
//! face on a [`joinery_mesh::MeshArena`], describe the joint with
//! [`JointParams`], and [`JointBuilder::build`] reshapes the mesh in place:
//! positive depth raises a tenon, negative depth sinks a mortise, deep
//! enough cuts pierce the far side into a through mortise.

pub mod builder;
pub mod error;
pub mod features;
pub mod params;
pub mod session;
pub mod validate;

mod classify;
mod haunch;
mod markers;
mod math;
mod through;

pub use builder::{BuildOutcome, JointBuilder};
pub use error::{Error, Result};
pub use features::FaceFeatures;
pub use params::{
    AxisParams, HaunchParams, HaunchShape, JointParams, ResolvedAxis, ResolvedHaunch,
    ResolvedParams, Sizing,
};
pub use session::{BuilderSession, SuggestedSizes};
pub use validate::validate_face;
