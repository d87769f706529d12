// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The declarative joint description.
//!
//! [`JointParams`] is the immutable-per-call parameter block: two symmetric
//! axis sub-blocks (thickness along the face's shortest side, height along
//! the longest side), a signed depth, and the remove-wood pre-pass flag.
//! Sizes may be given absolute, as a percentage of the measured axis length,
//! or as "max" (full axis). [`JointParams::resolve`] turns the block into
//! absolute lengths against a face's measured dimensions.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::nearly_equal;

/// How a feature or shoulder size is specified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// The full axis length.
    Max,
    /// An absolute length.
    Value(f64),
    /// A fraction of the measured axis length, in [0, 1].
    Percentage(f64),
}

/// A haunch is either a flat stub or an angled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaunchShape {
    Straight,
    Sloped,
}

/// One haunched side of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaunchParams {
    /// Haunch depth: absolute, or a percentage of the joint's signed depth.
    /// `Max` is not meaningful here and resolves to the full depth.
    pub depth: Sizing,
    pub shape: HaunchShape,
}

/// Parameters for one of the two joint axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisParams {
    /// Feature size along this axis.
    pub size: Sizing,
    /// Centered features get equal shoulders on both sides; the explicit
    /// `shoulder` is ignored.
    pub centered: bool,
    /// Shoulder (margin) size for an off-center feature.
    pub shoulder: Sizing,
    /// Swaps which of the two flanking faces is treated as the shoulder.
    pub reverse_shoulder: bool,
    /// Haunch on the first geometric side (lower signed projection along the
    /// axis tangent), when present.
    pub haunch_first_side: Option<HaunchParams>,
    /// Haunch on the second geometric side.
    pub haunch_second_side: Option<HaunchParams>,
}

impl AxisParams {
    /// A full-width, centered axis with no shoulder and no haunch.
    pub fn max_centered() -> Self {
        AxisParams {
            size: Sizing::Max,
            centered: true,
            shoulder: Sizing::Value(0.0),
            reverse_shoulder: false,
            haunch_first_side: None,
            haunch_second_side: None,
        }
    }

    /// A centered axis of the given absolute size.
    pub fn centered(value: f64) -> Self {
        AxisParams {
            size: Sizing::Value(value),
            ..Self::max_centered()
        }
    }

    /// An off-center axis: feature size plus one shoulder.
    pub fn shouldered(value: f64, shoulder: f64) -> Self {
        AxisParams {
            size: Sizing::Value(value),
            centered: false,
            shoulder: Sizing::Value(shoulder),
            ..Self::max_centered()
        }
    }

}

/// The full parameter block for one builder invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointParams {
    /// Axis along the face's shortest side.
    pub thickness: AxisParams,
    /// Axis along the face's longest side.
    pub height: AxisParams,
    /// Signed depth: positive raises a tenon, negative recesses a mortise.
    /// A mortise deep enough to exit the workpiece punches a through hole.
    pub depth: f64,
    /// When raising a tenon, first sink the whole face by the depth so the
    /// tenon tip ends up flush with the original surface.
    pub remove_wood: bool,
}

impl JointParams {
    /// A plain centered tenon/mortise of the given sizes.
    pub fn centered(thickness: f64, height: f64, depth: f64) -> Self {
        JointParams {
            thickness: AxisParams::centered(thickness),
            height: AxisParams::centered(height),
            depth,
            remove_wood: false,
        }
    }

    /// Resolves every sizing against the measured face dimensions.
    ///
    /// Percentages become absolute lengths; centered shoulders derive as
    /// `(axis_length - value) / 2`; a percentage shoulder that together with
    /// the feature would overflow the axis clamps the feature instead, which
    /// matches how interactive edits behave. Explicit absolute conflicts are
    /// reported as [`Error::SizeConflict`].
    pub fn resolve(&self, shortest_length: f64, longest_length: f64) -> Result<ResolvedParams> {
        let thickness = resolve_axis(&self.thickness, shortest_length, self.depth, "thickness")?;
        let height = resolve_axis(&self.height, longest_length, self.depth, "height")?;
        Ok(ResolvedParams {
            thickness,
            height,
            depth: self.depth,
            remove_wood: self.remove_wood,
        })
    }
}

/// One axis with every sizing turned into an absolute length.
#[derive(Debug, Clone)]
pub struct ResolvedAxis {
    /// The feature spans the full axis.
    pub is_max: bool,
    /// Absolute feature size along the axis.
    pub value: f64,
    pub centered: bool,
    /// Absolute shoulder size; for a centered axis this is the symmetric
    /// margin on each side.
    pub shoulder_value: f64,
    pub reverse_shoulder: bool,
    pub haunch_first: Option<ResolvedHaunch>,
    pub haunch_second: Option<ResolvedHaunch>,
    /// The measured axis length the sizes were resolved against.
    pub axis_length: f64,
}

impl ResolvedAxis {
    /// Max and centered: the feature fills the axis, no flanking faces exist.
    pub fn is_max_centered(&self) -> bool {
        self.is_max && self.centered
    }

    /// A haunch only applies to an off-center axis (it sits on a shoulder).
    pub fn is_haunched(&self) -> bool {
        !self.centered && (self.haunch_first.is_some() || self.haunch_second.is_some())
    }
}

/// A haunch with its depth resolved to an absolute (signed) length.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedHaunch {
    pub depth: f64,
    pub shape: HaunchShape,
}

/// The whole block after [`JointParams::resolve`].
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    pub thickness: ResolvedAxis,
    pub height: ResolvedAxis,
    pub depth: f64,
    pub remove_wood: bool,
}

impl ResolvedParams {
    pub fn is_mortise(&self) -> bool {
        self.depth < 0.0
    }

    pub fn is_haunched(&self) -> bool {
        self.thickness.is_haunched() || self.height.is_haunched()
    }
}

fn resolve_axis(
    axis: &AxisParams,
    axis_length: f64,
    depth: f64,
    name: &'static str,
) -> Result<ResolvedAxis> {
    let is_max = axis.size == Sizing::Max;
    let mut value = match axis.size {
        Sizing::Max => axis_length,
        Sizing::Value(v) => v,
        Sizing::Percentage(p) => axis_length * p,
    };
    if value < 0.0 {
        return Err(Error::NegativeSize { axis: name, value });
    }

    let shoulder_value = if axis.centered {
        (axis_length - value) / 2.0
    } else {
        match axis.shoulder {
            Sizing::Max => axis_length,
            Sizing::Value(v) => v,
            Sizing::Percentage(p) => axis_length * p,
        }
    };
    if shoulder_value < 0.0 {
        return Err(Error::NegativeSize {
            axis: name,
            value: shoulder_value,
        });
    }

    // A percentage shoulder overflowing the axis shrinks the feature rather
    // than failing, mirroring how the sizes are edited interactively.
    if !axis.centered
        && matches!(axis.shoulder, Sizing::Percentage(_))
        && shoulder_value + value > axis_length
    {
        value = axis_length - shoulder_value;
    }

    let total = shoulder_value + value;
    if !nearly_equal(total, axis_length) && total > axis_length {
        return Err(Error::SizeConflict {
            axis: name,
            value,
            shoulder: shoulder_value,
            axis_length,
        });
    }

    let resolve_haunch = |h: &HaunchParams| ResolvedHaunch {
        depth: match h.depth {
            Sizing::Max => depth,
            Sizing::Value(v) => v,
            Sizing::Percentage(p) => depth * p,
        },
        shape: h.shape,
    };

    Ok(ResolvedAxis {
        is_max,
        value,
        centered: axis.centered,
        shoulder_value,
        reverse_shoulder: axis.reverse_shoulder,
        haunch_first: axis.haunch_first_side.as_ref().map(resolve_haunch),
        haunch_second: axis.haunch_second_side.as_ref().map(resolve_haunch),
        axis_length,
    })
}
