// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loop bridging: connecting two open boundary loops with a ring of quads.

use nalgebra::Point3;
use rustc_hash::FxHashSet;

use crate::arena::MeshArena;
use crate::error::{Error, Result};
use crate::keys::{EdgeKey, FaceKey, VertexKey};

impl MeshArena {
    /// Bridges two closed edge loops with a ring of quads.
    ///
    /// The loops must be disjoint and have the same number of vertices. Vertex
    /// pairing starts from the closest pair and walks both loops; the second
    /// loop's direction is chosen to minimize the total span, which keeps the
    /// ring from twisting. Returns the new wall faces.
    pub fn bridge_loops(
        &mut self,
        loop_a: &FxHashSet<EdgeKey>,
        loop_b: &FxHashSet<EdgeKey>,
    ) -> Result<Vec<FaceKey>> {
        if !loop_a.is_disjoint(loop_b) {
            return Err(Error::BridgeMismatch("loops share edges".into()));
        }

        let cycle_a = self
            .order_edge_cycle(loop_a)
            .ok_or_else(|| Error::BridgeMismatch("first loop is not a closed cycle".into()))?;
        let cycle_b = self
            .order_edge_cycle(loop_b)
            .ok_or_else(|| Error::BridgeMismatch("second loop is not a closed cycle".into()))?;

        if cycle_a.len() != cycle_b.len() {
            return Err(Error::BridgeMismatch(format!(
                "loop lengths differ: {} vs {}",
                cycle_a.len(),
                cycle_b.len()
            )));
        }

        let points_a = self.cycle_points(&cycle_a)?;
        let points_b = self.cycle_points(&cycle_b)?;

        // Anchor on the globally closest vertex pair.
        let mut best = (0usize, 0usize, f64::INFINITY);
        for (i, pa) in points_a.iter().enumerate() {
            for (j, pb) in points_b.iter().enumerate() {
                let d = (pb - pa).norm_squared();
                if d < best.2 {
                    best = (i, j, d);
                }
            }
        }
        let (ia, ib, _) = best;
        let n = cycle_a.len();

        // Walk b forward or backward, whichever keeps the pairs shortest.
        let span = |reverse: bool| -> f64 {
            (0..n)
                .map(|k| {
                    let a = &points_a[(ia + k) % n];
                    let b = if reverse {
                        &points_b[(ib + n - k % n) % n]
                    } else {
                        &points_b[(ib + k) % n]
                    };
                    (b - a).norm_squared()
                })
                .sum()
        };
        let reverse = span(true) < span(false);

        let paired_b: Vec<VertexKey> = (0..n)
            .map(|k| {
                if reverse {
                    cycle_b[(ib + n - k % n) % n]
                } else {
                    cycle_b[(ib + k) % n]
                }
            })
            .collect();
        let paired_a: Vec<VertexKey> = (0..n).map(|k| cycle_a[(ia + k) % n]).collect();

        let mut faces = Vec::with_capacity(n);
        for k in 0..n {
            let k1 = (k + 1) % n;
            faces.push(self.add_face_from_verts(&[
                paired_a[k],
                paired_a[k1],
                paired_b[k1],
                paired_b[k],
            ])?);
        }
        Ok(faces)
    }

    fn cycle_points(&self, cycle: &[VertexKey]) -> Result<Vec<Point3<f64>>> {
        cycle
            .iter()
            .map(|&vk| self.vertex_point(vk).ok_or(Error::VertexNotFound(vk)))
            .collect()
    }
}
