// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for editable polygon mesh elements.
//!
//! The [`MeshArena`] is the central owner of all mesh data. Every element
//! (vertex, edge, face) lives inside slot maps with stable, generational
//! keys. Bidirectional adjacency indices enable both downward traversal
//! (face → edges → vertices) and upward traversal (vertex → which edges use
//! it → which faces).
//!
//! ## Handle stability
//!
//! Mutating operators (subdivide, extrude, delete, dissolve, merge) add and
//! remove elements but never reorder or compact storage, so a key held across
//! a mutation stays valid as long as its element survives. A key whose
//! element was deleted fails the generation check on lookup instead of
//! silently aliasing a new element.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::keys::*;

/// Data stored for a vertex: a point in 3D space.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Data stored for an edge: a line segment between two vertices.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub start: VertexKey,
    pub end: VertexKey,
}

/// Data stored for a face: a planar polygon bounded by a single closed loop
/// of edges.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Boundary edges in traversal order. Each edge's end vertex must equal
    /// the next edge's start vertex (or the reverse, tracked by
    /// `orientations`). Inline storage for the common quad case.
    pub edges: SmallVec<[EdgeKey; 4]>,
    /// `true` if edge[i] is traversed forward (start→end), `false` if
    /// reversed.
    pub orientations: SmallVec<[bool; 4]>,
}

/// The central arena that owns all mesh elements and their adjacency indices.
///
/// # Example
///
/// ```
/// use joinery_mesh::MeshArena;
///
/// let mut mesh = MeshArena::new();
/// let v0 = mesh.add_vertex(0.0, 0.0, 0.0);
/// let v1 = mesh.add_vertex(1.0, 0.0, 0.0);
/// let v2 = mesh.add_vertex(1.0, 1.0, 0.0);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct MeshArena {
    // Element storage
    pub(crate) vertices: SlotMap<VertexKey, VertexData>,
    pub(crate) edges: SlotMap<EdgeKey, EdgeData>,
    pub(crate) faces: SlotMap<FaceKey, FaceData>,

    // Upward adjacency: child → parents
    pub(crate) vertex_to_edges: FxHashMap<VertexKey, FxHashSet<EdgeKey>>,
    pub(crate) edge_to_faces: FxHashMap<EdgeKey, FxHashSet<FaceKey>>,
}

impl MeshArena {
    /// Creates a new, empty mesh arena.
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            vertex_to_edges: FxHashMap::default(),
            edge_to_faces: FxHashMap::default(),
        }
    }

    // --- Vertex operations ---

    /// Adds a vertex at the given 3D coordinates.
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> VertexKey {
        self.vertices.insert(VertexData { x, y, z })
    }

    /// Returns the vertex data for the given key, or `None` if not found.
    pub fn vertex(&self, key: VertexKey) -> Option<&VertexData> {
        self.vertices.get(key)
    }

    /// Returns the number of vertices in the arena.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the coordinates of a vertex as `[x, y, z]`.
    pub fn vertex_coords(&self, key: VertexKey) -> Option<[f64; 3]> {
        self.vertices.get(key).map(|v| [v.x, v.y, v.z])
    }

    /// Iterates over all vertex keys.
    pub fn vertex_keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices.keys()
    }

    // --- Edge operations ---

    /// Returns the edge data for the given key, or `None` if not found.
    pub fn edge(&self, key: EdgeKey) -> Option<&EdgeData> {
        self.edges.get(key)
    }

    /// Returns the number of edges in the arena.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over all edge keys.
    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.keys()
    }

    // --- Face operations ---

    /// Returns the face data for the given key, or `None` if not found.
    pub fn face(&self, key: FaceKey) -> Option<&FaceData> {
        self.faces.get(key)
    }

    /// Returns the number of faces in the arena.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates over all face keys.
    pub fn face_keys(&self) -> impl Iterator<Item = FaceKey> + '_ {
        self.faces.keys()
    }

    // --- Element existence checks ---

    /// Returns `true` if the given element key references a live element.
    pub fn contains(&self, key: ElementKey) -> bool {
        match key {
            ElementKey::Vertex(k) => self.vertices.contains_key(k),
            ElementKey::Edge(k) => self.edges.contains_key(k),
            ElementKey::Face(k) => self.faces.contains_key(k),
        }
    }

    /// Returns `true` if the vertex key references a live vertex.
    pub fn contains_vertex(&self, key: VertexKey) -> bool {
        self.vertices.contains_key(key)
    }

    /// Returns `true` if the edge key references a live edge.
    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edges.contains_key(key)
    }

    /// Returns `true` if the face key references a live face.
    pub fn contains_face(&self, key: FaceKey) -> bool {
        self.faces.contains_key(key)
    }

    // --- Adjacency index helpers ---

    /// Register that an edge uses a vertex (upward adjacency).
    pub(crate) fn link_vertex_edge(&mut self, vertex: VertexKey, edge: EdgeKey) {
        self.vertex_to_edges.entry(vertex).or_default().insert(edge);
    }

    /// Register that a face uses an edge (upward adjacency).
    pub(crate) fn link_edge_face(&mut self, edge: EdgeKey, face: FaceKey) {
        self.edge_to_faces.entry(edge).or_default().insert(face);
    }

    /// Remove the edge→face link; the reverse of [`Self::link_edge_face`].
    pub(crate) fn unlink_edge_face(&mut self, edge: EdgeKey, face: FaceKey) {
        if let Some(set) = self.edge_to_faces.get_mut(&edge) {
            set.remove(&face);
            if set.is_empty() {
                self.edge_to_faces.remove(&edge);
            }
        }
    }

    /// Remove the vertex→edge link; the reverse of [`Self::link_vertex_edge`].
    pub(crate) fn unlink_vertex_edge(&mut self, vertex: VertexKey, edge: EdgeKey) {
        if let Some(set) = self.vertex_to_edges.get_mut(&vertex) {
            set.remove(&edge);
            if set.is_empty() {
                self.vertex_to_edges.remove(&vertex);
            }
        }
    }

    // --- Low-level removal (used by the mutating operators) ---

    /// Removes a face record and its edge→face links. Edges and vertices are
    /// untouched.
    pub(crate) fn remove_face_record(&mut self, face: FaceKey) {
        if let Some(data) = self.faces.remove(face) {
            for ek in data.edges {
                self.unlink_edge_face(ek, face);
            }
        }
    }

    /// Removes an edge record and its vertex→edge links. Faces referencing
    /// the edge must have been removed or patched first.
    pub(crate) fn remove_edge_record(&mut self, edge: EdgeKey) {
        if let Some(data) = self.edges.remove(edge) {
            self.unlink_vertex_edge(data.start, edge);
            self.unlink_vertex_edge(data.end, edge);
            self.edge_to_faces.remove(&edge);
        }
    }

    /// Removes an edge if no face uses it any more; returns `true` when
    /// removed.
    pub(crate) fn remove_edge_if_orphan(&mut self, edge: EdgeKey) -> bool {
        let orphan = self
            .edge_to_faces
            .get(&edge)
            .map_or(true, |faces| faces.is_empty());
        if orphan && self.edges.contains_key(edge) {
            self.remove_edge_record(edge);
            return true;
        }
        false
    }

    /// Removes a vertex if no edge uses it any more; returns `true` when
    /// removed.
    pub(crate) fn remove_vertex_if_orphan(&mut self, vertex: VertexKey) -> bool {
        let orphan = self
            .vertex_to_edges
            .get(&vertex)
            .map_or(true, |edges| edges.is_empty());
        if orphan && self.vertices.contains_key(vertex) {
            self.vertices.remove(vertex);
            self.vertex_to_edges.remove(&vertex);
            return true;
        }
        false
    }
}
