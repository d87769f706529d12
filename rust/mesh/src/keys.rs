// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh element key types for arena-based storage.
//!
//! Each mesh element gets a unique, type-safe key for O(1) lookup in the
//! arena. Keys are created by `slotmap::SlotMap` and remain valid even after
//! other elements are removed (generational indices). A key only dies with
//! its element, so handles survive every mutation that does not delete the
//! element itself and index reuse is never ambiguous.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a vertex (point in 3D space).
    pub struct VertexKey;

    /// Key for an edge (line segment between two vertices).
    pub struct EdgeKey;

    /// Key for a face (planar polygon with a single boundary loop).
    pub struct FaceKey;
}

/// A key that can reference any mesh element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Vertex(VertexKey),
    Edge(EdgeKey),
    Face(FaceKey),
}

impl ElementKey {
    /// Returns the element type of this key.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKey::Vertex(_) => ElementType::Vertex,
            ElementKey::Edge(_) => ElementType::Edge,
            ElementKey::Face(_) => ElementType::Face,
        }
    }
}

/// Discriminant for mesh element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementType {
    Vertex = 0,
    Edge = 1,
    Face = 2,
}

impl ElementType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Vertex => "Vertex",
            ElementType::Edge => "Edge",
            ElementType::Face => "Face",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VertexKey> for ElementKey {
    fn from(k: VertexKey) -> Self {
        ElementKey::Vertex(k)
    }
}

impl From<EdgeKey> for ElementKey {
    fn from(k: EdgeKey) -> Self {
        ElementKey::Edge(k)
    }
}

impl From<FaceKey> for ElementKey {
    fn from(k: FaceKey) -> Self {
        ElementKey::Face(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_names() {
        assert_eq!(ElementType::Vertex.as_str(), "Vertex");
        assert_eq!(ElementType::Edge.as_str(), "Edge");
        assert_eq!(ElementType::Face.as_str(), "Face");
    }

    #[test]
    fn element_type_ordering() {
        assert!(ElementType::Vertex < ElementType::Edge);
        assert!(ElementType::Edge < ElementType::Face);
    }
}
