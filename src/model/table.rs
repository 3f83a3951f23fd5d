//! In-memory joint table.

use std::collections::HashMap;

use super::{JointGeometry, JointId, JointKind, KinematicModel};

#[derive(Debug, Clone)]
struct JointEntry {
    name: String,
    kind: JointKind,
    geometry: Option<JointGeometry>,
}

/// Joint table implementing [`KinematicModel`].
///
/// Ids are assigned in insertion order. Inserting a name twice replaces the entry
/// and keeps its id.
#[derive(Debug, Clone, Default)]
pub struct JointTable {
    joints: Vec<JointEntry>,
    by_name: HashMap<String, JointId>,
}

impl JointTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a joint, returning its id.
    pub fn insert(&mut self, name: &str, kind: JointKind) -> JointId {
        self.insert_entry(name, kind, None)
    }

    /// Register a joint together with its world geometry.
    pub fn insert_with_geometry(
        &mut self,
        name: &str,
        kind: JointKind,
        geometry: JointGeometry,
    ) -> JointId {
        self.insert_entry(name, kind, Some(geometry))
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_joint(mut self, name: &str, kind: JointKind) -> Self {
        self.insert(name, kind);
        self
    }

    /// Builder form of [`insert_with_geometry`](Self::insert_with_geometry).
    pub fn with_geometry(mut self, name: &str, kind: JointKind, geometry: JointGeometry) -> Self {
        self.insert_with_geometry(name, kind, geometry);
        self
    }

    fn insert_entry(
        &mut self,
        name: &str,
        kind: JointKind,
        geometry: Option<JointGeometry>,
    ) -> JointId {
        let entry = JointEntry {
            name: name.to_owned(),
            kind,
            geometry,
        };

        match self.by_name.get(name) {
            Some(&id) => {
                self.joints[id.index()] = entry;
                id
            }
            None => {
                let id = JointId(self.joints.len());
                self.joints.push(entry);
                self.by_name.insert(name.to_owned(), id);
                id
            }
        }
    }

    /// Check if a joint exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of a joint.
    pub fn name(&self, joint: JointId) -> Option<&str> {
        self.joints.get(joint.index()).map(|e| e.name.as_str())
    }

    /// Get the number of joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Get an iterator over joint names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|e| e.name.as_str())
    }
}

impl KinematicModel for JointTable {
    fn find_joint(&self, name: &str) -> Option<JointId> {
        self.by_name.get(name).copied()
    }

    fn joint_kind(&self, joint: JointId) -> Option<JointKind> {
        self.joints.get(joint.index()).map(|e| e.kind)
    }

    fn joint_geometry(&self, joint: JointId) -> Option<JointGeometry> {
        self.joints.get(joint.index()).and_then(|e| e.geometry)
    }
}
