//! Process-wide frame registry: a name → [`FrameId`] slab.
//!
//! `spec.md` §9 "Frames as a DAG with shared ownership" explicitly invites
//! this re-architecture: an integer handle into a central registry replaces
//! the original's shared-pointer back-references, eliminating the
//! `enable_shared_from_this`-style cycle. Parent links are handles;
//! children are never stored, since the LCA algorithm (`spec.md` §4.D) only
//! ever walks upward.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::error::{PhysicsError, Result};
use crate::frame::provider::TransformProvider;

/// Maximum tree depth a frame may sit at (`spec.md` §4.D, §8 boundary test).
pub const MAX_DEPTH: u8 = 255;

/// An opaque handle into the [`FrameRegistry`] slab.
pub type FrameId = u32;

pub(crate) struct FrameNode {
    pub name: String,
    pub quasi_inertial: bool,
    pub parent: Option<FrameId>,
    pub depth: u8,
    pub provider: TransformProvider,
}

#[derive(Default)]
pub struct FrameRegistry {
    by_name: HashMap<String, FrameId>,
    nodes: Vec<FrameNode>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        FrameRegistry::default()
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static Mutex<FrameRegistry> {
        static REGISTRY: OnceLock<Mutex<FrameRegistry>> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(FrameRegistry::new()))
    }

    /// Register a new frame. Fails with [`PhysicsError::InvalidState`] if
    /// `name` is already registered, or if the new frame's depth would
    /// exceed [`MAX_DEPTH`].
    pub fn construct(
        &mut self,
        name: &str,
        quasi_inertial: bool,
        parent: Option<FrameId>,
        provider: TransformProvider,
    ) -> Result<FrameId> {
        if self.by_name.contains_key(name) {
            return Err(PhysicsError::InvalidState(format!("frame '{name}' already exists")));
        }
        let depth = match parent {
            None => 0,
            Some(parent_id) => {
                let parent_depth = self.nodes[parent_id as usize].depth;
                if parent_depth == u8::MAX {
                    return Err(PhysicsError::InvalidState(format!(
                        "frame '{name}' would exceed the maximum tree depth of {MAX_DEPTH}"
                    )));
                }
                parent_depth + 1
            }
        };
        let id = self.nodes.len() as FrameId;
        self.nodes.push(FrameNode { name: name.to_string(), quasi_inertial, parent, depth, provider });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Idempotent create-or-get: returns the existing frame if `name` is
    /// already registered, otherwise constructs it. Used by the canonical
    /// frame wiring in [`crate::frame::canonical`] so repeated calls (e.g.
    /// from independent test modules) don't fail with `AlreadyExists`.
    pub fn emplace(
        &mut self,
        name: &str,
        quasi_inertial: bool,
        parent: Option<FrameId>,
        provider: impl FnOnce() -> TransformProvider,
    ) -> Result<FrameId> {
        if let Some(&id) = self.by_name.get(name) {
            return Ok(id);
        }
        self.construct(name, quasi_inertial, parent, provider())
    }

    pub fn with_name(&self, name: &str) -> Option<FrameId> {
        self.by_name.get(name).copied()
    }

    /// Remove `name` from the registry. Does not renumber surviving
    /// frames — children of the removed frame, if any survive by id, would
    /// dangle; callers are responsible for not destructing a frame with
    /// live descendants (`spec.md` §3's "caller's contract").
    pub fn destruct(&mut self, name: &str) -> Result<()> {
        match self.by_name.remove(name) {
            Some(_) => Ok(()),
            None => Err(PhysicsError::InvalidState(format!("frame '{name}' is not registered"))),
        }
    }

    pub(crate) fn node(&self, id: FrameId) -> &FrameNode {
        &self.nodes[id as usize]
    }

    pub(crate) fn depth(&self, id: FrameId) -> u8 {
        self.nodes[id as usize].depth
    }

    pub(crate) fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.nodes[id as usize].parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::provider::TransformProvider;

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = FrameRegistry::new();
        registry.construct("A", true, None, TransformProvider::Static(crate::frame::transform::Transform::identity(crate::time::instant::Instant::new(0, crate::time::scale::Scale::Tt)))).unwrap();
        let result = registry.construct("A", true, None, TransformProvider::Static(crate::frame::transform::Transform::identity(crate::time::instant::Instant::new(0, crate::time::scale::Scale::Tt))));
        assert!(result.is_err());
    }

    #[test]
    fn emplace_is_idempotent() {
        let mut registry = FrameRegistry::new();
        let provider = || TransformProvider::Static(crate::frame::transform::Transform::identity(crate::time::instant::Instant::new(0, crate::time::scale::Scale::Tt)));
        let a = registry.emplace("B", true, None, provider).unwrap();
        let b = registry.emplace("B", true, None, provider).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn depth_increments_from_parent() {
        let mut registry = FrameRegistry::new();
        let provider = || TransformProvider::Static(crate::frame::transform::Transform::identity(crate::time::instant::Instant::new(0, crate::time::scale::Scale::Tt)));
        let root = registry.construct("root2", true, None, provider()).unwrap();
        let child = registry.construct("child2", true, Some(root), provider()).unwrap();
        assert_eq!(registry.depth(root), 0);
        assert_eq!(registry.depth(child), 1);
    }
}
