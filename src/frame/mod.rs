//! Coordinate frame graph: a registry of frames related by provider-backed
//! transforms, and the LCA-based composition algorithm `spec.md` §4.D
//! names for getting from any frame to any other.
//!
//! Grounded in `original_source/.../Coordinate/Frame/Frame.cpp`'s
//! `getTransformTo`, re-architected per `spec.md` §9: frames are plain
//! integer handles (see [`registry`]) rather than `shared_ptr<const
//! Frame>` nodes holding a weak parent and strong children, so there is no
//! cycle to break and no `enable_shared_from_this` boilerplate. The walk
//! itself — collect ancestors of both frames up to their lowest common
//! ancestor, compose each side's hops, invert one side — is unchanged.

pub mod canonical;
pub mod provider;
pub mod registry;
pub mod transform;
pub mod nutation;

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{PhysicsError, Result};
use crate::time::instant::Instant;

pub use provider::TransformProvider;
pub use registry::{FrameId, FrameRegistry, MAX_DEPTH};
pub use transform::{Direction, Transform};

/// A handle to a registered frame. Cheap to copy; the real state lives in
/// [`FrameRegistry::global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame(FrameId);

impl Frame {
    pub fn construct(name: &str, quasi_inertial: bool, parent: Option<Frame>, provider: TransformProvider) -> Result<Frame> {
        let mut registry = FrameRegistry::global().lock().expect("frame registry poisoned");
        let id = registry.construct(name, quasi_inertial, parent.map(|f| f.0), provider)?;
        Ok(Frame(id))
    }

    pub fn with_name(name: &str) -> Option<Frame> {
        let registry = FrameRegistry::global().lock().expect("frame registry poisoned");
        registry.with_name(name).map(Frame)
    }

    pub fn destruct(name: &str) -> Result<()> {
        let mut registry = FrameRegistry::global().lock().expect("frame registry poisoned");
        registry.destruct(name)
    }

    pub fn gcrf() -> Result<Frame> {
        canonical::gcrf().map(Frame)
    }
    pub fn mod_of_date() -> Result<Frame> {
        canonical::mod_of_date().map(Frame)
    }
    pub fn tod_of_date() -> Result<Frame> {
        canonical::tod_of_date().map(Frame)
    }
    pub fn cirf() -> Result<Frame> {
        canonical::cirf().map(Frame)
    }
    pub fn tirf() -> Result<Frame> {
        canonical::tirf().map(Frame)
    }
    pub fn itrf() -> Result<Frame> {
        canonical::itrf().map(Frame)
    }
    pub fn teme() -> Result<Frame> {
        canonical::teme().map(Frame)
    }

    pub fn id(&self) -> FrameId {
        self.0
    }

    pub fn name(&self) -> String {
        let registry = FrameRegistry::global().lock().expect("frame registry poisoned");
        registry.node(self.0).name.clone()
    }

    pub fn is_quasi_inertial(&self) -> bool {
        let registry = FrameRegistry::global().lock().expect("frame registry poisoned");
        registry.node(self.0).quasi_inertial
    }

    /// The transform that maps a position/velocity expressed in `self` to
    /// one expressed in `target`, at `instant`. Cached per
    /// `(self, target, instant)` — `spec.md` §4.D calls out repeated
    /// queries at the same instant as the common case (e.g. evaluating a
    /// whole ephemeris's worth of points against a fixed epoch's EOP
    /// lookup), and `Instant` is hashable precisely so this cache can key
    /// on it directly.
    pub fn get_transform_to(&self, target: &Frame, instant: Instant) -> Result<Transform> {
        let key = (self.0, target.0, instant);
        if let Some(cached) = transform_cache().lock().expect("transform cache poisoned").get(&key) {
            return Ok(*cached);
        }
        let transform = compute_transform(self.0, target.0, instant)?;
        transform_cache().lock().expect("transform cache poisoned").insert(key, transform);
        Ok(transform)
    }
}

fn transform_cache() -> &'static Mutex<HashMap<(FrameId, FrameId, Instant), Transform>> {
    static CACHE: std::sync::OnceLock<Mutex<HashMap<(FrameId, FrameId, Instant), Transform>>> = std::sync::OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn ancestors_with_self(registry: &FrameRegistry, id: FrameId) -> Vec<FrameId> {
    let mut chain = vec![id];
    let mut current = id;
    while let Some(parent) = registry.parent(current) {
        chain.push(parent);
        current = parent;
    }
    chain
}

fn find_lowest_common_ancestor(a_chain: &[FrameId], b_chain: &[FrameId]) -> Option<FrameId> {
    let b_set: HashSet<FrameId> = b_chain.iter().copied().collect();
    a_chain.iter().find(|id| b_set.contains(id)).copied()
}

/// The transform from `ancestor` down to `chain[0]`, by composing each
/// hop's parent→child provider output, innermost (closest to `ancestor`)
/// first.
fn transform_from_ancestor(registry: &FrameRegistry, chain: &[FrameId], ancestor: FrameId, instant: Instant) -> Result<Transform> {
    let ancestor_index = chain.iter().position(|&id| id == ancestor).expect("ancestor is in its own chain");
    let mut accumulated = Transform::identity(instant);
    for &node in chain[..ancestor_index].iter().rev() {
        let hop = provider::evaluate(&registry.node(node).provider, instant)?;
        accumulated = hop.compose(&accumulated);
    }
    Ok(accumulated)
}

fn compute_transform(source: FrameId, target: FrameId, instant: Instant) -> Result<Transform> {
    if source == target {
        return Ok(Transform::identity(instant));
    }
    let registry = FrameRegistry::global().lock().expect("frame registry poisoned");
    let source_chain = ancestors_with_self(&registry, source);
    let target_chain = ancestors_with_self(&registry, target);
    let lca = find_lowest_common_ancestor(&source_chain, &target_chain)
        .ok_or_else(|| PhysicsError::InvalidState("frames do not share a common ancestor".to_string()))?;

    let lca_to_source = transform_from_ancestor(&registry, &source_chain, lca, instant)?;
    let lca_to_target = transform_from_ancestor(&registry, &target_chain, lca, instant)?;
    Ok(lca_to_target.compose(&lca_to_source.inverse()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::scale::Scale;

    #[test]
    fn transform_to_self_is_identity() {
        let gcrf = Frame::gcrf().unwrap();
        let instant = Instant::j2000();
        let transform = gcrf.get_transform_to(&gcrf, instant).unwrap();
        let p = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        assert!((transform.apply_to_position(p) - p).norm() < 1e-12);
    }

    #[test]
    fn forward_and_backward_transforms_are_inverses() {
        let gcrf = Frame::gcrf().unwrap();
        let cirf = Frame::cirf().unwrap();
        let instant = Instant::new(10 * 365 * 86_400 * 1_000_000_000, Scale::Tt);
        let forward = gcrf.get_transform_to(&cirf, instant).unwrap();
        let backward = cirf.get_transform_to(&gcrf, instant).unwrap();
        let p = nalgebra::Vector3::new(7000.0, 0.0, 0.0);
        let round_trip = backward.apply_to_position(forward.apply_to_position(p));
        assert!((round_trip - p).norm() < 1e-6);
    }

    #[test]
    fn depth_bound_rejects_overlong_chains() {
        let mut registry = FrameRegistry::new();
        let provider = || TransformProvider::Static(Transform::identity(Instant::j2000()));
        let mut last = registry.construct("depth-test-root", true, None, provider()).unwrap();
        for i in 0..registry::MAX_DEPTH {
            last = registry.construct(&format!("depth-test-{i}"), true, Some(last), provider()).unwrap();
        }
        let overflow = registry.construct("depth-test-overflow", true, Some(last), provider());
        assert!(overflow.is_err());
    }
}
