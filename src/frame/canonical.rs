//! Wiring for the fixed frame tree `spec.md` §4.D names: GCRF is the root;
//! MOD, TOD, CIRF, TIRF, ITRF and TEME hang off it in that construction
//! order. Each is a singleton, emplaced idempotently on first access so
//! that independent test modules calling e.g. [`gcrf`] don't race to
//! construct it twice.

use crate::error::Result;
use crate::frame::provider::TransformProvider;
use crate::frame::registry::{FrameId, FrameRegistry};

const GCRF: &str = "GCRF";
const MOD: &str = "MOD";
const TOD: &str = "TOD";
const CIRF: &str = "CIRF";
const TIRF: &str = "TIRF";
const ITRF: &str = "ITRF";
const TEME: &str = "TEME";

fn emplace_chain(registry: &mut FrameRegistry) -> Result<FrameId> {
    let gcrf = registry.emplace(GCRF, true, None, || TransformProvider::Static(identity_transform()))?;
    let mod_frame = registry.emplace(MOD, true, Some(gcrf), || TransformProvider::Precession1976)?;
    let tod = registry.emplace(TOD, true, Some(mod_frame), || TransformProvider::Nutation1980)?;
    let cirf = registry.emplace(CIRF, true, Some(gcrf), || TransformProvider::Cio2006)?;
    let tirf = registry.emplace(TIRF, false, Some(cirf), || TransformProvider::EarthRotationAngle)?;
    let itrf = registry.emplace(ITRF, false, Some(tirf), || TransformProvider::PolarMotion)?;
    let _teme = registry.emplace(TEME, false, Some(itrf), || TransformProvider::Teme)?;
    let _ = tod; // TOD is reachable by name; not needed to derive the others.
    Ok(gcrf)
}

fn identity_transform() -> crate::frame::transform::Transform {
    crate::frame::transform::Transform::identity(crate::time::instant::Instant::j2000())
}

/// Ensure the canonical tree exists and return GCRF's id.
pub fn ensure_canonical_frames() -> Result<FrameId> {
    let mut registry = FrameRegistry::global().lock().expect("frame registry poisoned");
    emplace_chain(&mut registry)
}

macro_rules! canonical_accessor {
    ($name:ident, $key:expr) => {
        /// Returns the canonical frame's id, constructing the whole tree on
        /// first use.
        pub fn $name() -> Result<FrameId> {
            ensure_canonical_frames()?;
            let registry = FrameRegistry::global().lock().expect("frame registry poisoned");
            Ok(registry.with_name($key).expect("canonical frame constructed above"))
        }
    };
}

canonical_accessor!(gcrf, GCRF);
canonical_accessor!(mod_of_date, MOD);
canonical_accessor!(tod_of_date, TOD);
canonical_accessor!(cirf, CIRF);
canonical_accessor!(tirf, TIRF);
canonical_accessor!(itrf, ITRF);
canonical_accessor!(teme, TEME);
