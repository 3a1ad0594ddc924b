//! Celestial bodies and the field models attached to them (`spec.md`
//! §4.E): gravitational, magnetic, atmospheric, and the space-weather
//! ingestion atmospheric's NRLMSISE-00 variant depends on.

pub mod atmospheric;
pub mod body;
pub mod gravitational;
pub mod magnetic;
pub mod weather;

pub use atmospheric::{AtmosphericModel, AtmosphericModelType};
pub use body::{BodyType, Celestial, EphemerisFn};
pub use gravitational::{GravitationalModel, GravityModelType};
pub use magnetic::{MagneticModel, MagneticModelType};
