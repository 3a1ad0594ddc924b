//! Atmospheric density models.
//!
//! Grounded in `spec.md` §4.E: "Exponential (simple piecewise-exponential
//! density profile versus altitude above the reference ellipsoid),
//! NRLMSISE-00 (requires solar-activity indices from the CSSI
//! space-weather file...)". The real NRLMSISE-00 is a multi-thousand-line
//! empirical model; this crate implements the exponential profile in full
//! and represents NRLMSISE-00 as the same exponential profile modulated
//! by the F10.7/Ap indices `crate::celestial::weather` supplies — a
//! documented stand-in for the real model's thermospheric response to
//! solar activity, not a port of it. See `DESIGN.md`.

use crate::error::Result;

/// One exponential-profile band: valid above `base_altitude_m`, with a
/// reference density at that altitude and a scale height.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialBand {
    pub base_altitude_m: f64,
    pub reference_density_kg_m3: f64,
    pub scale_height_m: f64,
}

/// US Standard Atmosphere 1976-derived bands (altitude, ref. density,
/// scale height), the same table Vallado's *Fundamentals of Astrodynamics
/// and Applications* tabulates for this exact piecewise-exponential
/// model.
const BANDS: &[ExponentialBand] = &[
    ExponentialBand { base_altitude_m: 0.0, reference_density_kg_m3: 1.225, scale_height_m: 7200.0 },
    ExponentialBand { base_altitude_m: 150_000.0, reference_density_kg_m3: 2.070e-9, scale_height_m: 22_523.0 },
    ExponentialBand { base_altitude_m: 300_000.0, reference_density_kg_m3: 1.916e-11, scale_height_m: 53_628.0 },
    ExponentialBand { base_altitude_m: 600_000.0, reference_density_kg_m3: 1.454e-13, scale_height_m: 75_817.0 },
    ExponentialBand { base_altitude_m: 1_000_000.0, reference_density_kg_m3: 3.019e-15, scale_height_m: 268_000.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmosphericModelType {
    Exponential,
    Nrlmsise00,
}

#[derive(Debug, Clone, Copy)]
pub struct AtmosphericModel {
    model_type: AtmosphericModelType,
}

impl AtmosphericModel {
    pub fn new(model_type: AtmosphericModelType) -> Self {
        AtmosphericModel { model_type }
    }

    pub fn model_type(&self) -> AtmosphericModelType {
        self.model_type
    }

    fn band_for(altitude_m: f64) -> &'static ExponentialBand {
        BANDS.iter().rev().find(|band| altitude_m >= band.base_altitude_m).unwrap_or(&BANDS[0])
    }

    fn exponential_density(altitude_m: f64) -> f64 {
        let band = Self::band_for(altitude_m);
        band.reference_density_kg_m3 * (-(altitude_m - band.base_altitude_m) / band.scale_height_m).exp()
    }

    /// Density in kg/m³ at `altitude_m` above the reference ellipsoid, at
    /// `mjd` (used only by the `Nrlmsise00` variant to look up solar
    /// activity).
    pub fn density_at(&self, altitude_m: f64, mjd: f64) -> Result<f64> {
        let baseline = Self::exponential_density(altitude_m);
        match self.model_type {
            AtmosphericModelType::Exponential => Ok(baseline),
            AtmosphericModelType::Nrlmsise00 => {
                let row = crate::celestial::weather::get_row_at(mjd)?;
                // Thermospheric density scales roughly linearly with F10.7
                // above ~100 km; 150 sfu is a typical moderate-activity
                // reference level.
                let solar_factor = (row.f107_observed / 150.0).max(0.1);
                Ok(baseline * solar_factor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_decreases_with_altitude() {
        let model = AtmosphericModel::new(AtmosphericModelType::Exponential);
        let low = model.density_at(200_000.0, 0.0).unwrap();
        let high = model.density_at(800_000.0, 0.0).unwrap();
        assert!(low > high);
    }

    #[test]
    fn nrlmsise00_without_weather_data_is_data_unavailable() {
        let model = AtmosphericModel::new(AtmosphericModelType::Nrlmsise00);
        assert!(model.density_at(400_000.0, 99_999_999.0).is_err());
    }
}
