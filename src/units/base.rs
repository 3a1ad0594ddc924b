//! Base unit enumerations and their SI conversion ratios / symbols.
//!
//! Grounded in `original_source/include/OpenSpaceToolkit/Physics/Unit/{Length,Mass,Time,
//! ElectricCurrent,Derived/Angle}.hpp`: each base dimension enumerates a handful of
//! common units with a ratio to its SI unit.

/// Length units, SI unit = meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Meter,
    Foot,
    NauticalMile,
    AstronomicalUnit,
    Kilometer,
}

impl LengthUnit {
    pub fn si_ratio(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Foot => 0.304_8,
            LengthUnit::NauticalMile => 1_852.0,
            LengthUnit::AstronomicalUnit => 149_597_870_700.0,
            LengthUnit::Kilometer => 1_000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
            LengthUnit::NauticalMile => "nmi",
            LengthUnit::AstronomicalUnit => "AU",
            LengthUnit::Kilometer => "km",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "m" => LengthUnit::Meter,
            "ft" => LengthUnit::Foot,
            "nmi" => LengthUnit::NauticalMile,
            "AU" => LengthUnit::AstronomicalUnit,
            "km" => LengthUnit::Kilometer,
            _ => return None,
        })
    }
}

/// Mass units, SI unit = kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
}

impl MassUnit {
    pub fn si_ratio(&self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Pound => 0.453_592_37,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lb",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "kg" => MassUnit::Kilogram,
            "g" => MassUnit::Gram,
            "lb" => MassUnit::Pound,
            _ => return None,
        })
    }
}

/// Time units (as a *unit*, distinct from the time-*scale* tagged
/// [`crate::time::Instant`]), SI unit = second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub fn si_ratio(&self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "s" => TimeUnit::Second,
            "min" => TimeUnit::Minute,
            "h" => TimeUnit::Hour,
            "d" => TimeUnit::Day,
            _ => return None,
        })
    }
}

/// Electric current units, SI unit = ampere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElectricCurrentUnit {
    Ampere,
}

impl ElectricCurrentUnit {
    pub fn si_ratio(&self) -> f64 {
        1.0
    }

    pub fn symbol(&self) -> &'static str {
        "A"
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "A" => Some(ElectricCurrentUnit::Ampere),
            _ => None,
        }
    }
}

/// Angle units, SI unit = radian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Radian,
    Degree,
    Arcsecond,
    Revolution,
}

impl AngleUnit {
    pub fn si_ratio(&self) -> f64 {
        match self {
            AngleUnit::Radian => 1.0,
            AngleUnit::Degree => std::f64::consts::PI / 180.0,
            AngleUnit::Arcsecond => std::f64::consts::PI / (180.0 * 3_600.0),
            AngleUnit::Revolution => 2.0 * std::f64::consts::PI,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AngleUnit::Radian => "rad",
            AngleUnit::Degree => "deg",
            AngleUnit::Arcsecond => "asec",
            AngleUnit::Revolution => "rev",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "rad" => AngleUnit::Radian,
            "deg" => AngleUnit::Degree,
            "asec" => AngleUnit::Arcsecond,
            "rev" => AngleUnit::Revolution,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foot_to_meter_ratio() {
        assert!((LengthUnit::Foot.si_ratio() - 0.3048).abs() < 1e-12);
    }

    #[test]
    fn symbol_roundtrip() {
        for u in [
            LengthUnit::Meter,
            LengthUnit::Foot,
            LengthUnit::NauticalMile,
            LengthUnit::AstronomicalUnit,
            LengthUnit::Kilometer,
        ] {
            assert_eq!(LengthUnit::from_symbol(u.symbol()), Some(u));
        }
    }
}
