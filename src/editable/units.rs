//! Unit-carrying property values used by the editor.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Mm,
    Cm,
    M,
    Km,
}

impl LengthUnit {
    fn per_mm(self) -> f64 {
        match self {
            LengthUnit::Mm => 1.0,
            LengthUnit::Cm => 10.0,
            LengthUnit::M => 1_000.0,
            LengthUnit::Km => 1_000_000.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::Km => "km",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn mm(value: f64) -> Self {
        Self::new(value, LengthUnit::Mm)
    }

    pub fn as_mm(&self) -> f64 {
        self.value * self.unit.per_mm()
    }

    pub fn to_unit(self, unit: LengthUnit) -> Self {
        Self::new(self.as_mm() / unit.per_mm(), unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    MmPerSec,
    MPerSec,
    KmPerHour,
}

impl SpeedUnit {
    fn per_mm_per_sec(self) -> f64 {
        match self {
            SpeedUnit::MmPerSec => 1.0,
            SpeedUnit::MPerSec => 1_000.0,
            SpeedUnit::KmPerHour => 1_000_000.0 / 3_600.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MmPerSec => "mm/s",
            SpeedUnit::MPerSec => "m/s",
            SpeedUnit::KmPerHour => "km/h",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub value: f64,
    pub unit: SpeedUnit,
}

impl Speed {
    pub const fn new(value: f64, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }

    pub const fn mm_per_sec(value: f64) -> Self {
        Self::new(value, SpeedUnit::MmPerSec)
    }

    pub fn as_mm_per_sec(&self) -> f64 {
        self.value * self.unit.per_mm_per_sec()
    }

    pub fn to_unit(self, unit: SpeedUnit) -> Self {
        Self::new(self.as_mm_per_sec() / unit.per_mm_per_sec(), unit)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    Deg,
    Rad,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    pub const fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Deg)
    }

    pub fn as_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Rad => self.value.to_degrees(),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Deg => write!(f, "{} deg", self.value),
            AngleUnit::Rad => write!(f, "{} rad", self.value),
        }
    }
}

/// A value chosen from a list of candidates.
///
/// The value is not required to be one of the candidates; [`is_valid`](Self::is_valid)
/// tells whether it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionProperty {
    pub possible_values: Vec<String>,
    pub value: Option<String>,
}

impl SelectionProperty {
    pub fn is_valid(&self) -> bool {
        match &self.value {
            Some(v) => self.possible_values.contains(v),
            None => false,
        }
    }
}
