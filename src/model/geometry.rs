//! Geometric and visual value types shared by the transfer objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// A pair of integer coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Couple {
    pub x: i64,
    pub y: i64,
}

impl Couple {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Couple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Triple {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A position plus an orientation angle in degrees.
///
/// `NaN` as angle means "unknown". Two poses with `NaN` angles and the same
/// position are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub position: Option<Triple>,
    #[serde(with = "nan_as_null", default = "unknown_angle")]
    pub orientation_angle: f64,
}

fn unknown_angle() -> f64 {
    f64::NAN
}

impl Pose {
    pub const fn new(position: Triple, orientation_angle: f64) -> Self {
        Self { position: Some(position), orientation_angle }
    }

    /// The orientation angle, or `None` if unknown.
    pub fn orientation(&self) -> Option<f64> {
        if self.orientation_angle.is_nan() { None } else { Some(self.orientation_angle) }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Triple::default(), f64::NAN)
    }
}

impl PartialEq for Pose {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.orientation() == other.orientation()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "Pose{{position={p}, orientationAngle={}}}", self.orientation_angle),
            None => write!(f, "Pose{{position=null, orientationAngle={}}}", self.orientation_angle),
        }
    }
}

/// JSON has no NaN; an unknown angle travels as `null`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(angle: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if angle.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(angle)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// A polygon describing the space a vehicle occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub vertices: SmallVec<[Couple; 4]>,
}

impl Envelope {
    pub fn new(vertices: impl IntoIterator<Item = Couple>) -> Self {
        Self { vertices: vertices.into_iter().collect() }
    }
}

/// Length, width and height (mm) plus the reference point offset of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoundingBoxData")]
pub struct BoundingBoxCreationTo {
    length: i64,
    width: i64,
    height: i64,
    reference_offset: Couple,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoundingBoxData {
    length: i64,
    width: i64,
    height: i64,
    #[serde(default)]
    reference_offset: Couple,
}

impl TryFrom<BoundingBoxData> for BoundingBoxCreationTo {
    type Error = Error;

    fn try_from(data: BoundingBoxData) -> Result<Self> {
        Self::new(data.length, data.width, data.height, data.reference_offset)
    }
}

impl BoundingBoxCreationTo {
    /// Every dimension must be at least 1 mm.
    pub fn new(length: i64, width: i64, height: i64, reference_offset: Couple) -> Result<Self> {
        for (field, value) in [("length", length), ("width", width), ("height", height)] {
            if value < 1 {
                return Err(Error::construction(
                    "bounding box",
                    format!("{length}x{width}x{height}"),
                    format!("{field} must be at least 1, got {value}"),
                ));
            }
        }
        Ok(Self { length, width, height, reference_offset })
    }

    pub fn length(&self) -> i64 { self.length }
    pub fn width(&self) -> i64 { self.width }
    pub fn height(&self) -> i64 { self.height }
    pub fn reference_offset(&self) -> Couple { self.reference_offset }
}

impl Default for BoundingBoxCreationTo {
    fn default() -> Self {
        Self { length: 1000, width: 1000, height: 1000, reference_offset: Couple::default() }
    }
}

impl fmt::Display for BoundingBoxCreationTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox{{length={}, width={}, height={}, referenceOffset={}}}",
            self.length, self.width, self.height, self.reference_offset
        )
    }
}

/// An RGB color, serialized as `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::construction("color", s, "expected #RRGGBB");
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_nan_equality() {
        assert_eq!(Pose::default(), Pose::default());
        assert_eq!(Pose::default().orientation(), None);
        assert_ne!(Pose::default(), Pose::new(Triple::default(), 0.0));
    }

    #[test]
    fn test_pose_json_unknown_angle_is_null() {
        let json = serde_json::to_string(&Pose::default()).unwrap();
        assert_eq!(json, r#"{"position":{"x":0,"y":0,"z":0},"orientationAngle":null}"#);
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert!(back.orientation_angle.is_nan());
    }

    #[test]
    fn test_bounding_box_rejects_zero_dimension() {
        let err = BoundingBoxCreationTo::new(1000, 0, 1000, Couple::default()).unwrap_err();
        assert!(err.to_string().contains("width"));
        let json = r#"{"length": 1, "width": 1, "height": 0}"#;
        assert!(serde_json::from_str::<BoundingBoxCreationTo>(json).is_err());
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::RED.to_string(), "#FF0000");
        assert_eq!("#00ff7f".parse::<Color>().unwrap(), Color::rgb(0, 255, 127));
        assert!("00FF7F".parse::<Color>().is_err());
        assert!("#00FF7".parse::<Color>().is_err());
    }
}
