//! CIE XYZ coordinates, used only as a cheap perceptual-distance space.

use serde::Serialize;

/// A color in CIE XYZ (D65, 2° observer), scaled so that white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Xyz {
    /// X tristimulus value.
    pub x: f64,
    /// Y tristimulus value, relative luminance times 100.
    pub y: f64,
    /// Z tristimulus value.
    pub z: f64,
}

impl Xyz {
    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Xyz) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
