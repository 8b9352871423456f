use serde::{Deserialize, Serialize};

/// Quantities derived once from a body's orbital elements, in the units
/// the storage layer keeps them in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    /// AU
    pub semi_minor_axis: f64,
    /// days
    pub period: f64,
    /// meters, circle of radius a
    pub circumference: f64,
    /// AU
    pub distance_at_perihelion: f64,
    /// m/s
    pub velocity_at_perihelion: f64,
    /// AU
    pub distance_at_aphelion: f64,
    /// m/s
    pub velocity_at_aphelion: f64,
}

impl DerivedAttributes {
    pub const COLUMNS: [&'static str; 7] = [
        "semi_minor_axis",
        "period",
        "circumference",
        "distance_at_perihelion",
        "velocity_at_perihelion",
        "distance_at_aphelion",
        "velocity_at_aphelion",
    ];

    /// (column name, value) pairs in storage column order
    pub fn columns(&self) -> [(&'static str, f64); 7] {
        let values = [
            self.semi_minor_axis,
            self.period,
            self.circumference,
            self.distance_at_perihelion,
            self.velocity_at_perihelion,
            self.distance_at_aphelion,
            self.velocity_at_aphelion,
        ];
        let mut out = [("", 0.0); 7];
        for (i, (name, value)) in Self::COLUMNS.iter().zip(values).enumerate() {
            out[i] = (*name, value);
        }
        out
    }
}

/// Static scalars a scene layer needs to place an orbit. Lengths in AU,
/// angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitGeometry {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub arg_periapsis: f64,
    pub ascending_node: f64,
    /// distance from the ellipse center to the occupied focus
    pub focal_offset: f64,
}

impl std::fmt::Display for DerivedAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.columns() {
            writeln!(f, "{:<24} {:.6e}", name, value)?;
        }
        Ok(())
    }
}
