use crate::constants::SOLAR_MASS;
use crate::elements::{Body, Orbit};
use crate::error::{OrbitError, Result};
use chrono::NaiveDate;
use enum_iterator::Sequence;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Parent name of bodies orbiting the system barycenter
pub const ORIGIN: &str = "Origin";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, Sequence)]
pub enum BodyKind {
    #[serde(rename = "Planet")]
    Planet,
    #[serde(rename = "Dwarf Planet")]
    DwarfPlanet,
    #[serde(rename = "Telluric Planet")]
    TelluricPlanet,
    #[serde(rename = "Giant Planet")]
    GiantPlanet,
    #[serde(rename = "Star")]
    Star,
    #[serde(rename = "Comet")]
    Comet,
    #[serde(rename = "Natural Satellite")]
    NaturalSatellite,
    #[serde(rename = "Artificial Satellite")]
    ArtificialSatellite,
    #[serde(rename = "Asteroid")]
    Asteroid,
    #[serde(rename = "Random")]
    Random,
    #[serde(rename = "Oort Cloud")]
    OortCloud,
    #[serde(rename = "Trans-Neptunian Object")]
    TransNeptunian,
    #[serde(rename = "Centaur")]
    Centaur,
    #[serde(rename = "Kuiper Belt Object")]
    KuiperBelt,
}

impl BodyKind {
    pub fn all() -> impl Iterator<Item = Self> {
        enum_iterator::all::<Self>()
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Planet => "Planet",
            BodyKind::DwarfPlanet => "Dwarf Planet",
            BodyKind::TelluricPlanet => "Telluric Planet",
            BodyKind::GiantPlanet => "Giant Planet",
            BodyKind::Star => "Star",
            BodyKind::Comet => "Comet",
            BodyKind::NaturalSatellite => "Natural Satellite",
            BodyKind::ArtificialSatellite => "Artificial Satellite",
            BodyKind::Asteroid => "Asteroid",
            BodyKind::Random => "Random",
            BodyKind::OortCloud => "Oort Cloud",
            BodyKind::TransNeptunian => "Trans-Neptunian Object",
            BodyKind::Centaur => "Centaur",
            BodyKind::KuiperBelt => "Kuiper Belt Object",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().find(|k| k.label().eq_ignore_ascii_case(label))
    }

    /// Default display color, RGB
    pub fn color(&self) -> [u8; 3] {
        match self {
            BodyKind::Planet => [255, 255, 255],
            BodyKind::DwarfPlanet => [255, 0, 0],
            BodyKind::TelluricPlanet => [255, 128, 0],
            BodyKind::GiantPlanet => [255, 128, 128],
            BodyKind::Star => [255, 255, 0],
            BodyKind::Comet => [128, 255, 0],
            BodyKind::NaturalSatellite => [0, 255, 255],
            BodyKind::ArtificialSatellite => [128, 128, 128],
            BodyKind::Asteroid => [0, 128, 255],
            BodyKind::Random => [255, 0, 255],
            BodyKind::OortCloud => [45, 0, 45],
            BodyKind::TransNeptunian => [160, 25, 255],
            BodyKind::Centaur => [80, 128, 0],
            BodyKind::KuiperBelt => [128, 128, 0],
        }
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn origin() -> String {
    ORIGIN.to_string()
}

/// One entry of a body catalog as entered or stored. Stars have no orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub kind: BodyKind,
    #[serde(default = "origin")]
    pub parent: String,
    /// kg
    pub mass: f64,
    /// days
    #[serde(default)]
    pub rotation_period: f64,
    /// degrees
    #[serde(default)]
    pub axis_inclination: f64,
    /// meters
    #[serde(default)]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<Orbit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perihelion_date: Option<NaiveDate>,
}

impl BodyRecord {
    pub fn star(name: impl Into<String>, mass: f64) -> Self {
        BodyRecord {
            name: name.into(),
            kind: BodyKind::Star,
            parent: origin(),
            mass,
            rotation_period: 0.0,
            axis_inclination: 0.0,
            radius: 0.0,
            orbit: None,
            perihelion_date: None,
        }
    }

    pub fn orbiting(
        name: impl Into<String>,
        kind: BodyKind,
        parent: impl Into<String>,
        body: Body,
        orbit: Orbit,
    ) -> Self {
        BodyRecord {
            name: name.into(),
            kind,
            parent: parent.into(),
            mass: body.mass,
            rotation_period: body.rotation_period,
            axis_inclination: body.axis_inclination,
            radius: body.radius,
            orbit: Some(orbit),
            perihelion_date: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_perihelion(mut self, year: i32, month: u32, day: u32) -> Self {
        self.perihelion_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn is_root(&self) -> bool {
        self.parent == ORIGIN
    }

    pub fn body(&self) -> Body {
        Body::new(self.mass, self.rotation_period, self.axis_inclination).with_radius(self.radius)
    }
}

fn planet(
    name: &str,
    kind: BodyKind,
    body: Body,
    orbit: Orbit,
    perihelion: (i32, u32, u32),
) -> BodyRecord {
    BodyRecord::orbiting(name, kind, ORIGIN, body, orbit).with_perihelion(
        perihelion.0,
        perihelion.1,
        perihelion.2,
    )
}

lazy_static! {
    pub static ref PRESETS: Vec<BodyRecord> = vec![
        BodyRecord::star("Sun", SOLAR_MASS).with_radius(6.957e8),
        planet(
            "Mercury",
            BodyKind::Planet,
            Body::new(0.330e24, 58.6458, 0.03).with_radius(2.4397e6),
            Orbit::new(0.38709808989279954, 0.2056, 7.004, 29.12, 48.33),
            (2000, 11, 24),
        ),
        planet(
            "Venus",
            BodyKind::Planet,
            Body::new(4.8675e24, -243.023, 177.36).with_radius(6.0518e6),
            Orbit::new(0.723336, 0.00678, 3.39471, 54.9, 76.68),
            (2023, 4, 17),
        ),
        planet(
            "Earth",
            BodyKind::Planet,
            Body::new(5.972e24, 0.99726949, 23.4366907752).with_radius(6.371e6),
            Orbit::new(1.0000001124, 0.01671022, 0.0, 288.064, 174.873),
            (2023, 1, 4),
        ),
        planet(
            "Mars",
            BodyKind::Planet,
            Body::new(6.4185e23, 1.025957, 25.19).with_radius(3.3895e6),
            Orbit::new(1.52368055, 0.09339, 1.85, 286.5, 49.57854),
            (2022, 6, 21),
        ),
        planet(
            "Jupiter",
            BodyKind::Planet,
            Body::new(1.8986e27, 0.41351, 3.12).with_radius(6.9911e7),
            Orbit::new(5.20289, 0.04839, 1.304, 274.255, 100.5),
            (2023, 11, 1),
        ),
        planet(
            "Saturn",
            BodyKind::Planet,
            Body::new(5.6846e26, 0.4, 26.73).with_radius(5.8232e7),
            Orbit::new(9.5367, 0.0539, 2.486, 338.94, 113.7),
            (2003, 6, 20),
        ),
        planet(
            "Uranus",
            BodyKind::Planet,
            Body::new(8.6811e25, -0.718, 97.77).with_radius(2.5362e7),
            Orbit::new(19.19126393, 0.04716771, 0.76986, 96.9, 74.22988),
            (2050, 8, 4),
        ),
        planet(
            "Neptune",
            BodyKind::Planet,
            Body::new(102.409e24, 0.67125, 28.32).with_radius(2.4622e7),
            Orbit::new(30.06896348, 0.00858587, 1.76917, 273.2, 131.72169),
            (1881, 2, 2),
        ),
        planet(
            "Pluto",
            BodyKind::DwarfPlanet,
            Body::new(1.314e22, -6.387, 122.52).with_radius(1.1883e6),
            Orbit::new(39.4450697, 0.25024871, 17.0890009, 112.5971417, 110.376956),
            (1989, 5, 8),
        ),
        planet(
            "1P/Halley",
            BodyKind::Comet,
            Body::new(2.2e14, 1.0, 0.0).with_radius(5.5e3),
            Orbit::new(17.872265, 0.966321, 162.2239, 111.9047, 58.9763),
            (1986, 2, 9),
        ),
    ];
}

pub fn preset(name: &str) -> Result<BodyRecord> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| OrbitError::UnknownPreset(name.to_string()))
}
