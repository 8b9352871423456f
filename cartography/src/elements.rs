use crate::attributes::{DerivedAttributes, OrbitGeometry};
use crate::constants::{GRAVITATIONAL_CONSTANT, PI, SECONDS_PER_DAY};
use crate::error::{OrbitError, Result};
use crate::math::DVec2;
use crate::units::au_to_meters;
use serde::{Deserialize, Serialize};

/// Physical attributes of the orbiting body itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// kg
    pub mass: f64,
    /// days, negative for retrograde spin
    pub rotation_period: f64,
    /// degrees
    pub axis_inclination: f64,
    /// meters, zero when unknown
    #[serde(default)]
    pub radius: f64,
}

impl Body {
    pub const fn new(mass: f64, rotation_period: f64, axis_inclination: f64) -> Self {
        Body {
            mass,
            rotation_period,
            axis_inclination,
            radius: 0.0,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// The shape and orientation inputs of an orbit. Lengths in AU, angles in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub arg_periapsis: f64,
    pub ascending_node: f64,
}

impl Orbit {
    pub const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        arg_periapsis: f64,
        ascending_node: f64,
    ) -> Self {
        Orbit {
            semi_major_axis,
            eccentricity,
            inclination,
            arg_periapsis,
            ascending_node,
        }
    }

    pub const fn planar(semi_major_axis: f64, eccentricity: f64) -> Self {
        Orbit::new(semi_major_axis, eccentricity, 0.0, 0.0, 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitClass {
    Circular,
    NearCircular,
    Elliptical,
    HighlyElliptical,
}

// https://en.wikipedia.org/wiki/Vis-viva_equation
pub fn vis_viva_equation(mu: f64, r: f64, a: f64) -> f64 {
    (mu * (2.0 / r - 1.0 / a)).sqrt()
}

// https://en.wikipedia.org/wiki/Orbital_period
pub fn kepler_period_secs(semi_major_axis_meters: f64, mu: f64) -> f64 {
    2.0 * PI * (semi_major_axis_meters.powi(3) / mu).sqrt()
}

/// Stored form of `OrbitalElements`: the inputs only. Derived values are
/// recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementsInput {
    pub name: String,
    pub orbit: Orbit,
    pub body: Body,
    pub parent_mass: f64,
}

/// One body's orbit around its parent, validated on construction and
/// immutable afterwards. Derived quantities are computed once in `new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementsInput", into = "ElementsInput")]
pub struct OrbitalElements {
    name: String,
    orbit: Orbit,
    body: Body,
    parent_mass: f64,
    derived: DerivedAttributes,
}

fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(OrbitError::invalid(field, value));
    }
    Ok(value)
}

fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(OrbitError::invalid(field, value));
    }
    Ok(value)
}

impl OrbitalElements {
    pub fn new(name: impl Into<String>, orbit: Orbit, body: Body, parent_mass: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrbitError::invalid("name", "\"\""));
        }

        require_positive("semi_major_axis", orbit.semi_major_axis)?;
        require_finite("eccentricity", orbit.eccentricity)?;
        if orbit.eccentricity < 0.0 {
            return Err(OrbitError::invalid("eccentricity", orbit.eccentricity));
        }
        if orbit.eccentricity >= 1.0 {
            return Err(OrbitError::DegenerateGeometry {
                eccentricity: orbit.eccentricity,
            });
        }
        require_finite("inclination", orbit.inclination)?;
        require_finite("arg_periapsis", orbit.arg_periapsis)?;
        require_finite("ascending_node", orbit.ascending_node)?;

        require_positive("parent_mass", parent_mass)?;
        require_finite("object_mass", body.mass)?;
        if body.mass < 0.0 {
            return Err(OrbitError::invalid("object_mass", body.mass));
        }
        require_finite("rotation_period", body.rotation_period)?;
        if body.rotation_period == 0.0 {
            return Err(OrbitError::invalid("rotation_period", body.rotation_period));
        }
        require_finite("axis_inclination", body.axis_inclination)?;
        require_finite("radius", body.radius)?;
        if body.radius < 0.0 {
            return Err(OrbitError::invalid("radius", body.radius));
        }

        let derived = derive(&orbit, &body, parent_mass);

        Ok(OrbitalElements {
            name,
            orbit,
            body,
            parent_mass,
            derived,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.orbit.semi_major_axis
    }

    pub fn ecc(&self) -> f64 {
        self.orbit.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.orbit.inclination
    }

    pub fn arg_periapsis(&self) -> f64 {
        self.orbit.arg_periapsis
    }

    pub fn ascending_node(&self) -> f64 {
        self.orbit.ascending_node
    }

    pub fn parent_mass(&self) -> f64 {
        self.parent_mass
    }

    pub fn object_mass(&self) -> f64 {
        self.body.mass
    }

    pub fn rotation_period(&self) -> f64 {
        self.body.rotation_period
    }

    pub fn axis_inclination(&self) -> f64 {
        self.body.axis_inclination
    }

    /// meters, zero when unknown
    pub fn radius(&self) -> f64 {
        self.body.radius
    }

    pub fn is_retrograde_spin(&self) -> bool {
        self.body.rotation_period < 0.0
    }

    /// G * (M + m), which sets the apsidal speeds
    pub fn mu_total(&self) -> f64 {
        GRAVITATIONAL_CONSTANT * (self.parent_mass + self.body.mass)
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.derived.semi_minor_axis
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.orbit.semi_major_axis * (1.0 - self.orbit.eccentricity.powi(2))
    }

    pub fn orbital_period_days(&self) -> f64 {
        self.derived.period
    }

    /// Length of a circle of radius a, in meters. This stands in for the
    /// ellipse perimeter everywhere distance traveled is measured.
    pub fn circumference(&self) -> f64 {
        self.derived.circumference
    }

    pub fn perihelion_distance(&self) -> f64 {
        self.derived.distance_at_perihelion
    }

    pub fn aphelion_distance(&self) -> f64 {
        self.derived.distance_at_aphelion
    }

    pub fn perihelion_velocity(&self) -> f64 {
        self.derived.velocity_at_perihelion
    }

    pub fn aphelion_velocity(&self) -> f64 {
        self.derived.velocity_at_aphelion
    }

    pub fn attributes(&self) -> DerivedAttributes {
        self.derived
    }

    /// Distance from the focus in AU
    pub fn radius_at(&self, true_anomaly: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.orbit.eccentricity * true_anomaly.cos())
    }

    /// Orbit-plane position in AU, periapsis along +x
    pub fn position_at(&self, true_anomaly: f64) -> DVec2 {
        DVec2::from_angle(true_anomaly) * self.radius_at(true_anomaly)
    }

    /// m/s at a given true anomaly
    pub fn speed_at(&self, true_anomaly: f64) -> f64 {
        vis_viva_equation(
            self.mu_total(),
            au_to_meters(self.radius_at(true_anomaly)),
            au_to_meters(self.orbit.semi_major_axis),
        )
    }

    pub fn class(&self) -> OrbitClass {
        let e = self.orbit.eccentricity;
        if e == 0.0 {
            OrbitClass::Circular
        } else if e < 0.2 {
            OrbitClass::NearCircular
        } else if e < 0.9 {
            OrbitClass::Elliptical
        } else {
            OrbitClass::HighlyElliptical
        }
    }

    pub fn geometry(&self) -> OrbitGeometry {
        OrbitGeometry {
            semi_major_axis: self.orbit.semi_major_axis,
            semi_minor_axis: self.derived.semi_minor_axis,
            eccentricity: self.orbit.eccentricity,
            inclination: self.orbit.inclination,
            arg_periapsis: self.orbit.arg_periapsis,
            ascending_node: self.orbit.ascending_node,
            focal_offset: self.orbit.semi_major_axis * self.orbit.eccentricity,
        }
    }
}

fn derive(orbit: &Orbit, body: &Body, parent_mass: f64) -> DerivedAttributes {
    let a = orbit.semi_major_axis;
    let e = orbit.eccentricity;
    let a_m = au_to_meters(a);

    let mu = GRAVITATIONAL_CONSTANT * parent_mass;
    let mu_total = GRAVITATIONAL_CONSTANT * (parent_mass + body.mass);

    let rp = a * (1.0 - e);
    let ra = a * (1.0 + e);

    DerivedAttributes {
        semi_minor_axis: a * (1.0 - e.powi(2)).sqrt(),
        period: kepler_period_secs(a_m, mu) / SECONDS_PER_DAY,
        circumference: 2.0 * PI * a_m,
        distance_at_perihelion: rp,
        velocity_at_perihelion: vis_viva_equation(mu_total, au_to_meters(rp), a_m),
        distance_at_aphelion: ra,
        velocity_at_aphelion: vis_viva_equation(mu_total, au_to_meters(ra), a_m),
    }
}

impl TryFrom<ElementsInput> for OrbitalElements {
    type Error = OrbitError;

    fn try_from(input: ElementsInput) -> Result<Self> {
        OrbitalElements::new(input.name, input.orbit, input.body, input.parent_mass)
    }
}

impl From<OrbitalElements> for ElementsInput {
    fn from(elements: OrbitalElements) -> Self {
        ElementsInput {
            name: elements.name,
            orbit: elements.orbit,
            body: elements.body,
            parent_mass: elements.parent_mass,
        }
    }
}

impl std::fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} a={:0.4} AU e={:0.4} T={:0.2} d",
            self.name, self.orbit.semi_major_axis, self.orbit.eccentricity, self.derived.period
        )
    }
}
