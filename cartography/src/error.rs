use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrbitError>;

#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("invalid orbit: {field} = {value}")]
    InvalidOrbit { field: &'static str, value: String },

    #[error("eccentricity {eccentricity} does not describe a closed ellipse")]
    DegenerateGeometry { eccentricity: f64 },

    #[error("invalid sampler setting: {field} = {value}")]
    InvalidConfig { field: &'static str, value: String },

    #[error("cannot convert a zero distance")]
    ZeroDistance,

    #[error("body {name} orbits unknown parent {parent}")]
    UnknownParent { name: String, parent: String },

    #[error("no preset named {0}")]
    UnknownPreset(String),

    #[error("no body named {0}")]
    UnknownBody(String),

    #[error("{0} has no orbit")]
    NotOrbiting(String),

    #[error("parent chain of {0} loops back on itself")]
    ParentCycle(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl OrbitError {
    pub(crate) fn invalid(field: &'static str, value: impl std::fmt::Display) -> Self {
        OrbitError::InvalidOrbit {
            field,
            value: value.to_string(),
        }
    }
}
