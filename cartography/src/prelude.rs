pub use crate::attributes::{DerivedAttributes, OrbitGeometry};
pub use crate::bodies::{preset, BodyKind, BodyRecord, ORIGIN, PRESETS};
pub use crate::catalog::Catalog;
pub use crate::constants::*;
pub use crate::curve::{MotionCurve, TimeSample};
pub use crate::elements::{
    vis_viva_equation, Body, ElementsInput, Orbit, OrbitClass, OrbitalElements,
};
pub use crate::error::OrbitError;
pub use crate::file_export::{
    export_motion_curve, load_catalog_file, load_sampler_config, to_catalog_file, CurveRow,
};
pub use crate::kepler::{
    eccentric_to_mean, eccentric_to_true, mean_to_eccentric, mean_to_true, true_to_eccentric,
    true_to_mean, wrap_pi_npi, InitialGuess, KeplerSolution, KeplerSolver,
};
pub use crate::math::{fmod, linspace, DVec2};
pub use crate::sampler::{SamplerConfig, TimeSampler};
pub use crate::units::{convert_au_to_meters, convert_meters_to_au};
