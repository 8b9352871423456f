use crate::constants::{DAYS_PER_YEAR, PI};
use crate::curve::{MotionCurve, TimeSample};
use crate::elements::OrbitalElements;
use crate::error::{OrbitError, Result};
use crate::kepler::{eccentric_to_true, InitialGuess, KeplerSolver};
use crate::math::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// time steps per orbital period; the curve has one more point
    pub samples: usize,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_guess: InitialGuess,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        let solver = KeplerSolver::default();
        SamplerConfig {
            samples: 80,
            max_iterations: solver.max_iterations,
            tolerance: solver.tolerance,
            initial_guess: solver.initial_guess,
        }
    }
}

impl SamplerConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn solver(&self) -> KeplerSolver {
        KeplerSolver::new(self.max_iterations, self.tolerance, self.initial_guess)
    }
}

/// Places a body along its orbit in time by sampling Kepler's equation
/// at evenly spaced instants over one period.
#[derive(Debug, Clone, Copy)]
pub struct TimeSampler {
    samples: usize,
    solver: KeplerSolver,
}

impl Default for TimeSampler {
    fn default() -> Self {
        TimeSampler {
            samples: 80,
            solver: KeplerSolver::default(),
        }
    }
}

impl TimeSampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        if config.samples == 0 {
            return Err(OrbitError::InvalidConfig {
                field: "samples",
                value: config.samples.to_string(),
            });
        }
        if config.max_iterations == 0 {
            return Err(OrbitError::InvalidConfig {
                field: "max_iterations",
                value: config.max_iterations.to_string(),
            });
        }
        if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
            return Err(OrbitError::InvalidConfig {
                field: "tolerance",
                value: config.tolerance.to_string(),
            });
        }
        Ok(TimeSampler {
            samples: config.samples,
            solver: config.solver(),
        })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sample instants in years since periapsis. The last one is exactly
    /// one period.
    fn instants(&self, period_years: f64) -> Vec<f64> {
        let n = self.samples;
        let dt = period_years / n as f64;
        (0..=n)
            .map(|i| if i == n { period_years } else { i as f64 * dt })
            .collect()
    }

    /// Orbit-plane positions in AU at each sample instant, periapsis along +x.
    pub fn positions(&self, elements: &OrbitalElements) -> Vec<DVec2> {
        let ecc = elements.ecc();
        let period_years = elements.orbital_period_days() / DAYS_PER_YEAR;
        let mean_motion = 2.0 * PI / period_years;

        let mut unconverged = 0;
        let points = self
            .instants(period_years)
            .into_iter()
            .map(|t| {
                let sol = self.solver.solve(ecc, mean_motion * t);
                if !sol.converged {
                    unconverged += 1;
                }
                let ta = eccentric_to_true(ecc, sol.eccentric_anomaly);
                elements.position_at(ta)
            })
            .collect();

        if unconverged > 0 {
            tracing::warn!(
                body = elements.name(),
                unconverged,
                "positions include unconverged kepler solutions"
            );
        }

        points
    }

    pub fn sample(&self, elements: &OrbitalElements) -> MotionCurve {
        let period_days = elements.orbital_period_days();
        let period_years = period_days / DAYS_PER_YEAR;
        let points = self.positions(elements);

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in points.windows(2) {
            total += w[0].distance(w[1]);
            cumulative.push(total);
        }

        let n = self.samples;
        let samples = self
            .instants(period_years)
            .into_iter()
            .zip(cumulative)
            .enumerate()
            .map(|(i, (t, d))| {
                if i == 0 {
                    return TimeSample::new(0.0, 0.0);
                }
                if i == n {
                    return TimeSample::new(period_days, 100.0);
                }
                let percent = if total > 0.0 { 100.0 * d / total } else { 0.0 };
                TimeSample::new(t * DAYS_PER_YEAR, percent)
            })
            .collect();

        tracing::debug!(
            body = elements.name(),
            samples = n,
            period_days,
            polyline_au = total,
            "sampled motion curve"
        );

        MotionCurve::new(samples, points, period_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SOLAR_MASS;
    use crate::elements::{Body, Orbit};
    use approx::assert_relative_eq;
    use assert_float_eq::assert_float_absolute_eq;
    use more_asserts::*;

    fn body() -> Body {
        Body::new(1E23, 1.0, 0.0)
    }

    fn elements(a: f64, e: f64) -> OrbitalElements {
        OrbitalElements::new("test", Orbit::planar(a, e), body(), SOLAR_MASS).unwrap()
    }

    fn assert_well_formed(curve: &MotionCurve, period: f64, n: usize) {
        let s = curve.samples();
        assert_eq!(s.len(), n + 1);
        assert_eq!(s[0], TimeSample::new(0.0, 0.0));
        assert_eq!(s[n].elapsed_days, period);
        assert_eq!(s[n].percent, 100.0);
        for w in s.windows(2) {
            assert_lt!(w[0].elapsed_days, w[1].elapsed_days);
            assert_le!(w[0].percent, w[1].percent);
        }
        for x in s {
            assert_ge!(x.percent, 0.0);
            assert_le!(x.percent, 100.0);
        }
    }

    #[test]
    fn mercury_curve() {
        let m = elements(0.387, 0.2056);
        let curve = TimeSampler::default().sample(&m);
        assert_well_formed(&curve, m.orbital_period_days(), 80);

        // mirror symmetry about the apse line puts aphelion at half the length
        assert_float_absolute_eq!(curve.samples()[40].percent, 50.0, 1E-9);
        assert_relative_eq!(
            curve.samples()[40].elapsed_days,
            m.orbital_period_days() / 2.0,
            max_relative = 1E-12
        );

        // faster near perihelion than aphelion
        let s = curve.samples();
        let near_peri = s[1].percent - s[0].percent;
        let near_apo = s[41].percent - s[40].percent;
        assert_gt!(near_peri, near_apo);
    }

    #[test]
    fn circular_orbit_has_constant_radius() {
        let c = elements(1.0, 0.0);
        let sampler = TimeSampler::default();
        for p in sampler.positions(&c) {
            assert_relative_eq!(p.length(), 1.0, max_relative = 1E-12);
        }

        let curve = sampler.sample(&c);
        assert_well_formed(&curve, c.orbital_period_days(), 80);
        for (i, s) in curve.samples().iter().enumerate() {
            assert_float_absolute_eq!(s.percent, i as f64 * 100.0 / 80.0, 1E-9);
        }
    }

    #[test]
    fn first_and_last_points_are_periapsis() {
        let o = elements(2.5, 0.6);
        let points = TimeSampler::default().positions(&o);
        let first = points[0];
        let last = *points.last().unwrap();
        assert_relative_eq!(first.x, o.perihelion_distance(), max_relative = 1E-12);
        assert_float_absolute_eq!(first.y, 0.0, 1E-12);
        assert_relative_eq!(last.x, first.x, max_relative = 1E-9);
        assert_float_absolute_eq!(last.y, 0.0, 1E-9);
    }

    #[test]
    fn well_formed_across_eccentricities() {
        for e in [0.0, 0.01, 0.25, 0.5, 0.75, 0.9, 0.97] {
            for n in [1, 2, 7, 80, 365] {
                let o = elements(17.8, e);
                let sampler = TimeSampler::new(SamplerConfig::default().with_samples(n)).unwrap();
                let curve = sampler.sample(&o);
                assert_well_formed(&curve, o.orbital_period_days(), n);
            }
        }
    }

    #[test]
    fn zero_guess_still_produces_a_curve() {
        let config = SamplerConfig {
            initial_guess: InitialGuess::Zero,
            ..SamplerConfig::default()
        };
        let o = elements(1.0, 0.5);
        let curve = TimeSampler::new(config).unwrap().sample(&o);
        let s = curve.samples();
        assert_eq!(s.len(), 81);
        assert_eq!(s[0].percent, 0.0);
        assert_eq!(s[80].percent, 100.0);
    }

    #[test]
    fn rejects_bad_config() {
        let bad = [
            SamplerConfig::default().with_samples(0),
            SamplerConfig {
                max_iterations: 0,
                ..SamplerConfig::default()
            },
            SamplerConfig {
                tolerance: 0.0,
                ..SamplerConfig::default()
            },
            SamplerConfig {
                tolerance: f64::NAN,
                ..SamplerConfig::default()
            },
        ];
        for config in bad {
            assert!(matches!(
                TimeSampler::new(config),
                Err(OrbitError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn config_from_yaml() {
        let config: SamplerConfig = serde_yaml::from_str("samples: 120\ninitial_guess: zero\n").unwrap();
        assert_eq!(config.samples, 120);
        assert_eq!(config.initial_guess, InitialGuess::Zero);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tolerance, 1E-10);
    }
}
