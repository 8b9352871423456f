use crate::constants::PI;
use serde::{Deserialize, Serialize};

// https://en.wikipedia.org/wiki/Kepler%27s_equation

pub fn wrap_pi_npi(x: f64) -> f64 {
    f64::atan2(x.sin(), x.cos())
}

pub fn eccentric_to_mean(ecc: f64, eccentric_anomaly: f64) -> f64 {
    eccentric_anomaly - ecc * eccentric_anomaly.sin()
}

pub fn eccentric_to_true(ecc: f64, eccentric_anomaly: f64) -> f64 {
    let k = ((1.0 + ecc) / (1.0 - ecc)).sqrt();
    2.0 * (k * (0.5 * eccentric_anomaly).tan()).atan()
}

pub fn true_to_eccentric(ecc: f64, true_anomaly: f64) -> f64 {
    let k = ((1.0 - ecc) / (1.0 + ecc)).sqrt();
    2.0 * (k * (0.5 * true_anomaly).tan()).atan()
}

pub fn true_to_mean(ecc: f64, true_anomaly: f64) -> f64 {
    eccentric_to_mean(ecc, true_to_eccentric(ecc, true_anomaly))
}

pub fn mean_to_eccentric(ecc: f64, mean_anomaly: f64) -> f64 {
    KeplerSolver::default()
        .solve(ecc, mean_anomaly)
        .eccentric_anomaly
}

pub fn mean_to_true(ecc: f64, mean_anomaly: f64) -> f64 {
    eccentric_to_true(ecc, mean_to_eccentric(ecc, mean_anomaly))
}

/// Where Newton-Raphson starts its search for E.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialGuess {
    /// E0 = 0. Diverges for some high-eccentricity or near-apoapsis inputs.
    Zero,
    /// E0 = M
    MeanAnomaly,
    /// E0 = M below e = 0.8, otherwise pi on the side of M
    #[default]
    Adaptive,
}

impl InitialGuess {
    fn seed(&self, ecc: f64, mean_anomaly: f64) -> f64 {
        match self {
            InitialGuess::Zero => 0.0,
            InitialGuess::MeanAnomaly => mean_anomaly,
            InitialGuess::Adaptive => {
                if ecc < 0.8 || mean_anomaly == 0.0 {
                    mean_anomaly
                } else {
                    PI.copysign(mean_anomaly)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: f64,
    pub iterations: usize,
    /// |E - e sin E - M| at the returned E
    pub residual: f64,
    pub converged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerSolver {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_guess: InitialGuess,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            max_iterations: 1000,
            tolerance: 1E-10,
            initial_guess: InitialGuess::Adaptive,
        }
    }
}

impl KeplerSolver {
    pub fn new(max_iterations: usize, tolerance: f64, initial_guess: InitialGuess) -> Self {
        KeplerSolver {
            max_iterations,
            tolerance,
            initial_guess,
        }
    }

    pub fn with_initial_guess(mut self, initial_guess: InitialGuess) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Solves M = E - e sin E for E with Newton-Raphson.
    ///
    /// M is reduced to (-pi, pi] before iterating and the whole turns
    /// are added back to the result, so E tracks M monotonically over
    /// any number of revolutions. A solve that runs out of iterations
    /// still returns its last estimate; it is logged and flagged.
    pub fn solve(&self, ecc: f64, mean_anomaly: f64) -> KeplerSolution {
        let reduced = wrap_pi_npi(mean_anomaly);
        let turns = mean_anomaly - reduced;

        let mut e = self.initial_guess.seed(ecc, reduced);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;
            let step = (e - ecc * e.sin() - reduced) / (1.0 - ecc * e.cos());
            let next = e - step;
            if !next.is_finite() {
                break;
            }
            e = next;
            if step.abs() < self.tolerance {
                converged = true;
                break;
            }
        }

        let residual = (e - ecc * e.sin() - reduced).abs();

        if !converged {
            tracing::warn!(
                ecc,
                mean_anomaly,
                iterations,
                residual,
                "kepler solver did not converge"
            );
        }

        KeplerSolution {
            eccentric_anomaly: e + turns,
            iterations,
            residual,
            converged,
        }
    }
}
