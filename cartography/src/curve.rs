use crate::math::{fmod, DVec2};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use splines::{Interpolation, Key, Spline};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub elapsed_days: f64,
    /// share of the sampled orbit length covered so far, 0 to 100
    pub percent: f64,
}

impl TimeSample {
    pub const fn new(elapsed_days: f64, percent: f64) -> Self {
        TimeSample {
            elapsed_days,
            percent,
        }
    }
}

pub type PercentSpline = Spline<f64, f64>;

/// Arc-length parameterization of one orbit: how far along its path a body
/// is, as a percentage, after a given number of days since periapsis.
#[derive(Debug, Clone)]
pub struct MotionCurve {
    samples: Vec<TimeSample>,
    points: Vec<DVec2>,
    period_days: f64,
    spline: PercentSpline,
}

impl MotionCurve {
    pub(crate) fn new(samples: Vec<TimeSample>, points: Vec<DVec2>, period_days: f64) -> Self {
        let keys = samples
            .iter()
            .map(|s| Key::new(s.elapsed_days, s.percent, Interpolation::Linear))
            .collect();
        MotionCurve {
            samples,
            points,
            period_days,
            spline: Spline::from_vec(keys),
        }
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.samples
    }

    /// Orbit-plane positions in AU matching each sample
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn period_days(&self) -> f64 {
        self.period_days
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSample> + '_ {
        self.samples.iter()
    }

    /// Percent traveled after `elapsed_days`, linearly interpolated between
    /// samples. Times outside one period wrap around; exactly one period
    /// reads 100.
    pub fn percent_at(&self, elapsed_days: f64) -> f64 {
        let t = if (0.0..=self.period_days).contains(&elapsed_days) {
            elapsed_days
        } else {
            fmod(elapsed_days, self.period_days)
        };
        self.spline.clamped_sample(t).unwrap_or(0.0)
    }

    /// Percent traveled on `date` for a body that passed periapsis on
    /// `perihelion`. Dates before the passage count backwards a lap.
    pub fn percent_on(&self, perihelion: NaiveDate, date: NaiveDate) -> f64 {
        let days = (date - perihelion).num_days() as f64;
        self.percent_at(fmod(days, self.period_days))
    }

    /// One keyframe per whole day from 0 through the first day at or past
    /// the end of the period. The final keyframe always reads 100.
    pub fn daily_keyframes(&self) -> Vec<(u32, f64)> {
        let last = self.period_days.ceil() as u32;
        (0..=last)
            .map(|day| {
                let t = (day as f64).min(self.period_days);
                (day, self.percent_at(t))
            })
            .collect()
    }

    /// Percent covered during each whole day, the differences of
    /// `daily_keyframes`
    pub fn daily_increments(&self) -> Vec<f64> {
        self.daily_keyframes()
            .windows(2)
            .map(|w| w[1].1 - w[0].1)
            .collect()
    }
}
