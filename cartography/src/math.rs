pub use glam::f64::DVec2;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// n evenly spaced values from a to b. The endpoints are exact.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![a];
    }
    if n == 2 {
        return vec![a, b];
    }
    (0..n)
        .map(|i| {
            if i == n - 1 {
                return b;
            }
            let t = i as f64 / (n - 1) as f64;
            lerp(a, b, t)
        })
        .collect()
}

/// floored modulo; the result has the sign of n
pub fn fmod(a: f64, n: f64) -> f64 {
    a - n * (a / n).floor()
}
