use crate::constants::ASTRONOMICAL_UNIT;
use crate::error::{OrbitError, Result};

// a zero distance is rejected rather than passed through; callers
// treat it as missing input

pub fn convert_meters_to_au(meters: f64) -> Result<f64> {
    if meters == 0.0 || !meters.is_finite() {
        return Err(OrbitError::ZeroDistance);
    }
    Ok(meters / ASTRONOMICAL_UNIT)
}

pub fn convert_au_to_meters(au: f64) -> Result<f64> {
    if au == 0.0 || !au.is_finite() {
        return Err(OrbitError::ZeroDistance);
    }
    Ok(au * ASTRONOMICAL_UNIT)
}

pub fn au_to_meters(au: f64) -> f64 {
    au * ASTRONOMICAL_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    #[test]
    fn one_au() {
        assert_eq!(convert_au_to_meters(1.0).unwrap(), 149_597_870_700.0);
        assert_eq!(convert_meters_to_au(149_597_870_700.0).unwrap(), 1.0);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            convert_au_to_meters(0.0),
            Err(OrbitError::ZeroDistance)
        ));
        assert!(matches!(
            convert_meters_to_au(0.0),
            Err(OrbitError::ZeroDistance)
        ));
        assert!(convert_meters_to_au(-0.0).is_err());
    }

    #[test]
    fn round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-1E14..1E14);
            if x == 0.0 {
                continue;
            }
            let au = convert_meters_to_au(x).unwrap();
            assert_relative_eq!(convert_au_to_meters(au).unwrap(), x, max_relative = 1E-15);
        }

        for x in [1.0, -3.5, 57_910_000_000.0, 778_340_000_000.0] {
            let back = convert_au_to_meters(convert_meters_to_au(x).unwrap()).unwrap();
            assert_relative_eq!(back, x, max_relative = 1E-15);
        }
    }
}
