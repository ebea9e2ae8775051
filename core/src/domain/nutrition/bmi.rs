use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::entities::{Bmi, BmiStatus},
};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

/// Computes the body-mass index from weight in kilograms and height in
/// centimetres. The band is derived from the rounded score.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi, CoreError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CoreError::Invalid(
            "berat_badan must be a positive number".to_string(),
        ));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(CoreError::Invalid(
            "tinggi_badan must be a positive number".to_string(),
        ));
    }

    let height_m = height_cm / 100.0;
    let score = round_to_cents(weight_kg / (height_m * height_m));

    Ok(Bmi {
        score,
        status: classify_bmi(score),
    })
}

pub fn classify_bmi(score: f64) -> BmiStatus {
    if score < UNDERWEIGHT_BELOW {
        BmiStatus::Kurus
    } else if score < OVERWEIGHT_FROM {
        BmiStatus::Normal
    } else if score < OBESE_FROM {
        BmiStatus::Gemuk
    } else {
        BmiStatus::Obesitas
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi_normal_adult() {
        let bmi = calculate_bmi(62.0, 167.0).unwrap();
        assert_eq!(bmi.score, 22.23);
        assert_eq!(bmi.status, BmiStatus::Normal);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_bmi(18.49), BmiStatus::Kurus);
        assert_eq!(classify_bmi(18.5), BmiStatus::Normal);
        assert_eq!(classify_bmi(24.99), BmiStatus::Normal);
        assert_eq!(classify_bmi(25.0), BmiStatus::Gemuk);
        assert_eq!(classify_bmi(29.99), BmiStatus::Gemuk);
        assert_eq!(classify_bmi(30.0), BmiStatus::Obesitas);
    }

    #[test]
    fn test_exact_boundary_from_measurements() {
        let bmi = calculate_bmi(25.0, 100.0).unwrap();
        assert_eq!(bmi.score, 25.0);
        assert_eq!(bmi.status, BmiStatus::Gemuk);
    }

    #[test]
    fn test_underweight_and_obese() {
        assert_eq!(
            calculate_bmi(45.0, 175.0).unwrap().status,
            BmiStatus::Kurus
        );
        assert_eq!(
            calculate_bmi(110.0, 170.0).unwrap().status,
            BmiStatus::Obesitas
        );
    }

    #[test]
    fn test_rejects_non_positive_measurements() {
        assert!(matches!(
            calculate_bmi(70.0, 0.0),
            Err(CoreError::Invalid(_))
        ));
        assert!(matches!(
            calculate_bmi(-1.0, 170.0),
            Err(CoreError::Invalid(_))
        ));
        assert!(matches!(
            calculate_bmi(f64::NAN, 170.0),
            Err(CoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_serializes_with_imt_keys() {
        let bmi = calculate_bmi(62.0, 167.0).unwrap();
        let value = serde_json::to_value(bmi).unwrap();
        assert_eq!(value["imt_score"], 22.23);
        assert_eq!(value["imt_status"], "Normal");
    }
}
