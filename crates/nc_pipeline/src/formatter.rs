use crate::classifier::RawPrediction;
use nc_core::{Label, Verdict};

/// Turns a raw prediction into the outbound record: label from the class,
/// confidence = P(Real) as a percentage rounded to two decimals.
pub fn verdict(prediction: &RawPrediction) -> Verdict {
    Verdict {
        label: Label::from_class(prediction.class),
        confidence_real_percent: round2(prediction.probabilities[1] * 100.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_prediction_formats_real_confidence() {
        let v = verdict(&RawPrediction {
            class: 0,
            probabilities: [0.91, 0.09],
        });
        assert_eq!(v.label, Label::Fake);
        assert_eq!(v.confidence_real_percent, 9.0);
    }

    #[test]
    fn real_prediction_formats_real_confidence() {
        let v = verdict(&RawPrediction {
            class: 1,
            probabilities: [0.12, 0.88],
        });
        assert_eq!(v.label, Label::Real);
        assert_eq!(v.confidence_real_percent, 88.0);
    }

    #[test]
    fn confidence_rounds_to_two_decimals() {
        let v = verdict(&RawPrediction {
            class: 1,
            probabilities: [0.123456, 0.876544],
        });
        assert_eq!(v.confidence_real_percent, 87.65);

        let v = verdict(&RawPrediction {
            class: 0,
            probabilities: [0.999995, 0.000005],
        });
        assert_eq!(v.confidence_real_percent, 0.0);
    }

    #[test]
    fn confidence_stays_within_percent_range() {
        for p in [0.0, 0.004, 0.5, 0.996, 1.0] {
            let v = verdict(&RawPrediction {
                class: usize::from(p >= 0.5),
                probabilities: [1.0 - p, p],
            });
            assert!(v.confidence_real_percent >= 0.0);
            assert!(v.confidence_real_percent <= 100.0);
        }
    }
}
