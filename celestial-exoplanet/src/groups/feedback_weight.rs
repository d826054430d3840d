//! One gradient-descent step on a binary cross-entropy loss.
//!
//! The human label `h` is 1 for positive feedback and 0 otherwise. The model
//! prediction is clamped to [`PREDICTION_BOUNDS`] before it reaches a
//! logarithm, and the updated weight is clamped to [`WEIGHT_BOUNDS`], so this
//! group has no failure mode for finite inputs.
//!
//! ```text
//! L  = -h ln p - (1 - h) ln(1 - p)
//! ∂L = -h / p + (1 - h) / (1 - p)
//! w' = clamp(w - η ∂L, 0.1, 2.0)
//! ```

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::math::ln;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PREDICTION_BOUNDS: (f64, f64) = (0.001, 0.999);

pub const WEIGHT_BOUNDS: (f64, f64) = (0.1, 2.0);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FeedbackWeightOutput {
    pub loss: f64,
    /// ∂L/∂w at the clamped prediction.
    pub gradient: f64,
    /// `new_weight - current_weight`, after clamping.
    pub weight_change: f64,
    pub new_weight: f64,
}

/// Never returns `Err`; the signature matches the other groups.
pub fn compute(
    inputs: &InputRecord,
    _constants: &ConstantsTable,
) -> AstroResult<FeedbackWeightOutput> {
    let h = if inputs.human_feedback { 1.0 } else { 0.0 };
    let p = inputs
        .prediction
        .clamp(PREDICTION_BOUNDS.0, PREDICTION_BOUNDS.1);

    let loss = -h * ln(p) - (1.0 - h) * ln(1.0 - p);
    let gradient = -h / p + (1.0 - h) / (1.0 - p);
    let new_weight = (inputs.current_weight - inputs.learning_rate * gradient)
        .clamp(WEIGHT_BOUNDS.0, WEIGHT_BOUNDS.1);

    Ok(FeedbackWeightOutput {
        loss,
        gradient,
        weight_change: new_weight - inputs.current_weight,
        new_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::assert_abs_eq;

    fn inputs(
        prediction: f64,
        human_feedback: bool,
        current_weight: f64,
        learning_rate: f64,
    ) -> InputRecord {
        InputRecord {
            prediction,
            human_feedback,
            current_weight,
            learning_rate,
            ..InputRecord::sample()
        }
    }

    fn run(record: InputRecord) -> FeedbackWeightOutput {
        compute(&record, &ConstantsTable::standard()).unwrap()
    }

    #[test]
    fn coin_flip_with_positive_feedback() {
        let out = run(inputs(0.5, true, 1.0, 0.1));
        assert_abs_eq(out.loss, core::f64::consts::LN_2, 1e-12, "loss");
        assert_eq!(out.gradient, -2.0);
        assert_abs_eq(out.new_weight, 1.2, 1e-12, "weight");
        assert_abs_eq(out.weight_change, 0.2, 1e-12, "change");
    }

    #[test]
    fn negative_feedback_pushes_weight_down() {
        let out = run(inputs(0.5, false, 1.0, 0.1));
        assert_eq!(out.gradient, 2.0);
        assert_abs_eq(out.new_weight, 0.8, 1e-12, "weight");
        assert!(out.weight_change < 0.0);
    }

    #[test]
    fn prediction_is_clamped_before_the_logarithm() {
        let certain_wrong = run(inputs(0.0, true, 1.0, 0.0));
        assert!(certain_wrong.loss.is_finite());
        assert_abs_eq(certain_wrong.loss, -(0.001_f64.ln()), 1e-12, "loss");

        let over = run(inputs(1.5, false, 1.0, 0.0));
        assert_abs_eq(over.loss, -((1.0 - 0.999_f64).ln()), 1e-9, "loss");
    }

    #[test]
    fn weight_is_clamped_to_bounds() {
        assert_eq!(run(inputs(0.001, true, 1.0, 10.0)).new_weight, 2.0);
        assert_eq!(run(inputs(0.999, false, 1.0, 10.0)).new_weight, 0.1);
        assert_eq!(run(inputs(0.5, true, 1.0, f64::MAX)).new_weight, 2.0);
        assert_eq!(run(inputs(0.5, true, 1.0, -f64::MAX)).new_weight, 0.1);
    }

    #[test]
    fn out_of_range_current_weight_is_pulled_back_in() {
        let out = run(inputs(0.5, true, 50.0, 0.0));
        assert_eq!(out.new_weight, 2.0);
        assert_eq!(out.weight_change, -48.0);
    }
}
