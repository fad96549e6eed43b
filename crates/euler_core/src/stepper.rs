use crate::error::{Error, Result};
use crate::eval::SlopeField;
use crate::round::round_to;
use serde::{Deserialize, Serialize};

/// One Euler iteration: the state at the start of the step together with the
/// slope and increment computed there. Every component is rounded to the
/// run's precision before storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub x: f64,
    pub y: f64,
    pub slope: f64,
    pub delta: f64,
}

/// Runs forward Euler from `(x0, y0)` until `x` passes `end`, producing one
/// record per iteration in increasing-x order.
///
/// `x0`, `y0` and `step` are rounded before the first iteration and every
/// intermediate value is re-rounded. The loop keeps the final point when `x`
/// lands exactly on `end`; because `x` advances post-rounding, the last
/// emitted `x` can exceed a mathematically expected stop by up to one
/// rounding unit.
pub fn run(
    field: &impl SlopeField,
    step: f64,
    x0: f64,
    y0: f64,
    end: f64,
    precision: u32,
) -> Result<Vec<StepRecord>> {
    let mut x = round_to(x0, precision);
    let mut y = round_to(y0, precision);
    let step = round_to(step, precision);
    if step <= 0.0 {
        return Err(Error::Validation(format!(
            "step must be positive after rounding to {precision} digits, got {step}"
        )));
    }

    let mut records = Vec::new();
    while x <= end {
        let slope = round_to(field.slope(x, y), precision);
        let delta = round_to(slope * step, precision);
        records.push(StepRecord { x, y, slope, delta });
        x = round_to(x + step, precision);
        y = round_to(y + delta, precision);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{run, StepRecord};
    use crate::error::Error;
    use crate::eval::ExprSlope;
    use crate::round::round_to;

    fn newton_cooling() -> ExprSlope {
        ExprSlope::parse("0.3*(300 - y)").expect("expression should parse")
    }

    #[test]
    fn matches_hand_computed_trajectory() {
        let records = run(&newton_cooling(), 0.1, 0.0, 0.0, 0.2, 2)
            .expect("stepper should run");
        assert_eq!(
            records,
            vec![
                StepRecord { x: 0.0, y: 0.0, slope: 90.0, delta: 9.0 },
                StepRecord { x: 0.1, y: 9.0, slope: 87.3, delta: 8.73 },
                StepRecord { x: 0.2, y: 17.73, slope: 84.68, delta: 8.47 },
            ]
        );
    }

    #[test]
    fn x_advances_by_exactly_the_rounded_step() {
        let records = run(&newton_cooling(), 0.1, 0.0, 50.0, 35.0, 6)
            .expect("stepper should run");
        for pair in records.windows(2) {
            assert_eq!(round_to(pair[1].x - pair[0].x, 6), 0.1);
        }
    }

    #[test]
    fn keeps_the_point_landing_on_end() {
        let records = run(&newton_cooling(), 0.5, 0.0, 0.0, 1.0, 1)
            .expect("stepper should run");
        let xs: Vec<f64> = records.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn is_deterministic() {
        let first = run(&newton_cooling(), 0.1, 0.0, 0.0, 10.0, 3)
            .expect("stepper should run");
        let second = run(&newton_cooling(), 0.1, 0.0, 0.0, 10.0, 3)
            .expect("stepper should run");
        assert_eq!(first, second);
    }

    #[test]
    fn yields_nothing_when_end_precedes_start() {
        let records = run(&newton_cooling(), 0.1, 5.0, 0.0, 4.0, 2)
            .expect("stepper should run");
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_non_positive_steps() {
        for step in [0.0, -0.1] {
            let err = run(&newton_cooling(), step, 0.0, 0.0, 1.0, 2)
                .expect_err("expected validation failure");
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[test]
    fn rejects_a_step_that_rounds_to_zero() {
        let err = run(&newton_cooling(), 0.001, 0.0, 0.0, 1.0, 2)
            .expect_err("expected validation failure");
        assert!(matches!(err, Error::Validation(_)));
    }
}
