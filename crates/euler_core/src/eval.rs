use crate::error::{Error, Result};
use std::fmt;

/// The slope function y' = f(x, y) consumed by the stepper and the field
/// sampler. Implementations are pure and infallible; anything that can go
/// wrong with a user-supplied formula goes wrong at construction time.
pub trait SlopeField {
    fn slope(&self, x: f64, y: f64) -> f64;
}

/// A slope function compiled from user-supplied source text by the external
/// expression evaluator.
///
/// `parse` compiles the text once and binds `x` and `y` as the only free
/// variables, failing with [`Error::Expression`] on malformed input or
/// unknown identifiers. The evaluator does not support implicit
/// multiplication: `0.3x` fails where `0.3*x` works.
pub struct ExprSlope {
    src: String,
    f: Box<dyn Fn(f64, f64) -> f64>,
}

impl ExprSlope {
    pub fn parse(src: &str) -> Result<Self> {
        let expression_error = |source| Error::Expression {
            expr: src.to_string(),
            source,
        };
        let expr: meval::Expr = src.parse().map_err(expression_error)?;
        let f = expr.bind2("x", "y").map_err(expression_error)?;
        Ok(Self {
            src: src.to_string(),
            f: Box::new(f),
        })
    }

    /// The expression text this slope was compiled from.
    pub fn source(&self) -> &str {
        &self.src
    }
}

impl SlopeField for ExprSlope {
    fn slope(&self, x: f64, y: f64) -> f64 {
        (self.f)(x, y)
    }
}

// Manual impl: the bound closure has no Debug.
impl fmt::Debug for ExprSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprSlope")
            .field("src", &self.src)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExprSlope, SlopeField};
    use crate::error::Error;

    #[test]
    fn binds_x_and_y() {
        let f = ExprSlope::parse("0.3*(300 - y)").expect("expression should parse");
        assert!((f.slope(0.0, 0.0) - 90.0).abs() < 1e-12);
        assert!(f.slope(5.0, 300.0).abs() < 1e-12);
    }

    #[test]
    fn provides_standard_functions() {
        let f = ExprSlope::parse("sin(x) + exp(y)").expect("expression should parse");
        assert!((f.slope(0.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_expressions() {
        let err = ExprSlope::parse("0.3*(300 - y").expect_err("expected parse failure");
        assert!(matches!(err, Error::Expression { .. }));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = ExprSlope::parse("x + z").expect_err("expected bind failure");
        assert!(matches!(err, Error::Expression { .. }));
    }

    #[test]
    fn keeps_the_source_text() {
        let f = ExprSlope::parse("x*y").expect("expression should parse");
        assert_eq!(f.source(), "x*y");
    }

    #[test]
    fn debug_output_names_the_source() {
        let f = ExprSlope::parse("x*y").expect("expression should parse");
        assert!(format!("{f:?}").contains("x*y"));
    }
}
