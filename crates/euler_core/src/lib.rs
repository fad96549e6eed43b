pub mod error;
pub mod eval;
pub mod field;
pub mod render;
pub mod round;
/// The `euler_core` crate provides the computational engine for the euler CLI.
/// It approximates first-order ODEs y' = f(x, y) with the forward Euler method
/// and samples direction fields over rectangular domains.
///
/// Key components:
/// - **Eval**: the `SlopeField` trait and the `ExprSlope` wrapper over the external
///   expression evaluator (`meval`), the only place an expression error can arise.
/// - **Stepper**: the fixed-step, repeatedly-rounded Euler loop.
/// - **Field**: grid sampling and display scaling for direction-field diagrams,
///   plus the optional solution-curve trace.
/// - **Render**: pure formatters for the table, CSV, LaTeX and TikZ outputs.
pub mod stepper;

pub use error::{Error, Result};
