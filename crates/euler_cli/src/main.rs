mod args;

use anyhow::Result;
use args::{Mode, StepFormat};
use euler_core::eval::ExprSlope;
use euler_core::{field, render, stepper};

/// Executes one validate -> compute -> render pipeline and returns the
/// rendered output. Nothing reaches stdout until the whole run has
/// succeeded, so an error mid-computation never leaves partial output.
fn run(argv: &[String]) -> Result<String> {
    match args::parse(argv)? {
        Mode::Steps {
            expr,
            step,
            x0,
            y0,
            end,
            precision,
            format,
        } => {
            let slope = ExprSlope::parse(&expr)?;
            let steps = stepper::run(&slope, step, x0, y0, end, precision)?;
            Ok(match format {
                StepFormat::Table => render::table(&steps, precision),
                StepFormat::Latex => render::latex(&steps, precision),
                StepFormat::Csv => render::csv(&steps, precision),
                StepFormat::CsvSegments => render::csv_segments(&steps, precision),
            })
        }
        Mode::Field {
            expr,
            domain,
            precision,
            curve,
        } => {
            let slope = ExprSlope::parse(&expr)?;
            domain.validate()?;
            if let Some(spec) = &curve {
                spec.validate()?;
            }
            let sampled = field::sample(&slope, &domain)?;
            let trace = match curve {
                Some(spec) => Some(field::trace_curve(&slope, &domain, &spec, precision)?),
                None => None,
            };
            Ok(render::tikz(&sampled, trace.as_deref(), precision))
        }
    }
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let output = run(&argv)?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn argv(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn table_mode_renders_the_worked_example() {
        let output = run(&argv(&["0.3*(300 - y)", "0.1", "0", "0", "0.2", "2"]))
            .expect("run should succeed");
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains(" 2| 0.20 | 17.73 | 84.68 | 8.47 "));
    }

    #[test]
    fn segment_mode_renders_consecutive_pairs() {
        let output = run(&argv(&["0.3*(300 - y)", "0.1", "0", "0", "0.2", "2", "-cr"]))
            .expect("run should succeed");
        assert_eq!(
            output,
            "x0,y0,x1,y1\n0.00,0.00,0.10,9.00\n0.10,9.00,0.20,17.73\n"
        );
    }

    #[test]
    fn latex_mode_renders_a_document() {
        let output = run(&argv(&["0.3*(300 - y)", "0.1", "0", "0", "0.2", "2", "-l"]))
            .expect("run should succeed");
        assert!(output.starts_with("\\documentclass{article}"));
        assert!(output.ends_with("\\end{document}"));
    }

    #[test]
    fn field_mode_renders_a_tikz_picture() {
        let output = run(&argv(&["x - y", "0", "0", "4", "2", "1", "1", "2", "-df"]))
            .expect("run should succeed");
        assert!(output.contains("\\begin{tikzpicture}[scale=0.12]"));
        assert!(output.matches("\\draw[blue!70]").count() > 0);
        assert!(!output.contains("\\draw[red, thick]"));
    }

    #[test]
    fn field_mode_with_curve_overlays_the_polyline() {
        let output = run(&argv(&[
            "x - y", "0", "0", "4", "2", "1", "1", "0.5", "2", "-dfc",
        ]))
        .expect("run should succeed");
        assert!(output.contains("\\draw[red, thick] plot coordinates {"));
    }

    #[test]
    fn expression_errors_are_fatal() {
        let err = run(&argv(&["0.3*(300 - y", "0.1", "0", "0", "0.2", "2"]))
            .expect_err("expected expression failure");
        assert!(format!("{err}").contains("0.3*(300 - y"));
    }

    #[test]
    fn curve_step_is_validated_before_sampling() {
        let err = run(&argv(&["x - y", "0", "0", "4", "2", "1", "1", "0", "2", "-dfc"]))
            .expect_err("expected validation failure");
        assert!(format!("{err}").contains("curve step must be positive"));
    }

    #[test]
    fn field_preconditions_are_checked_before_sampling() {
        let err = run(&argv(&["x - y", "0", "0", "4", "0", "1", "1", "2", "-df"]))
            .expect_err("expected validation failure");
        assert!(format!("{err}").contains("y range must be non-zero"));
    }
}
