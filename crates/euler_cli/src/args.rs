use euler_core::field::{CurveSpec, FieldDomain};
use thiserror::Error;

/// Argument-level failures, surfaced before any computation starts.
#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("too many or too few arguments to eulers method")]
    Count,
    #[error("unknown output flag; use -l, -c, -cr, -df, or -dfc")]
    UnknownFlag,
    #[error("could not parse `{value}` as {what}")]
    BadNumber { value: String, what: &'static str },
}

/// Output format for a stepper run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepFormat {
    Table,
    Latex,
    Csv,
    CsvSegments,
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Steps {
        expr: String,
        step: f64,
        x0: f64,
        y0: f64,
        end: f64,
        precision: u32,
        format: StepFormat,
    },
    Field {
        expr: String,
        domain: FieldDomain,
        precision: u32,
        curve: Option<CurveSpec>,
    },
}

fn number(args: &[String], index: usize, what: &'static str) -> Result<f64, ArgsError> {
    args[index].parse().map_err(|_| ArgsError::BadNumber {
        value: args[index].clone(),
        what,
    })
}

fn precision(args: &[String], index: usize) -> Result<u32, ArgsError> {
    args[index].parse().map_err(|_| ArgsError::BadNumber {
        value: args[index].clone(),
        what: "precision",
    })
}

fn steps_mode(args: &[String], format: StepFormat) -> Result<Mode, ArgsError> {
    Ok(Mode::Steps {
        expr: args[0].clone(),
        step: number(args, 1, "step size")?,
        x0: number(args, 2, "initial x")?,
        y0: number(args, 3, "initial y")?,
        end: number(args, 4, "final x")?,
        precision: precision(args, 5)?,
        format,
    })
}

fn field_domain(args: &[String]) -> Result<FieldDomain, ArgsError> {
    Ok(FieldDomain {
        x0: number(args, 1, "x start")?,
        y0: number(args, 2, "y start")?,
        x_end: number(args, 3, "x end")?,
        y_end: number(args, 4, "y end")?,
        x_step: number(args, 5, "x grid step")?,
        y_step: number(args, 6, "y grid step")?,
    })
}

/// Parses the user arguments (program name excluded) into a run mode.
///
/// The grammar is count-driven, with the mode flag in final position:
/// - `expr step x0 y0 end precision [-l|-c|-cr]`
/// - `expr x0 y0 xEnd yEnd xStep yStep precision -df`
/// - `expr x0 y0 xEnd yEnd xStep yStep curveStep [curveX0 curveY0] precision -dfc`
pub fn parse(args: &[String]) -> Result<Mode, ArgsError> {
    match (args.len(), args.last().map(String::as_str)) {
        (6, _) => steps_mode(args, StepFormat::Table),
        (7, _) => {
            let format = match args[6].as_str() {
                "-l" => StepFormat::Latex,
                "-c" => StepFormat::Csv,
                "-cr" => StepFormat::CsvSegments,
                _ => return Err(ArgsError::UnknownFlag),
            };
            steps_mode(args, format)
        }
        (9, Some("-df")) => Ok(Mode::Field {
            expr: args[0].clone(),
            domain: field_domain(args)?,
            precision: precision(args, 7)?,
            curve: None,
        }),
        (10, Some("-dfc")) => {
            let domain = field_domain(args)?;
            let curve = CurveSpec::from_origin(&domain, number(args, 7, "curve step")?);
            Ok(Mode::Field {
                expr: args[0].clone(),
                domain,
                precision: precision(args, 8)?,
                curve: Some(curve),
            })
        }
        (12, Some("-dfc")) => Ok(Mode::Field {
            expr: args[0].clone(),
            domain: field_domain(args)?,
            precision: precision(args, 10)?,
            curve: Some(CurveSpec {
                step: number(args, 7, "curve step")?,
                x0: number(args, 8, "curve x start")?,
                y0: number(args, 9, "curve y start")?,
            }),
        }),
        _ => Err(ArgsError::Count),
    }
}
