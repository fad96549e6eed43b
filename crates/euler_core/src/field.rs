use crate::error::{Error, Result};
use crate::eval::SlopeField;
use crate::round::round_to;
use serde::{Deserialize, Serialize};

/// Slack for inclusive boundary checks in the sampling and tracing loops.
/// The loop variables accumulate floating error; without it a boundary row
/// of samples appears or vanishes depending on the domain.
pub const BOUNDARY_EPS: f64 = 1e-12;

/// Screen length of every field segment, in display units.
const SEGMENT_LEN: f64 = 2.0;

/// Rectangular sampling domain for a direction field.
///
/// The picture keeps the x axis at its natural range and rescales y so the
/// displayed y range equals the x range, keeping the diagram square whatever
/// the domain's true aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDomain {
    pub x0: f64,
    pub y0: f64,
    pub x_end: f64,
    pub y_end: f64,
    pub x_step: f64,
    pub y_step: f64,
}

impl FieldDomain {
    pub fn validate(&self) -> Result<()> {
        if self.x_step <= 0.0 || self.y_step <= 0.0 {
            return Err(Error::Validation(
                "direction field steps must be positive".into(),
            ));
        }
        if self.x_end < self.x0 || self.y_end < self.y0 {
            return Err(Error::Validation(
                "direction field range must be increasing".into(),
            ));
        }
        if self.y_end == self.y0 {
            return Err(Error::Validation(
                "direction field y range must be non-zero".into(),
            ));
        }
        Ok(())
    }

    pub fn x_range(&self) -> f64 {
        self.x_end - self.x0
    }

    pub fn y_range(&self) -> f64 {
        self.y_end - self.y0
    }

    /// Display-scale factor applied to y offsets and to slopes.
    pub fn y_scale(&self) -> f64 {
        self.x_range() / self.y_range()
    }

    /// Top of the displayed y axis.
    pub fn y_top(&self) -> f64 {
        self.y0 + self.x_range()
    }

    /// Maps a data-space y to its display coordinate.
    pub fn map_y(&self, y: f64) -> f64 {
        self.y0 + (y - self.y0) * self.y_scale()
    }
}

/// One field segment: a mapped grid point and the half-extent of a
/// constant-length segment oriented by the display-scaled slope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSample {
    pub center_x: f64,
    pub center_y: f64,
    pub half_dx: f64,
    pub half_dy: f64,
}

impl FieldSample {
    pub fn start(&self) -> (f64, f64) {
        (self.center_x - self.half_dx, self.center_y - self.half_dy)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.center_x + self.half_dx, self.center_y + self.half_dy)
    }
}

/// A sampled direction field, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionField {
    pub domain: FieldDomain,
    pub samples: Vec<FieldSample>,
}

/// Evaluates the slope on a regular grid over `domain`.
///
/// y iterates by `y_step / y_scale` so grid points stay evenly spaced in
/// data space even though the picture is drawn in display space. A slope `m`
/// is rescaled to `m * y_scale` before orienting its segment; drawing the
/// raw slope under the rescaled y axis would misrepresent the field's true
/// direction. Segments are normalized to a constant screen length whatever
/// the slope magnitude.
pub fn sample(field: &impl SlopeField, domain: &FieldDomain) -> Result<DirectionField> {
    domain.validate()?;
    let y_scale = domain.y_scale();
    let y_sample_step = domain.y_step / y_scale;

    let mut samples = Vec::new();
    let mut x = domain.x0;
    while x <= domain.x_end + BOUNDARY_EPS {
        let mut y = domain.y0;
        while y <= domain.y_end + BOUNDARY_EPS {
            let scaled = field.slope(x, y) * y_scale;
            let half_dx = SEGMENT_LEN / (1.0 + scaled * scaled).sqrt() / 2.0;
            samples.push(FieldSample {
                center_x: x,
                center_y: domain.map_y(y),
                half_dx,
                half_dy: scaled * half_dx,
            });
            y += y_sample_step;
        }
        x += domain.x_step;
    }
    Ok(DirectionField {
        domain: *domain,
        samples,
    })
}

/// Start point and step size for the solution-curve overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub step: f64,
    pub x0: f64,
    pub y0: f64,
}

impl CurveSpec {
    /// A curve starting at the domain origin.
    pub fn from_origin(domain: &FieldDomain, step: f64) -> Self {
        Self {
            step,
            x0: domain.x0,
            y0: domain.y0,
        }
    }

    /// Checked by the front end before sampling begins, so a bad curve step
    /// is rejected without walking the grid first.
    pub fn validate(&self) -> Result<()> {
        if self.step <= 0.0 {
            return Err(Error::Validation("curve step must be positive".into()));
        }
        Ok(())
    }
}

/// A display-mapped point on the approximate solution curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Traces an Euler walk through the domain, display-mapping each retained
/// point.
///
/// The walk re-rounds at every step exactly like the stepper and stops once
/// `x` passes `x_end` or `y` leaves the domain's y range (both within
/// [`BOUNDARY_EPS`]). Restarting with the same inputs reproduces the same
/// points.
pub fn trace_curve(
    field: &impl SlopeField,
    domain: &FieldDomain,
    spec: &CurveSpec,
    precision: u32,
) -> Result<Vec<CurvePoint>> {
    domain.validate()?;
    spec.validate()?;
    let step = round_to(spec.step, precision);
    if step <= 0.0 {
        return Err(Error::Validation("curve step must be positive".into()));
    }

    let mut x = round_to(spec.x0, precision);
    let mut y = round_to(spec.y0, precision);

    let mut points = Vec::new();
    while x <= domain.x_end + BOUNDARY_EPS {
        if y < domain.y0 - BOUNDARY_EPS || y > domain.y_end + BOUNDARY_EPS {
            break;
        }
        points.push(CurvePoint {
            x,
            y: domain.map_y(y),
        });
        let slope = round_to(field.slope(x, y), precision);
        let delta = round_to(slope * step, precision);
        y = round_to(y + delta, precision);
        x = round_to(x + step, precision);
    }
    Ok(points)
}
