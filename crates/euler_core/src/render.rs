use crate::field::{CurvePoint, DirectionField};
use crate::stepper::StepRecord;

/// Fixed-point cell in the tool's padded representation: one space, the
/// value at `precision` digits, one space. The padding is part of the output
/// contract for the table, CSV and LaTeX formats.
fn cell(value: f64, precision: u32) -> String {
    format!(" {value:.prec$} ", prec = precision as usize)
}

/// Per-column maximum padded-cell width across a run; drives the
/// right-alignment of the text table. Derived state, recomputed per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub x: usize,
    pub y: usize,
    pub slope: usize,
    pub delta: usize,
}

impl ColumnWidths {
    pub fn measure(steps: &[StepRecord], precision: u32) -> Self {
        let mut widths = Self::default();
        for record in steps {
            widths.x = widths.x.max(cell(record.x, precision).len());
            widths.y = widths.y.max(cell(record.y, precision).len());
            widths.slope = widths.slope.max(cell(record.slope, precision).len());
            widths.delta = widths.delta.max(cell(record.delta, precision).len());
        }
        widths
    }
}

/// Plain aligned table: header `n | x | y | y' | Δy`, one row per record,
/// index starting at 0, every column right-aligned to its widest cell. The
/// index column is sized by the row count.
pub fn table(steps: &[StepRecord], precision: u32) -> String {
    let widths = ColumnWidths::measure(steps, precision);
    let n_width = steps.len().to_string().len().max("n ".len());
    let mut out = String::new();
    out.push_str(&format!(
        "{:>nw$}|{:>xw$}|{:>yw$}|{:>sw$}|{:>dw$}\n",
        "n ",
        "x ",
        "y ",
        "y' ",
        "Δy ",
        nw = n_width,
        xw = widths.x,
        yw = widths.y,
        sw = widths.slope,
        dw = widths.delta,
    ));
    for (n, record) in steps.iter().enumerate() {
        out.push_str(&format!(
            "{:>nw$}|{:>xw$}|{:>yw$}|{:>sw$}|{:>dw$}\n",
            n,
            cell(record.x, precision),
            cell(record.y, precision),
            cell(record.slope, precision),
            cell(record.delta, precision),
            nw = n_width,
            xw = widths.x,
            yw = widths.y,
            sw = widths.slope,
            dw = widths.delta,
        ));
    }
    out
}

/// CSV with the padded cell representation preserved in each field.
pub fn csv(steps: &[StepRecord], precision: u32) -> String {
    let mut out = String::from("x,y,y',Δy\n");
    for record in steps {
        out.push_str(&format!(
            "{},{},{},{}\n",
            cell(record.x, precision),
            cell(record.y, precision),
            cell(record.slope, precision),
            cell(record.delta, precision),
        ));
    }
    out
}

/// CSV line segments: one `x0,y0,x1,y1` row per consecutive pair of records,
/// unpadded, exactly `precision` fractional digits per value.
pub fn csv_segments(steps: &[StepRecord], precision: u32) -> String {
    let prec = precision as usize;
    let mut out = String::from("x0,y0,x1,y1\n");
    for pair in steps.windows(2) {
        out.push_str(&format!(
            "{:.prec$},{:.prec$},{:.prec$},{:.prec$}\n",
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            prec = prec,
        ));
    }
    out
}

/// A complete compilable LaTeX document holding the run as a `longtable`.
pub fn latex(steps: &[StepRecord], precision: u32) -> String {
    let mut out = String::from(
        "\\documentclass{article}\n\\usepackage[margin=1in]{geometry}\n\\usepackage{longtable}\n\\begin{document}\n",
    );
    out.push_str("\\begin{center} \n  \\begin{longtable}{|c|c|c|c|c|}\n    \\hline\n");
    out.push_str("    n & x & y & y' & $\\Delta$y \\\\\n    \\hline\n");
    for (n, record) in steps.iter().enumerate() {
        out.push_str(&format!(
            "   {} & {} & {} & {} & {}\\\\\n    \\hline\n",
            n,
            cell(record.x, precision),
            cell(record.y, precision),
            cell(record.slope, precision),
            cell(record.delta, precision),
        ));
    }
    out.push_str("  \\end{longtable} \n\\end{center}\n\\end{document}");
    out
}

/// TikZ picture for a sampled direction field, wrapped in centering and
/// resize directives: axis arrows, one `\draw` per sample, and the optional
/// solution-curve polyline.
///
/// When a curve was requested the `\draw[red, thick]` prefix is emitted even
/// if the trace produced no points; the `plot coordinates` body appears only
/// once there is something to plot.
pub fn tikz(field: &DirectionField, curve: Option<&[CurvePoint]>, precision: u32) -> String {
    let prec = precision as usize;
    let domain = &field.domain;
    let mut out = String::from("\\begin{center}\n\\resizebox{\\linewidth}{!}{%\n");
    out.push_str(&format!(
        "\\begin{{tikzpicture}}[scale=0.12]\n  \\draw[->] ({:.prec$},{:.prec$}) -- ({:.prec$},{:.prec$}) node[right] {{$t$}};\n  \\draw[->] ({:.prec$},{:.prec$}) -- ({:.prec$},{:.prec$}) node[above] {{$y$}};\n",
        domain.x0,
        domain.y0,
        domain.x_end,
        domain.y0,
        domain.x0,
        domain.y0,
        domain.x0,
        domain.y_top(),
        prec = prec,
    ));
    for sample in &field.samples {
        let (x_left, y_left) = sample.start();
        let (x_right, y_right) = sample.end();
        out.push_str(&format!(
            "  \\draw[blue!70] ({:.prec$},{:.prec$}) -- ({:.prec$},{:.prec$});\n",
            x_left,
            y_left,
            x_right,
            y_right,
            prec = prec,
        ));
    }
    if let Some(points) = curve {
        out.push_str("  \\draw[red, thick] ");
        if !points.is_empty() {
            out.push_str("plot coordinates {");
            for point in points {
                out.push_str(&format!(
                    " ({:.prec$},{:.prec$})",
                    point.x,
                    point.y,
                    prec = prec,
                ));
            }
            out.push_str(" };\n");
        }
    }
    out.push_str("\\end{tikzpicture}%\n}\n\\end{center}\n");
    out
}
