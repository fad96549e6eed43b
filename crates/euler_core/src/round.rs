/// Rounds `value` to `precision` decimal digits, half away from zero.
///
/// The stepping loops apply this to every intermediate value rather than only
/// at display time, so the emitted trajectory matches what a user repeating
/// the arithmetic by hand at fixed precision would write down. Rounding only
/// for display silently diverges on inputs where rounding changes the
/// trajectory.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}
