/// Decimal places kept for aggregated leaf quantities
pub const CLOSURE_DECIMALS: i32 = 3;

/// Decimal places kept for similarity proportions
pub const PROPORTION_DECIMALS: i32 = 2;

/// Rounds `value` to `decimals` places, half-to-even on the scaled value.
///
/// Scaling, `round_ties_even`, then unscaling reproduces the reference
/// outputs bit-for-bit, including cases such as `0.0005 -> 0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
