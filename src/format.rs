//! Result rendering.
//!
//! Numbers are printed the way the calculator UI has always shown them:
//! shortest round-trip digits, positional notation for decimal exponents in
//! `(-6, 21]`, `1e+21` style exponent notation outside that range, and the
//! literal strings `Infinity`, `-Infinity` and `NaN` for non-finite values.

use crate::options::Precision;

/// Largest decimal exponent still printed positionally.
const MAX_POSITIONAL_EXP: i32 = 21;
/// Smallest decimal exponent (exclusive) still printed positionally.
const MIN_POSITIONAL_EXP: i32 = -6;

/// Rounds to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds `value` to `digits` decimal places using binary floating point.
///
/// Values that would overflow once scaled are returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / factor
}

/// Canonical string form of a number.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if v == 0.0 {
        return "0".into();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let sci = format!("{:e}", v.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return v.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if v < 0.0 {
        out.push('-');
    }
    if k <= n && n <= MAX_POSITIONAL_EXP {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= MAX_POSITIONAL_EXP {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_POSITIONAL_EXP < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n - 1 < 0 { '-' } else { '+' });
        out.push_str(&(n - 1).abs().to_string());
    }
    out
}

/// Applies `precision` to an evaluated value and renders it.
pub fn render(value: f64, precision: Precision) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    match precision.digits() {
        None => format_number(value),
        Some(d) => format_number(round_to(value, d as u32)),
    }
}
