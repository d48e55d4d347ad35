/// Parse a cohort fraction, accepting `0 <= f < 1`
pub fn parse_fraction(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !(0.0..1.0).contains(&value) {
        return Err(format!("{} is not in the range 0 <= f < 1", value));
    }
    Ok(value)
}

/// Parse a rating threshold, rejecting NaN and infinities
pub fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite rating", value));
    }
    Ok(value)
}
