/// Tick values at 1/2/5 x 10^k steps covering `[min, max]`.
///
/// Returns an empty list for a zero `count` or an empty/non-finite range.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = tick_step(min, max, count);
    if step <= 0.0 {
        return Vec::new();
    }

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Step chosen by `nice_ticks` for the same inputs, or `0.0` when none applies.
#[must_use]
pub fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    if count == 0 || !min.is_finite() || !max.is_finite() || min >= max {
        return 0.0;
    }

    let raw = (max - min) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Formats a tick value with just enough decimals for `step`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10() - 1e-9).ceil().max(0.0) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    // Avoid "-0.0" style labels around zero.
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        return text.trim_start_matches('-').to_owned();
    }
    text
}
