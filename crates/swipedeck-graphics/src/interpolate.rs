//! Piecewise-linear mapping between two ranges.

/// Maps `value` from `input` breakpoints to `output` breakpoints.
///
/// `input` must be ascending and the same length as `output`. Values outside
/// the input domain clamp to the first or last output. An empty range maps to
/// `0.0` and a single breakpoint maps everything to its output.
pub fn interpolate(value: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert_eq!(input.len(), output.len(), "range lengths differ");
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if len == 1 || value <= input[0] {
        return output[0];
    }
    if value >= input[len - 1] {
        return output[len - 1];
    }

    // First breakpoint strictly above the value; the segment ends there.
    let end = input[..len]
        .iter()
        .position(|&edge| edge > value)
        .unwrap_or(len - 1);
    let start = end - 1;
    let span = input[end] - input[start];
    if span <= 0.0 {
        return output[end];
    }
    let fraction = (value - input[start]) / span;
    output[start] + (output[end] - output[start]) * fraction
}

#[cfg(test)]
#[path = "tests/interpolate_tests.rs"]
mod tests;
