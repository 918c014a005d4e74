/// Linearly re-maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The result is not clamped; values outside the input range extrapolate.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// `map_range` followed by a clamp to the output range, whichever way round it is.
pub fn map_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let mapped = map_range(value, in_min, in_max, out_min, out_max);
    let (lo, hi) = if out_min <= out_max {
        (out_min, out_max)
    } else {
        (out_max, out_min)
    };
    mapped.clamp(lo, hi)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fade curve over a duration in milliseconds, clamped to [0, 1].
pub fn fade(elapsed_ms: f64, duration_ms: f64, from: f32, to: f32) -> f32 {
    map_clamped(elapsed_ms as f32, 0.0, duration_ms as f32, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_extrapolates() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
    }

    #[test]
    fn map_clamped_handles_descending_output() {
        assert_eq!(map_clamped(-5.0, 0.0, 10.0, 1.0, 0.0), 1.0);
        assert_eq!(map_clamped(15.0, 0.0, 10.0, 1.0, 0.0), 0.0);
        assert_eq!(map_clamped(5.0, 0.0, 10.0, 1.0, 0.0), 0.5);
    }
}
