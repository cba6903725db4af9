pub mod bs;

/// Helpers shared by the calculator and the heatmap
pub mod utils {
    /// Round to `places` decimals, half away from zero.
    pub fn round_to(value: f64, places: i32) -> f64 {
        let scale = 10f64.powi(places);
        (value * scale).round() / scale
    }

    /// Evenly stepped values from `min` up to and including `max`.
    ///
    /// Each point is computed as `min + i * step` so that rounding error does
    /// not accumulate along the axis, then rounded to two decimals.
    pub fn stepped_range(min: f64, max: f64, step: f64) -> Vec<f64> {
        let mut values = Vec::new();
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || step <= 0.0 || min > max {
            return values;
        }
        let limit = max + step * 1e-9;
        let mut i = 0usize;
        loop {
            let v = min + step * i as f64;
            if v > limit {
                break;
            }
            values.push(round_to(v, 2));
            i += 1;
        }
        values
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn stepped_range_includes_both_ends() {
            assert_eq!(
                stepped_range(0.1, 0.5, 0.05),
                vec![0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5]
            );
            assert_eq!(stepped_range(50.0, 150.0, 10.0).len(), 11);
        }

        #[test]
        fn stepped_range_degenerate_inputs() {
            assert_eq!(stepped_range(1.0, 1.0, 0.5), vec![1.0]);
            assert!(stepped_range(2.0, 1.0, 0.5).is_empty());
            assert!(stepped_range(0.0, 1.0, 0.0).is_empty());
            assert!(stepped_range(0.0, 1.0, f64::NAN).is_empty());
        }
    }
}
