/// Builds an inclusive, evenly spaced sample axis from `start` to `end`
/// with `samples` points. Both endpoints are included, so the spacing is
/// `(end - start) / (samples - 1)`.
pub fn time_axis(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            (0..samples).map(|i| start + i as f64 * step).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn axis_includes_both_endpoints() {
        let axis = time_axis(0.0, 2.0 * PI, 1000);
        assert_eq!(axis.len(), 1000);
        assert_eq!(axis[0], 0.0);
        assert!((axis[999] - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn axis_is_evenly_spaced_and_increasing() {
        let axis = time_axis(0.0, 1.0, 11);
        let step = 0.1;
        for (i, t) in axis.iter().enumerate() {
            assert!((t - i as f64 * step).abs() < 1e-12);
        }
        for pair in axis.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn degenerate_sample_counts() {
        assert!(time_axis(0.0, 1.0, 0).is_empty());
        assert_eq!(time_axis(3.0, 5.0, 1), vec![3.0]);
    }
}
