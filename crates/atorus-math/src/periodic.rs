//! Helpers for parameters that live on the unit circle `[0, 1)`.

/// Wrap a normalized parameter into `[0, 1)`.
pub fn wrap01(x: f64) -> f64 {
    x.rem_euclid(1.0)
}

/// Shortest signed difference between two normalized periodic parameters,
/// in `[-0.5, 0.5)`.
pub fn wrap_delta(delta: f64) -> f64 {
    delta - (delta + 0.5).floor()
}

/// The `i`-th of `n` equal steps across `[0, 1]`, with `i == n` landing exactly on `1`.
pub fn grid_param(i: usize, n: usize) -> f64 {
    i as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap01() {
        assert_abs_diff_eq!(wrap01(0.25), 0.25);
        assert_abs_diff_eq!(wrap01(1.25), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(wrap01(-0.25), 0.75);
        assert_abs_diff_eq!(wrap01(1.0), 0.0);
    }

    #[test]
    fn test_wrap_delta() {
        assert_abs_diff_eq!(wrap_delta(0.1), 0.1);
        assert_abs_diff_eq!(wrap_delta(-0.1), -0.1);
        assert_abs_diff_eq!(wrap_delta(-0.9), 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(wrap_delta(0.9), -0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(wrap_delta(0.5), -0.5);
    }

    #[test]
    fn test_grid_param_endpoints() {
        assert_eq!(grid_param(0, 24), 0.0);
        assert_eq!(grid_param(24, 24), 1.0);
        assert_abs_diff_eq!(grid_param(12, 24), 0.5);
    }
}
