//! Derived Metrics Module
//! Element-wise efficiency ratios computed from raw counters.

use crate::error::ChartError;

/// CPU cycles per byte transferred, element-wise.
///
/// A category with no bytes transferred yields 0 instead of a division error.
pub fn cycles_per_byte(cycles: &[f64], bytes: &[f64]) -> Result<Vec<f64>, ChartError> {
    if cycles.len() != bytes.len() {
        return Err(ChartError::InvalidInput(format!(
            "cycles has {} samples but bytes has {}",
            cycles.len(),
            bytes.len()
        )));
    }

    Ok(cycles
        .iter()
        .zip(bytes)
        .map(|(&c, &b)| if b > 0.0 { c / b } else { 0.0 })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn divides_element_wise() {
        let cpb = cycles_per_byte(&[5_000_000.0, 9.0], &[1_500_000.0, 3.0]).unwrap();
        assert_relative_eq!(cpb[0], 3.333_333, epsilon = 1e-6);
        assert_relative_eq!(cpb[1], 3.0);
    }

    #[test]
    fn zero_bytes_yields_zero() {
        let cpb = cycles_per_byte(&[100.0, 200.0], &[0.0, 50.0]).unwrap();
        assert_eq!(cpb, vec![0.0, 4.0]);
    }

    #[test]
    fn mismatched_lengths_are_invalid_input() {
        let err = cycles_per_byte(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn empty_inputs_give_empty_output() {
        assert!(cycles_per_byte(&[], &[]).unwrap().is_empty());
    }
}
