//! Elementwise arithmetic over scalar sequences.
//!
//! Length mismatches are deliberately not an error: every operation works
//! over the overlapping prefix of its operands and leaves the rest of the
//! longer operand untouched.

/// Adds `rhs` into `lhs` elementwise, mutating `lhs` in place.
///
/// Only the first `min(lhs.len(), rhs.len())` positions are touched.
pub fn sum_assign(lhs: &mut [f64], rhs: &[f64]) {
    for (l, r) in lhs.iter_mut().zip(rhs) {
        *l += r;
    }
}

/// Returns `lhs - rhs` elementwise as a new vector, leaving both operands
/// unchanged.
///
/// The result has `lhs`'s length; positions past the end of `rhs` are
/// copied through as-is.
pub fn subtract(lhs: &[f64], rhs: &[f64]) -> Vec<f64> {
    let mut result = lhs.to_vec();
    for (l, r) in result.iter_mut().zip(rhs) {
        *l -= r;
    }
    result
}

/// Multiplies every element of the sequence together.
///
/// An empty sequence yields the multiplicative identity.
pub fn product(values: &[f64]) -> f64 {
    values.iter().product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_assign_equal_lengths() {
        let mut lhs = vec![1.0, 2.0, 3.0];
        sum_assign(&mut lhs, &[4.0, 5.0, 6.0]);
        assert_eq!(lhs, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn sum_assign_shorter_rhs_touches_only_the_prefix() {
        let mut lhs = vec![1.0, 2.0, 3.0];
        sum_assign(&mut lhs, &[1.0, 2.0]);
        assert_eq!(lhs, vec![2.0, 4.0, 3.0]);
    }

    #[test]
    fn sum_assign_longer_rhs_ignores_the_excess() {
        let mut lhs = vec![1.0, 2.0];
        sum_assign(&mut lhs, &[1.0, 1.0, 1.0]);
        assert_eq!(lhs, vec![2.0, 3.0]);
    }

    #[test]
    fn sum_assign_empty_operands() {
        let mut lhs: Vec<f64> = Vec::new();
        sum_assign(&mut lhs, &[]);
        assert!(lhs.is_empty());
    }

    #[test]
    fn subtract_equal_lengths() {
        let result = subtract(&[5.0, 7.0, 9.0], &[1.0, 2.0, 3.0]);
        assert_eq!(result, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn subtract_shorter_rhs_copies_the_tail() {
        let result = subtract(&[5.0, 6.0, 7.0], &[1.0, 2.0]);
        assert_eq!(result, vec![4.0, 4.0, 7.0]);
    }

    #[test]
    fn subtract_leaves_operands_unchanged() {
        let lhs = vec![1.0, 2.0];
        let rhs = vec![0.5, 0.5];
        let _ = subtract(&lhs, &rhs);
        assert_eq!(lhs, vec![1.0, 2.0]);
        assert_eq!(rhs, vec![0.5, 0.5]);
    }

    #[test]
    fn product_multiplies_all_elements() {
        assert_eq!(product(&[2.0, 3.0, 4.0]), 24.0);
        assert_eq!(product(&[2.0, -3.0, 4.0]), -24.0);
        assert_eq!(product(&[2.0, 0.0, 4.0]), 0.0);
        assert_eq!(product(&[5.0]), 5.0);
    }

    #[test]
    fn product_of_empty_is_the_identity() {
        assert_eq!(product(&[]), 1.0);
    }
}
