use crate::Float;

/// Whether `candidate` should replace `best` as a running minimum
///
/// NaN never replaces anything and is replaced by anything.
#[inline]
pub fn improves<T: Float>(candidate: T, best: T) -> bool {
    best.is_nan() || candidate < best
}

/// Returns the index and value of the minimum element among those whose
/// `mask` entry is true, or `None` if no element is eligible
///
/// NaN only survives if nothing else is eligible. Ties go to the lowest index.
pub fn argmin_masked<T: Float>(xs: &[T], mask: &[bool]) -> Option<(usize, T)> {
    xs.iter()
        .zip(mask)
        .enumerate()
        .filter(|(_i, (_x, &m))| m)
        .map(|(i, (&x, _m))| (i, x))
        .reduce(min_by_value)
}

/// Returns the pair with the smaller value, preferring `a` on ties
#[inline]
pub fn min_by_value<T: Float>(a: (usize, T), b: (usize, T)) -> (usize, T) {
    if improves(b.1, a.1) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmin_picks_first_minimum() {
        let xs = [3.0, 1.0, 2.0, 1.0];
        assert_eq!(argmin_masked(&xs, &[true; 4]), Some((1, 1.0)));
    }

    #[test]
    fn argmin_skips_masked_elements() {
        let xs = [3.0, 1.0, 2.0, 1.0];
        assert_eq!(argmin_masked(&xs, &[true, false, true, false]), Some((2, 2.0)));
        assert_eq!(argmin_masked(&xs, &[false; 4]), None);
    }

    #[test]
    fn argmin_considers_infinite_elements() {
        let xs = [f64::INFINITY, f64::INFINITY];
        assert_eq!(argmin_masked(&xs, &[false, true]), Some((1, f64::INFINITY)));
    }

    #[test]
    fn nan_never_improves() {
        assert!(improves(1.0, f64::NAN));
        assert!(!improves(f64::NAN, 1.0));
        assert!(!improves(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn min_by_value_keeps_left_on_tie() {
        assert_eq!(min_by_value((0, 1.0), (4, 1.0)), (0, 1.0));
        assert_eq!(min_by_value((0, 2.0), (4, 1.0)), (4, 1.0));
        assert_eq!(min_by_value((0, f64::NAN), (4, 1.0)), (4, 1.0));
    }
}
