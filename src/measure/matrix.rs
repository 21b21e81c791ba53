use super::Measurable;
use crate::element::{Coordinate, Located};
use crate::error::{Error, Result};
use crate::Float;

/// Dense row-major matrix of pairwise distances.
///
/// Rows index the larger population and columns the smaller one.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<T: Float> {
    data: Vec<T>,
    n_rows: usize,
    n_cols: usize,
}

impl<T: Float> DistanceMatrix<T> {
    pub fn from_pairs<R, C, F>(rows: &[R], cols: &[C], f: F) -> Self
    where
        F: Fn(&R, &C) -> T,
    {
        let n_rows = rows.len();
        let n_cols = cols.len();
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for a in rows {
            for b in cols {
                data.push(f(a, b));
            }
        }

        Self { data, n_rows, n_cols }
    }

    pub fn from_flat(data: &[T], n_rows: usize, n_cols: usize) -> Result<Self> {
        if data.len() != n_rows * n_cols {
            return Err(Error::DataLength {
                len: data.len(),
                rows: n_rows,
                cols: n_cols,
            });
        }
        let data = data.to_owned();
        Ok(Self { data, n_rows, n_cols })
    }

    /// Location distances between every element of `larger` (rows) and
    /// every element of `smaller` (columns).
    pub fn locations<E: Located<T>>(smaller: &[E], larger: &[E]) -> Result<Self> {
        let expected = match larger.first() {
            Some(first) if !smaller.is_empty() => first.location().dimension(),
            _ => return Err(Error::EmptyPopulation),
        };

        for (index, element) in smaller.iter().chain(larger).enumerate() {
            let found = element.location().dimension();
            if found != expected {
                return Err(Error::Dimension {
                    index,
                    expected,
                    found,
                });
            }
        }

        superluminal_perf::begin_event("location_matrix");
        let matrix = Self::from_pairs(larger, smaller, |l, s| l.location().distance(s.location()));
        superluminal_perf::end_event();

        Ok(matrix)
    }

    /// Absolute value differences, same orientation as [`Self::locations`].
    pub fn values<E: Located<T>>(smaller: &[E], larger: &[E]) -> Result<Self> {
        if smaller.is_empty() || larger.is_empty() {
            return Err(Error::EmptyPopulation);
        }

        let val_smaller = collect_values(smaller, 0)?;
        let val_larger = collect_values(larger, smaller.len())?;

        superluminal_perf::begin_event("value_matrix");
        let matrix = Self::from_pairs(&val_larger, &val_smaller, |&l, &s| (l - s).abs());
        superluminal_perf::end_event();

        Ok(matrix)
    }

    pub fn scaled(&self, weight: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * weight).collect(),
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        }
    }

    /// `self * weight + other * other_weight`, element-wise.
    pub fn weighted_sum(&self, weight: T, other: &Self, other_weight: T) -> Result<Self> {
        if self.n_rows != other.n_rows || self.n_cols != other.n_cols {
            return Err(Error::ShapeMismatch {
                rows: self.n_rows,
                cols: self.n_cols,
                other_rows: other.n_rows,
                other_cols: other.n_cols,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a * weight + b * other_weight)
            .collect();

        Ok(Self {
            data,
            n_rows: self.n_rows,
            n_cols: self.n_cols,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// Indices in errors run over `smaller` first, then `larger`.
fn collect_values<T: Float, E: Located<T>>(pop: &[E], offset: usize) -> Result<Vec<T>> {
    pop.iter()
        .enumerate()
        .map(|(i, e)| e.value().ok_or(Error::MissingValue { index: offset + i }))
        .collect()
}

impl<T: Float> Measurable<T> for DistanceMatrix<T> {
    #[inline]
    fn measure(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.n_rows && j < self.n_cols);
        self.data[i * self.n_cols + j]
    }

    fn num_rows(&self) -> usize {
        self.n_rows
    }

    fn num_cols(&self) -> usize {
        self.n_cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Point, ValuedPoint};

    #[test]
    fn scalar_locations_use_absolute_difference() {
        let smaller = [Point::new(0.0_f64), Point::new(2.0)];
        let larger = [Point::new(1.0_f64), Point::new(5.0), Point::new(-1.0)];

        let d = DistanceMatrix::<f64>::locations(&smaller, &larger).unwrap();

        assert_eq!(d.num_rows(), 3);
        assert_eq!(d.num_cols(), 2);
        assert_eq!(d.as_slice(), &[1.0, 1.0, 5.0, 3.0, 1.0, 3.0]);
    }

    #[test]
    fn vector_locations_use_euclidean_distance() {
        let smaller = [Point::new([0.0_f64, 0.0])];
        let larger = [Point::new([3.0_f64, 4.0]), Point::new([0.0, 1.0])];

        let d = DistanceMatrix::<f64>::locations(&smaller, &larger).unwrap();

        assert_eq!(d.measure(0, 0), 5.0);
        assert_eq!(d.measure(1, 0), 1.0);
    }

    #[test]
    fn inconsistent_dimensions_are_rejected() {
        let smaller = [Point::new(vec![0.0_f64, 0.0])];
        let larger = [Point::new(vec![1.0_f64, 1.0]), Point::new(vec![1.0, 1.0, 1.0])];

        let err = DistanceMatrix::<f64>::locations(&smaller, &larger).unwrap_err();

        assert_eq!(
            err,
            Error::Dimension {
                index: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn empty_smaller_is_rejected() {
        let smaller: [Point<f64>; 0] = [];
        let larger = [Point::new(1.0_f64)];

        assert_eq!(
            DistanceMatrix::<f64>::locations(&smaller, &larger),
            Err(Error::EmptyPopulation)
        );
        assert_eq!(
            DistanceMatrix::<f64>::values(&smaller, &larger),
            Err(Error::EmptyPopulation)
        );
    }

    #[test]
    fn values_compare_larger_against_smaller() {
        let smaller = [ValuedPoint::new(0.0_f64, 1.0_f64)];
        let larger = [ValuedPoint::new(0.0_f64, 4.0_f64), ValuedPoint::new(0.0, -2.0)];

        let d = DistanceMatrix::<f64>::values(&smaller, &larger).unwrap();

        assert_eq!(d.as_slice(), &[3.0, 3.0]);
    }

    #[test]
    fn missing_values_are_reported() {
        let smaller = [Point::new(0.0_f64)];
        let larger = [Point::new(1.0_f64)];

        assert_eq!(
            DistanceMatrix::<f64>::values(&smaller, &larger),
            Err(Error::MissingValue { index: 0 })
        );
    }

    #[test]
    fn weighted_sum_combines_element_wise() {
        let a = DistanceMatrix::from_flat(&[1.0_f64, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let b = DistanceMatrix::from_flat(&[4.0_f64, 4.0, 0.0, 2.0], 2, 2).unwrap();

        let c = a.weighted_sum(0.5, &b, 0.25).unwrap();

        assert_eq!(c.as_slice(), &[1.5, 2.0, 1.5, 2.5]);
        assert_eq!(a.scaled(2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn weighted_sum_rejects_mismatched_shapes() {
        let a = DistanceMatrix::from_flat(&[1.0_f64, 2.0], 2, 1).unwrap();
        let b = DistanceMatrix::from_flat(&[1.0_f64, 2.0], 1, 2).unwrap();

        assert_eq!(
            a.weighted_sum(1.0, &b, 1.0),
            Err(Error::ShapeMismatch {
                rows: 2,
                cols: 1,
                other_rows: 1,
                other_cols: 2
            })
        );
        assert_eq!(
            DistanceMatrix::from_flat(&[1.0_f64], 2, 2),
            Err(Error::DataLength {
                len: 1,
                rows: 2,
                cols: 2
            })
        );
    }
}
