use super::*;
use crate::utils::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Greedy proximal selection by repeated global minimum extraction.
///
/// Each round finds the smallest entry among the columns still active,
/// records it as that column's proximal distance and retires the column.
/// Rows are never retired, so one row may be the nearest match of many
/// columns.
pub struct GreedyProximal;

/// [`GreedyProximal`] with the global minimum of each round computed as a
/// parallel map over rows followed by a reduction of the row minima.
#[cfg(feature = "parallel")]
pub struct ParallelProximal;

impl<T: Float> Selector<T> for GreedyProximal {
    fn select(d: &impl Measurable<T>) -> Result<Vec<T>> {
        check_shape(d)?;

        superluminal_perf::begin_event("greedy_proximal");
        let proximal = reduce(d, |working, active, n_cols| {
            working
                .chunks(n_cols)
                .enumerate()
                .filter_map(|(i, row)| argmin_masked(row, active).map(|(j, v)| (i * n_cols + j, v)))
                .reduce(min_by_value)
        });
        superluminal_perf::end_event();

        Ok(proximal)
    }
}

#[cfg(feature = "parallel")]
impl<T: Float> Selector<T> for ParallelProximal {
    fn select(d: &impl Measurable<T>) -> Result<Vec<T>> {
        check_shape(d)?;

        superluminal_perf::begin_event("parallel_proximal");
        let proximal = reduce(d, |working, active, n_cols| {
            working
                .par_chunks(n_cols)
                .enumerate()
                .filter_map(|(i, row)| argmin_masked(row, active).map(|(j, v)| (i * n_cols + j, v)))
                .reduce_with(min_by_value)
        });
        superluminal_perf::end_event();

        Ok(proximal)
    }
}

/// Runs one round per column. `argmin` returns the flat index and value of
/// the smallest entry over active columns.
fn reduce<T, F>(d: &impl Measurable<T>, argmin: F) -> Vec<T>
where
    T: Float,
    F: Fn(&[T], &[bool], usize) -> Option<(usize, T)>,
{
    let n_rows = d.num_rows();
    let n_cols = d.num_cols();

    let mut working: Vec<T> = Vec::with_capacity(n_rows * n_cols);
    for i in 0..n_rows {
        for j in 0..n_cols {
            working.push(d.measure(i, j));
        }
    }

    let mut active = vec![true; n_cols];
    let mut proximal = vec![T::infinity(); n_cols];

    for round in 0..n_cols {
        let (min_index, min_value) = match argmin(working.as_slice(), active.as_slice(), n_cols) {
            Some(found) => found,
            None => break,
        };
        let (min_row, min_col) = (min_index / n_cols, min_index % n_cols);
        log::trace!("round {}: row {} col {} at {:?}", round, min_row, min_col, min_value);

        proximal[min_col] = min_value;

        // Retire the column.
        active[min_col] = false;
    }

    proximal
}
