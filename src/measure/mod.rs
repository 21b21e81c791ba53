use crate::algorithms::{ColumnMin, Selector};
use crate::element::{Coordinate, Located};
use crate::error::{Error, Result};
use crate::Float;

pub mod matrix;
pub mod param;

pub use self::matrix::DistanceMatrix;
pub use self::param::MeasuringParam;

pub trait Measurable<T: Float> {
    /// Measure the distance between row element `i` and column element `j`
    ///
    /// Rows and columns come from different populations, so `measure(i, j)`
    /// and `measure(j, i)` are unrelated.
    fn measure(&self, i: usize, j: usize) -> T;

    /// Return the number of rows (elements of the larger population)
    fn num_rows(&self) -> usize;

    /// Return the number of columns (elements of the smaller population)
    fn num_cols(&self) -> usize;
}

/// Distance between two populations.
///
/// Each element of the smaller population is matched greedily with its
/// nearest element of the larger one, and the weighted match costs are
/// summed. Every element the larger population has in excess costs
/// `operation_weight`. Without `param`, the weights default to
/// [`MeasuringParam::default_for`].
///
/// For populations of equal size both orientations are evaluated and the
/// cheaper one is returned, which keeps the measure symmetric.
pub fn measure<T, E>(pop1: &[E], pop2: &[E], param: Option<&MeasuringParam<T>>) -> Result<T>
where
    T: Float,
    E: Located<T>,
{
    measure_with::<ColumnMin, T, E>(pop1, pop2, param)
}

/// [`measure`] with an explicit proximal selection strategy.
pub fn measure_with<S, T, E>(pop1: &[E], pop2: &[E], param: Option<&MeasuringParam<T>>) -> Result<T>
where
    S: Selector<T>,
    T: Float,
    E: Located<T>,
{
    let (smaller, larger) = if pop1.len() <= pop2.len() {
        (pop1, pop2)
    } else {
        (pop2, pop1)
    };

    let first = match larger.first() {
        Some(first) => first,
        None => return Ok(T::zero()),
    };

    // Equal sizes have no natural orientation, so both sides must carry values.
    let tied = smaller.len() == larger.len();
    let is_valued = first.value().is_some() && (!tied || smaller[0].value().is_some());
    let param = param
        .copied()
        .unwrap_or_else(|| MeasuringParam::default_for(is_valued));

    log::debug!(
        "measuring {} against {} elements (valued: {})",
        smaller.len(),
        larger.len(),
        is_valued
    );

    if smaller.is_empty() {
        return measure_from_origin(larger, is_valued, &param);
    }

    let total = measure_oriented::<S, T, E>(smaller, larger, is_valued, &param)?;
    if !tied {
        return Ok(total);
    }

    // Column minima are not symmetric, take the cheaper orientation.
    let flipped = measure_oriented::<S, T, E>(larger, smaller, is_valued, &param)?;
    Ok(if flipped < total { flipped } else { total })
}

fn measure_oriented<S, T, E>(
    smaller: &[E],
    larger: &[E],
    is_valued: bool,
    param: &MeasuringParam<T>,
) -> Result<T>
where
    S: Selector<T>,
    T: Float,
    E: Located<T>,
{
    let loc_dist = DistanceMatrix::locations(smaller, larger)?;
    let combined = if is_valued {
        let val_dist = DistanceMatrix::values(smaller, larger)?;
        loc_dist.weighted_sum(param.distance_weight(), &val_dist, param.value_weight())?
    } else {
        loc_dist.scaled(param.distance_weight())
    };

    let proximal = S::select(&combined)?;
    let ope_dist = T::from(larger.len() - smaller.len()).unwrap_or_else(T::zero);

    Ok(proximal.into_iter().sum::<T>() + ope_dist * param.operation_weight())
}

/// Distance of a population from an empty one: every element is measured
/// by its own magnitude.
fn measure_from_origin<T, E>(pop: &[E], is_valued: bool, param: &MeasuringParam<T>) -> Result<T>
where
    T: Float,
    E: Located<T>,
{
    log::debug!("measuring {} elements from the origin", pop.len());

    let loc_dist: T = pop.iter().map(|e| e.location().magnitude()).sum();
    let val_dist = if is_valued {
        pop.iter()
            .enumerate()
            .map(|(index, e)| {
                e.value()
                    .map(T::abs)
                    .ok_or(Error::MissingValue { index })
            })
            .sum::<Result<T>>()?
    } else {
        T::zero()
    };
    let ope_dist = T::from(pop.len()).unwrap_or_else(T::zero);

    Ok(loc_dist * param.distance_weight()
        + val_dist * param.value_weight()
        + ope_dist * param.operation_weight())
}
