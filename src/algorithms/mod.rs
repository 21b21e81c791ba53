mod column_min;
mod greedy;

pub use self::column_min::*;
pub use self::greedy::*;

use crate::error::{Error, Result};
use crate::{measure::Measurable, Float};

/// Reduces a distance matrix to one proximal distance per column.
pub trait Selector<T: Float> {
    fn select(d: &impl Measurable<T>) -> Result<Vec<T>>;
}

fn check_shape<T: Float>(d: &impl Measurable<T>) -> Result<()> {
    let (rows, cols) = (d.num_rows(), d.num_cols());
    if rows < cols {
        return Err(Error::Shape { rows, cols });
    }
    Ok(())
}
