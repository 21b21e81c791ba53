use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Weights leave no room for the operation weight.
    #[error("distance_weight + value_weight must be < 1, got {distance_weight} + {value_weight}")]
    Configuration { distance_weight: f64, value_weight: f64 },

    #[error("only vertical or square matrices are supported, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    #[error("{len} entries cannot fill a {rows}x{cols} matrix")]
    DataLength { len: usize, rows: usize, cols: usize },

    #[error("cannot combine a {rows}x{cols} matrix with a {other_rows}x{other_cols} one")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        other_rows: usize,
        other_cols: usize,
    },

    #[error("element {index} has dimension {found}, expected {expected}")]
    Dimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("element {index} has no value but the population is valued")]
    MissingValue { index: usize },

    #[error("distance matrix requires a non-empty smaller population")]
    EmptyPopulation,
}
