use std::fmt::Debug;
use std::iter::Sum;

pub trait Float: num_traits::Float + Debug + Sum + Send + Sync {}

impl Float for f64 {}
impl Float for f32 {}

pub mod algorithms;
pub mod element;
pub mod error;
pub mod measure;
pub mod utils;

pub use crate::element::{Coordinate, Located, Point, ValuedPoint};
pub use crate::error::{Error, Result};
pub use crate::measure::{measure, measure_with, DistanceMatrix, MeasuringParam};
