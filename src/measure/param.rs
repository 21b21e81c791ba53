use crate::error::{Error, Result};
use crate::Float;

/// Weights blending location distance, value distance and population-size
/// mismatch.
///
/// `operation_weight` is whatever is left of 1 after the other two, and is
/// always strictly positive for a constructed value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParam<T>", into = "RawParam<T>")
)]
pub struct MeasuringParam<T: Float> {
    distance_weight: T,
    value_weight: T,
    operation_weight: T,
}

impl<T: Float> MeasuringParam<T> {
    pub fn new(distance_weight: T, value_weight: T) -> Result<Self> {
        // Written so that NaN weights fail as well.
        if !(distance_weight + value_weight < T::one()) {
            return Err(Error::Configuration {
                distance_weight: distance_weight.to_f64().unwrap_or(f64::NAN),
                value_weight: value_weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            distance_weight,
            value_weight,
            operation_weight: T::one() - distance_weight - value_weight,
        })
    }

    pub fn distance_only(distance_weight: T) -> Result<Self> {
        Self::new(distance_weight, T::zero())
    }

    /// Even split across all weights in use: thirds for valued populations,
    /// halves otherwise.
    pub fn default_for(is_valued: bool) -> Self {
        let (two, three) = (T::one() + T::one(), T::one() + T::one() + T::one());
        if is_valued {
            let third = T::one() / three;
            Self {
                distance_weight: third,
                value_weight: third,
                operation_weight: T::one() - third - third,
            }
        } else {
            let half = T::one() / two;
            Self {
                distance_weight: half,
                value_weight: T::zero(),
                operation_weight: T::one() - half,
            }
        }
    }

    pub fn distance_weight(&self) -> T {
        self.distance_weight
    }

    pub fn value_weight(&self) -> T {
        self.value_weight
    }

    pub fn operation_weight(&self) -> T {
        self.operation_weight
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawParam<T> {
    distance_weight: T,
    value_weight: Option<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> std::convert::TryFrom<RawParam<T>> for MeasuringParam<T> {
    type Error = Error;

    fn try_from(raw: RawParam<T>) -> Result<Self> {
        Self::new(raw.distance_weight, raw.value_weight.unwrap_or_else(T::zero))
    }
}

#[cfg(feature = "serde")]
impl<T: Float> From<MeasuringParam<T>> for RawParam<T> {
    fn from(param: MeasuringParam<T>) -> Self {
        Self {
            distance_weight: param.distance_weight,
            value_weight: Some(param.value_weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_weight_takes_the_remainder() {
        let param = MeasuringParam::new(0.25_f64, 0.5).unwrap();
        assert_eq!(param.distance_weight(), 0.25);
        assert_eq!(param.value_weight(), 0.5);
        assert_eq!(param.operation_weight(), 0.25);
    }

    #[test]
    fn weights_summing_to_one_or_more_are_rejected() {
        assert_eq!(
            MeasuringParam::new(0.6_f64, 0.5),
            Err(Error::Configuration {
                distance_weight: 0.6,
                value_weight: 0.5
            })
        );
        assert!(MeasuringParam::new(0.5_f64, 0.5).is_err());
        assert!(MeasuringParam::distance_only(1.0_f64).is_err());
        assert!(MeasuringParam::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn defaults_split_evenly() {
        let plain = MeasuringParam::<f64>::default_for(false);
        assert_eq!(plain.distance_weight(), 0.5);
        assert_eq!(plain.value_weight(), 0.0);
        assert_eq!(plain.operation_weight(), 0.5);

        let valued = MeasuringParam::<f64>::default_for(true);
        assert_eq!(valued.distance_weight(), 1.0 / 3.0);
        assert_eq!(valued.value_weight(), 1.0 / 3.0);
        assert!(valued.operation_weight() > 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_weights() {
        let param: MeasuringParam<f64> = serde_json::from_str(r#"{"distance_weight":0.25}"#).unwrap();
        assert_eq!(param, MeasuringParam::distance_only(0.25).unwrap());

        let rejected = serde_json::from_str::<MeasuringParam<f64>>(
            r#"{"distance_weight":0.6,"value_weight":0.5}"#,
        );
        assert!(rejected.is_err());

        let json = serde_json::to_string(&MeasuringParam::new(0.5_f64, 0.25).unwrap()).unwrap();
        assert_eq!(json, r#"{"distance_weight":0.5,"value_weight":0.25}"#);
    }
}
