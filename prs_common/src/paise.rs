use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const INR_CURRENCY_CODE: &str = "INR";

//--------------------------------------       Paise        ----------------------------------------------------------
/// An amount of Indian rupees, in integer minor units (1 rupee = 100 paise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Paise(i64);

impl Add for Paise {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Paise {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i64> for Paise {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Paise {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in paise: {0}")]
pub struct PaiseConversionError(String);

impl From<i64> for Paise {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<f64> for Paise {
    type Error = PaiseConversionError;

    fn try_from(rupees: f64) -> Result<Self, Self::Error> {
        let paise = (rupees * 100.0).round();
        if !paise.is_finite() || paise.abs() > i64::MAX as f64 {
            Err(PaiseConversionError(format!("Value {rupees} cannot be expressed in paise")))
        } else {
            #[allow(clippy::cast_possible_truncation)]
            Ok(Self(paise as i64))
        }
    }
}

impl Display for Paise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rupees = self.0 as f64 / 100.0;
        write!(f, "₹{rupees:0.2}")
    }
}

impl Paise {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Converts a decimal rupee amount to paise, rounding to the nearest paisa.
    pub fn from_rupees(rupees: f64) -> Self {
        Self((rupees * 100.0).round() as i64)
    }
}
