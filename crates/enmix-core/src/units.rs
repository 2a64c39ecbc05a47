//! Newtype wrappers for the quantities flowing through the mix series.
//!
//! Using raw `f64` values makes it easy to confuse a generation volume with
//! a percentage. These wrappers catch such mix-ups at compile time while
//! keeping the same memory layout as `f64` (`#[repr(transparent)]`).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Generation volume in terawatt-hours (TWh)
///
/// The synthetic series uses TWh for every per-source contribution and for
/// the renewable/total aggregates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TerawattHours(pub f64);

impl_unit_ops!(TerawattHours, "TWh");

/// Share of total generation, in percent (0..=100)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl_unit_ops!(Percent, "%");

impl TerawattHours {
    /// Zero generation
    pub const ZERO: Self = Self(0.0);
}

impl Percent {
    /// Ratio of two volumes expressed as a percentage, rounded to 2 decimals.
    #[inline]
    pub fn from_ratio(part: TerawattHours, whole: TerawattHours) -> Self {
        Percent(round2(part.0 / whole.0 * 100.0))
    }
}

/// Round to 2 decimal places (ties away from zero, like the display layer
/// this series was built for).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
