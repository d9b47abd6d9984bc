//! # Traits
//!
//! The numbers that the simplex tableau computes with.
use std::fmt::{Debug, Display};

use num_traits::{Float, NumCast};

/// Tolerance used when no other tolerance is configured.
///
/// Values within this distance of zero are treated as zero by the sign tests of the algorithm.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// A real number approximation that the tableau can be built over.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Real: Float + Debug + Display + 'static {
    /// The default tolerance, converted to this type.
    ///
    /// Falls back to the machine epsilon of the type if the default can't be represented.
    fn default_tolerance() -> Self {
        <Self as NumCast>::from(DEFAULT_TOLERANCE).unwrap_or_else(Self::epsilon)
    }
}
impl<T: Float + Debug + Display + 'static> Real for T {
}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::{DEFAULT_TOLERANCE, Real};

    #[test]
    fn default_tolerance() {
        assert_eq!(f64::default_tolerance(), DEFAULT_TOLERANCE);
        assert!(f32::default_tolerance() > 0f32);
    }
}
