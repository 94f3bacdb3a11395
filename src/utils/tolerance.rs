use crate::utils::errors::UtilsError;

/// Largest variance whose error window is still wider than f64 resolution near small integers.
pub const MAX_VARIANCE: u32 = 15;

/// Absolute error window used when comparing floating results against integers.
///
/// A variance of `d` decimal places allows an error of `10^-d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    variance: u32,
    offset: f64,
}

impl Tolerance {
    /// # Errors
    ///
    /// Returns an error if `variance` exceeds [`MAX_VARIANCE`].
    pub fn from_variance(variance: u32) -> Result<Self, UtilsError> {
        if variance > MAX_VARIANCE {
            return Err(UtilsError::VarianceTooLarge {
                variance,
                max: MAX_VARIANCE,
            });
        }
        Ok(Self::with_places(variance))
    }

    fn with_places(variance: u32) -> Self {
        Self {
            variance,
            offset: 10_f64.powi(-(variance as i32)),
        }
    }

    pub fn variance(&self) -> u32 {
        self.variance
    }

    /// The accepted absolute error.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Inclusive window check around `target`.
    pub fn matches(&self, value: f64, target: i64) -> bool {
        let target = target as f64;
        value >= target - self.offset && value <= target + self.offset
    }

    /// Nearest integer to `value` when it lies inside the window, `None` otherwise.
    pub fn nearest_integer(&self, value: f64) -> Option<i64> {
        if !value.is_finite() {
            return None;
        }
        let rounded = value.round();
        if (value - rounded).abs() <= self.offset {
            Some(rounded as i64)
        } else {
            None
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::with_places(5)
    }
}
