//! Simple Exponential Smoothing (SES).
//!
//! Level-only forecasting for a univariate demand series:
//!
//! ```text
//! S_1 = x_1
//! S_t = α x_t + (1 - α) S_{t-1}
//! ```
//!
//! where α ∈ (0, 1] is the smoothing coefficient. The final level is the
//! one-step-ahead forecast for the period after the last observation.
//!
//! # Reference
//!
//! Brown, R.G. (1956). *Exponential Smoothing for Predicting Demand*.

/// Errors produced by the forecaster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Smoothing coefficient outside the half-open interval (0, 1].
    #[error("smoothing coefficient must be in (0, 1], got {0}")]
    InvalidAlpha(f64),

    /// The demand series has no observations.
    #[error("demand series is empty")]
    EmptySeries,
}

/// Smoothed levels of a demand series.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SesResult {
    /// Smoothed level after each observation.
    pub smoothed: Vec<f64>,
    /// One-step-ahead forecast for the next period (the final level).
    pub forecast: f64,
}

/// Simple exponential smoothing forecaster.
///
/// Holds only the smoothing coefficient; every call consumes its own series
/// and no state survives between calls. Higher α reacts faster to recent
/// observations; α = 1 keeps no memory and forecasts the last observation.
///
/// # Examples
///
/// ```
/// use u_supply::forecast::SimpleExponentialSmoothing;
///
/// let model = SimpleExponentialSmoothing::new(0.5)?;
/// let forecast = model.forecast(&[10.0, 12.0])?;
/// assert_eq!(forecast, 11.0);
/// # Ok::<(), u_supply::forecast::ForecastError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleExponentialSmoothing {
    alpha: f64,
}

impl SimpleExponentialSmoothing {
    /// Creates a forecaster with the given smoothing coefficient.
    ///
    /// α must be finite and in (0, 1]: 0 is rejected (the forecast would
    /// never move off the first observation), 1 is accepted.
    pub fn new(alpha: f64) -> Result<Self, ForecastError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ForecastError::InvalidAlpha(alpha));
        }
        Ok(Self { alpha })
    }

    /// Returns the smoothing coefficient α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Forecasts the next value from a chronological series (oldest first).
    ///
    /// The level starts at the first observation and folds the rest in
    /// order; a single-observation series is returned unchanged since there
    /// is nothing to smooth.
    pub fn forecast(&self, series: &[f64]) -> Result<f64, ForecastError> {
        let (&first, rest) = series.split_first().ok_or(ForecastError::EmptySeries)?;
        let mut level = first;
        for &actual in rest {
            level = self.alpha * actual + (1.0 - self.alpha) * level;
        }
        Ok(level)
    }

    /// Smooths the full series, keeping the level after each observation.
    ///
    /// The final level equals [`forecast`](Self::forecast) on the same
    /// series.
    pub fn smooth(&self, series: &[f64]) -> Result<SesResult, ForecastError> {
        let (&first, rest) = series.split_first().ok_or(ForecastError::EmptySeries)?;
        let mut smoothed = Vec::with_capacity(series.len());
        let mut level = first;
        smoothed.push(level);
        for &actual in rest {
            level = self.alpha * actual + (1.0 - self.alpha) * level;
            smoothed.push(level);
        }
        Ok(SesResult {
            smoothed,
            forecast: level,
        })
    }
}
