//! Demand forecasting.
//!
//! Provides simple exponential smoothing
//! ([`SimpleExponentialSmoothing`]), a level-only method for stationary
//! series (no trend, no seasonality). The forecaster is a pure function of
//! its smoothing coefficient and the supplied series.
//!
//! # Examples
//!
//! One-step-ahead forecast over a year of monthly demand:
//!
//! ```
//! use u_supply::forecast::SimpleExponentialSmoothing;
//!
//! let monthly_demand = [
//!     120.0, 135.0, 150.0, 145.0, 160.0, 155.0,
//!     170.0, 165.0, 180.0, 175.0, 190.0, 185.0,
//! ];
//!
//! let model = SimpleExponentialSmoothing::new(0.5)?;
//! let next_month = model.forecast(&monthly_demand)?;
//! assert!((next_month - 183.33).abs() < 0.01);
//! # Ok::<(), u_supply::forecast::ForecastError>(())
//! ```

mod ses;

pub use ses::{ForecastError, SesResult, SimpleExponentialSmoothing};
