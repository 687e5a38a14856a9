//! # Commodity Forecast
//!
//! Core of a commodity price dashboard: upload a price table, clean it,
//! engineer rolling-mean and lag features, fit a linear model, score it on a
//! held-out split and export an n-step forecast. Live quotes are shown
//! alongside for information only.
//!
//! - [`forecast_pipeline`]: loading, cleaning, features, training, evaluation, forecasting
//! - [`market_quotes`]: commodity catalog and cached quote snapshots
//! - [`series_math`]: rolling means, lags and least squares
//!
//! ## Example
//!
//! ```
//! use commodity_forecast_workspace::forecast_pipeline::PipelineSession;
//! use commodity_forecast_workspace::market_quotes::{QuoteService, StaticQuoteProvider};
//!
//! let mut session = PipelineSession::default();
//! session.load_bytes(b"gold,silver\n1,2\n2,4\n3,6\n4,8\n5,10\n6,12\n7,14\n")?;
//! let forecast = session.forecast(2)?;
//! assert_eq!(forecast.horizon(), 2);
//!
//! let mut quotes = QuoteService::new(StaticQuoteProvider::demo());
//! assert!(quotes.lookup("Gold").is_ok());
//! # Ok::<(), commodity_forecast_workspace::forecast_pipeline::PipelineError>(())
//! ```

pub use forecast_pipeline;
pub use market_quotes;
pub use series_math;

