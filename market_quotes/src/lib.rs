//! # Market Quotes
//!
//! Commodity symbol catalog and quote snapshots for a price dashboard.
//!
//! Quotes are informational only. A lookup that fails produces a
//! [`QuoteOutcome::Notice`] the dashboard can show next to its charts; it
//! never interrupts the forecasting workflow.
//!
//! ## Usage Example
//!
//! ```rust
//! use market_quotes::{QuoteOutcome, QuoteService, StaticQuoteProvider};
//!
//! let mut service = QuoteService::new(StaticQuoteProvider::demo());
//!
//! match service.lookup_or_notice("gold") {
//!     QuoteOutcome::Snapshot(quote) => assert_eq!(quote.symbol, "GC=F"),
//!     QuoteOutcome::Notice(message) => panic!("{}", message),
//! }
//!
//! // Wheat has no demo quote
//! assert!(matches!(service.lookup_or_notice("Wheat"), QuoteOutcome::Notice(_)));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod error;
pub mod provider;
pub mod quote;
pub mod service;

pub use catalog::{Commodity, CommodityCatalog, ProviderKind};
pub use error::{QuoteError, Result};
pub use provider::{QuoteProvider, StaticQuote, StaticQuoteProvider};
pub use quote::QuoteSnapshot;
pub use service::{QuoteOutcome, QuoteService, QuoteServiceConfig};

/// One intraday OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time
    pub timestamp: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: u64,
}

impl PriceBar {
    /// Create a bar with every price set to `price`
    pub fn flat(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self {
            timestamp,
            open: price,
            high: price,
            low: price,
            close: price,
            volume: 0,
        }
    }
}
