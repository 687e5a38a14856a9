//! Market-data provider seam
//!
//! Network-backed providers live outside this crate. [`StaticQuoteProvider`]
//! serves fixed quotes for offline dashboards and tests.

use crate::catalog::ProviderKind;
use crate::error::{QuoteError, Result};
use crate::PriceBar;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Source of intraday bars and bid/ask quotes
pub trait QuoteProvider {
    /// Which symbol family this provider understands
    fn kind(&self) -> ProviderKind;

    /// Provider display name
    fn name(&self) -> &str;

    /// Today's bars for `symbol`, oldest first
    fn intraday_bars(&self, symbol: &str) -> Result<Vec<PriceBar>>;

    /// Current bid and ask for `symbol`
    fn bid_ask(&self, symbol: &str) -> Result<(Option<f64>, Option<f64>)>;

    /// One bar per trading day over the last `days` days, oldest first
    fn daily_bars(&self, symbol: &str, days: usize) -> Result<Vec<PriceBar>>;
}

/// A fixed quote served by [`StaticQuoteProvider`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticQuote {
    pub bid: f64,
    pub ask: f64,
    /// Intraday change in percent
    pub change_pct: f64,
}

impl StaticQuote {
    pub fn new(bid: f64, ask: f64, change_pct: f64) -> Self {
        Self {
            bid,
            ask,
            change_pct,
        }
    }

    fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }
}

/// Provider answering from an in-memory table of quotes
#[derive(Debug, Clone)]
pub struct StaticQuoteProvider {
    kind: ProviderKind,
    quotes: HashMap<String, StaticQuote>,
    session_open: DateTime<Utc>,
}

impl StaticQuoteProvider {
    /// Empty provider for the given symbol family
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            quotes: HashMap::new(),
            session_open: Utc::now(),
        }
    }

    /// Demo quotes for Silver, Gold and Copper, keyed by futures symbol
    pub fn demo() -> Self {
        Self::new(ProviderKind::YahooFinance)
            .with_quote("SI=F", StaticQuote::new(3239.18, 3239.66, 0.06))
            .with_quote("GC=F", StaticQuote::new(947.46, 961.54, 0.77))
            .with_quote("HG=F", StaticQuote::new(1.075, 1.07, 0.11))
    }

    /// Add or replace the quote for `symbol`
    pub fn with_quote(mut self, symbol: &str, quote: StaticQuote) -> Self {
        self.quotes.insert(symbol.to_string(), quote);
        self
    }

    /// Timestamp of the first synthesized bar
    pub fn with_session_open(mut self, session_open: DateTime<Utc>) -> Self {
        self.session_open = session_open;
        self
    }

    fn quote(&self, symbol: &str) -> Result<&StaticQuote> {
        self.quotes.get(symbol).ok_or_else(|| {
            QuoteError::ExternalDataUnavailable(format!("No quote for symbol {}", symbol))
        })
    }
}

impl QuoteProvider for StaticQuoteProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn name(&self) -> &str {
        "Static quotes"
    }

    /// An opening and a closing bar reproducing the configured change
    fn intraday_bars(&self, symbol: &str) -> Result<Vec<PriceBar>> {
        let quote = self.quote(symbol)?;
        let close = quote.mid();
        let open = close / (1.0 + quote.change_pct / 100.0);

        let mut first = PriceBar::flat(self.session_open, open);
        first.close = close;
        first.high = open.max(close);
        first.low = open.min(close);
        let last = PriceBar::flat(self.session_open + Duration::minutes(1), close);

        Ok(vec![first, last])
    }

    fn bid_ask(&self, symbol: &str) -> Result<(Option<f64>, Option<f64>)> {
        let quote = self.quote(symbol)?;
        Ok((Some(quote.bid), Some(quote.ask)))
    }

    /// Daily bars stepping linearly to the current mid, ending on the session day
    fn daily_bars(&self, symbol: &str, days: usize) -> Result<Vec<PriceBar>> {
        let quote = self.quote(symbol)?;
        let close = quote.mid();
        let start = close / (1.0 + days as f64 * quote.change_pct / 100.0);
        let step = (close - start) / days.max(1) as f64;

        let bars = (0..days)
            .map(|day| {
                let open = start + step * day as f64;
                let timestamp = self.session_open - Duration::days((days - 1 - day) as i64);
                let mut bar = PriceBar::flat(timestamp, open);
                bar.close = open + step;
                bar.high = bar.open.max(bar.close);
                bar.low = bar.open.min(bar.close);
                bar
            })
            .collect();
        Ok(bars)
    }
}
