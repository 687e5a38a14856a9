//! Quote snapshots built from provider data

use crate::catalog::{Commodity, ProviderKind};
use crate::PriceBar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current price, intraday change and spread for one commodity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// Display name
    pub commodity: String,
    /// Provider symbol the data came from
    pub symbol: String,
    /// Provider the data came from
    pub provider: ProviderKind,
    /// Last close of the day
    pub price: Option<f64>,
    /// Change from the first open of the day, in percent
    pub change_pct: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    /// Absolute difference between ask and bid
    pub spread: Option<f64>,
    /// When the snapshot was taken
    pub as_of: DateTime<Utc>,
}

impl QuoteSnapshot {
    /// Build a snapshot from the day's bars and the current bid/ask
    ///
    /// Bars are expected in time order. Without bars, price and change are
    /// `None`; without both bid and ask, spread is `None`.
    pub fn from_market_data(
        commodity: &Commodity,
        provider: ProviderKind,
        bars: &[PriceBar],
        bid: Option<f64>,
        ask: Option<f64>,
        as_of: DateTime<Utc>,
    ) -> Self {
        let price = bars.last().map(|bar| bar.close);
        let change_pct = match (bars.first(), price) {
            (Some(first), Some(last)) if first.open != 0.0 => {
                Some((last - first.open) / first.open * 100.0)
            }
            _ => None,
        };
        let spread = match (bid, ask) {
            (Some(bid), Some(ask)) => Some((ask - bid).abs()),
            _ => None,
        };

        Self {
            commodity: commodity.name.clone(),
            symbol: commodity.symbol_for(provider).to_string(),
            provider,
            price,
            change_pct,
            bid,
            ask,
            spread,
            as_of,
        }
    }

    /// Whether the snapshot carries any market data at all
    pub fn has_data(&self) -> bool {
        self.price.is_some() || self.bid.is_some() || self.ask.is_some()
    }

    /// `Some(true)` when the price is flat or up for the day
    pub fn is_up(&self) -> Option<bool> {
        self.change_pct.map(|change| change >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn gold() -> Commodity {
        Commodity::new("Gold", "GC=F", "OANDA:XAU_USD")
    }

    fn bar(minute: u32, open: f64, close: f64) -> PriceBar {
        PriceBar {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 14, minute, 0).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 10,
        }
    }

    #[test]
    fn test_change_from_first_open_to_last_close() {
        let bars = vec![bar(0, 100.0, 101.0), bar(1, 101.0, 99.0), bar(2, 99.0, 102.0)];
        let quote = QuoteSnapshot::from_market_data(
            &gold(),
            ProviderKind::YahooFinance,
            &bars,
            Some(101.5),
            Some(102.5),
            Utc::now(),
        );

        assert_eq!(quote.price, Some(102.0));
        assert!((quote.change_pct.unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(quote.spread, Some(1.0));
        assert_eq!(quote.symbol, "GC=F");
        assert_eq!(quote.is_up(), Some(true));
    }

    #[test]
    fn test_no_bars() {
        let quote = QuoteSnapshot::from_market_data(
            &gold(),
            ProviderKind::Finnhub,
            &[],
            Some(1.0),
            None,
            Utc::now(),
        );

        assert_eq!(quote.price, None);
        assert_eq!(quote.change_pct, None);
        assert_eq!(quote.spread, None);
        assert_eq!(quote.symbol, "OANDA:XAU_USD");
        assert!(quote.has_data());
    }

    #[test]
    fn test_spread_is_absolute() {
        let quote = QuoteSnapshot::from_market_data(
            &gold(),
            ProviderKind::YahooFinance,
            &[],
            Some(1.075),
            Some(1.07),
            Utc::now(),
        );

        assert!((quote.spread.unwrap() - 0.005).abs() < 1e-12);
        assert!(quote.has_data());
    }
}
