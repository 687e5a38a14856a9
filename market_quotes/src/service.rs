//! Cached quote lookups by commodity display name

use crate::catalog::CommodityCatalog;
use crate::error::{QuoteError, Result};
use crate::provider::QuoteProvider;
use crate::quote::QuoteSnapshot;
use crate::PriceBar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Quote service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteServiceConfig {
    /// How long a snapshot is served from cache, in seconds
    pub cache_ttl_secs: u64,
}

impl Default for QuoteServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 300,
        }
    }
}

impl QuoteServiceConfig {
    fn is_fresh(&self, as_of: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let age = (now - as_of).num_seconds();
        age >= 0 && (age as u64) < self.cache_ttl_secs
    }
}

/// What a dashboard shows for a quote request
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    Snapshot(QuoteSnapshot),
    /// Informational message in place of a quote
    Notice(String),
}

/// Resolves display names, queries a provider and caches the snapshots
#[derive(Debug)]
pub struct QuoteService<P: QuoteProvider> {
    provider: P,
    catalog: CommodityCatalog,
    config: QuoteServiceConfig,
    cache: HashMap<String, QuoteSnapshot>,
}

impl<P: QuoteProvider> QuoteService<P> {
    /// Service over the default catalog
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, CommodityCatalog::default(), QuoteServiceConfig::default())
    }

    /// Service over an explicit catalog and settings
    pub fn with_config(
        provider: P,
        catalog: CommodityCatalog,
        config: QuoteServiceConfig,
    ) -> Self {
        Self {
            provider,
            catalog,
            config,
            cache: HashMap::new(),
        }
    }

    pub fn catalog(&self) -> &CommodityCatalog {
        &self.catalog
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Snapshot for `name`, from cache when younger than the TTL
    pub fn lookup(&mut self, name: &str) -> Result<QuoteSnapshot> {
        self.lookup_at(name, Utc::now())
    }

    /// Same as [`lookup`](Self::lookup) with an explicit clock
    pub fn lookup_at(&mut self, name: &str, now: DateTime<Utc>) -> Result<QuoteSnapshot> {
        let commodity = self
            .catalog
            .resolve(name)
            .ok_or_else(|| QuoteError::UnknownCommodity(name.to_string()))?
            .clone();

        if let Some(cached) = self.cache.get(&commodity.name) {
            if self.config.is_fresh(cached.as_of, now) {
                tracing::debug!(commodity = %commodity.name, "Quote served from cache");
                return Ok(cached.clone());
            }
        }

        let kind = self.provider.kind();
        let symbol = commodity.symbol_for(kind);
        let bars = self.provider.intraday_bars(symbol)?;
        let (bid, ask) = self.provider.bid_ask(symbol)?;

        let snapshot = QuoteSnapshot::from_market_data(&commodity, kind, &bars, bid, ask, now);
        if !snapshot.has_data() {
            return Err(QuoteError::ExternalDataUnavailable(format!(
                "{} returned no data for {}",
                self.provider.name(),
                symbol
            )));
        }

        tracing::info!(
            commodity = %commodity.name,
            symbol = %snapshot.symbol,
            price = ?snapshot.price,
            "Quote fetched"
        );
        self.cache.insert(commodity.name, snapshot.clone());
        Ok(snapshot)
    }

    /// Daily bars of the last `days` days for `name`, never cached
    pub fn history(&self, name: &str, days: usize) -> Result<Vec<PriceBar>> {
        let commodity = self
            .catalog
            .resolve(name)
            .ok_or_else(|| QuoteError::UnknownCommodity(name.to_string()))?;
        let symbol = commodity.symbol_for(self.provider.kind());

        let bars = self.provider.daily_bars(symbol, days)?;
        if bars.is_empty() {
            return Err(QuoteError::ExternalDataUnavailable(format!(
                "No data found for {}",
                symbol
            )));
        }

        tracing::info!(commodity = %commodity.name, symbol, days = bars.len(), "History fetched");
        Ok(bars)
    }

    /// Like [`lookup`](Self::lookup), turning any failure into a notice
    pub fn lookup_or_notice(&mut self, name: &str) -> QuoteOutcome {
        self.lookup_or_notice_at(name, Utc::now())
    }

    pub fn lookup_or_notice_at(&mut self, name: &str, now: DateTime<Utc>) -> QuoteOutcome {
        match self.lookup_at(name, now) {
            Ok(snapshot) => QuoteOutcome::Snapshot(snapshot),
            Err(err) => {
                tracing::warn!(commodity = %name, error = %err, "Quote lookup failed");
                QuoteOutcome::Notice(format!("Live quote unavailable: {}", err))
            }
        }
    }
}
