//! Commodity display names and their provider symbols

use serde::{Deserialize, Serialize};

/// Market-data provider a symbol belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Futures tickers such as `GC=F`
    YahooFinance,
    /// Spot instruments such as `OANDA:XAU_USD`
    Finnhub,
}

/// A commodity shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commodity {
    /// Display name
    pub name: String,
    /// Yahoo Finance futures symbol
    pub yahoo_symbol: String,
    /// Finnhub spot symbol
    pub finnhub_symbol: String,
}

impl Commodity {
    /// Create a commodity entry
    pub fn new(name: &str, yahoo_symbol: &str, finnhub_symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            yahoo_symbol: yahoo_symbol.to_string(),
            finnhub_symbol: finnhub_symbol.to_string(),
        }
    }

    /// Symbol of this commodity at the given provider
    pub fn symbol_for(&self, provider: ProviderKind) -> &str {
        match provider {
            ProviderKind::YahooFinance => &self.yahoo_symbol,
            ProviderKind::Finnhub => &self.finnhub_symbol,
        }
    }
}

/// Ordered list of supported commodities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommodityCatalog {
    commodities: Vec<Commodity>,
}

impl Default for CommodityCatalog {
    fn default() -> Self {
        Self::new(vec![
            Commodity::new("Gold", "GC=F", "OANDA:XAU_USD"),
            Commodity::new("Silver", "SI=F", "OANDA:XAG_USD"),
            Commodity::new("Wheat", "ZW=F", "OANDA:XW1_USD"),
            Commodity::new("Crude Oil", "CL=F", "OANDA:XWT_USD"),
            Commodity::new("Natural Gas", "NG=F", "OANDA:XNG_USD"),
            Commodity::new("Copper", "HG=F", "OANDA:XCU_USD"),
        ])
    }
}

impl CommodityCatalog {
    /// Create a catalog from explicit entries
    pub fn new(commodities: Vec<Commodity>) -> Self {
        Self { commodities }
    }

    /// Display names, in display order
    pub fn names(&self) -> Vec<&str> {
        self.commodities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Find a commodity by display name, ignoring case and surrounding spaces
    pub fn resolve(&self, name: &str) -> Option<&Commodity> {
        let name = name.trim();
        self.commodities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
