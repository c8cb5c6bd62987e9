//! Decorative stock ticker quotes.

use rand::{Rng, RngCore};

/// Milliseconds between ticker refreshes.
pub const TICKER_REFRESH_MS: u64 = 10_000;

const UP_PROBABILITY: f64 = 0.7;

/// Which way a symbol's arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerDirection {
    /// Always rendered as a gain.
    AlwaysUp,
    /// Always rendered as a loss.
    AlwaysDown,
    /// Gain with 70% probability, otherwise a loss.
    Random,
}

/// Size of the displayed percentage change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickerMagnitude {
    /// Uniform in `[min, max)`, shown with one decimal.
    Range {
        /// Inclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },
    /// Constant text.
    Fixed(&'static str),
}

/// One ticker symbol and its quote policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerSymbol {
    /// Display symbol.
    pub symbol: &'static str,
    /// Arrow policy.
    pub direction: TickerDirection,
    /// Change policy.
    pub magnitude: TickerMagnitude,
}

const DEFAULT_MAGNITUDE: TickerMagnitude = TickerMagnitude::Range { min: 0.0, max: 10.0 };

const fn symbol(
    symbol: &'static str,
    direction: TickerDirection,
    magnitude: TickerMagnitude,
) -> TickerSymbol {
    TickerSymbol {
        symbol,
        direction,
        magnitude,
    }
}

/// Symbols in display order.
pub const TICKER_SYMBOLS: [TickerSymbol; 9] = [
    symbol("VIBES.NYC", TickerDirection::AlwaysUp, DEFAULT_MAGNITUDE),
    symbol("COFFEE.FUEL", TickerDirection::AlwaysUp, DEFAULT_MAGNITUDE),
    symbol("JPMC.EXP", TickerDirection::AlwaysUp, DEFAULT_MAGNITUDE),
    symbol("STRESS.LVL", TickerDirection::AlwaysDown, DEFAULT_MAGNITUDE),
    symbol("PROCRASTN8", TickerDirection::AlwaysDown, DEFAULT_MAGNITUDE),
    symbol(
        "BANKING",
        TickerDirection::Random,
        TickerMagnitude::Range {
            min: 200.0,
            max: 700.0,
        },
    ),
    symbol(
        "STRESSLVL",
        TickerDirection::Random,
        TickerMagnitude::Range { min: 0.0, max: 20.0 },
    ),
    symbol(
        "DEBUGSKILL",
        TickerDirection::Random,
        TickerMagnitude::Range { min: 0.0, max: 2.0 },
    ),
    symbol(
        "NYUGPA",
        TickerDirection::Random,
        TickerMagnitude::Fixed("3.867"),
    ),
];

/// A rendered quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerQuote {
    /// Display symbol.
    pub symbol: &'static str,
    /// Whether the arrow points up.
    pub up: bool,
    /// Percentage text without the `%` sign.
    pub change: String,
}

impl TickerSymbol {
    /// Draws a fresh quote.
    pub fn quote(&self, rng: &mut dyn RngCore) -> TickerQuote {
        let up = match self.direction {
            TickerDirection::AlwaysUp => true,
            TickerDirection::AlwaysDown => false,
            TickerDirection::Random => rng.random_bool(UP_PROBABILITY),
        };
        let change = match self.magnitude {
            TickerMagnitude::Range { min, max } => format!("{:.1}", rng.random_range(min..max)),
            TickerMagnitude::Fixed(text) => text.to_string(),
        };
        TickerQuote {
            symbol: self.symbol,
            up,
            change,
        }
    }
}

impl TickerQuote {
    /// `SYMBOL <span class="up">↑ X.X%</span>` or the `down` equivalent.
    pub fn markup(&self) -> String {
        let (class, arrow) = if self.up { ("up", '↑') } else { ("down", '↓') };
        format!(
            r#"{} <span class="{class}">{arrow} {}%</span>"#,
            self.symbol, self.change
        )
    }
}

/// Quotes every symbol in [`TICKER_SYMBOLS`].
pub fn quote_all(rng: &mut dyn RngCore) -> Vec<TickerQuote> {
    TICKER_SYMBOLS
        .iter()
        .map(|symbol| symbol.quote(rng))
        .collect()
}
