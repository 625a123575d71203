//! Common domain types for the Wallex API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Limit order - execute at specified price or better
    Limit,
    /// Market order - execute immediately at best available price
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Market => write!(f, "MARKET"),
        }
    }
}

/// Candle resolution, as the token the UDF history endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Resolution {
    /// 1 minute
    Minute,
    /// 1 hour
    Hour,
    /// 3 hours
    ThreeHours,
    /// 6 hours
    SixHours,
    /// 12 hours
    TwelveHours,
    /// 1 day
    Day,
}

impl Resolution {
    /// The wire token for this resolution.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Minute => "1",
            Resolution::Hour => "60",
            Resolution::ThreeHours => "180",
            Resolution::SixHours => "360",
            Resolution::TwelveHours => "720",
            Resolution::Day => "1D",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> String {
        resolution.as_str().to_string()
    }
}

impl TryFrom<String> for Resolution {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "1" => Ok(Resolution::Minute),
            "60" => Ok(Resolution::Hour),
            "180" => Ok(Resolution::ThreeHours),
            "360" => Ok(Resolution::SixHours),
            "720" => Ok(Resolution::TwelveHours),
            "1D" => Ok(Resolution::Day),
            _ => Err(format!("Invalid candle resolution: {}", value)),
        }
    }
}
