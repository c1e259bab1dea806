//! The fixed shop catalog.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An item sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopItem {
    /// Raises health and mood.
    Growth,
    /// Raises health.
    Health,
    /// Raises mood.
    Mood,
}

/// Price and benefits of a shop item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDefinition {
    /// Which item this describes.
    pub item: ShopItem,
    /// Display name.
    pub name: &'static str,
    /// Glyph shown on the shop button.
    pub glyph: &'static str,
    /// Price in coins.
    pub cost: u64,
    /// Health restored on purchase.
    pub health: f64,
    /// Mood restored on purchase.
    pub mood: f64,
}

impl ShopItem {
    /// All items in shop order.
    pub const ALL: [ShopItem; 3] = [ShopItem::Growth, ShopItem::Health, ShopItem::Mood];

    /// The lowercase identifier, e.g. `"growth"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Health => "health",
            Self::Mood => "mood",
        }
    }

    /// Price and benefits.
    pub fn definition(self) -> ItemDefinition {
        match self {
            Self::Growth => ItemDefinition {
                item: self,
                name: "Growth Pack",
                glyph: "📦",
                cost: 50,
                health: 20.0,
                mood: 20.0,
            },
            Self::Health => ItemDefinition {
                item: self,
                name: "Health Pack",
                glyph: "💊",
                cost: 30,
                health: 40.0,
                mood: 0.0,
            },
            Self::Mood => ItemDefinition {
                item: self,
                name: "Mood Pack",
                glyph: "🎈",
                cost: 20,
                health: 0.0,
                mood: 40.0,
            },
        }
    }

    /// Price in coins.
    pub fn cost(self) -> u64 {
        self.definition().cost
    }

    /// Whether `coins` covers the price.
    pub fn affordable(self, coins: u64) -> bool {
        coins >= self.cost()
    }

    /// Parse an item id like `"growth"`, case-insensitively.
    pub fn parse(s: &str) -> CoreResult<Self> {
        s.parse()
    }
}

impl std::fmt::Display for ShopItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShopItem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "growth" => Ok(Self::Growth),
            "health" => Ok(Self::Health),
            "mood" => Ok(Self::Mood),
            _ => Err(CoreError::UnknownItem(s.to_string())),
        }
    }
}
