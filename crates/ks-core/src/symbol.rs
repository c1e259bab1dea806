//! Slot symbols and the weighted catalog they are drawn from.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier of a slot symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolId {
    /// Luna Coin.
    Coin,
    /// Fresh Fish.
    Fish,
    /// Milk Bottle.
    Milk,
    /// Chicken.
    Chicken,
    /// Yarn Ball.
    Yarn,
    /// Toy Mouse.
    Mouse,
    /// Cardboard Box.
    Box,
    /// Laser Pointer.
    Laser,
    /// Love.
    Heart,
    /// Lucky Star.
    Star,
    /// Rainbow.
    Rainbow,
    /// Lucky Paw.
    Paw,
}

impl SymbolId {
    /// All symbol ids in catalog order.
    pub const ALL: [SymbolId; 12] = [
        SymbolId::Coin,
        SymbolId::Fish,
        SymbolId::Milk,
        SymbolId::Chicken,
        SymbolId::Yarn,
        SymbolId::Mouse,
        SymbolId::Box,
        SymbolId::Laser,
        SymbolId::Heart,
        SymbolId::Star,
        SymbolId::Rainbow,
        SymbolId::Paw,
    ];

    /// The lowercase identifier, e.g. `"paw"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Fish => "fish",
            Self::Milk => "milk",
            Self::Chicken => "chicken",
            Self::Yarn => "yarn",
            Self::Mouse => "mouse",
            Self::Box => "box",
            Self::Laser => "laser",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Rainbow => "rainbow",
            Self::Paw => "paw",
        }
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SymbolId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownSymbol(s.to_string()))
    }
}

/// Which stats a symbol feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pays coins.
    Coin,
    /// Restores health.
    Health,
    /// Restores mood.
    Mood,
    /// Restores health and mood, and pays half its value in coins.
    Special,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coin => write!(f, "coin"),
            Self::Health => write!(f, "health"),
            Self::Mood => write!(f, "mood"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// One entry of the symbol catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    /// Catalog key.
    pub id: SymbolId,
    /// Display name.
    pub name: String,
    /// Which stats this symbol rewards.
    pub category: Category,
    /// Glyph shown on the reel.
    pub glyph: String,
    /// Relative draw weight, > 0.
    pub weight: f64,
    /// Reward amount, > 0.
    pub value: u32,
}

impl SymbolDefinition {
    /// Create a definition.
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        category: Category,
        glyph: impl Into<String>,
        weight: f64,
        value: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            glyph: glyph.into(),
            weight,
            value,
        }
    }
}

/// The immutable, ordered symbol catalog.
///
/// Iteration order is the order the entries were supplied in and is what the
/// weighted draw scans, so two tables with the same entries in a different
/// order produce different (equally distributed) draw sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolTable {
    entries: Vec<SymbolDefinition>,
    #[serde(skip)]
    fallback: usize,
}

impl SymbolTable {
    /// Symbol returned when a weighted draw runs off the end of the table.
    pub const FALLBACK: SymbolId = SymbolId::Coin;

    /// Build a table, validating every entry.
    pub fn new(entries: Vec<SymbolDefinition>) -> CoreResult<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyTable);
        }
        for (i, entry) in entries.iter().enumerate() {
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(CoreError::InvalidWeight {
                    symbol: entry.id,
                    weight: entry.weight,
                });
            }
            if entry.value == 0 {
                return Err(CoreError::ZeroValue(entry.id));
            }
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(CoreError::DuplicateSymbol(entry.id));
            }
        }
        let fallback = entries
            .iter()
            .position(|e| e.id == Self::FALLBACK)
            .ok_or(CoreError::MissingFallback(Self::FALLBACK))?;
        Ok(Self { entries, fallback })
    }

    /// The reference catalog. Weights sum to 1.0.
    pub fn standard() -> Self {
        use Category::{Coin, Health, Mood, Special};
        let entries = vec![
            SymbolDefinition::new(SymbolId::Coin, "Luna Coin", Coin, "🌛", 0.15, 10),
            SymbolDefinition::new(SymbolId::Fish, "Fresh Fish", Health, "🐟", 0.1, 8),
            SymbolDefinition::new(SymbolId::Milk, "Milk Bottle", Health, "🥛", 0.1, 6),
            SymbolDefinition::new(SymbolId::Chicken, "Chicken", Health, "🍗", 0.1, 7),
            SymbolDefinition::new(SymbolId::Yarn, "Yarn Ball", Mood, "🧶", 0.1, 8),
            SymbolDefinition::new(SymbolId::Mouse, "Toy Mouse", Mood, "🐭", 0.1, 6),
            SymbolDefinition::new(SymbolId::Box, "Cardboard Box", Mood, "📦", 0.1, 7),
            SymbolDefinition::new(SymbolId::Laser, "Laser Pointer", Mood, "💫", 0.1, 9),
            SymbolDefinition::new(SymbolId::Heart, "Love", Special, "❤️", 0.05, 12),
            SymbolDefinition::new(SymbolId::Star, "Lucky Star", Special, "⭐", 0.05, 15),
            SymbolDefinition::new(SymbolId::Rainbow, "Rainbow", Special, "🌈", 0.03, 20),
            SymbolDefinition::new(SymbolId::Paw, "Lucky Paw", Special, "🐾", 0.02, 25),
        ];
        Self {
            entries,
            fallback: 0,
        }
    }

    /// Look up a symbol.
    pub fn get(&self, id: SymbolId) -> Option<&SymbolDefinition> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolDefinition> {
        self.entries.iter()
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Normalized draw probability of a symbol, 0 if absent.
    pub fn probability(&self, id: SymbolId) -> f64 {
        self.get(id)
            .map(|e| e.weight / self.total_weight())
            .unwrap_or(0.0)
    }

    /// The fallback entry.
    pub fn fallback(&self) -> &SymbolDefinition {
        &self.entries[self.fallback]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
