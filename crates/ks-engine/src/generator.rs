//! Weighted symbol draws.

use ks_core::{SymbolDefinition, SymbolId, SymbolTable};

use crate::random::RandomSource;

/// Draws symbols from a [`SymbolTable`] in proportion to their weights.
///
/// The draw is a cumulative scan in catalog order: scale a unit sample by the
/// total weight, subtract weights one by one, and stop at the first entry that
/// takes the remainder to zero or below.
#[derive(Debug, Clone)]
pub struct SymbolGenerator {
    table: SymbolTable,
    total_weight: f64,
}

impl SymbolGenerator {
    /// Create a generator over `table`.
    pub fn new(table: SymbolTable) -> Self {
        let total_weight = table.total_weight();
        Self {
            table,
            total_weight,
        }
    }

    /// A generator over the reference catalog.
    pub fn standard() -> Self {
        Self::new(SymbolTable::standard())
    }

    /// The catalog this generator draws from.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Draw one symbol id.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SymbolId {
        self.pick(rng.next_unit())
    }

    /// Draw one symbol and return its full definition.
    pub fn draw_definition<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &SymbolDefinition {
        let id = self.draw(rng);
        self.table.get(id).unwrap_or_else(|| self.table.fallback())
    }

    /// Map a unit sample to a symbol. Samples outside `[0, 1)` are accepted;
    /// anything the scan cannot place lands on the fallback symbol.
    pub fn pick(&self, unit: f64) -> SymbolId {
        let mut remaining = unit * self.total_weight;
        for entry in self.table.iter() {
            remaining -= entry.weight;
            if remaining <= 0.0 {
                return entry.id;
            }
        }
        self.table.fallback().id
    }
}

impl Default for SymbolGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
