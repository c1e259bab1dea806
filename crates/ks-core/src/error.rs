use crate::symbol::SymbolId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building catalogs or parsing identifiers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A symbol table must contain at least one symbol.
    #[error("symbol table is empty")]
    EmptyTable,

    /// A symbol weight was zero, negative, or not finite.
    #[error("invalid weight {weight} for symbol {symbol}")]
    InvalidWeight {
        /// The offending symbol.
        symbol: SymbolId,
        /// The rejected weight.
        weight: f64,
    },

    /// A symbol must reward a positive value.
    #[error("symbol {0} has a zero value")]
    ZeroValue(SymbolId),

    /// The same symbol id appeared twice in a table.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(SymbolId),

    /// The fallback symbol is missing from the table.
    #[error("symbol table has no fallback symbol ({0})")]
    MissingFallback(SymbolId),

    /// A string did not name a known symbol.
    #[error("unknown symbol: \"{0}\"")]
    UnknownSymbol(String),

    /// A string did not name a known shop item.
    #[error("unknown shop item: \"{0}\"")]
    UnknownItem(String),
}
