//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price in the catalog currency
    pub price: Decimal,

    /// Display glyph
    pub image: String,

    /// Display category
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn product_id_serializes_as_bare_number() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&ProductId::from(7))?;

        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<ProductId>("7")?, ProductId::new(7));

        Ok(())
    }
}
