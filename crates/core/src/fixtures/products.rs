//! Product Fixtures

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "79.99 USD")
    pub price: String,

    /// Display glyph
    pub image: String,

    /// Display category
    pub category: String,
}

/// Build a catalog from product fixture YAML.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed, a price is invalid, products use
/// different currencies, the fixture is empty, or the products do not form a valid
/// catalog.
pub fn load_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut currency: Option<&'static Currency> = None;
    let mut products = Vec::with_capacity(fixture.products.len());

    for product_fixture in fixture.products {
        let (price, parsed_currency) = parse_price(&product_fixture.price)?;

        if let Some(existing_currency) = currency
            && existing_currency != parsed_currency
        {
            return Err(FixtureError::CurrencyMismatch(
                existing_currency.iso_alpha_code.to_string(),
                parsed_currency.iso_alpha_code.to_string(),
            ));
        }

        currency = Some(parsed_currency);

        products.push(Product {
            id: ProductId::new(product_fixture.id),
            name: product_fixture.name,
            price,
            image: product_fixture.image,
            category: product_fixture.category,
        });
    }

    let currency = currency.ok_or(FixtureError::NoProducts)?;

    Ok(Catalog::new(products, currency)?)
}

/// Parse price string (e.g., "2.99 GBP") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the
/// amount is not a decimal with at most two fractional digits, or if the currency
/// code is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.scale() > 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "More than two decimal places: {s}"
        )));
    }

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((amount, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::CatalogError;

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_sub_cent_amounts() {
        let result = parse_price("2.999 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_accepts_usd_and_eur() -> Result<(), FixtureError> {
        let (usd_amount, usd) = parse_price("1.00 USD")?;
        let (eur_amount, eur) = parse_price("2.5 EUR")?;

        assert_eq!(usd_amount, Decimal::new(100, 2));
        assert_eq!(usd, USD);
        assert_eq!(eur_amount, Decimal::new(250, 2));
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn load_catalog_keeps_fixture_order() -> TestResult {
        let yaml = r#"
products:
  - id: 9
    name: Zebra Mug
    price: 5.00 GBP
    image: "☕"
    category: Kitchen
  - id: 2
    name: Apron
    price: 12.50 GBP
    image: "🧑‍🍳"
    category: Kitchen
"#;

        let catalog = load_catalog(yaml)?;

        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.get()).collect();

        assert_eq!(ids, [9, 2]);
        assert_eq!(catalog.currency(), GBP);

        Ok(())
    }

    #[test]
    fn load_catalog_rejects_mixed_currencies() {
        let yaml = r#"
products:
  - id: 1
    name: A
    price: 1.00 GBP
    image: "a"
    category: X
  - id: 2
    name: B
    price: 1.00 USD
    image: "b"
    category: X
"#;

        let result = load_catalog(yaml);

        assert!(
            matches!(&result, Err(FixtureError::CurrencyMismatch(expected, found)) if expected == "GBP" && found == "USD"),
            "expected CurrencyMismatch, got {result:?}"
        );
    }

    #[test]
    fn load_catalog_rejects_empty_fixture() {
        let result = load_catalog("products: []");

        assert!(matches!(result, Err(FixtureError::NoProducts)));
    }

    #[test]
    fn load_catalog_rejects_duplicate_ids() {
        let yaml = r#"
products:
  - id: 1
    name: A
    price: 1.00 USD
    image: "a"
    category: X
  - id: 1
    name: B
    price: 2.00 USD
    image: "b"
    category: X
"#;

        let result = load_catalog(yaml);

        assert!(
            matches!(
                result,
                Err(FixtureError::Catalog(CatalogError::DuplicateProduct(id))) if id == ProductId::new(1)
            ),
            "expected duplicate product error"
        );
    }

    #[test]
    fn load_catalog_rejects_invalid_yaml() {
        let result = load_catalog("products: [[[");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}
