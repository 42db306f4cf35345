//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{cart::LineItem, products::ProductId};

/// Number of fractional digits prices are shown and totalled with.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Price × quantity for a line does not fit in a decimal.
    #[error("line total for product {0} overflowed")]
    LineOverflow(ProductId),

    /// The sum of line totals does not fit in a decimal.
    #[error("cart total overflowed")]
    TotalOverflow,
}

/// Calculates price × quantity for a single line.
///
/// # Errors
///
/// Returns [`PricingError::LineOverflow`] if the multiplication overflows.
pub fn line_total(item: &LineItem) -> Result<Decimal, PricingError> {
    item.price()
        .checked_mul(Decimal::from(item.quantity()))
        .ok_or(PricingError::LineOverflow(item.id()))
}

/// Calculates the total price of a list of line items, rounded to cents.
///
/// An empty list totals `0.00`.
///
/// # Errors
///
/// - [`PricingError::LineOverflow`]: a line total overflowed.
/// - [`PricingError::TotalOverflow`]: the running sum overflowed.
pub fn total_price(items: &[LineItem]) -> Result<Decimal, PricingError> {
    let total = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(line_total(item)?)
            .ok_or(PricingError::TotalOverflow)
    })?;

    Ok(round_to_cents(total))
}

/// Round an amount to two decimal places, halves away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    rounded.rescale(PRICE_DECIMAL_PLACES);

    rounded
}

/// Express an amount as money in `currency`.
pub fn to_money(amount: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(amount, currency)
}

/// Format an amount for display, e.g. `$12.50` or `12.50 JPY`.
pub fn format_price(amount: Decimal, currency: &Currency) -> String {
    let rounded = round_to_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = rounded.abs();
    let currency_code = currency.iso_alpha_code;
    let symbol = match currency_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{magnitude} {currency_code}")
    } else {
        format!("{sign}{symbol}{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        products::{Product, ProductId},
    };

    use super::*;

    fn cart_with(lines: &[(u32, i64, u32)]) -> Cart {
        Cart::from_items(lines.iter().map(|&(id, cents, quantity)| {
            let mut item = LineItem::from_product(&Product {
                id: ProductId::new(id),
                name: format!("Product {id}"),
                price: Decimal::new(cents, 2),
                image: String::new(),
                category: String::new(),
            });
            item.set_quantity(quantity);
            item
        }))
    }

    #[test]
    fn total_price_sums_price_times_quantity() -> TestResult {
        let cart = cart_with(&[(1, 7999, 2), (4, 1299, 3)]);

        assert_eq!(total_price(cart.items())?, Decimal::new(19_895, 2));

        Ok(())
    }

    #[test]
    fn total_price_empty_is_zero_with_two_places() -> TestResult {
        let total = total_price(&[])?;

        assert_eq!(total, Decimal::ZERO);
        assert_eq!(total.to_string(), "0.00");

        Ok(())
    }

    #[test]
    fn total_price_reports_overflow() {
        let mut item = LineItem::from_product(&Product {
            id: ProductId::new(1),
            name: String::new(),
            price: Decimal::MAX,
            image: String::new(),
            category: String::new(),
        });
        item.set_quantity(2);

        assert_eq!(
            total_price(&[item]),
            Err(PricingError::LineOverflow(ProductId::new(1)))
        );
    }

    #[test]
    fn round_to_cents_rounds_halves_away_from_zero() {
        assert_eq!(round_to_cents(Decimal::new(1005, 3)).to_string(), "1.01");
        assert_eq!(round_to_cents(Decimal::new(1004, 3)).to_string(), "1.00");
        assert_eq!(round_to_cents(Decimal::new(3, 0)).to_string(), "3.00");
    }

    #[test]
    fn to_money_keeps_amount_and_currency() {
        let money = to_money(Decimal::new(1250, 2), iso::GBP);

        assert_eq!(*money.amount(), Decimal::new(1250, 2));
        assert_eq!(money.currency(), iso::GBP);
    }

    #[test]
    fn format_price_known_currencies() {
        assert_eq!(format_price(Decimal::new(1250, 2), iso::GBP), "£12.50");
        assert_eq!(format_price(Decimal::new(999, 2), iso::USD), "$9.99");
        assert_eq!(format_price(Decimal::new(50, 0), iso::EUR), "€50.00");
    }

    #[test]
    fn format_price_zero() {
        assert_eq!(format_price(Decimal::ZERO, iso::USD), "$0.00");
    }

    #[test]
    fn format_price_negative() {
        assert_eq!(format_price(Decimal::new(-1250, 2), iso::GBP), "-£12.50");
    }

    #[test]
    fn format_price_unknown_currency() {
        assert_eq!(format_price(Decimal::new(1250, 2), iso::JPY), "12.50 JPY");
    }

    #[test]
    fn format_price_large_amount() {
        assert_eq!(format_price(Decimal::new(123_456, 2), iso::USD), "$1234.56");
    }
}
