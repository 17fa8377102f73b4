// src/services/pricing.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::tour::validate_not_negative;

// Adicional por assento preferencial (fileira da frente), em ienes.
pub const PREFERRED_SEAT_PRICE: i64 = 500;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricePreviewPayload {
    #[validate(range(min = 1, message = "O grupo precisa ter ao menos 1 pessoa."))]
    pub passengers: u32,

    #[validate(custom(function = "validate_not_negative"))]
    pub price_per_person: Decimal,

    #[serde(default)]
    pub preferred_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub seat_upcharge: Decimal,
    pub total: Decimal,
}

/// Preço total: (pessoas × preço unitário) + (assentos preferenciais × ¥500).
pub fn calculate_total_price(
    passengers: u32,
    price_per_person: Decimal,
    preferred_seats: u32,
) -> PriceBreakdown {
    let base_price = Decimal::from(passengers) * price_per_person;
    let seat_upcharge = Decimal::from(preferred_seats) * Decimal::from(PREFERRED_SEAT_PRICE);
    PriceBreakdown {
        base_price,
        seat_upcharge,
        total: base_price + seat_upcharge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_includes_seat_upcharge() {
        let quote = calculate_total_price(2, Decimal::from(12000), 1);

        assert_eq!(quote.base_price, Decimal::from(24000));
        assert_eq!(quote.seat_upcharge, Decimal::from(500));
        assert_eq!(quote.total, Decimal::from(24500));
    }

    #[test]
    fn quote_without_preferred_seats_is_just_the_base() {
        let quote = calculate_total_price(3, Decimal::from(8000), 0);

        assert_eq!(quote.seat_upcharge, Decimal::ZERO);
        assert_eq!(quote.total, Decimal::from(24000));
    }
}
