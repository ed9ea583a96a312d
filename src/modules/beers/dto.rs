use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use taproom_http::validation::{Constraint, FieldValue, Validate, Violation, Violations};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use super::models::BeerStyle;

/// Wire shape of a beer. Every field is always serialized, absent values as `null`.
///
/// The schema carries the same rules [`Validate`] enforces on requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    /// Id of Beer
    #[schema(read_only)]
    pub id: Option<Uuid>,

    /// Version number
    #[schema(read_only)]
    pub version: Option<i64>,

    /// Date Created
    #[schema(read_only)]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_date: Option<OffsetDateTime>,

    /// Date Updated
    #[schema(read_only)]
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified_date: Option<OffsetDateTime>,

    /// Beer Name
    #[schema(required = true, nullable = false, min_length = 1, example = "Nice Ale")]
    pub beer_name: Option<String>,

    /// Beer Style
    #[schema(required = true, nullable = false)]
    pub beer_style: Option<BeerStyle>,

    /// UPC of Beer
    #[schema(
        required = true,
        nullable = false,
        exclusive_minimum = 0,
        example = 123456789012_i64
    )]
    pub upc: Option<i64>,

    /// Price, a decimal greater than 0
    #[schema(required = true, nullable = false, example = "9.99")]
    pub price: Option<Decimal>,

    /// Quantity On hand
    #[schema(minimum = 0)]
    pub quantity_on_hand: Option<i32>,
}

impl BeerDto {
    /// Drop the fields only the store may assign.
    pub fn without_server_fields(self) -> Self {
        Self {
            id: None,
            version: None,
            created_date: None,
            last_modified_date: None,
            ..self
        }
    }
}

impl Validate for BeerDto {
    fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Violations::new();
        violations
            .check(
                "beerName",
                FieldValue::text(self.beer_name.as_deref()),
                &[Constraint::NotBlank],
            )
            .check(
                "beerStyle",
                FieldValue::present(self.beer_style.as_ref()),
                &[Constraint::NotNull],
            )
            .check(
                "upc",
                FieldValue::number(self.upc.as_ref(), &0),
                &[Constraint::NotNull, Constraint::Positive],
            )
            .check(
                "price",
                FieldValue::number(self.price.as_ref(), &Decimal::ZERO),
                &[Constraint::NotNull, Constraint::Positive],
            )
            .check(
                "quantityOnHand",
                FieldValue::number(self.quantity_on_hand.as_ref(), &0),
                &[Constraint::PositiveOrZero],
            );
        violations.into_result()
    }
}
