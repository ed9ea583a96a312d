use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use taproom_db::{Entity, Stamp};
use time::PrimitiveDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Beer styles the catalogue knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Ale,
    PaleAle,
    Ipa,
    Wheat,
    Lager,
    Saison,
    Porter,
    Stout,
    Gose,
}

/// Persisted beer record. `Beer::default()` is an empty record.
///
/// `id`, `version` and both dates belong to the store and are only written
/// through [`Entity::stamp`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Beer {
    pub id: Option<Uuid>,
    pub version: Option<i64>,
    pub created_date: Option<PrimitiveDateTime>,
    pub last_modified_date: Option<PrimitiveDateTime>,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<i64>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
}

impl Entity for Beer {
    type Id = Uuid;

    const SORT_PROPERTIES: &'static [&'static str] = &[
        "beerName",
        "beerStyle",
        "upc",
        "price",
        "quantityOnHand",
        "createdDate",
        "lastModifiedDate",
    ];

    fn generate_id() -> Uuid {
        Uuid::new_v4()
    }

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn version(&self) -> Option<i64> {
        self.version
    }

    fn created_date(&self) -> Option<PrimitiveDateTime> {
        self.created_date
    }

    fn stamp(&mut self, stamp: Stamp<Uuid>) {
        self.id = Some(stamp.id);
        self.version = Some(stamp.version);
        self.created_date = Some(stamp.created_date);
        self.last_modified_date = Some(stamp.last_modified_date);
    }

    fn compare_by(&self, other: &Self, property: &str) -> Ordering {
        match property {
            "beerName" => self.beer_name.cmp(&other.beer_name),
            "beerStyle" => self.beer_style.cmp(&other.beer_style),
            "upc" => self.upc.cmp(&other.upc),
            "price" => self.price.cmp(&other.price),
            "quantityOnHand" => self.quantity_on_hand.cmp(&other.quantity_on_hand),
            "createdDate" => self.created_date.cmp(&other.created_date),
            "lastModifiedDate" => self.last_modified_date.cmp(&other.last_modified_date),
            _ => Ordering::Equal,
        }
    }
}
