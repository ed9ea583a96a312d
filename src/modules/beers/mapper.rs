//! Conversions between the stored [`Beer`] and its wire shape [`BeerDto`].

use super::dto::BeerDto;
use super::models::Beer;

pub fn entity_to_dto(beer: Beer) -> BeerDto {
    let Beer {
        id,
        version,
        created_date,
        last_modified_date,
        beer_name,
        beer_style,
        upc,
        price,
        quantity_on_hand,
    } = beer;

    BeerDto {
        id,
        version,
        created_date: created_date.map(date_mapper::as_offset_date_time),
        last_modified_date: last_modified_date.map(date_mapper::as_offset_date_time),
        beer_name,
        beer_style,
        upc,
        price,
        quantity_on_hand,
    }
}

pub fn dto_to_entity(dto: BeerDto) -> Beer {
    let BeerDto {
        id,
        version,
        created_date,
        last_modified_date,
        beer_name,
        beer_style,
        upc,
        price,
        quantity_on_hand,
    } = dto;

    Beer {
        id,
        version,
        created_date: created_date.map(date_mapper::as_timestamp),
        last_modified_date: last_modified_date.map(date_mapper::as_timestamp),
        beer_name,
        beer_style,
        upc,
        price,
        quantity_on_hand,
    }
}

/// Copy the client-editable fields of `dto` onto `beer`.
///
/// Id, version and dates stay as stored.
pub fn apply_update(dto: BeerDto, beer: &mut Beer) {
    let BeerDto {
        beer_name,
        beer_style,
        upc,
        price,
        quantity_on_hand,
        ..
    } = dto;

    beer.beer_name = beer_name;
    beer.beer_style = beer_style;
    beer.upc = upc;
    beer.price = price;
    beer.quantity_on_hand = quantity_on_hand;
}

/// Stored dates are UTC wall-clock values.
pub mod date_mapper {
    use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

    pub fn as_offset_date_time(timestamp: PrimitiveDateTime) -> OffsetDateTime {
        timestamp.assume_utc()
    }

    pub fn as_timestamp(date_time: OffsetDateTime) -> PrimitiveDateTime {
        let utc = date_time.to_offset(UtcOffset::UTC);
        PrimitiveDateTime::new(utc.date(), utc.time())
    }
}
