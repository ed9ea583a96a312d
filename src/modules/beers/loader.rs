//! Sample catalogue written on first start.

use rust_decimal::Decimal;
use taproom_db::RepositoryError;

use super::models::{Beer, BeerStyle};
use super::repository::BeerRepository;

fn sample_beers() -> [Beer; 3] {
    [
        Beer {
            beer_name: Some("Mango Bobs".to_string()),
            beer_style: Some(BeerStyle::Ale),
            upc: Some(337_010_000_001),
            price: Some(Decimal::new(1295, 2)),
            quantity_on_hand: Some(144),
            ..Beer::default()
        },
        Beer {
            beer_name: Some("Galaxy Cat".to_string()),
            beer_style: Some(BeerStyle::PaleAle),
            upc: Some(337_010_000_002),
            price: Some(Decimal::new(1195, 2)),
            quantity_on_hand: Some(36),
            ..Beer::default()
        },
        Beer {
            beer_name: Some("Pinball Porter".to_string()),
            beer_style: Some(BeerStyle::Porter),
            upc: Some(337_010_000_003),
            price: Some(Decimal::new(1095, 2)),
            quantity_on_hand: Some(72),
            ..Beer::default()
        },
    ]
}

/// Seed the store unless it already holds beers. Returns how many were written.
pub async fn load_sample_beers(repository: &BeerRepository) -> Result<usize, RepositoryError> {
    let existing = repository.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "beer store already populated, skipping samples");
        return Ok(0);
    }

    let mut written = 0;
    for beer in sample_beers() {
        let saved = repository.save(beer).await?;
        tracing::debug!(beer_id = ?saved.id, name = ?saved.beer_name, "sample beer saved");
        written += 1;
    }

    tracing::info!(written, "sample beers loaded");
    Ok(written)
}
