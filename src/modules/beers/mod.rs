//! Beer catalogue: create, read and update beers over `/api/v1/beer`.

pub mod dto;
pub mod loader;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use taproom_kernel::{InitCtx, Module};
use utoipa::OpenApi;

use repository::BeerRepository;

pub struct BeersModule {
    repository: Arc<BeerRepository>,
}

impl BeersModule {
    pub fn new(repository: Arc<BeerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Module for BeersModule {
    fn name(&self) -> &'static str {
        "beers"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.store.seed {
            loader::load_sample_beers(&*self.repository).await?;
        } else {
            tracing::debug!("sample beers disabled");
        }
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(Arc::clone(&self.repository))
    }

    fn openapi(&self) -> Option<utoipa::openapi::OpenApi> {
        Some(routes::BeerApi::openapi())
    }
}

pub fn create_module(repository: Arc<BeerRepository>) -> Arc<dyn Module> {
    Arc::new(BeersModule::new(repository))
}
