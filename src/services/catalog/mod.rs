pub mod handlers;

use {
    crate::{
        clients::{MovieInfoClient, RatingsClient},
        config::CatalogConfig,
    },
    actix_web::{dev::HttpServiceFactory, web},
    reqwest::Client,
};

/// Shared by every worker; built once at startup.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub movie_ids: Vec<String>,
    pub movie_info: MovieInfoClient,
    pub ratings: RatingsClient,
}

impl CatalogState {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            movie_ids: config.movie_ids.clone(),
            movie_info: MovieInfoClient::new(http.clone(), config.movie_info_url.clone()),
            ratings: RatingsClient::new(http, config.ratings_url.clone()),
        })
    }
}

pub fn service() -> impl HttpServiceFactory + 'static {
    web::scope("/catalog").service(handlers::catalog)
}
