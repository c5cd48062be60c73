use {
    actix_web::{web, App, HttpServer},
    clap::Parser as _,
    movie_catalog::{
        config::{Args, CatalogConfig},
        logger::{self, TracingLogger},
        services::{self, CatalogState},
    },
};

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = CatalogConfig::from(&Args::parse());

    logger::init(&config.log_filter)?;

    tracing::info!(
        listen = %config.listen_addr,
        movie_info = %config.movie_info_url,
        ratings = %config.ratings_url,
        movie_ids = ?config.movie_ids,
        "starting movie catalog"
    );

    let state = web::Data::new(CatalogState::new(&config)?);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(services::catalog())
            .wrap(TracingLogger)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(config.listen_addr.as_str())?.run().await?;

    Ok(())
}
