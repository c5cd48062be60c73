use {
    crate::{
        clients::{MovieInfoSource, RatingsSource},
        error::CatalogError,
        models::CatalogItem,
    },
    futures::{future::try_join, TryFutureExt as _},
    tracing_futures::Instrument as _,
};

/// Placeholder until movie-info exposes a description.
pub const DESCRIPTION: &str = "Description";

/// Builds one [`CatalogItem`] per identifier, in the order given.
///
/// Both lookups for an identifier run concurrently and must both succeed;
/// identifiers are handled one at a time. The first failure aborts the whole
/// catalog.
pub async fn assemble<M, R>(
    movie_ids: &[String],
    movie_info: &M,
    ratings: &R,
) -> Result<Vec<CatalogItem>, CatalogError>
where
    M: MovieInfoSource,
    R: RatingsSource,
{
    let mut items = Vec::with_capacity(movie_ids.len());

    for movie_id in movie_ids {
        let movie = movie_info
            .movie(movie_id)
            .map_err(|source| CatalogError::MovieInfo {
                movie_id: movie_id.clone(),
                source,
            });
        let rating = ratings
            .rating(movie_id)
            .map_err(|source| CatalogError::Ratings {
                movie_id: movie_id.clone(),
                source,
            });

        let (movie, rating) = try_join(movie, rating)
            .instrument(tracing::debug_span!("movie", movie_id = %movie_id))
            .await?;

        items.push(CatalogItem::new(movie.name, DESCRIPTION, rating.rating));
    }

    Ok(items)
}
