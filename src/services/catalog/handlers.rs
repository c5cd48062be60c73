use {
    super::CatalogState,
    crate::{catalog::assemble, error::CatalogError, logger::RequestId, models::CatalogItem},
    actix_web::{get, web},
};

#[get("/{user_id}")]
pub async fn catalog(
    user_id: web::Path<String>,
    state: web::Data<CatalogState>,
    request_id: RequestId,
) -> Result<web::Json<Vec<CatalogItem>>, CatalogError> {
    tracing::info!(user_id = %user_id, "building catalog");

    let items = assemble(&state.movie_ids, &state.movie_info, &state.ratings)
        .await
        .map_err(|error| {
            tracing::error!(
                %request_id,
                movie_id = error.movie_id(),
                error = %error,
                cause = ?std::error::Error::source(&error).map(ToString::to_string),
                "catalog lookup failed"
            );
            error
        })?;

    Ok(web::Json(items))
}
