use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_location_details;
mod get_location_search;
mod get_location_search_autocomplete;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/location-search-autocomplete",
        get(get_location_search_autocomplete::get_location_search_autocomplete),
    )
    .route(
        "/location-details/:place_id",
        get(get_location_details::get_location_details),
    )
    .route(
        "/location-search",
        get(get_location_search::get_location_search),
    )
}
