pub mod google_autocomplete_response;
pub mod google_place_details_response;
pub mod google_places_status;
pub mod google_text_search_response;
pub mod places_service_error;
