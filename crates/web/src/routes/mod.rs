pub mod admin_routes;
pub mod anime_routes;
pub mod comic_routes;
pub mod community_routes;
mod event_stream;
