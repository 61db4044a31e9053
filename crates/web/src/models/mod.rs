pub mod anime_pages;
pub mod community;
