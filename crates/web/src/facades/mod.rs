//! Services that turn content API payloads and database rows into what the routes return.

pub mod anime_facade;
pub mod community_facade;
