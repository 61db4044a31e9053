//! The list of environment variables used throughout the application.

// Database environment variables
pub const DB_URL: &str = "ANIMAQU_DATABASE_URL";
pub const DB_POOL: &str = "ANIMAQU_DATABASE_POOL_SIZE";

// Content API environment variables
pub const ANIME_API_URL: &str = "ANIMAQU_ANIME_API_URL";
pub const COMIC_API_URL: &str = "ANIMAQU_COMIC_API_URL";
pub const HTTP_TIMEOUT_SECS: &str = "ANIMAQU_HTTP_TIMEOUT_SECS";

// Web environment variables
pub const WEB_HOST: &str = "ANIMAQU_WEB_HOST";
pub const WEB_PORT: &str = "ANIMAQU_WEB_PORT";

// Access control
pub const ACCOUNT_ROLES: &str = "ANIMAQU_ACCOUNT_ROLES";

// Miscellaneous
pub const LOG_FILTER: &str = "ANIMAQU_LOG_FILTER";
pub const LOG_DIR: &str = "ANIMAQU_LOG_DIR";
