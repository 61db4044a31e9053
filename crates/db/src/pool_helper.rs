//! Private helper functions to aid in building the [DbPool].

use crate::DbPool;
use animaqu_common::environment::{
    get_env_var, get_env_var_or,
    variables::{DB_POOL, DB_URL},
};
use anyhow::{Context, Result};
use diesel::{
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};

const DB_POOL_DEFAULT: u32 = 20;

pub fn build_pool() -> Result<DbPool> {
    let database_url = get_env_var(DB_URL).context(format!("{} must be set.", DB_URL))?;
    let pool_size = get_env_var_or(DB_POOL, DB_POOL_DEFAULT)?;

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(pool_size)
        .build(manager)
        .context(format!(
            "Failed to start the connection pool. Is {} correct?",
            DB_URL
        ))?;
    tracing::debug!(pool_size, "Built the database connection pool.");
    Ok(pool)
}
