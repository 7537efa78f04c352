use anyhow::Result;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Builds a bounded pool. Connections are checked out per request and returned
/// when the guard drops.
pub fn establish_connection(database_url: &str, max_pool_size: u32) -> Result<PgPoolSquad> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(max_pool_size).build(manager)?;
    Ok(pool)
}
