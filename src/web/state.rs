use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared server state: the single SQLite connection.
///
/// Each repository call takes the lock for the duration of one logical
/// operation; there is no other cross-request state.
pub struct AppState {
    pub pool: Mutex<DbPool>,
}

impl AppState {
    /// Wrap an already initialized pool.
    pub fn new(pool: DbPool) -> Arc<Self> {
        Arc::new(Self {
            pool: Mutex::new(pool),
        })
    }

    /// Open `db_path` and make sure the schema exists.
    pub fn open(db_path: &str) -> AppResult<Arc<Self>> {
        let pool = DbPool::new(db_path)?;
        init_db(&pool.conn)?;
        Ok(Self::new(pool))
    }
}
