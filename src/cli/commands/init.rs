use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::count_cafes;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its `cafe` table, if absent
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = &cfg.database;

    println!("⚙️  Initializing rcafes…");
    println!("🗄️  Database   : {}", db_path);

    let pool = DbPool::new(db_path)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", db_path));
    info(format!("Cafes stored: {}", count_cafes(&pool.conn)?));
    Ok(())
}
