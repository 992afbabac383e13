use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing punchclock…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Audit row, non blocking.
    if let Err(e) = ttlog(
        &conn,
        "init",
        &db_path,
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 punchclock initialization completed!");
    Ok(())
}
