mod config;
mod database;

use dotenvy::dotenv;

use config::ConnectionParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenv();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let params = match ConnectionParams::from_env() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Connecting to Postgres at {}:{} as user '{}'...",
        params.host,
        params.port,
        params.user
    );

    // Drizzle Kit owns table creation and migrations, and seed-db.mjs owns
    // data seeding; this binary only guarantees the database exists.
    match database::ensure_database(&params).await? {
        database::EnsureOutcome::Created => {
            log::info!("Created database '{}'", params.dbname);
        }
        database::EnsureOutcome::AlreadyExists => {
            log::info!("Database '{}' was already present", params.dbname);
        }
    }

    Ok(())
}
