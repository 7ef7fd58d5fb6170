/**
 * Seed Tool Entry Point
 *
 * Users and catalog rows are not created through the API. This binary
 * writes them directly into the datastore named by `DATABASE_URL`:
 *
 * ```text
 * starwars-seed --catalog
 * starwars-seed --email a@b.com --password x
 * ```
 */

mod sample;

use clap::Parser;
use starwars_api::backend::auth::password::hash_password;
use starwars_api::backend::auth::users::create_user;
use starwars_api::backend::catalog::db::{create_person, create_planet};
use starwars_api::backend::server::{config::ServerConfig, database::load_database, DbPool};

/// Populate the Star Wars API datastore
#[derive(Parser, Debug)]
#[command(name = "starwars-seed", version, about)]
struct Args {
    /// Email of a user to create
    #[arg(long, requires = "password")]
    email: Option<String>,

    /// Password of the user to create (stored as a bcrypt hash)
    #[arg(long, requires = "email")]
    password: Option<String>,

    /// Insert the sample planets and people
    #[arg(long)]
    catalog: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.email.is_none() && !args.catalog {
        tracing::warn!("Nothing to do: pass --catalog and/or --email/--password");
        return Ok(());
    }

    let config = ServerConfig::from_env()?;
    let pool = load_database(&config.database_url).await?;

    if args.catalog {
        seed_catalog(&pool).await?;
    }

    if let (Some(email), Some(password)) = (args.email, args.password) {
        let password_hash = hash_password(&password)?;
        let user = create_user(&pool, &email, &password_hash).await?;
        tracing::info!("Created user {} ({})", user.id, user.email);
    }

    Ok(())
}

async fn seed_catalog(pool: &DbPool) -> Result<(), sqlx::Error> {
    for planet in sample::PLANETS {
        let created = create_planet(pool, planet).await?;
        tracing::info!("Created planet {} ({})", created.id, created.name);
    }
    for person in sample::PEOPLE {
        let created = create_person(pool, person).await?;
        tracing::info!("Created person {} ({})", created.id, created.name);
    }
    Ok(())
}
