//! Setup binary: prepares the database and seeds the admin profile so the
//! console can issue commands against a ready store.

use dotenvy::dotenv;
use gymdesk::config::{self, database};
use gymdesk::core::access;
use gymdesk::errors::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenv().ok();

    let settings = config::settings::load_default_settings()?;
    info!(gym = %settings.gym_name, "loaded settings");

    let db = database::create_connection().await?;
    database::create_tables(&db).await?;
    info!(url = %database::get_database_url(), "database ready");

    if let Some(admin) = &settings.admin {
        let profile = access::ensure_admin_profile(&db, &admin.user_id, &admin.full_name).await?;
        info!(user_id = %profile.user_id, "admin profile in place");
    }

    Ok(())
}
