//! Database connection and table creation using `SeaORM`.
//!
//! Tables are created with `Schema::create_table_from_entity`, so the
//! database schema is generated straight from the entity definitions without
//! hand-written SQL.

use crate::entities::{
    Attendance, Client, Enquiry, Fee, Membership, Profile, PtClient, Salary, Staff,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment, falling back to a local
/// `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/gymdesk.sqlite".to_string())
}

/// Establishes the database connection from [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates every table from its entity definition.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    db.execute(builder.build(&schema.create_table_from_entity(Profile)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Staff)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Client)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Enquiry)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Membership)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Fee)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(PtClient)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Salary)))
        .await?;
    db.execute(builder.build(&schema.create_table_from_entity(Attendance)))
        .await?;

    Ok(())
}
