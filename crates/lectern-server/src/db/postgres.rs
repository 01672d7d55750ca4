use diesel_migrations::EmbeddedMigrations;

/// Course database schema for PostgreSQL.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/postgres");
