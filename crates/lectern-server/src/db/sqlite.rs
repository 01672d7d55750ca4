use diesel_migrations::EmbeddedMigrations;

/// Course database schema for SQLite.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/sqlite");

#[cfg(test)]
mod tests;
