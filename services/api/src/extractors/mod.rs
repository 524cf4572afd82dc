mod database;

pub use database::ReadOnlyDatabaseConnection;
