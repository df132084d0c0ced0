use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "kanri.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory and brings the
    /// schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let mut conn = Connection::open(db_file_path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the database without applying migrations. Used by the debug
    /// migrations command to inspect schema state.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        Ok(Connection::open(db_file_path)?)
    }
}
