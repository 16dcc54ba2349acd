use portfolio_shared::models::City;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;

const CITIES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cities");

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] redb::Error),
    #[error("failed to encode city: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Funnel every redb error type through `redb::Error`.
fn db_err<E: Into<redb::Error>>(e: E) -> StorageError {
    StorageError::Database(e.into())
}

pub struct Storage {
    db: Database,
}

impl Storage {
    pub fn open(path: &Path) -> Result<Arc<Self>, StorageError> {
        let db = Database::create(path).map_err(db_err)?;

        // Ensure table exists so read transactions never hit a missing table
        let write_txn = db.begin_write().map_err(db_err)?;
        {
            write_txn.open_table(CITIES_TABLE).map_err(db_err)?;
        }
        write_txn.commit().map_err(db_err)?;

        Ok(Arc::new(Storage { db }))
    }

    /// Insert or replace a city keyed by its id.
    pub fn save_city(&self, city: &City) -> Result<(), StorageError> {
        let json = serde_json::to_vec(city)?;

        let write_txn = self.db.begin_write().map_err(db_err)?;
        {
            let mut table = write_txn.open_table(CITIES_TABLE).map_err(db_err)?;
            table
                .insert(city.id.as_str(), json.as_slice())
                .map_err(db_err)?;
        }
        write_txn.commit().map_err(db_err)?;
        Ok(())
    }

    pub fn get_city(&self, id: &str) -> Result<Option<City>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(CITIES_TABLE).map_err(db_err)?;

        match table.get(id).map_err(db_err)? {
            Some(value) => Ok(decode(id, value.value())),
            None => Ok(None),
        }
    }

    /// All cities ordered by name (case-insensitive), ties broken by id.
    pub fn list_cities(&self) -> Result<Vec<City>, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(CITIES_TABLE).map_err(db_err)?;

        let mut cities = Vec::new();
        for entry in table.iter().map_err(db_err)? {
            let (key, value) = entry.map_err(db_err)?;
            if let Some(city) = decode(key.value(), value.value()) {
                cities.push(city);
            }
        }
        cities.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(cities)
    }

    pub fn count_cities(&self) -> Result<u64, StorageError> {
        let read_txn = self.db.begin_read().map_err(db_err)?;
        let table = read_txn.open_table(CITIES_TABLE).map_err(db_err)?;
        table.len().map_err(db_err)
    }

    pub fn delete_city(&self, id: &str) -> Result<bool, StorageError> {
        let write_txn = self.db.begin_write().map_err(db_err)?;
        let removed = {
            let mut table = write_txn.open_table(CITIES_TABLE).map_err(db_err)?;
            let result = table.remove(id).map_err(db_err)?;
            result.is_some()
        };
        write_txn.commit().map_err(db_err)?;
        Ok(removed)
    }
}

/// A record that no longer parses is skipped rather than failing the whole read.
fn decode(id: &str, bytes: &[u8]) -> Option<City> {
    match serde_json::from_slice(bytes) {
        Ok(city) => Some(city),
        Err(e) => {
            tracing::warn!(city_id = id, error = %e, "Skipping unreadable city record");
            None
        }
    }
}
