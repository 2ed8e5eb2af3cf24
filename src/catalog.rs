//! Catalog Store: the ordered, read-only table of medicines.
//!
//! The store is a snapshot. It is built once from SQLite (optionally after
//! re-seeding) and then shared behind an `Arc`; nothing mutates it while
//! requests are being served.

use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::models::MedicineRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog storage unavailable: {0}")]
    StorageUnavailable(#[from] DatabaseError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    records: Vec<MedicineRecord>,
}

impl CatalogStore {
    /// Build a store directly from records, keeping their order.
    pub fn from_records(records: Vec<MedicineRecord>) -> Self {
        Self { records }
    }

    /// Snapshot whatever the database currently holds.
    pub fn open(conn: &Connection) -> Result<Self, CatalogError> {
        let records = db::list_medicines(conn)?;
        tracing::info!(count = records.len(), "Catalog loaded");
        Ok(Self { records })
    }

    /// Seed the database with the built-in list and return the snapshot.
    pub fn seeded(conn: &mut Connection) -> Result<Self, CatalogError> {
        let mut store = Self::default();
        store.load_seed(conn)?;
        Ok(store)
    }

    /// Replace all records with the built-in list, persisted first.
    ///
    /// Prior content is cleared, so repeated calls give the same snapshot.
    pub fn load_seed(&mut self, conn: &mut Connection) -> Result<(), CatalogError> {
        db::seed::load_seed(conn)?;
        self.records = db::list_medicines(conn)?;
        Ok(())
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[MedicineRecord] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&MedicineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::seed::SEED_MEDICINES;

    #[test]
    fn seeded_store_holds_every_entry_in_order() {
        let mut conn = open_memory_database().unwrap();
        let store = CatalogStore::seeded(&mut conn).unwrap();
        assert_eq!(store.len(), SEED_MEDICINES.len());
        for (record, entry) in store.all().iter().zip(SEED_MEDICINES) {
            assert_eq!(record.name, entry.name);
        }
    }

    #[test]
    fn load_seed_is_idempotent() {
        let mut conn = open_memory_database().unwrap();
        let mut store = CatalogStore::seeded(&mut conn).unwrap();
        let first = store.clone();
        store.load_seed(&mut conn).unwrap();
        assert_eq!(store, first);
    }

    #[test]
    fn open_reads_persisted_seed_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pharma.db");
        {
            let mut conn = db::open_database(&path).unwrap();
            CatalogStore::seeded(&mut conn).unwrap();
        }
        let conn = db::open_database(&path).unwrap();
        let store = CatalogStore::open(&conn).unwrap();
        assert_eq!(store.len(), SEED_MEDICINES.len());
        assert_eq!(store.get(1).unwrap().name, "Paracetamol");
    }

    #[test]
    fn open_on_fresh_database_is_empty() {
        let conn = open_memory_database().unwrap();
        let store = CatalogStore::open(&conn).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn missing_table_surfaces_storage_unavailable() {
        let conn = Connection::open_in_memory().unwrap();
        let err = CatalogStore::open(&conn).unwrap_err();
        assert!(matches!(err, CatalogError::StorageUnavailable(_)));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = CatalogStore::default();
        assert!(store.get(42).is_none());
    }
}
