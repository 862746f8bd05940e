pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::error::StoreError;
use crate::store::RecordStore;
use models::{NewSurveyResponse, SurveyRecord};

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn list(&self) -> Result<Vec<SurveyRecord>, StoreError> {
        self.list_responses()
    }

    async fn insert(&self, response: &NewSurveyResponse) -> Result<SurveyRecord, StoreError> {
        self.insert_response(response)
    }

    async fn delete_by_ids(&self, ids: &[String]) -> Result<usize, StoreError> {
        self.delete_responses(ids)
    }
}
