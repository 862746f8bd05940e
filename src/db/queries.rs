use chrono::SecondsFormat;
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, params};

use super::Database;
use super::models::{NewSurveyResponse, SurveyRecord};
use crate::error::StoreError;

const RESPONSE_COLUMNS: &str =
    "id, name, topics, description, podcast_formats, suggested_guest, created_at";

impl Database {
    // --- Survey responses ---

    pub fn insert_response(&self, response: &NewSurveyResponse) -> Result<SurveyRecord, StoreError> {
        let record = SurveyRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: response.name.clone(),
            topics: response.topics.clone(),
            description: response.description.clone(),
            podcast_formats: response.podcast_formats.clone(),
            suggested_guest: response.suggested_guest.clone(),
            created_at: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        };

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO survey_responses (id, name, topics, description, podcast_formats, suggested_guest, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.id,
                record.name,
                serde_json::to_string(&record.topics)?,
                record.description,
                serde_json::to_string(&record.podcast_formats)?,
                record.suggested_guest,
                record.created_at,
            ],
        )?;
        tracing::debug!("Stored survey response {}", record.id);
        Ok(record)
    }

    #[cfg(test)]
    pub fn get_response(&self, id: &str) -> Result<Option<SurveyRecord>, StoreError> {
        let conn = self.lock()?;
        let record = conn
            .query_row(
                &format!("SELECT {RESPONSE_COLUMNS} FROM survey_responses WHERE id = ?1"),
                params![id],
                Self::map_response_row,
            )
            .optional()?;
        Ok(record)
    }

    pub fn list_responses(&self) -> Result<Vec<SurveyRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {RESPONSE_COLUMNS} FROM survey_responses ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], Self::map_response_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    pub fn delete_responses(&self, ids: &[String]) -> Result<usize, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut removed = 0usize;
        {
            let mut stmt = tx.prepare("DELETE FROM survey_responses WHERE id = ?1")?;
            for id in ids {
                removed += stmt.execute(params![id])?;
            }
        }
        tx.commit()?;
        Ok(removed)
    }

    fn map_response_row(row: &rusqlite::Row) -> rusqlite::Result<SurveyRecord> {
        Ok(SurveyRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            topics: json_column(row, 2)?,
            description: row.get(3)?,
            podcast_formats: json_column(row, 4)?,
            suggested_guest: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    // --- App meta ---

    pub fn set_meta(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_meta(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM app_meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn delete_meta(&self, key: &str) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM app_meta WHERE key = ?1", params![key])?;
        Ok(())
    }
}

fn json_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
