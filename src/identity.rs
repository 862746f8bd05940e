use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{AdminCredentials, SESSION_TTL_HOURS};
use crate::db::Database;
use crate::error::{AppError, StoreError};

const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Gatekeeper for the dashboard. No roles: a session either exists or not.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_session(&self) -> Result<Option<Session>, AppError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError>;
    async fn sign_out(&self) -> Result<(), AppError>;
}

/// Single-admin identity that keeps its session in the local database.
pub struct LocalIdentity {
    db: Arc<Database>,
    /// `Err` holds why sign-in is unavailable.
    credentials: Result<AdminCredentials, String>,
}

impl LocalIdentity {
    pub fn new(db: Arc<Database>, credentials: Result<AdminCredentials, AppError>) -> Self {
        let credentials = credentials.map_err(|e| match e {
            AppError::Config(reason) => reason,
            other => other.to_string(),
        });
        Self { db, credentials }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn get_session(&self) -> Result<Option<Session>, AppError> {
        let Some(raw) = self.db.get_meta(SESSION_KEY)? else {
            return Ok(None);
        };
        let session: Session = match serde_json::from_str(&raw) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Discarding unreadable session: {e}");
                return Ok(None);
            }
        };
        if session.is_expired(Utc::now()) {
            tracing::info!("Session for {} expired at {}", session.email, session.expires_at);
            return Ok(None);
        }
        Ok(Some(session))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let creds = self.credentials.as_ref().map_err(|reason| {
            tracing::warn!("Admin sign-in unavailable: {reason}");
            AppError::Config(format!("admin sign-in unavailable: {reason}"))
        })?;

        if !creds.email.eq_ignore_ascii_case(email.trim()) || creds.password != password {
            tracing::warn!("Rejected sign-in for {}", email.trim());
            return Err(AppError::InvalidCredentials);
        }

        let now = Utc::now();
        let session = Session {
            email: creds.email.clone(),
            token: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            expires_at: now + Duration::hours(SESSION_TTL_HOURS),
        };
        let raw = serde_json::to_string(&session).map_err(StoreError::from)?;
        self.db.set_meta(SESSION_KEY, &raw)?;
        tracing::info!("Signed in as {}", session.email);
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.db.delete_meta(SESSION_KEY)?;
        tracing::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(creds: Result<AdminCredentials, AppError>) -> (Arc<Database>, LocalIdentity) {
        let db = Arc::new(Database::open_in_memory().unwrap());
        let id = LocalIdentity::new(db.clone(), creds);
        (db, id)
    }

    fn admin() -> AdminCredentials {
        AdminCredentials {
            email: "admin@example.com".into(),
            password: "hunter2".into(),
        }
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let (_db, id) = identity(Ok(admin()));
        assert!(id.get_session().await.unwrap().is_none());

        let session = id.sign_in("Admin@Example.com ", "hunter2").await.unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(id.get_session().await.unwrap(), Some(session));

        id.sign_out().await.unwrap();
        assert!(id.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let (_db, id) = identity(Ok(admin()));
        let err = id.sign_in("admin@example.com", "nope").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert!(id.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_credentials() {
        let (_db, id) = identity(Err(AppError::Config(
            "SURVEY_ADMIN_PASSWORD is not set".into(),
        )));
        let err = id.sign_in("admin@example.com", "hunter2").await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("SURVEY_ADMIN_PASSWORD is not set"));
    }

    #[tokio::test]
    async fn test_expired_session_reads_as_absent() {
        let (db, id) = identity(Ok(admin()));
        let past = Utc::now() - Duration::hours(48);
        let stale = Session {
            email: "admin@example.com".into(),
            token: "t".into(),
            created_at: past,
            expires_at: past + Duration::hours(SESSION_TTL_HOURS),
        };
        db.set_meta(SESSION_KEY, &serde_json::to_string(&stale).unwrap())
            .unwrap();
        assert!(id.get_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_garbage_session_reads_as_absent() {
        let (db, id) = identity(Ok(admin()));
        db.set_meta(SESSION_KEY, "{not json").unwrap();
        assert!(id.get_session().await.unwrap().is_none());
    }
}
