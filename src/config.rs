use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AppError;

/// Rows shown per dashboard page.
pub const ITEMS_PER_PAGE: usize = 10;

/// Hours a dashboard session stays valid after sign-in.
pub const SESSION_TTL_HOURS: i64 = 24;

pub const DB_PATH_ENV: &str = "SURVEY_DESK_DB";
pub const ADMIN_EMAIL_ENV: &str = "SURVEY_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "SURVEY_ADMIN_PASSWORD";

pub fn project_dirs() -> anyhow::Result<ProjectDirs> {
    ProjectDirs::from("", "survey-desk", "survey-desk")
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

pub fn db_path() -> anyhow::Result<PathBuf> {
    if let Ok(path) = env::var(DB_PATH_ENV) {
        tracing::debug!("Using database path from {DB_PATH_ENV}: {path}");
        return Ok(PathBuf::from(path));
    }
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("survey-desk.db"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_env() -> Result<Self, AppError> {
        let email = read_var(ADMIN_EMAIL_ENV)?;
        let password = read_var(ADMIN_PASSWORD_ENV)?;
        Ok(Self { email, password })
    }
}

fn read_var(key: &str) -> Result<String, AppError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => {
            tracing::debug!("Environment variable {key} not set");
            Err(AppError::Config(format!("{key} is not set")))
        }
    }
}
