use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::db::Database;
use crate::error::StoreError;

const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "#f8fafc",
                surface: "#ffffff",
                text: "#1a1a1a",
                muted: "#666666",
                accent: "#2563eb",
                border: "#dddddd",
            },
            Self::Dark => Palette {
                background: "#0f172a",
                surface: "#1e293b",
                text: "#e2e8f0",
                muted: "#94a3b8",
                accent: "#60a5fa",
                border: "#334155",
            },
        }
    }

    pub fn load(db: &Database) -> Result<Self, StoreError> {
        let mode = match db.get_meta(THEME_KEY)? {
            Some(raw) => raw.parse::<Self>().unwrap_or_else(|e| {
                tracing::warn!("{e}, falling back to light theme");
                Self::Light
            }),
            None => Self::Light,
        };
        Ok(mode)
    }

    pub fn save(self, db: &Database) -> Result<(), StoreError> {
        db.set_meta(THEME_KEY, &self.to_string())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{other}'")),
        }
    }
}

/// CSS colours derived from a theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}
