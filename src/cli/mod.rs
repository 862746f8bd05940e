pub mod auth;
pub mod dashboard;
pub mod delete;
pub mod interactive;
pub mod options;
pub mod report;
pub mod submit;
pub mod theme;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::dashboard::{Dashboard, LoadOutcome};
use crate::db::models::SurveyRecord;
use crate::error::AppError;
use crate::identity::IdentityProvider;
use crate::store::RecordStore;
use crate::theme::ThemeMode;

#[derive(Parser)]
#[command(
    name = "survey-desk",
    version,
    about = "Collect podcast topic and format preferences, then review them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a survey response (no sign-in needed)
    Submit {
        /// Your name (optional)
        #[arg(long)]
        name: Option<String>,
        /// Topic you want to hear about (repeatable or comma-separated)
        #[arg(long = "topic", value_delimiter = ',')]
        topics: Vec<String>,
        /// Preferred podcast format (repeatable or comma-separated)
        #[arg(long = "podcast-format", value_delimiter = ',')]
        podcast_formats: Vec<String>,
        /// Anything else you would like to see
        #[arg(long)]
        description: Option<String>,
        /// Someone you would like to hear as a guest
        #[arg(long)]
        guest: Option<String>,
    },
    /// List the topics and podcast formats the survey offers
    Options,
    /// Sign in to the dashboard
    Login {
        /// Required to reach the admin sign-in
        #[arg(long)]
        admin: bool,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the dashboard session
    Logout,
    /// Show one page of responses with topic and format counts
    Dashboard {
        /// Only responses that picked this topic ("all" for no constraint)
        #[arg(long)]
        topic: Option<String>,
        /// Only responses that picked this podcast format
        #[arg(long)]
        podcast_format: Option<String>,
        /// Case-insensitive search over name, description and guest
        #[arg(long)]
        search: Option<String>,
        /// Page to show (out-of-range values snap to the nearest page)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        /// Output format
        #[arg(long, default_value = "terminal", value_parser = ["terminal", "json", "html"])]
        render: String,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show every field of one response
    Show {
        /// Response ID or a unique prefix of it
        id: String,
    },
    /// Delete responses in one bulk request
    Delete {
        /// Response IDs or unique prefixes (repeatable or comma-separated)
        #[arg(long = "id", value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// Browse, filter and delete responses from a line-based session
    Interactive,
    /// Show or change the colour theme used by HTML output
    Theme {
        /// light, dark or toggle
        mode: Option<String>,
    },
}

/// Build a dashboard and run its load step; no session means no data.
pub async fn load_dashboard(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    theme: ThemeMode,
) -> anyhow::Result<Dashboard> {
    let mut dash = Dashboard::new(store, identity, theme);
    match dash.load().await? {
        LoadOutcome::Redirect => Err(AppError::NotAuthenticated.into()),
        LoadOutcome::Loaded => Ok(dash),
    }
}

/// Match a full ID, or a prefix that identifies exactly one candidate.
pub fn resolve_id<'a, I>(candidates: I, input: &str) -> anyhow::Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Empty response ID");
    }
    let mut matches = Vec::new();
    for id in candidates {
        if id == input {
            return Ok(id.to_string());
        }
        if id.starts_with(input) {
            matches.push(id);
        }
    }
    match matches.as_slice() {
        [one] => Ok(one.to_string()),
        [] => anyhow::bail!("Response '{}' not found", input),
        many => anyhow::bail!("'{}' matches {} responses, use more characters", input, many.len()),
    }
}

/// IDs of `records`, for [`resolve_id`].
pub fn record_ids(records: &[SurveyRecord]) -> impl Iterator<Item = &str> {
    records.iter().map(|r| r.id.as_str())
}
