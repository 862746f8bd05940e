mod cli;
mod config;
mod dashboard;
mod db;
mod error;
mod identity;
mod pipeline;
mod report;
mod store;
mod survey;
mod theme;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Command};

use crate::config::AdminCredentials;
use crate::identity::{IdentityProvider, LocalIdentity};
use crate::survey::SubmissionForm;
use crate::theme::ThemeMode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Open database
    let db_path = config::db_path()?;
    let db = Arc::new(db::Database::open(&db_path)?);

    let identity: Arc<dyn IdentityProvider> = Arc::new(LocalIdentity::new(
        db.clone(),
        AdminCredentials::from_env(),
    ));
    let theme = ThemeMode::load(&db)?;

    match cli.command {
        Command::Submit {
            name,
            topics,
            podcast_formats,
            description,
            guest,
        } => {
            let form = SubmissionForm {
                name,
                topics,
                description,
                podcast_formats,
                suggested_guest: guest,
            };
            cli::submit::submit(db.as_ref(), form).await?;
        }
        Command::Options => cli::options::list_options(),
        Command::Login {
            admin,
            email,
            password,
        } => cli::auth::login(identity.as_ref(), admin, &email, &password).await?,
        Command::Logout => cli::auth::logout(identity.as_ref()).await?,
        Command::Dashboard {
            topic,
            podcast_format,
            search,
            page,
            render,
            output,
        } => {
            let args = cli::dashboard::DashboardArgs {
                topic,
                podcast_format,
                search,
                page,
                render,
                output,
            };
            cli::dashboard::dashboard(db, identity, theme, args).await?;
        }
        Command::Show { id } => cli::dashboard::show(db, identity, &id).await?,
        Command::Delete { ids } => cli::delete::delete(db, identity, theme, &ids).await?,
        Command::Interactive => {
            let dash = cli::load_dashboard(db, identity, theme).await?;
            cli::interactive::run(dash).await?;
        }
        Command::Theme { mode } => cli::theme::theme(&db, mode.as_deref())?,
    }

    Ok(())
}
