use std::sync::Arc;

use crate::error::AppError;
use crate::identity::IdentityProvider;
use crate::pipeline::CategoryFilter;
use crate::store::RecordStore;
use crate::theme::ThemeMode;

pub struct DashboardArgs {
    pub topic: Option<String>,
    pub podcast_format: Option<String>,
    pub search: Option<String>,
    pub page: i64,
    pub render: String,
    pub output: Option<String>,
}

pub async fn dashboard(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    theme: ThemeMode,
    args: DashboardArgs,
) -> anyhow::Result<()> {
    let mut dash = super::load_dashboard(store, identity, theme).await?;

    dash.set_topic_filter(CategoryFilter::from(args.topic));
    dash.set_format_filter(CategoryFilter::from(args.podcast_format));
    if let Some(term) = &args.search {
        dash.set_search(term);
    }
    dash.go_to_page(args.page);

    super::report::emit(&dash, &args.render, args.output.as_deref())?;

    if let Some(err) = dash.load_error() {
        anyhow::bail!("Could not load responses: {err}");
    }
    Ok(())
}

pub async fn show(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    id: &str,
) -> anyhow::Result<()> {
    if identity.get_session().await?.is_none() {
        return Err(AppError::NotAuthenticated.into());
    }

    let records = store.list().await?;
    let id = super::resolve_id(super::record_ids(&records), id)?;
    let Some(r) = records.iter().find(|r| r.id == id) else {
        anyhow::bail!("Response '{}' not found", id);
    };

    println!("ID:          {}", r.id);
    println!("Name:        {}", r.display_name());
    println!("Topics:      {}", r.topics.join(", "));
    println!("Formats:     {}", r.podcast_formats.join(", "));
    if !r.description.is_empty() {
        println!("Description: {}", r.description);
    }
    if let Some(g) = &r.suggested_guest {
        println!("Guest:       {g}");
    }
    println!("Submitted:   {}", r.created_at);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::dashboard::tests::{MemoryStore, StaticIdentity};
    use crate::pipeline::fixtures::numbered;

    fn args(page: i64) -> DashboardArgs {
        DashboardArgs {
            topic: Some("Technology".into()),
            podcast_format: None,
            search: None,
            page,
            render: "json".into(),
            output: None,
        }
    }

    #[tokio::test]
    async fn test_dashboard_renders_page() {
        let store = MemoryStore::with(numbered(25));
        dashboard(store, StaticIdentity::signed_in(true), ThemeMode::Light, args(99))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_failed_load_exits_with_error() {
        let store = MemoryStore::with(numbered(5));
        store.fail_list.store(true, Ordering::SeqCst);
        let err = dashboard(store, StaticIdentity::signed_in(true), ThemeMode::Light, args(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Could not load responses"));
    }

    #[tokio::test]
    async fn test_dashboard_requires_session() {
        let store = MemoryStore::with(numbered(5));
        let err = dashboard(store, StaticIdentity::signed_in(false), ThemeMode::Light, args(1))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_show_resolves_prefix() {
        let store = MemoryStore::with(numbered(3));
        show(store.clone(), StaticIdentity::signed_in(true), "r2")
            .await
            .unwrap();
        assert!(
            show(store.clone(), StaticIdentity::signed_in(true), "zz")
                .await
                .is_err()
        );
        assert!(
            show(store, StaticIdentity::signed_in(false), "r2")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_show_surfaces_store_failure() {
        let store = MemoryStore::with(numbered(3));
        store.fail_list.store(true, Ordering::SeqCst);
        assert!(
            show(store, StaticIdentity::signed_in(true), "r1")
                .await
                .is_err()
        );
    }
}
