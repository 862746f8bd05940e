use std::sync::Arc;

use crate::identity::IdentityProvider;
use crate::store::RecordStore;
use crate::theme::ThemeMode;

pub async fn delete(
    store: Arc<dyn RecordStore>,
    identity: Arc<dyn IdentityProvider>,
    theme: ThemeMode,
    ids: &[String],
) -> anyhow::Result<()> {
    let mut dash = super::load_dashboard(store, identity, theme).await?;
    if let Some(err) = dash.load_error() {
        anyhow::bail!("Could not load responses: {err}");
    }

    for input in ids {
        let id = super::resolve_id(super::record_ids(dash.records()), input)?;
        dash.mark(&id);
    }

    let requested = dash.selection().len();
    let removed = dash.bulk_delete().await?;
    if removed < requested {
        tracing::warn!("{} response(s) were already gone", requested - removed);
    }
    println!("Deleted {removed} response(s). {} remaining.", dash.records().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tests::{MemoryStore, StaticIdentity};
    use crate::pipeline::fixtures::numbered;

    #[tokio::test]
    async fn test_delete_by_prefix() {
        let store = MemoryStore::with(numbered(3));
        delete(
            store.clone(),
            StaticIdentity::signed_in(true),
            ThemeMode::Light,
            &["r2".to_string(), "r3".to_string()],
        )
        .await
        .unwrap();
        let left: Vec<String> = store
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(left, vec!["r1"]);
    }

    #[tokio::test]
    async fn test_unknown_id_deletes_nothing() {
        let store = MemoryStore::with(numbered(3));
        let result = delete(
            store.clone(),
            StaticIdentity::signed_in(true),
            ThemeMode::Light,
            &["r1".to_string(), "nope".to_string()],
        )
        .await;
        assert!(result.is_err());
        assert_eq!(store.records.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_signed_out_deletes_nothing() {
        let store = MemoryStore::with(numbered(3));
        let result = delete(
            store.clone(),
            StaticIdentity::signed_in(false),
            ThemeMode::Light,
            &["r1".to_string()],
        )
        .await;
        assert!(result.is_err());
        assert_eq!(store.records.lock().unwrap().len(), 3);
    }
}
