use crate::error::AppError;
use crate::store::RecordStore;
use crate::survey::SubmissionForm;

pub async fn submit(store: &dyn RecordStore, form: SubmissionForm) -> anyhow::Result<()> {
    let response = form.validate().map_err(AppError::from)?;

    match store.insert(&response).await {
        Ok(stored) => {
            tracing::info!("Recorded survey response {}", stored.id);
            println!("Thanks! Your response has been recorded.");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to store survey response: {e}");
            Err(anyhow::anyhow!(
                "Sorry, your response could not be saved: {e}"
            ))
        }
    }
}
