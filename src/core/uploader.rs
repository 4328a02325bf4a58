// src/core/uploader.rs

use crate::core::client::PrivGuardApi;
use crate::core::models::AnalysisResult;
use crate::core::error::ApiError;
use crate::core::upload::UploadForm;
use crate::events::AppEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Validates the form and posts it exactly once. No retry.
pub async fn submit(api: &dyn PrivGuardApi, form: &UploadForm) -> Result<AnalysisResult, ApiError> {
    if let Err(e) = form.validate() {
        warn!(file = %form.file.display(), error = %e, "Upload rejected before sending.");
        return Err(e);
    }
    let result = api.analyze(form).await;
    match &result {
        Ok(analysis) => info!(findings = analysis.findings.len(), "Upload finished."),
        Err(e) => warn!(error = %e, "Upload failed."),
    }
    result
}

/// Runs [`submit`] in the background and reports the outcome as an
/// [`AppEvent::AnalysisFinished`].
pub fn spawn_submission(
    api: Arc<dyn PrivGuardApi>,
    form: UploadForm,
    events: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = submit(api.as_ref(), &form).await;
        let _ = events.send(AppEvent::AnalysisFinished(outcome)).await;
    })
}
