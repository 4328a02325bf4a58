// src/events.rs

use crate::core::error::ApiError;
use crate::core::models::{AnalysisResult, DashboardSnapshot};

/// Messages background tasks send back to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of one upload submission.
    AnalysisFinished(Result<AnalysisResult, ApiError>),
    /// Outcome of one dashboard poll.
    DashboardRefreshed(Result<DashboardSnapshot, ApiError>),
}
