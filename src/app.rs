// src/app.rs

use crate::core::export;
use crate::core::models::{AnalysisResult, DashboardSnapshot};
use crate::core::upload::UploadForm;
use crate::events::AppEvent;
use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use std::path::Path;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};
use tracing::{info, warn};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// The two screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, FromRepr)]
pub enum View {
    Upload,
    Dashboard,
}

impl View {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        View::from_repr((self.index() + 1) % View::iter().count()).unwrap_or(View::Upload)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Uploading,
    Finished,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

/// Latest poll outcome. A failed poll keeps the previous snapshot.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub snapshot: Option<DashboardSnapshot>,
    pub last_updated: Option<DateTime<Local>>,
    pub last_error: Option<(DateTime<Local>, String)>,
    pub refreshes: u64,
}

pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub upload_state: UploadState,
    pub input: String,
    pub extra_fields: Vec<(String, String)>,
    pub analysis: Option<AnalysisResult>,
    pub findings_state: ListState,
    pub export_status: ExportStatus,
    pub spinner_frame: usize,
    pub dashboard: DashboardState,
}

impl App {
    pub fn new(extra_fields: Vec<(String, String)>) -> Self {
        Self {
            should_quit: false,
            view: View::Upload,
            upload_state: UploadState::Idle,
            input: String::new(),
            extra_fields,
            analysis: None,
            findings_state: ListState::default(),
            export_status: ExportStatus::Idle,
            spinner_frame: 0,
            dashboard: DashboardState::default(),
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload_state, UploadState::Uploading)
    }

    /// Turns the typed path into a form and enters `Uploading`.
    ///
    /// Returns `None`, changing nothing, while another upload is in flight or
    /// when the path is empty.
    pub fn begin_upload(&mut self) -> Option<UploadForm> {
        if self.is_uploading() || self.input.trim().is_empty() {
            return None;
        }
        self.upload_state = UploadState::Uploading;
        self.export_status = ExportStatus::Idle;
        Some(UploadForm::new(self.input.trim(), self.extra_fields.clone()))
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AnalysisFinished(Ok(result)) => {
                self.findings_state = ListState::default();
                if !result.findings.is_empty() {
                    self.findings_state.select(Some(0));
                }
                self.analysis = Some(result);
                self.upload_state = UploadState::Finished;
            }
            AppEvent::AnalysisFinished(Err(e)) => {
                self.upload_state = UploadState::Failed(e.to_string());
            }
            AppEvent::DashboardRefreshed(Ok(snapshot)) => {
                self.dashboard.snapshot = Some(snapshot);
                self.dashboard.last_updated = Some(Local::now());
                self.dashboard.last_error = None;
                self.dashboard.refreshes += 1;
            }
            AppEvent::DashboardRefreshed(Err(e)) => {
                self.dashboard.last_error = Some((Local::now(), e.to_string()));
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.is_uploading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn next_view(&mut self) {
        self.view = self.view.next();
    }

    pub fn select_next(&mut self) {
        let len = self.analysis.as_ref().map_or(0, |a| a.findings.len());
        if len == 0 {
            return;
        }
        let next = self.findings_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.findings_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.findings_state.selected() {
            self.findings_state.select(Some(i.saturating_sub(1)));
        }
    }

    /// Writes the displayed analysis into `dir` and records the outcome for the footer.
    pub fn export_analysis(&mut self, dir: &Path) {
        let Some(result) = &self.analysis else {
            self.export_status = ExportStatus::Error("Nothing to export".to_string());
            return;
        };
        self.export_status = match export::export_analysis(result, dir) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => {
                warn!(error = %e, "Export failed.");
                ExportStatus::Error(e.to_string())
            }
        };
    }

    pub fn quit(&mut self) {
        info!("Quit requested.");
        self.should_quit = true;
    }

    /// Back to an empty form. Dashboard state is left alone.
    pub fn reset(&mut self) {
        self.upload_state = UploadState::Idle;
        self.input = String::new();
        self.analysis = None;
        self.findings_state = ListState::default();
        self.export_status = ExportStatus::Idle;
        self.spinner_frame = 0;
    }
}
