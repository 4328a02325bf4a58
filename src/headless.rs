// src/headless.rs

//! Non-interactive modes: print to stdout instead of drawing the UI.

use crate::core::catalog;
use crate::core::client::PrivGuardApi;
use crate::core::models::{AnalysisResult, DashboardSnapshot};
use crate::core::poller::dashboard_poller_task;
use crate::core::upload::UploadForm;
use crate::core::uploader;
use crate::events::AppEvent;
use color_eyre::eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Uploads one document and prints the report.
pub async fn run_analyze(api: &dyn PrivGuardApi, form: UploadForm) -> Result<()> {
    let result = uploader::submit(api, &form).await?;
    println!("{}", format_analysis(&form.file_name(), &result));
    Ok(())
}

/// Prints every snapshot as it arrives until Ctrl+C, or only the first one
/// with `once`. Failed polls are printed to stderr and polling continues.
pub async fn run_dashboard(api: Arc<dyn PrivGuardApi>, period: Duration, once: bool) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let poller = tokio::spawn(dashboard_poller_task(api, tx, shutdown_rx, period));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = rx.recv() => match event {
                Some(AppEvent::DashboardRefreshed(Ok(snapshot))) => {
                    println!("{}", format_snapshot(&snapshot));
                    if once {
                        break;
                    }
                }
                Some(AppEvent::DashboardRefreshed(Err(e))) => eprintln!("Refresh failed: {}", e),
                Some(AppEvent::AnalysisFinished(_)) => {}
                None => break,
            },
        }
    }

    let _ = shutdown_tx.send(());
    poller.await?;
    Ok(())
}

pub fn format_analysis(file_name: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("PrivGuard analysis: {}\n", file_name));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("Sensitive fields : {}\n", result.findings_count()));
    out.push_str(&format!("Document type    : {}\n", result.document_type));
    out.push_str(&format!("Risk level       : {} [{}]\n", result.risk_level, result.risk().css_class()));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for (kind, count) in result.counts_by_type() {
        out.push_str(&format!("  - {}: {}\n", catalog::title_for(kind), count));
    }
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for finding in &result.findings {
        out.push_str(&format!("{}: {}\n", finding.kind, finding.value));
    }
    out.push_str(&"=".repeat(60));
    out
}

pub fn format_snapshot(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Documents scanned: {} | Sensitive entities: {} | Compliance: {}\n",
        snapshot.documents_scanned,
        snapshot.sensitive_entities,
        snapshot.compliance_label()
    ));
    let risk = snapshot
        .risk_distribution
        .chart_values()
        .iter()
        .map(|(label, value)| format!("{}={}", label, value))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!("Risk: {}\n", risk));
    out.push_str(&format!("{:<32} {:<10} {:>8}  {}", "File", "Risk", "Entities", "Timestamp"));
    for scan in &snapshot.recent_scans {
        out.push_str(&format!(
            "\n{:<32} {:<10} {:>8}  {}",
            scan.file, scan.risk, scan.entities_label(), scan.timestamp
        ));
    }
    out
}
