// src/core/models.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;
use serde_json::Value;
use std::fmt;

// --- Modelli Analisi ---
// Analysis Models

/// A single extracted sensitive-data field returned by `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    /// The data type label (e.g. "email", "national_id").
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// The body of a successful `POST /analyze` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub findings: Vec<Finding>,
    pub document_type: String,
    pub risk_level: String,
}

impl AnalysisResult {
    pub fn findings_count(&self) -> usize {
        self.findings.len()
    }

    pub fn risk(&self) -> RiskLevel {
        RiskLevel::parse(&self.risk_level)
    }

    /// Groups the findings by type, keeping the order in which each type first appears.
    pub fn counts_by_type(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for finding in &self.findings {
            match counts.iter_mut().find(|(kind, _)| *kind == finding.kind) {
                Some((_, count)) => *count += 1,
                None => counts.push((finding.kind.as_str(), 1)),
            }
        }
        counts
    }
}

/// Categorical severity attached to an analyzed document or a recent scan.
///
/// Parsing is case-insensitive. Labels outside the known set are kept verbatim
/// in `Other` so they can still be displayed and styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl RiskLevel {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "critical" => RiskLevel::Critical,
            "high" => RiskLevel::High,
            "medium" => RiskLevel::Medium,
            "low" => RiskLevel::Low,
            _ => RiskLevel::Other(label.trim().to_string()),
        }
    }

    /// The lowercase suffix used to pick the style of a risk label.
    pub fn class_suffix(&self) -> String {
        match self {
            RiskLevel::Critical => "critical".to_string(),
            RiskLevel::High => "high".to_string(),
            RiskLevel::Medium => "medium".to_string(),
            RiskLevel::Low => "low".to_string(),
            RiskLevel::Other(label) => label.to_lowercase(),
        }
    }

    /// `risk-<suffix>`, the class name a risk label is rendered with.
    pub fn css_class(&self) -> String {
        format!("risk-{}", self.class_suffix())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Critical => write!(f, "Critical"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Other(label) => write!(f, "{}", label),
        }
    }
}

// --- Modelli Dashboard ---
// Dashboard Models

/// Per-category document counts shown in the risk chart.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskDistribution {
    #[serde(rename = "High", default, deserialize_with = "lenient_count")]
    pub high: u64,
    #[serde(rename = "Medium", default, deserialize_with = "lenient_count")]
    pub medium: u64,
    #[serde(rename = "Low", default, deserialize_with = "lenient_count")]
    pub low: u64,
}

impl RiskDistribution {
    /// The chart values, always three, always in High/Medium/Low order.
    pub fn chart_values(&self) -> [(&'static str, u64); 3] {
        [("High", self.high), ("Medium", self.medium), ("Low", self.low)]
    }
}

/// One row of the recent scans table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentScan {
    pub file: String,
    pub risk: String,
    /// Shown as sent; the service has used both numbers and strings here.
    #[serde(default)]
    pub entities: Value,
    pub timestamp: String,
}

impl RecentScan {
    pub fn entities_label(&self) -> String {
        display_value(&self.entities)
    }
}

/// The body of a `GET /dashboard-data` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    #[serde(deserialize_with = "lenient_count")]
    pub documents_scanned: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub sensitive_entities: u64,
    #[serde(deserialize_with = "lenient_score")]
    pub compliance_score: f64,
    #[serde(default)]
    pub risk_distribution: RiskDistribution,
    #[serde(default)]
    pub recent_scans: Vec<RecentScan>,
}

impl DashboardSnapshot {
    /// Compliance score with a trailing percent sign, `92%` rather than `92.0%`.
    pub fn compliance_label(&self) -> String {
        format!("{}%", self.compliance_score)
    }
}

// --- Decodifica tollerante ---
// Lenient decoding: JSON numbers from the service are not always integers.

/// Accepts `4`, `4.0` and `"4"`. Fractions are rounded, negatives rejected.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null => Some(0.0),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(n.round() as u64),
        _ => Err(D::Error::custom(format!("expected a non-negative count, got {}", value))),
    }
}

/// Accepts a number or a numeric string, with or without a trailing `%`.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let score = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    score
        .filter(|s| s.is_finite())
        .ok_or_else(|| D::Error::custom(format!("expected a numeric score, got {}", value)))
}

/// Strings without their JSON quotes, `null` as empty, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Error payload the analysis service returns alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_decodes_type_key() {
        let body = r#"{
            "findings": [
                {"type": "email", "value": "jane@example.com"},
                {"type": "phone_number", "value": "+254700000000"},
                {"type": "email", "value": "john@example.com"}
            ],
            "document_type": "Invoice",
            "risk_level": "HIGH"
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.findings_count(), 3);
        assert_eq!(result.findings[1].kind, "phone_number");
        assert_eq!(result.risk(), RiskLevel::High);
        assert_eq!(result.counts_by_type(), vec![("email", 2), ("phone_number", 1)]);
    }

    #[test]
    fn risk_class_is_lowercased_label() {
        assert_eq!(RiskLevel::parse("Medium").css_class(), "risk-medium");
        assert_eq!(RiskLevel::parse("LOW").css_class(), "risk-low");
        assert_eq!(RiskLevel::parse("Critical").css_class(), "risk-critical");

        let other = RiskLevel::parse("Elevated");
        assert_eq!(other, RiskLevel::Other("Elevated".to_string()));
        assert_eq!(other.css_class(), "risk-elevated");
        assert_eq!(other.to_string(), "Elevated");
    }

    #[test]
    fn snapshot_defaults_missing_collections() {
        let body = r#"{"documents_scanned": 4, "sensitive_entities": 12, "compliance_score": 87.5}"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();

        assert_eq!(snapshot.risk_distribution, RiskDistribution::default());
        assert!(snapshot.recent_scans.is_empty());
        assert_eq!(snapshot.compliance_label(), "87.5%");
    }

    #[test]
    fn chart_values_keep_high_medium_low_order() {
        let body = r#"{"Low": 7, "High": 2, "Medium": 5}"#;
        let distribution: RiskDistribution = serde_json::from_str(body).unwrap();

        assert_eq!(
            distribution.chart_values(),
            [("High", 2), ("Medium", 5), ("Low", 7)]
        );
    }

    #[test]
    fn snapshot_tolerates_float_and_string_counts() {
        let body = r#"{
            "documents_scanned": 4.0,
            "sensitive_entities": "12",
            "compliance_score": "87.5%",
            "risk_distribution": {"High": 1.0, "Medium": "2", "Low": 3},
            "recent_scans": [
                {"file": "a.pdf", "risk": "High", "entities": "3", "timestamp": "2026-10-18 09:00"},
                {"file": "b.txt", "risk": "Low", "entities": 2.0, "timestamp": "2026-10-18 09:05"}
            ]
        }"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(body).unwrap();

        assert_eq!(snapshot.documents_scanned, 4);
        assert_eq!(snapshot.sensitive_entities, 12);
        assert_eq!(snapshot.compliance_label(), "87.5%");
        assert_eq!(
            snapshot.risk_distribution.chart_values(),
            [("High", 1), ("Medium", 2), ("Low", 3)]
        );
        assert_eq!(snapshot.recent_scans[0].entities_label(), "3");
        assert_eq!(snapshot.recent_scans[1].entities_label(), "2.0");
    }

    #[test]
    fn negative_or_non_numeric_counts_are_rejected() {
        let negative = r#"{"documents_scanned": -1, "sensitive_entities": 0, "compliance_score": 50}"#;
        assert!(serde_json::from_str::<DashboardSnapshot>(negative).is_err());

        let word = r#"{"documents_scanned": "many", "sensitive_entities": 0, "compliance_score": 50}"#;
        assert!(serde_json::from_str::<DashboardSnapshot>(word).is_err());
    }

    #[test]
    fn whole_compliance_score_has_no_fraction() {
        let snapshot = DashboardSnapshot {
            documents_scanned: 0,
            sensitive_entities: 0,
            compliance_score: 92.0,
            risk_distribution: RiskDistribution::default(),
            recent_scans: Vec::new(),
        };
        assert_eq!(snapshot.compliance_label(), "92%");
    }
}
