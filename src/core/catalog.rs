//! A static, read-only catalog of the sensitive-data types the analysis
//! service reports. It turns a raw finding label such as `kra_pin` into a
//! readable title, a sensitivity tier, and a short handling note for the
//! details pane. Types missing from the catalog are still shown, just with
//! their raw label.

use std::fmt;

/// How much damage a leaked value of this type can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sensitivity {
    /// Government or tax identifiers.
    HighValue,
    /// Direct contact details.
    Contact,
    /// Everything else.
    General,
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sensitivity::HighValue => write!(f, "High-value identifier"),
            Sensitivity::Contact => write!(f, "Contact detail"),
            Sensitivity::General => write!(f, "Personal data"),
        }
    }
}

/// Everything the UI needs to present one finding type.
pub struct FindingKind {
    /// Label as sent by the service (matched case-insensitively, singular or plural).
    pub code: &'static str,
    pub title: &'static str,
    pub sensitivity: Sensitivity,
    pub handling: &'static str,
}

static KINDS: &[FindingKind] = &[
    FindingKind {
        code: "national_id",
        title: "National ID Number",
        sensitivity: Sensitivity::HighValue,
        handling: "High-value identifier: enforce strict access controls and audit logs. Redact or mask before sharing and encrypt at rest.",
    },
    FindingKind {
        code: "kra_pin",
        title: "KRA PIN",
        sensitivity: Sensitivity::HighValue,
        handling: "Tax identifier: restrict to staff with a lawful need and keep an audit trail of every access.",
    },
    FindingKind {
        code: "passport_number",
        title: "Passport Number",
        sensitivity: Sensitivity::HighValue,
        handling: "Travel document identifier: mask all but the last characters in routine use and encrypt in storage.",
    },
    FindingKind {
        code: "phone_number",
        title: "Phone Number",
        sensitivity: Sensitivity::Contact,
        handling: "Apply masking for routine use and encryption for storage or transmission.",
    },
    FindingKind {
        code: "email",
        title: "Email Address",
        sensitivity: Sensitivity::Contact,
        handling: "Apply data minimization: retain only the addresses your process actually needs.",
    },
    FindingKind {
        code: "bank_account",
        title: "Bank Account Number",
        sensitivity: Sensitivity::HighValue,
        handling: "Financial identifier: never share in clear text; tokenise or encrypt before storage.",
    },
    FindingKind {
        code: "date_of_birth",
        title: "Date of Birth",
        sensitivity: Sensitivity::General,
        handling: "Use purpose limitation: process only for clearly defined lawful use.",
    },
];

/// Looks up a finding type, tolerating case and a trailing plural `s`
/// (`Emails`, `national_ids`).
pub fn lookup(kind: &str) -> Option<&'static FindingKind> {
    let normalized = kind.trim().to_lowercase().replace([' ', '-'], "_");
    let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
    KINDS
        .iter()
        .find(|k| k.code == normalized || k.code == singular)
}

/// The title to show for a finding type, falling back to the raw label.
pub fn title_for(kind: &str) -> String {
    lookup(kind)
        .map(|k| k.title.to_string())
        .unwrap_or_else(|| kind.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tolerates_case_and_plural() {
        assert_eq!(lookup("email").map(|k| k.title), Some("Email Address"));
        assert_eq!(lookup("National_IDs").map(|k| k.sensitivity), Some(Sensitivity::HighValue));
        assert_eq!(lookup("phone numbers").map(|k| k.code), Some("phone_number"));
    }

    #[test]
    fn unknown_kind_keeps_raw_label() {
        assert!(lookup("licence_plate").is_none());
        assert_eq!(title_for("licence_plate"), "licence_plate");
        assert_eq!(title_for("kra_pin"), "KRA PIN");
    }
}
