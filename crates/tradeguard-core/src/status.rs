use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed presentation descriptor returned by the classifiers.
///
/// Colors are hex pairs consumed by whatever renders the badge; the crate
/// ends at data, not presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub text: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
}

/// Default bucket for anything outside the known status set.
const DEFAULT_STATUS_DISPLAY: StatusDisplay = StatusDisplay {
    text: "Pending",
    background_color: "#F3F4F6",
    text_color: "#374151",
};

const UNKNOWN_DISPLAY: StatusDisplay = StatusDisplay {
    text: "Unknown",
    background_color: "#F3F4F6",
    text_color: "#6B7280",
};

/// Lifecycle status of a transaction.
///
/// Parsing is total: anything outside the known set maps to `Unknown` so a
/// single bad record cannot fail a whole page decode, and the classifier
/// resolves `Unknown` to the default "Pending" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Pending,
    Processing,
    Active,
    Escrow,
    Completed,
    Disputed,
    Cancelled,
    Refunded,
    KycRequired,
    KybRequired,
    VerificationApproved,
    VerificationRejected,
    Unknown,
}

impl TransactionStatus {
    pub const ALL_KNOWN: [TransactionStatus; 12] = [
        TransactionStatus::Pending,
        TransactionStatus::Processing,
        TransactionStatus::Active,
        TransactionStatus::Escrow,
        TransactionStatus::Completed,
        TransactionStatus::Disputed,
        TransactionStatus::Cancelled,
        TransactionStatus::Refunded,
        TransactionStatus::KycRequired,
        TransactionStatus::KybRequired,
        TransactionStatus::VerificationApproved,
        TransactionStatus::VerificationRejected,
    ];

    /// Total, case-insensitive parse.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "active" => Self::Active,
            "escrow" => Self::Escrow,
            "completed" => Self::Completed,
            "disputed" => Self::Disputed,
            "cancelled" => Self::Cancelled,
            "refunded" => Self::Refunded,
            "kyc_required" => Self::KycRequired,
            "kyb_required" => Self::KybRequired,
            "verification_approved" => Self::VerificationApproved,
            "verification_rejected" => Self::VerificationRejected,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Active => "active",
            Self::Escrow => "escrow",
            Self::Completed => "completed",
            Self::Disputed => "disputed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::KycRequired => "kyc_required",
            Self::KybRequired => "kyb_required",
            Self::VerificationApproved => "verification_approved",
            Self::VerificationRejected => "verification_rejected",
            Self::Unknown => "unknown",
        }
    }

    /// Statuses the dashboard counts as in-flight.
    pub fn is_active_like(&self) -> bool {
        matches!(self, Self::Active | Self::Processing | Self::Escrow)
    }

    /// Statuses with funds held, including held-pending-dispute.
    pub fn is_escrow_like(&self) -> bool {
        matches!(self, Self::Escrow | Self::Disputed)
    }

    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Processing => StatusDisplay {
                text: "Processing",
                background_color: "#DBEAFE",
                text_color: "#1D4ED8",
            },
            Self::Active => StatusDisplay {
                text: "Active",
                background_color: "#DCFCE7",
                text_color: "#15803D",
            },
            Self::Escrow => StatusDisplay {
                text: "In Escrow",
                background_color: "#EDE9FE",
                text_color: "#6D28D9",
            },
            Self::Completed => StatusDisplay {
                text: "Completed",
                background_color: "#D1FAE5",
                text_color: "#065F46",
            },
            Self::Disputed => StatusDisplay {
                text: "Disputed",
                background_color: "#FEE2E2",
                text_color: "#B91C1C",
            },
            Self::Cancelled => StatusDisplay {
                text: "Cancelled",
                background_color: "#F3F4F6",
                text_color: "#6B7280",
            },
            Self::Refunded => StatusDisplay {
                text: "Refunded",
                background_color: "#FEF3C7",
                text_color: "#92400E",
            },
            Self::KycRequired => StatusDisplay {
                text: "KYC Required",
                background_color: "#FEF3C7",
                text_color: "#B45309",
            },
            Self::KybRequired => StatusDisplay {
                text: "KYB Required",
                background_color: "#FEF3C7",
                text_color: "#B45309",
            },
            Self::VerificationApproved => StatusDisplay {
                text: "Verification Approved",
                background_color: "#DCFCE7",
                text_color: "#15803D",
            },
            Self::VerificationRejected => StatusDisplay {
                text: "Verification Rejected",
                background_color: "#FEE2E2",
                text_color: "#B91C1C",
            },
            Self::Pending | Self::Unknown => DEFAULT_STATUS_DISPLAY,
        }
    }
}

/// Outcome of a decision-engine rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionOutcome {
    Approve,
    Review,
    Decline,
    Unknown,
}

impl DecisionOutcome {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "approve" => Self::Approve,
            "review" => Self::Review,
            "decline" => Self::Decline,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Review => "review",
            Self::Decline => "decline",
            Self::Unknown => "unknown",
        }
    }

    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Approve => StatusDisplay {
                text: "Approved",
                background_color: "#DCFCE7",
                text_color: "#15803D",
            },
            Self::Review => StatusDisplay {
                text: "Review",
                background_color: "#FEF3C7",
                text_color: "#B45309",
            },
            Self::Decline => StatusDisplay {
                text: "Declined",
                background_color: "#FEE2E2",
                text_color: "#B91C1C",
            },
            Self::Unknown => UNKNOWN_DISPLAY,
        }
    }
}

/// Severity of a monitoring alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl AlertSeverity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }

    pub fn display(&self) -> StatusDisplay {
        match self {
            Self::Critical => StatusDisplay {
                text: "Critical",
                background_color: "#FEE2E2",
                text_color: "#991B1B",
            },
            Self::High => StatusDisplay {
                text: "High",
                background_color: "#FFEDD5",
                text_color: "#C2410C",
            },
            Self::Medium => StatusDisplay {
                text: "Medium",
                background_color: "#FEF3C7",
                text_color: "#B45309",
            },
            Self::Low => StatusDisplay {
                text: "Low",
                background_color: "#DBEAFE",
                text_color: "#1D4ED8",
            },
            Self::Unknown => UNKNOWN_DISPLAY,
        }
    }
}

/// Classify a raw transaction status string into its display descriptor.
pub fn classify_status(raw: &str) -> StatusDisplay {
    TransactionStatus::parse(raw).display()
}

/// Classify a raw decision outcome string into its display descriptor.
pub fn classify_outcome(raw: &str) -> StatusDisplay {
    DecisionOutcome::parse(raw).display()
}

/// Classify a raw alert severity string into its display descriptor.
pub fn classify_severity(raw: &str) -> StatusDisplay {
    AlertSeverity::parse(raw).display()
}

macro_rules! string_backed_serde {
    ($type:ty) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $type {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

string_backed_serde!(TransactionStatus);
string_backed_serde!(DecisionOutcome);
string_backed_serde!(AlertSeverity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_fixed_descriptors() {
        for status in TransactionStatus::ALL_KNOWN {
            let display = classify_status(status.as_str());
            assert_eq!(display, status.display());
            assert!(!display.text.is_empty());
        }
        assert_eq!(classify_status("escrow").text, "In Escrow");
        assert_eq!(classify_status("completed").text, "Completed");
    }

    #[test]
    fn unrecognized_input_falls_back_to_pending() {
        for raw in ["", "   ", "no_such_status", "pending_v2"] {
            let display = classify_status(raw);
            assert_eq!(display.text, "Pending");
            assert_eq!(display.background_color, "#F3F4F6");
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            TransactionStatus::parse("Completed"),
            TransactionStatus::Completed
        );
        assert_eq!(
            TransactionStatus::parse("  KYC_REQUIRED  "),
            TransactionStatus::KycRequired
        );
        assert_eq!(AlertSeverity::parse("CRITICAL"), AlertSeverity::Critical);
        assert_eq!(DecisionOutcome::parse("Approve"), DecisionOutcome::Approve);
    }

    #[test]
    fn decoding_is_total() {
        let status: TransactionStatus = serde_json::from_str("\"escrow\"").unwrap();
        assert_eq!(status, TransactionStatus::Escrow);

        let status: TransactionStatus = serde_json::from_str("\"definitely_new\"").unwrap();
        assert_eq!(status, TransactionStatus::Unknown);
        assert_eq!(status.display().text, "Pending");
    }

    #[test]
    fn outcome_and_severity_fallbacks() {
        assert_eq!(classify_outcome("decline").text, "Declined");
        assert_eq!(classify_outcome("???").text, "Unknown");
        assert_eq!(classify_severity("high").text, "High");
        assert_eq!(classify_severity("").text, "Unknown");
    }
}
