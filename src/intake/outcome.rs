use serde::{
    Deserialize,
    Serialize,
};

pub const HIGH_RISK_MESSAGE: &str = "⚠️ High likelihood of heart disease. Consult a doctor.";
pub const LOW_RISK_MESSAGE: &str =
    "✅ Low likelihood of heart disease. Maintain a healthy lifestyle.";

/// Binary label returned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    pub fn from_prediction(prediction: i64) -> Option<Self> {
        match prediction {
            0 => Some(RiskLabel::Low),
            1 => Some(RiskLabel::High),
            _ => None,
        }
    }

    pub fn as_prediction(&self) -> u8 {
        match self {
            RiskLabel::Low => 0,
            RiskLabel::High => 1,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskLabel::Low => LOW_RISK_MESSAGE,
            RiskLabel::High => HIGH_RISK_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Success(RiskLabel),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }

    /// Text the presentation layer shows for this outcome, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Idle | SubmissionOutcome::Pending => None,
            SubmissionOutcome::Success(label) => Some(label.message()),
            SubmissionOutcome::Failure(message) => Some(message),
        }
    }
}

pub fn render(outcome: &SubmissionOutcome) -> Option<String> {
    outcome.message().map(str::to_string)
}
