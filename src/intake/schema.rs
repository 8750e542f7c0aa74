use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::KardiaError;

/// Number of clinical measurements in one feature vector.
pub const FEATURE_COUNT: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub kind: FieldKind,
    pub label: &'static str,
}

/// Ordered feature schema. The position of each entry is the index its value
/// occupies in the outbound vector and must match what the classifier expects.
pub const FIELD_SCHEMA: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec { key: FieldKey::Age, kind: FieldKind::Integer, label: "Age" },
    FieldSpec { key: FieldKey::Sex, kind: FieldKind::Integer, label: "Sex (1=Male, 0=Female)" },
    FieldSpec { key: FieldKey::Cp, kind: FieldKind::Integer, label: "Chest Pain Type (0-3)" },
    FieldSpec {
        key: FieldKey::Trestbps,
        kind: FieldKind::Integer,
        label: "Resting Blood Pressure",
    },
    FieldSpec {
        key: FieldKey::Chol,
        kind: FieldKind::Integer,
        label: "Serum Cholesterol (mg/dl)",
    },
    FieldSpec {
        key: FieldKey::Fbs,
        kind: FieldKind::Integer,
        label: "Fasting Blood Sugar > 120 mg/dl (1 = true; 0 = false)",
    },
    FieldSpec {
        key: FieldKey::Restecg,
        kind: FieldKind::Integer,
        label: "Resting ECG Result (0-2)",
    },
    FieldSpec {
        key: FieldKey::Thalach,
        kind: FieldKind::Integer,
        label: "Max Heart Rate Achieved",
    },
    FieldSpec {
        key: FieldKey::Exang,
        kind: FieldKind::Integer,
        label: "Exercise Induced Angina (1 = yes; 0 = no)",
    },
    FieldSpec {
        key: FieldKey::Oldpeak,
        kind: FieldKind::Float,
        label: "ST Depression by Exercise",
    },
    FieldSpec {
        key: FieldKey::Slope,
        kind: FieldKind::Integer,
        label: "Slope of the Peak ST Segment (0-2)",
    },
    FieldSpec {
        key: FieldKey::Ca,
        kind: FieldKind::Integer,
        label: "Number of Major Vessels (0-3)",
    },
    FieldSpec {
        key: FieldKey::Thal,
        kind: FieldKind::Integer,
        label: "Thalassemia (1=normal, 2=fixed defect, 3=reversible)",
    },
];

impl FieldKey {
    pub const ALL: [FieldKey; FEATURE_COUNT] = [
        FieldKey::Age,
        FieldKey::Sex,
        FieldKey::Cp,
        FieldKey::Trestbps,
        FieldKey::Chol,
        FieldKey::Fbs,
        FieldKey::Restecg,
        FieldKey::Thalach,
        FieldKey::Exang,
        FieldKey::Oldpeak,
        FieldKey::Slope,
        FieldKey::Ca,
        FieldKey::Thal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Age => "age",
            FieldKey::Sex => "sex",
            FieldKey::Cp => "cp",
            FieldKey::Trestbps => "trestbps",
            FieldKey::Chol => "chol",
            FieldKey::Fbs => "fbs",
            FieldKey::Restecg => "restecg",
            FieldKey::Thalach => "thalach",
            FieldKey::Exang => "exang",
            FieldKey::Oldpeak => "oldpeak",
            FieldKey::Slope => "slope",
            FieldKey::Ca => "ca",
            FieldKey::Thal => "thal",
        }
    }

    /// Position of this field in the feature vector. Variant order mirrors
    /// `FIELD_SCHEMA`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn spec(&self) -> &'static FieldSpec {
        &FIELD_SCHEMA[self.index()]
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = KardiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| KardiaError::UnknownField(s.to_string()))
    }
}
