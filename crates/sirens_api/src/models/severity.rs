use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;

/// Operator-assigned priority classification of an issue. The wire format is
/// the uppercase name; older payloads carry free-form strings which are
/// migrated on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    /// Maps any historical severity spelling onto the canonical set.
    /// Legacy dashboards emitted `critical`/`error`/`warning`; anything
    /// unrecognized lands on the lowest rung rather than failing the parse.
    pub fn from_wire(value: &str) -> Severity {
        match value.trim().to_lowercase().as_str() {
            "high" | "critical" => Severity::High,
            "medium" | "error" => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Severity::from_wire(&raw))
    }
}
