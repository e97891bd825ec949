use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle status of a project. Unrecognized input never fails: anything
/// that is not `active` or `completed` collapses to `Pending`, which also
/// drives the display label fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Completed,
    Pending,
}

impl ProjectStatus {
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Display label shown on summary rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "In Progress",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&s))
    }
}

/// A billable unit of contracted work with a fixed price.
/// `price` is the contract value, not the cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub address: String,
    pub client_name: String,
    #[serde(default)]
    pub client_contact: Option<String>,
    pub status: ProjectStatus,
    pub price: Decimal,
    #[serde(default)]
    pub stage: Option<String>,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: Option<u8>,
}
