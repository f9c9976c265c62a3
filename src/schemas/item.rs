//! Item schema - A trackable prerequisite of the authorization workflow

use serde::{Deserialize, Serialize};

/// Category an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Paperwork filled in by the clinic or patient
    Forms,
    /// Calendar commitments
    Scheduling,
    /// Identity and coverage documents
    Documents,
    /// Clinical evidence and coding
    Medical,
}

/// All categories in display order
pub const CATEGORIES: &[Category] = &[
    Category::Forms,
    Category::Scheduling,
    Category::Documents,
    Category::Medical,
];

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Forms => write!(f, "forms"),
            Category::Scheduling => write!(f, "scheduling"),
            Category::Documents => write!(f, "documents"),
            Category::Medical => write!(f, "medical"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forms" => Ok(Category::Forms),
            "scheduling" => Ok(Category::Scheduling),
            "documents" => Ok(Category::Documents),
            "medical" => Ok(Category::Medical),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// A single prerequisite tracked for approval.
///
/// Items are static configuration: every field is fixed when the registry is
/// built and never changes for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable unique identifier
    pub id: &'static str,

    /// Human-readable description
    pub label: &'static str,

    /// Grouping for display and reporting
    pub category: Category,

    /// Whether an external information request may be issued for this item
    pub requestable: bool,
}

impl Item {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        category: Category,
        requestable: bool,
    ) -> Self {
        Item {
            id,
            label,
            category,
            requestable,
        }
    }
}
