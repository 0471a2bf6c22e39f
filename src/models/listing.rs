use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Draft,
    Published,
    Retired,
}

impl FromStr for ListingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "retired" => Ok(Self::Retired),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Retired => write!(f, "retired"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLevel {
    #[default]
    Foundation,
    Practitioner,
    Lead,
}

impl FromStr for ProgramLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "foundation" => Ok(Self::Foundation),
            "practitioner" => Ok(Self::Practitioner),
            "lead" => Ok(Self::Lead),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ProgramLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Foundation => write!(f, "foundation"),
            Self::Practitioner => write!(f, "practitioner"),
            Self::Lead => write!(f, "lead"),
        }
    }
}

/// A consulting service offered on the site, rendered as a card on the home
/// page and a detail page at `/services/{slug}`.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body_markdown: String,
    pub body_html: String,
    pub status: ListingStatus,
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A training programme, rendered alongside services with a level badge.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingProgram {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body_markdown: String,
    pub body_html: String,
    pub level: ProgramLevel,
    pub duration_days: Option<i64>,
    pub status: ListingStatus,
    pub display_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewService {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub body_markdown: String,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub display_order: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewProgram {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub body_markdown: String,
    #[serde(default)]
    pub level: ProgramLevel,
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub display_order: i64,
}
