pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod matching;
pub mod roster;
pub mod timesheet;

pub use error::{DeskError, DeskResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching and roster functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub experience_years: f32,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        experience_years: f32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            experience_years,
        }
    }
}

/// エンジニアの稼働状況
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Assigned,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Assigned => "assigned",
            Availability::Unavailable => "unavailable",
        }
    }
}

impl FromStr for Availability {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "assigned" => Ok(Availability::Assigned),
            "unavailable" => Ok(Availability::Unavailable),
            other => Err(DeskError::InvalidArgument(format!(
                "unknown availability '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub skills: Vec<Skill>,
    pub availability: Availability,
}

impl Engineer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub required_skills: Vec<String>,
    pub assigned_engineer_ids: Vec<String>,
}
