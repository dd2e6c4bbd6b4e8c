//! Job model and job references
//!
//! A job is a named income source. Work entries and salary payments point at
//! jobs by id; deleting a job leaves those references dangling.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use super::ids::JobId;
use super::validation::DraftValidationError;

/// Label shown for entries whose job no longer exists
pub const UNKNOWN_JOB: &str = "Unknown Job";

/// A job the user tracks earnings against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: JobId,

    #[serde(default)]
    pub name: String,
}

impl Job {
    pub fn new(id: JobId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Fields the user supplies when creating or renaming a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub name: String,
}

impl JobDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as it will be stored
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_string()
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftValidationError::EmptyName);
        }
        if name.chars().count() > 100 {
            return Err(DraftValidationError::NameTooLong(name.chars().count()));
        }
        Ok(())
    }
}

/// Look up a job's display name, falling back to "Unknown Job"
pub fn resolve_job_name<'a>(jobs: &'a [Job], job: Option<&JobId>) -> &'a str {
    job.and_then(|id| jobs.iter().find(|j| &j.id == id))
        .map(|j| j.name.as_str())
        .unwrap_or(UNKNOWN_JOB)
}

/// Serde adapter for a record's `job` field
///
/// The API sends either a bare id, a populated `{ "_id": .., "name": .. }`
/// object, or `null` once the job is gone. Only the id is kept.
pub mod job_ref {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawJobRef {
        Id(String),
        Populated {
            #[serde(rename = "_id", alias = "id")]
            id: String,
        },
    }

    pub fn serialize<S: Serializer>(value: &Option<JobId>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => serializer.serialize_str(id.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<JobId>, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        let Some(value) = raw else {
            return Ok(None);
        };
        match serde_json::from_value::<Option<RawJobRef>>(value) {
            Ok(Some(RawJobRef::Id(id))) | Ok(Some(RawJobRef::Populated { id })) => {
                Ok(Some(JobId::new(id)))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                log::warn!("unreadable job reference ignored: {}", e);
                Ok(None)
            }
        }
    }
}
