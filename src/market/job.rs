use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wallet::Rupiah;

pub type JobId = Uuid;
pub type UserId = Uuid;

/// Lifecycle status of a job in the marketplace pool.
///
/// Jobs flow OPEN → ASSIGNED → SUBMITTED → COMPLETED. A rejected or
/// abandoned job returns to OPEN; COMPLETED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Assigned,
    Submitted,
    Completed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Open => write!(f, "OPEN"),
            JobStatus::Assigned => write!(f, "ASSIGNED"),
            JobStatus::Submitted => write!(f, "SUBMITTED"),
            JobStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Who authored a job: the AI job board or a posting employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Employer {
    System,
    User(UserId),
}

impl Employer {
    pub fn is_system(&self) -> bool {
        matches!(self, Employer::System)
    }
}

/// A unit of work with a fixed reward and lifecycle status.
///
/// Jobs reference their employer and worker by id only; the pool is the
/// single owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub reward: Rupiah,
    pub difficulty: Difficulty,
    pub category: String,
    pub status: JobStatus,
    pub employer: Employer,
    pub worker: Option<UserId>,
    pub location: Option<String>,
    pub time_limit: Option<String>,
    pub image_url: Option<String>,
    pub submission: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    /// A job authored by the AI job board. Listings arrive without a trusted
    /// id or placement metadata, so both are assigned here.
    pub fn generated(
        title: String,
        description: String,
        reward: Rupiah,
        difficulty: Difficulty,
        category: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            reward,
            difficulty,
            category,
            status: JobStatus::Open,
            employer: Employer::System,
            worker: None,
            location: Some("Remote".to_string()),
            time_limit: Some("48 Hours".to_string()),
            image_url: None,
            submission: None,
            posted_at: Utc::now(),
        }
    }

    /// A custom job posted by an employer from a draft form.
    pub fn posted(draft: JobDraft, employer: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            reward: draft.reward,
            difficulty: Difficulty::Medium,
            category: "Custom".to_string(),
            status: JobStatus::Open,
            employer: Employer::User(employer),
            worker: None,
            location: draft.location,
            time_limit: draft.time_limit,
            image_url: draft.image_url,
            submission: None,
            posted_at: Utc::now(),
        }
    }
}

/// Employer-side posting form for a custom job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub reward: Rupiah,
    pub location: Option<String>,
    pub time_limit: Option<String>,
    pub image_url: Option<String>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            reward: 100_000,
            location: None,
            time_limit: Some("24 Hours".to_string()),
            image_url: None,
        }
    }
}

/// Pass/fail judgment returned by the AI evaluator for a submitted
/// deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub success: bool,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_job_defaults() {
        let job = Job::generated(
            "Landing page copy".into(),
            "Write copy for a landing page".into(),
            250_000,
            Difficulty::Medium,
            "Writing".into(),
        );
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.employer, Employer::System);
        assert_eq!(job.location.as_deref(), Some("Remote"));
        assert_eq!(job.time_limit.as_deref(), Some("48 Hours"));
        assert!(job.worker.is_none());
        assert!(job.submission.is_none());
    }

    #[test]
    fn posted_job_takes_draft_fields() {
        let employer = Uuid::new_v4();
        let draft = JobDraft {
            title: "Logo Design".into(),
            description: "Design a logo for a coffee shop".into(),
            reward: 300_000,
            location: Some("Jakarta".into()),
            ..Default::default()
        };
        let job = Job::posted(draft, employer);

        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.employer, Employer::User(employer));
        assert_eq!(job.category, "Custom");
        assert_eq!(job.difficulty, Difficulty::Medium);
        assert_eq!(job.reward, 300_000);
        assert_eq!(job.location.as_deref(), Some("Jakarta"));
        assert_eq!(job.time_limit.as_deref(), Some("24 Hours"));
    }

    #[test]
    fn generated_jobs_get_distinct_ids() {
        let a = Job::generated("A".into(), "a".into(), 50_000, Difficulty::Easy, "X".into());
        let b = Job::generated("B".into(), "b".into(), 50_000, Difficulty::Easy, "X".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn job_draft_defaults() {
        let draft = JobDraft::default();
        assert_eq!(draft.reward, 100_000);
        assert_eq!(draft.time_limit.as_deref(), Some("24 Hours"));
    }

    #[test]
    fn status_display() {
        assert_eq!(JobStatus::Open.to_string(), "OPEN");
        assert_eq!(JobStatus::Assigned.to_string(), "ASSIGNED");
        assert_eq!(JobStatus::Submitted.to_string(), "SUBMITTED");
        assert_eq!(JobStatus::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn job_serialization_roundtrip() {
        let job = Job::generated(
            "Data entry".into(),
            "Tidy up a spreadsheet".into(),
            75_000,
            Difficulty::Easy,
            "Data Analysis".into(),
        );
        let json = serde_json::to_string(&job).unwrap();
        let deserialized: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, job.id);
        assert_eq!(deserialized.employer, Employer::System);
        assert_eq!(deserialized.difficulty, Difficulty::Easy);
    }
}
