use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::job::UserId;
use super::wallet::Wallet;

/// Experience awarded per completed job.
pub const XP_PER_COMPLETION: u32 = 25;
/// Experience required per career level.
pub const XP_PER_LEVEL: u32 = 100;
/// Rating increase per completed job, capped at [`MAX_RATING`].
pub const RATING_STEP: f64 = 0.05;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Worker,
    Employer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Worker => write!(f, "WORKER"),
            UserRole::Employer => write!(f, "EMPLOYER"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub location: String,
    pub rating: f64,
    pub jobs_completed: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".to_string(),
            skills: Vec::new(),
            location: String::new(),
            rating: 5.0,
            jobs_completed: 0,
        }
    }
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The session user: wallet, career progress, and profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserState {
    pub id: UserId,
    pub role: Option<UserRole>,
    pub wallet: Wallet,
    pub career_level: u32,
    pub experience: u32,
    pub profile: UserProfile,
}

impl UserState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: None,
            wallet: Wallet::new(),
            career_level: 1,
            experience: 0,
            profile,
        }
    }

    /// Adds experience and recomputes the derived career level.
    /// Level is `experience / 100 + 1`, so a fresh user is level 1.
    pub fn add_experience(&mut self, points: u32) {
        self.experience += points;
        self.career_level = self.experience / XP_PER_LEVEL + 1;
    }

    /// Career bookkeeping for one completed job: experience, level,
    /// completion count, and rating bump.
    pub fn record_job_completion(&mut self) {
        self.add_experience(XP_PER_COMPLETION);
        self.profile.jobs_completed += 1;
        self.profile.rating = (self.profile.rating + RATING_STEP).min(MAX_RATING);
    }
}
