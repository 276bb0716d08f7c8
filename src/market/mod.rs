mod job;
mod session;
mod user;
mod wallet;

pub use job::{Difficulty, Employer, Evaluation, Job, JobDraft, JobId, JobStatus, UserId};
pub use session::{
    DepositMethod, INSURANCE_THRESHOLD, MIN_DEPOSIT, MarketSession, PendingSubmission,
    SubmissionOutcome,
};
pub use user::{UserProfile, UserRole, UserState};
pub use wallet::{Rupiah, Transaction, TxKind, Wallet};
