use serde::{Deserialize, Serialize};

use crate::error::MarketError;

use super::job::{Employer, Evaluation, Job, JobDraft, JobId, JobStatus};
use super::user::{UserProfile, UserRole, UserState};
use super::wallet::{Rupiah, Transaction, TxKind};

/// Minimum wallet top-up accepted by [`MarketSession::deposit`].
pub const MIN_DEPOSIT: Rupiah = 100_000;
/// Minimum balance a worker must hold as job insurance before applying.
pub const INSURANCE_THRESHOLD: Rupiah = 50_000;

/// Payment provider used for wallet top-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositMethod {
    Gopay,
    Ovo,
}

impl std::fmt::Display for DepositMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepositMethod::Gopay => write!(f, "GOPAY"),
            DepositMethod::Ovo => write!(f, "OVO"),
        }
    }
}

/// Snapshot of a job right after its deliverable was recorded, handed to the
/// caller so it can run the evaluation step for system jobs.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub job: Job,
}

/// What became of a submitted deliverable.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// System job: the evaluator passed it; the reward has been credited.
    AutoApproved { reward: Rupiah, feedback: String },
    /// System job: the evaluator rejected it; the job reopened.
    Rejected { feedback: String },
    /// Custom job: waiting for the employer to release payment.
    AwaitingReview,
}

/// One user's marketplace session: wallet, career progress, the shared job
/// pool, and the worker's single active job.
///
/// All transitions are synchronous, validate before mutating, and leave the
/// session untouched on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSession {
    user: UserState,
    jobs: Vec<Job>,
    active_job: Option<JobId>,
}

impl MarketSession {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            user: UserState::new(profile),
            jobs: Vec::new(),
            active_job: None,
        }
    }

    pub fn with_role(profile: UserProfile, role: UserRole) -> Self {
        let mut session = Self::new(profile);
        session.select_role(role);
        session
    }

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn active_job(&self) -> Option<&Job> {
        self.active_job.and_then(|id| self.job(id))
    }

    pub fn open_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|j| j.status == JobStatus::Open)
    }

    /// Submitted custom jobs waiting on this employer.
    pub fn pending_review(&self) -> impl Iterator<Item = &Job> {
        let me = self.user.id;
        self.jobs.iter().filter(move |j| {
            j.status == JobStatus::Submitted && j.employer == Employer::User(me)
        })
    }

    pub fn select_role(&mut self, role: UserRole) {
        self.user.role = Some(role);
    }

    /// Tops up the wallet. Fails below the [`MIN_DEPOSIT`] threshold with no
    /// state change.
    pub fn deposit(
        &mut self,
        amount: Rupiah,
        method: DepositMethod,
    ) -> Result<&Transaction, MarketError> {
        if amount < MIN_DEPOSIT {
            return Err(MarketError::DepositBelowMinimum {
                minimum: MIN_DEPOSIT,
                amount,
            });
        }
        Ok(self
            .user
            .wallet
            .record(TxKind::Deposit, amount, format!("Deposited via {method}")))
    }

    /// Rewards of this employer's posted jobs that have not yet been paid
    /// out. Counted against the balance when posting new jobs, so payment
    /// can never come up short at approval time.
    pub fn reserved_funds(&self) -> Rupiah {
        let me = self.user.id;
        self.jobs
            .iter()
            .filter(|j| j.employer == Employer::User(me) && j.status != JobStatus::Completed)
            .map(|j| j.reward)
            .sum()
    }

    /// Balance minus outstanding reservations.
    pub fn available_balance(&self) -> Rupiah {
        self.user.wallet.balance() - self.reserved_funds()
    }

    /// Posts a custom job to the pool. The reward is reserved, not debited;
    /// payment happens at approval.
    pub fn post_job(&mut self, draft: JobDraft) -> Result<JobId, MarketError> {
        self.require_role(UserRole::Employer)?;
        let available = self.available_balance();
        if available < draft.reward {
            return Err(MarketError::InsufficientBalance {
                required: draft.reward,
                available,
            });
        }
        let job = Job::posted(draft, self.user.id);
        let id = job.id;
        self.jobs.insert(0, job);
        Ok(id)
    }

    /// OPEN → ASSIGNED: the worker takes a job, which becomes their single
    /// active job.
    pub fn apply(&mut self, job_id: JobId) -> Result<(), MarketError> {
        self.require_role(UserRole::Worker)?;
        if self.active_job.is_some() {
            return Err(MarketError::ActiveJobExists);
        }
        let balance = self.user.wallet.balance();
        if balance < INSURANCE_THRESHOLD {
            return Err(MarketError::InsufficientBalance {
                required: INSURANCE_THRESHOLD,
                available: balance,
            });
        }
        let worker = self.user.id;
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Open)?;
        job.status = JobStatus::Assigned;
        job.worker = Some(worker);
        self.active_job = Some(job_id);
        Ok(())
    }

    /// ASSIGNED → SUBMITTED: records the deliverable on the active job and
    /// releases the active-job slot. The returned snapshot tells the caller
    /// whether an evaluation round is needed.
    pub fn submit(&mut self, text: &str) -> Result<PendingSubmission, MarketError> {
        self.require_role(UserRole::Worker)?;
        let job_id = self.active_job.ok_or(MarketError::NoActiveJob)?;
        if text.trim().is_empty() {
            return Err(MarketError::EmptySubmission);
        }
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Assigned)?;
        job.status = JobStatus::Submitted;
        job.submission = Some(text.to_string());
        let snapshot = job.clone();
        self.active_job = None;
        Ok(PendingSubmission { job: snapshot })
    }

    /// Resolves a system job's evaluation. A pass completes the job and
    /// settles the reward; a rejection reopens it for another attempt.
    pub fn apply_evaluation(
        &mut self,
        job_id: JobId,
        evaluation: Evaluation,
    ) -> Result<SubmissionOutcome, MarketError> {
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Submitted)?;
        if evaluation.success {
            job.status = JobStatus::Completed;
            let reward = job.reward;
            let title = job.title.clone();
            self.user
                .wallet
                .record(TxKind::Earning, reward, format!("Completed: {title}"));
            self.user.record_job_completion();
            Ok(SubmissionOutcome::AutoApproved {
                reward,
                feedback: evaluation.feedback,
            })
        } else {
            reopen(job);
            Ok(SubmissionOutcome::Rejected {
                feedback: evaluation.feedback,
            })
        }
    }

    /// SUBMITTED → COMPLETED: the employer releases payment for a submitted
    /// job they own.
    pub fn approve(&mut self, job_id: JobId) -> Result<&Transaction, MarketError> {
        self.require_role(UserRole::Employer)?;
        let me = self.user.id;
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Submitted)?;
        if job.employer != Employer::User(me) {
            return Err(MarketError::NotJobOwner);
        }
        job.status = JobStatus::Completed;
        let reward = job.reward;
        let title = job.title.clone();
        Ok(self
            .user
            .wallet
            .record(TxKind::Payment, -reward, format!("Paid for job: {title}")))
    }

    /// SUBMITTED → OPEN: the employer turns a deliverable down; the job goes
    /// back to the pool with worker and submission cleared.
    pub fn reject(&mut self, job_id: JobId) -> Result<(), MarketError> {
        self.require_role(UserRole::Employer)?;
        let me = self.user.id;
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Submitted)?;
        if job.employer != Employer::User(me) {
            return Err(MarketError::NotJobOwner);
        }
        reopen(job);
        Ok(())
    }

    /// ASSIGNED → OPEN: the worker walks away from their active job.
    pub fn abandon(&mut self) -> Result<(), MarketError> {
        self.require_role(UserRole::Worker)?;
        let job_id = self.active_job.ok_or(MarketError::NoActiveJob)?;
        let job = self.job_mut(job_id)?;
        expect_status(job, JobStatus::Assigned)?;
        reopen(job);
        self.active_job = None;
        Ok(())
    }

    /// Merges a fresh batch of generated listings into the pool: the new
    /// batch replaces the still-open system jobs (last response wins), while
    /// employer-posted and in-flight system jobs are untouched.
    pub fn sync_system_listings(&mut self, listings: Vec<Job>) {
        self.jobs
            .retain(|j| !(j.employer.is_system() && j.status == JobStatus::Open));
        self.jobs.extend(listings);
    }

    fn require_role(&self, role: UserRole) -> Result<(), MarketError> {
        if self.user.role == Some(role) {
            Ok(())
        } else {
            Err(MarketError::RoleRequired(role))
        }
    }

    fn job_mut(&mut self, id: JobId) -> Result<&mut Job, MarketError> {
        self.jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(MarketError::JobNotFound(id))
    }
}

fn expect_status(job: &Job, expected: JobStatus) -> Result<(), MarketError> {
    if job.status == expected {
        Ok(())
    } else {
        Err(MarketError::InvalidStatus {
            found: job.status,
            expected,
        })
    }
}

fn reopen(job: &mut Job) {
    job.status = JobStatus::Open;
    job.worker = None;
    job.submission = None;
}
