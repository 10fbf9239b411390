// File: src/submit.rs
// Purpose: Submission collaborators that receive a validated application

use tracing::{debug, info, warn};

use crate::normalized::ValidApplication;

/// Receives each application that passes validation
///
/// What happens next (network call, storage, notification) is up to the
/// implementor; the controller only hands over the value.
pub trait Submitter {
    fn submit(&mut self, application: ValidApplication);
}

impl<F> Submitter for F
where
    F: FnMut(ValidApplication),
{
    fn submit(&mut self, application: ValidApplication) {
        self(application)
    }
}

/// Default collaborator: logs the submitted application and drops it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&mut self, application: ValidApplication) {
        info!(
            university = %application.university,
            members = application.member_count(),
            "Form submitted"
        );
        match serde_json::to_string(&application) {
            Ok(payload) => debug!(%payload, "Submitted application"),
            Err(e) => warn!(error = %e, "Failed to serialize submitted application"),
        }
    }
}

/// Keeps submitted applications until someone drains them
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    submitted: Vec<ValidApplication>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.submitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submitted.is_empty()
    }

    pub fn last(&self) -> Option<&ValidApplication> {
        self.submitted.last()
    }

    /// Take every application submitted so far
    pub fn drain(&mut self) -> Vec<ValidApplication> {
        std::mem::take(&mut self.submitted)
    }
}

impl Submitter for Outbox {
    fn submit(&mut self, application: ValidApplication) {
        debug!(queued = self.submitted.len() + 1, "Application queued in outbox");
        self.submitted.push(application);
    }
}
