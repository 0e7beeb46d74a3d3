use std::time::{Duration, Instant};

use crate::errors::{SiftError, SiftResult};

/// Caller-supplied cut-off for a single query.
///
/// Checked before every collaborator call. `Deadline::none()` never expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn none() -> Self {
        Self { at: None }
    }

    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    pub fn instant(&self) -> Option<Instant> {
        self.at
    }

    /// Time left, `None` when unbounded. Saturates at zero.
    pub fn remaining(&self) -> Option<Duration> {
        self.at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    /// Fail with `DeadlineExceeded` naming `stage` if the deadline has passed.
    pub fn check(&self, stage: &str) -> SiftResult<()> {
        if self.is_expired() {
            return Err(SiftError::DeadlineExceeded {
                stage: stage.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_deadline_never_expires() {
        let deadline = Deadline::none();
        assert!(!deadline.is_expired());
        assert!(deadline.remaining().is_none());
        assert!(deadline.check("strategy").is_ok());
    }

    #[test]
    fn past_deadline_fails_check_with_stage() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.is_expired());
        assert_eq!(deadline.remaining(), Some(Duration::ZERO));
        let err = deadline.check("graph expansion").unwrap_err();
        assert!(err.to_string().contains("graph expansion"));
    }

    #[test]
    fn future_deadline_has_time_left() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.is_expired());
        assert!(deadline.remaining().unwrap() > Duration::from_secs(50));
    }
}
