//! Loading and form-submission state machines.

use mounti_core::error::AppError;
use mounti_core::result::AppResult;

/// Data that is fetched once and then shown.
#[derive(Debug, Clone, Default)]
pub enum Loadable<T> {
    /// Request in flight.
    #[default]
    Loading,
    /// Data arrived.
    Ready(T),
    /// Request failed; its message is shown in place of the data.
    Failed(AppError),
}

impl<T> Loadable<T> {
    /// Settle from a gateway result.
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The data, when ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, when failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(error) => Some(&error.message),
            _ => None,
        }
    }

    /// Consume into a result, treating `Loading` as an internal error.
    pub fn into_result(self) -> AppResult<T> {
        match self {
            Self::Ready(value) => Ok(value),
            Self::Failed(error) => Err(error),
            Self::Loading => Err(AppError::internal("Data has not finished loading")),
        }
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Editable, nothing sent.
    #[default]
    Idle,
    /// Request in flight; further submits are refused.
    Submitting,
    /// Backend accepted the submission.
    Succeeded,
    /// Client-side validation or the backend rejected it.
    Failed(String),
}

impl FormPhase {
    /// Enter `Submitting`. Refused while a submission is already in flight.
    pub fn begin(&mut self) -> AppResult<()> {
        if *self == Self::Submitting {
            return Err(AppError::validation("A submission is already in progress"));
        }
        *self = Self::Submitting;
        Ok(())
    }

    /// Settle after the request completed.
    pub fn settle<T>(&mut self, result: &AppResult<T>) {
        *self = match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.message.clone()),
        };
    }

    /// Record a failure that happened before anything was sent.
    pub fn reject(&mut self, error: &AppError) {
        *self = Self::Failed(error.message.clone());
    }

    /// Return to `Idle` so the user can edit and retry.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        *self == Self::Submitting
    }

    /// Failure message, if the submission failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loadable_from_result() {
        let ok: Loadable<u32> = Loadable::from_result(Ok(3));
        assert_eq!(ok.ready(), Some(&3));
        let failed: Loadable<u32> = Loadable::from_result(Err(AppError::not_found("Trip not found")));
        assert_eq!(failed.error(), Some("Trip not found"));
        assert!(Loadable::<u32>::default().is_loading());
    }

    #[test]
    fn test_loadable_failure_keeps_error_kind() {
        let failed: Loadable<u32> =
            Loadable::from_result(Err(AppError::from_status(401, "Invalid session")));
        let err = failed.clone().into_result().unwrap_err();
        assert!(err.is_authentication());
        assert_eq!(err.status, Some(401));
        assert_eq!(err.message, "Invalid session");
    }

    #[test]
    fn test_form_phase_cycle() {
        let mut phase = FormPhase::default();
        phase.begin().unwrap();
        assert!(phase.begin().is_err());
        phase.settle::<()>(&Err(AppError::validation("Not enough seats available")));
        assert_eq!(phase.message(), Some("Not enough seats available"));
        phase.reset();
        assert_eq!(phase, FormPhase::Idle);
        phase.begin().unwrap();
        phase.settle(&Ok(()));
        assert_eq!(phase, FormPhase::Succeeded);
    }
}
