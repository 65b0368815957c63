//! Form/state controller for one plan session.
//!
//! All view state lives in [`SessionState`] and changes only through
//! [`SessionState::transition`]:
//!
//! ```text
//! Idle | Error --Submit--> Requesting --Succeeded--> Result
//!       |                      |
//!       +------Rejected--------+-------Failed------> Error
//! Idle | Result | Error --Reset--> Idle
//! ```

use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::error::{FitError, Result};
use crate::plan::PlanProvider;
use crate::presenter::{PlanView, ResultTab};
use crate::types::{GeneratedPlan, ProfileField, UserProfile};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Input form, no message.
    #[default]
    Idle,
    /// A request is in flight; submitting again is refused.
    Requesting,
    /// A plan was generated and is being shown.
    Result(PlanView),
    /// Input form with the failure message shown above it.
    Error(String),
}

/// Inputs to [`SessionState::transition`].
#[derive(Debug)]
pub enum SessionEvent {
    Submit,
    /// The profile failed validation before any request was made.
    Rejected(String),
    Succeeded(GeneratedPlan),
    Failed(FitError),
    Reset,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Rejected(_) => "reject",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
            Self::Reset => "reset",
        }
    }
}

impl SessionState {
    /// The single authoritative transition function.
    ///
    /// Illegal transitions return the unchanged state alongside the error.
    pub fn transition(
        self,
        event: SessionEvent,
    ) -> std::result::Result<SessionState, (SessionState, FitError)> {
        match (self, event) {
            (Self::Idle | Self::Error(_), SessionEvent::Submit) => Ok(Self::Requesting),
            (Self::Idle | Self::Error(_), SessionEvent::Rejected(message)) => {
                Ok(Self::Error(message))
            }
            (Self::Requesting, SessionEvent::Succeeded(plan)) => {
                Ok(Self::Result(PlanView::new(plan)))
            }
            (Self::Requesting, SessionEvent::Failed(err)) => Ok(Self::Error(err.user_message())),
            (Self::Idle | Self::Result(_) | Self::Error(_), SessionEvent::Reset) => Ok(Self::Idle),
            (state, event) => {
                let err = FitError::InvalidState(format!(
                    "cannot {} while {}",
                    event.name(),
                    state.name()
                ));
                Err((state, err))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requesting => "requesting",
            Self::Result(_) => "showing a result",
            Self::Error(_) => "showing an error",
        }
    }

    /// Whether the input form (rather than a result) is on screen.
    pub fn shows_form(&self) -> bool {
        matches!(self, Self::Idle | Self::Requesting | Self::Error(_))
    }
}

/// One form session: the editable profile plus the view state.
#[derive(Debug, Clone, Default)]
pub struct PlanSession {
    profile: UserProfile,
    state: SessionState,
    submitted: Option<UserProfile>,
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-filled profile instead of the form defaults.
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The profile captured by the last submission.
    pub fn submitted_profile(&self) -> Option<&UserProfile> {
        self.submitted.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Requesting)
    }

    pub fn plan(&self) -> Option<&GeneratedPlan> {
        match &self.state {
            SessionState::Result(view) => Some(view.plan()),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&PlanView> {
        match &self.state {
            SessionState::Result(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Edit one profile field while the form is editable.
    pub fn edit(&mut self, field: ProfileField, raw: &str) -> Result<()> {
        if !matches!(self.state, SessionState::Idle | SessionState::Error(_)) {
            return Err(FitError::InvalidState(format!(
                "cannot edit {field} while {}",
                self.state.name()
            )));
        }
        self.profile.set_field(field, raw)
    }

    /// Switch result tabs; only meaningful while a result is shown.
    pub fn select_tab(&mut self, tab: ResultTab) -> Result<()> {
        match &mut self.state {
            SessionState::Result(view) => {
                view.select_tab(tab);
                Ok(())
            }
            other => Err(FitError::InvalidState(format!(
                "cannot select a tab while {}",
                other.name()
            ))),
        }
    }

    fn apply(&mut self, event: SessionEvent) -> Result<()> {
        let from = self.state.name();
        match std::mem::take(&mut self.state).transition(event) {
            Ok(next) => {
                info!(from, to = next.name(), "Session transition");
                self.state = next;
                Ok(())
            }
            Err((unchanged, err)) => {
                self.state = unchanged;
                Err(err)
            }
        }
    }

    /// First half of a submission: validate, move to `Requesting`, and return
    /// the profile to send.
    ///
    /// A profile outside the form bounds moves the session to `Error` and no
    /// request should be issued.
    pub fn begin_submit(&mut self) -> Result<UserProfile> {
        if self.is_loading() {
            return Err(FitError::InvalidState(
                "a plan request is already in flight".into(),
            ));
        }
        if let Err(err) = self.profile.validate() {
            self.apply(SessionEvent::Rejected(err.user_message()))?;
            return Err(err);
        }
        self.apply(SessionEvent::Submit)?;
        let profile = self.profile.clone();
        self.submitted = Some(profile.clone());
        Ok(profile)
    }

    /// Second half of a submission: record the outcome of the request.
    pub fn complete(&mut self, outcome: Result<GeneratedPlan>) -> Result<()> {
        let event = match outcome {
            Ok(plan) => SessionEvent::Succeeded(plan),
            Err(err) => {
                error!(kind = ?err.kind(), error = %err, "Plan generation failed");
                SessionEvent::Failed(err)
            }
        };
        self.apply(event)
    }

    /// Run a full submission against `provider`: exactly one request.
    ///
    /// Returns the resulting state. Generation failures are reflected in the
    /// state rather than returned; only validation and state errors are `Err`.
    pub async fn submit(&mut self, provider: &dyn PlanProvider) -> Result<&SessionState> {
        let profile = self.begin_submit()?;
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("plan_request", %request_id);
        let outcome = provider.generate_plan(&profile).instrument(span).await;
        self.complete(outcome)?;
        Ok(&self.state)
    }

    /// Discard any plan or error and return to a fresh input form.
    pub fn reset(&mut self) -> Result<()> {
        self.apply(SessionEvent::Reset)?;
        self.profile = UserProfile::default();
        self.submitted = None;
        Ok(())
    }
}
