//! Sign-up flow operations
//!
//! Each network operation has the same shape: take a ticket from the state,
//! call the API without holding the state, then apply the result only if the
//! ticket is still current. The caller decides what to do with the returned
//! toast (the UI shows it; tests inspect it).

use dioxus::prelude::*;

use crate::api::{ApiError, AuthApi};
use crate::models::{Role, SignupPayload};
use crate::state::{Action, SignupEvent, SignupState, Step, Ticket, Toast};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";
pub const REQUEST_FAILED: &str = "Request failed";
pub const REQUEST_SUBMITTED: &str = "Request submitted";
pub const REQUEST_SUBMITTED_DETAIL: &str =
    "We'll review your request and send an invitation code to your email if approved.";
pub const INVALID_CODE: &str = "Invalid code";
pub const INVALID_CODE_DETAIL: &str = "The invitation code is invalid or expired.";
pub const VERIFICATION_FAILED: &str = "Verification failed";
pub const SIGNUP_FAILED: &str = "Uh oh! Something went wrong.";
pub const FILL_ALL_FIELDS: &str = "Please fill in all the fields.";
pub const ACCOUNT_CREATED: &str = "Account created.";
pub const ACCOUNT_CREATED_DETAIL: &str = "You can now log in with your new account.";

/// Somewhere the flow state lives: a plain value in tests, a signal in the UI
pub trait FlowStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut SignupState) -> R) -> R;
}

impl FlowStore for SignupState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SignupState) -> R) -> R {
        f(self)
    }
}

impl FlowStore for Signal<SignupState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SignupState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub toast: Option<Toast>,
    /// The account exists; the caller should move on to the login page
    pub signed_up: bool,
}

impl SubmitOutcome {
    fn refused() -> Self {
        SubmitOutcome { toast: None, signed_up: false }
    }

    fn failed(toast: Toast) -> Self {
        SubmitOutcome { toast: Some(toast), signed_up: false }
    }
}

fn message_or<'a>(err: &'a ApiError, fallback: &'a str) -> &'a str {
    err.server_message().unwrap_or(fallback)
}

pub fn select_role<S: FlowStore>(store: &mut S, role: Role) -> Step {
    store.update(|state| {
        state.dispatch(SignupEvent::RoleSelected(role));
        state.step
    })
}

/// Leaves the invitation step for the role choice
pub fn back<S: FlowStore>(store: &mut S) -> Step {
    store.update(|state| {
        state.dispatch(SignupEvent::Back);
        state.step
    })
}

/// Asks for an invitation code for the email currently in the form.
pub async fn request_invitation<S, A>(store: &mut S, api: &A) -> Option<Toast>
where
    S: FlowStore,
    A: AuthApi + ?Sized,
{
    let (ticket, email) = store.update(|state| {
        state
            .begin(Action::RequestInvitation)
            .map(|ticket| (ticket, state.form.email.clone()))
    })?;

    let result = api.request_invitation(&email).await;

    store.update(|state| {
        if !state.finish(ticket) {
            return None;
        }
        let toast = match result {
            Ok(()) => {
                tracing::info!("Invitation request accepted");
                state.dispatch(SignupEvent::InvitationRequested);
                Toast::success(REQUEST_SUBMITTED, REQUEST_SUBMITTED_DETAIL)
            }
            Err(err) => {
                tracing::warn!("Invitation request failed: {}", err);
                Toast::error(REQUEST_FAILED, message_or(&err, UNEXPECTED_ERROR))
            }
        };
        Some(toast)
    })
}

/// Checks the invitation code in the form; on success the flow moves to details.
pub async fn verify_invitation_code<S, A>(store: &mut S, api: &A) -> Option<Toast>
where
    S: FlowStore,
    A: AuthApi + ?Sized,
{
    let (ticket, code) = store.update(|state| {
        state
            .begin(Action::VerifyInvitation)
            .map(|ticket| (ticket, state.form.invitation_code.clone()))
    })?;

    let result = api.verify_invitation(&code).await;

    store.update(|state| {
        if !state.finish(ticket) {
            return None;
        }
        match result {
            Ok(()) => {
                state.dispatch(SignupEvent::InvitationVerified);
                None
            }
            Err(err @ ApiError::Server { .. }) => {
                tracing::warn!("Invitation code rejected: {}", err);
                Some(Toast::error(INVALID_CODE, message_or(&err, INVALID_CODE_DETAIL)))
            }
            Err(err) => {
                tracing::warn!("Invitation verification failed: {}", err);
                Some(Toast::error(VERIFICATION_FAILED, UNEXPECTED_ERROR))
            }
        }
    })
}

enum SubmitStart {
    Refused,
    Invalid,
    Ready(Ticket, SignupPayload),
}

/// Validates the details step and creates the account.
pub async fn submit<S, A>(store: &mut S, api: &A) -> SubmitOutcome
where
    S: FlowStore,
    A: AuthApi + ?Sized,
{
    let start = store.update(|state| {
        if state.step != Step::Details || state.is_pending(Action::Submit) {
            return SubmitStart::Refused;
        }
        let payload = match state.form.signup_payload() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("Sign-up form incomplete: {}", err);
                return SubmitStart::Invalid;
            }
        };
        match state.begin(Action::Submit) {
            Some(ticket) => SubmitStart::Ready(ticket, payload),
            None => SubmitStart::Refused,
        }
    });

    let (ticket, payload) = match start {
        SubmitStart::Refused => return SubmitOutcome::refused(),
        SubmitStart::Invalid => return SubmitOutcome::failed(Toast::error(SIGNUP_FAILED, FILL_ALL_FIELDS)),
        SubmitStart::Ready(ticket, payload) => (ticket, payload),
    };

    let result = api.signup(&payload).await;

    store.update(|state| {
        if !state.finish(ticket) {
            return SubmitOutcome::refused();
        }
        match result {
            Ok(()) => {
                tracing::info!("Account created ({})", payload.role().as_str());
                SubmitOutcome {
                    toast: Some(Toast::success(ACCOUNT_CREATED, ACCOUNT_CREATED_DETAIL)),
                    signed_up: true,
                }
            }
            Err(err) => {
                tracing::warn!("Sign-up failed: {}", err);
                SubmitOutcome::failed(Toast::error(SIGNUP_FAILED, message_or(&err, UNEXPECTED_ERROR)))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;
    use crate::state::{InvitationMode, NotificationType};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::task::Poll;
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        RequestInvitation(String),
        VerifyInvitation(String),
        Signup(Value),
    }

    /// Answers every endpoint with `reply`; optionally holds calls until released
    struct MockApi {
        reply: Result<(), ApiError>,
        calls: RefCell<Vec<Call>>,
        gated: bool,
        gate: Notify,
    }

    impl MockApi {
        fn replying(reply: Result<(), ApiError>) -> Self {
            MockApi {
                reply,
                calls: RefCell::new(Vec::new()),
                gated: false,
                gate: Notify::new(),
            }
        }

        fn ok() -> Self {
            Self::replying(Ok(()))
        }

        fn gated() -> Self {
            MockApi { gated: true, ..Self::ok() }
        }

        fn server_error(status: u16, message: Option<&str>) -> Self {
            Self::replying(Err(ApiError::Server {
                status,
                message: message.map(str::to_string),
            }))
        }

        fn network_error() -> Self {
            Self::replying(Err(ApiError::Network("connection refused".to_string())))
        }

        fn release(&self) {
            self.gate.notify_one();
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        async fn answer(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.gated {
                self.gate.notified().await;
            }
            self.reply.clone()
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for MockApi {
        async fn request_invitation(&self, email: &str) -> Result<(), ApiError> {
            self.answer(Call::RequestInvitation(email.to_string())).await
        }

        async fn verify_invitation(&self, code: &str) -> Result<(), ApiError> {
            self.answer(Call::VerifyInvitation(code.to_string())).await
        }

        async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
            self.answer(Call::Signup(serde_json::to_value(payload).unwrap())).await
        }
    }

    /// Lets two in-flight operations share one state
    impl FlowStore for Rc<RefCell<SignupState>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut SignupState) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn project_manager_with_code(code: &str) -> SignupState {
        let mut state = SignupState::new();
        select_role(&mut state, Role::ProjectManager);
        state.dispatch(SignupEvent::FieldChanged(FormField::InvitationCode, code.to_string()));
        state
    }

    fn annotator_details(domain: &[&str], lang: &[&str], location: &str) -> SignupState {
        let mut state = SignupState::new();
        select_role(&mut state, Role::Annotator);
        for (field, value) in [
            (FormField::Name, "Ann"),
            (FormField::Email, "ann@example.com"),
            (FormField::Password, "secret1"),
            (FormField::Phone, "+15550100"),
            (FormField::Location, location),
        ] {
            state.dispatch(SignupEvent::FieldChanged(field, value.to_string()));
        }
        state.dispatch(SignupEvent::DomainChanged(domain.iter().map(|s| s.to_string()).collect()));
        state.dispatch(SignupEvent::LangChanged(lang.iter().map(|s| s.to_string()).collect()));
        state
    }

    #[test]
    fn test_select_role_reports_next_step() {
        assert_eq!(select_role(&mut SignupState::new(), Role::Annotator), Step::Details);
        assert_eq!(select_role(&mut SignupState::new(), Role::ProjectManager), Step::Invitation);
    }

    #[tokio::test]
    async fn test_verify_success_moves_to_details() {
        let mut state = project_manager_with_code("ABC123");
        let api = MockApi::ok();

        let toast = verify_invitation_code(&mut state, &api).await;

        assert!(toast.is_none());
        assert_eq!(state.step, Step::Details);
        assert_eq!(api.calls(), vec![Call::VerifyInvitation("ABC123".to_string())]);
        assert!(!state.is_pending(Action::VerifyInvitation));
    }

    #[tokio::test]
    async fn test_verify_rejection_shows_server_message() {
        let mut state = project_manager_with_code("WRONG");
        let api = MockApi::server_error(400, Some("expired"));

        let toast = verify_invitation_code(&mut state, &api).await.unwrap();

        assert_eq!(toast.notification_type, NotificationType::Error);
        assert_eq!(toast.title, INVALID_CODE);
        assert_eq!(toast.description, "expired");
        assert_eq!(state.step, Step::Invitation);
    }

    #[tokio::test]
    async fn test_verify_rejection_without_message_uses_default() {
        let mut state = project_manager_with_code("WRONG");
        let api = MockApi::server_error(400, None);

        let toast = verify_invitation_code(&mut state, &api).await.unwrap();
        assert_eq!(toast.description, INVALID_CODE_DETAIL);
    }

    #[tokio::test]
    async fn test_verify_network_failure_keeps_step() {
        let mut state = project_manager_with_code("ABC123");
        let api = MockApi::network_error();

        let toast = verify_invitation_code(&mut state, &api).await.unwrap();

        assert_eq!(toast.title, VERIFICATION_FAILED);
        assert_eq!(toast.description, UNEXPECTED_ERROR);
        assert_eq!(state.step, Step::Invitation);
        // The user can try again straight away
        assert!(!state.is_pending(Action::VerifyInvitation));
    }

    #[tokio::test]
    async fn test_request_success_sets_flag_only() {
        let mut state = project_manager_with_code("");
        state.dispatch(SignupEvent::ModeChanged(InvitationMode::Request));
        state.dispatch(SignupEvent::FieldChanged(FormField::Email, "pm@example.com".to_string()));
        let api = MockApi::ok();

        let toast = request_invitation(&mut state, &api).await.unwrap();

        assert_eq!(toast.notification_type, NotificationType::Success);
        assert_eq!(toast.title, REQUEST_SUBMITTED);
        assert!(state.request_submitted);
        assert!(state.email_locked());
        assert_eq!(state.step, Step::Invitation);
        assert_eq!(api.calls(), vec![Call::RequestInvitation("pm@example.com".to_string())]);

        // A granted request is not sent twice
        assert!(request_invitation(&mut state, &api).await.is_none());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_request_failure_leaves_flag_unset() {
        let mut state = project_manager_with_code("");
        let api = MockApi::server_error(409, Some("Request already pending"));

        let toast = request_invitation(&mut state, &api).await.unwrap();
        assert_eq!(toast.title, REQUEST_FAILED);
        assert_eq!(toast.description, "Request already pending");
        assert!(!state.request_submitted);
        assert_eq!(state.step, Step::Invitation);

        let api = MockApi::network_error();
        let toast = request_invitation(&mut state, &api).await.unwrap();
        assert_eq!(toast.description, UNEXPECTED_ERROR);
        assert!(!state.request_submitted);
    }

    #[tokio::test]
    async fn test_annotator_missing_domain_sends_nothing() {
        let mut state = annotator_details(&[], &["English"], "Remote");
        let api = MockApi::ok();

        let outcome = submit(&mut state, &api).await;

        let toast = outcome.toast.unwrap();
        assert_eq!(toast.title, SIGNUP_FAILED);
        assert_eq!(toast.description, FILL_ALL_FIELDS);
        assert!(!outcome.signed_up);
        assert!(api.calls().is_empty());
        assert_eq!(state.step, Step::Details);
        assert!(!state.is_pending(Action::Submit));
    }

    #[tokio::test]
    async fn test_annotator_missing_lang_or_location_sends_nothing() {
        let api = MockApi::ok();

        let mut no_lang = annotator_details(&["medical"], &[], "remote");
        assert!(!submit(&mut no_lang, &api).await.signed_up);

        let mut no_location = annotator_details(&["medical"], &["english"], "");
        assert!(!submit(&mut no_location, &api).await.signed_up);

        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_annotator_submit_sends_full_record() {
        let mut state = annotator_details(&["medical", "street signs"], &["english"], "remote");
        let api = MockApi::ok();

        let outcome = submit(&mut state, &api).await;

        assert!(outcome.signed_up);
        assert_eq!(outcome.toast.unwrap().title, ACCOUNT_CREATED);
        assert_eq!(
            api.calls(),
            vec![Call::Signup(json!({
                "email": "ann@example.com",
                "password": "secret1",
                "role": "annotator",
                "name": "Ann",
                "phone": "+15550100",
                "domain": ["medical", "street signs"],
                "lang": ["english"],
                "location": "remote",
                "invitationCode": "",
            }))]
        );
    }

    #[tokio::test]
    async fn test_project_manager_full_journey() {
        let mut state = project_manager_with_code("ABC123");
        let api = MockApi::ok();

        verify_invitation_code(&mut state, &api).await;
        assert_eq!(state.step, Step::Details);

        for (field, value) in [
            (FormField::Name, "Pat"),
            (FormField::Email, "pm@example.com"),
            (FormField::Password, "secret1"),
        ] {
            state.dispatch(SignupEvent::FieldChanged(field, value.to_string()));
        }

        let outcome = submit(&mut state, &api).await;
        assert!(outcome.signed_up);

        let calls = api.calls();
        assert_eq!(
            calls[1],
            Call::Signup(json!({
                "email": "pm@example.com",
                "password": "secret1",
                "role": "project manager",
                "name": "Pat",
                "invitationCode": "ABC123",
            }))
        );
    }

    #[tokio::test]
    async fn test_submit_server_and_network_failures() {
        let mut state = annotator_details(&["medical"], &["english"], "remote");

        let api = MockApi::server_error(409, Some("Email already registered"));
        let outcome = submit(&mut state, &api).await;
        assert!(!outcome.signed_up);
        assert_eq!(outcome.toast.unwrap().description, "Email already registered");

        let api = MockApi::network_error();
        let outcome = submit(&mut state, &api).await;
        assert!(!outcome.signed_up);
        let toast = outcome.toast.unwrap();
        assert_eq!(toast.title, SIGNUP_FAILED);
        assert_eq!(toast.description, UNEXPECTED_ERROR);
        assert_eq!(state.step, Step::Details);
    }

    #[tokio::test]
    async fn test_submit_outside_details_is_refused() {
        let mut state = project_manager_with_code("ABC123");
        let api = MockApi::ok();

        let outcome = submit(&mut state, &api).await;
        assert_eq!(outcome, SubmitOutcome::refused());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_verify_while_in_flight_is_dropped() {
        let shared = Rc::new(RefCell::new(project_manager_with_code("ABC123")));
        let api = MockApi::gated();
        let mut first_store = shared.clone();
        let mut second_store = shared.clone();

        let mut first = tokio_test::task::spawn(verify_invitation_code(&mut first_store, &api));
        assert!(first.poll().is_pending());

        // Double click: the second attempt never reaches the API
        assert!(verify_invitation_code(&mut second_store, &api).await.is_none());
        assert_eq!(api.calls().len(), 1);

        api.release();
        assert!(matches!(first.poll(), Poll::Ready(None)));
        assert_eq!(shared.borrow().step, Step::Details);
    }

    #[tokio::test]
    async fn test_duplicate_submit_while_in_flight_is_dropped() {
        let shared = Rc::new(RefCell::new(annotator_details(&["medical"], &["english"], "remote")));
        let api = MockApi::gated();
        let mut first_store = shared.clone();
        let mut second_store = shared.clone();

        let mut first = tokio_test::task::spawn(submit(&mut first_store, &api));
        assert!(first.poll().is_pending());

        let second = submit(&mut second_store, &api).await;
        assert_eq!(second, SubmitOutcome::refused());

        api.release();
        match first.poll() {
            Poll::Ready(outcome) => assert!(outcome.signed_up),
            Poll::Pending => panic!("submit should have completed"),
        }
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_verify_result_after_back_is_ignored() {
        let shared = Rc::new(RefCell::new(project_manager_with_code("ABC123")));
        let api = MockApi::gated();
        let mut pending_store = shared.clone();
        let mut ui_store = shared.clone();

        let mut pending = tokio_test::task::spawn(verify_invitation_code(&mut pending_store, &api));
        assert!(pending.poll().is_pending());

        assert_eq!(back(&mut ui_store), Step::Role);

        api.release();
        assert!(matches!(pending.poll(), Poll::Ready(None)));
        assert_eq!(shared.borrow().step, Step::Role);
        assert_eq!(shared.borrow().role(), None);
    }

    #[tokio::test]
    async fn test_request_granted_after_back_still_applies() {
        let mut state = project_manager_with_code("");
        state.dispatch(SignupEvent::ModeChanged(InvitationMode::Request));
        state.dispatch(SignupEvent::FieldChanged(FormField::Email, "pm@example.com".to_string()));
        let shared = Rc::new(RefCell::new(state));
        let api = MockApi::gated();
        let mut pending_store = shared.clone();
        let mut ui_store = shared.clone();

        let mut pending = tokio_test::task::spawn(request_invitation(&mut pending_store, &api));
        assert!(pending.poll().is_pending());

        assert_eq!(back(&mut ui_store), Step::Role);
        assert_eq!(select_role(&mut ui_store, Role::ProjectManager), Step::Invitation);

        // The first request has not answered yet, so a second one is not sent
        assert!(request_invitation(&mut ui_store, &api).await.is_none());
        assert_eq!(api.calls().len(), 1);

        api.release();
        match pending.poll() {
            Poll::Ready(Some(toast)) => assert_eq!(toast.title, REQUEST_SUBMITTED),
            other => panic!("expected the request toast, got {:?}", other),
        }
        assert!(shared.borrow().request_submitted);
        assert!(shared.borrow().email_locked());
    }
}
