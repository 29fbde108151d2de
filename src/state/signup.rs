//! Sign-up flow state machine
//!
//! All form edits and step changes go through [`SignupState::apply`], a pure
//! reducer over [`SignupEvent`]. Network actions are fenced with [`Ticket`]s so
//! at most one request per action is outstanding and late results from a
//! revoked request are dropped.

use crate::models::{FormData, FormField, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Role,
    Invitation,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvitationMode {
    #[default]
    Enter,
    Request,
}

/// Network actions that can be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RequestInvitation,
    VerifyInvitation,
    Submit,
}

/// Proof that an action was started; completing with a stale ticket is a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    action: Action,
    id: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct InFlight {
    request_invitation: Option<u64>,
    verify_invitation: Option<u64>,
    submit: Option<u64>,
}

impl InFlight {
    fn slot(&self, action: Action) -> Option<u64> {
        match action {
            Action::RequestInvitation => self.request_invitation,
            Action::VerifyInvitation => self.verify_invitation,
            Action::Submit => self.submit,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Option<u64> {
        match action {
            Action::RequestInvitation => &mut self.request_invitation,
            Action::VerifyInvitation => &mut self.verify_invitation,
            Action::Submit => &mut self.submit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupEvent {
    RoleSelected(Role),
    Back,
    ModeChanged(InvitationMode),
    FieldChanged(FormField, String),
    DomainChanged(Vec<String>),
    LangChanged(Vec<String>),
    InvitationRequested,
    InvitationVerified,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupState {
    pub form: FormData,
    pub step: Step,
    pub invitation_mode: InvitationMode,
    pub request_submitted: bool,
    in_flight: InFlight,
    next_ticket: u64,
}

impl SignupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: SignupEvent) -> Self {
        match event {
            SignupEvent::RoleSelected(role) => {
                if self.step != Step::Role {
                    tracing::debug!("Ignoring role selection on step {:?}", self.step);
                    return self;
                }
                self.form.role = Some(role);
                let next = if role.requires_invitation() { Step::Invitation } else { Step::Details };
                self.move_to(next);
            }
            SignupEvent::Back => {
                if self.step != Step::Invitation {
                    return self;
                }
                // A late verification must not jump to details. An outstanding
                // invitation request stays live: its answer only sets the flag.
                self.form.role = None;
                self.in_flight.verify_invitation = None;
                self.move_to(Step::Role);
            }
            SignupEvent::ModeChanged(mode) => {
                self.invitation_mode = mode;
            }
            SignupEvent::FieldChanged(field, value) => {
                if field == FormField::Email && self.email_locked() {
                    tracing::debug!("Email is locked after an invitation request");
                    return self;
                }
                self.form.set_field(field, value);
            }
            SignupEvent::DomainChanged(values) => {
                self.form.domain = distinct(values);
            }
            SignupEvent::LangChanged(values) => {
                self.form.lang = distinct(values);
            }
            SignupEvent::InvitationRequested => {
                self.request_submitted = true;
            }
            SignupEvent::InvitationVerified => {
                if self.step == Step::Invitation {
                    self.move_to(Step::Details);
                }
            }
        }
        self
    }

    /// In-place form of [`apply`](Self::apply)
    pub fn dispatch(&mut self, event: SignupEvent) {
        *self = std::mem::take(self).apply(event);
    }

    fn move_to(&mut self, step: Step) {
        tracing::info!("Sign-up step {:?} -> {:?}", self.step, step);
        self.step = step;
    }

    pub fn role(&self) -> Option<Role> {
        self.form.role
    }

    /// The email a project manager asked an invitation for cannot be edited
    pub fn email_locked(&self) -> bool {
        self.form.role == Some(Role::ProjectManager)
            && self.invitation_mode == InvitationMode::Request
            && self.request_submitted
    }

    pub fn is_pending(&self, action: Action) -> bool {
        self.in_flight.slot(action).is_some()
    }

    /// Starts `action` if the current step allows it and none is outstanding.
    pub fn begin(&mut self, action: Action) -> Option<Ticket> {
        let allowed = match action {
            Action::RequestInvitation => self.step == Step::Invitation && !self.request_submitted,
            Action::VerifyInvitation => self.step == Step::Invitation,
            Action::Submit => self.step == Step::Details,
        };
        if !allowed {
            tracing::debug!("{:?} not available on step {:?}", action, self.step);
            return None;
        }
        if self.is_pending(action) {
            tracing::debug!("{:?} already in flight", action);
            return None;
        }

        self.next_ticket += 1;
        let ticket = Ticket { action, id: self.next_ticket };
        *self.in_flight.slot_mut(action) = Some(ticket.id);
        Some(ticket)
    }

    /// Releases the ticket. Returns false when it was revoked or superseded, in
    /// which case the caller must discard the result.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        let slot = self.in_flight.slot_mut(ticket.action);
        if *slot == Some(ticket.id) {
            *slot = None;
            true
        } else {
            tracing::debug!("Dropping stale result for {:?}", ticket.action);
            false
        }
    }
}

fn distinct(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim().to_string();
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
