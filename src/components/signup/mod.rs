//! Sign-up page
//!
//! Owns the flow state for one visit and renders the view for the current
//! step. The step views dispatch events and run `flow` operations against the
//! same signal.

mod details_step;
mod invitation_step;
mod role_step;

pub use details_step::DetailsStep;
pub use invitation_step::InvitationStep;
pub use role_step::RoleStep;

use dioxus::prelude::*;
use crate::flow;
use crate::models::Role;
use crate::state::{SignupEvent, SignupState, Step};

/// Applies a form event to the page's flow state
pub(crate) fn dispatch(mut state: Signal<SignupState>, event: SignupEvent) {
    state.write().dispatch(event);
}

#[component]
pub fn SignupPage() -> Element {
    let state = use_signal(SignupState::new);
    let step = state.read().step;

    match step {
        Step::Role => rsx! {
            RoleStep {
                on_select: move |role: Role| {
                    let mut store = state;
                    flow::select_role(&mut store, role);
                },
            }
        },
        Step::Invitation => rsx! { InvitationStep { state } },
        Step::Details => rsx! { DetailsStep { state } },
    }
}
