use dioxus::prelude::*;

/// Global UI state
pub static UI_STATE: GlobalSignal<UiState> = Signal::global(UiState::default);

#[derive(Clone, Default)]
pub struct UiState {
    pub notification: Option<Toast>,
    /// Bumped for every toast shown, so a dismiss timer only clears its own toast
    toast_id: u64,
}

impl UiState {
    pub fn visible_toast(&self) -> Option<u64> {
        self.notification.as_ref().map(|_| self.toast_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub notification_type: NotificationType,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Toast {
            title: title.to_string(),
            description: description.to_string(),
            notification_type: NotificationType::Success,
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Toast {
            title: title.to_string(),
            description: description.to_string(),
            notification_type: NotificationType::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationType {
    Success,
    Error,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Success => "bg-green-500",
            NotificationType::Error => "bg-red-500",
        }
    }
}

pub fn show_notification(toast: Toast) {
    let mut ui = UI_STATE.write();
    ui.toast_id += 1;
    ui.notification = Some(toast);
}

/// Clears the toast only if it is still the one identified by `id`
pub fn dismiss_notification(id: u64) {
    if UI_STATE.peek().visible_toast() == Some(id) {
        clear_notification();
    }
}

pub fn clear_notification() {
    UI_STATE.write().notification = None;
}
