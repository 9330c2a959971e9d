// ============================================================================
// TOAST STATE - Cola de notificaciones
// ============================================================================

use std::rc::Rc;

use uuid::Uuid;
use yew::Reducible;

use crate::error::AppError;

/// Máximo de toasts visibles; el más antiguo sale primero
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Toast rojo con el texto del error
    pub fn from_error(title: impl Into<String>, error: &AppError) -> Self {
        Self::destructive(title, error.to_string())
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => {
                toasts.push(toast);
                if toasts.len() > MAX_VISIBLE_TOASTS {
                    let overflow = toasts.len() - MAX_VISIBLE_TOASTS;
                    toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastQueue { toasts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_only_latest_toasts() {
        let mut queue = Rc::new(ToastQueue::default());
        for i in 0..5 {
            queue = queue.reduce(ToastAction::Push(Toast::new(format!("t{}", i), "")));
        }
        let titles: Vec<&str> = queue.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let toast = Toast::new("Logged out", "You have been successfully logged out.");
        let id = toast.id;
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Push(toast));
        let queue = queue.reduce(ToastAction::Dismiss(id));
        assert!(queue.toasts.is_empty());
    }

    #[test]
    fn error_toasts_are_destructive() {
        let toast = Toast::from_error("Access Denied", &AppError::AccessDenied);
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(
            toast.description.as_deref(),
            Some("You do not have permission to access the admin dashboard.")
        );
    }
}
