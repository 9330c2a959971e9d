// ============================================================================
// USE TOAST - Notificaciones globales con auto-cierre
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::Toaster;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::state::{Toast, ToastAction, ToastQueue};

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatch: Callback<ToastAction>,
    pub queue: Rc<ToastQueue>,
}

impl ToastHandle {
    pub fn show(&self, toast: Toast) {
        self.dispatch.emit(ToastAction::Push(toast));
    }

    /// Toast con título y descripción
    pub fn notify(&self, title: &str, description: &str) {
        self.show(Toast::new(title, description));
    }

    pub fn error(&self, title: &str, error: &AppError) {
        self.show(Toast::from_error(title, error));
    }

    pub fn dismiss(&self, toast: &Toast) {
        self.dispatch.emit(ToastAction::Dismiss(toast.id));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let dispatch = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |action: ToastAction| {
            if let ToastAction::Push(toast) = &action {
                let id = toast.id;
                let dispatcher = dispatcher.clone();
                Timeout::new(CONFIG.timing.toast_duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }
            dispatcher.dispatch(action);
        })
    };

    let handle = ToastHandle {
        dispatch: dispatch.clone(),
        queue: Rc::new((*queue).clone()),
    };

    let on_dismiss = Callback::from(move |id| dispatch.emit(ToastAction::Dismiss(id)));

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            {props.children.clone()}
            <Toaster toasts={handle.queue.toasts.clone()} {on_dismiss} />
        </ContextProvider<ToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(|| ToastHandle {
        dispatch: Callback::from(|action: ToastAction| {
            if let ToastAction::Push(toast) = action {
                log::warn!("⚠️ Toast sin ToastProvider: {}", toast.title);
            }
        }),
        queue: Rc::new(ToastQueue::default()),
    })
}
