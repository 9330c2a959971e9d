use uuid::Uuid;
use yew::prelude::*;

use crate::state::{Toast, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<Uuid>,
}

/// Pila de notificaciones (esquina inferior derecha)
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                let class = match toast.variant {
                    ToastVariant::Default => "toast",
                    ToastVariant::Destructive => "toast toast-destructive",
                };
                html! {
                    <div key={id.to_string()} {class} onclick={Callback::from(move |_| on_dismiss.emit(id))}>
                        <div class="toast-title">{ &toast.title }</div>
                        if let Some(description) = &toast.description {
                            <div class="toast-description">{ description }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
