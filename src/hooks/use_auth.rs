// ============================================================================
// USE AUTH - Puente entre `AuthContext` y el árbol de Yew
// ============================================================================
// El provider crea el contexto una sola vez (bootstrap desde localStorage),
// se suscribe a sus cambios y vuelve a renderizar con la sesión nueva.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::{AppError, AppResult};
use crate::models::{AuthPhase, Session};
use crate::state::AuthContext;
use crate::stores::BrowserSessionStore;

/// Handle compartido por contexto; compara por sesión.
///
/// Sin contexto (fuera de `AuthProvider`) es inerte: sesión anónima, nunca
/// lee ni escribe el almacén.
#[derive(Clone)]
pub struct AuthHandle {
    context: Option<Rc<AuthContext>>,
    pub session: Session,
}

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        let same_context = match (&self.context, &other.context) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_context && self.session == other.session
    }
}

impl AuthHandle {
    /// Handle anónimo sin contexto detrás
    pub fn detached() -> Self {
        Self {
            context: None,
            session: Session::anonymous(),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.context.is_none()
    }

    pub fn phase(&self) -> AuthPhase {
        self.session.phase()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin
    }

    pub fn login(&self, identifier: &str, secret: &str) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.login(identifier, secret))
    }

    pub fn signup(&self, name: &str, identifier: &str, secret: &str) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.signup(name, identifier, secret))
    }

    pub fn logout(&self) {
        if let Some(context) = &self.context {
            context.logout();
        }
    }

    pub fn update_profile(&self, name: &str, email: &str) -> AppResult<()> {
        match &self.context {
            Some(context) => context.update_profile(name, email),
            None => Err(AppError::NotAuthenticated),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let context = use_memo((), |_| AuthContext::bootstrap(BrowserSessionStore::default()));
    let session = use_state(|| context.session());

    {
        let context = context.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let id = context.subscribe(move |updated| session.set(updated.clone()));
            move || {
                context.unsubscribe(id);
            }
        });
    }

    let handle = AuthHandle {
        context: Some(context),
        session: (*session).clone(),
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

/// Sesión actual y operaciones de auth
#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ use_auth fuera de AuthProvider, sesión anónima de sólo lectura");
        AuthHandle::detached()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_handle_is_anonymous_and_inert() {
        let handle = AuthHandle::detached();
        assert!(handle.is_detached());
        assert_eq!(handle.phase(), AuthPhase::Anonymous);

        assert!(!handle.login("admin@example.com", "admin"));
        assert!(!handle.signup("Jane", "jane@x.com", "pw"));
        handle.logout();
        assert_eq!(
            handle.update_profile("Jane", "jane@x.com"),
            Err(AppError::NotAuthenticated)
        );
        assert_eq!(handle.session, Session::anonymous());
    }

    #[test]
    fn detached_handles_compare_equal() {
        assert!(AuthHandle::detached() == AuthHandle::detached());
    }
}
