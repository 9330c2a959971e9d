// ============================================================================
// REACTIVITY - Estado observable con subscribe/notify
// ============================================================================
// Los subscribers reciben una copia del valor ya actualizado, así que pueden
// leer (o incluso escribir) el estado sin chocar con el préstamo interno.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type SubscriptionId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Subscriber<T>)>>>,
    next_id: Rc<Cell<SubscriptionId>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Reemplaza el valor y notifica una sola vez
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Suscribirse a cambios; el id sirve para darse de baja
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    fn notify(&self) {
        let snapshot = self.get();
        // Copia de la lista: un callback puede (des)suscribirse durante el aviso
        let callbacks: Vec<Subscriber<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_each_subscriber_once() {
        let state = ReactiveState::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe(move |value| seen.borrow_mut().push(*value));
        }
        state.set(3);
        state.set(4);
        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let state = ReactiveState::new(String::new());
        let calls = Rc::new(Cell::new(0));
        let id = {
            let calls = calls.clone();
            state.subscribe(move |_| calls.set(calls.get() + 1))
        };
        state.set("a".into());
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set("b".into());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let other = state.clone();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            other.subscribe(move |_| calls.set(calls.get() + 1));
        }
        state.set(2);
        assert_eq!(other.get(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscriber_may_read_state_during_notify() {
        let state = ReactiveState::new(5);
        let reader = state.clone();
        let seen = Rc::new(Cell::new(0));
        {
            let seen = seen.clone();
            state.subscribe(move |_| seen.set(reader.get()));
        }
        state.set(9);
        assert_eq!(seen.get(), 9);
    }
}
