use std::{cell::RefCell, fmt, rc::Rc};

pub type Listener<E> = Rc<dyn Fn(&E)>;

// listener list
//
// the state holders in this crate are plain structs, so a presentation layer that
// is not a reactive runtime needs a way to hear about transitions.  everything
// runs on the ui thread, hence Rc/RefCell rather than anything Send.
//
// the list is cloned before dispatch, so a listener may subscribe or drop its own
// subscription while being notified
pub struct Listeners<E> {
    inner: Rc<RefCell<Vec<Listener<E>>>>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Listeners {
            inner: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription<E> {
        let listener: Listener<E> = Rc::new(listener);
        self.inner.borrow_mut().push(listener.clone());

        Subscription {
            listener,
            listeners: Rc::clone(&self.inner),
        }
    }

    pub fn notify(&self, event: &E) {
        let listeners = self.inner.borrow().clone();
        for listener in listeners {
            (listener)(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Listeners::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("len", &self.len()).finish()
    }
}

// dropping the subscription removes the listener
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription<E> {
    listener: Listener<E>,
    listeners: Rc<RefCell<Vec<Listener<E>>>>,
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|item| !Rc::ptr_eq(item, &self.listener));
    }
}
