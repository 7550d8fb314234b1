//! Shared current-language state.
//!
//! One [`LocaleContext`] is created at mount and handed to everything that
//! needs the active language: the submission controller reads it when a request
//! is sent, and the view layer subscribes to it so that localized text follows
//! the user's choice.

use crate::language::Language;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Language)>;

struct LocaleState {
    current: Cell<Language>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_id: Cell<usize>,
}

/// Handle to the active language. Clones share the same state.
#[derive(Clone)]
pub struct LocaleContext {
    state: Rc<LocaleState>,
}

impl LocaleContext {
    pub fn new(initial: Language) -> Self {
        Self {
            state: Rc::new(LocaleState {
                current: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// The language in effect right now.
    pub fn current_language(&self) -> Language {
        self.state.current.get()
    }

    /// Switches the active language and notifies subscribers.
    ///
    /// Setting the language that is already active is a no-op.
    pub fn set_language(&self, language: Language) {
        if self.state.current.replace(language) == language {
            return;
        }
        log::debug!("language changed to {}", language.code());

        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .state
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(language);
        }
    }

    /// Registers `listener` for language changes until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(Language) + 'static) -> LocaleSubscription {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        LocaleSubscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    fn subscriber_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl PartialEq for LocaleContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleContext")
            .field("current", &self.current_language())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a locale listener registered while alive.
pub struct LocaleSubscription {
    state: Weak<LocaleState>,
    id: usize,
}

impl fmt::Debug for LocaleSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for LocaleSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_english() {
        assert_eq!(LocaleContext::default().current_language(), Language::English);
    }

    #[test]
    fn test_clones_share_state() {
        let locale = LocaleContext::default();
        let handle = locale.clone();
        handle.set_language(Language::Indonesian);
        assert_eq!(locale.current_language(), Language::Indonesian);
        assert_eq!(locale, handle);
        assert_ne!(locale, LocaleContext::default());
    }

    #[test]
    fn test_subscribers_are_notified_on_change_only() {
        let locale = LocaleContext::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            locale.subscribe(move |language| seen.borrow_mut().push(language))
        };

        locale.set_language(Language::English);
        locale.set_language(Language::Indonesian);
        locale.set_language(Language::Indonesian);
        locale.set_language(Language::English);

        assert_eq!(
            *seen.borrow(),
            vec![Language::Indonesian, Language::English]
        );
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let locale = LocaleContext::default();
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = Rc::clone(&calls);
            locale.subscribe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(locale.subscriber_count(), 1);

        drop(subscription);
        locale.set_language(Language::Indonesian);

        assert_eq!(calls.get(), 0);
        assert_eq!(locale.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_context_is_harmless() {
        let locale = LocaleContext::default();
        let subscription = locale.subscribe(|_| {});
        drop(locale);
        drop(subscription);
    }

    #[test]
    fn test_debug_reports_current_language() {
        let locale = LocaleContext::new(Language::Indonesian);
        let debug_str = format!("{locale:?}");
        assert!(debug_str.contains("Indonesian"));
    }
}
