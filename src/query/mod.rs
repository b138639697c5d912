//! Search-as-you-type.
//!
//! Keystrokes go into a [`Debouncer`]; when the input goes quiet the
//! latest text becomes a [`Route`]. Each search that route triggers is
//! stamped with a [`Ticket`] from a [`RequestSequencer`].

pub mod debounce;
pub mod sequence;

use std::time::{Duration, Instant};

pub use debounce::{Debouncer, DEFAULT_QUIET_WINDOW};
pub use sequence::{RequestSequencer, Ticket};

/// Where the search bar sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { query: String },
}

impl Route {
    /// A blank search bar leads home; anything else is a search.
    pub fn from_input(input: &str) -> Self {
        if input.trim().is_empty() {
            Route::Home
        } else {
            Route::Search {
                query: input.to_string(),
            }
        }
    }
}

/// The search bar: debounced text in, routes out.
#[derive(Debug, Clone)]
pub struct QueryController {
    text: String,
    debouncer: Debouncer<String>,
}

impl QueryController {
    pub fn new(window: Duration) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(window),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without scheduling a search, e.g. when the view
    /// changes underneath the bar.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.debouncer.cancel();
    }

    pub fn push(&mut self, c: char, now: Instant) {
        self.text.push(c);
        self.changed(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.text.pop().is_some() {
            self.changed(now);
        }
    }

    pub fn clear(&mut self, now: Instant) {
        if !self.text.is_empty() {
            self.text.clear();
            self.changed(now);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn poll(&mut self, now: Instant) -> Option<Route> {
        self.debouncer
            .poll(now)
            .map(|text| Route::from_input(&text))
    }

    fn changed(&mut self, now: Instant) {
        self.debouncer.input(self.text.clone(), now);
    }
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}
