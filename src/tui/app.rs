use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::domain::Article;
use crate::editorial::{partition, quick_filter, sort_by_published_at, SortOrder};
use crate::query::{QueryController, RequestSequencer, Ticket};
use crate::search::SearchResults;
use crate::tui::event::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Search,
    History,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Home => View::Search,
            View::Search => View::History,
            View::History => View::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Home => View::History,
            View::Search => View::Home,
            View::History => View::Search,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Search => "Search",
            View::History => "History",
        }
    }
}

/// Which text box, if any, is taking keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    SearchBar,
    HomeFilter,
}

/// Which list a search response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Home,
    Search,
}

pub const PAGE_SIZE: usize = 10;

pub struct TuiApp {
    pub view: View,
    pub input_mode: InputMode,
    pub search_bar: QueryController,
    pub home_filter: QueryController,
    pub home_term: String,
    pub home_articles: Vec<Article>,
    pub search_query: String,
    pub search_articles: Vec<Article>,
    pub sort_order: SortOrder,
    pub history: Vec<Article>,
    pub selected: usize,
    pub list_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    home_requests: RequestSequencer,
    search_requests: RequestSequencer,
    home_loading: bool,
    search_loading: bool,
}

impl TuiApp {
    pub fn new(debounce: Duration) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            view: View::Home,
            input_mode: InputMode::Normal,
            search_bar: QueryController::new(debounce),
            home_filter: QueryController::new(debounce),
            home_term: String::new(),
            home_articles: Vec::new(),
            search_query: String::new(),
            search_articles: Vec::new(),
            sort_order: SortOrder::default(),
            history: Vec::new(),
            selected: 0,
            list_state,
            should_quit: false,
            status_message: None,
            home_requests: RequestSequencer::new(),
            search_requests: RequestSequencer::new(),
            home_loading: false,
            search_loading: false,
        }
    }

    /// Home articles after the quick filter, in grid reading order.
    pub fn home_placed(&self) -> Vec<&Article> {
        let shown = quick_filter(&self.home_articles, self.home_filter.text());
        partition(&shown).iter().copied().collect()
    }

    /// The articles the current view can select, in display order.
    pub fn visible(&self) -> Vec<&Article> {
        match self.view {
            View::Home => self.home_placed(),
            View::Search => self.search_articles.iter().collect(),
            View::History => self.history.iter().collect(),
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.visible().get(self.selected).copied()
    }

    pub fn switch_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.select(0);
        }
    }

    pub fn move_up(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn next_page(&mut self) {
        self.select(self.selected + PAGE_SIZE);
    }

    pub fn prev_page(&mut self) {
        self.select(self.selected.saturating_sub(PAGE_SIZE));
    }

    fn select(&mut self, index: usize) {
        let max_index = self.visible().len().saturating_sub(1);
        self.selected = index.min(max_index);
        self.list_state.select(Some(self.selected));
    }

    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        sort_by_published_at(&mut self.search_articles, self.sort_order);
        if self.view == View::Search {
            self.select(0);
        }
    }

    pub fn is_loading(&self, target: Target) -> bool {
        match target {
            Target::Home => self.home_loading,
            Target::Search => self.search_loading,
        }
    }

    /// Whether the list on screen is waiting for a response.
    pub fn view_loading(&self) -> bool {
        match self.view {
            View::Home => self.home_loading,
            View::Search => self.search_loading,
            View::History => false,
        }
    }

    fn set_loading(&mut self, target: Target, loading: bool) {
        match target {
            Target::Home => self.home_loading = loading,
            Target::Search => self.search_loading = loading,
        }
    }

    /// Stamp a new request for `target`; older requests become stale.
    pub fn begin_request(&mut self, target: Target) -> Ticket {
        self.set_loading(target, true);
        match target {
            Target::Home => self.home_requests.issue(),
            Target::Search => self.search_requests.issue(),
        }
    }

    /// Apply a search response unless a newer request has been issued.
    ///
    /// Returns whether the response was used.
    pub fn apply_results(&mut self, target: Target, ticket: Ticket, mut results: SearchResults) -> bool {
        let requests = match target {
            Target::Home => &self.home_requests,
            Target::Search => &self.search_requests,
        };
        if !requests.is_current(ticket) {
            tracing::debug!("Dropping stale response for {:?}", results.term);
            return false;
        }

        self.set_loading(target, false);
        self.status_message = results
            .is_failed()
            .then(|| format!("Could not load \"{}\"", results.term));

        match target {
            Target::Home => {
                self.home_term = results.term;
                self.home_articles = results.articles;
            }
            Target::Search => {
                sort_by_published_at(&mut results.articles, self.sort_order);
                self.search_query = results.term;
                self.search_articles = results.articles;
            }
        }

        let current = self.selected;
        self.select(current);
        true
    }

    pub fn set_history(&mut self, history: Vec<Article>) {
        self.history = history;
        let current = self.selected;
        self.select(current);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Edit whichever text box has focus.
    ///
    /// `action` is what the key is bound to in normal mode; only the quit
    /// binding is honoured while typing. Other control chords are not text.
    pub fn handle_input(&mut self, key: KeyEvent, action: Action, now: Instant) {
        let input = match self.input_mode {
            InputMode::SearchBar => &mut self.search_bar,
            InputMode::HomeFilter => &mut self.home_filter,
            InputMode::Normal => return,
        };

        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            _ if control && action == Action::Quit => self.should_quit = true,
            KeyCode::Char('u') if control => input.clear(now),
            KeyCode::Char(_) if control => {}
            KeyCode::Char(c) => input.push(c, now),
            KeyCode::Backspace => input.backspace(now),
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {}
        }

        // The quick filter can shrink the grid under the selection.
        let current = self.selected;
        self.select(current);
    }
}
