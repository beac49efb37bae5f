//! App state - pure data structure with no I/O logic

use std::sync::Arc;

use crate::filter::FilterState;
use crate::messages::ui_events::{InputMode, PageKind};
use crate::messages::RenderState;
use crate::models::Country;
use crate::storage::Storage;

/// Border section of a detail page
#[derive(Clone, Debug)]
pub enum BorderList {
    /// Lookups in flight
    Loading,
    /// Countries that resolved, in border-code order
    Resolved(Vec<Arc<Country>>),
}

/// A country shown on the detail page
#[derive(Clone, Debug)]
pub struct DetailPage {
    pub country: Arc<Country>,
    /// `None` when the country has no border codes
    pub borders: Option<BorderList>,
    pub selected_border: usize,
    /// Id of the border batch this page is waiting for
    pub border_request: Option<u64>,
}

impl DetailPage {
    pub fn resolved_borders(&self) -> &[Arc<Country>] {
        match &self.borders {
            Some(BorderList::Resolved(list)) => list,
            _ => &[],
        }
    }
}

/// Which page is on screen. Back always returns to the grid.
#[derive(Clone, Debug, Default)]
pub enum Page {
    #[default]
    Grid,
    Detail(DetailPage),
}

impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Grid => PageKind::Grid,
            Page::Detail(_) => PageKind::Detail,
        }
    }
}

/// Progress of the full-dataset fetch
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Dataset
    pub countries: Vec<Arc<Country>>,
    pub load: LoadStatus,
    pub pending_load_id: Option<u64>,
    pub next_request_id: u64,

    // Grid
    pub filter: FilterState,
    pub filtered: Vec<Arc<Country>>,
    pub selected: usize,
    pub input_mode: InputMode,

    // Navigation
    pub page: Page,

    // Persisted preference
    pub storage: Storage,

    // Popups and messages
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        AppState {
            countries: Vec::new(),
            load: LoadStatus::Loading,
            pending_load_id: None,
            next_request_id: 1,
            filter: FilterState::default(),
            filtered: Vec::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            page: Page::Grid,
            storage,
            show_help: false,
            status_message: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Country under the grid cursor
    pub fn selected_country(&self) -> Option<&Arc<Country>> {
        self.filtered.get(self.selected)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            theme: self.storage.theme(),
            page: self.page.clone(),
            load: self.load.clone(),
            total: self.countries.len(),
            filter: self.filter.clone(),
            filtered: self.filtered.clone(),
            selected: self.selected,
            input_mode: self.input_mode,
            show_help: self.show_help,
            status_message: self.status_message.clone(),
        }
    }
}
