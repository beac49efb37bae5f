//! Command handlers - business logic for processing UI events

use std::sync::Arc;

use crate::app::state::{BorderList, DetailPage, LoadStatus, Page};
use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Country;

impl AppState {
    // ========================
    // Search box
    // ========================

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_char(&mut self, c: char) {
        self.filter.search.push(c);
        self.refilter();
    }

    pub fn search_backspace(&mut self) {
        if self.filter.search.pop().is_some() {
            self.refilter();
        }
    }

    // ========================
    // Region selector
    // ========================

    pub fn cycle_region(&mut self) {
        self.filter.cycle_region();
        self.refilter();
    }

    pub fn clear_region(&mut self) {
        if self.filter.has_region() {
            self.filter.clear_region();
            self.refilter();
        }
    }

    /// Recompute the visible list from the full list and reset the cursor
    pub fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.countries);
        self.selected = 0;
    }

    // ========================
    // Grid cursor
    // ========================

    pub fn move_selection(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.filtered.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, last) as usize;
    }

    pub fn open_selected(&mut self) -> Option<NetworkCommand> {
        let country = self.selected_country()?.clone();
        self.show_detail(country)
    }

    // ========================
    // Navigation
    // ========================

    /// Switch to the detail page for `country`, asking for its borders if it has any
    pub fn show_detail(&mut self, country: Arc<Country>) -> Option<NetworkCommand> {
        self.input_mode = InputMode::Normal;

        if country.borders.is_empty() {
            self.page = Page::Detail(DetailPage {
                country,
                borders: None,
                selected_border: 0,
                border_request: None,
            });
            return None;
        }

        let id = self.next_id();
        let codes = country.borders.clone();
        self.page = Page::Detail(DetailPage {
            country,
            borders: Some(BorderList::Loading),
            selected_border: 0,
            border_request: Some(id),
        });
        Some(NetworkCommand::ResolveBorders { id, codes })
    }

    pub fn back(&mut self) {
        self.page = Page::Grid;
    }

    pub fn next_border(&mut self) {
        if let Page::Detail(detail) = &mut self.page {
            let count = detail.resolved_borders().len();
            if count > 0 {
                detail.selected_border = (detail.selected_border + 1) % count;
            }
        }
    }

    pub fn prev_border(&mut self) {
        if let Page::Detail(detail) = &mut self.page {
            let count = detail.resolved_borders().len();
            if count > 0 {
                detail.selected_border = detail
                    .selected_border
                    .checked_sub(1)
                    .unwrap_or(count - 1);
            }
        }
    }

    pub fn open_border(&mut self) -> Option<NetworkCommand> {
        let country = match &self.page {
            Page::Detail(detail) => detail.resolved_borders().get(detail.selected_border)?.clone(),
            Page::Grid => return None,
        };
        self.show_detail(country)
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&mut self) {
        match self.storage.toggle_theme() {
            Ok(_) => self.status_message = None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not save theme preference");
                self.status_message = Some(format!("Could not save theme: {}", e));
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    /// Drops a status message once the user has moved on
    pub fn dismiss_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Dataset loading
    // ========================

    /// Start a full-dataset fetch unless one is already running
    pub fn request_load(&mut self) -> Option<NetworkCommand> {
        if self.pending_load_id.is_some() {
            return None;
        }
        let id = self.next_id();
        self.pending_load_id = Some(id);
        self.load = LoadStatus::Loading;
        Some(NetworkCommand::LoadAll { id })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();

        match response {
            NetworkResponse::CountriesLoaded { countries, .. } => {
                if self.pending_load_id == Some(response_id) {
                    self.pending_load_id = None;
                    self.countries = countries;
                    self.load = LoadStatus::Loaded;
                    self.refilter();
                } else {
                    tracing::debug!(id = response_id, "Discarding stale country list");
                }
            }
            NetworkResponse::LoadFailed { message, .. } => {
                if self.pending_load_id == Some(response_id) {
                    // the previous list stays as it was
                    self.pending_load_id = None;
                    self.load = LoadStatus::Failed(message);
                } else {
                    tracing::debug!(id = response_id, "Discarding stale load failure");
                }
            }
            NetworkResponse::BordersResolved { countries, .. } => match &mut self.page {
                Page::Detail(detail) if detail.border_request == Some(response_id) => {
                    detail.borders = Some(BorderList::Resolved(countries));
                    detail.border_request = None;
                    detail.selected_border = 0;
                }
                _ => {
                    tracing::debug!(id = response_id, "Discarding stale border batch");
                }
            },
        }
    }
}
