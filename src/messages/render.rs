//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use crate::app::state::{LoadStatus, Page};
use crate::filter::FilterState;
use crate::messages::ui_events::InputMode;
use crate::models::{Country, Theme};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub theme: Theme,
    pub page: Page,

    // Dataset
    pub load: LoadStatus,
    /// Size of the full list
    pub total: usize,

    // Grid
    pub filter: FilterState,
    pub filtered: Vec<Arc<Country>>,
    pub selected: usize,
    pub input_mode: InputMode,

    // Popups
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            theme: Theme::default(),
            page: Page::Grid,
            load: LoadStatus::Loading,
            total: 0,
            filter: FilterState::default(),
            filtered: Vec::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            show_help: false,
            status_message: None,
        }
    }
}
