//! UI layer - draws a [`RenderState`] snapshot
//!
//! Rendering is a pure function of the snapshot: the page in the state decides
//! which view is drawn, the theme decides the palette.

pub mod detail;
pub mod grid;
pub mod palette;

use ratatui::{prelude::*, widgets::*};

use crate::app::state::{LoadStatus, Page};
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use palette::{palette, toggle_label, Palette};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let colors = palette(state.theme);
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0], &colors);

    match &state.page {
        Page::Grid => grid::draw_grid_page(f, state, chunks[1], &colors),
        Page::Detail(detail) => detail::draw_detail_page(f, detail, chunks[1], &colors),
    }

    draw_status_bar(f, state, chunks[2], &colors);

    if state.show_help {
        draw_help_popup(f, area, &colors);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect, colors: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors.dim))
        .style(Style::default().bg(colors.card));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        format!(" {}", APP_NAME),
        Style::default().fg(colors.text).bold(),
    ));
    f.render_widget(title, halves[0]);

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(toggle_label(state.theme), Style::default().fg(colors.text)),
        Span::styled(" (t) ", Style::default().fg(colors.dim)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(toggle, halves[1]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect, colors: &Palette) {
    if let Some(message) = &state.status_message {
        let bar = Paragraph::new(format!(" {} ", message)).style(Style::default().fg(colors.error));
        f.render_widget(bar, area);
        return;
    }

    let status = match (&state.page, state.input_mode) {
        (Page::Detail(_), _) => " Esc:back | ←/→:border | Enter:open border | t:theme | ?:help | q:quit ",
        (Page::Grid, InputMode::Search) => " type to filter | Backspace:delete | Enter/Esc:done ",
        (Page::Grid, InputMode::Normal) if state.load == LoadStatus::Loading => " Loading... ",
        (Page::Grid, InputMode::Normal) => {
            " /:search | r:region | c:clear | arrows:move | Enter:open | F5:reload | t:theme | ?:help | q:quit "
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(colors.dim));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, colors: &Palette) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 COUNTRY GRID
   /                  Search by name (Enter/Esc to finish)
   r                  Cycle region filter
   c                  Clear region filter
   ← ↑ ↓ → / h j k l  Move between cards
   Enter              Open country details
   F5                 Reload countries

 COUNTRY DETAILS
   ← / →              Select a border country
   Enter              Open the selected border country
   Esc / b            Back to the grid

 GENERAL
   t                  Toggle light/dark theme
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Help - v{} ", APP_VERSION))
        .style(Style::default().bg(colors.card).fg(colors.text));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}


#[cfg(test)]
mod tests {
    use super::test_support::{draw_state, loaded_render_state};
    use crate::models::Theme;

    #[test]
    fn test_header_shows_toggle_for_current_theme() {
        let mut state = loaded_render_state(&["Chile"]);
        assert!(draw_state(&state).contains("Dark Mode"));
        state.theme = Theme::Dark;
        assert!(draw_state(&state).contains("Light Mode"));
    }

    #[test]
    fn test_clear_action_only_with_region() {
        let mut state = loaded_render_state(&["Chile"]);
        assert!(!draw_state(&state).contains("clear (c)"));
        state.filter.region = Some("Americas".to_string());
        let screen = draw_state(&state);
        assert!(screen.contains("Americas"));
        assert!(screen.contains("clear (c)"));
    }

    #[test]
    fn test_help_popup() {
        let mut state = loaded_render_state(&["Chile"]);
        state.show_help = true;
        assert!(draw_state(&state).contains("Toggle light/dark theme"));
    }
}
