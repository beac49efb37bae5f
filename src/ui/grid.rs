//! Grid page - search bar, region selector and country cards

use ratatui::{prelude::*, widgets::*};

use crate::app::state::LoadStatus;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Country;
use crate::text::{format_population, or_placeholder};
use crate::ui::palette::Palette;

pub const CARD_WIDTH: u16 = 32;
pub const CARD_HEIGHT: u16 = 6;

/// Summary of one country as shown on a card
#[derive(Clone, Debug, PartialEq)]
pub struct CountryCard {
    pub name: String,
    pub flag: String,
    pub population: String,
    pub region: String,
    pub capital: String,
}

impl CountryCard {
    pub fn from_country(country: &Country) -> Self {
        CountryCard {
            name: country.common_name().to_string(),
            flag: or_placeholder(country.flag_ref()),
            population: format_population(country.population),
            region: or_placeholder(country.region()),
            capital: or_placeholder(country.first_capital()),
        }
    }
}

/// What the grid area shows
#[derive(Clone, Debug, PartialEq)]
pub enum GridView {
    Loading,
    Error(String),
    NoResults,
    Cards(Vec<CountryCard>),
}

pub fn grid_view(state: &RenderState) -> GridView {
    match &state.load {
        LoadStatus::Failed(message) => GridView::Error(message.clone()),
        LoadStatus::Loading if state.total == 0 => GridView::Loading,
        _ if state.filtered.is_empty() => GridView::NoResults,
        _ => GridView::Cards(
            state
                .filtered
                .iter()
                .map(|c| CountryCard::from_country(c))
                .collect(),
        ),
    }
}

/// Cards per row for a grid of the given width
pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// First row to draw so that `selected_row` stays on screen
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

pub fn draw_grid_page(f: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search + region
            Constraint::Min(0),    // Cards
        ])
        .split(area);

    draw_filter_bar(f, state, chunks[0], palette);

    match grid_view(state) {
        GridView::Cards(cards) => draw_cards(f, &cards, state.selected, chunks[1], palette),
        GridView::Loading => draw_notice(f, "Loading countries...", palette.dim, chunks[1]),
        GridView::NoResults => draw_notice(f, "No countries found", palette.dim, chunks[1]),
        GridView::Error(message) => draw_notice(
            f,
            &format!("Error loading countries\n\n{}\n\nPress F5 to try again", message),
            palette.error,
            chunks[1],
        ),
    }
}

fn draw_filter_bar(f: &mut Frame, state: &RenderState, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let editing = state.input_mode == InputMode::Search;
    let border_style = if editing {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let (text, text_style) = if state.filter.search.is_empty() && !editing {
        ("Search for a country...", Style::default().fg(palette.dim))
    } else {
        (state.filter.search.as_str(), Style::default().fg(palette.text))
    };

    let search = Paragraph::new(Span::styled(format!("🔍 {}", text), text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search (/) ")
            .title_bottom(
                Line::from(format!(" {} of {} ", state.filtered.len(), state.total)).right_aligned(),
            ),
    );
    f.render_widget(search, chunks[0]);

    if editing {
        let cursor_x = search_cursor_x(chunks[0], &state.filter.search);
        f.set_cursor_position(Position::new(cursor_x, chunks[0].y + 1));
    }

    let mut region_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(" Filter by Region (r) ");
    if state.filter.has_region() {
        region_block = region_block.title_bottom(
            Line::from(Span::styled(" ✕ clear (c) ", Style::default().fg(palette.accent))).right_aligned(),
        );
    }
    let region = Paragraph::new(Span::styled(
        state.filter.region.as_deref().unwrap_or("All regions").to_string(),
        Style::default().fg(palette.text),
    ))
    .block(region_block);
    f.render_widget(region, chunks[1]);
}

fn draw_cards(f: &mut Frame, cards: &[CountryCard], selected: usize, area: Rect, palette: &Palette) {
    let columns = columns_for(area.width);
    let card_width = area.width / columns as u16;
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let start_row = first_visible_row(selected / columns, visible_rows);

    for (i, card) in cards.iter().enumerate().skip(start_row * columns) {
        let row = i / columns - start_row;
        if row >= visible_rows {
            break;
        }
        let col = i % columns;
        let rect = Rect {
            x: area.x + col as u16 * card_width,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        draw_card(f, card, i == selected, rect, palette);
    }
}

fn draw_card(f: &mut Frame, card: &CountryCard, is_selected: bool, area: Rect, palette: &Palette) {
    let border_style = if is_selected {
        Style::default().fg(palette.accent).bold()
    } else {
        Style::default().fg(palette.dim)
    };
    let label = Style::default().fg(palette.text).bold();
    let value = Style::default().fg(palette.text);

    let lines = vec![
        Line::from(vec![Span::styled("Population: ", label), Span::styled(card.population.as_str(), value)]),
        Line::from(vec![Span::styled("Region: ", label), Span::styled(card.region.as_str(), value)]),
        Line::from(vec![Span::styled("Capital: ", label), Span::styled(card.capital.as_str(), value)]),
        Line::from(Span::styled(card.flag.as_str(), Style::default().fg(palette.dim))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if is_selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", card.name), label))
        .style(Style::default().bg(palette.card));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_notice(f: &mut Frame, text: &str, color: Color, area: Rect) {
    let notice = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::top(2)));
    f.render_widget(notice, area);
}

/// Column just past the typed text, measured in terminal cells
fn search_cursor_x(area: Rect, search: &str) -> u16 {
    let max_x = area.x + area.width.saturating_sub(2);
    // border plus "🔍 "
    let typed = u16::try_from(Span::raw(search).width()).unwrap_or(u16::MAX);
    area.x.saturating_add(4).saturating_add(typed).min(max_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::ui::test_support::{draw_state, loaded_render_state};

    #[test]
    fn test_search_cursor_counts_cells() {
        let area = Rect::new(0, 0, 40, 3);
        assert_eq!(search_cursor_x(area, ""), 4);
        assert_eq!(search_cursor_x(area, "chi"), 7);
        // each CJK character takes two cells
        assert_eq!(search_cursor_x(area, "日本"), 8);
        assert_eq!(search_cursor_x(area, &"x".repeat(80)), 38);
    }

    #[test]
    fn test_card_placeholders() {
        let country = Country::named("Bouvet Island", None);
        let card = CountryCard::from_country(&country);
        assert_eq!(card.region, "N/A");
        assert_eq!(card.capital, "N/A");
        assert_eq!(card.population, "0");
        assert_eq!(card.flag, "N/A");
    }

    #[test]
    fn test_card_count_matches_filtered_list() {
        let state = loaded_render_state(&["Canada", "France", "Ghana"]);
        match grid_view(&state) {
            GridView::Cards(cards) => {
                assert_eq!(cards.len(), state.filtered.len());
                assert_eq!(cards[1].name, "France");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_filter_result_shows_no_results() {
        let mut state = loaded_render_state(&["Canada"]);
        state.filtered.clear();
        assert_eq!(grid_view(&state), GridView::NoResults);

        let screen = draw_state(&state);
        assert!(screen.contains("No countries found"));
        assert!(!screen.contains("Population:"));
    }

    #[test]
    fn test_load_failure_replaces_grid() {
        let mut state = loaded_render_state(&["Canada"]);
        state.load = LoadStatus::Failed("Request failed: timeout".to_string());

        let screen = draw_state(&state);
        assert!(screen.contains("Error loading countries"));
        assert!(!screen.contains("Canada"));
    }

    #[test]
    fn test_cards_render_with_fields() {
        let mut state = loaded_render_state(&["Canada"]);
        let mut canada = Country::named("Canada", Some("Americas"));
        canada.population = 38005238;
        canada.capital = vec!["Ottawa".to_string()];
        state.filtered = vec![Arc::new(canada)];

        let screen = draw_state(&state);
        assert!(screen.contains("Canada"));
        assert!(screen.contains("38,005,238"));
        assert!(screen.contains("Ottawa"));
    }

    #[test]
    fn test_scrolling_keeps_selection_visible() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(CARD_WIDTH * 3 + 5), 3);
    }
}
