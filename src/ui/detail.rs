//! Detail page - every field of one country plus its border countries

use ratatui::{prelude::*, widgets::*};

use crate::app::state::{BorderList, DetailPage};
use crate::models::Country;
use crate::text::{format_population, or_placeholder};
use crate::ui::palette::Palette;

/// Labelled fields of one country, ready to draw
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub flag: String,
    /// Left column: names, population and geography
    pub primary: Vec<(&'static str, String)>,
    /// Right column: domain, currencies, languages
    pub secondary: Vec<(&'static str, String)>,
}

impl DetailView {
    pub fn from_country(country: &Country) -> Self {
        DetailView {
            name: country.common_name().to_string(),
            flag: or_placeholder(country.flag_ref()),
            primary: vec![
                ("Native Name", country.native_name().to_string()),
                ("Population", format_population(country.population)),
                ("Region", or_placeholder(country.region())),
                ("Sub Region", or_placeholder(country.subregion())),
                ("Capital", or_placeholder(country.first_capital())),
            ],
            secondary: vec![
                ("Top Level Domain", or_placeholder(country.first_tld())),
                ("Currencies", or_placeholder(country.currency_names())),
                ("Languages", or_placeholder(country.language_names())),
            ],
        }
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Border countries as shown under the fields
#[derive(Clone, Debug, PartialEq)]
pub enum BorderSection {
    /// The country has no border codes
    Hidden,
    Loading,
    Entries(Vec<String>),
}

pub fn border_section(page: &DetailPage) -> BorderSection {
    match &page.borders {
        None => BorderSection::Hidden,
        Some(BorderList::Loading) => BorderSection::Loading,
        Some(BorderList::Resolved(list)) => {
            BorderSection::Entries(list.iter().map(|c| c.common_name().to_string()).collect())
        }
    }
}

pub fn draw_detail_page(f: &mut Frame, page: &DetailPage, area: Rect, palette: &Palette) {
    let view = DetailView::from_country(&page.country);
    let section = border_section(page);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Back
            Constraint::Length(2), // Name
            Constraint::Length(6), // Fields
            Constraint::Min(0),    // Borders
        ])
        .split(area);

    let back = Paragraph::new(Span::styled(
        " ← Back (Esc) ",
        Style::default().fg(palette.text).bg(palette.card).bold(),
    ));
    f.render_widget(back, chunks[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(view.name.clone(), Style::default().fg(palette.text).bold())),
        Line::from(Span::styled(view.flag.clone(), Style::default().fg(palette.dim))),
    ]);
    f.render_widget(title, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    f.render_widget(field_list(&view.primary, palette), columns[0]);
    f.render_widget(field_list(&view.secondary, palette), columns[1]);

    draw_borders(f, &section, page.selected_border, chunks[3], palette);
}

fn field_list<'a>(fields: &'a [(&'static str, String)], palette: &Palette) -> Paragraph<'a> {
    let lines: Vec<Line> = fields
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(palette.text).bold()),
                Span::styled(value.as_str(), Style::default().fg(palette.text)),
            ])
        })
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn draw_borders(f: &mut Frame, section: &BorderSection, selected: usize, area: Rect, palette: &Palette) {
    let heading = Span::styled("Border Countries: ", Style::default().fg(palette.text).bold());

    let mut spans = vec![heading];
    match section {
        BorderSection::Hidden => return,
        BorderSection::Loading => {
            spans.push(Span::styled("loading...", Style::default().fg(palette.dim)));
        }
        BorderSection::Entries(names) if names.is_empty() => {
            spans.push(Span::styled("unavailable", Style::default().fg(palette.dim)));
        }
        BorderSection::Entries(names) => {
            for (i, name) in names.iter().enumerate() {
                let style = if i == selected {
                    Style::default().fg(palette.background).bg(palette.accent).bold()
                } else {
                    Style::default().fg(palette.text).bg(palette.card)
                };
                spans.push(Span::styled(format!(" {} ", name), style));
                spans.push(Span::raw(" "));
            }
        }
    }

    let borders = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    f.render_widget(borders, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app::state::Page;
    use crate::ui::test_support::{draw_state, loaded_render_state};

    fn detail_of(country: Country, borders: Option<BorderList>) -> DetailPage {
        DetailPage {
            country: Arc::new(country),
            borders,
            selected_border: 0,
            border_request: None,
        }
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let view = DetailView::from_country(&Country::named("Bouvet Island", None));
        assert_eq!(view.field("Capital"), Some("N/A"));
        assert_eq!(view.field("Region"), Some("N/A"));
        assert_eq!(view.field("Sub Region"), Some("N/A"));
        assert_eq!(view.field("Top Level Domain"), Some("N/A"));
        assert_eq!(view.field("Currencies"), Some("N/A"));
        assert_eq!(view.field("Languages"), Some("N/A"));
        assert_eq!(view.field("Native Name"), Some("Bouvet Island"));
        assert_eq!(view.field("Population"), Some("0"));
    }

    #[test]
    fn test_full_record_fields() {
        let json = r#"{
            "name": {"common": "Switzerland", "nativeName": {
                "fra": {"common": "Suisse"}, "gsw": {"common": "Schweiz"}}},
            "population": 8654622, "region": "Europe", "subregion": "Western Europe",
            "capital": ["Bern"], "tld": [".ch"],
            "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}},
            "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"}
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        let view = DetailView::from_country(&country);
        assert_eq!(view.field("Native Name"), Some("Suisse"));
        assert_eq!(view.field("Population"), Some("8,654,622"));
        assert_eq!(view.field("Top Level Domain"), Some(".ch"));
        assert_eq!(view.field("Currencies"), Some("Swiss franc"));
        assert_eq!(view.field("Languages"), Some("French, Swiss German, Italian, Romansh"));
    }

    #[test]
    fn test_border_section_states() {
        let none = detail_of(Country::named("Iceland", Some("Europe")), None);
        assert_eq!(border_section(&none), BorderSection::Hidden);

        let loading = detail_of(Country::named("Spain", Some("Europe")), Some(BorderList::Loading));
        assert_eq!(border_section(&loading), BorderSection::Loading);

        let resolved = detail_of(
            Country::named("Spain", Some("Europe")),
            Some(BorderList::Resolved(vec![
                Arc::new(Country::named("Andorra", Some("Europe"))),
                Arc::new(Country::named("France", Some("Europe"))),
            ])),
        );
        assert_eq!(
            border_section(&resolved),
            BorderSection::Entries(vec!["Andorra".to_string(), "France".to_string()])
        );
    }

    #[test]
    fn test_no_border_codes_draws_no_border_heading() {
        let mut state = loaded_render_state(&["Iceland"]);
        state.page = Page::Detail(detail_of(Country::named("Iceland", Some("Europe")), None));

        let screen = draw_state(&state);
        assert!(screen.contains("Iceland"));
        assert!(screen.contains("Capital: N/A"));
        assert!(!screen.contains("Border Countries"));
    }

    #[test]
    fn test_resolved_borders_are_drawn_in_order() {
        let mut state = loaded_render_state(&["Spain"]);
        state.page = Page::Detail(detail_of(
            Country::named("Spain", Some("Europe")),
            Some(BorderList::Resolved(vec![
                Arc::new(Country::named("Andorra", Some("Europe"))),
                Arc::new(Country::named("Portugal", Some("Europe"))),
            ])),
        ));

        let screen = draw_state(&state);
        let andorra = screen.find("Andorra").unwrap();
        let portugal = screen.find("Portugal").unwrap();
        assert!(screen.contains("Border Countries"));
        assert!(andorra < portugal);
    }
}
