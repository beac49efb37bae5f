//! Text helpers shared by the repository and the renderers

use std::cmp::Ordering;
use std::sync::Arc;

use crate::constants::PLACEHOLDER;
use crate::models::Country;

/// The value itself, or the placeholder when it is missing or blank
pub fn or_placeholder<S: AsRef<str>>(value: Option<S>) -> String {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => v.as_ref().to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Groups digits by three with commas, e.g. `1234567` -> `1,234,567`
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn fold_char(c: char) -> char {
    match c {
        'À'..='Å' | 'à'..='å' | 'Ā' | 'ā' => 'a',
        'Ç' | 'ç' | 'Č' | 'č' => 'c',
        'È'..='Ë' | 'è'..='ë' | 'Ē' | 'ē' | 'Ė' | 'ė' => 'e',
        'Ì'..='Ï' | 'ì'..='ï' | 'Ī' | 'ī' => 'i',
        'Ñ' | 'ñ' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō' | 'ō' => 'o',
        'Š' | 'š' => 's',
        'Ù'..='Ü' | 'ù'..='ü' | 'Ū' | 'ū' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        'Ž' | 'ž' => 'z',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Case- and accent-insensitive key approximating locale collation
pub fn collation_key(name: &str) -> String {
    name.chars().map(fold_char).collect()
}

/// Locale-aware name comparison; ties fall back to the raw strings
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Sorts countries by common name
pub fn sort_by_name(countries: &mut [Arc<Country>]) {
    countries.sort_by(|a, b| compare_names(a.common_name(), b.common_name()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(38005238), "38,005,238");
        assert_eq!(format_population(1402112000), "1,402,112,000");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Ottawa")), "Ottawa");
        assert_eq!(or_placeholder(Some("")), "N/A");
        assert_eq!(or_placeholder(None::<&str>), "N/A");
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        let mut countries: Vec<Arc<Country>> = ["Albania", "Åland Islands", "Afghanistan", "algeria"]
            .iter()
            .map(|n| Arc::new(Country::named(n, None)))
            .collect();
        sort_by_name(&mut countries);
        let names: Vec<&str> = countries.iter().map(|c| c.common_name()).collect();
        assert_eq!(names, vec!["Afghanistan", "Åland Islands", "Albania", "algeria"]);
    }

    #[test]
    fn test_compare_names_is_total() {
        assert_eq!(compare_names("Côte d'Ivoire", "Cote d'Ivoire"), Ordering::Greater);
        assert_eq!(compare_names("Réunion", "Romania"), Ordering::Less);
        assert_eq!(compare_names("Peru", "Peru"), Ordering::Equal);
    }
}
