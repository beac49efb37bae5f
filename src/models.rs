use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Light/dark color preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A JSON object decoded into key/value pairs in payload order
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn first(&self) -> Option<(&str, &V)> {
        self.0.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Treats an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Name of a country in one local script
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default, rename = "nativeName", deserialize_with = "null_as_default")]
    pub native_name: OrderedMap<NativeName>,
}

/// Flag image references
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A country record as served by the data source
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Flags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tld: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: OrderedMap<Currency>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: OrderedMap<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn region(&self) -> Option<&str> {
        non_blank(self.region.as_ref())
    }

    pub fn subregion(&self) -> Option<&str> {
        non_blank(self.subregion.as_ref())
    }

    pub fn first_capital(&self) -> Option<&str> {
        non_blank(self.capital.first())
    }

    pub fn first_tld(&self) -> Option<&str> {
        non_blank(self.tld.first())
    }

    /// Common name of the first native-name entry, or the common name
    pub fn native_name(&self) -> &str {
        self.name
            .native_name
            .first()
            .map(|(_, native)| native.common.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name.common)
    }

    /// Comma-joined currency names, `None` when there are none
    pub fn currency_names(&self) -> Option<String> {
        join_non_empty(self.currencies.values().map(|c| c.name.as_str()))
    }

    /// Comma-joined language names, `None` when there are none
    pub fn language_names(&self) -> Option<String> {
        join_non_empty(self.languages.values().map(String::as_str))
    }

    pub fn flag_ref(&self) -> Option<&str> {
        Some(self.flags.svg.as_str())
            .filter(|s| !s.is_empty())
            .or_else(|| Some(self.flags.png.as_str()).filter(|s| !s.is_empty()))
    }
}

fn join_non_empty<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let names: Vec<&str> = names.filter(|n| !n.is_empty()).collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

#[cfg(test)]
impl Country {
    /// Minimal record for tests
    pub(crate) fn named(name: &str, region: Option<&str>) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
                native_name: OrderedMap::default(),
            },
            flags: Flags::default(),
            population: 0,
            region: region.map(str::to_string),
            subregion: None,
            capital: Vec::new(),
            borders: Vec::new(),
            tld: Vec::new(),
            currencies: OrderedMap::default(),
            languages: OrderedMap::default(),
        }
    }
}
