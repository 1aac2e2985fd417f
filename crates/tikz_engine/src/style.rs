//! Style attributes attached to drawables
//!
//! A style is a small keyed collection of TikZ options. Keys are normalized
//! on insertion (underscores become spaces, so `line_width` is emitted as
//! `line width`). A key holds either a value, rendered `key=value`, or a bare
//! flag, rendered as just `key`. Keys are unique; setting an existing key
//! replaces its value in place.

/// Black
pub const BLACK: &str = "black";
/// Red
pub const RED: &str = "red";
/// Blue
pub const BLUE: &str = "blue";
/// Light blue
pub const LIGHTBLUE: &str = "lightblue";
/// Gray
pub const GRAY: &str = "gray";
/// Light gray
pub const LIGHTGRAY: &str = "lightgray";

/// Arrow tip at the head
pub const STEALTH: &str = "-stealth";
/// Arrow tips at both ends
pub const BOTH: &str = "<->";

/// Value held by a style key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// Bare option such as `dashed` or `-stealth`
    Flag,
    /// Option with a value such as `color=red`
    Value(String),
}

/// Markup options for one drawable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    entries: Vec<(String, StyleValue)>,
}

/// Replace underscores with spaces so keyword-style names match TikZ keys.
pub fn normalize_key(key: &str) -> String {
    key.replace('_', " ")
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from `key=value` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut style = Self::new();
        for (key, value) in pairs {
            style.set(key.as_ref(), value);
        }
        style
    }

    /// Set `key=value`
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.insert(normalize_key(key), StyleValue::Value(value.into()));
        self
    }

    /// Set or clear a bare flag
    pub fn set_flag(&mut self, key: &str, enabled: bool) -> &mut Self {
        let key = normalize_key(key);
        if enabled {
            self.insert(key, StyleValue::Flag);
        } else {
            self.entries.retain(|(k, _)| *k != key);
        }
        self
    }

    /// Stroke color
    pub fn set_color(&mut self, color: &str) -> &mut Self {
        self.set("color", color)
    }

    /// Fill color
    pub fn set_fill(&mut self, color: &str) -> &mut Self {
        self.set("fill", color)
    }

    /// Arrow tips, e.g. [`STEALTH`] or [`BOTH`]
    pub fn set_tips(&mut self, tips: &str) -> &mut Self {
        self.set_flag(tips, true)
    }

    /// Look up a key (normalized first)
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        let key = normalize_key(key);
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let key = normalize_key(key);
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether no options are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Bracketed option list, or an empty string when there are no options
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let options: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| match value {
                StyleValue::Flag => key.clone(),
                StyleValue::Value(value) => format!("{key}={value}"),
            })
            .collect();

        format!("[{}]", options.join(", "))
    }

    fn insert(&mut self, key: String, value: StyleValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }
}
