//! Raw inventory rows as loosely-typed attribute bags.

use std::collections::BTreeMap;

/// One untyped catalog row, as supplied by the inventory source.
///
/// Keys are normalized on insert so `supportedFormFactors`,
/// `Supported Form Factors` and `supported_form_factors` all land on the
/// same attribute. Blank values are dropped: an empty cell is an absent
/// attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based position in the source (CSV line or JSON array index).
    pub line: usize,
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new(line: usize) -> Self {
        Self {
            line,
            fields: BTreeMap::new(),
        }
    }

    /// Build a row from key/value pairs.
    pub fn from_pairs<K, V>(line: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut row = Self::new(line);
        for (key, value) in pairs {
            row.insert(key.as_ref(), value.as_ref());
        }
        row
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.fields.insert(normalize_key(key), value.to_string());
    }

    /// Value of the first present key among `keys`.
    pub fn get(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.fields.get(*key))
            .map(String::as_str)
    }

    pub fn contains(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Normalize an attribute key to snake_case.
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.trim().chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else if ch.is_ascii_alphanumeric() {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        } else {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Split a list attribute on `;`, `|` or `,`.
pub fn split_list(value: &str) -> Vec<&str> {
    value
        .split([';', '|', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("supportedFormFactors"), "supported_form_factors");
        assert_eq!(normalize_key("Supported Form Factors"), "supported_form_factors");
        assert_eq!(normalize_key("max-gpu-length-mm"), "max_gpu_length_mm");
        assert_eq!(normalize_key(" inStock "), "in_stock");
        assert_eq!(normalize_key("ID"), "id");
        assert_eq!(normalize_key("lengthMm"), "length_mm");
    }

    #[test]
    fn test_blank_values_are_absent() {
        let row = RawRow::from_pairs(1, [("socket", "  "), ("brand", "AMD")]);
        assert_eq!(row.get(&["socket"]), None);
        assert_eq!(row.get(&["brand"]), Some("AMD"));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("ATX; mATX"), vec!["ATX", "mATX"]);
        assert_eq!(split_list("240mm|360mm"), vec!["240mm", "360mm"]);
        assert_eq!(split_list("ATX,,"), vec!["ATX"]);
    }
}
