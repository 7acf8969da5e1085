use std::collections::{BTreeMap, HashMap};

/// Character-to-string table backing one standard.
///
/// Keys are single characters, so a left-to-right scan over the input is
/// enough to apply the table without any ambiguity between keys.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    map: HashMap<char, String>,
    /// Set when any key is ASCII; otherwise ASCII-only input is returned as is.
    has_ascii_keys: bool,
}

impl MappingTable {
    pub fn new(map: HashMap<char, String>) -> Self {
        let has_ascii_keys = map.keys().any(char::is_ascii);
        Self {
            map,
            has_ascii_keys,
        }
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).map(String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn has_ascii_keys(&self) -> bool {
        self.has_ascii_keys
    }

    /// Iterate entries in code point order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> {
        let sorted: BTreeMap<char, &str> = self
            .map
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        sorted.into_iter()
    }
}

impl FromIterator<(char, String)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
