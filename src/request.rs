//! Request parameters

use std::fmt;

/// Ordered request parameters
///
/// Entries holding `None` are kept so call sites can list every parameter
/// an endpoint accepts, but they are never put on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always sent
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.entries.push((key, Some(value.to_string())));
        self
    }

    /// Add a parameter that is only sent when set
    pub fn with_opt<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.entries.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Value sent for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Pairs that go on the wire, in insertion order
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
            .collect()
    }

    /// True when nothing would be sent
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }
}

/// Files to keep when selecting from a torrent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    /// Every file in the torrent
    All,
    /// Files by their id in `TorrentInfo::files`
    Ids(Vec<u64>),
}

impl fmt::Display for FileSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSelection::All => f.write_str("all"),
            FileSelection::Ids(ids) => {
                let ids: Vec<String> = ids.iter().map(u64::to_string).collect();
                f.write_str(&ids.join(","))
            }
        }
    }
}

impl From<Vec<u64>> for FileSelection {
    fn from(ids: Vec<u64>) -> Self {
        FileSelection::Ids(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_values_are_omitted() {
        let params = Params::new()
            .with("link", "https://host/file")
            .with_opt("password", None::<String>)
            .with_opt("remote", Some(1));

        assert_eq!(
            params.pairs(),
            vec![("link", "https://host/file"), ("remote", "1")]
        );
        assert_eq!(params.get("password"), None);
        assert!(!params.is_empty());
    }

    #[test]
    fn test_all_unset_is_empty() {
        let params = Params::new()
            .with_opt("offset", None::<u32>)
            .with_opt("limit", None::<u32>);
        assert!(params.is_empty());
        assert!(params.pairs().is_empty());
    }

    #[test]
    fn test_file_selection_display() {
        assert_eq!(FileSelection::All.to_string(), "all");
        assert_eq!(FileSelection::Ids(vec![1, 5, 12]).to_string(), "1,5,12");
        assert_eq!(FileSelection::from(vec![3]).to_string(), "3");
    }
}
