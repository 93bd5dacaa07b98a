use crate::error::CaseError;
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};

lazy_static! {
    /// Built-in initialisms, stored upper-cased.
    static ref BUILTIN: HashSet<&'static str> = [
        "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS",
        "ID", "IO", "IP", "JS", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC",
        "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL", "UDP", "UI", "UID",
        "UUID", "URI", "URL", "UTF", "VM", "XML", "XMPP", "XSRF", "XSS",
    ]
    .into_iter()
    .collect();
}

/// Check a word against the built-in initialisms, ignoring case.
pub fn is_initialism(word: &str) -> bool {
    BUILTIN.contains(word.to_ascii_uppercase().as_str())
}

/// The set of initialisms consulted by the CapWords and mixedCase joiners.
///
/// The default value is exactly the built-in table. Extra entries are kept
/// alongside it, so the shared table is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialisms {
    builtin: bool,
    extra: BTreeSet<String>,
}

impl Default for Initialisms {
    fn default() -> Self {
        Self {
            builtin: true,
            extra: BTreeSet::new(),
        }
    }
}

impl Initialisms {
    /// A table with no initialisms at all.
    pub fn empty() -> Self {
        Self {
            builtin: false,
            extra: BTreeSet::new(),
        }
    }

    /// Add entries to this table.
    ///
    /// Each entry must be non-empty ASCII alphanumeric; it is stored upper-cased.
    pub fn with_extra<I, S>(mut self, words: I) -> Result<Self, CaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(CaseError::InvalidInitialism(word.to_string()));
            }

            let upper = word.to_ascii_uppercase();
            if self.builtin && BUILTIN.contains(upper.as_str()) {
                log::debug!("Initialism '{}' is already built in", upper);
                continue;
            }
            self.extra.insert(upper);
        }
        Ok(self)
    }

    pub fn contains(&self, word: &str) -> bool {
        let upper = word.to_ascii_uppercase();
        (self.builtin && BUILTIN.contains(upper.as_str())) || self.extra.contains(&upper)
    }

    pub fn len(&self) -> usize {
        let builtin = if self.builtin { BUILTIN.len() } else { 0 };
        builtin + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every entry in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut all: Vec<&str> = self.extra.iter().map(String::as_str).collect();
        if self.builtin {
            all.extend(BUILTIN.iter().copied());
        }
        all.sort_unstable();
        all.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(BUILTIN.len(), 39);
        assert!(is_initialism("ID"));
        assert!(is_initialism("id"));
        assert!(is_initialism("Https"));
        assert!(!is_initialism("GRPC"));
        assert!(!is_initialism(""));
    }

    #[test]
    fn test_default_matches_builtin() {
        let initialisms = Initialisms::default();
        assert_eq!(initialisms.len(), 39);
        assert!(initialisms.contains("xml"));
        assert!(!initialisms.contains("Request"));
    }

    #[test]
    fn test_extra_entries() {
        let initialisms = Initialisms::default()
            .with_extra(["grpc", "K8s", "ID"])
            .unwrap();
        assert!(initialisms.contains("GRPC"));
        assert!(initialisms.contains("k8s"));
        assert_eq!(initialisms.len(), 41);
        assert_eq!(initialisms.iter().filter(|w| *w == "ID").count(), 1);
    }

    #[test]
    fn test_empty_table() {
        let initialisms = Initialisms::empty();
        assert!(initialisms.is_empty());
        assert!(!initialisms.contains("ID"));

        let initialisms = initialisms.with_extra(["sku"]).unwrap();
        assert_eq!(initialisms.iter().collect::<Vec<_>>(), vec!["SKU"]);
    }

    #[test]
    fn test_invalid_entries_rejected() {
        assert_eq!(
            Initialisms::default().with_extra(["X-Ray"]),
            Err(CaseError::InvalidInitialism("X-Ray".to_string()))
        );
        assert_eq!(
            Initialisms::default().with_extra([""]),
            Err(CaseError::InvalidInitialism(String::new()))
        );
    }
}
