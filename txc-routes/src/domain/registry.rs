//! Sorted index of extracted lines.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ServiceCode;

/// The set of service codes produced by one extractor batch.
///
/// Stored sorted, so the persisted `{"lines": [...]}` document is the same
/// regardless of the order documents were read in. This is the only index
/// the enricher uses: a line record that is not registered here is never
/// enriched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRegistry {
    lines: BTreeSet<ServiceCode>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service code. Returns `false` if it was already present.
    pub fn register(&mut self, code: ServiceCode) -> bool {
        self.lines.insert(code)
    }

    pub fn contains(&self, code: &ServiceCode) -> bool {
        self.lines.contains(code)
    }

    /// Registered codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &ServiceCode> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<ServiceCode> for LineRegistry {
    fn from_iter<I: IntoIterator<Item = ServiceCode>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ServiceCode {
        ServiceCode::new(s.to_string()).unwrap()
    }

    #[test]
    fn persists_sorted() {
        let mut registry = LineRegistry::new();
        registry.register(code("X59"));
        registry.register(code("F040"));
        registry.register(code("F099S"));

        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"lines":["F040","F099S","X59"]}"#);
    }

    #[test]
    fn duplicate_registration_is_reported() {
        let mut registry = LineRegistry::new();
        assert!(registry.register(code("F040")));
        assert!(!registry.register(code("F040")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reads_unsorted_input() {
        let registry: LineRegistry =
            serde_json::from_str(r#"{"lines":["b","a","c"]}"#).unwrap();
        let order: Vec<&str> = registry.iter().map(ServiceCode::as_str).collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert!(registry.contains(&code("a")));
    }
}
