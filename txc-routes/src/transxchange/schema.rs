//! Schema configuration for TransXChange documents.

/// Namespace of TransXChange 2.x documents.
pub const TRANSXCHANGE_NAMESPACE: &str = "http://www.transxchange.org.uk/";

/// Configuration for reading schedule documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Namespace every element lookup is qualified with.
    /// Use an empty string for documents without a default namespace.
    pub namespace: String,
}

impl SchemaConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::new(TRANSXCHANGE_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transxchange() {
        assert_eq!(SchemaConfig::default().namespace, TRANSXCHANGE_NAMESPACE);
        assert_eq!(SchemaConfig::new("urn:test").namespace, "urn:test");
    }
}
