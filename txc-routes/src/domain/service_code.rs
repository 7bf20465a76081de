//! Bus line service code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when building an invalid service code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service code: {reason}")]
pub struct InvalidServiceCode {
    reason: &'static str,
}

/// The identifier of a bus line within a schedule publication.
///
/// Service codes key both the line registry and the per-line record files,
/// so the only validation is that they are non-empty. Path safety is not
/// checked; the code is taken from the publisher as-is.
///
/// # Examples
///
/// ```
/// use txc_routes::domain::ServiceCode;
///
/// let code = ServiceCode::new("F040".to_string()).unwrap();
/// assert_eq!(code.as_str(), "F040");
/// assert_eq!(code.file_name(), "F040.json");
///
/// assert!(ServiceCode::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceCode(String);

impl ServiceCode {
    /// Create a service code, rejecting empty strings.
    pub fn new(s: String) -> Result<Self, InvalidServiceCode> {
        if s.is_empty() {
            return Err(InvalidServiceCode {
                reason: "service code cannot be empty",
            });
        }
        Ok(ServiceCode(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the JSON record stored for this line.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl TryFrom<String> for ServiceCode {
    type Error = InvalidServiceCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ServiceCode> for String {
    fn from(code: ServiceCode) -> Self {
        code.0
    }
}

impl fmt::Debug for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceCode({})", self.0)
    }
}

impl fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid service code
        #[test]
        fn nonempty_always_valid(s in ".+") {
            let code = ServiceCode::new(s.clone()).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }
    }
}
