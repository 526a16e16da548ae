//! Package identity.

use std::fmt;

/// Identifier of one installed application on the target device.
///
/// Opaque beyond equality and use as a lookup key; Android package names
/// (`com.vendor.app`) are the common shape but no structure is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(String);

impl PackageId {
    /// Creates a package identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PackageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let id = PackageId::new("com.example.app");
        assert_eq!(id.to_string(), "com.example.app");
        assert_eq!(id.as_str(), "com.example.app");
    }

    #[test]
    fn test_equality_as_lookup_key() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PackageId::new("com.bank.app"));
        assert!(set.contains(&PackageId::from("com.bank.app")));
        assert!(!set.contains(&PackageId::from("com.other.app")));
    }
}
