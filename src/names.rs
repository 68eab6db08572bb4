//! XML name validation
//!
//! Element and attribute names on the concrete schema elements are
//! compile-time constants, but the generic [`crate::XmlElement`] node accepts
//! caller-supplied names and validates them here.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// MusicXML names are plain NCNames: no namespaces, no unicode exotica.
static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap());

/// Check if a string is a valid element or attribute name
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}

/// Validate a name and return an error if invalid
pub fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::Name(format!("invalid XML name: '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("tuplet"));
        assert!(is_valid_name("tuplet-actual"));
        assert!(is_valid_name("beat-type"));
        assert!(is_valid_name("_private"));
        assert!(is_valid_name("f1"));

        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1st"));
        assert!(!is_valid_name("-tuplet"));
        assert!(!is_valid_name("bad name"));
        assert!(!is_valid_name("ns:tuplet"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("senza-misura").is_ok());
        assert!(validate_name("<tuplet>").is_err());
    }
}
