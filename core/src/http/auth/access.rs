//! Access attributes.
//!
//! An access expression like `"ROLE_SUPERVISOR,ROLE_TELLER"` is a comma
//! separated list of attributes. Parsing preserves order, trims whitespace
//! and drops empty segments; serialization is the inverse, so a parsed list
//! round-trips.
//!
//! # Spring Security Equivalent
//! `ConfigAttribute` / `ConfigAttributeEditor`

use std::fmt;

/// A single access attribute, e.g. `ROLE_SUPERVISOR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigAttribute(String);

impl ConfigAttribute {
    pub fn new(attribute: &str) -> Self {
        ConfigAttribute(attribute.to_string())
    }

    pub fn attribute(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses access expression text into an ordered attribute list.
pub fn parse_attribute_list(text: &str) -> Vec<ConfigAttribute> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ConfigAttribute::new)
        .collect()
}

/// Renders an attribute list back to its text form.
pub fn serialize_attribute_list(attributes: &[ConfigAttribute]) -> String {
    attributes
        .iter()
        .map(ConfigAttribute::attribute)
        .collect::<Vec<_>>()
        .join(",")
}
