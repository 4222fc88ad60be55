//! Enchantment types
//!
//! Domain primitives for canonical enchantment identifiers and the
//! descriptors a host registry hands to the mutation engine.
//! Identifiers and level ranges are validated at construction time, so an
//! invalid descriptor cannot reach the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Separator between namespace and key (`minecraft:sharpness`)
const NAMESPACE_SEPARATOR: char = ':';

/// Canonical enchantment identifier.
///
/// # Invariants
/// - Non-empty
/// - Only lowercase ASCII letters, digits, `_`, `-`, `.`, `/`
/// - At most one `:` namespace separator, with non-empty parts on both sides
///
/// # Example
/// ```
/// use item_forge::domain::EnchantmentId;
///
/// let id: EnchantmentId = "minecraft:sharpness".parse().unwrap();
/// assert_eq!(id.key(), "sharpness");
/// assert_eq!(id.namespace(), Some("minecraft"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnchantmentId(String);

impl EnchantmentId {
    /// Create a new identifier with validation.
    ///
    /// # Errors
    /// - `DomainError::InvalidEnchantmentId` if the value breaks any invariant
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::invalid_enchantment_id(value, "identifier is empty"));
        }

        let mut parts = value.splitn(2, NAMESPACE_SEPARATOR);
        let first = parts.next().unwrap_or_default();
        let second = parts.next();

        if first.is_empty() || second.is_some_and(str::is_empty) {
            return Err(DomainError::invalid_enchantment_id(
                value,
                "namespace and key must both be non-empty",
            ));
        }

        let valid_chars = value.chars().filter(|c| *c != NAMESPACE_SEPARATOR).all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '/')
        });
        let separators = value.matches(NAMESPACE_SEPARATOR).count();

        if !valid_chars || separators > 1 {
            return Err(DomainError::invalid_enchantment_id(
                value,
                "only [a-z0-9_.-/] and a single ':' are allowed",
            ));
        }

        Ok(Self(value))
    }

    /// Full identifier as written in configuration
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part, if the identifier is namespaced
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .split_once(NAMESPACE_SEPARATOR)
            .map(|(namespace, _)| namespace)
    }

    /// Key part (the whole identifier when not namespaced)
    pub fn key(&self) -> &str {
        self.0
            .split_once(NAMESPACE_SEPARATOR)
            .map_or(self.0.as_str(), |(_, key)| key)
    }
}

impl fmt::Display for EnchantmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EnchantmentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnchantmentId::new(s)
    }
}

impl TryFrom<String> for EnchantmentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EnchantmentId::new(value)
    }
}

impl From<EnchantmentId> for String {
    fn from(id: EnchantmentId) -> Self {
        id.0
    }
}

/// Immutable description of an enchantment type, supplied by the host
/// registry per call.
///
/// # Invariants
/// - `1 <= start_level <= max_level`
///
/// Level 0 is reserved for "remove", so no descriptor may declare it safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnchantmentDescriptor {
    id: EnchantmentId,
    start_level: u32,
    max_level: u32,
}

impl EnchantmentDescriptor {
    /// Create a descriptor with validation.
    ///
    /// # Errors
    /// - `DomainError::InvalidLevelRange` if `start_level` is 0 or exceeds `max_level`
    pub fn new(id: EnchantmentId, start_level: u32, max_level: u32) -> Result<Self, DomainError> {
        if start_level == 0 || start_level > max_level {
            return Err(DomainError::InvalidLevelRange {
                id: id.to_string(),
                start_level,
                max_level,
            });
        }

        Ok(Self {
            id,
            start_level,
            max_level,
        })
    }

    pub fn id(&self) -> &EnchantmentId {
        &self.id
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Whether `level` lies inside the declared safe range (inclusive)
    pub fn is_safe_level(&self, level: u32) -> bool {
        (self.start_level..=self.max_level).contains(&level)
    }
}

/// Parse a user-typed enchantment level.
///
/// Accepts any base-10 `i32` with an optional `+` or `-` sign and optional
/// surrounding whitespace. Range checks belong to the mutation engine, so
/// `0` (removal) and negative levels parse fine here.
///
/// # Errors
/// - `DomainError::InvalidLevel` for non-numeric text, fractions and overflow
pub fn parse_level(raw: &str) -> Result<i32, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::InvalidLevel(raw.to_string()))
}
