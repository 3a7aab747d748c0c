//! Flag keys
//!
//! Three namespaces share one store:
//! - circuit flags, `FactoryActivation:{id}`, shared by every switch and listener
//!   using that activation id
//! - per-instance flags, `{kind}:{level}:{id}`, owned by one placed entity
//! - named level-wide flags, `{name}`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of circuit flags
pub const CIRCUIT_NAMESPACE: &str = "FactoryActivation";

/// Stable identity of a placed entity: level name plus per-level id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    /// Level (room) name
    pub level: String,
    /// Per-level placement id
    pub id: u32,
}

impl EntityId {
    /// Create an entity id
    pub fn new(level: impl Into<String>, id: u32) -> Self {
        Self {
            level: level.into(),
            id,
        }
    }

    /// Key used for per-instance flags
    pub fn key(&self) -> String {
        format!("{}:{}", self.level, self.id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level, self.id)
    }
}

/// A flag key that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid flag key: {0:?}")]
pub struct InvalidKey(pub String);

/// Namespace a flag key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagNamespace {
    /// Circuit-closed flags, `FactoryActivation:{id}`
    Circuit,
    /// Per-instance flags, `{kind}:{key}`
    Instance,
    /// Level-wide flags without a namespace
    Named,
}

/// Structured session flag key.
///
/// Every key is built from its string form, so two keys are equal exactly when
/// their strings are, before and after a save round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FlagKey(KeyRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyRepr {
    Circuit(String),
    Instance { kind: String, key: String },
    Named(String),
}

impl FlagKey {
    /// Circuit flag for an activation id
    pub fn circuit(activation_id: impl AsRef<str>) -> Self {
        Self::classify(format!("{}:{}", CIRCUIT_NAMESPACE, activation_id.as_ref()))
    }

    /// Per-instance flag for an entity of the given kind
    pub fn instance(kind: impl AsRef<str>, entity: &EntityId) -> Self {
        Self::classify(format!("{}:{}", kind.as_ref(), entity.key()))
    }

    /// Level-wide flag. The name is read in its string form, so a name that
    /// spells out another namespace resolves to that namespace's key.
    pub fn named(name: impl Into<String>) -> Self {
        Self::classify(name.into())
    }

    fn classify(raw: String) -> Self {
        if let Some(id) = raw
            .strip_prefix(CIRCUIT_NAMESPACE)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return Self(KeyRepr::Circuit(id.to_string()));
        }
        match raw.split_once(':') {
            Some((kind, key)) => Self(KeyRepr::Instance {
                kind: kind.to_string(),
                key: key.to_string(),
            }),
            None => Self(KeyRepr::Named(raw)),
        }
    }

    /// Namespace of this key
    pub fn namespace(&self) -> FlagNamespace {
        match self.0 {
            KeyRepr::Circuit(_) => FlagNamespace::Circuit,
            KeyRepr::Instance { .. } => FlagNamespace::Instance,
            KeyRepr::Named(_) => FlagNamespace::Named,
        }
    }

    /// Whether this is a circuit flag
    pub fn is_circuit(&self) -> bool {
        self.namespace() == FlagNamespace::Circuit
    }

    /// Activation id of a circuit flag
    pub fn activation_id(&self) -> Option<&str> {
        match &self.0 {
            KeyRepr::Circuit(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            KeyRepr::Circuit(id) => write!(f, "{}:{}", CIRCUIT_NAMESPACE, id),
            KeyRepr::Instance { kind, key } => write!(f, "{}:{}", kind, key),
            KeyRepr::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for FlagKey {
    type Err = InvalidKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidKey(s.to_string()));
        }
        Ok(Self::classify(s.to_string()))
    }
}

impl From<FlagKey> for String {
    fn from(key: FlagKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for FlagKey {
    type Error = InvalidKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_forms() {
        let entity = EntityId::new("a-01", 7);
        assert_eq!(FlagKey::circuit("belt").to_string(), "FactoryActivation:belt");
        assert_eq!(FlagKey::instance("DashFuseBox", &entity).to_string(), "DashFuseBox:a-01:7");
        assert_eq!(FlagKey::named("fuse_cutscene_seen").to_string(), "fuse_cutscene_seen");
    }

    #[test]
    fn test_parse_round_trip() {
        let keys = [
            FlagKey::circuit("belt"),
            FlagKey::instance("DashFuseBox", &EntityId::new("a-01", 7)),
            FlagKey::named("seen"),
        ];
        for key in keys {
            assert_eq!(key.to_string().parse::<FlagKey>(), Ok(key));
        }
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let entity = EntityId::new("belt", 1);
        assert_ne!(FlagKey::circuit("belt"), FlagKey::named("belt"));
        assert_ne!(
            FlagKey::circuit("belt:1").to_string(),
            FlagKey::instance("DashFuseBox", &entity).to_string()
        );
    }

    #[test]
    fn test_named_uses_string_form() {
        assert_eq!(FlagKey::named("FactoryActivation:belt"), FlagKey::circuit("belt"));
        assert!(FlagKey::named("FactoryActivation:belt").is_circuit());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!("".parse::<FlagKey>(), Err(InvalidKey(String::new())));
    }

    #[test]
    fn test_keys_equal_iff_strings_equal() {
        let entity = EntityId::new("lvl", 1);
        // an instance kind that names the circuit namespace is that circuit key
        assert_eq!(
            FlagKey::instance(CIRCUIT_NAMESPACE, &entity),
            FlagKey::circuit("lvl:1")
        );
        // a kind containing ':' splits the same way its string form does
        assert_eq!(
            FlagKey::instance("Fuse:Box", &entity),
            "Fuse:Box:lvl:1".parse::<FlagKey>().unwrap()
        );
        assert_eq!(FlagKey::instance("Fuse:Box", &entity).namespace(), FlagNamespace::Instance);
    }

    #[test]
    fn test_equality_survives_json_round_trip() {
        let keys = [
            FlagKey::named("FactoryActivation:x"),
            FlagKey::instance("Fuse:Box", &EntityId::new("lvl", 2)),
            FlagKey::named("seen"),
        ];
        for key in keys {
            let json = serde_json::to_string(&key).unwrap();
            let back: FlagKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn test_circuit_activation_id() {
        assert_eq!(FlagKey::circuit("belt").activation_id(), Some("belt"));
        assert_eq!(FlagKey::named("belt").activation_id(), None);
    }
}
