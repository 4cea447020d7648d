use crate::primitives::*;
use crate::util::*;
use std::{fmt, path::Path};

/// Table-level choices that are fixed before dealing.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct SRuleSet {
    pub ekurzlang: EKurzLang,
    /// Holder of the called ace may lead its farbe without the ace if holding at least three others.
    pub b_davonlaufen: bool,
}

impl Default for SRuleSet {
    fn default() -> Self {
        SRuleSet::new(EKurzLang::Lang, /*b_davonlaufen*/false)
    }
}

#[derive(Debug)]
pub enum VRuleSetError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    InvalidDeck(String),
    InvalidType(String),
}

impl fmt::Display for VRuleSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read rule set: {}", err),
            Self::Toml(err) => write!(f, "malformed rule set: {}", err),
            Self::InvalidDeck(str_deck) => write!(f, "{} is not a valid value for 'deck' (supported values: kurz, lang)", str_deck),
            Self::InvalidType(str_key) => write!(f, "{} has a value of the wrong type", str_key),
        }
    }
}
impl std::error::Error for VRuleSetError {}

impl From<std::io::Error> for VRuleSetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
impl From<toml::de::Error> for VRuleSetError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err)
    }
}

impl SRuleSet {
    pub fn from_string(str_toml: &str) -> Result<SRuleSet, VRuleSetError> {
        let tomltbl = toml::from_str::<toml::Table>(str_toml)?;
        let ekurzlang = match tomltbl.get("deck") {
            None => {
                info!("SRuleSet: deck not specified. Falling back to 'lang'.");
                EKurzLang::Lang
            },
            Some(toml::Value::String(str_deck)) => match str_deck.as_str() {
                "kurz" => EKurzLang::Kurz,
                "lang" => EKurzLang::Lang,
                _ => return Err(VRuleSetError::InvalidDeck(str_deck.clone())),
            },
            Some(_) => return Err(VRuleSetError::InvalidType("deck".to_string())),
        };
        let b_davonlaufen = match tomltbl.get("rufspiel").map(|tomlval_rufspiel| tomlval_rufspiel.get("davonlaufen")) {
            None | Some(None) => {
                info!("SRuleSet: rufspiel.davonlaufen not specified. Falling back to 'false'.");
                false
            },
            Some(Some(tomlval_davonlaufen)) => tomlval_davonlaufen.as_bool()
                .ok_or_else(|| VRuleSetError::InvalidType("rufspiel.davonlaufen".to_string()))?,
        };
        Ok(SRuleSet::new(ekurzlang, b_davonlaufen))
    }

    pub fn from_file(path: &Path) -> Result<SRuleSet, VRuleSetError> {
        Self::from_string(&std::fs::read_to_string(path)?)
    }
}

#[test]
fn test_ruleset_from_string() {
    assert_eq!(
        verify!(SRuleSet::from_string("deck = \"kurz\"\n[rufspiel]\ndavonlaufen = true\n")).unwrap(),
        SRuleSet::new(EKurzLang::Kurz, true),
    );
    assert_eq!(verify!(SRuleSet::from_string("")).unwrap(), SRuleSet::default());
    assert_eq!(verify!(SRuleSet::from_string("[rufspiel]\n")).unwrap(), SRuleSet::default());
    assert!(matches!(SRuleSet::from_string("deck = \"mittel\""), Err(VRuleSetError::InvalidDeck(_))));
    assert!(matches!(SRuleSet::from_string("deck = 32"), Err(VRuleSetError::InvalidType(_))));
    assert!(matches!(SRuleSet::from_string("[rufspiel]\ndavonlaufen = 3"), Err(VRuleSetError::InvalidType(_))));
    assert!(matches!(SRuleSet::from_string("deck = "), Err(VRuleSetError::Toml(_))));
    assert!(matches!(SRuleSet::from_file(Path::new("/nonexistent/ruleset.toml")), Err(VRuleSetError::Io(_))));
}
