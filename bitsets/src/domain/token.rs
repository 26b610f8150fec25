//! Serializable identity of a class.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    series::SeriesKind,
};

use super::Class;

/// Everything needed to reconstruct a class in another process:
/// `(name, members, id, base, list, tuple)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token<M> {
    pub name: String,
    pub members: Vec<M>,
    pub id: i64,
    pub base: String,
    pub list: Option<String>,
    pub tuple: Option<String>,
}

impl<M> Token<M> {
    /// Whether the token asks for a series of `kind`.
    pub fn series(&self, kind: SeriesKind) -> Result<bool> {
        let series = match kind {
            SeriesKind::List => &self.list,
            SeriesKind::Tuple => &self.tuple,
        };
        let Some(s) = series.as_deref() else {
            return Ok(false);
        };
        if s.parse::<SeriesKind>()? == kind {
            Ok(true)
        } else {
            Err(Error::InvalidSeries(s.to_owned()))
        }
    }
}

impl<M: Serialize> Token<M> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Token(e.to_string()))
    }
}

impl<M: DeserializeOwned> Token<M> {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| Error::Token(e.to_string()))?;
        match value.get("id") {
            Some(id) if !id.is_i64() => return Err(Error::NonIntegerId(id.to_string())),
            _ => {}
        }
        serde_json::from_value(value).map_err(|e| Error::Token(e.to_string()))
    }
}

impl<M: Clone, T> Class<M, T> {
    pub fn token(&self) -> Token<M> {
        let series = |kind: SeriesKind| self.has_series(kind).then(|| kind.to_string());
        Token {
            name: self.name().to_owned(),
            members: self.members().to_vec(),
            id: self.id(),
            base: self.flavor().to_string(),
            list: series(SeriesKind::List),
            tuple: series(SeriesKind::Tuple),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{domain::registry::Registry, Flavor};

    use super::*;

    #[test]
    fn restoring_a_token_twice_yields_the_same_class() {
        let registry = Registry::<char>::new();
        let letters = registry.declare("Letters", ['a', 'b', 'c'], Flavor::BitSet, true, true).unwrap();
        let json = letters.token().to_json().unwrap();
        let first = registry.restore(&Token::from_json(&json).unwrap()).unwrap();
        let second = registry.restore(&Token::from_json(&json).unwrap()).unwrap();
        assert_eq!(first, letters);
        assert_eq!(second, letters);
        assert_eq!(first.tuple().unwrap(), letters.tuple().unwrap());
    }

    #[test]
    fn restoring_into_a_fresh_registry_rebuilds_an_indistinguishable_class() {
        let letters = Registry::<char>::new()
            .declare("Letters", ['a', 'b'], Flavor::MemberBits, false, true)
            .unwrap();
        let elsewhere = Registry::<char>::new();
        let restored = elsewhere.restore(&letters.token()).unwrap();
        assert_ne!(restored, letters);
        assert_eq!(restored.token(), letters.token());
        assert_eq!(format!("{restored:?}"), format!("{letters:?}"));
        assert_eq!(elsewhere.restore(&letters.token()).unwrap(), restored);
    }

    #[test]
    fn token_lists_the_series_kinds() {
        let registry = Registry::<u8>::new();
        let nums = registry.declare("Nums", [1, 2, 3], Flavor::BitSet, true, false).unwrap();
        let token = nums.token();
        assert_eq!(token.base, "BitSet");
        assert_eq!(token.list.as_deref(), Some("List"));
        assert_eq!(token.tuple, None);
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let json = r#"{"name":"Ints","members":[1,2],"id":"0x1","base":"BitSet","list":null,"tuple":null}"#;
        let error = Token::<u8>::from_json(json).unwrap_err();
        assert_eq!(error, Error::NonIntegerId("\"0x1\"".into()));
        let json = r#"{"name":"Ints","members":[1,2],"id":1.5,"base":"BitSet","list":null,"tuple":null}"#;
        assert!(matches!(Token::<u8>::from_json(json), Err(Error::NonIntegerId(_))));
    }

    #[test]
    fn unknown_base_is_rejected() {
        let token = Token {
            name: "Ints".into(),
            members: vec![1u8, 2],
            id: 3,
            base: "set".into(),
            list: None,
            tuple: None,
        };
        let error = Registry::<u8>::new().restore(&token).unwrap_err();
        assert_eq!(error, Error::InvalidBase("set".into()));
    }

    #[test]
    fn series_kind_in_the_wrong_slot_is_rejected() {
        let token = Token {
            name: "Ints".into(),
            members: vec![1u8, 2],
            id: 3,
            base: "BitSet".into(),
            list: Some("Tuple".into()),
            tuple: None,
        };
        assert_eq!(token.series(SeriesKind::List), Err(Error::InvalidSeries("Tuple".into())));
    }
}
