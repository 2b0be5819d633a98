use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Languages a nickname can be recorded in
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Fr,
    Nl,
}

#[derive(Error, Debug, PartialEq)]
#[error("unsupported language code {0:?}")]
pub struct UnknownLanguage(pub String);

/// Codes must match exactly, no case folding
impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "nl" => Ok(Language::Nl),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Nickname {
    pub language: String,
    pub value: String,
}

/// A person as found in the street name data. Only the nicknames matter here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Person {
    #[serde(default, deserialize_with = "supported_nicknames")]
    pub nicknames: Option<HashMap<Language, Nickname>>,
}

/// Nicknames in languages we don't support are dropped rather than failing the record
fn supported_nicknames<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<Language, Nickname>>, D::Error>
where
    D: Deserializer<'de>,
{
    let nicknames = Option::<HashMap<String, Nickname>>::deserialize(deserializer)?;
    Ok(nicknames.map(|nicknames| {
        nicknames
            .into_iter()
            .filter_map(|(code, nickname)| Some((code.parse().ok()?, nickname)))
            .collect()
    }))
}
