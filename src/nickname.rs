use crate::types::person::{Language, Person};

impl Person {
    pub fn nickname(&self, lang: Language) -> Option<&str> {
        self.nicknames
            .as_ref()?
            .get(&lang)
            .map(|nickname| nickname.value.as_str())
    }
}

/// Nickname of `person` in `lang`, if there is one.
///
/// `lang` has to be one of the supported codes exactly as written; anything
/// else resolves to `None`.
pub fn resolve_nickname<'a>(person: &'a Person, lang: &str) -> Option<&'a str> {
    if person.nicknames.as_ref().map_or(true, |n| n.is_empty()) {
        return None;
    }
    person.nickname(lang.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::types::person::Nickname;

    fn al() -> Person {
        serde_json::from_value(json!({
            "nicknames": { "en": { "language": "en", "value": "Al" } }
        }))
        .unwrap()
    }

    #[test]
    fn absent_nicknames_resolve_to_none() {
        let empty = Person {
            nicknames: Some(HashMap::new()),
        };
        for person in [Person::default(), empty] {
            for lang in ["de", "en", "fr", "nl", "xx"] {
                assert_eq!(resolve_nickname(&person, lang), None);
            }
        }
    }

    #[test]
    fn resolves_matching_language_only() {
        let person = al();
        assert_eq!(resolve_nickname(&person, "en"), Some("Al"));
        assert_eq!(resolve_nickname(&person, "fr"), None);
    }

    #[test]
    fn language_is_not_normalized() {
        let person = al();
        assert_eq!(resolve_nickname(&person, "EN"), None);
        assert_eq!(resolve_nickname(&person, " en"), None);
        assert_eq!(resolve_nickname(&person, ""), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let person = al();
        let first = resolve_nickname(&person, "en");
        assert_eq!(resolve_nickname(&person, "en"), first);
        assert_eq!(resolve_nickname(&person, "en"), first);
    }

    #[test]
    fn typed_lookup() {
        let mut nicknames = HashMap::new();
        nicknames.insert(
            Language::Nl,
            Nickname {
                language: "nl".into(),
                value: "Mieke".into(),
            },
        );
        let person = Person {
            nicknames: Some(nicknames),
        };
        assert_eq!(person.nickname(Language::Nl), Some("Mieke"));
        assert_eq!(person.nickname(Language::De), None);
    }
}
