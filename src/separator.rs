//! Separators placed between the month, day and year fields of a date.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Symbol placed between date fields when formatting.
///
/// The named variants form a closed catalog of single characters. `Custom`
/// carries any caller-supplied text, used verbatim (it may be empty or longer
/// than one character).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display)]
pub enum Separator {
    /// `/`
    #[default]
    #[display(fmt = "/")]
    ForwardSlash,
    /// `-`
    #[display(fmt = "-")]
    Dash,
    /// `.`
    #[display(fmt = ".")]
    Period,
    /// ` `
    #[display(fmt = " ")]
    Space,
    /// `,`
    #[display(fmt = ",")]
    Comma,
    #[display(fmt = "{_0}")]
    Custom(String),
}

impl Separator {
    /// Every named member of the catalog.
    pub const NAMED: [Self; 5] = [
        Self::ForwardSlash,
        Self::Dash,
        Self::Period,
        Self::Space,
        Self::Comma,
    ];

    /// The literal character of a named separator, `None` for `Custom`.
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::ForwardSlash => Some('/'),
            Self::Dash => Some('-'),
            Self::Period => Some('.'),
            Self::Space => Some(' '),
            Self::Comma => Some(','),
            Self::Custom(_) => None,
        }
    }

    /// Text inserted between fields.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ForwardSlash => "/",
            Self::Dash => "-",
            Self::Period => ".",
            Self::Space => " ",
            Self::Comma => ",",
            Self::Custom(text) => text,
        }
    }

    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<char> for Separator {
    fn from(c: char) -> Self {
        Self::NAMED
            .into_iter()
            .find(|named| named.symbol() == Some(c))
            .unwrap_or_else(|| Self::Custom(c.to_string()))
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from(c),
            _ => Self::Custom(s.to_owned()),
        }
    }
}

impl From<String> for Separator {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&Self> for Separator {
    fn from(separator: &Self) -> Self {
        separator.clone()
    }
}

impl Serialize for Separator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Separator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SEPARATOR;

    #[test]
    fn test_named_symbols() {
        let symbols: Vec<char> = Separator::NAMED.iter().filter_map(Separator::symbol).collect();
        assert_eq!(symbols, vec!['/', '-', '.', ' ', ',']);
    }

    #[test]
    fn test_named_symbol_matches_text() {
        for separator in &Separator::NAMED {
            let symbol = separator.symbol().unwrap();
            assert_eq!(separator.as_str(), symbol.to_string());
            assert_eq!(separator.to_string(), symbol.to_string());
        }
    }

    #[test]
    fn test_default_is_forward_slash() {
        assert_eq!(Separator::default(), Separator::ForwardSlash);
        assert_eq!(Separator::default().symbol(), Some(DEFAULT_SEPARATOR));
    }

    #[test]
    fn test_from_char_and_str() {
        assert_eq!(Separator::from(' '), Separator::Space);
        assert_eq!(Separator::from(","), Separator::Comma);
        assert_eq!(Separator::from('!'), Separator::Custom("!".to_owned()));
        assert_eq!(Separator::from(""), Separator::Custom(String::new()));
        assert_eq!(Separator::from(" - "), Separator::Custom(" - ".to_owned()));
    }

    #[test]
    fn test_custom_has_no_symbol() {
        let custom = Separator::Custom("::".to_owned());
        assert!(custom.is_custom());
        assert_eq!(custom.symbol(), None);
        assert_eq!(custom.as_str(), "::");
        assert_eq!(custom.to_string(), "::");
    }

    #[test]
    fn test_serde_as_text() {
        let json = serde_json::to_string(&Separator::Period).unwrap();
        assert_eq!(json, r#"".""#);
        let parsed: Separator = serde_json::from_str(r#""-""#).unwrap();
        assert_eq!(parsed, Separator::Dash);
        let parsed: Separator = serde_json::from_str(r#""||""#).unwrap();
        assert_eq!(parsed, Separator::Custom("||".to_owned()));
    }
}
