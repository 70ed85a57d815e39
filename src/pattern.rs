//! Format templates built from the `MM`, `dd` and `yyyy` tokens.
//!
//! Anything between tokens is literal text. Literal ASCII letters must be
//! single-quoted (`'T'`), and `''` stands for one quote character.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DAY_TOKEN, MONTH_TOKEN, ParseError, QUOTE, Separator, YEAR_TOKEN};

/// Width in digits of the `MM` and `dd` fields.
const TWO_DIGITS: usize = 2;
/// Width in digits of the `yyyy` field.
const FOUR_DIGITS: usize = 4;

/// One piece of a [`FormatPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// `MM`
    Month,
    /// `dd`
    Day,
    /// `yyyy`
    Year,
    Literal(String),
}

/// A date template containing each of `MM`, `dd` and `yyyy` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatPattern {
    components: Vec<Component>,
}

impl FormatPattern {
    /// Parses a template such as `"MM-dd-yyyy"`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidPattern` for an unknown pattern letter, an
    /// unterminated quote, or a template that does not contain each field once.
    pub fn new(template: &str) -> Result<Self, ParseError> {
        let mut components = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(c) = rest.chars().next() {
            let field = if rest.starts_with(YEAR_TOKEN) {
                Some((Component::Year, YEAR_TOKEN.len()))
            } else if rest.starts_with(MONTH_TOKEN) {
                Some((Component::Month, MONTH_TOKEN.len()))
            } else if rest.starts_with(DAY_TOKEN) {
                Some((Component::Day, DAY_TOKEN.len()))
            } else {
                None
            };

            if let Some((component, len)) = field {
                if !literal.is_empty() {
                    components.push(Component::Literal(std::mem::take(&mut literal)));
                }
                components.push(component);
                rest = &rest[len..];
            } else if c == QUOTE {
                rest = Self::read_quoted(&rest[QUOTE.len_utf8()..], &mut literal, template)?;
            } else if c.is_ascii_alphabetic() {
                return Err(ParseError::InvalidPattern(format!(
                    "unknown pattern letter '{c}' in \"{template}\""
                )));
            } else {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
        if !literal.is_empty() {
            components.push(Component::Literal(literal));
        }

        let pattern = Self { components };
        pattern.check_fields(template)?;
        Ok(pattern)
    }

    /// Builds `MM<sep>dd<sep>yyyy` without reading the separator as template
    /// syntax, so any separator text is taken literally.
    pub fn with_separator(separator: &Separator) -> Self {
        let text = separator.as_str();
        let mut components = Vec::with_capacity(5);
        components.push(Component::Month);
        if !text.is_empty() {
            components.push(Component::Literal(text.to_owned()));
        }
        components.push(Component::Day);
        if !text.is_empty() {
            components.push(Component::Literal(text.to_owned()));
        }
        components.push(Component::Year);
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Renders `date` with zero-padded month and day and a four-digit year.
    pub fn format(&self, date: &CalendarDate) -> String {
        let mut out = String::with_capacity(10);
        for component in &self.components {
            match component {
                Component::Month => out.push_str(&format!("{:02}", date.month())),
                Component::Day => out.push_str(&format!("{:02}", date.day())),
                Component::Year => out.push_str(&format!("{:04}", date.year())),
                Component::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Parses `text` strictly: every literal must match, each field must have
    /// exactly its width in ASCII digits, and nothing may trail.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for empty text, `ParseError::InvalidFormat`
    /// when the text does not match, and the field errors of
    /// [`CalendarDate::new`] when it matches but names an impossible date.
    pub fn parse(&self, text: &str) -> Result<CalendarDate, ParseError> {
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let mismatch =
            || ParseError::InvalidFormat(format!("\"{text}\" does not match \"{self}\""));

        let (mut year, mut month, mut day) = (0u16, 0u8, 0u8);
        let mut rest = text;
        for component in &self.components {
            rest = match component {
                Component::Month => {
                    let (digits, tail) = take_digits(rest, TWO_DIGITS).ok_or_else(mismatch)?;
                    month = digits.parse().map_err(|_| mismatch())?;
                    tail
                }
                Component::Day => {
                    let (digits, tail) = take_digits(rest, TWO_DIGITS).ok_or_else(mismatch)?;
                    day = digits.parse().map_err(|_| mismatch())?;
                    tail
                }
                Component::Year => {
                    let (digits, tail) = take_digits(rest, FOUR_DIGITS).ok_or_else(mismatch)?;
                    year = digits.parse().map_err(|_| mismatch())?;
                    tail
                }
                Component::Literal(literal) => {
                    rest.strip_prefix(literal.as_str()).ok_or_else(mismatch)?
                }
            };
        }
        if !rest.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "unparsed text \"{rest}\" after \"{self}\""
            )));
        }

        CalendarDate::new(year, month, day)
    }

    /// Consumes a quoted run whose opening quote has already been read.
    /// Inside the run `''` is an escaped quote; an empty run is a lone quote.
    fn read_quoted<'a>(
        rest: &'a str,
        literal: &mut String,
        template: &str,
    ) -> Result<&'a str, ParseError> {
        let mut chars = rest.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c != QUOTE || chars.next_if(|&(_, next)| next == QUOTE).is_some() {
                continue;
            }
            let body = &rest[..i];
            if body.is_empty() {
                literal.push(QUOTE);
            } else {
                literal.push_str(&body.replace("''", "'"));
            }
            return Ok(&rest[i + QUOTE.len_utf8()..]);
        }
        Err(ParseError::InvalidPattern(format!(
            "unterminated quote in \"{template}\""
        )))
    }

    fn check_fields(&self, template: &str) -> Result<(), ParseError> {
        for (field, token) in [
            (Component::Month, MONTH_TOKEN),
            (Component::Day, DAY_TOKEN),
            (Component::Year, YEAR_TOKEN),
        ] {
            let count = self.components.iter().filter(|c| **c == field).count();
            if count != 1 {
                return Err(ParseError::InvalidPattern(format!(
                    "\"{template}\" must contain {token} exactly once, found {count}"
                )));
            }
        }
        Ok(())
    }
}

/// Splits off exactly `width` leading ASCII digits.
fn take_digits(s: &str, width: usize) -> Option<(&str, &str)> {
    let digits = s.get(..width)?;
    if digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((digits, &s[width..]))
    } else {
        None
    }
}

impl Default for FormatPattern {
    fn default() -> Self {
        Self::with_separator(&Separator::default())
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            match component {
                Component::Month => f.write_str(MONTH_TOKEN)?,
                Component::Day => f.write_str(DAY_TOKEN)?,
                Component::Year => f.write_str(YEAR_TOKEN)?,
                Component::Literal(text) if needs_quoting(text) => {
                    let escaped = text.replace(QUOTE, "''");
                    write!(f, "{QUOTE}{escaped}{QUOTE}")?;
                }
                Component::Literal(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

fn needs_quoting(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic() || c == QUOTE)
}

impl FromStr for FormatPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<&Separator> for FormatPattern {
    fn from(separator: &Separator) -> Self {
        Self::with_separator(separator)
    }
}

impl Serialize for FormatPattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FormatPattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PATTERN;
    use crate::test_utils::date;

    #[test]
    fn test_tokenize_dash_template() {
        let pattern = FormatPattern::new("MM-dd-yyyy").unwrap();
        assert_eq!(
            pattern.components(),
            &[
                Component::Month,
                Component::Literal("-".to_owned()),
                Component::Day,
                Component::Literal("-".to_owned()),
                Component::Year,
            ]
        );
    }

    #[test]
    fn test_field_order_is_free() {
        let pattern = FormatPattern::new("yyyy.MM.dd").unwrap();
        assert_eq!(pattern.format(&date(2017, 11, 13)), "2017.11.13");
        assert_eq!(pattern.parse("2017.11.13").unwrap(), date(2017, 11, 13));
    }

    #[test]
    fn test_default_matches_default_template() {
        assert_eq!(FormatPattern::default().to_string(), DEFAULT_PATTERN);
        assert_eq!(FormatPattern::new(DEFAULT_PATTERN).unwrap(), FormatPattern::default());
    }

    #[test]
    fn test_invalid_templates() {
        struct TestCase {
            template: &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                template: "",
                description: "empty template",
            },
            TestCase {
                template: "MM-dd",
                description: "missing year",
            },
            TestCase {
                template: "MM-dd-yyyy-MM",
                description: "month twice",
            },
            TestCase {
                template: "MM-dd-yy",
                description: "two-letter year",
            },
            TestCase {
                template: "M/d/yyyy",
                description: "single-letter fields",
            },
            TestCase {
                template: "MM-dd-yyyy 'at",
                description: "unterminated quote",
            },
        ];

        for case in &cases {
            assert!(
                matches!(
                    FormatPattern::new(case.template),
                    Err(ParseError::InvalidPattern(_))
                ),
                "Expected InvalidPattern for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_quoted_literals() {
        let pattern = FormatPattern::new("yyyy'T'MM''dd").unwrap();
        let d = date(2020, 2, 29);
        assert_eq!(pattern.format(&d), "2020T02'29");
        assert_eq!(pattern.parse("2020T02'29").unwrap(), d);
        assert_eq!(pattern.to_string(), "yyyy'T'MM''''dd");
        assert_eq!(FormatPattern::new(&pattern.to_string()).unwrap(), pattern);
    }

    #[test]
    fn test_with_separator_takes_letters_literally() {
        let pattern = FormatPattern::with_separator(&Separator::from("MM"));
        let d = date(2017, 11, 13);
        assert_eq!(pattern.format(&d), "11MM13MM2017");
        assert_eq!(pattern.parse("11MM13MM2017").unwrap(), d);
        assert_eq!(pattern.to_string(), "MM'MM'dd'MM'yyyy");
    }

    #[test]
    fn test_empty_separator() {
        let pattern = FormatPattern::with_separator(&Separator::from(""));
        assert_eq!(pattern.format(&date(2017, 11, 13)), "11132017");
        assert_eq!(pattern.parse("11132017").unwrap(), date(2017, 11, 13));
    }

    #[test]
    fn test_parse_mismatches() {
        let pattern = FormatPattern::new("MM-dd-yyyy").unwrap();
        for text in [
            "11/13/2017",
            "1-13-2017",
            "11-13-17",
            "11-13-2017 ",
            "11-1a-2017",
            "+1-13-2017",
            "11-13-20170",
        ] {
            assert!(
                matches!(pattern.parse(text), Err(ParseError::InvalidFormat(_))),
                "Expected InvalidFormat for {text:?}"
            );
        }
        assert!(matches!(pattern.parse(""), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        let pattern = FormatPattern::default();
        assert!(matches!(
            pattern.parse("04/31/2021"),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            pattern.parse("02/29/2021"),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            pattern.parse("13/01/2021"),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            pattern.parse("01/01/0000"),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_multibyte_literal() {
        let pattern = FormatPattern::new("dd·MM·yyyy").unwrap();
        assert_eq!(pattern.format(&date(1999, 1, 2)), "02·01·1999");
        assert_eq!(pattern.parse("02·01·1999").unwrap(), date(1999, 1, 2));
        assert!(pattern.parse("02·0").is_err());
    }

    #[test]
    fn test_serde_as_template() {
        let pattern = FormatPattern::new("dd.MM.yyyy").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#""dd.MM.yyyy""#);
        let parsed: FormatPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pattern);
        let bad: Result<FormatPattern, _> = serde_json::from_str(r#""dd.MM""#);
        assert!(bad.is_err());
    }
}
