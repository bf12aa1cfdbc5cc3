//! Field name normalization for dotted paths.
//!
//! Partial-update requests usually spell field paths in the client's naming
//! convention (`displayName`), while records expose their fields in their own
//! (`display_name`). [`NameStyle`] maps one onto the other segment by segment
//! while a mask is built from a path list.

use std::fmt;

/// Naming convention applied to every path segment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NameStyle {
    /// Segments are used unchanged.
    #[default]
    Identity,
    /// `displayName` / `DisplayName` become `display_name`.
    SnakeCase,
    /// `display_name` becomes `displayName`.
    CamelCase,
    /// `display_name` becomes `DisplayName`.
    PascalCase,
}

impl NameStyle {
    /// Applies the convention to a single segment.
    #[must_use]
    pub fn apply(self, segment: &str) -> String {
        match self {
            Self::Identity => segment.to_owned(),
            Self::SnakeCase => to_snake_case(segment),
            Self::CamelCase => to_camel_case(segment),
            Self::PascalCase => to_pascal_case(segment),
        }
    }

    /// Parses the short names accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "identity" | "none" => Some(Self::Identity),
            "snake" | "snake_case" => Some(Self::SnakeCase),
            "camel" | "camelCase" => Some(Self::CamelCase),
            "pascal" | "PascalCase" => Some(Self::PascalCase),
            _ => None,
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::SnakeCase => f.write_str("snake"),
            Self::CamelCase => f.write_str("camel"),
            Self::PascalCase => f.write_str("pascal"),
        }
    }
}

/// Converts `camelCase` or `PascalCase` to `snake_case`.
///
/// Acronym runs stay together: `HTTPServer` becomes `http_server`.
#[must_use]
pub fn to_snake_case(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len() + 4);

    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = index.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(index + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(char::is_lowercase),
            };
            if boundary {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts `snake_case` to `camelCase`.
#[must_use]
pub fn to_camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut upper_next = false;
    for ch in segment.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts `snake_case` to `PascalCase`.
#[must_use]
pub fn to_pascal_case(segment: &str) -> String {
    let camel = to_camel_case(segment);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_conversions() {
        assert_eq!(to_snake_case("displayName"), "display_name");
        assert_eq!(to_snake_case("DisplayName"), "display_name");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("line2Address"), "line2_address");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn camel_case_conversions() {
        assert_eq!(to_camel_case("display_name"), "displayName");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("_leading"), "leading");
    }

    #[test]
    fn pascal_case_conversions() {
        assert_eq!(to_pascal_case("display_name"), "DisplayName");
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn style_apply_dispatches() {
        assert_eq!(NameStyle::Identity.apply("fooBar"), "fooBar");
        assert_eq!(NameStyle::SnakeCase.apply("fooBar"), "foo_bar");
        assert_eq!(NameStyle::CamelCase.apply("foo_bar"), "fooBar");
        assert_eq!(NameStyle::PascalCase.apply("foo_bar"), "FooBar");
    }

    #[test]
    fn style_names_round_trip_through_display() {
        for style in [
            NameStyle::Identity,
            NameStyle::SnakeCase,
            NameStyle::CamelCase,
            NameStyle::PascalCase,
        ] {
            assert_eq!(NameStyle::from_name(&style.to_string()), Some(style));
        }
        assert_eq!(NameStyle::from_name("kebab"), None);
    }
}
