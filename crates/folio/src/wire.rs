// File: folio/src/wire.rs
// Purpose: Display/wire spellings for enums and month dates crossing the REST boundary

/// Declares an enum whose serialized (wire) spelling differs from the
/// spelling shown to visitors. Parsing is lenient: either spelling is
/// accepted in any case, anything else becomes the fallback variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:ident,
        { $($variant:ident => ($wire:literal, $display:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Backend spelling
            pub fn wire(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Visitor-facing spelling
            pub fn display(self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            /// Parse either spelling; unknown input maps to the fallback variant
            pub fn parse_lenient(raw: &str) -> Self {
                let raw = raw.trim();
                $(
                    if raw.eq_ignore_ascii_case($wire) || raw.eq_ignore_ascii_case($display) {
                        return $name::$variant;
                    }
                )+
                $name::$fallback
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.wire())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse_lenient(&raw))
            }
        }
    };
}

pub(crate) use wire_enum;

/// `YYYY-MM` → `YYYY-MM-01`; anything else is passed through.
pub fn month_to_backend(date: &str) -> String {
    if is_year_month(date) {
        format!("{}-01", date)
    } else {
        date.to_string()
    }
}

/// Cut a backend date down to `YYYY-MM`.
pub fn month_from_backend(date: &str) -> String {
    date.chars().take(7).collect()
}

fn is_year_month(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectCategory, SkillCategory, SkillLevel};
    use rstest::rstest;

    #[rstest]
    #[case("WEB", ProjectCategory::Web)]
    #[case("web", ProjectCategory::Web)]
    #[case("Mobile", ProjectCategory::Mobile)]
    #[case(" DESKTOP ", ProjectCategory::Desktop)]
    #[case("EMBEDDED", ProjectCategory::Other)]
    #[case("", ProjectCategory::Other)]
    fn test_project_category_parsing(#[case] raw: &str, #[case] expected: ProjectCategory) {
        assert_eq!(ProjectCategory::parse_lenient(raw), expected);
    }

    #[rstest]
    #[case("EXPERT", SkillLevel::Expert)]
    #[case("Intermediate", SkillLevel::Intermediate)]
    #[case("guru", SkillLevel::Beginner)]
    fn test_skill_level_parsing(#[case] raw: &str, #[case] expected: SkillLevel) {
        assert_eq!(SkillLevel::parse_lenient(raw), expected);
    }

    #[test]
    fn test_enum_serializes_wire_form() {
        let json = serde_json::to_string(&SkillCategory::Database).unwrap();
        assert_eq!(json, "\"DATABASE\"");
        assert_eq!(SkillCategory::Database.to_string(), "Database");
        assert_eq!(ProjectCategory::Web.to_string(), "web");
    }

    #[test]
    fn test_unknown_wire_value_deserializes_to_fallback() {
        let category: SkillCategory = serde_json::from_str("\"LANGUAGE\"").unwrap();
        assert_eq!(category, SkillCategory::Other);
    }

    #[test]
    fn test_month_to_backend() {
        assert_eq!(month_to_backend("2023-06"), "2023-06-01");
        assert_eq!(month_to_backend("2023-09-15"), "2023-09-15");
        assert_eq!(month_to_backend(""), "");
        assert_eq!(month_to_backend("June 2023"), "June 2023");
    }

    #[test]
    fn test_month_from_backend() {
        assert_eq!(month_from_backend("2023-06-01"), "2023-06");
        assert_eq!(month_from_backend("2023-06"), "2023-06");
        assert_eq!(month_from_backend(""), "");
    }
}
