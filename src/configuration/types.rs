use serde::Deserialize;

/// Display locale for dates and month headings.
///
/// The authority works in French; English is kept for demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn parse(input: &str) -> Option<Locale> {
        match input.trim().to_lowercase().as_str() {
            "fr" | "fr_fr" | "fr-fr" => Some(Locale::Fr),
            "en" | "en_us" | "en-us" => Some(Locale::En),
            _ => None,
        }
    }

    /// The chrono locale used for `format_localized`.
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Locale::Fr => chrono::Locale::fr_FR,
            Locale::En => chrono::Locale::en_US,
        }
    }
}
