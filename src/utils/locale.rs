//! User-facing strings in the supported languages

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display language, simple substitution only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Notification and heading text for a round
    pub fn round_title(&self, round: u32) -> String {
        format!("Round {round}")
    }

    pub fn rest_title(&self) -> &'static str {
        match self {
            Locale::En => "Rest time!",
            Locale::Fr => "Récupération !",
        }
    }

    pub fn get_ready(&self) -> &'static str {
        match self {
            Locale::En => "Get ready",
            Locale::Fr => "Préparez-vous",
        }
    }

    pub fn seconds(&self, value: u32) -> String {
        match self {
            Locale::En => format!("{value} seconds"),
            Locale::Fr => format!("{value} secondes"),
        }
    }

    pub fn training_complete(&self) -> &'static str {
        match self {
            Locale::En => "Training complete",
            Locale::Fr => "Entraînement terminé",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_are_substituted() {
        assert_eq!(Locale::En.seconds(90), "90 seconds");
        assert_eq!(Locale::Fr.seconds(45), "45 secondes");
    }

    #[test]
    fn round_title_is_shared() {
        assert_eq!(Locale::Fr.round_title(2), "Round 2");
        assert_eq!(Locale::default().round_title(7), "Round 7");
    }
}
