//! Persona presentation table
//!
//! Four presentation archetypes adapt voice speed, text size, and tone to
//! the user. There is deliberately no fallback persona: resolving a stored
//! persona string goes through [`PersonaCode::from_code`] and callers must
//! handle `None` (typically by re-running first-time setup) instead of
//! receiving a made-up default.

use crate::catalog::LanguageCode;
use serde::{Deserialize, Serialize};

/// Presentation archetype selected during first-time setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaCode {
    Rural,
    Senior,
    Urban,
    Child,
}

impl PersonaCode {
    /// Wire/storage form of this persona code.
    pub fn code(&self) -> &'static str {
        match self {
            PersonaCode::Rural => "rural",
            PersonaCode::Senior => "senior",
            PersonaCode::Urban => "urban",
            PersonaCode::Child => "child",
        }
    }

    /// Parse a stored code into a known persona.
    ///
    /// Exact match only; returns `None` for anything unrecognized.
    pub fn from_code(code: &str) -> Option<PersonaCode> {
        match code {
            "rural" => Some(PersonaCode::Rural),
            "senior" => Some(PersonaCode::Senior),
            "urban" => Some(PersonaCode::Urban),
            "child" => Some(PersonaCode::Child),
            _ => None,
        }
    }

    /// All personas, in display order.
    pub fn all() -> &'static [PersonaCode] {
        &[
            PersonaCode::Rural,
            PersonaCode::Senior,
            PersonaCode::Urban,
            PersonaCode::Child,
        ]
    }
}

impl std::fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Display and behavior metadata for one persona
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PersonaProfile {
    pub label: &'static str,
    pub description: &'static str,

    /// Speech synthesis rate multiplier
    pub voice_speed: f32,

    /// Presentation-size class applied to the UI root
    pub font_size: &'static str,

    /// Language a first-run flow may suggest for this persona.
    /// Descriptive metadata only; selecting a persona never switches the
    /// language preference automatically.
    pub default_language: LanguageCode,
}

static RURAL: PersonaProfile = PersonaProfile {
    label: "Rural Farmer",
    description: "Warm earth tones, simple language",
    voice_speed: 0.8,
    font_size: "text-rural-lg",
    default_language: LanguageCode::HiIn,
};

static SENIOR: PersonaProfile = PersonaProfile {
    label: "Senior Citizen",
    description: "High contrast, large text, clear speech",
    voice_speed: 0.6,
    font_size: "text-senior-lg",
    default_language: LanguageCode::HiIn,
};

static URBAN: PersonaProfile = PersonaProfile {
    label: "Urban Student",
    description: "Modern design, quick flows",
    voice_speed: 1.0,
    font_size: "text-urban-base",
    default_language: LanguageCode::EnIn,
};

static CHILD: PersonaProfile = PersonaProfile {
    label: "Child",
    description: "Bright colors, fun interactions",
    voice_speed: 0.9,
    font_size: "text-child-base",
    default_language: LanguageCode::HiIn,
};

/// Profile for a known persona.
pub fn profile_for(persona: PersonaCode) -> &'static PersonaProfile {
    match persona {
        PersonaCode::Rural => &RURAL,
        PersonaCode::Senior => &SENIOR,
        PersonaCode::Urban => &URBAN,
        PersonaCode::Child => &CHILD,
    }
}
