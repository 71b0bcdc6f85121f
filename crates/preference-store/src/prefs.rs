//! Typed preference accessors
//!
//! Two scalar preferences live in the store: the UI language and the
//! persona. Each is written independently and each write is atomic for its
//! own key. On first use neither key exists and the app must route the
//! user through the one-time selection flow; once both are set the flow is
//! bypassed until the user clears preferences from settings.
//!
//! Lookup semantics differ by design: a corrupt language value falls back
//! to the default locale, while a corrupt persona value surfaces as `None`
//! and the caller decides what to do.

use crate::store::KeyValueStore;
use anyhow::Result;
use arogya_i18n::{LanguageCode, PersonaCode};

/// Store key holding the language preference
pub const LANGUAGE_KEY: &str = "arogya_language";

/// Store key holding the persona preference
pub const PERSONA_KEY: &str = "arogya_persona";

/// Typed view over the preference keys of a store
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current language preference.
    ///
    /// Absent or unrecognized stored values resolve to the default locale,
    /// so this never fails.
    pub fn language(&self) -> LanguageCode {
        self.store
            .get(LANGUAGE_KEY)
            .and_then(|code| LanguageCode::from_code(&code))
            .unwrap_or_default()
    }

    pub fn set_language(&mut self, language: LanguageCode) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.code())
    }

    /// Current persona preference.
    ///
    /// `None` when the key is absent or holds an unrecognized value; there
    /// is no default persona.
    pub fn persona(&self) -> Option<PersonaCode> {
        self.store
            .get(PERSONA_KEY)
            .and_then(|code| PersonaCode::from_code(&code))
    }

    pub fn set_persona(&mut self, persona: PersonaCode) -> Result<()> {
        self.store.set(PERSONA_KEY, persona.code())
    }

    /// Whether the one-time selection flow must run.
    ///
    /// True until both keys have been set at least once.
    pub fn needs_onboarding(&self) -> bool {
        self.store.get(LANGUAGE_KEY).is_none() || self.store.get(PERSONA_KEY).is_none()
    }

    /// Settings-surface reset: removes both preferences, re-arming the
    /// selection flow on next load.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(LANGUAGE_KEY)?;
        self.store.remove(PERSONA_KEY)?;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
