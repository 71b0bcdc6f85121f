//! Localization and persona adaptation for ArogyaSmile
//!
//! Embeds the full UI string catalog for every supported language and the
//! persona presentation table as compile-time static data. Both tables are
//! read-only for the life of the process.
//!
//! Language lookup is lenient: an unrecognized or corrupted stored code
//! resolves to the default locale instead of failing. Persona lookup is
//! strict: resolving a raw persona string yields `Option` and callers must
//! handle the unmatched case, typically by re-running first-time setup.

pub mod catalog;
pub mod persona;

pub use catalog::{
    available_languages, bundle_for, resolve, LanguageCode, LanguageInfo, TranslationBundle,
};
pub use persona::{profile_for, PersonaCode, PersonaProfile};
