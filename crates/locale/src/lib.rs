//! Localized text resources.
//!
//! Every user-facing string in a report is looked up through [`Labels`] by a
//! [`LabelKey`]. A `Labels` value can only be built from a mapping that
//! contains every key, so lookups never fail once a language is loaded.

mod error;
mod filesystem;
mod keys;
mod labels;
mod provider;

pub use error::LocaleError;
pub use filesystem::{FilesystemLocaleProvider, available_languages};
pub use keys::LabelKey;
pub use labels::Labels;
pub use provider::{InMemoryLocaleProvider, LocaleProvider};
