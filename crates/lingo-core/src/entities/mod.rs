//! Entity structs for all Lingo domain objects.
//!
//! Each entity maps to a table in the libSQL database (see `lingo-db`
//! migrations). Localized descriptions are not embedded in the entities;
//! they hang off a [`DescriptionOwner`] and are fetched separately.

mod communication;
mod context;
mod language;
mod localized_text;
mod prompt;
mod situation;
mod utterance;

pub use communication::Communication;
pub use context::{ContextAnnotation, ContextType};
pub use language::Language;
pub use localized_text::{DescriptionOwner, LocalizedText};
pub use prompt::Prompt;
pub use situation::Situation;
pub use utterance::Utterance;
