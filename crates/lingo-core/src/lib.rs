//! # lingo-core
//!
//! Core types and the localized content-tree engine for Lingo.
//!
//! - Entity structs for the content graph (situations, communications,
//!   prompts, utterances, context annotations, context types, languages)
//! - The [`store::ContentStore`] seam every backend implements
//! - The localization filter and the content tree / context type resolvers
//! - Wire documents and the resolved-tree → document mapping
//! - The content bundle format used for imports
//! - The `ContentError` taxonomy shared by every caller

pub mod bundle;
pub mod catalog;
pub mod entities;
pub mod errors;
pub mod localization;
pub mod resolve;
pub mod responses;
pub mod store;

mod test_support;
