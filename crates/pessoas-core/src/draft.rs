//! The draft capability consumed by the save path.

use crate::PersonRecord;

/// Capability for turning an inbound creation request into a person record.
///
/// The save orchestrator only sees this trait, never a concrete request
/// shape. Implementations first derive the search blob, then assemble the
/// full record (including generating a fresh id) around it.
pub trait PersonDraft: Send + Sync {
    /// Builds the normalized search blob from the request fields.
    fn build_search(&self) -> String;

    /// Builds the full person record, generating a fresh id.
    fn build_person(&self, search: String) -> PersonRecord;
}
