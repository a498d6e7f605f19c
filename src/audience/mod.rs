//! Audience profiles and their watch lists.

mod profiles;

pub use profiles::{audience_label, lookup, AudienceId, AudienceRule};
