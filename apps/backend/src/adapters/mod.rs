//! In-process implementations of the collaborator contracts.
//!
//! Deployments swap these for real integrations; the core only ever talks
//! to the traits in [`crate::services::collaborators`] and
//! [`crate::services::events`].

pub mod outbound;
pub mod profiles;
pub mod rating;

pub use outbound::LoggingEventSink;
pub use profiles::StaticProfiles;
pub use rating::EloRatingRecorder;
