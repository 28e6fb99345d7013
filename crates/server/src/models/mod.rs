//! Stored record types.
//!
//! These are the shapes that live in collections. Where a record has a
//! public counterpart in `veloce-core` (accounts), the stored shape carries
//! the extra server-only fields and converts down for responses.

pub mod session;
pub mod user;

pub use session::SessionRecord;
pub use user::UserRecord;
