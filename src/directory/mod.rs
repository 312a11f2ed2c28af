//! Directory subsystem for rosterkit
//!
//! The session-level composition: one validation engine and one roster,
//! owned together for the lifetime of the page session. The rendering
//! layer drives it through explicit calls (`submit`, `remove`) and reads
//! back the record list plus a notification event; there is no shared
//! mutable state beyond the single owned store.

mod events;
mod session;

pub use events::{Notification, NotificationKind};
pub use session::{Directory, SubmitOutcome};
