//! Session state for one document-outline interaction.
//!
//! # Architecture
//!
//! A [`Session`] holds everything the user has done so far: the selected
//! file, the upload status, the extraction result or error, and the current
//! search and level filters. Only the [`SessionController`] mutates it.
//!
//! The upload is a small state machine:
//!
//! ```text
//! Idle ──select──▶ FileSelected ──submit──▶ Uploading ──ok──▶ Success
//!   ▲                   ▲                       │
//!   │                   └──────select───────────┼──────── Error
//!   └──────────────────────reset────────────────┴──err──▶
//! ```
//!
//! Derived views (the filtered outline and the statistics) are recomputed
//! from the stored result on every call. Nothing derived is cached.
//!
//! The controller can drive an upload end to end with
//! [`SessionController::upload`], or in two steps for event-loop front ends:
//! [`SessionController::submit`] hands back an [`UploadTicket`] to send, and
//! the outcome is fed back through
//! [`SessionController::on_extraction_success`] or
//! [`SessionController::on_extraction_failure`].

pub mod controller;
pub mod error;
pub mod session;

pub use controller::{SessionController, UploadTicket};
pub use error::{INVALID_FILE_MESSAGE, Result, SessionError};
pub use session::{Session, SessionStatus};
