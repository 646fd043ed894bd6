#[macro_use]
mod labels;

pub mod attendance;
pub mod calendar;
pub mod department;
pub mod employee;
mod entry;
mod error;
mod id;
pub mod leave;
pub mod metrics;
pub mod role;
pub mod validation;
pub mod view;

pub use entry::{EntityKind, Entry, EntryList, Record};
pub use error::{Error, ErrorKind, Result};
pub use id::Id;

// Reached through `err!` only.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
