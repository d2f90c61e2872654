//! State core of the contact directory.
//!
//! Everything here is display-independent: the GTK front end in `main.rs`
//! feeds user input into [`DirectoryState::apply`] and renders what it
//! reports back.

pub mod config;
pub mod contact;
pub mod filter;
pub mod generator;
pub mod logging;
pub mod state;
pub mod store;

pub use config::{ConfigError, Settings};
pub use contact::{Contact, ContactId, Draft};
pub use filter::filter;
pub use generator::{ContactGenerator, RandomContactGenerator};
pub use state::{Changes, DirectoryState, Event, OverlayState};
pub use store::{ContactStore, StoreFull, MAX_GENERATED_COUNT};
