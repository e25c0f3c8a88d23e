//! Map application registry, availability probing and launch dispatch.
//!
//! The registry is a fixed table of known map applications; the platform
//! backend reports which of them are installed and hands launch URLs to the
//! OS. [`MapLauncher`] ties the two together and [`channel::dispatch`]
//! exposes the string-keyed method-channel surface on top.

pub mod channel;
mod error;
pub mod platform;
mod provider;
pub mod registry;
mod service;

pub use channel::MapDescriptor;
pub use error::{MapError, Result};
pub use platform::{AppInventory, Platform, RecordingPlatform};
pub use provider::{MapKind, MapProvider};
pub use service::MapLauncher;
