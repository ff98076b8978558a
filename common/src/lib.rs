//! Core of the Atelier custom jewelry studio front-end.
//!
//! Host-independent: persistence goes through [`storage::KeyValueStore`] and
//! every feature renders to a plain view value that the UI draws.

pub mod approval;
pub mod config;
pub mod debounce;
pub mod design;
pub mod error;
pub mod keys;
pub mod messages;
pub mod nav;
pub mod notifications;
pub mod payments;
pub mod requests;
pub mod settings;
pub mod storage;
pub mod studio;
pub mod time;
pub mod toast;
pub mod upload;
pub mod validation;
pub mod view_model;

pub use error::{Result, StudioError};
pub use studio::Studio;
