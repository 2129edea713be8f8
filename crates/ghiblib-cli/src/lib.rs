//! Interactive front end for the ghiblib film catalog.
//!
//! The binary wires configuration and logging together and then hands
//! standard input and output to a [`Session`], which runs the numbered menu
//! against a [`ghiblib_core::Catalog`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod console;
pub mod logging;
pub mod menu;
pub mod session;

pub use config::Config;
pub use console::Console;
pub use menu::MenuChoice;
pub use session::Session;
