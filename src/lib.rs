//! A playground page for the Discord components parser.
//!
//! The parser itself is an external module. This crate holds the page
//! logic around it: run the parser when asked, show the result or the
//! error, and keep the input across reloads. See the
//! `discord-components-playground-web` crate for the browser bindings.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod markup;
pub mod page;

pub use config::PageConfig;
pub use controller::Controller;
pub use error::{ConfigError, Element, PageError};
pub use format::{available_formats, Format};
pub use markup::Rendered;
