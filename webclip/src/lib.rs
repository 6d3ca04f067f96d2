//! webclip - Obsidian Web Clipper template generator
//!
//! Writes a fixed registry of Web Clipper JSON templates into a vault:
//!
//! ```text
//! <root>/
//! ├── README_IMPORT_GUIDANCE.txt
//! └── Clippings/
//!     ├── Custom_Default_Verbatim_Clone_Clean.json
//!     ├── Summaries/ Research/ Translations/ Articles/
//!     ├── Highlights/ GitHub/ Medium/ Generic/
//!     └── TEMPLATES/          # flat copy of every template (optional)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use webclip::emitter::{EmitOptions, Emitter};
//! use webclip::templates::TemplateRegistry;
//!
//! # fn main() -> webclip::Result<()> {
//! let registry = TemplateRegistry::builtin()?;
//! let emitter = Emitter::new("/path/to/vault", EmitOptions::default());
//! emitter.emit_all(&registry, |event| println!("{event:?}"))?;
//! emitter.write_guidance()?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod input;
pub mod observability;
pub mod templates;

pub use config::WebclipConfig;
pub use emitter::{EmitOptions, Emitter};
pub use error::{ErrorKind, Result, WebclipError};
pub use generator::{GenerateRequest, GenerationReport, Generator};
pub use input::Prompter;
pub use templates::{TemplateRecord, TemplateRegistry};
