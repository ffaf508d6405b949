//! Rocker template compiler model
//!
//! The intermediate representation shared by the template parser and the
//! Java source generator: a [`TemplateModel`] per template holding its
//! identity, imports, arguments, options and a flat sequence of units.
//!
//! # Example
//!
//! ```rust
//! use rocker_model::model::{Options, TemplateModel, TemplateUnit};
//! use rocker_model::util::span::SourceRef;
//!
//! let mut model = TemplateModel::new("views", "index.rocker.html", &Options::default());
//! model.add_argument("String", "title", SourceRef::at(1, 8, "String title"));
//! model.add_unit(TemplateUnit::plain_text("<h1>", SourceRef::at(2, 1, "<h1>")));
//! model.add_unit(TemplateUnit::value("title", SourceRef::at(2, 5, "@title")));
//! model.add_unit(TemplateUnit::plain_text("</h1>", SourceRef::at(2, 11, "</h1>")));
//!
//! model.validate_structure().unwrap();
//! let constants = model.create_plain_text_map(16);
//! assert_eq!(constants["<h1>"]["PLAIN_TEXT_0_0"], "<h1>");
//! ```

#![doc(html_root_url = "https://docs.rs/rocker-model")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod model;

// Utility modules
pub mod util;

// Re-exports
pub use model::{Options, TemplateModel, TemplateUnit};
pub use thiserror::Error;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
