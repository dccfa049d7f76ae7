//! Loads colon-delimited grape cultivar files into a MongoDB collection.
//!
//! The pipeline is linear: [`loader::load_grapes`] parses the whole file into
//! memory, then [`seed::replace_all`] clears the target collection and inserts
//! every record through a [`seed::GrapeStore`].

pub mod cli;
pub mod config;
pub mod error;
pub mod grape;
pub mod loader;
pub mod mongo;
pub mod seed;

pub use error::{LoadError, ParseError, ParseErrorKind, StoreError};
pub use grape::{Color, Grape};
