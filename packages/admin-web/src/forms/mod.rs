//! Form state for the create/edit screens

mod edit;
mod gremio;
mod registrado;

pub use edit::*;
pub use gremio::*;
pub use registrado::*;
