//! Page components

pub mod gremios;
pub mod registrados;

mod login;
mod not_found;
mod security;

pub use login::*;
pub use not_found::*;
pub use security::*;
