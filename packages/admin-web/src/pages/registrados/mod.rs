//! Registrado pages

mod detail;
mod fields;
mod form;
mod list;

pub use detail::*;
pub use fields::*;
pub use form::*;
pub use list::*;
