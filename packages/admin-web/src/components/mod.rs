//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod fields;
mod loading;
mod notices;
mod redirect;

pub use admin_layout::*;
pub use admin_nav::*;
pub use fields::*;
pub use loading::*;
pub use notices::*;
pub use redirect::*;
