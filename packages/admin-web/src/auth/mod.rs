//! Administrator session handling

mod context;
mod login;
mod session;

pub use context::*;
pub use login::*;
pub use session::*;
