//! REST client for communicating with the backend

mod account;
mod client;
mod gremios;
mod multipart;
mod reference;
mod registrados;

pub use client::*;
pub use multipart::*;
pub use reference::GeoData;
