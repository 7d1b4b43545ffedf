//! Multigremial administration console
//!
//! Single-page Dioxus application for managing gremios (trade associations)
//! and registrados (registered businesses) against the Multigremial REST
//! backend.

#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod constants;
pub mod dom;
pub mod download;
pub mod forms;
pub mod geo;
pub mod listing;
pub mod pages;
pub mod routes;
pub mod types;

pub use app::App;
