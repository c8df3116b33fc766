//! Movie search: a title search against the OMDb database, with a
//! server-side search endpoint, a keyed query cache, and a search state
//! store driving the result views.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod proxy;
pub mod query;
pub mod ui;
