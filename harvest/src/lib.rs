mod auth;
mod client;
mod harvest_url;

pub mod domain;

pub(crate) use harvest_url::*;

pub use auth::*;
pub use client::*;
