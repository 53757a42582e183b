mod auth;
mod client;
mod forecast_url;

pub mod domain;

pub(crate) use forecast_url::*;

pub use auth::*;
pub use client::*;
