mod client;
mod credentials;
mod harvest_url;

pub mod domain;

pub(crate) use harvest_url::*;

pub use client::*;
pub use credentials::*;
pub use domain::*;
