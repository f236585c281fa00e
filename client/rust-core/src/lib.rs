#![allow(dead_code)]

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use credentials::{AuthTokens, CredentialStore};
pub use error::{Error, GatewayError, Result};
pub use gateway::{CommandGateway, HttpGateway};
pub use services::AppState;
