//! Userboard client
//!
//! The single page of the userboard demo: a greeting from the API, the list
//! of users and a form for adding one.
//!
//! # Example
//!
//! ```ignore
//! use userboard_client::{ApiClient, App, ClientConfig};
//!
//! let config = ClientConfig::for_build()?;
//! let mut app = App::new(ApiClient::new(&config.base_url)?);
//! app.mount().await;
//! println!("{}", app.render());
//! ```

mod api;
mod app;
mod config;
mod error;
mod types;

pub use api::ApiClient;
pub use app::{App, NewUserForm, FALLBACK_MESSAGE, LOADING_MESSAGE};
pub use config::{BuildMode, ClientConfig, DEVELOPMENT_BASE_URL};
pub use error::{ClientError, Result};
pub use types::{CreateUser, Greeting, Health, User};
