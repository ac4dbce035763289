//! User persistence.
//!
//! Handlers only ever see [`UserStore`]; the concrete backend is picked once
//! at startup and handed to the router through [`crate::state::AppState`].

mod memory;
mod postgres;
mod traits;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
pub use traits::{StoreError, UserStore};
