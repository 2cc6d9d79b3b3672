//! Quarry maps plain Rust structs onto SQL statements and maps result rows back.
//!
//! ```rust,ignore
//! use quarry::{Entity, Statement};
//!
//! #[derive(Entity)]
//! #[quarry(table = "users")]
//! struct User {
//!     #[quarry(auto)]
//!     id: i64,
//!     name: String,
//!     #[quarry(default = "CURRENT_TIMESTAMP")]
//!     created_at: Option<String>,
//! }
//!
//! let id = Statement::new(&connection, "users").insert(&user)?;
//! let user: User = Statement::new(&connection, "users")
//!     .filter_with("id = {}", &[&id])
//!     .find_one()?;
//! ```
pub use quarry_core::*;
pub use quarry_macros::*;
