mod as_value;
mod column;
mod connection;
mod driver;
mod entity;
mod error;
mod executor;
mod name;
mod sql_writer;
mod statement;
mod target;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use column::*;
pub use connection::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use name::*;
pub use sql_writer::*;
pub use statement::*;
pub use target::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
