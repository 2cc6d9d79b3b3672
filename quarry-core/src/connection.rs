use crate::{Executor, Result};

pub trait Connection: Executor + Sized {
    /// Opens a connection to the given URL, the scheme must match the driver name.
    fn connect(url: &str) -> Result<Self>;
}
