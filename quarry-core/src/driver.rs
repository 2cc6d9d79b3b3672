use crate::{Connection, Result, SqlWriter};

pub trait Driver {
    type Connection: Connection;
    type SqlWriter: SqlWriter;

    /// Scheme of the connection URLs handled by this driver.
    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;

    fn connect(&self, url: &str) -> Result<Self::Connection> {
        Self::Connection::connect(url)
    }
}
