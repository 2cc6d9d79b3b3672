use quarry_core::SqlWriter;
use std::fmt::Write;

/// Sqlite dialect, paging is written as `limit <limit> offset <offset>`.
#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteSqlWriter {}

impl SqlWriter for SqliteSqlWriter {
    fn write_limit(&self, out: &mut String, offset: u64, limit: u64) {
        let _ = write!(out, " limit {}", limit);
        if offset > 0 {
            let _ = write!(out, " offset {}", offset);
        }
    }
}
