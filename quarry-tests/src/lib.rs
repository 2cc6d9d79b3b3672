mod embedded;
mod joined;
mod not_found;
mod paging;
mod typed;
mod users;

use crate::{
    embedded::embedded, joined::joined, not_found::not_found, paging::paging, typed::typed,
    users::users,
};
use log::LevelFilter;
use quarry::Executor;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Runs every suite against `executor`, each suite creates and drops its own tables.
pub fn execute_tests<E: Executor>(executor: &E) {
    users(executor);
    not_found(executor);
    paging(executor);
    typed(executor);
    embedded(executor);
    joined(executor);
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}

pub(crate) fn recreate_table<E: Executor>(executor: &E, table: &str, definition: &str) {
    executor
        .execute(&format!("drop table if exists {}", table), &[])
        .expect(&format!("Failed to drop the {} table", table));
    executor
        .execute(definition, &[])
        .expect(&format!("Failed to create the {} table", table));
}
