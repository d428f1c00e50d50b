//! Reading CSV records from disk.

mod header;
mod quotes;
mod reader;

pub(crate) use header::read_header;
pub(crate) use quotes::{QuoteGuard, check_quotes};
pub(crate) use reader::open_reader;
