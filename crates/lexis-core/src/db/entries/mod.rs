//! Entry and sense CRUD

mod read;
mod write;

pub(crate) use write::{delete_entry_rows, insert_entry_rows};
