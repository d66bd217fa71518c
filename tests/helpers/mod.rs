#![allow(unused_imports, dead_code)]
pub mod test_db;

pub use test_db::*;
