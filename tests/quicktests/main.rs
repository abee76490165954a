#[macro_use]
extern crate quickcheck_macros;

mod clue_index;
mod suspect_table;
