pub mod movie;
pub mod raw_row;
