pub mod line_reader;
