use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "movies.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Reads the input path from the first argument after the program name.
    /// Any further arguments are ignored.
    pub fn from_args<I>(args: I) -> Config
    where
        I: IntoIterator<Item = String>,
    {
        let input = args
            .into_iter()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());

        Config {
            input: PathBuf::from(input),
        }
    }
}
