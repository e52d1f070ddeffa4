use std::io::{self, Write};

use crate::model::movie::Movie;

const YEAR_WIDTH: usize = 4;
const GENRE_WIDTH: usize = 10;
const AVERAGE_WIDTH: usize = 10;
const SEPARATOR: &str = " | ";

/// Column widths for one report. Only the title column depends on the data;
/// long genres overflow their column rather than being cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub title: usize,
    pub genre: usize,
}

impl ColumnWidths {
    pub fn for_movies(movies: &[Movie]) -> ColumnWidths {
        let [title_label, ..] = Movie::report_titles();
        let title = movies
            .iter()
            .map(|m| m.title().chars().count())
            .fold(title_label.chars().count(), usize::max);

        ColumnWidths {
            title,
            genre: GENRE_WIDTH,
        }
    }

    /// Width of a full header or data row, separators included.
    pub fn total(&self) -> usize {
        self.title + YEAR_WIDTH + self.genre + AVERAGE_WIDTH + 3 * SEPARATOR.len()
    }
}

pub fn render_report<W: Write>(movies: &[Movie], out: &mut W) -> io::Result<()> {
    let widths = ColumnWidths::for_movies(movies);
    let [title, year, genre, average] = Movie::report_titles();

    writeln!(
        out,
        "{title:<tw$}{sep}{year:>yw$}{sep}{genre:<gw$}{sep}{average:>aw$}",
        sep = SEPARATOR,
        tw = widths.title,
        yw = YEAR_WIDTH,
        gw = widths.genre,
        aw = AVERAGE_WIDTH,
    )?;
    writeln!(out, "{}", "-".repeat(widths.total()))?;

    for movie in movies {
        writeln!(
            out,
            "{:<tw$}{sep}{:>yw$}{sep}{:<gw$}{sep}{:>aw$.1}",
            movie.title(),
            movie.year(),
            movie.genre(),
            movie.average_rating(),
            sep = SEPARATOR,
            tw = widths.title,
            yw = YEAR_WIDTH,
            gw = widths.genre,
            aw = AVERAGE_WIDTH,
        )?;
    }

    out.flush()
}
