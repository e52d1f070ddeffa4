use std::cmp::Ordering;

use crate::model::movie::Movie;

/// Highest average first.
pub fn by_average_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.average_rating().total_cmp(&a.average_rating())
}

/// Oldest first.
pub fn by_year(a: &Movie, b: &Movie) -> Ordering {
    a.year().cmp(&b.year())
}

/// Stable sort: movies that compare equal keep their input order.
pub fn rank_by<F>(mut movies: Vec<Movie>, compare: F) -> Vec<Movie>
where
    F: FnMut(&Movie, &Movie) -> Ordering,
{
    movies.sort_by(compare);
    movies
}

pub fn rank(movies: Vec<Movie>) -> Vec<Movie> {
    rank_by(movies, by_average_rating_desc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: u16, ratings: [u8; 3]) -> Movie {
        Movie::new(title.to_string(), year, "Drama".to_string(), ratings)
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title()).collect()
    }

    #[test]
    fn sorts_by_average_descending() {
        let ranked = rank(vec![
            movie("Low", 2000, [10, 10, 10]),
            movie("High", 2000, [90, 95, 100]),
            movie("Mid", 2000, [50, 50, 51]),
        ]);
        assert_eq!(titles(&ranked), vec!["High", "Mid", "Low"]);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].average_rating() >= pair[1].average_rating()));
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![
            movie("First", 2001, [60, 60, 60]),
            movie("Top", 2002, [99, 99, 99]),
            movie("Second", 2003, [50, 60, 70]),
            movie("Third", 2004, [70, 60, 50]),
        ]);
        assert_eq!(titles(&ranked), vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let heat = movie("Heat", 1995, [80, 80, 80]);
        let ranked = rank(vec![heat.clone(), heat.clone()]);
        assert_eq!(ranked, vec![heat.clone(), heat]);
    }

    #[test]
    fn alternate_comparator() {
        let ranked = rank_by(
            vec![movie("B", 2010, [1, 1, 1]), movie("A", 1950, [1, 1, 1])],
            by_year,
        );
        assert_eq!(titles(&ranked), vec!["A", "B"]);
    }
}
