/// A validated movie. Fields are private so the average can never drift from
/// the ratings it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    title: String,
    year: u16,
    genre: String,
    ratings: [u8; 3],
    average_rating: f64,
}

impl Movie {
    pub fn new(title: String, year: u16, genre: String, ratings: [u8; 3]) -> Movie {
        let total: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
        Movie {
            title,
            year,
            genre,
            ratings,
            average_rating: f64::from(total) / 3.0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn ratings(&self) -> [u8; 3] {
        self.ratings
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    pub fn report_titles() -> [&'static str; 4] {
        ["Title", "Year", "Genre", "Avg Rating"]
    }
}
