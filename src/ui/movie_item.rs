use crate::gateway::MovieSummary;
use crate::ui::routes::{Navigator, Route};

/// Posters render at a fixed size regardless of the source image.
pub const POSTER_WIDTH: u32 = 200;
pub const POSTER_HEIGHT: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieItem {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: PosterImage,
    has_poster: bool,
}

impl MovieItem {
    pub fn new(movie: &MovieSummary) -> Self {
        Self {
            imdb_id: movie.imdb_id.clone(),
            title: movie.title.clone(),
            year: movie.year.clone(),
            poster: PosterImage {
                src: movie.poster.clone(),
                alt: movie.title.clone(),
                width: POSTER_WIDTH,
                height: POSTER_HEIGHT,
            },
            has_poster: movie.has_poster(),
        }
    }

    /// False when the database has no poster ("N/A").
    pub fn has_poster(&self) -> bool {
        self.has_poster
    }

    /// Link target of the card.
    pub fn detail_href(&self) -> String {
        Route::Detail(self.imdb_id.clone()).path()
    }

    /// "View poster" button.
    pub fn open_poster(&self, navigator: &dyn Navigator) {
        navigator.push(Route::Poster(self.imdb_id.clone()));
    }
}
