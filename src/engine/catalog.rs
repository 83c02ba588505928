use std::collections::HashMap;

use crate::domain::{Movie, MovieId, Theater, TheaterId};
use crate::engine::errors::BookingError;
use crate::infra::IdGenerator;

/// Ответ на запрос с неизвестным id: это не ошибка, вызывающий
/// имеет право прощупывать каталог вслепую.
pub const UNKNOWN_MOVIE: &str = "Unknown Movie";
pub const UNKNOWN_THEATER: &str = "Unknown Theater";

/// Каталог фильмов и кинотеатров с индексами имён без учёта регистра.
///
/// Своих локов не держит: весь каталог живёт под общим RwLock в
/// `BookingService`, и каждый метод ниже вызывается строго под ним.
#[derive(Debug, Default)]
pub struct EntityCatalog {
    movies: HashMap<MovieId, Movie>,
    theaters: HashMap<TheaterId, Theater>,
    movie_title_index: HashMap<String, MovieId>,
    theater_name_index: HashMap<String, TheaterId>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить фильм. Проверка уникальности названия (без учёта регистра)
    /// и вставка происходят в одном вызове под монопольным локом
    /// вызывающего, окна между ними нет. Id выдаётся только после успешной
    /// проверки, отказ не сжигает номера.
    pub fn add_movie(&mut self, ids: &IdGenerator, title: &str) -> Result<MovieId, BookingError> {
        let key = title.to_lowercase();
        if let Some(&existing) = self.movie_title_index.get(&key) {
            return Err(BookingError::DuplicateMovieTitle {
                title: title.to_string(),
                existing,
            });
        }

        let id = ids.next_movie_id();
        self.movies.insert(id, Movie::new(id, title.to_string()));
        self.movie_title_index.insert(key, id);
        Ok(id)
    }

    /// Добавить кинотеатр, симметрично `add_movie`.
    pub fn add_theater(&mut self, ids: &IdGenerator, name: &str) -> Result<TheaterId, BookingError> {
        let key = name.to_lowercase();
        if let Some(&existing) = self.theater_name_index.get(&key) {
            return Err(BookingError::DuplicateTheaterName {
                name: name.to_string(),
                existing,
            });
        }

        let id = ids.next_theater_id();
        self.theaters.insert(id, Theater::new(id, name.to_string()));
        self.theater_name_index.insert(key, id);
        Ok(id)
    }

    pub fn contains_movie(&self, id: MovieId) -> bool {
        self.movies.contains_key(&id)
    }

    pub fn contains_theater(&self, id: TheaterId) -> bool {
        self.theaters.contains_key(&id)
    }

    /// Название фильма или заглушка "Unknown Movie".
    pub fn movie_title(&self, id: MovieId) -> String {
        self.movies
            .get(&id)
            .map(|movie| movie.title.clone())
            .unwrap_or_else(|| UNKNOWN_MOVIE.to_string())
    }

    /// Имя кинотеатра или заглушка "Unknown Theater".
    pub fn theater_name(&self, id: TheaterId) -> String {
        self.theaters
            .get(&id)
            .map(|theater| theater.name.clone())
            .unwrap_or_else(|| UNKNOWN_THEATER.to_string())
    }

    /// Все фильмы парами (id, название), по возрастанию id.
    pub fn all_movies(&self) -> Vec<(MovieId, String)> {
        let mut result: Vec<_> = self
            .movies
            .values()
            .map(|movie| (movie.id, movie.title.clone()))
            .collect();
        result.sort_by_key(|(id, _)| *id);
        result
    }

    /// Все кинотеатры парами (id, имя), по возрастанию id.
    pub fn all_theaters(&self) -> Vec<(TheaterId, String)> {
        let mut result: Vec<_> = self
            .theaters
            .values()
            .map(|theater| (theater.id, theater.name.clone()))
            .collect();
        result.sort_by_key(|(id, _)| *id);
        result
    }
}
