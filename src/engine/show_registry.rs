use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::{MovieId, ShowId, TheaterId};
use crate::engine::catalog::EntityCatalog;
use crate::engine::errors::BookingError;
use crate::engine::show::Show;
use crate::infra::IdGenerator;

/// Реестр сеансов и производные индексы по ним.
///
/// Живёт под тем же RwLock, что и EntityCatalog: создание сеанса обязано
/// атомарно проверить существование фильма и кинотеатра и обновить все
/// четыре структуры разом. Сеансы никогда не удаляются, так что
/// `active_movies` и `movie_to_theaters` только растут вместе с `shows`.
#[derive(Debug, Default)]
pub struct ShowRegistry {
    shows: HashMap<ShowId, Arc<Show>>,
    by_pair: HashMap<(MovieId, TheaterId), ShowId>,
    active_movies: HashSet<MovieId>,
    movie_to_theaters: HashMap<MovieId, HashSet<TheaterId>>,
}

impl ShowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать сеанс. Предусловия (фильм и кинотеатр существуют, у пары
    /// ещё нет сеанса) и вставка во все индексы выполняются одной
    /// критической секцией под монопольным локом вызывающего. Id сеанса
    /// выдаётся только после прохождения всех предусловий.
    pub fn create_show(
        &mut self,
        ids: &IdGenerator,
        catalog: &EntityCatalog,
        movie_id: MovieId,
        theater_id: TheaterId,
    ) -> Result<ShowId, BookingError> {
        if !catalog.contains_movie(movie_id) {
            return Err(BookingError::MovieNotFound(movie_id));
        }
        if !catalog.contains_theater(theater_id) {
            return Err(BookingError::TheaterNotFound(theater_id));
        }
        if self.by_pair.contains_key(&(movie_id, theater_id)) {
            return Err(BookingError::DuplicateShow {
                movie_id,
                theater_id,
            });
        }

        let id = ids.next_show_id();
        self.shows
            .insert(id, Arc::new(Show::new(id, movie_id, theater_id)));
        self.by_pair.insert((movie_id, theater_id), id);
        self.active_movies.insert(movie_id);
        self.movie_to_theaters
            .entry(movie_id)
            .or_default()
            .insert(theater_id);

        Ok(id)
    }

    /// Хэндл сеанса. Клонированный Arc живёт независимо от лока каталога,
    /// на этом держится весь двухфазный протокол бронирования.
    pub fn get(&self, id: ShowId) -> Option<Arc<Show>> {
        self.shows.get(&id).cloned()
    }

    /// Все сеансы по возрастанию id.
    pub fn all(&self) -> Vec<Arc<Show>> {
        let mut shows: Vec<_> = self.shows.values().cloned().collect();
        shows.sort_by_key(|show| show.id);
        shows
    }

    /// Фильмы, у которых есть хотя бы один сеанс, по возрастанию id.
    pub fn active_movie_ids(&self) -> Vec<MovieId> {
        let mut ids: Vec<_> = self.active_movies.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Кинотеатры, где идёт фильм, по возрастанию id.
    pub fn theater_ids_for_movie(&self, movie_id: MovieId) -> Vec<TheaterId> {
        let mut ids: Vec<_> = self
            .movie_to_theaters
            .get(&movie_id)
            .map(|theaters| theaters.iter().copied().collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }
}
