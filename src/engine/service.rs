use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domain::{MovieId, ShowId, TheaterId};
use crate::engine::catalog::EntityCatalog;
use crate::engine::errors::BookingError;
use crate::engine::show::Show;
use crate::engine::show_registry::ShowRegistry;
use crate::infra::IdGenerator;

/// Сводка по сеансу для списков: названия уже разрешены через каталог,
/// счётчик мест снят с атомика без захвата мьютекса зала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowInfo {
    pub show_id: ShowId,
    pub movie_id: MovieId,
    pub theater_id: TheaterId,
    pub movie_title: String,
    pub theater_name: String,
    pub available_seats: usize,
}

/// Каталог и реестр сеансов под одним локом: создание сеанса должно
/// атомарно видеть и то и другое.
#[derive(Debug, Default)]
struct Registry {
    catalog: EntityCatalog,
    shows: ShowRegistry,
}

/// Фасад движка бронирования.
///
/// Дисциплина локов двухуровневая и строгая:
/// 1) общий RwLock на каталог и все индексы сеансов;
/// 2) мьютекс зала внутри конкретного `Show`.
///
/// Оба уровня никогда не держатся одновременно: операция с местами сначала
/// разрешает Arc-хэндл сеанса под общим локом, отпускает его и только потом
/// берёт мьютекс зала. Бронирования разных сеансов друг друга не ждут.
///
/// Экземпляр создаётся явно вызывающим, никаких глобальных синглтонов;
/// между потоками обычно разделяется как `Arc<BookingService>`.
#[derive(Debug)]
pub struct BookingService {
    ids: IdGenerator,
    registry: RwLock<Registry>,
}

impl BookingService {
    /// Пустой сервис: ни фильмов, ни кинотеатров, ни сеансов.
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
            registry: RwLock::new(Registry::default()),
        }
    }

    // ----------------- наполнение каталога -----------------

    /// Добавить фильм. Название уникально без учёта регистра.
    pub fn add_movie(&self, title: &str) -> Result<MovieId, BookingError> {
        let mut registry = self.registry.write();
        registry.catalog.add_movie(&self.ids, title)
    }

    /// Добавить кинотеатр. Имя уникально без учёта регистра.
    pub fn add_theater(&self, name: &str) -> Result<TheaterId, BookingError> {
        let mut registry = self.registry.write();
        registry.catalog.add_theater(&self.ids, name)
    }

    /// Создать сеанс фильма в кинотеатре. На каждую пару (фильм, кинотеатр)
    /// допускается не больше одного сеанса.
    pub fn create_show(
        &self,
        movie_id: MovieId,
        theater_id: TheaterId,
    ) -> Result<ShowId, BookingError> {
        let mut registry = self.registry.write();
        let Registry { catalog, shows } = &mut *registry;
        shows.create_show(&self.ids, catalog, movie_id, theater_id)
    }

    // ----------------- операции с местами -----------------

    /// Разрешить хэндл сеанса. Общий лок берётся в разделяемом режиме ровно
    /// на время поиска и отпускается до любой работы с залом.
    fn resolve_show(&self, show_id: ShowId) -> Result<Arc<Show>, BookingError> {
        let registry = self.registry.read();
        registry
            .shows
            .get(show_id)
            .ok_or(BookingError::ShowNotFound(show_id))
    }

    /// Свободные места сеанса по возрастанию индекса. Чистое чтение.
    pub fn available_seats(&self, show_id: ShowId) -> Result<Vec<String>, BookingError> {
        let show = self.resolve_show(show_id)?;
        Ok(show.available_labels())
    }

    /// Забронировать места целиком, "всё или ничего"
    /// (подробности в `Show::book_seats`).
    pub fn book_seats(&self, show_id: ShowId, labels: &[String]) -> Result<(), BookingError> {
        let show = self.resolve_show(show_id)?;
        show.book_seats(labels)
    }

    // ----------------- списки и запросы -----------------

    /// Название фильма или "Unknown Movie": неизвестный id это не ошибка.
    pub fn movie_title(&self, movie_id: MovieId) -> String {
        let registry = self.registry.read();
        registry.catalog.movie_title(movie_id)
    }

    /// Имя кинотеатра или "Unknown Theater".
    pub fn theater_name(&self, theater_id: TheaterId) -> String {
        let registry = self.registry.read();
        registry.catalog.theater_name(theater_id)
    }

    /// Все фильмы каталога (id, название), по возрастанию id.
    pub fn all_movies(&self) -> Vec<(MovieId, String)> {
        let registry = self.registry.read();
        registry.catalog.all_movies()
    }

    /// Все кинотеатры каталога (id, имя), по возрастанию id.
    pub fn all_theaters(&self) -> Vec<(TheaterId, String)> {
        let registry = self.registry.read();
        registry.catalog.all_theaters()
    }

    /// Сводки всех сеансов по возрастанию id сеанса.
    ///
    /// Снимок согласован: лок берётся один раз на всю сборку, поэтому
    /// полусозданных сеансов здесь не видно. Счётчики мест снимаются с
    /// атомиков, мьютексы залов не трогаются.
    pub fn all_shows(&self) -> Vec<ShowInfo> {
        let registry = self.registry.read();
        registry
            .shows
            .all()
            .into_iter()
            .map(|show| ShowInfo {
                show_id: show.id,
                movie_id: show.movie_id,
                theater_id: show.theater_id,
                movie_title: registry.catalog.movie_title(show.movie_id),
                theater_name: registry.catalog.theater_name(show.theater_id),
                available_seats: show.available_count(),
            })
            .collect()
    }

    /// Фильмы, у которых есть хотя бы один сеанс, по возрастанию id.
    pub fn active_movies(&self) -> Vec<(MovieId, String)> {
        let registry = self.registry.read();
        registry
            .shows
            .active_movie_ids()
            .into_iter()
            .map(|id| (id, registry.catalog.movie_title(id)))
            .collect()
    }

    /// Кинотеатры, в которых идёт фильм, по возрастанию id.
    pub fn theaters_for_movie(&self, movie_id: MovieId) -> Vec<(TheaterId, String)> {
        let registry = self.registry.read();
        registry
            .shows
            .theater_ids_for_movie(movie_id)
            .into_iter()
            .map(|id| (id, registry.catalog.theater_name(id)))
            .collect()
    }
}
