use crate::domain::{MovieId, ShowId, TheaterId};

use thiserror::Error;

/// Ошибки движка бронирования.
///
/// Все они ожидаемые: ни одна не означает поломку движка, вызывающий
/// просто повторяет запрос с другими данными. Частичных эффектов после
/// ошибки не бывает.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Фильм \"{title}\" уже есть в каталоге (id={existing})")]
    DuplicateMovieTitle { title: String, existing: MovieId },

    #[error("Кинотеатр \"{name}\" уже есть в каталоге (id={existing})")]
    DuplicateTheaterName { name: String, existing: TheaterId },

    #[error("Фильм {0} не найден")]
    MovieNotFound(MovieId),

    #[error("Кинотеатр {0} не найден")]
    TheaterNotFound(TheaterId),

    #[error("Сеанс для фильма {movie_id} в кинотеатре {theater_id} уже существует")]
    DuplicateShow {
        movie_id: MovieId,
        theater_id: TheaterId,
    },

    #[error("Сеанс {0} не найден")]
    ShowNotFound(ShowId),

    #[error("Некорректное место: {0}")]
    InvalidSeatLabel(String),

    #[error("Место {0} указано в заявке дважды")]
    DuplicateSeatInRequest(String),

    #[error("Место {0} уже занято")]
    SeatAlreadyBooked(String),
}
