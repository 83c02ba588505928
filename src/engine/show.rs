use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::domain::{seat_index_from_label, MovieId, SeatMap, ShowId, TheaterId, TOTAL_SEATS};
use crate::engine::errors::BookingError;

/// Сеанс: фильм в конкретном кинотеатре плюс состояние зала.
///
/// Карта занятости закрыта собственным мьютексом сеанса, независимым от
/// общего лока каталога. Счётчик свободных мест обновляется только внутри
/// критической секции этого мьютекса, но читается атомарно без него,
/// поэтому спискам сеансов мьютексы залов не нужны вовсе.
#[derive(Debug)]
pub struct Show {
    pub id: ShowId,
    pub movie_id: MovieId,
    pub theater_id: TheaterId,
    seats: Mutex<SeatMap>,
    available: AtomicUsize,
}

impl Show {
    /// Новый сеанс с полностью свободным залом.
    pub fn new(id: ShowId, movie_id: MovieId, theater_id: TheaterId) -> Self {
        Self {
            id,
            movie_id,
            theater_id,
            seats: Mutex::new(SeatMap::new()),
            available: AtomicUsize::new(TOTAL_SEATS),
        }
    }

    /// Сколько мест свободно. Читается без мьютекса зала.
    #[inline]
    pub fn available_count(&self) -> usize {
        self.available.load(Ordering::Relaxed)
    }

    /// Метки всех свободных мест по возрастанию индекса. Чистое чтение.
    pub fn available_labels(&self) -> Vec<String> {
        let seats = self.seats.lock();
        seats.free_labels()
    }

    /// Забронировать набор мест целиком, "всё или ничего".
    ///
    /// Под мьютексом зала каждая метка по очереди разбирается и проверяется:
    /// некорректная метка, повтор внутри самой заявки, уже занятое место.
    /// Места помечаются занятыми одним проходом только после того, как вся
    /// заявка прошла все проверки; при любой ошибке зал не меняется.
    /// Пустая заявка тривиально успешна.
    pub fn book_seats(&self, labels: &[String]) -> Result<(), BookingError> {
        let mut seats = self.seats.lock();

        let mut seen = [false; TOTAL_SEATS];
        let mut indices = Vec::with_capacity(labels.len());

        for label in labels {
            let idx = seat_index_from_label(label)
                .ok_or_else(|| BookingError::InvalidSeatLabel(label.clone()))?;
            if seen[idx] {
                return Err(BookingError::DuplicateSeatInRequest(label.clone()));
            }
            seen[idx] = true;
            if seats.is_booked(idx) {
                return Err(BookingError::SeatAlreadyBooked(label.clone()));
            }
            indices.push(idx);
        }

        for &idx in &indices {
            seats.mark_booked(idx);
        }
        self.available.fetch_sub(indices.len(), Ordering::Relaxed);

        Ok(())
    }
}
