//! Движок бронирования: каталог, реестр сеансов, залы и фасад над ними.
//!
//! Высокоуровневый объект: `BookingService`.
//! Основные операции:
//!   - `add_movie` / `add_theater` — наполнение каталога
//!   - `create_show` — сеанс фильма в кинотеатре
//!   - `book_seats` — бронирование мест "всё или ничего"
//!   - `available_seats` и списки — чтение без побочных эффектов

pub mod catalog;
pub mod errors;
pub mod service;
pub mod show;
pub mod show_registry;

pub use catalog::{EntityCatalog, UNKNOWN_MOVIE, UNKNOWN_THEATER};
pub use errors::BookingError;
pub use service::{BookingService, ShowInfo};
pub use show::Show;
pub use show_registry::ShowRegistry;
