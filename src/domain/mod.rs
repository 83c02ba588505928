//! Доменная модель бронирования: фильмы, кинотеатры, места в зале.

pub mod movie;
pub mod seats;
pub mod theater;

// Базовые идентификаторы. Строго положительные, выдаёт их infra::IdGenerator.
pub type MovieId = u64;
pub type TheaterId = u64;
pub type ShowId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Movie и т.п.
pub use movie::*;
pub use seats::*;
pub use theater::*;
