//! Инфраструктурный слой вокруг движка бронирования:
//! - генерация ID.

pub mod ids;

pub use ids::*;
