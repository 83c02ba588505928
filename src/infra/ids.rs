use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{MovieId, ShowId, TheaterId};

/// Генерация ID на монотонных счётчиках, по счётчику на класс сущностей.
///
/// Счётчики атомарные: выдача id не требует ни лока каталога, ни какого-либо
/// другого. Нумерация в каждом классе начинается с 1 и никогда не
/// переиспользуется.
#[derive(Debug)]
pub struct IdGenerator {
    movie_counter: AtomicU64,
    theater_counter: AtomicU64,
    show_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            movie_counter: AtomicU64::new(1),
            theater_counter: AtomicU64::new(1),
            show_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_movie_id(&self) -> MovieId {
        self.movie_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_theater_id(&self) -> TheaterId {
        self.theater_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_show_id(&self) -> ShowId {
        self.show_counter.fetch_add(1, Ordering::Relaxed)
    }
}
