//! Движок бронирования билетов в кино.
//!
//! Всё состояние живёт в памяти процесса и умирает вместе с ним.
//! Ядро потокобезопасно: произвольное число потоков может одновременно
//! наполнять каталог и бронировать места, и на каждое место каждого
//! сеанса приходится не больше одной успешной брони.

pub mod domain;
pub mod engine;
pub mod infra;
