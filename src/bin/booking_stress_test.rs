use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use booking_engine::domain::{seat_label_for_index, TOTAL_SEATS};
use booking_engine::engine::{BookingError, BookingService};

fn main() {
    println!("booking_stress_test: стартуем стресс-тест движка бронирования…");

    // Параметры нагрузки — можно смело крутить.
    const NUM_SHOWS: usize = 8; // сколько сеансов
    const THREADS_PER_SHOW: usize = 16; // потоков-покупателей на сеанс
    const BASE_SEED: u64 = 12345; // базовый сид перемешивания мест

    let service = Arc::new(BookingService::new());

    // 1. Готовим каталог: тройка фильм + кинотеатр + сеанс на каждый зал.
    let mut show_ids = Vec::with_capacity(NUM_SHOWS);
    for s in 0..NUM_SHOWS {
        let movie_id = setup_or_exit(
            service.add_movie(&format!("STRESS MOVIE {}", s + 1)),
            "фильм",
        );
        let theater_id = setup_or_exit(
            service.add_theater(&format!("STRESS THEATER {}", s + 1)),
            "кинотеатр",
        );
        let show_id = setup_or_exit(service.create_show(movie_id, theater_id), "сеанс");
        show_ids.push(show_id);
    }

    println!(
        "[STRESS] Создано {} сеансов, по {} потоков на сеанс, по {} мест в зале.",
        NUM_SHOWS, THREADS_PER_SHOW, TOTAL_SEATS
    );

    // 2. Гоним параллельные бронирования: каждый поток пытается выкупить весь зал,
    // по одному месту за запрос, в своём случайном порядке.
    let mut handles = Vec::with_capacity(NUM_SHOWS * THREADS_PER_SHOW);

    for (s, &show_id) in show_ids.iter().enumerate() {
        for t in 0..THREADS_PER_SHOW {
            let service = Arc::clone(&service);
            let seed = BASE_SEED + (s * THREADS_PER_SHOW + t) as u64;

            handles.push(thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut labels: Vec<String> =
                    (0..TOTAL_SEATS).map(seat_label_for_index).collect();
                labels.shuffle(&mut rng);

                let mut booked: u64 = 0;
                let mut lost: u64 = 0;
                let mut unexpected: u64 = 0;

                for label in &labels {
                    match service.book_seats(show_id, std::slice::from_ref(label)) {
                        Ok(()) => booked += 1,
                        Err(BookingError::SeatAlreadyBooked(_)) => lost += 1,
                        Err(err) => {
                            eprintln!(
                                "[STRESS][show_id={}] неожиданная ошибка бронирования: {}",
                                show_id, err
                            );
                            unexpected += 1;
                        }
                    }
                }

                (booked, lost, unexpected)
            }));
        }
    }

    let mut total_booked: u64 = 0;
    let mut total_lost: u64 = 0;
    let mut total_unexpected: u64 = 0;

    for handle in handles {
        match handle.join() {
            Ok((booked, lost, unexpected)) => {
                total_booked += booked;
                total_lost += lost;
                total_unexpected += unexpected;
            }
            Err(_) => {
                eprintln!("[STRESS] поток-покупатель завершился паникой");
                total_unexpected += 1;
            }
        }
    }

    // 3. Проверяем целостность залов после нагрузки.
    let mut failures: u64 = 0;

    for info in service.all_shows() {
        if info.available_seats != 0 {
            eprintln!(
                "[STRESS][show_id={}] после полной распродажи осталось {} мест",
                info.show_id, info.available_seats
            );
            failures += 1;
        }
        match service.available_seats(info.show_id) {
            Ok(labels) if labels.is_empty() => {}
            Ok(labels) => {
                eprintln!(
                    "[STRESS][show_id={}] счётчик обнулён, а карта мест ещё держит {:?}",
                    info.show_id, labels
                );
                failures += 1;
            }
            Err(err) => {
                eprintln!(
                    "[STRESS][show_id={}] ошибка при чтении свободных мест: {}",
                    info.show_id, err
                );
                failures += 1;
            }
        }
    }

    let expected_booked = (NUM_SHOWS * TOTAL_SEATS) as u64;
    if total_booked != expected_booked {
        eprintln!(
            "[STRESS] суммарно забронировано {} мест вместо {}",
            total_booked, expected_booked
        );
        failures += 1;
    }

    println!();
    println!("========== STRESS TEST SUMMARY ==========");
    println!("Сеансов: {}", NUM_SHOWS);
    println!("Потоков на сеанс: {}", THREADS_PER_SHOW);
    println!("Успешных бронирований: {}", total_booked);
    println!("Проигранных гонок (место занято): {}", total_lost);
    println!("Неожиданных ошибок: {}", total_unexpected);
    println!("=========================================");

    if failures > 0 || total_unexpected > 0 {
        eprintln!(
            "booking_stress_test: найдены нарушения целостности ({}).",
            failures + total_unexpected
        );
        std::process::exit(1);
    }

    println!("booking_stress_test: завершено.");
}

/// Подготовка каталога не должна падать; если упала, дальше гонять нечего.
fn setup_or_exit<T>(result: Result<T, BookingError>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            eprintln!("[STRESS] ОШИБКА на подготовке ({}): {}", what, err);
            std::process::exit(1);
        }
    }
}
