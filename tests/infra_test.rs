// tests/infra_test.rs

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use booking_engine::infra::IdGenerator;

/// Каждый класс сущностей нумеруется с единицы и строго по порядку.
#[test]
fn id_generator_counts_from_one() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_movie_id(), 1);
    assert_eq!(ids.next_movie_id(), 2);
    assert_eq!(ids.next_movie_id(), 3);

    assert_eq!(ids.next_theater_id(), 1);
    assert_eq!(ids.next_theater_id(), 2);

    assert_eq!(ids.next_show_id(), 1);
}

/// Счётчики классов независимы: выдача id фильмов не двигает id кинотеатров.
#[test]
fn id_generator_counters_are_independent() {
    let ids = IdGenerator::new();

    for _ in 0..10 {
        ids.next_movie_id();
    }

    assert_eq!(ids.next_theater_id(), 1);
    assert_eq!(ids.next_show_id(), 1);
    assert_eq!(ids.next_movie_id(), 11);
}

/// Генератор делится между потоками без внешних замков,
/// id при этом не повторяются и не теряются.
#[test]
fn id_generator_is_race_free() {
    const THREADS: usize = 8;
    const IDS_PER_THREAD: usize = 1000;

    let ids = Arc::new(IdGenerator::new());
    let mut handles = Vec::with_capacity(THREADS);

    for _ in 0..THREADS {
        let ids = Arc::clone(&ids);
        handles.push(thread::spawn(move || {
            let mut seen = Vec::with_capacity(IDS_PER_THREAD);
            for _ in 0..IDS_PER_THREAD {
                seen.push(ids.next_show_id());
            }
            seen
        }));
    }

    let mut all: HashSet<u64> = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("id thread must not panic") {
            assert!(all.insert(id), "id {} выдан дважды", id);
        }
    }

    assert_eq!(all.len(), THREADS * IDS_PER_THREAD);
    // диапазон плотный: от 1 до общего числа выдач
    assert_eq!(all.iter().min().copied(), Some(1));
    assert_eq!(all.iter().max().copied(), Some((THREADS * IDS_PER_THREAD) as u64));
}
