// src/bin/booking_cli.rs

use std::io::{self, BufRead, Write};

use booking_engine::domain::{seat_label_for_index, TOTAL_SEATS};
use booking_engine::engine::BookingService;

/// Прочитать строку и обрезать пробелы по краям. None означает EOF:
/// stdin закрыт, дальше спрашивать нечего.
fn read_trimmed_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Напечатать приглашение и прочитать строку.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    read_trimmed_line(input)
}

/// Напечатать приглашение и прочитать число. Пустая строка, EOF и мусор
/// вместо числа дают None, вызывающий просто возвращается в меню.
fn prompt_u64(input: &mut impl BufRead, prompt: &str) -> Option<u64> {
    let line = prompt_line(input, prompt)?;
    if line.is_empty() {
        return None;
    }
    match line.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Некорректное число, попробуйте ещё раз.");
            None
        }
    }
}

/// Разбор ввода вида "A1, A2,A3": режем по запятым, выкидываем все пробелы
/// внутри кусков, пустые куски пропускаем.
fn parse_seat_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| {
            token
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn print_shows(service: &BookingService, with_seats: bool) {
    for info in service.all_shows() {
        if with_seats {
            println!(
                "  Сеанс {} | Фильм: {} | Кинотеатр: {} | Свободно мест: {}",
                info.show_id, info.movie_title, info.theater_name, info.available_seats
            );
        } else {
            println!(
                "  Сеанс {} | Фильм: {} | Кинотеатр: {}",
                info.show_id, info.movie_title, info.theater_name
            );
        }
    }
}

fn main() {
    let service = BookingService::new();
    let mut input = io::stdin().lock();

    println!("===== Бронирование билетов в кино =====");

    loop {
        println!();
        println!("1. Добавить фильм");
        println!("2. Добавить кинотеатр");
        println!("3. Создать сеанс");
        println!("4. Фильмы в прокате");
        println!("5. Кинотеатры по фильму");
        println!("6. Свободные места по сеансам");
        println!("7. Забронировать места");
        println!("8. Выход");

        let choice = match prompt_line(&mut input, "Выберите пункт: ") {
            Some(line) => line,
            None => {
                println!();
                println!("[CLI] Ввод закрыт, выходим.");
                break;
            }
        };

        match choice.as_str() {
            "1" => {
                let title = match prompt_line(&mut input, "Название фильма: ") {
                    Some(t) => t,
                    None => continue,
                };
                if title.is_empty() {
                    println!("Название не может быть пустым.");
                    continue;
                }
                match service.add_movie(&title) {
                    Ok(id) => println!("Фильм добавлен: id={}, название \"{}\"", id, title),
                    Err(err) => println!("Ошибка: {}", err),
                }
            }

            "2" => {
                let name = match prompt_line(&mut input, "Название кинотеатра: ") {
                    Some(n) => n,
                    None => continue,
                };
                if name.is_empty() {
                    println!("Название не может быть пустым.");
                    continue;
                }
                match service.add_theater(&name) {
                    Ok(id) => println!("Кинотеатр добавлен: id={}, название \"{}\"", id, name),
                    Err(err) => println!("Ошибка: {}", err),
                }
            }

            "3" => {
                let movies = service.all_movies();
                let theaters = service.all_theaters();
                if movies.is_empty() || theaters.is_empty() {
                    println!("Сначала добавьте хотя бы один фильм и один кинотеатр.");
                    continue;
                }

                if !service.all_shows().is_empty() {
                    println!("Текущие сеансы:");
                    print_shows(&service, false);
                    println!();
                }
                println!("Фильмы:");
                for (id, title) in &movies {
                    println!("  [{}] {}", id, title);
                }
                println!("Кинотеатры:");
                for (id, name) in &theaters {
                    println!("  [{}] {}", id, name);
                }

                let movie_id = match prompt_u64(&mut input, "Id фильма: ") {
                    Some(id) => id,
                    None => continue,
                };
                let theater_id = match prompt_u64(&mut input, "Id кинотеатра: ") {
                    Some(id) => id,
                    None => continue,
                };

                match service.create_show(movie_id, theater_id) {
                    Ok(show_id) => println!(
                        "Сеанс создан: id={}, фильм \"{}\", кинотеатр \"{}\"",
                        show_id,
                        service.movie_title(movie_id),
                        service.theater_name(theater_id)
                    ),
                    Err(err) => println!("Не удалось создать сеанс: {}", err),
                }
            }

            "4" => {
                let movies = service.active_movies();
                if movies.is_empty() {
                    println!("Нет фильмов в прокате.");
                    continue;
                }
                println!("Фильмы в прокате:");
                for (id, title) in movies {
                    println!("  [{}] {}", id, title);
                }
            }

            "5" => {
                let movies = service.active_movies();
                if movies.is_empty() {
                    println!("Нет фильмов в прокате.");
                    continue;
                }
                println!("Фильмы в прокате:");
                for (id, title) in movies {
                    println!("  [{}] {}", id, title);
                }

                let movie_id = match prompt_u64(&mut input, "Id фильма: ") {
                    Some(id) => id,
                    None => continue,
                };
                let theaters = service.theaters_for_movie(movie_id);
                if theaters.is_empty() {
                    println!("Для этого фильма сеансов нет.");
                    continue;
                }
                println!("Кинотеатры, где идёт \"{}\":", service.movie_title(movie_id));
                for (id, name) in theaters {
                    println!("  [{}] {}", id, name);
                }
            }

            "6" => {
                if service.all_shows().is_empty() {
                    println!("Сеансов пока нет.");
                    continue;
                }
                println!("Сеансы:");
                print_shows(&service, true);
            }

            "7" => {
                let shows = service.all_shows();
                if shows.is_empty() {
                    println!("Сеансов пока нет.");
                    continue;
                }

                println!("Сеансы со свободными местами:");
                for info in shows.iter().filter(|info| info.available_seats > 0) {
                    println!(
                        "  Сеанс {} | Фильм: {} | Кинотеатр: {} | Свободно мест: {}",
                        info.show_id, info.movie_title, info.theater_name, info.available_seats
                    );
                }

                let show_id = match prompt_u64(&mut input, "Id сеанса: ") {
                    Some(id) => id,
                    None => continue,
                };

                let available = match service.available_seats(show_id) {
                    Ok(labels) => labels,
                    Err(err) => {
                        println!("Ошибка: {}", err);
                        continue;
                    }
                };
                println!(
                    "Свободные места ({}): {}",
                    available.len(),
                    available.join(" ")
                );
                if available.len() < TOTAL_SEATS {
                    let booked: Vec<String> = (0..TOTAL_SEATS)
                        .map(seat_label_for_index)
                        .filter(|label| !available.contains(label))
                        .collect();
                    println!("Уже занятые места: {}", booked.join(" "));
                }

                let raw = match prompt_line(
                    &mut input,
                    "Места через запятую (диапазон A1..A20), например A1,A2: ",
                ) {
                    Some(line) => line,
                    None => continue,
                };
                let labels = parse_seat_labels(&raw);
                if labels.is_empty() {
                    println!("Места не указаны.");
                    continue;
                }

                match service.book_seats(show_id, &labels) {
                    Ok(()) => println!("Бронирование успешно."),
                    Err(err) => println!("Бронирование не удалось: {}", err),
                }
            }

            "8" => {
                println!("Выход.");
                break;
            }

            _ => println!("Нет такого пункта, введите число от 1 до 8."),
        }
    }

    println!("[CLI] Программа завершена.");
}
