use serde::{Deserialize, Serialize};

/// Ряд в зале один и обозначается фиксированной буквой.
pub const SEAT_ROW: char = 'A';

/// Количество мест в зале каждого сеанса.
pub const TOTAL_SEATS: usize = 20;

/// Разбор метки места вида "A7" в нулевой индекс.
///
/// Правила:
/// - первый символ строго `SEAT_ROW`;
/// - дальше только ASCII-цифры, итоговый номер в диапазоне 1..=TOTAL_SEATS;
/// - ведущие нули допустимы: "A07" это то же место, что "A7";
/// - всё остальное ("B1", "A0", "A21", "A+5", пустая строка) даёт None.
///
/// Работает по байтам, так что не-ASCII ввод просто не пройдёт проверку цифр.
pub fn seat_index_from_label(label: &str) -> Option<usize> {
    let bytes = label.as_bytes();
    if bytes.len() < 2 || bytes[0] != SEAT_ROW as u8 {
        return None;
    }
    let mut num: usize = 0;
    for &b in &bytes[1..] {
        if !b.is_ascii_digit() {
            return None;
        }
        num = num * 10 + (b - b'0') as usize;
        if num > TOTAL_SEATS {
            // Номер уже вне диапазона, остаток цифр можно не читать.
            break;
        }
    }
    if (1..=TOTAL_SEATS).contains(&num) {
        Some(num - 1)
    } else {
        None
    }
}

/// Обратное преобразование: индекс из 0..TOTAL_SEATS в метку "A1".."A20".
pub fn seat_label_for_index(idx: usize) -> String {
    format!("{}{}", SEAT_ROW, idx + 1)
}

/// Карта занятости зала: true = место выкуплено.
///
/// Обычная структура данных без локов. Кто и под каким локом её мутирует,
/// решает engine (см. `engine::show::Show`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatMap {
    booked: [bool; TOTAL_SEATS],
}

impl SeatMap {
    /// Полностью свободный зал.
    pub fn new() -> Self {
        Self {
            booked: [false; TOTAL_SEATS],
        }
    }

    pub fn is_booked(&self, idx: usize) -> bool {
        self.booked[idx]
    }

    /// Пометить место занятым. Индекс обязан быть валидным и свободным,
    /// за проверки отвечает вызывающий.
    pub fn mark_booked(&mut self, idx: usize) {
        self.booked[idx] = true;
    }

    pub fn free_count(&self) -> usize {
        self.booked.iter().filter(|taken| !**taken).count()
    }

    /// Метки всех свободных мест по возрастанию индекса.
    pub fn free_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.free_count());
        for (idx, &taken) in self.booked.iter().enumerate() {
            if !taken {
                labels.push(seat_label_for_index(idx));
            }
        }
        labels
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}
