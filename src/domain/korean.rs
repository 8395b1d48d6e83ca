//! Sino-Korean numeral readings.

const PLACES: [(u32, &str); 4] = [(1000, "천"), (100, "백"), (10, "십"), (1, "")];
const DIGIT_NAMES: [&str; 10] = ["", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];

pub const MAX_READABLE: u32 = 9999;

/// Reads `n` (0..=9999) as a Sino-Korean numeral without spaces.
///
/// A leading 1 is dropped on the tens, hundreds and thousands places, so
/// `213` reads `이백십삼` and `100` reads `백`. Returns `None` above 9999.
pub fn number_to_korean(n: u32) -> Option<String> {
    if n > MAX_READABLE {
        return None;
    }
    if n == 0 {
        return Some("영".to_string());
    }

    let mut reading = String::new();
    let mut remaining = n;
    for (place, place_name) in PLACES {
        let digit = remaining / place;
        remaining %= place;
        if digit == 0 {
            continue;
        }
        if !(place >= 10 && digit == 1) {
            reading.push_str(DIGIT_NAMES[digit as usize]);
        }
        reading.push_str(place_name);
    }

    Some(reading)
}
