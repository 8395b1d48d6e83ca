use rand::rngs::StdRng;
use rand::SeedableRng;
use worksheet_gen::core::generator::generate_reading_problem;
use worksheet_gen::{number_to_korean, Digits};

#[test]
fn test_documented_readings() {
    assert_eq!(number_to_korean(213).as_deref(), Some("이백십삼"));
    assert_eq!(number_to_korean(100).as_deref(), Some("백"));
    assert_eq!(number_to_korean(10).as_deref(), Some("십"));
    assert_eq!(number_to_korean(101).as_deref(), Some("백일"));
}

#[test]
fn test_reading_never_contains_leading_il_on_tens() {
    for n in 10..=9999u32 {
        let reading = number_to_korean(n).unwrap();
        assert!(!reading.contains("일십"), "{} -> {}", n, reading);
        assert!(!reading.contains("일백"), "{} -> {}", n, reading);
        assert!(!reading.starts_with("일천"), "{} -> {}", n, reading);
        assert!(!reading.contains('영'), "{} -> {}", n, reading);
    }
}

#[test]
fn test_one_digit_problems() {
    let mut rng = StdRng::seed_from_u64(0);
    let digits = Digits::new(1).unwrap();
    for _ in 0..50 {
        let problem = generate_reading_problem(digits, &mut rng);
        assert!((1..=9).contains(&problem.value));
        assert_eq!(problem.reading.chars().count(), 1);
    }
}
