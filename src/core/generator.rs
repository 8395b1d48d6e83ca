use crate::domain::korean::number_to_korean;
use crate::domain::model::{AdditionProblem, Difficulty, Digits, ReadingProblem};
use rand::Rng;

/// 個位數相加的上限（第 1 級）
pub const EASY_ONES_SUM_LIMIT: u32 = 10;

struct TierRule {
    min: u32,
    max: u32,
    allow_three: bool,
    limit_ones_sum: bool,
}

fn tier_rule(difficulty: Difficulty) -> TierRule {
    match difficulty.level() {
        1 => TierRule {
            min: 1,
            max: 50,
            allow_three: false,
            limit_ones_sum: true,
        },
        2 => TierRule {
            min: 1,
            max: 100,
            allow_three: false,
            limit_ones_sum: false,
        },
        3 => TierRule {
            min: 1,
            max: 100,
            allow_three: true,
            limit_ones_sum: false,
        },
        _ => TierRule {
            min: 100,
            max: 999,
            allow_three: true,
            limit_ones_sum: false,
        },
    }
}

pub fn generate_addition_problem<R: Rng + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> AdditionProblem {
    let rule = tier_rule(difficulty);
    let count = if rule.allow_three && rng.gen_bool(0.5) { 3 } else { 2 };

    loop {
        let addends: Vec<u32> = (0..count)
            .map(|_| rng.gen_range(rule.min..=rule.max))
            .collect();

        if rule.limit_ones_sum && ones_digit_sum(&addends) > EASY_ONES_SUM_LIMIT {
            continue;
        }

        return AdditionProblem::new(addends);
    }
}

pub fn ones_digit_sum(numbers: &[u32]) -> u32 {
    numbers.iter().map(|n| n % 10).sum()
}

pub fn generate_reading_problem<R: Rng + ?Sized>(digits: Digits, rng: &mut R) -> ReadingProblem {
    let (low, high) = digits.bounds();
    let value = rng.gen_range(low..=high);
    // bounds() 最多四位數，必定可讀
    let reading = number_to_korean(value).unwrap_or_default();
    ReadingProblem { value, reading }
}

pub fn generate_batch<T, R, F>(count: usize, rng: &mut R, mut generate: F) -> Vec<T>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    (0..count).map(|_| generate(rng)).collect()
}
