//! Rolling functions. Every function takes the generator explicitly so a
//! seeded source can stand in for the thread RNG under test.

use super::types::DiceExpr;
use crate::core::constants::BASE_ATTRIBUTE_VALUE;
use rand::Rng;

/// Rolls a parsed expression: each die uniform in `[1, sides]`, plus the
/// modifier. The total saturates at the `i32` bounds.
///
/// Parsed expressions are bounded by `MAX_DICE_COUNT`; an expression built
/// by hand rolls every die it names.
pub fn roll_expr<R: Rng + ?Sized>(expr: &DiceExpr, rng: &mut R) -> i32 {
    let dice: i64 = expr
        .terms
        .iter()
        .filter(|term| term.sides > 0)
        .flat_map(|term| std::iter::repeat(term.sides).take(term.count as usize))
        .map(|sides| rng.gen_range(1..=sides) as i64)
        .sum();
    (dice + expr.modifier as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Rolls a dice string. Malformed input yields 0 and a warning.
pub fn roll<R: Rng + ?Sized>(expr: &str, rng: &mut R) -> i32 {
    match expr.parse::<DiceExpr>() {
        Ok(parsed) => roll_expr(&parsed, rng),
        Err(e) => {
            tracing::warn!(expr, error = %e, "malformed dice expression, rolling 0");
            0
        }
    }
}

/// Upper bound of a dice string (`count * sides + modifier` per term).
/// Malformed input yields 0.
pub fn max_value(expr: &str) -> i32 {
    match expr.parse::<DiceExpr>() {
        Ok(parsed) => parsed.max(),
        Err(e) => {
            tracing::warn!(expr, error = %e, "malformed dice expression, max is 0");
            0
        }
    }
}

/// A single d20.
pub fn d20<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(1..=20)
}

/// Four d6, lowest discarded.
pub fn attribute_roll<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    let mut rolls: [i32; 4] = [0; 4];
    for r in rolls.iter_mut() {
        *r = rng.gen_range(1..=6);
    }
    rolls.sort_unstable();
    rolls[1..].iter().sum()
}

/// `(score - 10) / 2`, rounded toward negative infinity.
pub fn modifier(score: i32) -> i32 {
    (score - BASE_ATTRIBUTE_VALUE).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..1000 {
            let value = roll("2d6+1", &mut rng);
            assert!((3..=13).contains(&value), "2d6+1 rolled {}", value);
        }
    }

    #[test]
    fn test_roll_covers_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let results: Vec<i32> = (0..2000).map(|_| roll("1d4", &mut rng)).collect();
        assert!(results.contains(&1));
        assert!(results.contains(&4));
    }

    #[test]
    fn test_roll_multi_term() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            let value = roll("1d6+1d2+1d6", &mut rng);
            assert!((3..=14).contains(&value));
        }
    }

    #[test]
    fn test_malformed_rolls_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(roll("banana", &mut rng), 0);
        assert_eq!(roll("", &mut rng), 0);
        assert_eq!(roll("2d", &mut rng), 0);
    }

    #[test]
    fn test_out_of_range_notation_rolls_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        assert_eq!(max_value("100000d100000"), 0);
        for _ in 0..100 {
            assert_eq!(roll("1d6+2147483647+1", &mut rng), 0);
            assert_eq!(roll("1d4294967295", &mut rng), 0);
        }
    }

    #[test]
    fn test_largest_notation_rolls_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..20 {
            let value = roll("1000d1000", &mut rng);
            assert!((1000..=1_000_000).contains(&value));
        }
    }

    #[test]
    fn test_roll_expr_saturates() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let expr = DiceExpr::new(2, 6, i32::MAX);
        assert_eq!(roll_expr(&expr, &mut rng), i32::MAX);
        let zero_sided = DiceExpr::new(3, 0, 4);
        assert_eq!(roll_expr(&zero_sided, &mut rng), 4);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(max_value("2d6+1"), 13);
        assert_eq!(max_value("1d8-1"), 7);
        assert_eq!(max_value("1d6+1d2"), 8);
        assert_eq!(max_value("nope"), 0);
    }

    #[test]
    fn test_attribute_roll_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..1000 {
            let value = attribute_roll(&mut rng);
            assert!((3..=18).contains(&value));
        }
    }

    #[test]
    fn test_d20_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            assert!((1..=20).contains(&d20(&mut rng)));
        }
    }

    #[test]
    fn test_modifier_floors() {
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(20), 5);
        assert_eq!(modifier(3), -4);
        assert_eq!(modifier(1), -5);
    }
}
