use crate::core::constants::{MAX_DICE_COUNT, MAX_DIE_SIDES};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Invalid dice notation: {0}")]
    InvalidNotation(String),
    #[error("Invalid die size: {0}")]
    InvalidDieSize(u32),
    #[error("Negative dice terms are not supported: {0}")]
    NegativeDice(String),
    #[error("No dice specified")]
    NoDice,
}

/// One `NdS` group inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceTerm {
    pub count: u32,
    pub sides: u32,
}

impl DiceTerm {
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    pub fn max(&self) -> i32 {
        clamp_i32((self.count as i64).saturating_mul(self.sides as i64))
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// A parsed expression such as `2d6+1` or `1d6+1d2+1d6`.
///
/// Every expression holds at least one dice term; flat numbers fold into
/// `modifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceExpr {
    pub terms: Vec<DiceTerm>,
    pub modifier: i32,
}

impl DiceExpr {
    pub fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Self {
            terms: vec![DiceTerm::new(count, sides)],
            modifier,
        }
    }

    /// Appends another dice group, e.g. the extra die an enhanced weapon gains.
    pub fn with_term(mut self, count: u32, sides: u32) -> Self {
        self.terms.push(DiceTerm::new(count, sides));
        self
    }

    /// Smallest possible total, saturated to the `i32` range.
    pub fn min(&self) -> i32 {
        clamp_i32(self.wide_min())
    }

    /// Largest possible total, saturated to the `i32` range.
    pub fn max(&self) -> i32 {
        clamp_i32(self.wide_max())
    }

    fn wide_min(&self) -> i64 {
        self.terms
            .iter()
            .fold(self.modifier as i64, |acc, t| acc.saturating_add(t.count as i64))
    }

    fn wide_max(&self) -> i64 {
        self.terms.iter().fold(self.modifier as i64, |acc, t| {
            acc.saturating_add((t.count as i64).saturating_mul(t.sides as i64))
        })
    }

    fn push_component(
        component: &str,
        negative: bool,
        terms: &mut Vec<DiceTerm>,
        modifier: &mut i32,
        notation: &str,
    ) -> Result<(), DiceError> {
        if component.is_empty() {
            return Err(DiceError::InvalidNotation(notation.to_string()));
        }

        match component.split_once('d') {
            Some((count_str, sides_str)) => {
                if negative {
                    return Err(DiceError::NegativeDice(notation.to_string()));
                }
                let count: u32 = count_str
                    .parse()
                    .map_err(|_| DiceError::InvalidNotation(notation.to_string()))?;
                let sides: u32 = sides_str
                    .parse()
                    .map_err(|_| DiceError::InvalidNotation(notation.to_string()))?;
                if count == 0 || count > MAX_DICE_COUNT {
                    return Err(DiceError::InvalidNotation(notation.to_string()));
                }
                if sides == 0 || sides > MAX_DIE_SIDES {
                    return Err(DiceError::InvalidDieSize(sides));
                }
                terms.push(DiceTerm::new(count, sides));
            }
            None => {
                let value: i32 = component
                    .parse()
                    .map_err(|_| DiceError::InvalidNotation(notation.to_string()))?;
                let signed = if negative { value.checked_neg() } else { Some(value) };
                *modifier = signed
                    .and_then(|v| modifier.checked_add(v))
                    .ok_or_else(|| DiceError::InvalidNotation(notation.to_string()))?;
            }
        }
        Ok(())
    }
}

impl FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim().to_lowercase();
        if notation.is_empty() {
            return Err(DiceError::NoDice);
        }

        let mut terms = Vec::new();
        let mut modifier = 0;
        let mut current = String::new();
        let mut negative = false;

        for ch in notation.chars() {
            match ch {
                '+' | '-' => {
                    Self::push_component(&current, negative, &mut terms, &mut modifier, &notation)?;
                    current.clear();
                    negative = ch == '-';
                }
                c if c.is_ascii_digit() || c == 'd' => current.push(c),
                c if c.is_whitespace() => {}
                _ => return Err(DiceError::InvalidNotation(notation.clone())),
            }
        }
        Self::push_component(&current, negative, &mut terms, &mut modifier, &notation)?;

        if terms.is_empty() {
            return Err(DiceError::NoDice);
        }

        let expr = DiceExpr { terms, modifier };
        let range = i32::MIN as i64..=i32::MAX as i64;
        if !range.contains(&expr.wide_min()) || !range.contains(&expr.wide_max()) {
            return Err(DiceError::InvalidNotation(notation));
        }
        Ok(expr)
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", term)?;
        }
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let expr: DiceExpr = "2d6".parse().unwrap();
        assert_eq!(expr.terms, vec![DiceTerm::new(2, 6)]);
        assert_eq!(expr.modifier, 0);
    }

    #[test]
    fn test_parse_with_modifiers() {
        let plus: DiceExpr = "1d20+5".parse().unwrap();
        assert_eq!(plus.modifier, 5);

        let minus: DiceExpr = "3d8-2".parse().unwrap();
        assert_eq!(minus.terms, vec![DiceTerm::new(3, 8)]);
        assert_eq!(minus.modifier, -2);
    }

    #[test]
    fn test_parse_multiple_terms() {
        let expr: DiceExpr = "1d6+1d2+1d6".parse().unwrap();
        assert_eq!(expr.terms.len(), 3);
        assert_eq!(expr.terms[1], DiceTerm::new(1, 2));
        assert_eq!(expr.max(), 14);
        assert_eq!(expr.min(), 3);
    }

    #[test]
    fn test_parse_whitespace_and_case() {
        let expr: DiceExpr = "  2D10 + 3 ".parse().unwrap();
        assert_eq!(expr, DiceExpr::new(2, 10, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<DiceExpr>(), Err(DiceError::NoDice));
        assert_eq!("5".parse::<DiceExpr>(), Err(DiceError::NoDice));
        assert_eq!("1d0".parse::<DiceExpr>(), Err(DiceError::InvalidDieSize(0)));
        assert!(matches!(
            "abc".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert!(matches!(
            "1d6+".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert!(matches!(
            "1d6-1d4".parse::<DiceExpr>(),
            Err(DiceError::NegativeDice(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            "100000d100000".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert_eq!(
            "1d4294967295".parse::<DiceExpr>(),
            Err(DiceError::InvalidDieSize(4294967295))
        );
        assert_eq!("1d1001".parse::<DiceExpr>(), Err(DiceError::InvalidDieSize(1001)));
        assert!(matches!(
            "1d6+2147483647+1".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert!(matches!(
            "1d6+2147483647".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
        assert!(matches!(
            "1d6-2147483648".parse::<DiceExpr>(),
            Err(DiceError::InvalidNotation(_))
        ));
    }

    #[test]
    fn test_parse_accepts_limits() {
        let expr: DiceExpr = "1000d1000".parse().unwrap();
        assert_eq!(expr.max(), 1_000_000);
        assert_eq!(expr.min(), 1000);
        let negative: DiceExpr = "1d6-2147483000".parse().unwrap();
        assert_eq!(negative.min(), 1 - 2_147_483_000);
    }

    #[test]
    fn test_constructed_bounds_saturate() {
        let huge = DiceExpr::new(u32::MAX, u32::MAX, i32::MAX);
        assert_eq!(huge.max(), i32::MAX);
        assert_eq!(DiceTerm::new(100_000, 100_000).max(), i32::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(DiceExpr::new(2, 6, 1).to_string(), "2d6+1");
        assert_eq!(DiceExpr::new(1, 8, -1).to_string(), "1d8-1");
        assert_eq!(DiceExpr::new(1, 6, 0).with_term(1, 2).to_string(), "1d6+1d2");
    }
}
