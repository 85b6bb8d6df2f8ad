//! Outer-totalistic rules as birth/survival neighbour masks.

use crate::common::LifeError;
use core::fmt;
use core::str::FromStr;

/// Bit `n` set means "applies with exactly `n` live neighbours".
type NeighborMask = u16;

const MAX_NEIGHBORS: u32 = 8;

/// A Life-like rule in `B/S` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    birth: NeighborMask,
    survival: NeighborMask,
}

impl Rule {
    /// Conway's Game of Life, B3/S23.
    pub const CONWAY: Rule = Rule {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Builds a rule from neighbour counts that cause birth and survival.
    /// Counts above 8 are rejected.
    pub fn new(birth: &[u32], survival: &[u32]) -> Result<Self, LifeError> {
        Ok(Rule {
            birth: mask_of(birth.iter().copied())?,
            survival: mask_of(survival.iter().copied())?,
        })
    }

    /// Next state of a cell given its current state and neighbour count.
    #[inline]
    pub fn next(&self, alive: bool, neighbors: u32) -> bool {
        let mask = if alive { self.survival } else { self.birth };
        neighbors <= MAX_NEIGHBORS && (mask >> neighbors) & 1 != 0
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

fn mask_of<I: Iterator<Item = u32>>(counts: I) -> Result<NeighborMask, LifeError> {
    let mut mask = 0;
    for n in counts {
        if n > MAX_NEIGHBORS {
            return Err(LifeError::InvalidRule);
        }
        mask |= 1 << n;
    }
    Ok(mask)
}

fn parse_counts(digits: &str) -> Result<NeighborMask, LifeError> {
    let mut mask = 0;
    for c in digits.chars() {
        let n = c.to_digit(10).ok_or(LifeError::InvalidRule)?;
        mask |= mask_of(core::iter::once(n))?;
    }
    Ok(mask)
}

impl FromStr for Rule {
    type Err = LifeError;

    /// Parses `B3/S23` notation, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (b, s) = s.trim().split_once('/').ok_or(LifeError::InvalidRule)?;
        let birth = b
            .strip_prefix(&['B', 'b'][..])
            .ok_or(LifeError::InvalidRule)?;
        let survival = s
            .strip_prefix(&['S', 's'][..])
            .ok_or(LifeError::InvalidRule)?;
        Ok(Rule {
            birth: parse_counts(birth)?,
            survival: parse_counts(survival)?,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in 0..=MAX_NEIGHBORS {
            if (self.birth >> n) & 1 != 0 {
                write!(f, "{}", n)?;
            }
        }
        write!(f, "/S")?;
        for n in 0..=MAX_NEIGHBORS {
            if (self.survival >> n) & 1 != 0 {
                write!(f, "{}", n)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_rule_matches_life() {
        let r = Rule::CONWAY;
        assert!(!r.next(true, 1));
        assert!(r.next(true, 2));
        assert!(r.next(true, 3));
        assert!(!r.next(true, 4));
        assert!(r.next(false, 3));
        assert!(!r.next(false, 2));
        assert!(!r.next(false, 6));
    }

    #[test]
    fn parse_and_display() {
        let r: Rule = "B3/S23".parse().unwrap();
        assert_eq!(r, Rule::CONWAY);
        let highlife: Rule = "b36/s23".parse().unwrap();
        assert!(highlife.next(false, 6));
        assert_eq!(highlife.to_string(), "B36/S23");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!("B3S23".parse::<Rule>(), Err(LifeError::InvalidRule));
        assert_eq!("B9/S23".parse::<Rule>(), Err(LifeError::InvalidRule));
        assert_eq!("X3/S23".parse::<Rule>(), Err(LifeError::InvalidRule));
        assert_eq!("B3/S2x".parse::<Rule>(), Err(LifeError::InvalidRule));
    }

    #[test]
    fn new_rejects_large_counts() {
        assert!(Rule::new(&[3], &[2, 3]).is_ok());
        assert_eq!(Rule::new(&[9], &[]), Err(LifeError::InvalidRule));
    }
}
