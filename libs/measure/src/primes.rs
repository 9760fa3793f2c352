//! Prime sequence used to hand out dimensionless differentiators.

use crate::error::{Error, Result};

/// Lazily generated, strictly increasing primes.
///
/// Yields `2`, then tests odd candidates by trial division against the odd
/// primes seen so far, up to the square root of the candidate. The sequence
/// ends when the next candidate would exceed `limit`.
#[derive(Debug, Clone)]
pub struct Primes {
    seen: Vec<u32>,
    next_candidate: Option<u32>,
    limit: u32,
}

impl Primes {
    pub fn new() -> Self {
        Self::up_to(u32::MAX)
    }

    /// Primes no greater than `limit`.
    pub fn up_to(limit: u32) -> Self {
        Self {
            seen: Vec::new(),
            next_candidate: Some(2),
            limit,
        }
    }

    fn is_prime(&self, x: u32) -> bool {
        let x = u64::from(x);
        self.seen
            .iter()
            .map(|&p| u64::from(p))
            .take_while(|p| p * p <= x)
            .all(|p| x % p != 0)
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            let candidate = self.next_candidate?;
            if candidate > self.limit {
                self.next_candidate = None;
                return None;
            }
            self.next_candidate = if candidate == 2 {
                Some(3)
            } else {
                candidate.checked_add(2)
            };
            if candidate == 2 {
                return Some(2);
            }
            if self.is_prime(candidate) {
                self.seen.push(candidate);
                return Some(candidate);
            }
        }
    }
}

/// Hands out each prime exactly once.
#[derive(Debug, Default)]
pub struct PrimeAllocator {
    primes: Primes,
    issued: usize,
}

impl PrimeAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primes(primes: Primes) -> Self {
        Self { primes, issued: 0 }
    }

    /// # Errors
    ///
    /// Returns [`Error::PrimesExhausted`] once the underlying range has no
    /// primes left.
    pub fn next_prime(&mut self) -> Result<u32> {
        let prime = self.primes.next().ok_or(Error::PrimesExhausted)?;
        self.issued += 1;
        tracing::trace!(prime, issued = self.issued, "allocated prime differentiator");
        Ok(prime)
    }

    pub fn issued(&self) -> usize {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes() {
        let primes: Vec<u32> = Primes::new().take(12).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn test_odd_squares_are_rejected() {
        let primes: Vec<u32> = Primes::up_to(130).collect();
        assert!(!primes.contains(&9));
        assert!(!primes.contains(&25));
        assert!(!primes.contains(&121));
        assert_eq!(primes.last(), Some(&127));
    }

    #[test]
    fn test_bounded_sequence_ends() {
        let mut primes = Primes::up_to(10);
        assert_eq!(primes.by_ref().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(primes.next(), None);
        assert_eq!(primes.next(), None);
    }

    #[test]
    fn test_allocator_never_repeats() {
        let mut allocator = PrimeAllocator::new();
        let issued: Vec<u32> = (0..50).map(|_| allocator.next_prime().unwrap()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(allocator.issued(), 50);
        assert_eq!(issued[49], 229);
    }

    #[test]
    fn test_allocator_exhaustion_is_an_error() {
        let mut allocator = PrimeAllocator::with_primes(Primes::up_to(5));
        assert_eq!(allocator.next_prime(), Ok(2));
        assert_eq!(allocator.next_prime(), Ok(3));
        assert_eq!(allocator.next_prime(), Ok(5));
        assert_eq!(allocator.next_prime(), Err(Error::PrimesExhausted));
    }

    #[test]
    fn test_three_digit_primes() {
        let top: Vec<u32> = Primes::new()
            .skip_while(|&p| p < 100)
            .take(3)
            .collect();
        assert_eq!(top, vec![101, 103, 107]);
    }
}
