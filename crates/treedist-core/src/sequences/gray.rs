use std::collections::HashSet;
use std::hash::Hash;

use crate::bail_invalid;
use crate::error::Result;

/// Largest supported bit width; the whole sequence is held in memory
pub const MAX_BITS: u32 = 32;

/// The `2^bits`-entry reflected binary Gray code sequence.
///
/// Consecutive entries differ in exactly one bit; entry `i` is `i ^ (i >> 1)`.
pub fn gray_code(bits: u32) -> Result<Vec<u64>> {
    if bits > MAX_BITS {
        bail_invalid!("bit count", format!("{bits} (maximum {MAX_BITS})"));
    }
    let size = 1u64 << bits;
    let mut codes: Vec<u64> = Vec::new();
    let reserve = usize::try_from(size)
        .ok()
        .and_then(|len| codes.try_reserve_exact(len).ok());
    if reserve.is_none() {
        bail_invalid!("bit count", format!("{bits} (sequence does not fit in memory)"));
    }
    codes.extend((0..size).map(|i| i ^ (i >> 1)));
    Ok(codes)
}

/// Number of bit positions where `a` and `b` differ
pub fn count_different_bits(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Values in `0..=max` that differ from `value` in exactly one bit
pub fn one_bit_neighbors(value: u64, max: u64) -> Vec<u64> {
    (0..=max)
        .filter(|&candidate| count_different_bits(value, candidate) == 1)
        .collect()
}

/// First element that appears a second time, scanning left to right
pub fn find_first_duplicate<T>(items: &[T]) -> Option<&T>
where
    T: Eq + Hash,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bits() {
        assert_eq!(gray_code(0).unwrap(), vec![0]);
    }

    #[test]
    fn test_one_bit() {
        assert_eq!(gray_code(1).unwrap(), vec![0b0, 0b1]);
    }

    #[test]
    fn test_two_bits() {
        assert_eq!(gray_code(2).unwrap(), vec![0b00, 0b01, 0b11, 0b10]);
    }

    #[test]
    fn test_ten_bits_distinct_and_adjacent() {
        let codes = gray_code(10).unwrap();
        assert_eq!(codes.len(), 1024);
        assert_eq!(find_first_duplicate(&codes), None);
        for pair in codes.windows(2) {
            assert_eq!(count_different_bits(pair[0], pair[1]), 1);
        }
        assert_eq!(count_different_bits(codes[0], codes[1023]), 1);
    }

    #[test]
    fn test_too_many_bits() {
        let err = gray_code(33).unwrap_err();
        assert_eq!(err.to_string(), "invalid bit count: 33 (maximum 32)");
        assert!(matches!(
            gray_code(63).unwrap_err(),
            crate::TreedistError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_widest_codes_stay_in_range() {
        let codes = gray_code(16).unwrap();
        assert_eq!(codes.len(), 1 << 16);
        assert_eq!(codes.last(), Some(&(1 << 15)));
    }

    #[test]
    fn test_count_different_bits() {
        assert_eq!(count_different_bits(0b1010, 0b1010), 0);
        assert_eq!(count_different_bits(0b1010, 0b0101), 4);
        assert_eq!(count_different_bits(0, 0b1000), 1);
    }

    #[test]
    fn test_one_bit_neighbors() {
        assert_eq!(one_bit_neighbors(0b101, 7), vec![0b001, 0b100, 0b111]);
        assert_eq!(one_bit_neighbors(0, 3), vec![1, 2]);
        assert!(one_bit_neighbors(0, 0).is_empty());
    }

    #[test]
    fn test_find_first_duplicate() {
        assert_eq!(find_first_duplicate(&[3, 1, 4, 1, 5, 3]), Some(&1));
        assert_eq!(find_first_duplicate(&["a", "b"]), None);
        assert_eq!(find_first_duplicate::<u8>(&[]), None);
    }
}
