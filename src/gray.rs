//! Reflected binary (Gray) codes used to label the axes of a map.

use crate::tools::to_bits;
use crate::KmapError;

/// Largest supported code width.
pub const MAX_WIDTH: usize = 24;

/// Gray codeword at a given position of the sequence.
///
/// ```
/// # use karnaugh::gray_index;
/// let codes: Vec<usize> = (0..4).map(gray_index).collect();
/// assert_eq!(codes, vec![0b00, 0b01, 0b11, 0b10]);
/// ```
pub const fn gray_index(position: usize) -> usize {
    position ^ (position >> 1)
}

/// Position of a codeword in the Gray sequence: inverse of [gray_index].
///
/// The position is the prefix XOR of the codeword bits, it does not depend on the width of the code.
///
/// ```
/// # use karnaugh::{gray_index, gray_rank};
/// assert_eq!(gray_rank(0b10), 3);
/// assert_eq!(gray_rank(gray_index(42)), 42);
/// ```
pub const fn gray_rank(codeword: usize) -> usize {
    let mut position = codeword;
    let mut shift = codeword >> 1;
    while shift != 0 {
        position ^= shift;
        shift >>= 1;
    }
    position
}

/// The labels of the Gray code with a given width.
///
/// ```
/// # use karnaugh::gray_code;
/// # fn main() -> Result<(), karnaugh::KmapError> {
/// assert_eq!(gray_code(0)?, vec![""]);
/// assert_eq!(gray_code(2)?, vec!["00", "01", "11", "10"]);
/// # Ok(())
/// # }
/// ```
pub fn gray_code(width: usize) -> Result<Vec<String>, KmapError> {
    Ok(GrayCode::new(width)?.labels())
}

/// A Gray code of fixed width.
///
/// The sequence contains all codewords of the given width, consecutive codewords (including the last and the first)
/// differ by exactly one bit. The codeword at position ```i``` is ```i ^ (i >> 1)```, which gives the same
/// sequence as the recursive reflection: prefix the code of width ```k-1``` with 0, then its mirror with 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GrayCode {
    width: usize,
}

impl GrayCode {
    pub fn new(width: usize) -> Result<Self, KmapError> {
        if width > MAX_WIDTH {
            return Err(KmapError::SizeLimitExceeded {
                count: width,
                limit: MAX_WIDTH,
            });
        }
        Ok(Self { width })
    }

    /// Number of bits in each codeword
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of codewords in the sequence
    pub fn len(&self) -> usize {
        1 << self.width
    }

    /// A Gray code is never empty: width 0 contains the empty codeword
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Codeword at the given position
    pub fn codeword(&self, position: usize) -> usize {
        gray_index(position)
    }

    /// Position of a codeword in this sequence
    pub fn position(&self, codeword: usize) -> usize {
        gray_rank(codeword)
    }

    /// Binary label of the codeword at the given position
    pub fn label(&self, position: usize) -> String {
        to_bits(gray_index(position), self.width)
    }

    /// Iterate over all codewords in sequence order
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        (0..self.len()).map(gray_index)
    }

    /// All labels in sequence order
    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).map(|p| self.label(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::gray::*;
    use crate::tools::hamming_distance;
    use proptest::prelude::*;

    fn reflected(width: usize) -> Vec<String> {
        if width == 0 {
            return vec![String::new()];
        }
        let half = reflected(width - 1);
        let mut result: Vec<String> = half.iter().map(|c| format!("0{}", c)).collect();
        result.extend(half.iter().rev().map(|c| format!("1{}", c)));
        result
    }

    #[test]
    fn same_as_reflection() -> Result<(), KmapError> {
        for width in 0..10 {
            assert_eq!(gray_code(width)?, reflected(width));
        }
        Ok(())
    }

    #[test]
    fn small_codes() -> Result<(), KmapError> {
        assert_eq!(gray_code(0)?, vec![""]);
        assert_eq!(gray_code(1)?, vec!["0", "1"]);
        assert_eq!(
            gray_code(3)?,
            vec!["000", "001", "011", "010", "110", "111", "101", "100"]
        );
        Ok(())
    }

    #[test]
    fn width_limit() {
        assert!(GrayCode::new(MAX_WIDTH).is_ok());
        assert_eq!(
            GrayCode::new(MAX_WIDTH + 1),
            Err(KmapError::SizeLimitExceeded {
                count: MAX_WIDTH + 1,
                limit: MAX_WIDTH
            })
        );
    }

    proptest! {
        #[test]
        fn prop_length(width in 0usize..12) {
            prop_assert_eq!(gray_code(width).unwrap().len(), 1 << width);
        }

        #[test]
        fn prop_cyclic_adjacency(width in 1usize..12) {
            let labels = gray_code(width).unwrap();
            for i in 0..labels.len() {
                let next = &labels[(i + 1) % labels.len()];
                prop_assert_eq!(hamming_distance(&labels[i], next), 1);
            }
        }

        #[test]
        fn prop_rank_inverts_index(position in 0usize..(1 << 20)) {
            prop_assert_eq!(gray_rank(gray_index(position)), position);
            prop_assert_eq!(gray_index(gray_rank(position)), position);
        }
    }
}
