//! VIN Check Digit Computation
//!
//! Weighted-sum-mod-11 over the standard transliteration table. Position 8
//! holds the check digit itself and does not contribute to the sum; a
//! remainder of 10 is written as `X`.

/// Number of characters in a VIN
pub const VIN_LENGTH: usize = 17;

/// Index of the check digit (9th character)
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Per-position multipliers
pub const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Transliterate a VIN character to its checksum value.
///
/// Digits map to themselves. Letters cycle through 1-9 in alphabet order,
/// with `I`, `O` and `Q` left out of the table entirely. Only uppercase
/// input is recognised.
pub const fn transliterate(c: char) -> Option<u32> {
    let value = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}

/// Whether `c` belongs to the VIN alphabet (`0-9A-Z` minus `I`, `O`, `Q`)
pub const fn is_vin_char(c: char) -> bool {
    transliterate(c).is_some()
}

/// Encode a mod-11 remainder as a check digit character
pub fn check_digit_for(remainder: u32) -> char {
    match char::from_digit(remainder % 11, 10) {
        Some(digit) => digit,
        None => 'X',
    }
}

/// Compute the expected check digit for a normalized 17-character VIN.
///
/// The character at position 8 does not contribute to the sum, so any VIN
/// character works as a placeholder there. Returns `None` when the length is
/// wrong or any character has no transliteration value.
pub fn compute_check_digit(vin: &str) -> Option<char> {
    if vin.len() != VIN_LENGTH {
        return None;
    }

    let mut sum = 0u32;
    for (i, c) in vin.chars().enumerate() {
        let value = transliterate(c)?;
        if i != CHECK_DIGIT_INDEX {
            sum += value * WEIGHTS[i];
        }
    }

    Some(check_digit_for(sum % 11))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliteration_table() {
        let expected = [
            ('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 6), ('G', 7), ('H', 8),
            ('J', 1), ('K', 2), ('L', 3), ('M', 4), ('N', 5), ('P', 7), ('R', 9),
            ('S', 2), ('T', 3), ('U', 4), ('V', 5), ('W', 6), ('X', 7), ('Y', 8), ('Z', 9),
        ];
        for (c, v) in expected {
            assert_eq!(transliterate(c), Some(v), "letter {}", c);
        }
        for d in 0..=9u32 {
            let c = char::from_digit(d, 10).unwrap();
            assert_eq!(transliterate(c), Some(d));
        }
    }

    #[test]
    fn test_excluded_letters_have_no_value() {
        for c in ['I', 'O', 'Q', 'i', 'a', '-', ' ', 'é'] {
            assert_eq!(transliterate(c), None, "char {:?}", c);
            assert!(!is_vin_char(c));
        }
    }

    #[test]
    fn test_alphabet_size() {
        let count = ('0'..='9').chain('A'..='Z').filter(|&c| is_vin_char(c)).count();
        assert_eq!(count, 33);
    }

    #[test]
    fn test_check_digit_weight_is_zero() {
        assert_eq!(WEIGHTS[CHECK_DIGIT_INDEX], 0);
        assert_eq!(WEIGHTS.len(), VIN_LENGTH);
    }

    #[test]
    fn test_check_digit_encoding() {
        assert_eq!(check_digit_for(0), '0');
        assert_eq!(check_digit_for(7), '7');
        assert_eq!(check_digit_for(10), 'X');
    }

    #[test]
    fn test_compute_known_vectors() {
        assert_eq!(compute_check_digit("1HGCM82633A004352"), Some('3'));
        assert_eq!(compute_check_digit("1M8GDM9AXKP042788"), Some('X'));
        assert_eq!(compute_check_digit("JH4TB2H26CC000000"), Some('6'));
    }

    #[test]
    fn test_compute_with_placeholder_check_digit() {
        assert_eq!(compute_check_digit("1HGCM826_3A004352"), None);
        assert_eq!(compute_check_digit("1HGCM826X3A004352"), Some('3'));
        assert_eq!(compute_check_digit("1HGCM82603A004352"), Some('3'));
    }

    #[test]
    fn test_compute_rejects_bad_input() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("1HGCM82633A00435"), None);
        assert_eq!(compute_check_digit("1HGCM82633A00435Q"), None);
        assert_eq!(compute_check_digit("1hgcm82633a004352"), None);
    }
}
