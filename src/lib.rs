use std::fmt::{self, Write};

use once_cell::sync::Lazy;

mod error;

pub use error::*;

/// The alphabet used by [`STD`]: the digits `0-9` followed by the lowercase
/// letters `a-z`.
pub const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// A codec built from [`DEFAULT_ALPHABET`], for callers who do not need a
/// custom alphabet.
pub static STD: Lazy<Base36> = Lazy::new(|| Base36::new(DEFAULT_ALPHABET));

const BASE: u64 = 36;

/// An i64 magnitude never takes more than thirteen base36 digits.
const MAX_DIGITS: usize = 13;

/// Powers of 36 from 36^0 through 36^12, the largest power that fits an i64.
static POWERS: [u64; MAX_DIGITS] = [
    1,
    36,
    1296,
    46656,
    1679616,
    60466176,
    2176782336,
    78364164096,
    2821109907456,
    101559956668416,
    3656158440062976,
    131621703842267136,
    4738381338321616896,
];

/// A radix 36 encoding/decoding scheme for i64 values.
///
/// A codec owns an ordered 36-character alphabet and the matching reverse
/// lookup. Both are fixed at construction, so a codec may be shared freely
/// between threads and reused for any number of calls.
pub struct Base36 {
    alphabet: [u8; 36],
    digits: [i8; 256],
}

impl Base36 {
    /// Creates a codec from the provided alphabet.
    ///
    /// Alphabets should be given in a single (lower) case, because
    /// [`decode`](Base36::decode) lowercases its input before lookup.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is not exactly 36 ascii characters or if any
    /// character repeats. Alphabet selection is a configuration decision,
    /// not a runtime input, so this is not an error path.
    pub fn new(alphabet: &str) -> Self {
        assert!(
            alphabet.len() == 36 && alphabet.is_ascii(),
            "alphabet must be exactly 36 ascii characters"
        );

        let mut codec = Base36 {
            alphabet: [0; 36],
            digits: [-1; 256],
        };

        codec.alphabet.copy_from_slice(alphabet.as_bytes());

        for (value, &u) in codec.alphabet.iter().enumerate() {
            assert!(
                codec.digits[u as usize] == -1,
                "alphabet must not contain duplicate characters"
            );
            codec.digits[u as usize] = value as i8;
        }

        codec
    }

    /// Encodes an i64 value to a base36 string.
    ///
    /// Negative values are rendered with a leading `-`. The output is never
    /// empty: zero encodes as the alphabet's first character.
    pub fn encode(&self, n: i64) -> String {
        // Thirteen digits plus an optional sign.
        let mut buf = String::with_capacity(MAX_DIGITS + 1);
        self.encode_into(n, &mut buf)
            .expect("Cannot fail to encode into a string");
        buf
    }

    /// Encodes an i64 value into the provided writer.
    ///
    /// This allows encoded values to be written directly to a `Formatter`
    /// (or any other `fmt::Write`) without an intermediate allocation.
    ///
    /// Note that `i64::MIN` encodes correctly (its magnitude is taken
    /// without overflow), but the result does not round-trip: the decoded
    /// magnitude would exceed `i64::MAX`, so decoding it reports
    /// [`Kind::NumberTooLarge`].
    pub fn encode_into<W: Write>(&self, n: i64, w: &mut W) -> fmt::Result {
        if n < 0 {
            w.write_char('-')?;
        }

        let mut magnitude = n.unsigned_abs();
        if magnitude == 0 {
            return w.write_char(self.alphabet[0] as char);
        }

        // Digits come out least significant first; stack them into the tail
        // of a fixed buffer so they read back most significant first.
        let mut digits = [0u8; MAX_DIGITS];
        let mut idx = MAX_DIGITS;

        while magnitude != 0 {
            idx -= 1;
            digits[idx] = self.alphabet[(magnitude % BASE) as usize];
            magnitude /= BASE;
        }

        for &u in &digits[idx..] {
            w.write_char(u as char)?;
        }

        Ok(())
    }

    /// Decodes a base36 string to the i64 value it represents.
    ///
    /// Decoding is case-insensitive: input is lowercased before lookup. A
    /// leading `-` negates the result.
    pub fn decode<S: AsRef<str>>(&self, input: S) -> Result<i64> {
        let mut input = input.as_ref().as_bytes();
        let mut negative = false;

        if let Some((&b'-', rest)) = input.split_first() {
            negative = true;
            input = rest;
        }

        match input.len() {
            0 => Err(Error::new(
                Kind::EmptyString,
                "encoded input string is empty",
            )),

            // Fourteen or more digits cannot fit an i64 no matter their
            // values, so length alone rejects them.
            n if n > MAX_DIGITS => Err(too_large()),

            n => {
                let mut value: u64 = 0;

                for (idx, &u) in input.iter().enumerate() {
                    let digit = self.digit_value(u).ok_or_else(|| {
                        Error::new(
                            Kind::InvalidCharacter(idx + negative as usize, u),
                            "invalid character in string",
                        )
                    })?;

                    let place = POWERS[n - 1 - idx];
                    value = u64::from(digit)
                        .checked_mul(place)
                        .and_then(|term| value.checked_add(term))
                        .ok_or_else(too_large)?;
                }

                if value > i64::MAX as u64 {
                    return Err(too_large());
                }

                let value = value as i64;
                Ok(if negative { -value } else { value })
            }
        }
    }

    fn digit_value(&self, u: u8) -> Option<u8> {
        match self.digits[u.to_ascii_lowercase() as usize] {
            -1 => None,
            digit => Some(digit as u8),
        }
    }
}

fn too_large() -> Error {
    Error::new(
        Kind::NumberTooLarge,
        "value represented by string exceeds max i64 value",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(n: i64) -> i64 {
        STD.decode(STD.encode(n)).unwrap()
    }

    #[test]
    fn encodes_zero() {
        assert_eq!("0", STD.encode(0));
    }

    #[test]
    fn encodes_boundary_symbols() {
        assert_eq!("a", STD.encode(10));
        assert_eq!("z", STD.encode(35));
        assert_eq!("10", STD.encode(36));
    }

    #[test]
    fn encodes_known_values() {
        assert_eq!("12ufj", STD.encode(1812367));
        assert_eq!("kf12oi", STD.encode(1234567890));
        assert_eq!("1y2p0ij32e8e7", STD.encode(i64::MAX));
    }

    #[test]
    fn encodes_negative_values() {
        assert_eq!("-12ufj", STD.encode(-1812367));
        assert_eq!("-1y2p0ij32e8e7", STD.encode(-i64::MAX));
    }

    #[test]
    fn round_trips_interesting_values() {
        for &n in &[0, 1, -1, 35, 36, 1812367, -1812367, i64::MAX, -i64::MAX] {
            assert_eq!(n, round_trip(n));
        }
    }

    #[test]
    fn decodes_uppercase_input() {
        assert_eq!(1812367, STD.decode("12UFJ").unwrap());
        assert_eq!(-1812367, STD.decode("-12uFj").unwrap());
    }

    #[test]
    fn min_value_encodes_but_does_not_round_trip() {
        let encoded = STD.encode(i64::MIN);
        assert_eq!("-1y2p0ij32e8e8", encoded);
        assert_eq!(
            Kind::NumberTooLarge,
            STD.decode(encoded).unwrap_err().kind()
        );
    }

    #[test]
    fn rejects_values_just_past_max() {
        let err = STD.decode("1y2p0ij32e8e8").unwrap_err();
        assert_eq!(Kind::NumberTooLarge, err.kind());

        let err = STD.decode("-1y2p0ij32e8e8").unwrap_err();
        assert_eq!(Kind::NumberTooLarge, err.kind());
    }

    #[test]
    fn rejects_thirteen_digit_overflow() {
        // Wraps past u64 range as well as i64.
        let err = STD.decode("zzzzzzzzzzzzz").unwrap_err();
        assert_eq!(Kind::NumberTooLarge, err.kind());
    }

    #[test]
    fn rejects_overlong_input() {
        let err = STD.decode("11y2p0ij32e8e8").unwrap_err();
        assert_eq!(Kind::NumberTooLarge, err.kind());

        // Length alone is disqualifying.
        let err = STD.decode("00000000000000").unwrap_err();
        assert_eq!(Kind::NumberTooLarge, err.kind());
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = STD.decode("abc123!").unwrap_err();
        assert_eq!(Kind::InvalidCharacter(6, b'!'), err.kind());
    }

    #[test]
    fn invalid_character_offset_accounts_for_sign() {
        let err = STD.decode("-a_c").unwrap_err();
        assert_eq!(Kind::InvalidCharacter(2, b'_'), err.kind());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Kind::EmptyString, STD.decode("").unwrap_err().kind());
        assert_eq!(Kind::EmptyString, STD.decode("-").unwrap_err().kind());
    }

    #[test]
    fn custom_alphabet_round_trips() {
        let codec = Base36::new("abcdefghijklmnopqrstuvwxyz0123456789");

        assert_eq!("upbcys", codec.encode(1234567890));
        assert_eq!(1234567890, codec.decode("upbcys").unwrap());
        assert_ne!(STD.encode(1234567890), codec.encode(1234567890));
    }

    #[test]
    fn encode_into_formatter() {
        use std::fmt::Display;

        struct Id(i64);

        impl Display for Id {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                STD.encode_into(self.0, f)
            }
        }

        assert_eq!("kf12oi", format!("{}", Id(1234567890)));
    }

    #[test]
    #[should_panic(expected = "36 ascii characters")]
    fn rejects_short_alphabet() {
        Base36::new("0123456789");
    }

    #[test]
    #[should_panic(expected = "36 ascii characters")]
    fn rejects_long_alphabet() {
        Base36::new("0123456789abcdefghijklmnopqrstuvwxyzABC");
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn rejects_duplicate_characters() {
        Base36::new("0123456789abcdefghijklmnopqrstuvwxyy");
    }
}
