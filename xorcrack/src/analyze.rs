pub mod single_byte {
    use std::fmt::{self, Display};

    use crate::{encrypt::xor, error::AnalysisError, score::Scorer};

    /// Winning key byte for a buffer, together with the score that won and
    /// the decode it implies.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SingleByteKey {
        pub key: u8,
        pub score: u64,
        pub plaintext: Vec<u8>,
    }

    impl Display for SingleByteKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Key: {}  Score: {}", self.key, self.score)
        }
    }

    /// Tries every key byte from 1 to 255 against the buffer and returns the
    /// best-scoring decode. Key 0 is skipped since it never changes the
    /// buffer.
    ///
    /// A candidate replaces the incumbent only on a strictly greater score,
    /// so among equal scores the lowest key byte wins.
    pub fn break_single_byte<S: Scorer>(
        bytes: &[u8],
        scorer: &S,
    ) -> Result<SingleByteKey, AnalysisError> {
        break_single_byte_above(bytes, scorer, 0)
    }

    /// Like [`break_single_byte`], but a candidate must strictly exceed
    /// `floor` to count at all. Threading the previous best score back in as
    /// the floor lets a caller scan many buffers and hear only about global
    /// improvements. If nothing beats the floor the outcome is
    /// [`AnalysisError::NoKeyFound`] — distinct from any default key.
    pub fn break_single_byte_above<S: Scorer>(
        bytes: &[u8],
        scorer: &S,
        floor: u64,
    ) -> Result<SingleByteKey, AnalysisError> {
        let mut best: Option<SingleByteKey> = None;
        let mut max_score = floor;

        for key in 1..=u8::MAX {
            let plaintext = xor::single(bytes, key);
            let score = scorer.score(&plaintext);
            if score > max_score {
                max_score = score;
                best = Some(SingleByteKey {
                    key,
                    score,
                    plaintext,
                });
            }
        }

        best.ok_or(AnalysisError::NoKeyFound { floor })
    }

    #[test]
    fn test_recovers_known_key() {
        use crate::score::ENGLISH;

        let plain = b"The quick brown fox jumps over the lazy dog";
        let encrypted = xor::single(plain, 0x58);

        let found = break_single_byte(&encrypted, &ENGLISH).unwrap();
        assert_eq!(found.key, 0x58);
        assert_eq!(found.plaintext, plain);
    }

    #[test]
    fn test_classic_vector() {
        use crate::{encode::hex::from_hex, score::ENGLISH};

        let bytes =
            from_hex("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736")
                .unwrap();
        let found = break_single_byte(&bytes, &ENGLISH).unwrap();
        assert_eq!(found.key, b'X');
        assert_eq!(found.plaintext, b"Cooking MC's like a pound of bacon");
    }

    #[test]
    fn test_empty_buffer_is_no_key() {
        use crate::score::ENGLISH;

        assert_eq!(
            break_single_byte(&[], &ENGLISH),
            Err(AnalysisError::NoKeyFound { floor: 0 })
        );
    }

    #[test]
    fn test_floor_must_be_exceeded() {
        use crate::score::ENGLISH;

        let encrypted = xor::single(b"some ordinary text", 0x21);
        let best = break_single_byte(&encrypted, &ENGLISH).unwrap();

        // an equal score is not an improvement
        assert_eq!(
            break_single_byte_above(&encrypted, &ENGLISH, best.score),
            Err(AnalysisError::NoKeyFound { floor: best.score })
        );
        assert!(break_single_byte_above(&encrypted, &ENGLISH, best.score - 1).is_ok());
    }

    #[test]
    fn test_injected_table() {
        use crate::score::ScoreTable;

        let mut weights = [0u64; 256];
        weights[b'a' as usize] = 1;
        let only_a = ScoreTable::new(weights);

        let found = break_single_byte(&xor::single(b"aaaaaaaa", 0x42), &only_a).unwrap();
        assert_eq!(found.key, 0x42);
        assert_eq!(found.score, 8);
    }
}

pub mod multibyte {
    use std::fmt::{self, Display};

    use crate::{encrypt::xor, error::AnalysisError, score::Scorer};

    use super::single_byte::{self, SingleByteKey};

    /// Bit-level Hamming distance between two byte slices: the popcount of
    /// their byte-wise XOR. Extra bytes of the longer slice are ignored.
    pub fn hamming(bytes1: &[u8], bytes2: &[u8]) -> usize {
        bytes1
            .iter()
            .zip(bytes2)
            .map(|(u, v)| (u ^ v).count_ones() as usize)
            .sum()
    }

    /// Most probable key length over a search range, with the normalized
    /// average block distance that made it win (lower is better).
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct KeyLengthEstimate {
        pub length: usize,
        pub distance: f64,
    }

    impl Display for KeyLengthEstimate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "key length {} (normalized distance {:.3})",
                self.length, self.distance
            )
        }
    }

    /// Estimates the key length of repeating-key XOR ciphertext.
    ///
    /// For each candidate length in `[min_len, max_len)` this compares
    /// `trials` disjoint pairs of consecutive blocks from the front of the
    /// buffer by Hamming distance, averages, and normalizes by the candidate
    /// length. Two blocks exactly one key period apart differ only where the
    /// underlying plaintext does, so the true length shows a noticeably
    /// lower normalized distance than the wrong ones.
    ///
    /// The average divides by `trials` before normalizing, in integer
    /// arithmetic; with `trials = 1` the single pair's distance is used
    /// as-is. Comparison is strict, so the shortest length reaching the
    /// minimum wins ties.
    pub fn estimate_key_length(
        bytes: &[u8],
        min_len: usize,
        max_len: usize,
        trials: usize,
    ) -> Result<KeyLengthEstimate, AnalysisError> {
        if min_len == 0 || min_len >= max_len || trials == 0 {
            return Err(AnalysisError::InvalidParameters {
                min: min_len,
                max: max_len,
                trials,
            });
        }

        // every trial pair must fit for the largest candidate
        let needed = 2 * trials * (max_len - 1);
        if bytes.len() < needed {
            return Err(AnalysisError::InsufficientData {
                len: bytes.len(),
                needed,
            });
        }

        let mut estimate = KeyLengthEstimate {
            length: 0,
            distance: f64::INFINITY,
        };

        for length in min_len..max_len {
            let total: usize = (0..trials)
                .map(|trial| {
                    let start = 2 * trial * length;
                    hamming(
                        &bytes[start..start + length],
                        &bytes[start + length..start + 2 * length],
                    )
                })
                .sum();

            let distance = (total / trials) as f64 / length as f64;
            if distance < estimate.distance {
                estimate = KeyLengthEstimate { length, distance };
            }
        }

        Ok(estimate)
    }

    /// Key and plaintext recovered from repeating-key XOR ciphertext, plus
    /// the length estimate the recovery was based on.
    #[derive(Clone, Debug, PartialEq)]
    pub struct RecoveredKey {
        pub key: Vec<u8>,
        pub estimate: KeyLengthEstimate,
        pub plaintext: Vec<u8>,
    }

    /// Full repeating-key attack: estimate the key length, split the buffer
    /// into one column per key byte (column `i` holds bytes `i`, `i + k`,
    /// `i + 2k`, …), break every column as single-byte XOR and decode the
    /// buffer against the concatenated key.
    ///
    /// The columns share no state and are broken independently.
    pub fn break_repeating_key<S: Scorer>(
        bytes: &[u8],
        min_len: usize,
        max_len: usize,
        trials: usize,
        scorer: &S,
    ) -> Result<RecoveredKey, AnalysisError> {
        let estimate = estimate_key_length(bytes, min_len, max_len, trials)?;

        let length = estimate.length;
        if length == 0 || length >= bytes.len() {
            return Err(AnalysisError::UndeterminableKeyLength {
                length,
                len: bytes.len(),
            });
        }

        let key = (0..length)
            .map(|index| {
                let column: Vec<u8> = bytes.iter().skip(index).step_by(length).copied().collect();
                single_byte::break_single_byte(&column, scorer)
                    .map(|found: SingleByteKey| found.key)
            })
            .collect::<Result<Vec<u8>, AnalysisError>>()?;

        let plaintext = xor::repeating(bytes, &key);

        Ok(RecoveredKey {
            key,
            estimate,
            plaintext,
        })
    }

    #[test]
    fn test_hamming_dist() {
        assert_eq!(hamming(b"this is a test", b"wokka wokka!!!"), 37);
    }

    #[test]
    fn test_hamming_basics() {
        assert_eq!(hamming(b"same bytes", b"same bytes"), 0);
        assert_eq!(hamming(b"abcd", b"dcba"), hamming(b"dcba", b"abcd"));
        assert_eq!(hamming(&[0x00], &[0xff]), 8);
    }

    #[test]
    fn test_parameter_validation() {
        let bytes = [0u8; 64];
        for (min, max, trials) in [(0, 8, 1), (8, 8, 1), (9, 8, 1), (2, 8, 0)] {
            assert_eq!(
                estimate_key_length(&bytes, min, max, trials),
                Err(AnalysisError::InvalidParameters { min, max, trials })
            );
        }
    }

    #[test]
    fn test_insufficient_data() {
        let bytes = [0u8; 55];
        assert_eq!(
            estimate_key_length(&bytes, 2, 8, 4),
            Err(AnalysisError::InsufficientData {
                len: 55,
                needed: 56
            })
        );
    }

    #[test]
    fn test_estimates_period_of_long_ciphertext() {
        let plain: Vec<u8> =
            b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal\n"
                .repeat(12);
        let encrypted = xor::repeating(&plain, b"TERMINATOR X");

        let estimate = estimate_key_length(&encrypted, 2, 40, 8).unwrap();
        assert_eq!(estimate.length, 12);
    }

    #[test]
    fn test_breaks_ice_ciphertext() {
        use crate::score::ENGLISH;

        let plain = b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal";
        let encrypted = xor::repeating(plain, b"ICE");

        let recovered = break_repeating_key(&encrypted, 2, 8, 4, &ENGLISH).unwrap();
        assert_eq!(recovered.estimate.length, 3);
        assert_eq!(recovered.key, b"ICE");
        assert_eq!(recovered.plaintext, plain);
    }
}
