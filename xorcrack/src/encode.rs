pub mod hex {
    use crate::error::DecodeError;

    /// Converts a hex string to bytes. An odd-length string gets an implicit
    /// leading zero digit.
    pub fn from_hex(hex: &str) -> Result<Vec<u8>, DecodeError> {
        let mut digits = Vec::with_capacity(hex.len() + 1);
        if hex.len() % 2 == 1 {
            digits.push(0);
        }
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or(DecodeError::InvalidHexDigit(c))? as u8;
            digits.push(digit);
        }

        Ok(digits
            .chunks_exact(2)
            .map(|pair| pair[0] << 4 | pair[1])
            .collect())
    }

    /// Converts bytes to a lowercase hex string.
    pub fn to_hex(bytes: &[u8]) -> String {
        bytes.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("ffff"), Ok(vec![0xff, 0xff]));
        assert_eq!(from_hex("fff"), Ok(vec![0x0f, 0xff]));
        assert_eq!(from_hex("123ABC"), Ok(vec![0x12, 0x3a, 0xbc]));
        assert_eq!(from_hex("123ABX"), Err(DecodeError::InvalidHexDigit('X')));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x0f, 0xff]), "0fff");
        assert_eq!(to_hex(&[0x12, 0x3a, 0xbc]), "123abc");
    }
}

pub mod base64 {
    use crate::error::DecodeError;

    const CHARSET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    fn sextet(c: u8) -> Result<u32, DecodeError> {
        let value = match c {
            b'A'..=b'Z' => c - b'A',
            b'a'..=b'z' => c - b'a' + 26,
            b'0'..=b'9' => c - b'0' + 52,
            b'+' => 62,
            b'/' => 63,
            _ => return Err(DecodeError::InvalidBase64Char(c as char)),
        };
        Ok(u32::from(value))
    }

    /// Encodes bytes as base64 with `=` padding.
    pub fn to_base64(bytes: &[u8]) -> String {
        let mut string = String::with_capacity(bytes.len().div_ceil(3) * 4);

        for chunk in bytes.chunks(3) {
            let mut word = 0u32;
            for (i, &byte) in chunk.iter().enumerate() {
                word |= u32::from(byte) << (16 - 8 * i);
            }
            for i in 0..=chunk.len() {
                string.push(CHARSET[(word >> (18 - 6 * i)) as usize & 0x3f] as char);
            }
            for _ in chunk.len()..3 {
                string.push('=');
            }
        }

        string
    }

    /// Decodes base64 to bytes. Trailing `=` padding is optional.
    pub fn from_base64(base64: &str) -> Result<Vec<u8>, DecodeError> {
        let trimmed = base64.trim_end_matches('=');
        let mut bytes = Vec::with_capacity(trimmed.len() * 3 / 4);

        for chunk in trimmed.as_bytes().chunks(4) {
            if chunk.len() == 1 {
                return Err(DecodeError::TruncatedBase64);
            }
            let mut word = 0u32;
            for (i, &c) in chunk.iter().enumerate() {
                word |= sextet(c)? << (18 - 6 * i);
            }
            for i in 1..chunk.len() {
                bytes.push((word >> (24 - 8 * i)) as u8);
            }
        }

        Ok(bytes)
    }

    #[test]
    fn test_to_base64() {
        assert_eq!(to_base64(b"Man"), "TWFu");
        assert_eq!(to_base64(b"Ma"), "TWE=");
        assert_eq!(to_base64(b"M"), "TQ==");
    }

    #[test]
    fn test_from_base64() {
        assert_eq!(from_base64("TWFu"), Ok(b"Man".to_vec()));
        assert_eq!(from_base64("TWE="), Ok(b"Ma".to_vec()));
        assert_eq!(from_base64("TQ=="), Ok(b"M".to_vec()));
        assert_eq!(from_base64("TWE"), Ok(b"Ma".to_vec()));
        assert_eq!(from_base64("TQ"), Ok(b"M".to_vec()));
        assert_eq!(from_base64("TW!u"), Err(DecodeError::InvalidBase64Char('!')));
    }

    #[test]
    fn test_hex_to_base64_vector() {
        use crate::encode::hex::from_hex;

        let bytes = from_hex(
            "49276d206b696c6c696e6720796f757220627261696e206c696b65206120706f69736f6e6f7573206d757368726f6f6d",
        )
        .unwrap();
        assert_eq!(
            to_base64(&bytes),
            "SSdtIGtpbGxpbmcgeW91ciBicmFpbiBsaWtlIGEgcG9pc29ub3VzIG11c2hyb29t"
        );
    }
}
