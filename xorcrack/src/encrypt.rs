pub mod xor {
    /// XOR of two buffers of the same length.
    pub fn fixed(bytes1: &[u8], bytes2: &[u8]) -> Vec<u8> {
        assert_eq!(bytes1.len(), bytes2.len());
        bytes1.iter().zip(bytes2).map(|(u, v)| u ^ v).collect()
    }

    /// XOR with a single key byte broadcast over the buffer.
    pub fn single(bytes: &[u8], key: u8) -> Vec<u8> {
        bytes.iter().map(|u| u ^ key).collect()
    }

    /// Repeating-key XOR, also known as Vigenere encryption: position `i`
    /// is combined with `key[i % key.len()]`. The key must not be empty.
    pub fn repeating(bytes: &[u8], key: &[u8]) -> Vec<u8> {
        assert!(!key.is_empty());
        bytes
            .iter()
            .zip(key.iter().cycle())
            .map(|(u, v)| u ^ v)
            .collect()
    }

    #[test]
    fn test_fixed() {
        let bytes1 = crate::encode::hex::from_hex("1c0111001f010100061a024b53535009181c").unwrap();
        let bytes2 = crate::encode::hex::from_hex("686974207468652062756c6c277320657965").unwrap();
        assert_eq!(
            crate::encode::hex::to_hex(&fixed(&bytes1, &bytes2)),
            "746865206b696420646f6e277420706c6179"
        );
    }

    #[test]
    fn test_single() {
        assert_eq!(single(&[0x80, 0x42], 0x38), vec![0x80 ^ 0x38, 0x42 ^ 0x38]);
    }

    #[test]
    fn test_repeating() {
        let encrypted = repeating(
            b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal",
            b"ICE",
        );
        assert_eq!(
            crate::encode::hex::to_hex(&encrypted),
            "0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a282b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f"
        );
    }

    #[test]
    fn test_self_inverse() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let bytes: Vec<u8> = (0..257).map(|_| rng.gen()).collect();

        let key: u8 = rng.gen();
        assert_eq!(single(&single(&bytes, key), key), bytes);

        let repeating_key: Vec<u8> = (0..5).map(|_| rng.gen()).collect();
        assert_eq!(
            repeating(&repeating(&bytes, &repeating_key), &repeating_key),
            bytes
        );
    }
}
