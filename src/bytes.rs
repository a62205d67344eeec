//! Conversions from command strings to the values put on the bus.

/// Code point of every character in `text`, in order.
///
/// No validation is done: characters outside 7-bit ASCII keep their full
/// code point.
pub fn string_to_bytes(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Wire form of `text` for an I2C block write.
///
/// Each code point is truncated to its low byte, so only ASCII text
/// round-trips unchanged.
pub fn ascii_payload(text: &str) -> Vec<u8> {
    string_to_bytes(text)
        .into_iter()
        .map(|code| code as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_command_ordinals() {
        assert_eq!(string_to_bytes("time"), vec![116, 105, 109, 101]);
    }

    #[test]
    fn ascii_keeps_order_and_length() {
        let text = "Door OPEN 06:30 ~!";
        let codes = string_to_bytes(text);

        assert_eq!(codes.len(), text.len());
        for (code, byte) in codes.iter().zip(text.bytes()) {
            assert_eq!(*code, u32::from(byte));
        }
    }

    #[test]
    fn empty_string() {
        assert!(string_to_bytes("").is_empty());
        assert!(ascii_payload("").is_empty());
    }

    #[test]
    fn non_ascii_is_not_rejected() {
        // 'é' is U+00E9, '€' is U+20AC
        assert_eq!(string_to_bytes("é€"), vec![0xe9, 0x20ac]);
        assert_eq!(ascii_payload("é€"), vec![0xe9, 0xac]);
    }

    #[test]
    fn payload_matches_ordinals_for_ascii() {
        assert_eq!(ascii_payload("time"), b"time".to_vec());
    }
}
