extern crate encoding;
use self::encoding::all::ISO_8859_1;
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

// header text is Latin-1; characters outside it are written as '?'
pub fn encode_field(text: &str) -> Vec<u8> {
    ISO_8859_1
        .encode(text, EncoderTrap::Replace)
        .unwrap_or_default()
}

// a text slot ends at its first NUL, whatever follows it is padding
pub fn decode_field(slot: &[u8]) -> String {
    let end = slot.iter().position(|b| *b == 0).unwrap_or(slot.len());
    ISO_8859_1
        .decode(&slot[..end], DecoderTrap::Replace)
        .unwrap_or_default()
}
