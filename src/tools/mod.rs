pub mod encoding;
pub mod parse;

pub fn truncate(input: &[u8], capacity: usize) -> (&[u8], bool) {
    if input.len() > capacity {
        (&input[..capacity], true)
    } else {
        (input, false)
    }
}
