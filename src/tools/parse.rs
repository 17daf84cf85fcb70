extern crate regex;
use self::regex::Regex;

pub fn parse_byte(input: &str) -> Result<u8, String> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(?:0[xX](?P<hex>[0-9a-fA-F]+)|0(?P<oct>[0-7]*)|(?P<dec>[1-9][0-9]*))$")
                .unwrap();
    }

    let input = input.trim();
    let c = match RE.captures(input) {
        Some(c) => c,
        None => return Err(format!("\"{}\" is not a number", input)),
    };

    let value = if let Some(m) = c.name("hex") {
        u32::from_str_radix(m.as_str(), 16)
    } else if let Some(m) = c.name("dec") {
        m.as_str().parse::<u32>()
    } else {
        // a lone "0" leaves the octal group empty
        match c.name("oct").map(|m| m.as_str()) {
            None | Some("") => Ok(0),
            Some(s) => u32::from_str_radix(s, 8),
        }
    };

    match value {
        Ok(v) if v <= 0xFF => Ok(v as u8),
        _ => Err(format!("\"{}\" does not fit in a byte", input)),
    }
}
