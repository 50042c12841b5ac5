//! Firmware version reported over the bus

/// Major version (command 01)
pub const VERSION_MAJOR: u8 = parse_u8(env!("CARGO_PKG_VERSION_MAJOR"));

/// Minor version (command 02)
pub const VERSION_MINOR: u8 = parse_u8(env!("CARGO_PKG_VERSION_MINOR"));

/// Parse a decimal version component at compile time, saturating at 255
const fn parse_u8(s: &str) -> u8 {
    let bytes = s.as_bytes();
    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        if digit >= b'0' && digit <= b'9' {
            value = value * 10 + (digit - b'0') as u16;
            if value > u8::MAX as u16 {
                return u8::MAX;
            }
        }
        i += 1;
    }
    value as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse_u8("0"), 0);
        assert_eq!(parse_u8("12"), 12);
        assert_eq!(parse_u8("300"), 255);
    }

    #[test]
    fn test_matches_package_version() {
        let expected = format!("{}.{}", VERSION_MAJOR, VERSION_MINOR);
        assert!(env!("CARGO_PKG_VERSION").starts_with(&expected));
    }
}
