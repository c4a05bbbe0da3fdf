//! Junk prefix written in front of some key files by an old producer.
//!
//! Those files start with `0x51` followed by five more bytes of noise before
//! the real container. The check is a heuristic: a genuine container never
//! starts with `0x51` in practice (DER starts with `0x30`, JKS with `0xFE`).

pub const GARBAGE_MARKER: u8 = 0x51;
pub const GARBAGE_HEADER_LEN: usize = 6;

pub fn has_garbage_header(buf: &[u8]) -> bool {
    buf.first() == Some(&GARBAGE_MARKER)
}

/// Drops the junk prefix when present, otherwise returns `buf` as is.
pub fn strip_garbage_header(buf: &[u8]) -> &[u8] {
    if has_garbage_header(buf) {
        &buf[GARBAGE_HEADER_LEN.min(buf.len())..]
    } else {
        buf
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::strip_garbage_header;

    #[rstest(
        input,
        expected,
        case(vec![0x51, 1, 2, 3, 4, 5, 0xfe, 0xed], vec![0xfe, 0xed]),
        case(vec![0x51, 1, 2, 3, 4, 5], vec![]),
        case(vec![0x51, 1, 2], vec![]),
        case(vec![0xfe, 0xed, 0xfe, 0xed], vec![0xfe, 0xed, 0xfe, 0xed]),
        case(vec![0x30, 0x51, 1, 2, 3, 4, 5], vec![0x30, 0x51, 1, 2, 3, 4, 5]),
        case(vec![], vec![])
    )]
    fn test_strip_garbage_header(input: Vec<u8>, expected: Vec<u8>) {
        assert_eq!(expected.as_slice(), strip_garbage_header(&input));
    }
}
