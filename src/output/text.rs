//! Plain text output, one block per line.

use crate::models::CidrBlock;
use std::io::{self, Write};

pub fn write_text<W: Write>(out: &mut W, blocks: &[CidrBlock]) -> io::Result<()> {
    for block in blocks {
        writeln!(out, "{block}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text() {
        let blocks: Vec<CidrBlock> = ["192.168.1.0/24", "2001:db8::/64"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut out = Vec::new();
        write_text(&mut out, &blocks).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "192.168.1.0/24\n2001:db8::/64\n"
        );
    }

    #[test]
    fn test_write_text_empty() {
        let mut out = Vec::new();
        write_text(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
