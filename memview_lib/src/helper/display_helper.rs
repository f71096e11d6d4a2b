use std::io::Write;
use crate::error::Result;

/// writes `label`, every byte followed by a single space, and a newline
pub fn write_bytes<W, I>(out: &mut W, label: &str, bytes: I) -> Result<()>
    where W: Write, I: IntoIterator<Item=u8>
{
    write!(out, "{}", label)?;
    for byte in bytes {
        write!(out, "{} ", byte)?;
    }
    writeln!(out)?;
    Ok(())
}
