use std::io::{ErrorKind, Read, Write};

use crate::constants::STDIN_CHUNK_SIZE;
use crate::error::{Error, Result};

/// Reads a stream to its end in fixed-size chunks.
///
/// Interrupted reads are retried; any other read error aborts.
pub fn read_from(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut chunk = [0u8; STDIN_CHUNK_SIZE];
    let mut data = Vec::new();
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::InputRead(e)),
        }
    }
    log::trace!("Read {} bytes of input", data.len());
    Ok(data)
}

/// Writes the final output followed by a newline and flushes the writer.
pub fn write_output(mut writer: impl Write, output: &[u8]) -> Result<()> {
    writer.write_all(output)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
