//! Headless mode execution
//!
//! Reads one snapshot and prints it as `KEY = value` lines, for scripts and
//! non-interactive terminals.

use crate::status::{StatusProvider, StatusRecord, StatusSource};
use std::error::Error;
use std::io::{self, Write};

/// Runs a single refresh and prints the record to stdout.
///
/// # Returns
/// * `Ok(())` - The snapshot was read and printed
/// * `Err` - Reading the status buffer or writing stdout failed
pub fn run_headless_mode<P: StatusProvider>(source: &StatusSource<P>) -> Result<(), Box<dyn Error>> {
    let record = source.refresh()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_record(&mut out, &record)?;
    out.flush()?;
    Ok(())
}

/// Write every entry, `INSTANCE` included, in sorted key order.
pub fn write_record<W: Write>(out: &mut W, record: &StatusRecord) -> io::Result<()> {
    for (key, value) in record.iter() {
        writeln!(out, "{:<8} = {}", key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_sorted_lines_including_instance() {
        let record: StatusRecord = [("NETSTAT", "idle"), ("INSTANCE", "3"), ("DAQSTATE", "armed")]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        write_record(&mut out, &record).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "DAQSTATE = armed\nINSTANCE = 3\nNETSTAT  = idle\n"
        );
    }
}
