//! File-backed status buffers
//!
//! Each instance is a file `<dir>/pipeline_status_<N>` holding fixed-width
//! 80-byte header cards of the form `KEYWORD = value / comment`, terminated
//! by an `END` card. On Linux the pipeline maps these from `/dev/shm`.

use super::error::ProviderError;
use super::provider::StatusProvider;
use super::record::StatusRecord;
use crate::consts::cli_consts::{
    END_KEYWORD, KEYWORD_WIDTH, STATUS_CARD_SIZE, STATUS_FILE_PREFIX, VALUE_INDICATOR,
};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Provider reading status cards from a directory of buffer files.
#[derive(Debug, Clone)]
pub struct CardFileProvider {
    dir: PathBuf,
}

/// An attached card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFileHandle {
    pub instance_id: u32,
    pub path: PathBuf,
}

impl CardFileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the buffer file backing `instance_id`.
    pub fn buffer_path(&self, instance_id: u32) -> PathBuf {
        self.dir
            .join(format!("{}{}", STATUS_FILE_PREFIX, instance_id))
    }
}

impl StatusProvider for CardFileProvider {
    type Handle = CardFileHandle;

    fn attach(&mut self, instance_id: u32) -> Result<CardFileHandle, ProviderError> {
        let path = self.buffer_path(instance_id);
        if !path.is_file() {
            return Err(ProviderError::NotFound { path });
        }
        debug!("attached status buffer {}", path.display());
        Ok(CardFileHandle { instance_id, path })
    }

    fn read(&self, handle: &CardFileHandle) -> Result<StatusRecord, ProviderError> {
        let buf = fs::read(&handle.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotFound {
                path: handle.path.clone(),
            },
            _ => ProviderError::Io(e),
        })?;
        parse_cards(&buf)
    }
}

/// Parse a buffer of header cards up to the `END` card.
///
/// Cards without a value indicator (`COMMENT`, `HISTORY`, blanks) are skipped.
/// A trailing partial card is ignored.
pub fn parse_cards(buf: &[u8]) -> Result<StatusRecord, ProviderError> {
    let mut record = StatusRecord::new();
    for card in buf.chunks_exact(STATUS_CARD_SIZE) {
        let keyword = String::from_utf8_lossy(&card[..KEYWORD_WIDTH]);
        let keyword = keyword.trim_end();
        if keyword == END_KEYWORD {
            return Ok(record);
        }
        if keyword.is_empty() || &card[KEYWORD_WIDTH..KEYWORD_WIDTH + 2] != VALUE_INDICATOR {
            continue;
        }
        let raw = String::from_utf8_lossy(&card[KEYWORD_WIDTH + 2..]);
        record.insert(keyword, parse_value(&raw));
    }
    Err(ProviderError::Malformed(format!(
        "no {} card in {} bytes",
        END_KEYWORD,
        buf.len()
    )))
}

/// Extract the value portion of a card, dropping any trailing comment.
fn parse_value(raw: &str) -> String {
    let raw = raw.trim_start();
    match raw.strip_prefix('\'') {
        Some(quoted) => {
            let mut value = String::new();
            let mut chars = quoted.chars().peekable();
            while let Some(c) = chars.next() {
                if c != '\'' {
                    value.push(c);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    value.push('\'');
                } else {
                    break;
                }
            }
            value.trim_end().to_string()
        }
        None => raw
            .split('/')
            .next()
            .unwrap_or_default()
            .trim_matches(|c: char| c.is_whitespace() || c == '\0')
            .to_string(),
    }
}
