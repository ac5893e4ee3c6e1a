//! format::encode
//!
//! [`RawConfig`] to git-config text.

use std::io::{self, Write};

use thiserror::Error;

use super::RawConfig;

/// Errors from writing into or encoding a raw tree.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid section header [{0}]")]
    InvalidSection(String),

    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("failed to write config: {0}")]
    Io(#[from] io::Error),
}

impl EncodeError {
    pub(crate) fn invalid_section(name: &str, subsection: Option<&str>) -> Self {
        match subsection {
            Some(sub) => Self::InvalidSection(format!("{name} {sub:?}")),
            None => Self::InvalidSection(name.to_string()),
        }
    }
}

/// Encode a raw tree into `writer`.
///
/// # Errors
///
/// Returns `EncodeError::Io` if the writer fails.
pub fn encode<W: Write>(config: &RawConfig, mut writer: W) -> Result<(), EncodeError> {
    config.file().write_to(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a raw tree into a new buffer.
pub fn encode_to_vec(config: &RawConfig) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode(config, &mut buf)?;
    Ok(buf)
}
