//! format::decode
//!
//! git-config text to [`RawConfig`].
//!
//! Parsing is lossless: comments, whitespace and quoting are kept so that an
//! untouched file encodes back to the same bytes. Include directives are not
//! followed.

use gix_config::File;
use thiserror::Error;

use super::RawConfig;

/// Errors from decoding git-config text.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("config is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("invalid git config: {0}")]
    Syntax(#[from] gix_config::parse::Error),
}

/// Decode git-config text into a raw tree.
///
/// # Errors
///
/// Returns `DecodeError::Syntax` if the text is malformed, or
/// `DecodeError::InvalidUtf8` if it is not UTF-8.
pub fn decode(data: &[u8]) -> Result<RawConfig, DecodeError> {
    let text = std::str::from_utf8(data)?;
    let file: File<'static> = text.parse()?;
    Ok(RawConfig::from_file(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(decode(b"\n\n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn quoted_and_escaped_values() {
        let raw = decode(
            b"[alias]\n\tlg = \"log --graph # not a comment\"\n\tsay = \"a\\tb\\n\"\n\tpath = c:\\\\dir\n",
        )
        .unwrap();

        assert_eq!(
            raw.get("alias", None, "lg").as_deref(),
            Some("log --graph # not a comment")
        );
        assert_eq!(raw.get("alias", None, "say").as_deref(), Some("a\tb\n"));
        assert_eq!(raw.get("alias", None, "path").as_deref(), Some("c:\\dir"));
    }

    #[test]
    fn trailing_comments_and_whitespace() {
        let raw = decode(b"[core]\n\tfilemode = true   # trailing\n\teditor = vim ; other\n").unwrap();
        assert_eq!(raw.get("core", None, "filemode").as_deref(), Some("true"));
        assert_eq!(raw.get("core", None, "editor").as_deref(), Some("vim"));
    }

    #[test]
    fn line_continuation() {
        let raw = decode(b"[alias]\n\tst = status \\\n--short\n").unwrap();
        assert_eq!(raw.get("alias", None, "st").as_deref(), Some("status --short"));
    }

    #[test]
    fn subsection_with_escapes() {
        let raw = decode(b"[remote \"my \\\"fork\\\"\"]\n\turl = u\n").unwrap();
        assert_eq!(raw.subsections("remote"), vec!["my \"fork\""]);
    }

    #[test]
    fn crlf_line_endings() {
        let raw = decode(b"[core]\r\n\tbare = true\r\n").unwrap();
        assert_eq!(raw.get("core", None, "bare").as_deref(), Some("true"));
    }

    #[test]
    fn unterminated_header_is_an_error() {
        assert!(matches!(decode(b"[core\n"), Err(DecodeError::Syntax(_))));
        assert!(matches!(
            decode(b"[remote \"origin\n\turl = u\n"),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(matches!(
            decode(b"[core]\n\tname = \xff\n"),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }
}
