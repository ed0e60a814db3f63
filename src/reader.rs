use crate::error::ReadError;
use std::fs;
use std::path::Path;

/// Loads the whole file at `path` as UTF-8 text, byte for byte.
///
/// Content that is not valid UTF-8 yields [`ReadError::NotText`]; the
/// `binary` flag on it comes from sniffing the bytes and only changes the
/// message. Every other failure is [`ReadError::Io`].
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path).map_err(|e| ReadError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        let binary = content_inspector::inspect(e.as_bytes()).is_binary();
        #[cfg(feature = "logging")]
        tracing::debug!("Undecodable file {} (binary: {})", path.display(), binary);
        ReadError::NotText {
            path: path.to_path_buf(),
            binary,
        }
    })
}
