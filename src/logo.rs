//! Logo file inspection for the Branding step.
//!
//! The wizard never uploads anything; it validates that the given path points
//! at a real PNG or JPEG and builds the preview shown next to the form.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
const JPEG_MAGIC: [u8; 3] = [0xff, 0xd8, 0xff];

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("not a regular file: {0}")]
    NotAFile(String),

    #[error("unsupported format (JPG or PNG only)")]
    UnsupportedFormat,

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKind {
    Png,
    Jpeg,
}

impl LogoKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            LogoKind::Png => "PNG",
            LogoKind::Jpeg => "JPEG",
        }
    }
}

/// Metadata shown as the logo preview once a file passes inspection.
#[derive(Debug, Clone)]
pub struct LogoPreview {
    pub file_name: String,
    pub kind: LogoKind,
    pub size_bytes: u64,
}

impl LogoPreview {
    /// Human-readable size, e.g. "12.4 KB".
    pub fn display_size(&self) -> String {
        let bytes = self.size_bytes;
        if bytes < 1024 {
            format!("{bytes} B")
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

/// Inspect a candidate logo file. Format is sniffed from magic bytes, not
/// from the file extension.
pub fn inspect(path: &Path) -> Result<LogoPreview, LogoError> {
    if !path.exists() {
        return Err(LogoError::NotFound(path.display().to_string()));
    }
    let meta = std::fs::metadata(path)?;
    if !meta.is_file() {
        return Err(LogoError::NotAFile(path.display().to_string()));
    }

    let mut header = [0u8; 8];
    let mut file = File::open(path)?;
    let read = file.read(&mut header)?;

    let kind = if read >= PNG_MAGIC.len() && header[..PNG_MAGIC.len()] == PNG_MAGIC {
        LogoKind::Png
    } else if read >= JPEG_MAGIC.len() && header[..JPEG_MAGIC.len()] == JPEG_MAGIC {
        LogoKind::Jpeg
    } else {
        return Err(LogoError::UnsupportedFormat);
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LogoPreview {
        file_name,
        kind,
        size_bytes: meta.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn recognizes_png_by_magic() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "logo.bin", &[&PNG_MAGIC[..], b"rest"].concat());

        let preview = inspect(&path).unwrap();
        assert_eq!(preview.kind, LogoKind::Png);
        assert_eq!(preview.file_name, "logo.bin");
        assert_eq!(preview.size_bytes, 12);
    }

    #[test]
    fn recognizes_jpeg_by_magic() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "logo.jpg", &[0xff, 0xd8, 0xff, 0xe0, 0x00]);

        let preview = inspect(&path).unwrap();
        assert_eq!(preview.kind, LogoKind::Jpeg);
    }

    #[test]
    fn rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "logo.gif", b"GIF89a");

        assert!(matches!(inspect(&path), Err(LogoError::UnsupportedFormat)));
    }

    #[test]
    fn rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.png");

        assert!(matches!(inspect(&path), Err(LogoError::NotFound(_))));
    }

    #[test]
    fn rejects_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(inspect(dir.path()), Err(LogoError::NotAFile(_))));
    }

    #[test]
    fn short_file_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "tiny", &[0x89]);

        assert!(matches!(inspect(&path), Err(LogoError::UnsupportedFormat)));
    }

    #[test]
    fn display_size_units() {
        let preview = LogoPreview {
            file_name: "a.png".into(),
            kind: LogoKind::Png,
            size_bytes: 512,
        };
        assert_eq!(preview.display_size(), "512 B");

        let preview = LogoPreview {
            size_bytes: 12 * 1024 + 410,
            ..preview
        };
        assert_eq!(preview.display_size(), "12.4 KB");
    }
}
