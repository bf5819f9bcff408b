//! Text/binary classification for the content scan.
//!
//! The content replacer only asks a [`FileClassifier`] whether a file is
//! text; how that is decided is up to the implementation. [`ContentSniffer`]
//! inspects the leading bytes, [`ExtensionClassifier`] looks only at the
//! file name.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Binary,
}

pub trait FileClassifier {
    fn classify(&self, path: &Path) -> Result<FileKind>;
}

/// Classifies by reading a bounded sample from the start of the file.
#[derive(Debug, Clone)]
pub struct ContentSniffer {
    sample_len: usize,
}

impl ContentSniffer {
    pub const DEFAULT_SAMPLE_LEN: usize = 8 * 1024;

    pub fn new() -> Self {
        Self {
            sample_len: Self::DEFAULT_SAMPLE_LEN,
        }
    }

    pub fn with_sample_len(sample_len: usize) -> Self {
        Self { sample_len }
    }
}

impl Default for ContentSniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileClassifier for ContentSniffer {
    fn classify(&self, path: &Path) -> Result<FileKind> {
        let file = File::open(path)?;
        let mut sample = Vec::with_capacity(self.sample_len);
        file.take(self.sample_len as u64).read_to_end(&mut sample)?;
        Ok(sniff(&sample))
    }
}

/// A NUL byte or malformed UTF-8 marks the sample as binary. A multi-byte
/// sequence cut off by the end of the sample is still text.
pub fn sniff(sample: &[u8]) -> FileKind {
    if sample.contains(&0) {
        return FileKind::Binary;
    }

    match std::str::from_utf8(sample) {
        Ok(_) => FileKind::Text,
        Err(error) if error.error_len().is_none() => FileKind::Text,
        Err(_) => FileKind::Binary,
    }
}

const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    "7z", "a", "bmp", "class", "db", "dll", "doc", "docx", "dylib", "eot", "exe", "gif", "gz",
    "ico", "jar", "jpeg", "jpg", "lib", "mp3", "mp4", "nupkg", "o", "otf", "pdb", "pdf", "pfx",
    "png", "ppt", "pptx", "rar", "snk", "so", "sqlite", "tar", "tif", "tiff", "ttf", "wav",
    "webp", "woff", "woff2", "xls", "xlsx", "zip",
];

/// Classifies by file extension alone, without opening the file.
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    binary_extensions: BTreeSet<String>,
}

impl ExtensionClassifier {
    pub fn new<I, S>(binary_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            binary_extensions: binary_extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY_EXTENSIONS)
    }
}

impl FileClassifier for ExtensionClassifier {
    fn classify(&self, path: &Path) -> Result<FileKind> {
        let is_binary = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.binary_extensions.contains(&ext.to_ascii_lowercase()))
            .unwrap_or(false);

        Ok(if is_binary {
            FileKind::Binary
        } else {
            FileKind::Text
        })
    }
}
