//! Archive formats the installer can unpack.

use crate::error::{RecipeError, Result};
use crate::shell::quote;

/// A supported archive type, detected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    TarBz2,
    TarXz,
    Tar,
    Zip,
}

impl ArchiveKind {
    const SUFFIXES: &'static [(&'static str, ArchiveKind)] = &[
        (".tar.gz", ArchiveKind::TarGz),
        (".tgz", ArchiveKind::TarGz),
        (".tar.bz2", ArchiveKind::TarBz2),
        (".tbz2", ArchiveKind::TarBz2),
        (".tar.xz", ArchiveKind::TarXz),
        (".tar", ArchiveKind::Tar),
        (".zip", ArchiveKind::Zip),
    ];

    /// Detect the archive type of `file`.
    pub fn detect(file: &str) -> Result<Self> {
        Self::split(file)
            .map(|(_, kind)| kind)
            .ok_or_else(|| RecipeError::UnsupportedArchive {
                file: file.to_string(),
            })
    }

    /// `file` without its archive extension.
    ///
    /// This is the directory most source archives unpack into.
    pub fn stem(file: &str) -> Result<&str> {
        Self::split(file)
            .map(|(stem, _)| stem)
            .ok_or_else(|| RecipeError::UnsupportedArchive {
                file: file.to_string(),
            })
    }

    fn split(file: &str) -> Option<(&str, ArchiveKind)> {
        let lower = file.to_ascii_lowercase();
        Self::SUFFIXES.iter().find_map(|(suffix, kind)| {
            lower
                .ends_with(suffix)
                .then(|| (&file[..file.len() - suffix.len()], *kind))
        })
    }

    /// Command line extracting `file` into the current directory.
    pub fn extract_command(&self, file: &str) -> String {
        let file = quote(file);
        match self {
            Self::TarGz => format!("tar -xzpf {}", file),
            Self::TarBz2 => format!("tar -xjpf {}", file),
            Self::TarXz => format!("tar -xJpf {}", file),
            Self::Tar => format!("tar -xpf {}", file),
            Self::Zip => format!("unzip -o -q {}", file),
        }
    }
}

/// The file name part of `url`, ignoring any query or fragment.
pub fn file_name_from_url(url: &str) -> Result<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(RecipeError::UnsupportedArchive {
            file: url.to_string(),
        }),
    }
}
