//! Evidence file list attached to an application
//!
//! The store keeps evidence as one comma-joined string of paths. In memory it
//! is an ordered list of file records; the joined form only exists on the wire.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = ',';

/// A single uploaded supporting document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvidenceFile {
    pub path: String,
}

impl EvidenceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Last path segment, which is what the upload endpoint calls the file
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceFiles(Vec<EvidenceFile>);

impl EvidenceFiles {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse the wire form, dropping blank segments
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(EvidenceFile::new)
                .collect(),
        )
    }

    pub fn to_joined(&self) -> String {
        self.0
            .iter()
            .map(|file| file.path.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(EvidenceFile::new(path));
    }

    /// Remove every entry whose file name is exactly `file_name`.
    /// Returns how many entries were dropped.
    pub fn remove_by_name(&mut self, file_name: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|file| file.file_name() != file_name);
        before - self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvidenceFile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EvidenceFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_joined())
    }
}

impl<S: Into<String>> FromIterator<S> for EvidenceFiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(EvidenceFile::new).collect())
    }
}

impl Serialize for EvidenceFiles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_joined())
    }
}

impl<'de> Deserialize<'de> for EvidenceFiles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = Option::<String>::deserialize(deserializer)?;
        Ok(joined.map(|s| Self::from_joined(&s)).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_segments_are_dropped() {
        let files = EvidenceFiles::from_joined("/uploads/a.pdf,, ,/uploads/b.png");

        assert_eq!(files.len(), 2);
        assert_eq!(files.to_joined(), "/uploads/a.pdf,/uploads/b.png");
    }

    #[test]
    fn test_empty_string_is_empty_list() {
        assert!(EvidenceFiles::from_joined("").is_empty());
        assert!(EvidenceFiles::from_joined("   ").is_empty());
    }

    #[test]
    fn test_file_name_is_last_segment() {
        let file = EvidenceFile::new("/uploads/2024/hoc_ba.pdf");
        assert_eq!(file.file_name(), "hoc_ba.pdf");

        let bare = EvidenceFile::new("cccd.jpg");
        assert_eq!(bare.file_name(), "cccd.jpg");
    }

    #[test]
    fn test_remove_matches_whole_file_name_only() {
        let mut files: EvidenceFiles = ["/uploads/a.pdf", "/uploads/aa.pdf", "/other/a.pdf"]
            .into_iter()
            .collect();

        let removed = files.remove_by_name("a.pdf");

        assert_eq!(removed, 2);
        assert_eq!(files.to_joined(), "/uploads/aa.pdf");
    }

    #[test]
    fn test_wire_form_is_a_single_string() {
        let mut files = EvidenceFiles::new();
        files.push("/uploads/a.pdf");
        files.push("/uploads/b.pdf");

        let json = serde_json::to_string(&files).unwrap();
        assert_eq!(json, "\"/uploads/a.pdf,/uploads/b.pdf\"");

        let null: EvidenceFiles = serde_json::from_str("null").unwrap();
        assert!(null.is_empty());
    }
}
