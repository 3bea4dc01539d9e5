//! Versioned dictionary snapshots
//!
//! A snapshot is the magic line `lexis-dictionary` followed by a RON
//! document:
//!
//! ```text
//! lexis-dictionary
//! (
//!     version: 1,
//!     nouns: ["fact", "number", ...],
//!     verbs: [...],
//!     ...
//!     past_tense: ["went", ...],
//! )
//! ```
//!
//! Unknown fields are ignored and missing optional fields take their
//! defaults, so older readers accept newer snapshots of the same major
//! version. Only set membership is guaranteed to round-trip.

use std::collections::BTreeSet;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::store::DictionaryStore;
use crate::error::{Error, Result};

/// First line of every snapshot
pub const SNAPSHOT_MAGIC: &[u8] = b"lexis-dictionary\n";

/// Highest snapshot version this build reads and the one it writes
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized shape of a [`DictionaryStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySnapshot {
    pub version: u32,
    #[serde(default)]
    pub nouns: BTreeSet<String>,
    #[serde(default)]
    pub verbs: BTreeSet<String>,
    #[serde(default)]
    pub adjectives: BTreeSet<String>,
    #[serde(default)]
    pub adverbs: BTreeSet<String>,
    #[serde(default)]
    pub conjunctions: BTreeSet<String>,
    #[serde(default)]
    pub prepositions: BTreeSet<String>,
    #[serde(default)]
    pub past_tense: BTreeSet<String>,
}

pub(crate) fn load(path: &Path) -> Result<DictionaryStore> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

pub(crate) fn read<R: Read>(mut rdr: R) -> Result<DictionaryStore> {
    let mut bytes = Vec::new();
    rdr.read_to_end(&mut bytes)?;
    decode(&bytes)
}

pub(crate) fn write<W: Write>(store: &DictionaryStore, mut wtr: W) -> Result<()> {
    let body = encode(store)?;
    wtr.write_all(SNAPSHOT_MAGIC)?;
    wtr.write_all(body.as_bytes())?;
    wtr.flush()?;
    Ok(())
}

/// Writes into a temporary file next to `path` and renames it over the
/// destination once everything has been flushed.
pub(crate) fn save(store: &DictionaryStore, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    write(store, &mut temp_file)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn encode(store: &DictionaryStore) -> Result<String> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .separate_tuple_members(true)
        .enumerate_arrays(false);
    ron::ser::to_string_pretty(&store.to_snapshot(), config).map_err(|e| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to encode dictionary snapshot: {}", e),
        ))
    })
}

fn decode(bytes: &[u8]) -> Result<DictionaryStore> {
    let Some(body) = bytes.strip_prefix(SNAPSHOT_MAGIC) else {
        return Err(Error::corrupt("the magic number of the snapshot mismatches"));
    };

    let text = std::str::from_utf8(body)
        .map_err(|e| Error::corrupt(format!("snapshot is not valid UTF-8: {}", e)))?;

    let snapshot: DictionarySnapshot =
        ron::from_str(text).map_err(|e| Error::corrupt(e.to_string()))?;

    if snapshot.version == 0 || snapshot.version > SNAPSHOT_VERSION {
        return Err(Error::corrupt(format!(
            "unsupported snapshot version {} (this build reads up to {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }

    Ok(DictionaryStore::from_snapshot(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Role;

    fn encoded(store: &DictionaryStore) -> Vec<u8> {
        let mut buf = Vec::new();
        write(store, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_round_trip_in_memory() {
        let store = DictionaryStore::builtin();
        let decoded = read(encoded(&store).as_slice()).unwrap();
        assert_eq!(decoded, store);
    }

    #[test]
    fn test_snapshot_starts_with_magic() {
        let buf = encoded(&DictionaryStore::new());
        assert!(buf.starts_with(SNAPSHOT_MAGIC));
    }

    #[test]
    fn test_wrong_magic_is_corrupt() {
        let err = read(&b"(version: 1)"[..]).unwrap_err();
        assert!(err.is_corrupt_snapshot());
    }

    #[test]
    fn test_garbage_body_is_corrupt() {
        let mut buf = SNAPSHOT_MAGIC.to_vec();
        buf.extend_from_slice(b"{{ not ron");
        let err = read(buf.as_slice()).unwrap_err();
        assert!(err.is_corrupt_snapshot());
    }

    #[test]
    fn test_invalid_utf8_is_corrupt() {
        let mut buf = SNAPSHOT_MAGIC.to_vec();
        buf.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        assert!(read(buf.as_slice()).unwrap_err().is_corrupt_snapshot());
    }

    #[test]
    fn test_future_version_is_corrupt() {
        let mut buf = SNAPSHOT_MAGIC.to_vec();
        buf.extend_from_slice(b"(version: 99)");
        let err = read(buf.as_slice()).unwrap_err();
        assert!(err.is_corrupt_snapshot());
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_missing_fields_default_and_unknown_fields_are_ignored() {
        let mut buf = SNAPSHOT_MAGIC.to_vec();
        buf.extend_from_slice(b"(version: 1, nouns: [\"Food\"], synonyms: [\"x\"])");
        let store = read(buf.as_slice()).unwrap();
        assert!(store.lookup("food").contains(Role::Noun));
        assert_eq!(store.len(Role::Verb), 0);
    }

    #[test]
    fn test_truncated_reader_is_corrupt() {
        assert!(read(&b""[..]).unwrap_err().is_corrupt_snapshot());
    }
}
