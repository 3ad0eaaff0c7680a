//! Endpoint mapping files on disk.
//!
//! Each domain has one file, `<dir>/<domain>.json`, holding its
//! [`EndpointMapping`] in canonical form. Files are fully rewritten on every
//! run; nothing from a previous file is merged in.

use std::path::{Path, PathBuf};

use chain_endpoints::{Domain, EndpointMapping};

use crate::error::Result;

/// Path of `domain`'s mapping file inside `dir`.
#[must_use]
pub fn domain_file(dir: &Path, domain: Domain) -> PathBuf {
    dir.join(domain.file_name())
}

/// Read a mapping file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid mapping.
pub fn read(path: &Path) -> Result<EndpointMapping> {
    let data = std::fs::read(path)?;
    Ok(EndpointMapping::from_json(&data)?)
}

/// Write `mapping` to `path` in canonical form, replacing any existing file.
///
/// The data goes to a sibling temp file first and is renamed into place.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write(path: &Path, mapping: &EndpointMapping) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, mapping.to_canonical_json()?)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Rewrite an existing mapping file in canonical order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or written back.
pub fn sort_file(path: &Path) -> Result<EndpointMapping> {
    let mapping = read(path)?;
    write(path, &mapping)?;
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn mapping() -> EndpointMapping {
        [
            (
                11_155_111,
                BTreeSet::from(["https://sepolia.drpc.org".to_owned()]),
            ),
            (
                80002,
                BTreeSet::from([
                    "https://rpc-amoy.polygon.technology".to_owned(),
                    "https://polygon-amoy.drpc.org".to_owned(),
                ]),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn domain_files_are_named_after_the_domain() {
        assert_eq!(
            domain_file(Path::new("/out"), Domain::Mainnet),
            PathBuf::from("/out/mainnet.json"),
            "path"
        );
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = domain_file(dir.path(), Domain::Tapir);

        write(&path, &mapping()).unwrap();
        assert_eq!(read(&path).unwrap(), mapping(), "contents");
        assert!(!path.with_extension("json.tmp").exists(), "temp file cleaned up");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("]\n}\n"), "trailing newline: {text:?}");
        assert!(
            text.find("\"80002\"").unwrap() < text.find("\"11155111\"").unwrap(),
            "numeric key order"
        );
    }

    #[test]
    fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lynx.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{\"1\": [\"https://old.example\"]}").unwrap();

        write(&path, &mapping()).unwrap();
        let read_back = read(&path).unwrap();
        assert_eq!(read_back.get(1), None, "old chain gone");
        assert_eq!(read_back.len(), 2, "new chains present");
    }

    #[test]
    fn sorting_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mainnet.json");
        std::fs::write(
            &path,
            r#"{"137": ["https://z.example", "https://a.example", "https://a.example"], "1": ["https://m.example"]}"#,
        )
        .unwrap();

        sort_file(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        sort_file(&path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second, "second sort changes nothing");
        let text = String::from_utf8(first).unwrap();
        assert_eq!(text.matches("https://a.example").count(), 1, "duplicates removed");
        assert!(text.find("\"1\"").unwrap() < text.find("\"137\"").unwrap(), "key order");
    }

    #[test]
    fn reading_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tapir.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(read(&path).is_err(), "garbage accepted");
    }
}
