use std::path::{Path, PathBuf};

use crate::error::Result;

/// Resolves a target path named by an application against `root`.
///
/// The two are joined by plain string concatenation, so `supplied` is
/// expected to start with `/` (e.g. `/etc/ssh/sshd_config`).
pub fn resolve_target<P: AsRef<Path>>(root: P, supplied: &str) -> PathBuf {
    if !supplied.starts_with('/') {
        log::warn!("Target path '{supplied}' does not start with '/'; it is appended to the root as-is");
    }
    PathBuf::from(format!("{}{}", root.as_ref().display(), supplied))
}

/// Returns `root` if given, else the current working directory.
pub fn get_root_dir(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn parse_string_to_json(
    buf: String,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str::<serde_json::Value>(&buf)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Ok(serde_json::Map::new()),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concatenates_root_and_target() {
        assert_eq!(
            resolve_target("/srv/provision", "/etc/ssh/sshd_config"),
            PathBuf::from("/srv/provision/etc/ssh/sshd_config")
        );
        assert_eq!(resolve_target("/srv", "sshd_config"), PathBuf::from("/srvsshd_config"));
    }

    #[test]
    fn parses_json_objects_only() {
        let map = parse_string_to_json(r#"{"port_ssh": 2222}"#.to_string()).unwrap();
        assert_eq!(map.get("port_ssh"), Some(&serde_json::json!(2222)));
        assert!(parse_string_to_json("[1, 2]".to_string()).unwrap().is_empty());
        assert!(parse_string_to_json("{not json".to_string()).is_err());
    }

    #[test]
    fn reads_everything() {
        assert_eq!(read_from("abc\ndef".as_bytes()).unwrap(), "abc\ndef");
    }

    #[test]
    fn explicit_root_wins() {
        assert_eq!(get_root_dir(Some(Path::new("/tmp/x"))).unwrap(), PathBuf::from("/tmp/x"));
        assert_eq!(get_root_dir(None).unwrap(), std::env::current_dir().unwrap());
    }
}
