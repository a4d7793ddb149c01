use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize with 4-space indentation, the format the snapshot and id store
/// files have always used.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the raw object-change payload for a run, overwriting any previous
/// snapshot of the same flow.
pub fn write_snapshot<T: Serialize>(dir: &Path, file_name: &str, payload: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let path = dir.join(file_name);
    let json = to_json_pretty(payload)?;
    fs::write(&path, json).with_context(|| format!("writing snapshot {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::write_snapshot;
    use serde_json::{Value, json};

    #[test]
    fn snapshot_round_trips_and_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let payload = json!({
            "digest": "9WzSXdCNquKp3rGkZjA",
            "objectChanges": [
                { "type": "created", "objectId": "0x1" },
                { "type": "mutated", "objectId": "0x2" }
            ]
        });

        let path = write_snapshot(dir.path(), "water_cooler.json", &payload).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, payload);
        assert!(written.contains("\n    \"digest\""));
    }

    #[test]
    fn missing_output_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let path = write_snapshot(&nested, "warehouse.json", &json!({"ok": true})).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn snapshot_is_overwritten_on_rerun() {
        let dir = tempfile::tempdir().unwrap();

        write_snapshot(dir.path(), "warehouse.json", &json!({"run": 1})).unwrap();
        let path = write_snapshot(dir.path(), "warehouse.json", &json!({"run": 2})).unwrap();

        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, json!({"run": 2}));
    }
}
