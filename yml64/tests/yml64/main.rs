use std::path::Path;

use anyhow::Context;
use yml64::{Options, Pipeline};

datatest_stable::harness! {
    { test = test, root = "tests/yml64/testdata", pattern = r".*/input\.yaml$" },
}

fn test(path: &Path) -> datatest_stable::Result<()> {
    let dir = path.parent().unwrap();
    let input = std::fs::read(path)?;

    let options_path = dir.join("options.yaml");
    let options = if options_path.exists() {
        yml64::yaml::from_str(&std::fs::read_to_string(&options_path)?)?
    } else {
        Options::default()
    };

    let expected_yaml = dir.join("expected.yaml");
    let expected_stderr = dir.join("expected.stderr");

    match Pipeline::default().process(&input, options) {
        Ok(output) => {
            if expected_stderr.exists() {
                return Err(format!("expected {} to fail", path.display()).into());
            }
            let actual = String::from_utf8(output)?;
            snapshot_yaml(&expected_yaml, &actual)?;
        }
        Err(err) => {
            if expected_yaml.exists() {
                return Err(format!("processing {} failed: {err}", path.display()).into());
            }
            snapshot(&expected_stderr, &format!("{err}\n"))?;
        }
    }

    Ok(())
}

/// Field order and quoting are up to the serializer, so YAML snapshots compare as values.
fn snapshot_yaml(path: &Path, actual: &str) -> datatest_stable::Result<()> {
    if !path.exists() || std::env::var("UPDATE_SNAPSHOTS").is_ok() {
        std::fs::write(path, actual).context("writing snapshot")?;
        return Ok(());
    }

    let expected = std::fs::read_to_string(path).context("reading snapshot")?;
    let expected_value: serde_yaml::Value = serde_yaml::from_str(&expected)?;
    let actual_value: serde_yaml::Value = serde_yaml::from_str(actual)?;
    if expected_value == actual_value {
        return Ok(());
    }

    mismatch(path, &expected, actual)
}

fn snapshot(path: &Path, actual: &str) -> datatest_stable::Result<()> {
    if !path.exists() || std::env::var("UPDATE_SNAPSHOTS").is_ok() {
        std::fs::write(path, actual).context("writing snapshot")?;
        return Ok(());
    }

    let expected = std::fs::read_to_string(path).context("reading snapshot")?;
    if expected == actual {
        return Ok(());
    }

    mismatch(path, &expected, actual)
}

fn mismatch(path: &Path, expected: &str, actual: &str) -> datatest_stable::Result<()> {
    let formatted = format_chunks(dissimilar::diff(expected, actual));
    eprintln!("Snapshot mismatch for {}:\n{}", path.display(), formatted);

    Err(format!("Snapshot mismatch for {}", path.display()).into())
}

fn format_chunks(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[4m\x1b[31m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[4m\x1b[32m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}
