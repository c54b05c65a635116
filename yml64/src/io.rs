use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};

/// Where the manifest is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// No path, or `-`, means standard input.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Source::File(path),
            _ => Source::Stdin,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }

    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            Source::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("could not read standard input")?;
                Ok(buf)
            }
            Source::File(path) => {
                tracing::debug!(path = %path.display(), "reading input file");
                match fs::read(path) {
                    Ok(buf) => Ok(buf),
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        bail!("file {} does not exist", path.display())
                    }
                    Err(err) => Err(err)
                        .with_context(|| format!("could not read file {}", path.display())),
                }
            }
        }
    }
}

/// Where the transformed manifest goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    /// Overwrite the file the input was read from.
    InPlace(PathBuf),
}

impl Sink {
    pub fn resolve(source: &Source, output: Option<PathBuf>, inplace: bool) -> anyhow::Result<Self> {
        match (output, inplace) {
            (Some(_), true) => bail!("--output and --inplace cannot be used together"),
            (Some(path), false) => Ok(Sink::File(path)),
            (None, true) => match source.path() {
                Some(path) => Ok(Sink::InPlace(path.to_path_buf())),
                None => bail!("--inplace requires an input file"),
            },
            (None, false) => Ok(Sink::Stdout),
        }
    }

    /// Writes `bytes` to the sink. `stdout` receives either the manifest itself or a short
    /// note saying which file was written.
    pub fn write(&self, bytes: &[u8], stdout: &mut dyn Write) -> anyhow::Result<()> {
        match self {
            Sink::Stdout => {
                stdout.write_all(bytes)?;
                stdout.flush()?;
            }
            Sink::File(path) => {
                fs::write(path, bytes)
                    .with_context(|| format!("could not write file {}", path.display()))?;
                tracing::debug!(path = %path.display(), len = bytes.len(), "wrote output file");
                writeln!(stdout, "File {} has been written.", path.display())?;
            }
            Sink::InPlace(path) => {
                replace_file(path, bytes)
                    .with_context(|| format!("could not overwrite file {}", path.display()))?;
                tracing::debug!(path = %path.display(), len = bytes.len(), "overwrote input file");
                writeln!(stdout, "File {} has been updated in place.", path.display())?;
            }
        }

        Ok(())
    }
}

/// Writes to a temporary file next to `path` and renames it over `path`, so a failed write
/// never leaves the original truncated.
fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file().set_permissions(metadata.permissions())?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
