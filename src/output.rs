//! Output destination.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Path value that selects stdout.
pub const STDOUT_PATH: &str = "-";

/// Where generated text is written.
#[derive(Debug)]
pub enum Destination {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Destination {
    /// Open `path` for writing, truncating it, or stdout for `-`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == STDOUT_PATH {
            return Ok(Self::Stdout(io::stdout()));
        }
        let file = File::create(path).map_err(|source| Error::Open {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(Self::File(BufWriter::new(file)))
    }

    /// Write `output` in one go and flush.
    pub fn emit(&mut self, output: &[u8]) -> Result<()> {
        self.write_all(output)?;
        self.flush()?;
        Ok(())
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(out) => out.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.lock().write_all(buf),
            Self::File(out) => out.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(out) => out.flush(),
        }
    }
}
