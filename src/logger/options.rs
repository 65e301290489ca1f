//! Option functions: construction-time transformations of [`Options`],
//! applied in order by [`Logger::new`](super::Logger::new).

use crate::level::Level;
use crate::output::{LineWriter, open_append};
use std::io::Write;
use std::path::PathBuf;

/// Threshold plus the writer every call goes through.
#[derive(Debug, Default)]
pub struct Options {
    pub(crate) writer: LineWriter,
    pub(crate) level: Level,
}

impl Options {
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn writer(&self) -> &LineWriter {
        &self.writer
    }
}

/// One step of logger construction. Returning `Err` aborts the whole fold.
pub type OptFn = Box<dyn FnOnce(Options) -> Result<Options, crate::Error>>;

/// Sets the threshold from a level name (`DEBUG`, `INFO`, `WARNING`, `ERROR`).
///
/// The name is parsed when the option is applied; an unknown or differently
/// cased name fails construction with [`crate::Error::InvalidLevel`].
#[must_use]
pub fn with_level(name: impl Into<String>) -> OptFn {
    let name = name.into();
    Box::new(move |mut opts: Options| -> Result<Options, crate::Error> {
        opts.level = name.parse()?;
        Ok(opts)
    })
}

/// Sets the threshold from an already-typed level.
#[must_use]
pub fn with_threshold(level: Level) -> OptFn {
    Box::new(move |mut opts: Options| -> Result<Options, crate::Error> {
        opts.level = level;
        Ok(opts)
    })
}

/// Redirects output to `destination`.
#[must_use]
pub fn with_writer(destination: impl Write + Send + 'static) -> OptFn {
    Box::new(move |opts: Options| -> Result<Options, crate::Error> {
        opts.writer.set_output(destination);
        Ok(opts)
    })
}

/// Appends output to the file at `path`, creating it and its parent directories.
#[must_use]
pub fn with_file(path: impl Into<PathBuf>) -> OptFn {
    let path = path.into();
    Box::new(move |opts: Options| -> Result<Options, crate::Error> {
        let file = open_append(&path)?;
        opts.writer.set_output(file);
        Ok(opts)
    })
}
