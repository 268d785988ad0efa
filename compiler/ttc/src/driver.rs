//! Argument parsing and command execution.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, warn};
use tt_cache::{CacheConfig, CacheError, KernelCache};
use tt_dsl::CodegenError;

use crate::kernels::{sample, SAMPLES};

pub const USAGE: &str = "\
Usage: ttc <kernel> [--cache DIR] [--purge]
       ttc --list
       ttc --purge [--cache DIR]

Options:
  --cache DIR   Store the rendered kernel in the cache at DIR
  --purge       Drop stale cache entries (cache from --cache or TT_EDSL_CACHE_DIR)
  --list        List the bundled kernels";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub kernel: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub purge: bool,
    pub list: bool,
}

impl Options {
    pub fn parse(args: &[String]) -> Result<Self, DriverError> {
        let mut options = Options::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--list" => options.list = true,
                "--purge" => options.purge = true,
                "--cache" => {
                    let Some(dir) = iter.next() else {
                        return Err(DriverError::Usage("--cache needs a directory".into()));
                    };
                    options.cache_dir = Some(PathBuf::from(dir));
                }
                flag if flag.starts_with('-') => {
                    return Err(DriverError::Usage(format!("unknown option '{flag}'")));
                }
                name => {
                    if let Some(first) = &options.kernel {
                        return Err(DriverError::Usage(format!(
                            "more than one kernel given ('{first}' and '{name}')"
                        )));
                    }
                    options.kernel = Some(name.to_string());
                }
            }
        }

        if options.kernel.is_none() && !options.list && !options.purge {
            return Err(DriverError::Usage("no kernel given".into()));
        }
        Ok(options)
    }

    fn cache_config(&self) -> CacheConfig {
        self.cache_dir
            .as_ref()
            .map_or_else(CacheConfig::from_env, CacheConfig::new)
    }
}

/// Error from a driver run.
#[derive(Debug)]
pub enum DriverError {
    Usage(String),
    UnknownKernel(String),
    Codegen(CodegenError),
    Cache(CacheError),
    Output(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Usage(message) => f.write_str(message),
            DriverError::UnknownKernel(name) => {
                write!(f, "unknown kernel '{name}' (try --list)")
            }
            DriverError::Codegen(err) => write!(f, "rendering failed: {err}"),
            DriverError::Cache(err) => err.fmt(f),
            DriverError::Output(err) => write!(f, "cannot write output: {err}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<CodegenError> for DriverError {
    fn from(err: CodegenError) -> Self {
        DriverError::Codegen(err)
    }
}

impl From<CacheError> for DriverError {
    fn from(err: CacheError) -> Self {
        DriverError::Cache(err)
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Output(err)
    }
}

/// Execute `options`, writing results to `out`.
pub fn run(options: &Options, out: &mut impl Write) -> Result<(), DriverError> {
    if options.list {
        for s in SAMPLES {
            writeln!(out, "{:<14} {:<7} {}", s.name, s.role, s.summary)?;
        }
    }

    let mut cache = None;
    if let Some(name) = &options.kernel {
        let sample = sample(name).ok_or_else(|| DriverError::UnknownKernel(name.clone()))?;
        let kernel = sample.build()?;
        for diagnostic in kernel.diagnostics() {
            warn!(kernel = sample.name, "{diagnostic}");
        }
        write!(out, "{}", kernel.source())?;

        if options.cache_dir.is_some() {
            let opened = KernelCache::open(options.cache_config())?;
            let (added, path) = kernel.persist(&opened)?;
            debug!(kernel = sample.name, added, "persisted kernel");
            match path {
                Some(path) => writeln!(out, "cached: {}", path.display())?,
                None => writeln!(out, "not cached")?,
            }
            cache = Some(opened);
        }
    }

    if options.purge {
        let cache = match cache {
            Some(cache) => cache,
            None => KernelCache::open(options.cache_config())?,
        };
        let removed = cache.purge()?;
        writeln!(out, "purged {removed} stale entries, {} remain", cache.len())?;
    }
    Ok(())
}
