use std::{collections::HashMap, ffi::OsString, path::Path};

use crate::{env::GetEnv, Result};

#[derive(Debug, PartialEq, Clone)]
pub struct Options<P=&'static str>
where P: AsRef<Path> + Clone {
    /// Treat a missing env file as empty instead of failing.
    pub ignore_missing: bool,

    /// Log skipped lines and IO errors.
    pub debug: bool,

    /// Path of the env file. `-` reads from stdin.
    pub path: P,
}

pub const DEFAULT_PATH: &str = ".env";
pub const DEFAULT_IGNORE_MISSING: bool = false;
pub const DEFAULT_DEBUG: bool = false;

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::with_path(DEFAULT_PATH)
    }
}

impl Options<&'static str> {
    /// Reads the flags from `env`, keeping the default path.
    pub fn try_from(env: &impl GetEnv) -> Result<Self> {
        let ignore_missing = env.get_ignore_missing()?;
        let debug = env.get_debug()?;

        Ok(Self { ignore_missing, debug, path: DEFAULT_PATH })
    }
}

impl<P> Options<P>
where P: AsRef<Path> + Clone {
    #[inline]
    pub fn with_path(path: P) -> Self {
        Self {
            ignore_missing: DEFAULT_IGNORE_MISSING,
            debug: DEFAULT_DEBUG,
            path,
        }
    }

    pub fn path<NewP>(&self, value: NewP) -> Options<NewP>
    where NewP: AsRef<Path> + Clone {
        Options {
            ignore_missing: self.ignore_missing,
            debug: self.debug,
            path: value,
        }
    }

    /// Loads the env file into a fresh mapping.
    #[inline]
    pub fn load(&self) -> Result<HashMap<OsString, OsString>> {
        crate::load(self)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OptionType {
    Bool,
}

impl std::fmt::Display for OptionType {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{option_type} option has illegal value: {name:?}={value:?}")]
pub struct IllegalOption {
    name: OsString,
    value: OsString,
    option_type: OptionType,
}

impl IllegalOption {
    #[inline]
    pub fn new(name: OsString, value: OsString, option_type: OptionType) -> Self {
        Self { name, value, option_type }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Builder<P=&'static str>
where P: AsRef<Path> + Clone {
    options: Options<P>,
}

impl Default for Builder {
    #[inline]
    fn default() -> Self {
        Self { options: Options::default() }
    }
}

impl Builder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> Builder<P>
where P: AsRef<Path> + Clone {
    #[inline]
    pub fn ignore_missing(mut self, value: bool) -> Self {
        self.options.ignore_missing = value;
        self
    }

    #[inline]
    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn path<NewP>(&self, value: NewP) -> Builder<NewP>
    where NewP: AsRef<Path> + Clone {
        Builder { options: self.options.path(value) }
    }

    #[inline]
    pub fn options(&self) -> &Options<P> {
        &self.options
    }

    #[inline]
    pub fn into_options(self) -> Options<P> {
        self.options
    }
}

impl<P> From<Builder<P>> for Options<P>
where P: AsRef<Path> + Clone {
    #[inline]
    fn from(value: Builder<P>) -> Self {
        value.into_options()
    }
}
