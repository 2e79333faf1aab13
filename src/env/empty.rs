use std::{borrow::Cow, ffi::OsStr};

use super::GetEnv;

/// An environment without any variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnv();

impl EmptyEnv {
    #[inline]
    pub fn new() -> Self {
        Self()
    }
}

impl GetEnv for EmptyEnv {
    #[inline]
    fn get<'a>(&'a self, _key: &OsStr) -> Option<Cow<'a, OsStr>> {
        None
    }
}
