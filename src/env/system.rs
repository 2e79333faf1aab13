use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}, sync::Mutex};

use super::GetEnv;

/// Reading the environment while another thread modifies it is not thread
/// safe. This mutex only covers access going through [`SystemEnv`].
#[cfg(not(target_family = "windows"))]
static MUTEX: Mutex<()> = Mutex::new(());

/// Read-only view of the launcher's own process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv();

pub const SYSTEM_ENV: SystemEnv = SystemEnv();

impl SystemEnv {
    /// Snapshot of all variables of the current process.
    pub fn hash_map() -> HashMap<OsString, OsString> {
        #[cfg(not(target_family = "windows"))]
        let _lock = MUTEX.lock();

        std::env::vars_os().collect()
    }
}

impl GetEnv for SystemEnv {
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        #[cfg(not(target_family = "windows"))]
        let _lock = MUTEX.lock();

        std::env::var_os(key).map(Cow::from)
    }
}
