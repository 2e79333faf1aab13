pub mod system;
pub mod empty;

use std::{borrow::Cow, collections::HashMap, ffi::{OsStr, OsString}, hash::BuildHasher};

use crate::{options::{IllegalOption, OptionType, DEFAULT_DEBUG, DEFAULT_IGNORE_MISSING}, Result};

pub use system::{SystemEnv, SYSTEM_ENV};
pub use empty::EmptyEnv;

pub const DEBUG_KEY: &str = "DOTENV_CONFIG_DEBUG";
pub const IGNORE_MISSING_KEY: &str = "DOTENV_CONFIG_IGNORE_MISSING";

pub fn parse_bool(value: &OsStr) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

pub trait GetEnv {
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>>;

    #[inline]
    fn get_ignore_missing(&self) -> Result<bool> {
        self.get_bool(IGNORE_MISSING_KEY.as_ref(), DEFAULT_IGNORE_MISSING)
    }

    #[inline]
    fn get_debug(&self) -> Result<bool> {
        self.get_bool(DEBUG_KEY.as_ref(), DEFAULT_DEBUG)
    }

    fn get_bool(&self, key: &OsStr, default_value: bool) -> Result<bool> {
        let Some(value) = self.get(key) else {
            return Ok(default_value);
        };

        if value.is_empty() {
            return Ok(default_value);
        }

        let Some(value) = parse_bool(&value) else {
            return Err(IllegalOption::new(
                key.to_owned(),
                value.into_owned(),
                OptionType::Bool).into());
        };

        Ok(value)
    }
}

pub trait Env: GetEnv {
    fn set(&mut self, key: &OsStr, value: &OsStr);
}

impl<T: GetEnv> GetEnv for &T {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        (**self).get(key)
    }
}

impl<T: GetEnv> GetEnv for &mut T {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        (**self).get(key)
    }
}

impl<T: Env> Env for &mut T {
    #[inline]
    fn set(&mut self, key: &OsStr, value: &OsStr) {
        (**self).set(key, value);
    }
}

impl<BH: BuildHasher> GetEnv for HashMap<OsString, OsString, BH> {
    #[inline]
    fn get<'a>(&'a self, key: &OsStr) -> Option<Cow<'a, OsStr>> {
        HashMap::get(self, key).map(Cow::from)
    }
}

impl<BH: BuildHasher> Env for HashMap<OsString, OsString, BH> {
    #[inline]
    fn set(&mut self, key: &OsStr, value: &OsStr) {
        self.insert(key.to_os_string(), value.to_os_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools() {
        assert_eq!(parse_bool("true".as_ref()), Some(true));
        assert_eq!(parse_bool("True".as_ref()), Some(true));
        assert_eq!(parse_bool("1".as_ref()), Some(true));
        assert_eq!(parse_bool("FALSE".as_ref()), Some(false));
        assert_eq!(parse_bool("0".as_ref()), Some(false));
        assert_eq!(parse_bool("yes".as_ref()), None);
    }

    #[test]
    fn os_string_map_through_traits() {
        let mut env = HashMap::<OsString, OsString>::new();
        Env::set(&mut env, "KEY".as_ref(), "VALUE".as_ref());

        assert_eq!(GetEnv::get(&env, OsStr::new("KEY")).as_deref(), Some(OsStr::new("VALUE")));
        assert_eq!(GetEnv::get(&env, OsStr::new("OTHER")), None);
    }

    #[test]
    fn bool_option_from_map() {
        let mut env = HashMap::<OsString, OsString>::new();
        assert!(!env.get_debug().unwrap());

        env.insert(DEBUG_KEY.into(), "true".into());
        assert!(env.get_debug().unwrap());

        env.insert(IGNORE_MISSING_KEY.into(), "nope".into());
        assert!(env.get_ignore_missing().is_err());
    }
}
