use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod error;
pub use error::Error;
pub use error::ErrorKind;

pub mod options;
pub use options::Options;
use options::Builder;

pub mod result;
pub use result::Result;

pub mod env;
pub use env::Env;
use env::{SystemEnv, SYSTEM_ENV};

pub mod args;
pub use args::Args;

pub mod launch;
pub mod line_splitter;
pub mod parser;

pub(crate) const DEBUG_PREFIX: &str = concat!("[", env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION"), "][DEBUG] ");

#[inline]
pub fn build() -> Builder {
    Builder::new()
}

/// Loads the env file described by `options` into a fresh mapping.
#[inline]
pub fn load<P>(options: &Options<P>) -> Result<HashMap<OsString, OsString>>
where P: AsRef<Path> + Clone {
    let mut env = HashMap::new();
    load_into(&mut env, options)?;
    Ok(env)
}

/// Loads the env file described by `options` into `env`, overwriting existing
/// keys. A path of `-` reads from stdin.
pub fn load_into<P>(env: &mut impl Env, options: &Options<P>) -> Result<()>
where P: AsRef<Path> + Clone {
    let path = options.path.as_ref();

    if path.as_os_str() == "-" {
        return load_from_reader(&mut std::io::stdin().lock(), env, options);
    }

    let mut file = match File::open(path) {
        Err(err) => {
            if options.debug {
                let path_str = path.to_string_lossy();
                eprintln!("{DEBUG_PREFIX}{path_str}: {err}");
            }
            if options.ignore_missing && err.kind() == std::io::ErrorKind::NotFound {
                return Ok(());
            }
            return Err(Error::file(path, err));
        }
        Ok(file) => file,
    };

    load_from_reader(&mut file, env, options)
}

pub fn load_from_reader<P>(reader: &mut dyn Read, env: &mut impl Env, options: &Options<P>) -> Result<()>
where P: AsRef<Path> + Clone {
    let path = options.path.as_ref();
    let mut src = String::new();

    if let Err(err) = reader.read_to_string(&mut src) {
        if options.debug {
            let path_str = path.to_string_lossy();
            eprintln!("{DEBUG_PREFIX}{path_str}: {err}");
        }
        return Err(Error::file(path, err));
    }

    parser::parse_into(&src, env, &options.path(path));

    Ok(())
}

/// Copies `parent` and overlays it with `overlay`. On conflict the overlay wins.
pub fn merge_env<I, K, V>(parent: I, overlay: &HashMap<OsString, OsString>) -> HashMap<OsString, OsString>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut env: HashMap<OsString, OsString> = parent.into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect();

    for (key, value) in overlay {
        env.set(key, value);
    }

    env
}

/// Parses `args`, loads the env file, runs the command with the merged
/// environment and returns the exit code to terminate with.
pub fn run(args: impl IntoIterator<Item = impl Into<OsString>>) -> Result<i32> {
    let args = Args::parse(args)?;
    let path: &OsStr = args.file.as_deref().unwrap_or(options::DEFAULT_PATH.as_ref());
    let options = Options::try_from(&SYSTEM_ENV)?.path(path);

    let overlay = options.load()?;
    let env = merge_env(SystemEnv::hash_map(), &overlay);

    if options.debug {
        eprintln!("{DEBUG_PREFIX}loaded {} variable(s) from {}, running {:?}",
            overlay.len(), Path::new(path).display(), args.command);
    }

    let program = args.program().ok_or(Error::MissingCommand)?;
    let status = launch::spawn_and_wait(program, args.program_args(), &env)?;

    Ok(launch::exit_code(status))
}
