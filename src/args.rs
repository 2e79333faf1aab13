use std::ffi::{OsStr, OsString};

use crate::{Error, Result};

/// Parsed command line: `[--file <path>] [--] <command> [<command-args>...]`
#[derive(Debug, PartialEq, Clone)]
pub struct Args {
    pub file: Option<OsString>,
    pub command: Vec<OsString>,
}

impl Args {
    /// Option parsing stops at `--` or at the first argument that doesn't
    /// start with `-`. Everything from there on is the command, passed through
    /// as is. `--file <path>` is the only option.
    pub fn parse(args: impl IntoIterator<Item = impl Into<OsString>>) -> Result<Self> {
        use lexopt::Arg::*;

        let mut parser = lexopt::Parser::from_args(args);
        let mut file = None;

        while let Some(token) = peek_token(&mut parser) {
            if token == "--" {
                parser.raw_args()?.next();
                break;
            }

            if !token.to_string_lossy().starts_with('-') {
                break;
            }

            // lexopt splits `--file=x` and `-xyz`, so compare the whole token too
            let is_file = matches!(parser.next()?, Some(Long("file")));
            if !is_file || token != "--file" {
                return Err(Error::IllegalArgument(token.to_string_lossy().into_owned()));
            }

            let value = parser.value()
                .map_err(|_| Error::MissingValue("--file".to_owned()))?;
            file = Some(value);
        }

        let command: Vec<OsString> = parser.raw_args()?.collect();
        if command.is_empty() {
            return Err(Error::MissingCommand);
        }

        Ok(Self { file, command })
    }

    #[inline]
    pub fn program(&self) -> Option<&OsStr> {
        self.command.first().map(OsString::as_os_str)
    }

    #[inline]
    pub fn program_args(&self) -> &[OsString] {
        self.command.get(1..).unwrap_or_default()
    }
}

fn peek_token(parser: &mut lexopt::Parser) -> Option<OsString> {
    parser.try_raw_args()?.peek().map(OsStr::to_os_string)
}
