//! Command-line arguments: `<program> <password> [maximum length]`.

use std::ffi::OsString;

use thiserror::Error;

/// Bound used when no maximum length is given.
pub const DEFAULT_MAX_LEN: usize = 128;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("Expected 1 or 2 arguments, got {0}")]
    WrongArgumentCount(usize),
    #[error("Error: Second argument must be a size_t (got '{0}').")]
    NotANumber(String),
    #[error("Error: Second argument must be greater than 0 (got {0}).")]
    Negative(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub target: String,
    pub max_len: usize,
}

impl Args {
    /// Parses the full argument vector, program name included.
    pub fn parse_from<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().skip(1).map(Into::into).collect();

        let (target, max_len) = match args.as_slice() {
            [target] => (target.clone(), DEFAULT_MAX_LEN),
            [target, max_len] => (target.clone(), parse_max_len(max_len)?),
            _ => return Err(UsageError::WrongArgumentCount(args.len())),
        };

        Ok(Self { target, max_len })
    }

    /// Like [`Args::parse_from`] for raw OS arguments; non-Unicode bytes are
    /// replaced rather than rejected.
    pub fn parse_from_os<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse_from(args.into_iter().map(|arg| arg.to_string_lossy().into_owned()))
    }
}

fn parse_max_len(raw: &str) -> Result<usize, UsageError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| UsageError::NotANumber(raw.to_string()))?;
    usize::try_from(value).map_err(|_| UsageError::Negative(value))
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} <password> [maximum length]", program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_only() {
        let args = Args::parse_from(["pwd-crack", "hunter2"]).unwrap();
        assert_eq!(args.target, "hunter2");
        assert_eq!(args.max_len, 128);
    }

    #[test]
    fn test_password_and_length() {
        let args = Args::parse_from(["pwd-crack", "hunter2", "12"]).unwrap();
        assert_eq!(args.max_len, 12);
    }

    #[test]
    fn test_zero_length_accepted() {
        let args = Args::parse_from(["pwd-crack", "hunter2", "0"]).unwrap();
        assert_eq!(args.max_len, 0);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(
            Args::parse_from(["pwd-crack"]),
            Err(UsageError::WrongArgumentCount(0))
        );
        assert_eq!(
            Args::parse_from(["pwd-crack", "a", "1", "extra"]),
            Err(UsageError::WrongArgumentCount(3))
        );
    }

    #[test]
    fn test_non_numeric_length() {
        assert_eq!(
            Args::parse_from(["pwd-crack", "hunter2", "ten"]),
            Err(UsageError::NotANumber("ten".to_string()))
        );
    }

    #[test]
    fn test_negative_length() {
        assert_eq!(
            Args::parse_from(["pwd-crack", "hunter2", "-4"]),
            Err(UsageError::Negative(-4))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_password_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let args = Args::parse_from_os([
            OsString::from("pwd-crack"),
            OsString::from_vec(b"caf\xe9".to_vec()),
            OsString::from("8"),
        ])
        .unwrap();
        assert_eq!(args.target, "caf\u{FFFD}");
        assert_eq!(args.max_len, 8);
    }

    #[test]
    fn test_usage_line() {
        assert_eq!(usage("pwd-crack"), "Usage: pwd-crack <password> [maximum length]");
    }
}
