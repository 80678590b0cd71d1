//! Error kinds for dsss, following the same shape as `sst::Error`: every
//! variant carries a [ErrorCore] and derives [prototk_derive::Message] so it
//! can cross an RPC boundary unchanged.

use prototk_derive::Message;

use zerror::{iotoz, Z};
use zerror_core::ErrorCore;

/////////////////////////////////////////////// Error //////////////////////////////////////////////

/// The error kinds dsss can produce. Per §7: argument errors and check
/// failures are reported by rank 0; I/O and transport errors are fatal on
/// every rank; contract violations (mismatched collective call order) are
/// not represented here because they are undefined behaviour, not a
/// recoverable `Result`.
#[derive(Clone, Debug, Message)]
pub enum Error {
    #[prototk(557056, message)]
    Success {
        #[prototk(1, message)]
        core: ErrorCore,
    },
    #[prototk(557057, message)]
    Argument {
        #[prototk(1, message)]
        core: ErrorCore,
        #[prototk(2, string)]
        what: String,
    },
    #[prototk(557058, message)]
    Io {
        #[prototk(1, message)]
        core: ErrorCore,
        #[prototk(2, string)]
        what: String,
    },
    #[prototk(557059, message)]
    Transport {
        #[prototk(1, message)]
        core: ErrorCore,
        #[prototk(2, string)]
        what: String,
    },
    #[prototk(557060, message)]
    CheckFailed {
        #[prototk(1, message)]
        core: ErrorCore,
        #[prototk(2, string)]
        what: String,
    },
    #[prototk(557061, message)]
    InvalidText {
        #[prototk(1, message)]
        core: ErrorCore,
        #[prototk(2, uint64)]
        position: u64,
    },
}

impl Error {
    fn core(&self) -> &ErrorCore {
        match self {
            Error::Success { core } => core,
            Error::Argument { core, .. } => core,
            Error::Io { core, .. } => core,
            Error::Transport { core, .. } => core,
            Error::CheckFailed { core, .. } => core,
            Error::InvalidText { core, .. } => core,
        }
    }

    fn map_core(self, f: impl FnOnce(ErrorCore) -> ErrorCore) -> Self {
        match self {
            Error::Success { core } => Error::Success { core: f(core) },
            Error::Argument { core, what } => Error::Argument { core: f(core), what },
            Error::Io { core, what } => Error::Io { core: f(core), what },
            Error::Transport { core, what } => Error::Transport { core: f(core), what },
            Error::CheckFailed { core, what } => Error::CheckFailed { core: f(core), what },
            Error::InvalidText { core, position } => {
                Error::InvalidText { core: f(core), position }
            }
        }
    }

    pub fn argument(what: impl Into<String>) -> Self {
        Error::Argument {
            core: ErrorCore::default(),
            what: what.into(),
        }
    }

    pub fn io(what: impl Into<String>) -> Self {
        Error::Io {
            core: ErrorCore::default(),
            what: what.into(),
        }
    }

    pub fn check_failed(what: impl Into<String>) -> Self {
        Error::CheckFailed {
            core: ErrorCore::default(),
            what: what.into(),
        }
    }

    pub fn invalid_text(position: u64) -> Self {
        Error::InvalidText {
            core: ErrorCore::default(),
            position,
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::Success {
            core: ErrorCore::default(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Success { .. } => write!(fmt, "success"),
            Error::Argument { what, .. } => write!(fmt, "argument error: {what}"),
            Error::Io { what, .. } => write!(fmt, "I/O error: {what}"),
            Error::Transport { what, .. } => write!(fmt, "transport error: {what}"),
            Error::CheckFailed { what, .. } => write!(fmt, "check failed: {what}"),
            Error::InvalidText { position, .. } => {
                write!(fmt, "text contains a zero byte at position {position}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(err.to_string())
    }
}

impl Z for Error {
    type Error = Error;

    fn long_form(&self) -> String {
        format!("{}\n\n{}", self, self.core().long_form())
    }

    fn with_token(self, identifier: &str, value: &str) -> Self::Error {
        self.map_core(|core| core.with_token(identifier, value))
    }

    fn with_url(self, identifier: &str, url: &str) -> Self::Error {
        self.map_core(|core| core.with_url(identifier, url))
    }

    fn with_variable<X: std::fmt::Debug>(self, variable: &str, x: X) -> Self::Error {
        self.map_core(|core| core.with_variable(variable, x))
    }

    fn with_info<X: std::fmt::Debug>(self, name: &str, value: X) -> Self::Error {
        self.map_core(|core| core.with_variable(name, value))
    }

    fn with_lazy_info<F: FnOnce() -> String>(self, name: &str, value: F) -> Self::Error {
        self.map_core(|core| core.with_variable(name, value()))
    }
}

iotoz! {Error}
