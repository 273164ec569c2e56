//! Error types for value rendering.
//!
//! Cycle detection and depth overruns are *not* errors: the renderers recover
//! from both locally by emitting a truncation marker. The error surface is
//! deliberately small:
//!
//! - **I/O failures** from a caller-supplied sink abort the call and are
//!   propagated verbatim.
//! - **Custom-representation failures** (a [`Method`](crate::Method) closure
//!   returning `Err`) are fatal to the call; the engine cannot guess a
//!   fallback rendering.
//! - **Message** carries serde serialization errors surfaced by
//!   [`to_value`](crate::to_value).

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering a value.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to a caller-supplied sink failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A custom-representation capability failed while being invoked.
    #[error("custom representation for {type_name} failed: {source}")]
    Repr {
        type_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Generic message, used for serde serialization failures.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a capability-failure error for the named type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::Error;
    ///
    /// let err = Error::repr("demo::Stamp", "clock went backwards".into());
    /// assert!(err.to_string().contains("demo::Stamp"));
    /// ```
    pub fn repr(type_name: &str, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::Repr {
            type_name: type_name.to_string(),
            source,
        }
    }

    /// Creates an error from a display message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
