//! Capability-based custom rendering.
//!
//! A value may expose up to three custom-representation capabilities, modeled
//! as a fixed-priority set rather than an inheritance hierarchy:
//!
//! - `syntax`: a representation intended to look like constructible source
//!   syntax; consulted only by the type-annotated format verbs.
//! - `fault`: the value represents a failure condition with its own message.
//! - `text`: generic stringification.
//!
//! Each capability records its receiver: [`Receiver::ByValue`] methods apply
//! to the bare value and to any reference to it; [`Receiver::ByRef`] methods
//! apply to a reference, and to a bare value only when that value is flagged
//! addressable and reference-receiver methods are not disabled.
//!
//! ## Examples
//!
//! ```rust
//! use deepfmt::{sformat, Custom, Method, Receiver, Value, Verb};
//!
//! let stamp = Custom::new(Value::from("raw"))
//!     .named("demo::Stamp")
//!     .text(Method::display(Receiver::ByValue, || "tick 42".to_string()));
//! assert_eq!(sformat(Verb::Compact, &stamp.into_value()).unwrap(), "tick 42");
//! ```

use std::fmt;
use std::rc::Rc;

use crate::options::Options;
use crate::value::Custom;

/// Result of invoking a capability closure.
///
/// A failure here is fatal to the rendering call; the engine never guesses a
/// fallback representation.
pub type ReprResult = std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;

/// The receiver form a capability was declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// Applies to the bare value and to references to it.
    ByValue,
    /// Applies to references; to a bare value only when addressable.
    ByRef,
}

/// One custom-representation capability.
#[derive(Clone)]
pub struct Method {
    receiver: Receiver,
    render: Rc<dyn Fn() -> ReprResult>,
}

impl Method {
    /// Creates a capability from a fallible closure.
    pub fn new<F>(receiver: Receiver, render: F) -> Self
    where
        F: Fn() -> ReprResult + 'static,
    {
        Method {
            receiver,
            render: Rc::new(render),
        }
    }

    /// Creates a capability from an infallible closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::{Method, Receiver};
    ///
    /// let m = Method::display(Receiver::ByValue, || "ready".to_string());
    /// ```
    pub fn display<F>(receiver: Receiver, render: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Method {
            receiver,
            render: Rc::new(move || Ok(render())),
        }
    }

    #[must_use]
    pub fn receiver(&self) -> Receiver {
        self.receiver
    }

    pub(crate) fn invoke(&self) -> ReprResult {
        (self.render)()
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("receiver", &self.receiver)
            .finish_non_exhaustive()
    }
}

/// The capability set a [`Custom`] value carries.
#[derive(Clone, Debug, Default)]
pub struct Methods {
    pub syntax: Option<Method>,
    pub fault: Option<Method>,
    pub text: Option<Method>,
}

impl Methods {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.syntax.is_none() && self.fault.is_none() && self.text.is_none()
    }
}

/// Picks and invokes the highest-priority usable capability, if any.
///
/// `via_ref` is true when the value was reached through a reference (the
/// referenced value is then addressable by construction). `syntax_mode`
/// selects the syntax-first precedence used by type-annotated verbs.
pub(crate) fn custom_repr(
    custom: &Custom,
    via_ref: bool,
    options: &Options,
    syntax_mode: bool,
) -> Option<ReprResult> {
    if options.disable_methods {
        return None;
    }
    let usable = |method: &&Method| match method.receiver {
        Receiver::ByValue => true,
        Receiver::ByRef => via_ref || (custom.addressable && !options.disable_pointer_methods),
    };
    let methods = &custom.methods;
    let picked = if syntax_mode {
        methods
            .syntax
            .as_ref()
            .filter(usable)
            .or_else(|| methods.fault.as_ref().filter(usable))
            .or_else(|| methods.text.as_ref().filter(usable))
    } else {
        methods
            .fault
            .as_ref()
            .filter(usable)
            .or_else(|| methods.text.as_ref().filter(usable))
    };
    picked.map(Method::invoke)
}
