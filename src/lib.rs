//! Deep value rendering for debugging: annotated multi-line dumps and
//! verb-driven inline formatting of arbitrary data, with cycle detection.
//!
//! `deepfmt` renders a dynamic [`Value`] tree in two styles:
//!
//! - **Dump**: one element per line, indented, every value prefixed with its
//!   type and sized values annotated with `len`/`cap`. Built for reading
//!   unfamiliar data structures.
//! - **Format**: a single line driven by a [`Verb`] that toggles field names
//!   and type annotations independently, also reachable through the standard
//!   `Display`/`Debug` machinery via [`wrap`].
//!
//! Both styles traverse the same way: references are dereferenced through to
//! their targets, reference cycles are detected per rendering call and cut
//! with a marker instead of recursing forever, and a configurable depth bound
//! truncates deep trees. Values may carry custom rendering capabilities that
//! take precedence over structural traversal (see [`Custom`]).
//!
//! ## Quick Start
//!
//! Any `Serialize` type converts to a [`Value`] with [`to_value`]:
//!
//! ```rust
//! use deepfmt::{sdump, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//! let value = to_value(&server).unwrap();
//! assert_eq!(
//!     sdump(&value).unwrap(),
//!     "(Server) {\n host: (string) (len=9) \"localhost\",\n port: (u16) 8080\n}\n"
//! );
//! ```
//!
//! ## Inline Formatting
//!
//! ```rust
//! use deepfmt::{sformat, to_value, wrap, Verb};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(sformat(Verb::Compact, &value).unwrap(), "{1 2}");
//! assert_eq!(sformat(Verb::WithFields, &value).unwrap(), "{x:1 y:2}");
//! assert_eq!(format!("{:+}", wrap(&value)), "{x:1 y:2}");
//! ```
//!
//! ## Cycles
//!
//! Serde cannot express shared or cyclic data, so cyclic trees are built by
//! hand from shared cells:
//!
//! ```rust
//! use deepfmt::{sformat, Struct, Value, Verb};
//!
//! let node = Value::shared(Value::Nil(None));
//! *node.borrow_mut() = Value::from(
//!     Struct::new("list::Node")
//!         .field("elem", 1i32)
//!         .field("next", Value::reference(&node)),
//! );
//! let out = sformat(Verb::Compact, &Value::reference(&node)).unwrap();
//! assert_eq!(out, "<*>{1 <*><shown>}");
//! ```
//!
//! Detection is scoped to the rendering stack: a value shared by two sibling
//! fields renders twice in full, and only genuine re-entry is cut.
//!
//! ## Configuration
//!
//! [`Options`] controls annotations, depth, capability dispatch, and the
//! clean output style; see its documentation for the full surface.
//!
//! ```rust
//! use deepfmt::{sdump_with_options, Options, Value};
//!
//! let value = Value::seq(vec![Value::from(1i32), Value::from(2i32)]);
//! let clean = sdump_with_options(&value, &Options::clean()).unwrap();
//! assert_eq!(clean, "[\n  1,\n  2\n]\n");
//! ```

mod dispatch;
mod dump;
mod error;
mod fields;
mod format;
mod macros;
mod options;
mod resolve;
mod ser;
mod track;
mod value;

pub use dispatch::{Method, Methods, Receiver, ReprResult};
pub use error::{Error, Result};
pub use fields::{Field, FieldMap};
pub use format::{Formatted, Verb};
pub use options::Options;
pub use resolve::{CodeLocation, CodeResolver, FuncId, NoSymbols, SymbolTable};
pub use ser::ValueSerializer;
pub use value::{
    classify, Chan, Custom, Descriptor, Float, Func, Int, Kind, Map, Ref, Seq, Struct, Uint,
    Value,
};

use serde::Serialize;
use std::io;

/// Renders `value` in the dump style with default options.
///
/// The output always ends with exactly one newline.
///
/// # Examples
///
/// ```rust
/// use deepfmt::{sdump, Value};
///
/// assert_eq!(sdump(&Value::from(127i8)).unwrap(), "(i8) 127\n");
/// ```
pub fn sdump(value: &Value) -> Result<String> {
    dump::dump_value(value, &Options::new())
}

/// Renders `value` in the dump style with the given options.
pub fn sdump_with_options(value: &Value, options: &Options) -> Result<String> {
    dump::dump_value(value, options)
}

/// Writes the dump rendering of `value` to `writer`.
pub fn dump_to<W: io::Write>(writer: &mut W, value: &Value) -> Result<()> {
    dump_to_with_options(writer, value, &Options::new())
}

/// Writes the dump rendering of `value` to `writer` with the given options.
pub fn dump_to_with_options<W: io::Write>(
    writer: &mut W,
    value: &Value,
    options: &Options,
) -> Result<()> {
    let rendered = dump::dump_value(value, options)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Renders `value` inline with the given verb and default options.
///
/// No trailing newline is added.
///
/// # Examples
///
/// ```rust
/// use deepfmt::{sformat, Value, Verb};
///
/// let value = Value::seq(vec![Value::from(1i32), Value::from(2i32)]);
/// assert_eq!(sformat(Verb::Compact, &value).unwrap(), "[1 2]");
/// assert_eq!(sformat(Verb::WithTypes, &value).unwrap(), "([]i32)[(i32)1 (i32)2]");
/// ```
pub fn sformat(verb: Verb, value: &Value) -> Result<String> {
    format::format_value(verb, value, &Options::new())
}

/// Renders `value` inline with the given verb and options.
pub fn sformat_with_options(verb: Verb, value: &Value, options: &Options) -> Result<String> {
    format::format_value(verb, value, options)
}

/// Writes the inline rendering of `value` to `writer`.
pub fn format_to<W: io::Write>(writer: &mut W, verb: Verb, value: &Value) -> Result<()> {
    format_to_with_options(writer, verb, value, &Options::new())
}

/// Writes the inline rendering of `value` to `writer` with the given options.
pub fn format_to_with_options<W: io::Write>(
    writer: &mut W,
    verb: Verb,
    value: &Value,
    options: &Options,
) -> Result<()> {
    let rendered = format::format_value(verb, value, options)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Binds `value` to default options for use with `format!` and friends.
///
/// # Examples
///
/// ```rust
/// use deepfmt::{wrap, Value};
///
/// let value = Value::from(5i32);
/// assert_eq!(format!("{}", wrap(&value)), "5");
/// assert_eq!(format!("{:#}", wrap(&value)), "(i32)5");
/// ```
#[must_use]
pub fn wrap(value: &Value) -> Formatted<'_> {
    Formatted::new(value, Options::new())
}

/// Binds `value` to the given options for use with `format!` and friends.
#[must_use]
pub fn wrap_with_options(value: &Value, options: Options) -> Formatted<'_> {
    Formatted::new(value, options)
}

/// Converts any `Serialize` type into a [`Value`] tree.
///
/// Numeric widths, struct names, and field order are preserved. Serde erases
/// capacities and reference identities, so converted trees contain neither;
/// build values by hand when those matter.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_to_writer() {
        let mut buf = Vec::new();
        dump_to(&mut buf, &Value::from(true)).unwrap();
        assert_eq!(buf, b"(bool) true\n");
    }

    #[test]
    fn test_format_to_writer() {
        let mut buf = Vec::new();
        format_to(&mut buf, Verb::Compact, &Value::from("hi")).unwrap();
        assert_eq!(buf, b"hi");
    }

    #[test]
    fn test_wrap_respects_options() {
        let value = Value::from("a b");
        let quoted = wrap_with_options(&value, Options::new().with_quoted_strings());
        assert_eq!(format!("{}", quoted), "\"a b\"");
    }
}
