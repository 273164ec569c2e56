//! Dynamic value representation for the introspection engine.
//!
//! This module provides the [`Value`] enum, which describes any shape the
//! renderers understand: width-preserving numeric scalars, strings,
//! sequences, mappings, named aggregates, references (which may form genuine
//! cycles through `Rc<RefCell<Value>>`), function-like and channel-like
//! values, and values carrying custom rendering capabilities.
//!
//! ## Core Types
//!
//! - [`Value`]: any renderable value
//! - [`Int`], [`Uint`], [`Float`]: numeric scalars that remember their width,
//!   so `(i8) 127` and `(i64) 127` stay distinguishable in annotated output
//! - [`Kind`] and [`Descriptor`]: the classifier's view of a value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use deepfmt::{Struct, Value};
//!
//! let point = Struct::new("demo::Point")
//!     .field("x", 1i32)
//!     .field("y", 2i32);
//! let value = Value::from(point);
//! assert_eq!(value.type_name(), "demo::Point");
//! ```
//!
//! ### References and Cycles
//!
//! ```rust
//! use deepfmt::{Struct, Value};
//!
//! let cell = Value::shared(Value::from(5i32));
//! let two_handles = Value::seq(vec![
//!     Value::reference(&cell),
//!     Value::reference(&cell),
//! ]);
//! // Both references share one identity; neither is a cycle.
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dispatch::{Method, Methods};
use crate::fields::FieldMap;
use crate::resolve::FuncId;
use crate::track::Tracker;

/// A signed integer scalar that remembers its declared width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Int {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
}

/// An unsigned integer scalar that remembers its declared width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Uint {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
}

/// A floating-point scalar that remembers its declared width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),
}

impl Int {
    /// The declared type name, e.g. `"i32"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Int::I8(_) => "i8",
            Int::I16(_) => "i16",
            Int::I32(_) => "i32",
            Int::I64(_) => "i64",
            Int::I128(_) => "i128",
        }
    }

    /// The value widened to `i128`.
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        match *self {
            Int::I8(v) => v as i128,
            Int::I16(v) => v as i128,
            Int::I32(v) => v as i128,
            Int::I64(v) => v as i128,
            Int::I128(v) => v,
        }
    }
}

impl Uint {
    /// The declared type name, e.g. `"u8"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Uint::U8(_) => "u8",
            Uint::U16(_) => "u16",
            Uint::U32(_) => "u32",
            Uint::U64(_) => "u64",
            Uint::U128(_) => "u128",
        }
    }

    /// The value widened to `u128`.
    #[must_use]
    pub fn as_u128(&self) -> u128 {
        match *self {
            Uint::U8(v) => v as u128,
            Uint::U16(v) => v as u128,
            Uint::U32(v) => v as u128,
            Uint::U64(v) => v as u128,
            Uint::U128(v) => v,
        }
    }
}

impl Float {
    /// The declared type name, `"f32"` or `"f64"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Float::F32(_) => "f32",
            Float::F64(_) => "f64",
        }
    }

    /// The value widened to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Float::F32(v) => v as f64,
            Float::F64(v) => v,
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::I8(v) => write!(f, "{}", v),
            Int::I16(v) => write!(f, "{}", v),
            Int::I32(v) => write!(f, "{}", v),
            Int::I64(v) => write!(f, "{}", v),
            Int::I128(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uint::U8(v) => write!(f, "{}", v),
            Uint::U16(v) => write!(f, "{}", v),
            Uint::U32(v) => write!(f, "{}", v),
            Uint::U64(v) => write!(f, "{}", v),
            Uint::U128(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Float::F32(v) => write!(f, "{}", v),
            Float::F64(v) => write!(f, "{}", v),
        }
    }
}

/// An indexed sequence of values.
///
/// `type_name` overrides the synthesized `[]T` name; `capacity` is the
/// declared capacity where the producing container exposes one (`Vec` does,
/// serde does not).
#[derive(Clone, Debug)]
pub struct Seq {
    pub type_name: Option<String>,
    pub capacity: Option<usize>,
    pub items: Vec<Value>,
}

/// An associative mapping. Entries render in their stored order.
#[derive(Clone, Debug)]
pub struct Map {
    pub type_name: Option<String>,
    pub entries: Vec<(Value, Value)>,
}

/// A named aggregate with ordered fields.
#[derive(Clone, Debug)]
pub struct Struct {
    pub name: String,
    pub fields: FieldMap,
}

impl Struct {
    /// Creates an aggregate with the given declared type name and no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Struct {
            name: name.into(),
            fields: FieldMap::new(),
        }
    }

    /// Adds a public field, consuming and returning the aggregate.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Adds a private field; skipped under `skip_private_fields`.
    #[must_use]
    pub fn private_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert_private(name.to_string(), value.into());
        self
    }
}

/// A reference to a shared value cell, or a typed nil reference.
///
/// Identity is the address of the shared cell, so clones of the same
/// `Rc` compare as the same reference and cycles are detectable.
#[derive(Clone, Debug)]
pub struct Ref {
    /// Declared target type name; required to annotate nil references.
    pub type_name: Option<String>,
    pub target: Option<Rc<RefCell<Value>>>,
}

/// A function-like value, resolved through the configured
/// [`CodeResolver`](crate::CodeResolver).
#[derive(Clone, Debug, PartialEq)]
pub struct Func {
    pub type_name: String,
    pub id: FuncId,
}

/// A channel-like value: nil, or an opaque identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Chan {
    pub type_name: String,
    pub id: Option<usize>,
}

/// A value carrying custom rendering capabilities.
///
/// Wraps an inner structural value with an optional type-name override, an
/// addressability flag (which governs whether [`Receiver::ByRef`]
/// capabilities apply to the bare value), and up to three
/// [`Methods`](crate::Methods).
///
/// [`Receiver::ByRef`]: crate::Receiver::ByRef
#[derive(Clone, Debug)]
pub struct Custom {
    pub type_name: Option<String>,
    pub addressable: bool,
    pub methods: Methods,
    pub value: Box<Value>,
}

impl Custom {
    /// Wraps a structural value with an empty capability set.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Custom {
            type_name: None,
            addressable: false,
            methods: Methods::default(),
            value: Box::new(value),
        }
    }

    /// Overrides the declared type name.
    #[must_use]
    pub fn named(mut self, type_name: &str) -> Self {
        self.type_name = Some(type_name.to_string());
        self
    }

    /// Flags the value as addressable (a mutable slot rather than a
    /// temporary), making `ByRef` capabilities applicable to it directly.
    #[must_use]
    pub fn addressable(mut self) -> Self {
        self.addressable = true;
        self
    }

    /// Installs the literal-syntax capability.
    #[must_use]
    pub fn syntax(mut self, method: Method) -> Self {
        self.methods.syntax = Some(method);
        self
    }

    /// Installs the error-message capability.
    #[must_use]
    pub fn fault(mut self, method: Method) -> Self {
        self.methods.fault = Some(method);
        self
    }

    /// Installs the stringification capability.
    #[must_use]
    pub fn text(mut self, method: Method) -> Self {
        self.methods.text = Some(method);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Custom(Box::new(self))
    }
}

/// A dynamically-typed representation of any renderable value.
#[derive(Clone, Debug)]
pub enum Value {
    /// A nil reference or absent value, optionally carrying its declared type.
    Nil(Option<String>),
    Bool(bool),
    Int(Int),
    Uint(Uint),
    Float(Float),
    Char(char),
    Str(String),
    Seq(Seq),
    Map(Map),
    Struct(Struct),
    Ref(Ref),
    Func(Func),
    Chan(Chan),
    Custom(Box<Custom>),
}

/// Coarse structural category of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Str,
    Seq,
    Map,
    Struct,
    Ref,
    Func,
    Chan,
}

/// The classifier's transient view of a value.
///
/// Derived fresh each time a value is visited; never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    pub kind: Kind,
    pub type_name: String,
    /// Indirections unwrapped to reach the described value.
    pub indirections: usize,
    /// Whether the value sits in an addressable slot.
    pub addressable: bool,
    /// Whether a reference chain ended in nil.
    pub nil: bool,
    pub len: Option<usize>,
    pub capacity: Option<usize>,
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil(None)
    }
}

impl Value {
    /// Creates an untyped nil value.
    #[must_use]
    pub fn nil() -> Self {
        Value::Nil(None)
    }

    /// Creates a sequence with no declared type name or capacity.
    #[must_use]
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(Seq {
            type_name: None,
            capacity: None,
            items,
        })
    }

    /// Creates a sequence with a declared type name and capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deepfmt::{sdump, Value};
    ///
    /// let v = Value::seq_of("[]string", 10, vec![]);
    /// assert_eq!(sdump(&v).unwrap(), "([]string) (cap=10) {\n}\n");
    /// ```
    #[must_use]
    pub fn seq_of(type_name: &str, capacity: usize, items: Vec<Value>) -> Self {
        Value::Seq(Seq {
            type_name: Some(type_name.to_string()),
            capacity: Some(capacity),
            items,
        })
    }

    /// Creates a mapping with no declared type name.
    #[must_use]
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Map {
            type_name: None,
            entries,
        })
    }

    /// Creates a mapping with a declared type name.
    #[must_use]
    pub fn map_of(type_name: &str, entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Map {
            type_name: Some(type_name.to_string()),
            entries,
        })
    }

    /// Allocates a shared cell holding `value`.
    ///
    /// Cells are the unit of reference identity; build cyclic graphs by
    /// storing a [`Value::reference`] to a cell somewhere inside that same
    /// cell's contents.
    #[must_use]
    pub fn shared(value: Value) -> Rc<RefCell<Value>> {
        Rc::new(RefCell::new(value))
    }

    /// Creates a reference to a shared cell.
    #[must_use]
    pub fn reference(cell: &Rc<RefCell<Value>>) -> Self {
        Value::Ref(Ref {
            type_name: None,
            target: Some(Rc::clone(cell)),
        })
    }

    /// Creates a reference to a fresh cell holding `value`.
    #[must_use]
    pub fn ref_to(value: Value) -> Self {
        Value::reference(&Value::shared(value))
    }

    /// Creates a nil reference with a declared target type.
    #[must_use]
    pub fn nil_ref(type_name: &str) -> Self {
        Value::Ref(Ref {
            type_name: Some(type_name.to_string()),
            target: None,
        })
    }

    /// Creates a function-like value.
    #[must_use]
    pub fn func(type_name: &str, id: FuncId) -> Self {
        Value::Func(Func {
            type_name: type_name.to_string(),
            id,
        })
    }

    /// Creates a channel-like value; `None` is a nil channel.
    #[must_use]
    pub fn chan(type_name: &str, id: Option<usize>) -> Self {
        Value::Chan(Chan {
            type_name: type_name.to_string(),
            id,
        })
    }

    /// The shallow structural kind; references are not followed.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil(_) => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Seq(_) => Kind::Seq,
            Value::Map(_) => Kind::Map,
            Value::Struct(_) => Kind::Struct,
            Value::Ref(_) => Kind::Ref,
            Value::Func(_) => Kind::Func,
            Value::Chan(_) => Kind::Chan,
            Value::Custom(c) => c.value.kind(),
        }
    }

    /// The declared type name, synthesizing `[]T` and `map[K]V` names for
    /// containers that carry none.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.type_name_inner(8)
    }

    // Fuel bounds pathological reference-to-reference cycles.
    fn type_name_inner(&self, fuel: usize) -> String {
        match self {
            Value::Nil(t) => t.clone().unwrap_or_else(|| "nil".to_string()),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(i) => i.type_name().to_string(),
            Value::Uint(u) => u.type_name().to_string(),
            Value::Float(fl) => fl.type_name().to_string(),
            Value::Char(_) => "char".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Seq(s) => s.type_name.clone().unwrap_or_else(|| {
                let elem = s
                    .items
                    .first()
                    .map(|v| v.type_name_inner(fuel.saturating_sub(1)))
                    .unwrap_or_else(|| "any".to_string());
                format!("[]{}", elem)
            }),
            Value::Map(m) => m.type_name.clone().unwrap_or_else(|| {
                let (k, v) = m
                    .entries
                    .first()
                    .map(|(k, v)| {
                        (
                            k.type_name_inner(fuel.saturating_sub(1)),
                            v.type_name_inner(fuel.saturating_sub(1)),
                        )
                    })
                    .unwrap_or_else(|| ("any".to_string(), "any".to_string()));
                format!("map[{}]{}", k, v)
            }),
            Value::Struct(s) => s.name.clone(),
            Value::Ref(r) => {
                if fuel == 0 {
                    return "*…".to_string();
                }
                let target = match &r.target {
                    Some(cell) => cell.borrow().type_name_inner(fuel - 1),
                    None => r.type_name.clone().unwrap_or_else(|| "any".to_string()),
                };
                format!("*{}", target)
            }
            Value::Func(f) => f.type_name.clone(),
            Value::Chan(c) => c.type_name.clone(),
            Value::Custom(c) => c
                .type_name
                .clone()
                .unwrap_or_else(|| c.value.type_name_inner(fuel)),
        }
    }

    /// Element, entry, or byte count for sized values.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.len()),
            Value::Seq(s) => Some(s.items.len()),
            Value::Map(m) => Some(m.entries.len()),
            Value::Custom(c) => c.value.size(),
            _ => None,
        }
    }

    /// Returns `true` if the value is nil (typed or untyped).
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil(_))
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a signed integer of any width, widens it to `i128`.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Int(i) => Some(i.as_i128()),
            _ => None,
        }
    }
}

/// Classifies a value: its structural kind and, for references, the chain of
/// indirections to the first non-reference value.
///
/// Pure; never renders and never mutates. Nil references classify as
/// [`Kind::Nil`] with `nil = true` and the declared type preserved — a nil
/// reference is never confused with a reference to a zero value. A chain that
/// re-enters itself classifies as [`Kind::Ref`].
///
/// # Examples
///
/// ```rust
/// use deepfmt::{classify, Kind, Value};
///
/// let d = classify(&Value::ref_to(Value::from(5i32)));
/// assert_eq!(d.kind, Kind::Int);
/// assert_eq!(d.indirections, 1);
/// assert!(d.addressable);
///
/// let d = classify(&Value::nil_ref("demo::Node"));
/// assert_eq!(d.kind, Kind::Nil);
/// assert!(d.nil);
/// ```
#[must_use]
pub fn classify(value: &Value) -> Descriptor {
    match value {
        Value::Ref(r) => {
            let mut indirections = 1usize;
            let mut seen: Vec<usize> = Vec::new();
            let mut nil_type = r.type_name.clone();
            let mut next = r.target.clone();
            loop {
                let cell = match next {
                    None => {
                        let name = nil_type.unwrap_or_else(|| "any".to_string());
                        return Descriptor {
                            kind: Kind::Nil,
                            type_name: format!("{}{}", "*".repeat(indirections), name),
                            indirections,
                            addressable: false,
                            nil: true,
                            len: None,
                            capacity: None,
                        };
                    }
                    Some(cell) => cell,
                };
                let id = Rc::as_ptr(&cell) as usize;
                if seen.contains(&id) {
                    return Descriptor {
                        kind: Kind::Ref,
                        type_name: format!(
                            "{}{}",
                            "*".repeat(indirections),
                            cell.borrow().type_name()
                        ),
                        indirections,
                        addressable: true,
                        nil: false,
                        len: None,
                        capacity: None,
                    };
                }
                seen.push(id);
                let step = {
                    let inner = cell.borrow();
                    match &*inner {
                        Value::Ref(deeper) => {
                            Some((deeper.type_name.clone(), deeper.target.clone()))
                        }
                        _ => None,
                    }
                };
                match step {
                    Some((tn, target)) => {
                        indirections += 1;
                        if tn.is_some() {
                            nil_type = tn;
                        }
                        next = target;
                    }
                    None => {
                        let inner = cell.borrow();
                        let mut d = describe(&inner);
                        d.indirections = indirections;
                        d.addressable = true;
                        return d;
                    }
                }
            }
        }
        _ => describe(value),
    }
}

fn describe(value: &Value) -> Descriptor {
    let mut d = Descriptor {
        kind: value.kind(),
        type_name: value.type_name(),
        indirections: 0,
        addressable: false,
        nil: value.is_nil(),
        len: value.size(),
        capacity: None,
    };
    match value {
        Value::Seq(s) => d.capacity = s.capacity,
        Value::Custom(c) => {
            d.addressable = c.addressable;
            if let Value::Seq(s) = &*c.value {
                d.capacity = s.capacity;
            }
        }
        _ => {}
    }
    d
}

/// The renderers' view of a (possibly multi-level) reference.
pub(crate) struct Unwound {
    pub(crate) indirections: usize,
    pub(crate) addrs: Vec<usize>,
    pub(crate) target: Option<Rc<RefCell<Value>>>,
    pub(crate) cycle: bool,
    pub(crate) nil_type: Option<String>,
}

impl Unwound {
    /// Declared type name of the final target, stars excluded.
    pub(crate) fn target_type(&self) -> String {
        match &self.target {
            Some(cell) => cell.borrow().type_name(),
            None => self
                .nil_type
                .clone()
                .unwrap_or_else(|| "any".to_string()),
        }
    }
}

/// Follows a reference chain until a non-reference value, a nil reference, or
/// an identity already on the rendering stack (or earlier in this chain).
pub(crate) fn unwind(r: &Ref, tracker: &Tracker) -> Unwound {
    let mut unwound = Unwound {
        indirections: 1,
        addrs: Vec::new(),
        target: None,
        cycle: false,
        nil_type: r.type_name.clone(),
    };
    let mut next = r.target.clone();
    loop {
        let cell = match next {
            None => return unwound,
            Some(cell) => cell,
        };
        let id = Rc::as_ptr(&cell) as usize;
        if tracker.entered(id) || unwound.addrs.contains(&id) {
            unwound.addrs.push(id);
            unwound.cycle = true;
            unwound.target = Some(cell);
            return unwound;
        }
        unwound.addrs.push(id);
        let step = {
            let inner = cell.borrow();
            match &*inner {
                Value::Ref(deeper) => Some((deeper.type_name.clone(), deeper.target.clone())),
                _ => None,
            }
        };
        match step {
            Some((tn, target)) => {
                unwound.indirections += 1;
                if tn.is_some() {
                    unwound.nil_type = tn;
                }
                next = target;
            }
            None => {
                unwound.target = Some(cell);
                return unwound;
            }
        }
    }
}

/// Escapes a string for quoted output.
pub(crate) fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }
    out
}

impl PartialEq for Value {
    /// Structural equality, with two caveats: references compare by cell
    /// identity (value comparison could never terminate on cycles), and
    /// capability closures are ignored.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil(a), Value::Nil(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => {
                a.type_name == b.type_name && a.capacity == b.capacity && a.items == b.items
            }
            (Value::Map(a), Value::Map(b)) => {
                a.type_name == b.type_name && a.entries == b.entries
            }
            (Value::Struct(a), Value::Struct(b)) => a.name == b.name && a.fields == b.fields,
            (Value::Ref(a), Value::Ref(b)) => match (&a.target, &b.target) {
                (None, None) => a.type_name == b.type_name,
                (Some(x), Some(y)) => Rc::ptr_eq(x, y),
                _ => false,
            },
            (Value::Func(a), Value::Func(b)) => a == b,
            (Value::Chan(a), Value::Chan(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => {
                a.type_name == b.type_name
                    && a.addressable == b.addressable
                    && a.value == b.value
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(Int::I8(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(Int::I16(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(Int::I32(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(Int::I64(value))
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Int(Int::I128(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Uint(Uint::U8(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Uint(Uint::U16(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Uint(Uint::U32(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(Uint::U64(value))
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        Value::Uint(Uint::U128(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(Float::F32(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(Float::F64(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::seq(value)
    }
}

impl From<Struct> for Value {
    fn from(value: Struct) -> Self {
        Value::Struct(value)
    }
}

impl From<Custom> for Value {
    fn from(value: Custom) -> Self {
        Value::Custom(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_names() {
        assert_eq!(Value::from(1i8).type_name(), "i8");
        assert_eq!(Value::from(1u128).type_name(), "u128");
        assert_eq!(Value::from(1.5f32).type_name(), "f32");
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::from('x').type_name(), "char");
        assert_eq!(Value::from("s").type_name(), "string");
    }

    #[test]
    fn test_synthesized_container_names() {
        let seq = Value::seq(vec![Value::from(1i32)]);
        assert_eq!(seq.type_name(), "[]i32");
        assert_eq!(Value::seq(vec![]).type_name(), "[]any");

        let map = Value::map(vec![(Value::from("k"), Value::from(1u8))]);
        assert_eq!(map.type_name(), "map[string]u8");
    }

    #[test]
    fn test_classify_scalars() {
        let d = classify(&Value::from(127i8));
        assert_eq!(d.kind, Kind::Int);
        assert_eq!(d.type_name, "i8");
        assert_eq!(d.indirections, 0);
        assert!(!d.addressable);
    }

    #[test]
    fn test_classify_follows_indirections() {
        let inner = Value::shared(Value::from("deep"));
        let middle = Value::shared(Value::reference(&inner));
        let d = classify(&Value::reference(&middle));
        assert_eq!(d.kind, Kind::Str);
        assert_eq!(d.indirections, 2);
        assert!(d.addressable);
        assert_eq!(d.len, Some(4));
    }

    #[test]
    fn test_classify_nil_reference_is_not_zero_value() {
        let d = classify(&Value::nil_ref("demo::Node"));
        assert_eq!(d.kind, Kind::Nil);
        assert!(d.nil);
        assert_eq!(d.type_name, "*demo::Node");
    }

    #[test]
    fn test_classify_terminates_on_reference_cycle() {
        let cell = Value::shared(Value::nil());
        *cell.borrow_mut() = Value::reference(&cell);
        let d = classify(&Value::reference(&cell));
        assert_eq!(d.kind, Kind::Ref);
    }

    #[test]
    fn test_sequence_capacity_in_descriptor() {
        let d = classify(&Value::seq_of("[]i32", 10, vec![Value::from(0i32)]));
        assert_eq!(d.len, Some(1));
        assert_eq!(d.capacity, Some(10));
    }

    #[test]
    fn test_reference_equality_is_identity() {
        let cell = Value::shared(Value::from(5i32));
        assert_eq!(Value::reference(&cell), Value::reference(&cell));
        let other = Value::shared(Value::from(5i32));
        assert_ne!(Value::reference(&cell), Value::reference(&other));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_str("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    }
}
