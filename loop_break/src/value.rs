//! Dynamic Value type
//!
//! This module provides the `Value` enum for callers that visit
//! heterogeneous, loosely typed data. A visitor can keep elements, map them
//! to values of any kind and break with a value of yet another kind, and
//! [`Exit::into_dynamic`] collapses the outcome into one `Value`.

use std::fmt;

use crate::error::{LoopError, LoopResult};
use crate::exit::Exit;
use crate::truthy::Truthy;

/// Dynamically typed value
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    // ========== Absent ==========
    /// No value (an unset argument, a signal raised without a value)
    #[default]
    Undefined,
    /// Explicitly empty value
    Null,

    // ========== Primitive Types ==========
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    I64(i64),
    /// 64-bit floating point
    F64(f64),

    // ========== Heap-Allocated Types ==========
    /// String
    Str(String),
    /// Array of dynamic values
    Array(Vec<Value>),
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I64(_) => "Int64",
            Value::F64(_) => "Float64",
            Value::Str(_) => "String",
            Value::Array(_) => "Array",
        }
    }

    /// Check if this value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to extract as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            Value::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to extract as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to extract as array slice
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the elements of an array value
    ///
    /// Any other kind of value is a type error.
    pub fn try_as_array(&self) -> LoopResult<&[Value]> {
        self.as_array()
            .ok_or_else(|| LoopError::type_error("Array", self.type_name()))
    }

    /// Take the elements of an array value
    pub fn into_array(self) -> LoopResult<Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(LoopError::type_error("Array", other.type_name())),
        }
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::I64(v) => v.is_truthy(),
            Value::F64(v) => v.is_truthy(),
            Value::Str(s) => s.is_truthy(),
            Value::Array(_) => true,
        }
    }
}

impl<A, V, S> Exit<A, V, S>
where
    A: Into<Value>,
    V: Into<Value>,
    S: Into<Value>,
{
    /// Collapse the outcome into the call's untyped result
    pub fn into_dynamic(self) -> Value {
        match self {
            Exit::Completed(a) => a.into(),
            Exit::Stopped(s) => s.into(),
            Exit::Returned(v) => v.into(),
        }
    }
}

// ========== From implementations ==========

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I64(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::F64(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}.0", v)
                } else {
                    write!(f, "{}", v)
                }
            }
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}
