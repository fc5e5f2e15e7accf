//! Conversions from Lua values to the plain Rust values declarations use.
//!
//! Failures are reported as [`DeclError::ArgumentType`] naming the keyword the
//! value was supplied for.

use std::collections::BTreeMap;

use mlua::prelude::*;

use crate::error::DeclError;

fn argument_error(key: &str, message: impl Into<String>) -> DeclError {
  DeclError::ArgumentType {
    key: key.to_string(),
    message: message.into(),
  }
}

/// Collect the keyword arguments of a host callable.
///
/// Lua has no keyword arguments, so callables take a single table:
/// `module { name = "a", srcs = { "a.go" } }`. No argument (or `nil`) yields
/// an empty map. Anything positional is rejected. Keys come back sorted so
/// callers process them, and report errors, deterministically.
pub fn keyword_args(args: LuaMultiValue) -> Result<BTreeMap<String, LuaValue>, DeclError> {
  let mut args = args.into_iter();
  let first = args.next();
  if args.next().is_some() {
    return Err(DeclError::PositionalArgument);
  }

  let table = match first {
    None | Some(LuaValue::Nil) => return Ok(BTreeMap::new()),
    Some(LuaValue::Table(t)) => t,
    Some(_) => return Err(DeclError::PositionalArgument),
  };

  let mut kwargs = BTreeMap::new();
  for pair in table.pairs::<LuaValue, LuaValue>() {
    let (k, v) = pair.map_err(|e| DeclError::ArgumentType {
      key: "<arguments>".to_string(),
      message: e.to_string(),
    })?;
    match k {
      LuaValue::String(s) => {
        let key = s.to_str().map_err(|e| DeclError::ArgumentType {
          key: "<arguments>".to_string(),
          message: format!("keyword is not valid UTF-8: {}", e),
        })?;
        kwargs.insert(key.to_string(), v);
      }
      _ => return Err(DeclError::PositionalArgument),
    }
  }

  Ok(kwargs)
}

/// Convert a Lua string to a Rust string.
pub fn lua_value_to_string(key: &str, value: &LuaValue) -> Result<String, DeclError> {
  match value {
    LuaValue::String(s) => s
      .to_str()
      .map(|s| s.to_string())
      .map_err(|e| argument_error(key, format!("not valid UTF-8: {}", e))),
    other => Err(argument_error(key, format!("expected string, got {}", other.type_name()))),
  }
}

/// Convert a Lua sequence of strings to a `Vec<String>`, preserving order.
///
/// The table must be a proper sequence (keys `1..=n`, no holes, no string
/// keys) and every element must be a string. Numbers are not coerced.
pub fn lua_value_to_strings(key: &str, value: &LuaValue) -> Result<Vec<String>, DeclError> {
  let LuaValue::Table(t) = value else {
    return Err(argument_error(key, format!("not a list (got {})", value.type_name())));
  };

  let len = t.raw_len();
  let mut count = 0usize;
  for pair in t.pairs::<LuaValue, LuaValue>() {
    let (k, _) = pair.map_err(|e| argument_error(key, e.to_string()))?;
    match k {
      LuaValue::Integer(i) if i >= 1 && (i as usize) <= len => count += 1,
      _ => return Err(argument_error(key, "not a list (table has non-sequence keys)")),
    }
  }
  if count != len {
    return Err(argument_error(key, "not a list (sequence has holes)"));
  }

  let mut items = Vec::with_capacity(len);
  for i in 1..=len {
    let item: LuaValue = t.raw_get(i).map_err(|e| argument_error(key, e.to_string()))?;
    match item {
      LuaValue::String(s) => {
        let s = s
          .to_str()
          .map_err(|e| argument_error(key, format!("not valid UTF-8: {}", e)))?;
        items.push(s.to_string());
      }
      other => {
        return Err(argument_error(
          key,
          format!("not a string list (item {} is {})", i, other.type_name()),
        ));
      }
    }
  }

  Ok(items)
}
