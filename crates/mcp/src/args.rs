// Argument extraction for tool invocations. Every helper fails with a
// typed dispatch error so validation happens before any network call.

use crate::error::DispatchError;
use chrono::NaiveDate;
use runn_core::{id_key, DateRange};
use serde_json::{Map, Value};

/// Parsed `arguments` object of a tool invocation.
pub type Arguments = Map<String, Value>;

pub fn require<'a>(args: &'a Arguments, name: &'static str) -> Result<&'a Value, DispatchError> {
    match args.get(name) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(DispatchError::MissingArgument { name }),
    }
}

pub fn require_str<'a>(args: &'a Arguments, name: &'static str) -> Result<&'a str, DispatchError> {
    require(args, name)?
        .as_str()
        .ok_or_else(|| DispatchError::invalid(name, "expected a string"))
}

/// Required identifier: a string or number, normalized to string form.
pub fn require_id(args: &Arguments, name: &'static str) -> Result<String, DispatchError> {
    let value = require(args, name)?;
    id_key(value).ok_or_else(|| DispatchError::invalid(name, "expected a string or number id"))
}

/// Optional identifier, normalized to string form when present.
pub fn optional_id(args: &Arguments, name: &'static str) -> Result<Option<String>, DispatchError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_key(value)
            .map(Some)
            .ok_or_else(|| DispatchError::invalid(name, "expected a string or number id")),
    }
}

pub fn optional_bool(
    args: &Arguments,
    name: &'static str,
    default: bool,
) -> Result<bool, DispatchError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(DispatchError::invalid(name, "expected a boolean")),
    }
}

pub fn require_date(args: &Arguments, name: &'static str) -> Result<NaiveDate, DispatchError> {
    parse_date(name, require_str(args, name)?)
}

pub fn optional_date(
    args: &Arguments,
    name: &'static str,
) -> Result<Option<NaiveDate>, DispatchError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => parse_date(name, raw).map(Some),
        Some(_) => Err(DispatchError::invalid(name, "expected a YYYY-MM-DD string")),
    }
}

/// Optional inclusive range from `start`/`end` arguments. An open end
/// defaults to the distant past or future, so a single bound still
/// filters.
pub fn optional_date_range(args: &Arguments) -> Result<Option<DateRange>, DispatchError> {
    let start = optional_date(args, "start")?;
    let end = optional_date(args, "end")?;
    Ok(match (start, end) {
        (None, None) => None,
        (start, end) => Some(DateRange::new(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        )),
    })
}

fn parse_date(name: &'static str, raw: &str) -> Result<NaiveDate, DispatchError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DispatchError::invalid(name, format!("expected YYYY-MM-DD, got `{raw}`")))
}
