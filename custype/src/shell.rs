//! Line commands behind the `custype` binary.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `.type NAME_OR_ID` | show the descriptor or built-in kind |
//! | `.cast VALUE AS TYPE [AS TYPE ...]` | convert a text value through each kind in turn |
//! | `.range V1 V2 ...` | RANGE over integers (if all parse) or text |
//! | anything else | validate the line as a password |

use std::iter;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::util::pretty::pretty_format_batches;
use custype_aggregate::RangeStream;
use custype_registry::TypeRegistry;
use custype_result::{Error, Result};
use custype_types::{Password, Value, ValueType};

/// Stateless command interpreter over one registry.
#[derive(Debug, Clone)]
pub struct Shell {
    registry: Arc<TypeRegistry>,
}

impl Shell {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Run one input line and render its output.
    pub fn execute(&self, line: &str) -> Result<String> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        tracing::trace!(command = cmd, "shell execute");
        match cmd {
            ".type" => self.describe(rest),
            ".cast" => self.cast(rest),
            ".range" => self.range(rest),
            _ if cmd.starts_with('.') => Err(Error::InvalidArgumentError(format!(
                "unknown command: {cmd}"
            ))),
            _ => Ok(match Password::parse(line) {
                Ok(password) => {
                    format!("valid password ({} chars)", password.as_str().chars().count())
                }
                Err(Error::Validation(reason)) => format!("rejected: {reason}"),
                Err(other) => return Err(other),
            }),
        }
    }

    /// Resolve a registered name, a built-in name, or a numeric id.
    pub fn resolve_type(&self, name: &str) -> Result<ValueType> {
        if let Some(descriptor) = self.registry.resolve_by_name(name) {
            return Ok(descriptor.value_type());
        }
        let lower = name.to_lowercase();
        if let Some(builtin) = ValueType::BUILTINS
            .into_iter()
            .find(|kind| kind.builtin_name() == Some(lower.as_str()))
        {
            return Ok(builtin);
        }
        match name.parse() {
            Ok(id) => match ValueType::from_id(id) {
                ValueType::Custom(id) if self.registry.resolve_by_id(id).is_none() => {
                    Err(Error::unknown_type(format_args!("type:{id}")))
                }
                kind => Ok(kind),
            },
            Err(_) => Err(Error::unknown_type(name)),
        }
    }

    fn describe(&self, name: &str) -> Result<String> {
        match self.resolve_type(name)? {
            ValueType::Custom(id) => {
                let info = self.registry.type_info(id)?;
                let descriptor = self.registry.descriptor();
                Ok(format!(
                    "{} (id {}, precedence {}, display width {}, surfaces as {})",
                    descriptor.name,
                    info.type_id,
                    descriptor.sort_precedence,
                    info.display_size,
                    descriptor.host_sql_type
                ))
            }
            builtin => Ok(format!(
                "{builtin} (id {}, built-in, precedence {})",
                builtin.id(),
                builtin.builtin_precedence()
            )),
        }
    }

    fn cast(&self, args: &str) -> Result<String> {
        let mut parts = split_keyword(args, " as ").into_iter().map(str::trim);
        let raw = parts.next().filter(|raw| !raw.is_empty());
        let targets: Vec<&str> = parts.collect();
        let Some(raw) = raw.filter(|_| !targets.is_empty()) else {
            return Err(Error::InvalidArgumentError(
                "usage: .cast VALUE AS TYPE [AS TYPE ...]".into(),
            ));
        };
        let mut value = Value::from(raw);
        for target in targets {
            let target = self.resolve_type(target)?;
            tracing::debug!(to = %target, "shell cast hop");
            value = self.registry.convert(value, target.id())?;
        }
        Ok(format!("{} : {}", value.to_sql(), self.type_label(value.value_type())))
    }

    fn range(&self, args: &str) -> Result<String> {
        let words: Vec<&str> = args.split_whitespace().collect();
        let integers: Option<Vec<i64>> = words.iter().map(|w| w.parse().ok()).collect();
        let column: ArrayRef = match integers {
            Some(values) => Arc::new(Int64Array::from(values)),
            None => Arc::new(StringArray::from(words)),
        };
        let mut stream = RangeStream::new(iter::once(Ok(column)), "range");
        let batch = stream
            .next()
            .ok_or_else(|| Error::Internal("RANGE stream produced no batch".into()))??;
        Ok(pretty_format_batches(&[batch])?.to_string())
    }

    fn type_label(&self, kind: ValueType) -> String {
        match kind {
            ValueType::Custom(id) => match self.registry.resolve_by_id(id) {
                Some(descriptor) => descriptor.name.clone(),
                None => kind.to_string(),
            },
            builtin => builtin.to_string(),
        }
    }
}

/// Split `input` on an ASCII keyword, ignoring case.
fn split_keyword<'a>(input: &'a str, keyword: &str) -> Vec<&'a str> {
    let folded = input.to_ascii_lowercase();
    let mut parts = Vec::new();
    let mut start = 0;
    for (at, _) in folded.match_indices(keyword) {
        parts.push(&input[start..at]);
        start = at + keyword.len();
    }
    parts.push(&input[start..]);
    parts
}
