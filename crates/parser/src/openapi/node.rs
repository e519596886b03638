//! Typed, path-aware access to the untyped JSON tree

use openapi_extract_common::{ExtractError, FieldPath, Result};
use serde_json::{Map as JsonMap, Value};
use std::str::FromStr;

/// Name of a JSON value's type, as used in error messages
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// A borrowed JSON value together with where it sits in the document
#[derive(Debug, Clone)]
pub(crate) struct Node<'a> {
    value: &'a Value,
    path: FieldPath,
    max_depth: usize,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value, max_depth: usize) -> Self {
        Self {
            value,
            path: FieldPath::root(),
            max_depth,
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    fn descend(&self, value: &'a Value, path: FieldPath) -> Result<Node<'a>> {
        if path.depth() > self.max_depth {
            return Err(ExtractError::DepthLimitExceeded {
                path,
                limit: self.max_depth,
            });
        }

        Ok(Node {
            value,
            path,
            max_depth: self.max_depth,
        })
    }

    pub fn unexpected(&self, expected: &'static str) -> ExtractError {
        ExtractError::UnexpectedType {
            path: self.path.clone(),
            expected,
            found: type_name(self.value),
        }
    }

    pub fn as_object(&self) -> Result<&'a JsonMap<String, Value>> {
        self.value.as_object().ok_or_else(|| self.unexpected("object"))
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.value.as_str().ok_or_else(|| self.unexpected("string"))
    }

    pub fn as_bool(&self) -> Result<bool> {
        self.value.as_bool().ok_or_else(|| self.unexpected("boolean"))
    }

    /// Member `key` of this object; `None` when absent or `null`
    pub fn get(&self, key: &str) -> Result<Option<Node<'a>>> {
        match self.as_object()?.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.descend(value, self.path.key(key)).map(Some),
        }
    }

    pub fn required(&self, key: &str) -> Result<Node<'a>> {
        self.get(key)?
            .ok_or_else(|| ExtractError::MissingRequiredField(self.path.key(key)))
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)?
            .map(|child| child.as_str().map(str::to_string))
            .transpose()
    }

    pub fn required_string(&self, key: &str) -> Result<String> {
        self.required(key)?.as_str().map(str::to_string)
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key)?.map(|child| child.as_bool()).transpose()
    }

    /// Member `key` as arbitrary JSON, copied out of the tree
    pub fn raw(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.get(key)?.map(|child| child.value.clone()))
    }

    /// This node as a sequence of strings
    pub fn string_list(&self) -> Result<Vec<String>> {
        self.elements()?
            .iter()
            .map(|element| element.as_str().map(str::to_string))
            .collect()
    }

    pub fn strings(&self, key: &str) -> Result<Option<Vec<String>>> {
        self.get(key)?.map(|child| child.string_list()).transpose()
    }

    /// Member `key` parsed from its string form
    pub fn parsed<T: FromStr>(&self, key: &str, expected: &'static str) -> Result<Option<T>> {
        let Some(child) = self.get(key)? else {
            return Ok(None);
        };

        let text = child.as_str()?;
        text.parse()
            .map(Some)
            .map_err(|_| ExtractError::InvalidValue {
                path: child.path,
                value: text.to_string(),
                expected,
            })
    }

    pub fn required_parsed<T: FromStr>(&self, key: &str, expected: &'static str) -> Result<T> {
        self.parsed(key, expected)?
            .ok_or_else(|| ExtractError::MissingRequiredField(self.path.key(key)))
    }

    /// Members of this object in source order
    pub fn entries(&self) -> Result<Vec<(&'a str, Node<'a>)>> {
        self.as_object()?
            .iter()
            .map(|(key, value)| Ok((key.as_str(), self.descend(value, self.path.key(key))?)))
            .collect()
    }

    /// Elements of this array in source order
    pub fn elements(&self) -> Result<Vec<Node<'a>>> {
        let array = self.value.as_array().ok_or_else(|| self.unexpected("array"))?;
        array
            .iter()
            .enumerate()
            .map(|(index, value)| self.descend(value, self.path.index(index)))
            .collect()
    }
}
