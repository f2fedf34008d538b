//! Pull-style JSON reader.

use std::collections::VecDeque;

use serde_json::Value as Json;

use crate::error::CodecError;

enum Frame {
    /// A value waiting to be consumed.
    Pending(Json),
    /// An open object's remaining fields.
    Object(VecDeque<(String, Json)>),
    /// An open array's remaining elements.
    Array(VecDeque<Json>),
}

/// A token cursor over one parsed JSON document.
///
/// Work is proportional to the input's length: every operation either pops a
/// token or fails, so decode cannot hang on malformed input.
pub struct JsonReader {
    stack: Vec<Frame>,
}

fn token_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl JsonReader {
    /// Parses the input and positions the cursor at the root value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] for malformed JSON.
    pub fn new(input: &str) -> Result<Self, CodecError> {
        let root: Json = serde_json::from_str(input)?;
        Ok(Self {
            stack: vec![Frame::Pending(root)],
        })
    }

    fn take_next(&mut self, context: &'static str) -> Result<Json, CodecError> {
        match self.stack.last_mut() {
            Some(Frame::Pending(value)) => {
                let value = std::mem::take(value);
                self.stack.pop();
                Ok(value)
            }
            Some(Frame::Array(items)) => items.pop_front().ok_or(CodecError::UnexpectedToken {
                expected: "array element",
                found: "end of array".to_owned(),
                context,
            }),
            Some(Frame::Object(_)) => Err(CodecError::UnexpectedToken {
                expected: "value",
                found: "field name".to_owned(),
                context,
            }),
            None => Err(CodecError::UnexpectedToken {
                expected: "value",
                found: "end of stream".to_owned(),
                context,
            }),
        }
    }

    fn peek_next(&self) -> Option<&Json> {
        match self.stack.last() {
            Some(Frame::Pending(value)) => Some(value),
            Some(Frame::Array(items)) => items.front(),
            _ => None,
        }
    }

    /// Whether the next value is a null marker.
    #[must_use]
    pub fn peek_is_null(&self) -> bool {
        matches!(self.peek_next(), Some(Json::Null))
    }

    /// Consumes a null marker.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not null.
    pub fn read_null(&mut self) -> Result<(), CodecError> {
        match self.take_next("reading null")? {
            Json::Null => Ok(()),
            other => Err(CodecError::UnexpectedToken {
                expected: "null",
                found: token_name(&other).to_owned(),
                context: "reading null",
            }),
        }
    }

    /// Opens the next value as an object.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not an object.
    pub fn begin_object(&mut self) -> Result<(), CodecError> {
        match self.take_next("opening an object")? {
            Json::Object(map) => {
                self.stack.push(Frame::Object(map.into_iter().collect()));
                Ok(())
            }
            other => Err(CodecError::UnexpectedToken {
                expected: "object",
                found: token_name(&other).to_owned(),
                context: "opening an object",
            }),
        }
    }

    /// Whether the open object has more fields.
    ///
    /// # Errors
    ///
    /// Fails when no object is open at the cursor.
    pub fn has_next_field(&self) -> Result<bool, CodecError> {
        match self.stack.last() {
            Some(Frame::Object(fields)) => Ok(!fields.is_empty()),
            _ => Err(CodecError::UnexpectedToken {
                expected: "open object",
                found: "other token".to_owned(),
                context: "checking for more fields",
            }),
        }
    }

    /// Reads the next field name and stages its value as the next token.
    ///
    /// # Errors
    ///
    /// Fails when no object is open or no fields remain.
    pub fn next_field_name(&mut self) -> Result<String, CodecError> {
        match self.stack.last_mut() {
            Some(Frame::Object(fields)) => {
                let (name, value) = fields.pop_front().ok_or(CodecError::UnexpectedToken {
                    expected: "field name",
                    found: "end of object".to_owned(),
                    context: "reading a field name",
                })?;
                self.stack.push(Frame::Pending(value));
                Ok(name)
            }
            _ => Err(CodecError::UnexpectedToken {
                expected: "open object",
                found: "other token".to_owned(),
                context: "reading a field name",
            }),
        }
    }

    /// Consumes and discards the next value, whatever its shape.
    ///
    /// # Errors
    ///
    /// Fails when no value is pending.
    pub fn skip_value(&mut self) -> Result<(), CodecError> {
        self.take_next("skipping a value").map(drop)
    }

    /// Closes the open object.
    ///
    /// # Errors
    ///
    /// Fails when fields remain unread or no object is open.
    pub fn end_object(&mut self) -> Result<(), CodecError> {
        match self.stack.last() {
            Some(Frame::Object(fields)) if fields.is_empty() => {
                self.stack.pop();
                Ok(())
            }
            Some(Frame::Object(_)) => Err(CodecError::UnexpectedToken {
                expected: "end of object",
                found: "unread fields".to_owned(),
                context: "closing an object",
            }),
            _ => Err(CodecError::UnexpectedToken {
                expected: "open object",
                found: "other token".to_owned(),
                context: "closing an object",
            }),
        }
    }

    /// Opens the next value as an array.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not an array.
    pub fn begin_array(&mut self) -> Result<(), CodecError> {
        match self.take_next("opening an array")? {
            Json::Array(items) => {
                self.stack.push(Frame::Array(items.into()));
                Ok(())
            }
            other => Err(CodecError::UnexpectedToken {
                expected: "array",
                found: token_name(&other).to_owned(),
                context: "opening an array",
            }),
        }
    }

    /// Whether the open array has more elements.
    ///
    /// # Errors
    ///
    /// Fails when no array is open at the cursor.
    pub fn has_next_element(&self) -> Result<bool, CodecError> {
        match self.stack.last() {
            Some(Frame::Array(items)) => Ok(!items.is_empty()),
            _ => Err(CodecError::UnexpectedToken {
                expected: "open array",
                found: "other token".to_owned(),
                context: "checking for more elements",
            }),
        }
    }

    /// Closes the open array.
    ///
    /// # Errors
    ///
    /// Fails when elements remain unread or no array is open.
    pub fn end_array(&mut self) -> Result<(), CodecError> {
        match self.stack.last() {
            Some(Frame::Array(items)) if items.is_empty() => {
                self.stack.pop();
                Ok(())
            }
            Some(Frame::Array(_)) => Err(CodecError::UnexpectedToken {
                expected: "end of array",
                found: "unread elements".to_owned(),
                context: "closing an array",
            }),
            _ => Err(CodecError::UnexpectedToken {
                expected: "open array",
                found: "other token".to_owned(),
                context: "closing an array",
            }),
        }
    }

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not a boolean.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.take_next("reading a boolean")? {
            Json::Bool(b) => Ok(b),
            other => Err(CodecError::UnexpectedToken {
                expected: "boolean",
                found: token_name(&other).to_owned(),
                context: "reading a boolean",
            }),
        }
    }

    /// Reads an integer.
    ///
    /// # Errors
    ///
    /// Fails for non-numbers and for numbers outside `i64`.
    pub fn read_i64(&mut self) -> Result<i64, CodecError> {
        match self.take_next("reading an integer")? {
            Json::Number(n) => n.as_i64().ok_or(CodecError::UnexpectedToken {
                expected: "integer",
                found: n.to_string(),
                context: "reading an integer",
            }),
            other => Err(CodecError::UnexpectedToken {
                expected: "integer",
                found: token_name(&other).to_owned(),
                context: "reading an integer",
            }),
        }
    }

    /// Reads a float; integral numbers are accepted.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not a number.
    pub fn read_f64(&mut self) -> Result<f64, CodecError> {
        match self.take_next("reading a float")? {
            Json::Number(n) => n.as_f64().ok_or(CodecError::UnexpectedToken {
                expected: "float",
                found: n.to_string(),
                context: "reading a float",
            }),
            other => Err(CodecError::UnexpectedToken {
                expected: "float",
                found: token_name(&other).to_owned(),
                context: "reading a float",
            }),
        }
    }

    /// Reads a string.
    ///
    /// # Errors
    ///
    /// Fails when the next token is not a string.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        match self.take_next("reading a string")? {
            Json::String(s) => Ok(s),
            other => Err(CodecError::UnexpectedToken {
                expected: "string",
                found: token_name(&other).to_owned(),
                context: "reading a string",
            }),
        }
    }

    /// Asserts the whole document has been consumed.
    ///
    /// # Errors
    ///
    /// Fails when tokens remain.
    pub fn expect_end(&self) -> Result<(), CodecError> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(CodecError::UnexpectedToken {
                expected: "end of stream",
                found: "trailing tokens".to_owned(),
                context: "finishing the stream",
            })
        }
    }
}
