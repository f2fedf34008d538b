//! Sequential JSON writer.

use serde_json::{Map, Number, Value as Json};

use crate::error::CodecError;

enum Frame {
    /// An open object and the parent-object field name it will land under.
    Object {
        slot: Option<String>,
        map: Map<String, Json>,
    },
    /// An open array and its parent-object field name.
    Array {
        slot: Option<String>,
        items: Vec<Json>,
    },
}

/// A purely sequential JSON writer.
///
/// Values land either at the root, under the pending field name of the
/// innermost open object, or at the tail of an open array. Field order is
/// the order of `name` calls.
pub struct JsonWriter {
    stack: Vec<Frame>,
    pending_name: Option<String>,
    root: Option<Json>,
}

impl JsonWriter {
    /// An empty writer awaiting a single root value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            pending_name: None,
            root: None,
        }
    }

    /// Claims the slot a new container will occupy: the pending field name
    /// inside an object, nothing inside an array or at an empty root.
    fn claim_slot(&mut self, context: &'static str) -> Result<Option<String>, CodecError> {
        match self.stack.last() {
            Some(Frame::Object { .. }) => {
                self.pending_name
                    .take()
                    .map(Some)
                    .ok_or(CodecError::UnexpectedToken {
                        expected: "field name",
                        found: "container".to_owned(),
                        context,
                    })
            }
            Some(Frame::Array { .. }) => Ok(None),
            None => {
                if self.root.is_some() {
                    return Err(CodecError::UnexpectedToken {
                        expected: "end of stream",
                        found: "second root value".to_owned(),
                        context,
                    });
                }
                Ok(None)
            }
        }
    }

    fn place(&mut self, value: Json) -> Result<(), CodecError> {
        match self.stack.last_mut() {
            Some(Frame::Object { map, .. }) => {
                let name = self.pending_name.take().ok_or(CodecError::UnexpectedToken {
                    expected: "field name",
                    found: "value".to_owned(),
                    context: "writing an object member",
                })?;
                map.insert(name, value);
                Ok(())
            }
            Some(Frame::Array { items, .. }) => {
                items.push(value);
                Ok(())
            }
            None => {
                if self.root.is_some() {
                    return Err(CodecError::UnexpectedToken {
                        expected: "end of stream",
                        found: "second root value".to_owned(),
                        context: "writing the root value",
                    });
                }
                self.root = Some(value);
                Ok(())
            }
        }
    }

    /// Places a closed container under the slot claimed when it opened.
    fn place_closed(&mut self, slot: Option<String>, value: Json) -> Result<(), CodecError> {
        match self.stack.last_mut() {
            Some(Frame::Object { map, .. }) => {
                let name = slot.ok_or(CodecError::UnexpectedToken {
                    expected: "field name",
                    found: "container".to_owned(),
                    context: "closing a container",
                })?;
                map.insert(name, value);
                Ok(())
            }
            Some(Frame::Array { items, .. }) => {
                items.push(value);
                Ok(())
            }
            None => {
                self.root = Some(value);
                Ok(())
            }
        }
    }

    /// Opens a JSON object.
    ///
    /// # Errors
    ///
    /// Fails inside an object when no field name is pending, or at an
    /// already-written root.
    pub fn begin_object(&mut self) -> Result<(), CodecError> {
        let slot = self.claim_slot("opening an object")?;
        self.stack.push(Frame::Object {
            slot,
            map: Map::new(),
        });
        Ok(())
    }

    /// Declares the field name for the next value of the open object.
    ///
    /// # Errors
    ///
    /// Fails outside an object or when a name is already pending.
    pub fn name(&mut self, name: &str) -> Result<(), CodecError> {
        if !matches!(self.stack.last(), Some(Frame::Object { .. })) {
            return Err(CodecError::UnexpectedToken {
                expected: "open object",
                found: "field name".to_owned(),
                context: "naming an object member",
            });
        }
        if self.pending_name.replace(name.to_owned()).is_some() {
            return Err(CodecError::UnexpectedToken {
                expected: "value",
                found: format!("second field name `{name}`"),
                context: "naming an object member",
            });
        }
        Ok(())
    }

    /// Closes the innermost object.
    ///
    /// # Errors
    ///
    /// Fails when no object is open or a field name has no value yet.
    pub fn end_object(&mut self) -> Result<(), CodecError> {
        if let Some(name) = self.pending_name.take() {
            return Err(CodecError::UnexpectedToken {
                expected: "value",
                found: format!("end of object after field name `{name}`"),
                context: "closing an object",
            });
        }
        match self.stack.pop() {
            Some(Frame::Object { slot, map }) => self.place_closed(slot, Json::Object(map)),
            other => {
                if let Some(frame) = other {
                    self.stack.push(frame);
                }
                Err(CodecError::UnexpectedToken {
                    expected: "open object",
                    found: "end of object".to_owned(),
                    context: "closing an object",
                })
            }
        }
    }

    /// Opens a JSON array.
    ///
    /// # Errors
    ///
    /// Propagates the same misplacement errors as objects.
    pub fn begin_array(&mut self) -> Result<(), CodecError> {
        let slot = self.claim_slot("opening an array")?;
        self.stack.push(Frame::Array {
            slot,
            items: Vec::new(),
        });
        Ok(())
    }

    /// Closes the innermost array.
    ///
    /// # Errors
    ///
    /// Fails when no array is open.
    pub fn end_array(&mut self) -> Result<(), CodecError> {
        match self.stack.pop() {
            Some(Frame::Array { slot, items }) => self.place_closed(slot, Json::Array(items)),
            other => {
                if let Some(frame) = other {
                    self.stack.push(frame);
                }
                Err(CodecError::UnexpectedToken {
                    expected: "open array",
                    found: "end of array".to_owned(),
                    context: "closing an array",
                })
            }
        }
    }

    /// Writes a null marker.
    ///
    /// # Errors
    ///
    /// Fails when a value cannot be placed here.
    pub fn write_null(&mut self) -> Result<(), CodecError> {
        self.place(Json::Null)
    }

    /// Writes a boolean.
    ///
    /// # Errors
    ///
    /// Fails when a value cannot be placed here.
    pub fn write_bool(&mut self, value: bool) -> Result<(), CodecError> {
        self.place(Json::Bool(value))
    }

    /// Writes an integer.
    ///
    /// # Errors
    ///
    /// Fails when a value cannot be placed here.
    pub fn write_i64(&mut self, value: i64) -> Result<(), CodecError> {
        self.place(Json::Number(Number::from(value)))
    }

    /// Writes a float.
    ///
    /// # Errors
    ///
    /// Fails for NaN or infinite values, which JSON cannot carry.
    pub fn write_f64(&mut self, value: f64) -> Result<(), CodecError> {
        let number = Number::from_f64(value).ok_or(CodecError::NonFiniteFloat(value))?;
        self.place(Json::Number(number))
    }

    /// Writes a string.
    ///
    /// # Errors
    ///
    /// Fails when a value cannot be placed here.
    pub fn write_str(&mut self, value: &str) -> Result<(), CodecError> {
        self.place(Json::String(value.to_owned()))
    }

    /// Finishes the stream and renders the root value as compact JSON.
    ///
    /// # Errors
    ///
    /// Fails when containers remain open or no root value was written.
    pub fn into_string(self) -> Result<String, CodecError> {
        if !self.stack.is_empty() {
            return Err(CodecError::UnexpectedToken {
                expected: "end of object or array",
                found: "end of stream".to_owned(),
                context: "finishing the stream",
            });
        }
        let root = self.root.ok_or(CodecError::UnexpectedToken {
            expected: "value",
            found: "empty stream".to_owned(),
            context: "finishing the stream",
        })?;
        Ok(serde_json::to_string(&root)?)
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
