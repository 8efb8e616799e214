use std::borrow::Cow;

use bytes::Bytes;

use crate::var_binary::VarBinary;

/// A single statement argument, constructed per call and passed once through
/// the codec.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub value: ParameterValue,

    /// Declared length; overrides any length inferred from the value when
    /// selecting the wire form and the SQL type declaration.
    pub length: Option<u32>,

    /// Set for OUTPUT parameters of a procedure call.
    pub output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// SQL `NULL`.
    Null,

    /// A binary value, sent as-is.
    Binary(Bytes),

    /// A textual value. [`VarBinary::validate`] rejects these; the streaming
    /// encoder still handles one by re-encoding it as UTF-16LE.
    ///
    /// [`VarBinary::validate`]: crate::VarBinary::validate
    Text(String),
}

impl ParameterValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }

    // the length the declaration logic sees: bytes for binary values,
    // UTF-16 code units for text
    pub(crate) fn natural_length(&self) -> Option<u32> {
        match self {
            ParameterValue::Null => None,
            ParameterValue::Binary(v) => Some(v.len() as u32),
            ParameterValue::Text(s) => Some(s.encode_utf16().count() as u32),
        }
    }

    // the bytes that go on the wire: a binary value as-is, a textual value
    // re-encoded as UTF-16LE
    pub(crate) fn payload(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            ParameterValue::Null => None,

            ParameterValue::Binary(v) => Some(Cow::Borrowed(&v[..])),

            ParameterValue::Text(s) => {
                let mut v = Vec::with_capacity(s.len() * 2);

                for ch in s.encode_utf16() {
                    v.extend(&ch.to_le_bytes());
                }

                Some(Cow::Owned(v))
            }
        }
    }
}

impl Parameter {
    /// Whether this parameter goes out partially length-prefixed (PLP)
    /// instead of as a short `US_VARBYTE`.
    ///
    /// Compares the declared length, or failing that the natural length of
    /// the value, against [`VarBinary::MAX_LENGTH`]. The TYPE_INFO writer and
    /// the value encoder both call this, so the header and the body cannot
    /// disagree on the wire form.
    pub(crate) fn uses_plp(&self) -> bool {
        let length = match self.length {
            Some(length) => length,

            None => self
                .value
                .natural_length()
                .unwrap_or(VarBinary::MAX_LENGTH),
        };

        length > VarBinary::MAX_LENGTH
    }
}
