use crate::error::Error;
use crate::io::BufMutExt;
use crate::parameter::{Parameter, ParameterValue};

// US_VARBYTE length prefix marking NULL in the short form
const US_VARBYTE_NULL: u16 = 0xffff;

// TYPE_INFO length field announcing a partially length-prefixed body
const MAX_LENGTH_FIELD: u16 = 0xffff;

// PLP prologue for a body whose total length is not known up front
const PLP_UNKNOWN_LENGTH: [u8; 8] = [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];

// PLP encoding of NULL
const PLP_NULL: [u8; 8] = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];

// zero-length chunk ending the PLP chunk stream
const PLP_TERMINATOR: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// `varbinary(n)` / `varbinary(max)` (BIGVARBIN).
///
/// https://docs.microsoft.com/en-us/openspecs/windows_protocols/ms-tds/ce3183a6-9d89-47e8-a02f-de5a1a1303de
pub struct VarBinary;

impl VarBinary {
    pub const ID: u8 = 0xa5;

    pub const NAME: &'static str = "VarBinary";

    /// Largest value, in bytes, that fits the short wire form. Anything
    /// declared or sized past this goes out partially length-prefixed.
    pub const MAX_LENGTH: u32 = 8000;

    /// The length this parameter is booked at elsewhere in the request:
    /// the declared length, else the natural length of the value, else
    /// [`MAX_LENGTH`][Self::MAX_LENGTH].
    pub fn resolve_length(parameter: &Parameter) -> u32 {
        if let Some(length) = parameter.length {
            length
        } else {
            parameter
                .value
                .natural_length()
                .unwrap_or(Self::MAX_LENGTH)
        }
    }

    /// Returns the SQL type declaration used in parameterized statement
    /// text, e.g. `varbinary(16)` or `varbinary(max)`.
    pub fn declaration(parameter: &Parameter) -> String {
        let mut s = String::with_capacity(15);
        Self::fmt(parameter, &mut s);
        s
    }

    // The length estimate here is not resolve_length: a null non-output
    // parameter declares as varbinary(1), and a zero-length value is bumped
    // to 1. Statement text and wire bookkeeping disagree on these cases and
    // existing callers depend on both.
    pub fn fmt(parameter: &Parameter, s: &mut String) {
        let length = if let Some(length) = parameter.length {
            length
        } else if let Some(natural) = parameter.value.natural_length() {
            natural.max(1)
        } else if !parameter.output {
            1
        } else {
            Self::MAX_LENGTH
        };

        if length <= Self::MAX_LENGTH {
            s.push_str("varbinary(");
            let mut buf = itoa::Buffer::new();
            s.push_str(buf.format(length));
            s.push(')');
        } else {
            s.push_str("varbinary(max)");
        }
    }

    // writes the 3-byte TYPE_INFO: the type id, then a LE u16 length field
    // of 8000 for the short form or 0xffff for PLP
    pub fn put_type_info(buf: &mut Vec<u8>, parameter: &Parameter) {
        buf.push(Self::ID);

        if parameter.uses_plp() {
            buf.extend(&MAX_LENGTH_FIELD.to_le_bytes());
        } else {
            buf.extend(&(Self::MAX_LENGTH as u16).to_le_bytes());
        }
    }

    /// Appends the value encoding to `buf`.
    ///
    /// Short form is a `US_VARBYTE` (or the 2-byte NULL marker); PLP form is
    /// the unknown-length prologue, a single data chunk, and the zero
    /// terminator (or the 8-byte PLP NULL). The wire form matches what
    /// [`put_type_info`][Self::put_type_info] announced because both sides
    /// derive it from the same length comparison.
    pub fn put_value(buf: &mut Vec<u8>, parameter: &Parameter) {
        let plp = parameter.uses_plp();

        log::trace!(
            "encode varbinary value ({} form)",
            if plp { "plp" } else { "short" }
        );

        match (parameter.value.payload(), plp) {
            (Some(payload), false) => {
                buf.put_us_varbyte(&payload);
            }

            (Some(payload), true) => {
                buf.extend(&PLP_UNKNOWN_LENGTH);

                // exactly one data chunk; values are never split further.
                // an empty value still emits its zeroed 4-byte chunk length
                // ahead of the terminator, which servers expect
                buf.extend(&(payload.len() as u32).to_le_bytes());
                buf.extend_from_slice(&payload);

                buf.extend(&PLP_TERMINATOR);
            }

            (None, false) => {
                buf.extend(&US_VARBYTE_NULL.to_le_bytes());
            }

            (None, true) => {
                buf.extend(&PLP_NULL);
            }
        }
    }

    /// Checks a value ahead of encoding. `Null` means SQL `NULL` and passes
    /// through, as does any binary value; everything else is rejected.
    ///
    /// This is the sole rejection point: the other operations assume a
    /// validated value and cannot fail.
    pub fn validate(value: ParameterValue) -> Result<ParameterValue, Error> {
        match value {
            ParameterValue::Null | ParameterValue::Binary(_) => Ok(value),

            _ => Err(Error::InvalidValue("not a buffer".into())),
        }
    }
}
