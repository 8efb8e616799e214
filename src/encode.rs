use crate::error::Error;
use crate::parameter::Parameter;
use crate::var_binary::VarBinary;

pub trait ProtocolEncode<'en, Context = ()> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<(), Error>
    where
        Self: ProtocolEncode<'en, ()>,
    {
        self.encode_with(buf, ())
    }

    fn encode_with(&self, buf: &mut Vec<u8>, context: Context) -> Result<(), Error>;
}

impl<C> ProtocolEncode<'_, C> for &'_ [u8] {
    fn encode_with(&self, buf: &mut Vec<u8>, _context: C) -> Result<(), Error> {
        buf.extend_from_slice(self);
        Ok(())
    }
}

// TYPE_INFO followed by the value, the unit a request builder appends
// per RPC parameter
impl ProtocolEncode<'_> for Parameter {
    fn encode_with(&self, buf: &mut Vec<u8>, _context: ()) -> Result<(), Error> {
        VarBinary::put_type_info(buf, self);
        VarBinary::put_value(buf, self);

        Ok(())
    }
}
