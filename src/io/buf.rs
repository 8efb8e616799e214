use bytes::{Buf, Bytes};

use crate::error::Error;

pub trait BufExt: Buf {
    fn get_us_varbyte(&mut self) -> Result<Option<Bytes>, Error>;
}

impl BufExt for Bytes {
    // reads a US_VARBYTE; a length prefix of 0xffff is the NULL marker
    fn get_us_varbyte(&mut self) -> Result<Option<Bytes>, Error> {
        if self.remaining() < 2 {
            return Err(err_protocol!(
                "expected 2-byte length prefix, found {} bytes",
                self.remaining()
            ));
        }

        let len = self.get_u16_le() as usize;
        if len == 0xffff {
            return Ok(None);
        }

        if self.remaining() < len {
            return Err(err_protocol!(
                "expected {} bytes of data, found {}",
                len,
                self.remaining()
            ));
        }

        Ok(Some(self.split_to(len)))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::BufExt;

    #[test]
    fn it_decodes_us_varbyte() {
        let mut buf = Bytes::from_static(&[0x03, 0x00, 0x01, 0x02, 0x03, 0xff]);

        let v = buf.get_us_varbyte().unwrap();

        assert_eq!(v.as_deref(), Some(&[0x01, 0x02, 0x03][..]));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn it_decodes_null_marker() {
        let mut buf = Bytes::from_static(&[0xff, 0xff]);

        assert_eq!(buf.get_us_varbyte().unwrap(), None);
    }

    #[test]
    fn it_rejects_truncated_data() {
        let mut buf = Bytes::from_static(&[0x05, 0x00, 0x01]);

        assert!(buf.get_us_varbyte().is_err());
    }
}
