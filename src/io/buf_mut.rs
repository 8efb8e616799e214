pub trait BufMutExt {
    fn put_utf16_str(&mut self, s: &str);

    fn put_us_varbyte(&mut self, v: &[u8]);
}

impl BufMutExt for Vec<u8> {
    fn put_utf16_str(&mut self, s: &str) {
        let len = s.len();
        self.reserve(len * 2);

        for ch in s.encode_utf16() {
            self.extend(&ch.to_le_bytes());
        }
    }

    // US_VARBYTE: a 2-byte LE length prefix followed by that many bytes
    fn put_us_varbyte(&mut self, v: &[u8]) {
        // the prefix cannot represent more; anything larger must go out
        // partially length-prefixed
        debug_assert!(v.len() <= usize::from(u16::MAX));

        self.extend(&(v.len() as u16).to_le_bytes());
        self.extend_from_slice(v);
    }
}
