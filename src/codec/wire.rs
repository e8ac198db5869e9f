//! # Wire Reader/Writer
//!
//! Big-endian buffer primitives shared by all sub-codecs. All multi-byte
//! integers use network byte order.
//!
//! ## Hardening
//!
//! Length fields on the wire are signed 32-bit. `Reader::read_len` rejects
//! negative values and values exceeding the remaining buffer, so a corrupted
//! stream surfaces as a decode error instead of a huge allocation or a
//! panic. Every fixed-width read checks the remaining byte count first and
//! reports truncation with the field name.
//!
//! ## Thread Safety
//!
//! Both types are plain owned/borrowed data with no shared state; concurrent
//! use on separate buffers needs no synchronization.

use eyre::{ensure, Result};

/// Growable big-endian output buffer.
///
/// Writes are infallible; the buffer is discarded wholesale if a later
/// encoding step fails, so no partial output ever escapes.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_u16(&mut self, value: u16) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_f64(&mut self, value: f64) {
        self.buf.extend(value.to_be_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Bounds-checked cursor over an input buffer.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consumes exactly `count` bytes, failing on truncation.
    pub fn take(&mut self, count: usize, what: &str) -> Result<&'a [u8]> {
        ensure!(
            self.remaining() >= count,
            "truncated buffer reading {}: need {} bytes, {} remaining",
            what,
            count,
            self.remaining()
        );
        let slice = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    pub fn read_u8(&mut self, what: &str) -> Result<u8> {
        Ok(self.take(1, what)?[0])
    }

    pub fn read_i8(&mut self, what: &str) -> Result<i8> {
        Ok(self.take(1, what)?[0] as i8)
    }

    pub fn read_i16(&mut self, what: &str) -> Result<i16> {
        let bytes = self.take(2, what)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u16(&mut self, what: &str) -> Result<u16> {
        let bytes = self.take(2, what)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32(&mut self, what: &str) -> Result<i32> {
        let bytes = self.take(4, what)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i64(&mut self, what: &str) -> Result<i64> {
        let bytes = self.take(8, what)?;
        Ok(i64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub fn read_f32(&mut self, what: &str) -> Result<f32> {
        let bytes = self.take(4, what)?;
        Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f64(&mut self, what: &str) -> Result<f64> {
        let bytes = self.take(8, what)?;
        Ok(f64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Reads an `i32` length or count field and validates it against the
    /// remaining buffer.
    ///
    /// Every counted element consumes at least one byte on the wire, so a
    /// count exceeding the remaining byte count is necessarily corrupt and
    /// is rejected before any allocation sized from it.
    pub fn read_len(&mut self, what: &str) -> Result<usize> {
        let raw = self.read_i32(what)?;
        ensure!(raw >= 0, "negative length for {}: {}", what, raw);
        let len = raw as usize;
        ensure!(
            len <= self.remaining(),
            "length for {} exceeds remaining buffer: {} > {}",
            what,
            len,
            self.remaining()
        );
        Ok(len)
    }
}
