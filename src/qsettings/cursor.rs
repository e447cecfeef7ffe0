//! Sequential big-endian reader over an in-memory state blob.

use byteorder::{BigEndian, ReadBytesExt};
use encoding_rs::UTF_16BE;
use log::trace;

use crate::qsettings::types::error::{DecodeError, Result};
use crate::qsettings::types::models::{Rect, Size};

/// Length prefix the toolkit writes for a null string.
const NULL_TEXT: u32 = 0xFFFF_FFFF;

/// Read cursor with a sticky fault.
///
/// Once any read fails, the fault is stored and every later read returns
/// it again without consuming input, so a caller may chain several reads
/// with `?` and inspect the outcome once per logical record.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    rest: &'a [u8],
    fault: Option<DecodeError>,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            rest: data,
            fault: None,
        }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.data.len() - self.rest.len()
    }

    /// Remaining bytes from current position.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// The stored fault, if any read has failed.
    pub fn fault(&self) -> Option<&DecodeError> {
        self.fault.as_ref()
    }

    /// Records `error` as the sticky fault and hands it back for `Err(..)`.
    ///
    /// Decoders use this for semantic aborts so the cursor refuses further
    /// reads exactly as it does after a short read.
    pub fn fail(&mut self, error: DecodeError) -> DecodeError {
        trace!("cursor faulted: {}", error);
        self.fault.get_or_insert(error).clone()
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.take(1, |r| r.read_u8())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.take(4, |r| r.read_i32::<BigEndian>())
    }

    fn read_u32(&mut self) -> Result<u32> {
        self.take(4, |r| r.read_u32::<BigEndian>())
    }

    /// Reads a length-prefixed UTF-16BE string.
    ///
    /// The prefix counts bytes; the null-string prefix decodes to an empty
    /// string. An odd length or one running past the end of input faults.
    pub fn read_text(&mut self) -> Result<String> {
        let offset = self.position();
        let length = self.read_u32()?;
        if length == NULL_TEXT {
            return Ok(String::new());
        }

        let byte_len = length as usize;
        if length % 2 != 0 || byte_len > self.remaining() {
            return Err(self.fail(DecodeError::InvalidTextLength { offset, length }));
        }

        let (bytes, rest) = self.rest.split_at(byte_len);
        self.rest = rest;
        let (text, _) = UTF_16BE.decode_without_bom_handling(bytes);
        Ok(text.into_owned())
    }

    /// Reads four consecutive integers as `x, y, w, h`.
    pub fn read_rect(&mut self) -> Result<Rect> {
        Ok(Rect {
            x: self.read_i32()?,
            y: self.read_i32()?,
            w: self.read_i32()?,
            h: self.read_i32()?,
        })
    }

    /// Reads two consecutive integers as `width, height`.
    pub fn read_size(&mut self) -> Result<Size> {
        Ok(Size {
            width: self.read_i32()?,
            height: self.read_i32()?,
        })
    }

    fn take<T>(
        &mut self,
        need: usize,
        read: impl FnOnce(&mut &'a [u8]) -> std::io::Result<T>,
    ) -> Result<T> {
        self.ensure(need)?;
        let offset = self.position();
        let have = self.remaining();
        read(&mut self.rest).map_err(|_| self.fail(DecodeError::UnexpectedEof { offset, need, have }))
    }

    fn ensure(&mut self, need: usize) -> Result<()> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.rest.len() < need {
            let error = DecodeError::UnexpectedEof {
                offset: self.position(),
                need,
                have: self.remaining(),
            };
            return Err(self.fail(error));
        }
        Ok(())
    }
}
