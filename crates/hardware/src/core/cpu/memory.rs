//! Byte-addressable memory.
//!
//! Both program memory and data memory are 64 KiB arrays addressed by a
//! 16-bit value, so every byte address is in range. Words are big-endian
//! (high byte at the lower address) and must be word-aligned.

use crate::common::{AccessType, Fault, LoadError, MEM_SIZE};

/// A 64 KiB memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr)]
    }

    /// Writes one byte.
    #[inline]
    pub fn write_byte(&mut self, addr: u16, val: u8) {
        self.bytes[usize::from(addr)] = val;
    }

    /// Reads a big-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnalignedAccess`] tagged with `kind` if `addr` is odd.
    pub fn read_word(&self, addr: u16, kind: AccessType) -> Result<u16, Fault> {
        check_aligned(addr, kind)?;
        Ok(u16::from_be_bytes([
            self.read_byte(addr),
            self.read_byte(addr + 1),
        ]))
    }

    /// Writes a big-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnalignedAccess`] if `addr` is odd; memory is untouched.
    pub fn write_word(&mut self, addr: u16, val: u16) -> Result<(), Fault> {
        check_aligned(addr, AccessType::Store)?;
        let [hi, lo] = val.to_be_bytes();
        self.write_byte(addr, hi);
        self.write_byte(addr + 1, lo);
        Ok(())
    }

    /// Copies `image` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image runs past the end.
    pub fn load(&mut self, offset: usize, image: &[u8]) -> Result<(), LoadError> {
        let end = offset
            .checked_add(image.len())
            .filter(|&end| end <= MEM_SIZE)
            .ok_or(LoadError::TooLarge {
                len: offset.saturating_add(image.len()),
                capacity: MEM_SIZE,
            })?;
        self.bytes[offset..end].copy_from_slice(image);
        Ok(())
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// The full contents, address 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        write!(f, "Memory {{ {} bytes, {used} non-zero }}", self.bytes.len())
    }
}

#[inline]
const fn check_aligned(addr: u16, kind: AccessType) -> Result<(), Fault> {
    if addr & 1 == 0 {
        Ok(())
    } else {
        Err(Fault::UnalignedAccess { kind, addr })
    }
}
