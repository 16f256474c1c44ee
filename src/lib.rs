//! An implementation of the [Tiger][1] cryptographic hash function.
//!
//! Tiger produces a 192-bit digest. The Tiger/160 and Tiger/128 variants
//! are byte prefixes of the full digest, not separately keyed functions,
//! so all three widths of the same message agree on their common prefix.
//!
//! # Usage
//!
//! ```rust
//! use tiger_hash::{Digest, Tiger};
//!
//! let mut hasher = Tiger::new();
//! hasher.input(b"abc");
//! let digest = hasher.result();
//! assert_eq!(digest.len(), 24);
//! ```
//!
//! One-shot helpers are available with the `std` feature (on by default):
//!
//! ```rust
//! let hex = tiger_hash::hash_hex(b"abc", 192).unwrap();
//! assert_eq!(hex, "2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93");
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Tiger_(hash_function)

#![no_std]
#[macro_use]
extern crate opaque_debug;
#[macro_use]
extern crate digest;
extern crate block_buffer;
extern crate byte_tools;
#[cfg(feature = "std")]
extern crate std;

pub use digest::Digest;
use digest::generic_array::GenericArray;
use digest::generic_array::typenum::{U16, U20, U24, U64};
use digest::{BlockInput, FixedOutput, Input, InvalidOutputSize, Reset, VariableOutput};

use byte_tools::{read_u64v_le, write_u64v_le};

use block_buffer::BlockBuffer;

#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

mod compress;
mod consts;

use compress::compress;

type BlockSize = U64;
type Block = GenericArray<u8, BlockSize>;

const INIT_STATE: [u64; 3] = [0x0123456789abcdef, 0xfedcba9876543210, 0xf096a5b4c3b2e187];

/// Full digest length in bytes.
const DIGEST_BYTES: usize = 24;

/// Marker byte followed by zeros. Padding never spans more than one
/// block's worth of this.
const PADDING: [u8; 64] = [
    0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Bytes of marker-plus-zeros needed to leave exactly eight bytes of
/// room for the length field, given the buffer position.
fn pad_len(pos: usize) -> usize {
    if pos < 56 {
        56 - pos
    } else {
        120 - pos
    }
}

/// The 192-bit chaining state threaded through every block.
#[derive(Clone)]
struct TigerState([u64; 3]);

impl TigerState {
    fn new() -> Self {
        TigerState(INIT_STATE)
    }

    fn process_block(&mut self, block: &Block) {
        let mut x = [0u64; 8];
        read_u64v_le(&mut x, block);
        compress(&mut self.0, &x);
    }
}

/// Message buffering, length accounting and padding, shared by all
/// output widths.
#[derive(Clone)]
struct TigerEngine {
    buffer: BlockBuffer<BlockSize>,
    len: u64,
    state: TigerState,
}

impl TigerEngine {
    fn new() -> Self {
        TigerEngine {
            buffer: BlockBuffer::default(),
            len: 0,
            state: TigerState::new(),
        }
    }

    fn input(&mut self, data: &[u8]) {
        self.len += (data.len() as u64) << 3;
        let state = &mut self.state;
        self.buffer.input(data, |blk| state.process_block(blk));
    }

    /// Appends the 0x01 marker, zero padding and the little-endian bit
    /// length, folding in the one or two blocks this completes. The
    /// state then holds the final chaining values.
    fn finalize(&mut self) {
        let pad = pad_len(self.buffer.position());
        let mut tail = [0u8; 8];
        write_u64v_le(&mut tail, &[self.len]);
        let state = &mut self.state;
        self.buffer.input(&PADDING[..pad], |blk| state.process_block(blk));
        self.buffer.input(&tail, |blk| state.process_block(blk));
    }

    /// Little-endian serialization of A, B, C. Only meaningful after
    /// `finalize`.
    fn digest(&self) -> [u8; DIGEST_BYTES] {
        let mut out = [0u8; DIGEST_BYTES];
        write_u64v_le(&mut out, &self.state.0);
        out
    }

    fn reset(&mut self) {
        self.buffer.reset();
        self.len = 0;
        self.state = TigerState::new();
    }
}

/// The Tiger-192 hasher.
#[derive(Clone)]
pub struct Tiger {
    engine: TigerEngine,
}

impl Tiger {
    pub fn new() -> Self {
        Tiger {
            engine: TigerEngine::new(),
        }
    }
}

impl Default for Tiger {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockInput for Tiger {
    type BlockSize = BlockSize;
}

impl Input for Tiger {
    fn input<B: AsRef<[u8]>>(&mut self, data: B) {
        self.engine.input(data.as_ref());
    }
}

impl FixedOutput for Tiger {
    type OutputSize = U24;

    fn fixed_result(mut self) -> GenericArray<u8, U24> {
        self.engine.finalize();
        let mut out = GenericArray::default();
        out.copy_from_slice(&self.engine.digest());
        out
    }
}

impl Reset for Tiger {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

/// The Tiger/160 hasher: the first 20 bytes of the Tiger-192 digest.
#[derive(Clone)]
pub struct Tiger160 {
    engine: TigerEngine,
}

impl Tiger160 {
    pub fn new() -> Self {
        Tiger160 {
            engine: TigerEngine::new(),
        }
    }
}

impl Default for Tiger160 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockInput for Tiger160 {
    type BlockSize = BlockSize;
}

impl Input for Tiger160 {
    fn input<B: AsRef<[u8]>>(&mut self, data: B) {
        self.engine.input(data.as_ref());
    }
}

impl FixedOutput for Tiger160 {
    type OutputSize = U20;

    fn fixed_result(mut self) -> GenericArray<u8, U20> {
        self.engine.finalize();
        let mut out = GenericArray::default();
        out.copy_from_slice(&self.engine.digest()[..20]);
        out
    }
}

impl Reset for Tiger160 {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

/// The Tiger/128 hasher: the first 16 bytes of the Tiger-192 digest.
#[derive(Clone)]
pub struct Tiger128 {
    engine: TigerEngine,
}

impl Tiger128 {
    pub fn new() -> Self {
        Tiger128 {
            engine: TigerEngine::new(),
        }
    }
}

impl Default for Tiger128 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockInput for Tiger128 {
    type BlockSize = BlockSize;
}

impl Input for Tiger128 {
    fn input<B: AsRef<[u8]>>(&mut self, data: B) {
        self.engine.input(data.as_ref());
    }
}

impl FixedOutput for Tiger128 {
    type OutputSize = U16;

    fn fixed_result(mut self) -> GenericArray<u8, U16> {
        self.engine.finalize();
        let mut out = GenericArray::default();
        out.copy_from_slice(&self.engine.digest()[..16]);
        out
    }
}

impl Reset for Tiger128 {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

/// Tiger hasher with a runtime-selected digest width of 16, 20 or 24
/// bytes.
#[derive(Clone)]
pub struct VarTiger {
    engine: TigerEngine,
    output_size: usize,
}

impl VariableOutput for VarTiger {
    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        match output_size {
            16 | 20 | 24 => Ok(VarTiger {
                engine: TigerEngine::new(),
                output_size: output_size,
            }),
            _ => Err(InvalidOutputSize),
        }
    }

    fn output_size(&self) -> usize {
        self.output_size
    }

    fn variable_result<F: FnOnce(&[u8])>(mut self, f: F) {
        self.engine.finalize();
        let digest = self.engine.digest();
        f(&digest[..self.output_size]);
    }
}

impl BlockInput for VarTiger {
    type BlockSize = BlockSize;
}

impl Input for VarTiger {
    fn input<B: AsRef<[u8]>>(&mut self, data: B) {
        self.engine.input(data.as_ref());
    }
}

impl Reset for VarTiger {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

impl_opaque_debug!(Tiger);
impl_opaque_debug!(Tiger160);
impl_opaque_debug!(Tiger128);
impl_opaque_debug!(VarTiger);
impl_write!(Tiger);
impl_write!(Tiger160);
impl_write!(Tiger128);
impl_write!(VarTiger);

/// Computes the Tiger digest of `data`.
///
/// `output_bits` selects the digest width and must be 128, 160 or 192;
/// any other value is rejected. The shorter widths are prefixes of the
/// 192-bit digest.
#[cfg(feature = "std")]
pub fn hash(data: &[u8], output_bits: usize) -> Result<Vec<u8>, InvalidOutputSize> {
    let output_size = match output_bits {
        128 => 16,
        160 => 20,
        192 => 24,
        _ => return Err(InvalidOutputSize),
    };
    let mut hasher = VarTiger::new(output_size)?;
    Input::input(&mut hasher, data);
    let mut out = Vec::with_capacity(output_size);
    hasher.variable_result(|digest| out.extend_from_slice(digest));
    Ok(out)
}

#[cfg(feature = "std")]
const HEX_CHARS: &'static [u8; 16] = b"0123456789abcdef";

/// Like `hash`, but renders the digest as a lowercase hexadecimal
/// string, most significant byte first.
#[cfg(feature = "std")]
pub fn hash_hex(data: &[u8], output_bits: usize) -> Result<String, InvalidOutputSize> {
    let digest = hash(data, output_bits)?;
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push(HEX_CHARS[(byte >> 4) as usize] as char);
        hex.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_length_is_a_block_multiple() {
        for msg_len in 0..300 {
            let total = msg_len + pad_len(msg_len % 64) + 8;
            assert_eq!(total % 64, 0, "len {}", msg_len);
            assert_eq!(total / 64, (msg_len + 9 + 63) / 64, "len {}", msg_len);
        }
    }

    #[test]
    fn empty_message() {
        let digest = Tiger::digest(b"");
        assert_eq!(digest[..3], [0x32, 0x93, 0xac]);
        assert_eq!(digest[21..], [0xde, 0x73, 0xf3]);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut hasher = Tiger::new();
        Input::input(&mut hasher, b"some discarded input");
        Reset::reset(&mut hasher);
        Input::input(&mut hasher, b"abc");
        assert_eq!(hasher.result(), Tiger::digest(b"abc"));
    }

    #[test]
    fn rejected_output_sizes() {
        for &size in &[0, 8, 12, 15, 17, 21, 25, 32, 64] {
            assert!(VarTiger::new(size).is_err(), "size {}", size);
        }
    }
}
