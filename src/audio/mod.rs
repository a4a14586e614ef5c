//! Decoding of uploaded audio blobs into engine PCM.
//!
//! The page uploads a 16-bit WAV blob it encodes itself, but the probe
//! accepts any container/codec symphonia recognises, so other clients can
//! post MP3, FLAC or OGG recordings just the same.

mod decode;

pub use decode::{decode_for_engine, ENGINE_SAMPLE_RATE};
