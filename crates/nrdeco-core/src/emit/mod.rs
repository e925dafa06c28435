//! Emission: fills the compiled-in decorator template with a finished `File`.

mod emitter;
mod template;


pub use emitter::Emitter;

use crate::model::File;

/// Render `file` into the bytes of the generated Go source.
pub fn emit(file: &File) -> Vec<u8> {
    Emitter::new(file).emit().into_bytes()
}
