//! Facade: one `convert_video` call drives the decoder, compressor and storage
//! subsystems in the right order.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

pub struct VideoDecoder;
pub struct VideoCompressor;
pub struct VideoStorage;

impl VideoDecoder {
    pub fn decode(&self, filename: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Decoding video file: {}", filename)
    }
}

impl VideoCompressor {
    pub fn compress(&self, format: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Compressing video to format: {}", format)
    }
}

impl VideoStorage {
    pub fn store(&self, filename: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Storing video file: {}", filename)
    }
}

pub struct VideoConversionFacade {
    decoder: VideoDecoder,
    compressor: VideoCompressor,
    storage: VideoStorage,
}

impl VideoConversionFacade {
    pub fn new() -> Self {
        Self { decoder: VideoDecoder, compressor: VideoCompressor, storage: VideoStorage }
    }

    pub fn convert_video(&self, filename: &str, format: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Starting video conversion process...")?;
        self.decoder.decode(filename, out)?;
        self.compressor.compress(format, out)?;
        self.storage.store(filename, out)?;
        writeln!(out, "Video conversion completed.\n")
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let converter = VideoConversionFacade::new();
    converter.convert_video("my_video.mp4", "avi", out)?;
    converter.convert_video("my_movie.mkv", "mp4", out)?;
    Ok(())
}
