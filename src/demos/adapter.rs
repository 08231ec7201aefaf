//! Adapter: an audio player that only knows mp3 reaches vlc and mp4 playback
//! through an adapter over the advanced player interface.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Target interface.
pub trait MediaPlayer {
    fn play(&self, audio_type: &str, file_name: &str, out: &mut Output) -> fmt::Result;
}

/// Adaptee interface. Each concrete player handles one format and ignores the
/// other.
pub trait AdvancedMediaPlayer {
    fn play_vlc(&self, file_name: &str, out: &mut Output) -> fmt::Result;
    fn play_mp4(&self, file_name: &str, out: &mut Output) -> fmt::Result;
}

pub struct VlcPlayer;
pub struct Mp4Player;

impl AdvancedMediaPlayer for VlcPlayer {
    fn play_vlc(&self, file_name: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Playing VLC file: {}", file_name)
    }

    fn play_mp4(&self, _file_name: &str, _out: &mut Output) -> fmt::Result {
        Ok(())
    }
}

impl AdvancedMediaPlayer for Mp4Player {
    fn play_vlc(&self, _file_name: &str, _out: &mut Output) -> fmt::Result {
        Ok(())
    }

    fn play_mp4(&self, file_name: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "Playing MP4 file: {}", file_name)
    }
}

/// Formats the adapter can route to an advanced player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdvancedFormat {
    Vlc,
    Mp4,
}

impl AdvancedFormat {
    fn parse(audio_type: &str) -> Option<Self> {
        if audio_type.eq_ignore_ascii_case("vlc") {
            Some(Self::Vlc)
        } else if audio_type.eq_ignore_ascii_case("mp4") {
            Some(Self::Mp4)
        } else {
            None
        }
    }
}

pub struct MediaAdapter {
    format: AdvancedFormat,
    player: Box<dyn AdvancedMediaPlayer>,
}

impl MediaAdapter {
    /// Build an adapter for `audio_type`, or `None` if no advanced player
    /// handles it.
    pub fn new(audio_type: &str) -> Option<Self> {
        let format = AdvancedFormat::parse(audio_type)?;
        let player: Box<dyn AdvancedMediaPlayer> = match format {
            AdvancedFormat::Vlc => Box::new(VlcPlayer),
            AdvancedFormat::Mp4 => Box::new(Mp4Player),
        };
        Some(Self { format, player })
    }
}

impl MediaPlayer for MediaAdapter {
    fn play(&self, _audio_type: &str, file_name: &str, out: &mut Output) -> fmt::Result {
        match self.format {
            AdvancedFormat::Vlc => self.player.play_vlc(file_name, out),
            AdvancedFormat::Mp4 => self.player.play_mp4(file_name, out),
        }
    }
}

pub struct AudioPlayer;

impl MediaPlayer for AudioPlayer {
    fn play(&self, audio_type: &str, file_name: &str, out: &mut Output) -> fmt::Result {
        if audio_type.eq_ignore_ascii_case("mp3") {
            return writeln!(out, "Playing MP3 file: {}", file_name);
        }
        match MediaAdapter::new(audio_type) {
            Some(adapter) => adapter.play(audio_type, file_name, out),
            None => writeln!(out, "Invalid media format: {}", audio_type),
        }
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let player = AudioPlayer;
    player.play("mp3", "song.mp3", out)?;
    player.play("mp4", "video.mp4", out)?;
    player.play("vlc", "movie.vlc", out)?;
    player.play("avi", "documentary.avi", out)?;
    Ok(())
}
