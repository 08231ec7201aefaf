//! State: a music player whose buttons behave differently while stopped,
//! playing or paused. Each state consumes itself and returns the next one.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

type Transition = Result<Box<dyn PlayerState>, fmt::Error>;

pub trait PlayerState {
    fn press_play(self: Box<Self>, out: &mut Output) -> Transition;
    fn press_pause(self: Box<Self>, out: &mut Output) -> Transition;
    fn press_stop(self: Box<Self>, out: &mut Output) -> Transition;
    fn name(&self) -> &'static str;
}

struct Playing;
struct Paused;
struct Stopped;

impl PlayerState for Playing {
    fn press_play(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "The music is already playing.")?;
        Ok(self)
    }

    fn press_pause(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Pausing the music.")?;
        Ok(Box::new(Paused))
    }

    fn press_stop(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Stopping the music.")?;
        Ok(Box::new(Stopped))
    }

    fn name(&self) -> &'static str {
        "playing"
    }
}

impl PlayerState for Paused {
    fn press_play(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Resuming the music.")?;
        Ok(Box::new(Playing))
    }

    fn press_pause(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "The music is already paused.")?;
        Ok(self)
    }

    fn press_stop(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Stopping the music from paused state.")?;
        Ok(Box::new(Stopped))
    }

    fn name(&self) -> &'static str {
        "paused"
    }
}

impl PlayerState for Stopped {
    fn press_play(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Starting the music.")?;
        Ok(Box::new(Playing))
    }

    fn press_pause(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "Can't pause. The music is stopped.")?;
        Ok(self)
    }

    fn press_stop(self: Box<Self>, out: &mut Output) -> Transition {
        writeln!(out, "The music is already stopped.")?;
        Ok(self)
    }

    fn name(&self) -> &'static str {
        "stopped"
    }
}

/// Context. Starts stopped.
pub struct MusicPlayer {
    state: Option<Box<dyn PlayerState>>,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self { state: Some(Box::new(Stopped)) }
    }

    pub fn state_name(&self) -> &'static str {
        self.state.as_ref().map_or("stopped", |s| s.name())
    }

    fn transition<F>(&mut self, press: F, out: &mut Output) -> fmt::Result
    where
        F: FnOnce(Box<dyn PlayerState>, &mut Output) -> Transition,
    {
        let current = self.state.take().unwrap_or_else(|| Box::new(Stopped));
        self.state = Some(press(current, out)?);
        Ok(())
    }

    pub fn press_play(&mut self, out: &mut Output) -> fmt::Result {
        self.transition(|s, out| s.press_play(out), out)
    }

    pub fn press_pause(&mut self, out: &mut Output) -> fmt::Result {
        self.transition(|s, out| s.press_pause(out), out)
    }

    pub fn press_stop(&mut self, out: &mut Output) -> fmt::Result {
        self.transition(|s, out| s.press_stop(out), out)
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut player = MusicPlayer::new();
    player.press_play(out)?;
    player.press_pause(out)?;
    player.press_play(out)?;
    player.press_stop(out)?;
    player.press_pause(out)?;
    Ok(())
}
