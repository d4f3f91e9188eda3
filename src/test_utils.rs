//! Test doubles shared by the unit tests.

use crate::error::Result;
use crate::launch::ScriptLauncher;
use crate::menu::Prompt;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Prompt that replays canned answers and counts what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: usize,
    pub paused: usize,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.asked += 1;
        Ok(self.answers.pop_front())
    }

    fn pause(&mut self, _message: &str) -> Result<()> {
        self.paused += 1;
        Ok(())
    }
}

/// Launcher that records scripts instead of running them.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub launched: RefCell<Vec<PathBuf>>,
}

impl ScriptLauncher for RecordingLauncher {
    fn launch(&self, script: &Path) -> Result<()> {
        self.launched.borrow_mut().push(script.to_path_buf());
        Ok(())
    }
}

/// In-memory log sink usable as a `tracing` writer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
