#![allow(dead_code)]

use prismlog::{HandlerOptions, Level};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A clonable in-memory sink; every clone appends to the same bytes.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Debug level, no color, environment ignored, single-space separators.
pub fn plain_options() -> HandlerOptions {
    HandlerOptions::new()
        .level(Level::DEBUG)
        .no_color(true)
        .color_env(None::<String>)
        .message_separator(" | ")
        .attr_separator(" ")
}

/// Debug level, color forced on, environment ignored.
pub fn color_options() -> HandlerOptions {
    HandlerOptions::new()
        .level(Level::DEBUG)
        .no_color(false)
        .color_env(None::<String>)
}

/// Removes every `ESC [ ... m` sequence.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new("\x1b\\[[0-9;]*m").unwrap();
    re.replace_all(s, "").into_owned()
}
