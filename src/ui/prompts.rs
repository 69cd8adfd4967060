//! Interruptible line prompts.
//!
//! Every prompt attempt races two events on one channel: a background
//! thread reading a single line from the [`LineSource`], and a Ctrl-C
//! delivered through the [`InterruptHub`]. Whichever arrives first wins.
//! The channel is unbounded, so a reader that loses the race can still
//! send its late line and exit; the value is dropped with the channel.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use thiserror::Error;
use tracing::debug;

use crate::error::{LcnsError, Result};

/// Where prompt answers come from.
pub trait LineSource: Send + Sync {
    /// Read one line including its terminator. `Ok(None)` is end of input.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Answers typed on standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Pre-recorded answers handed out in order, then end of input.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedLines {
    /// Create a source answering with `lines`, one per read.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        Ok(lines.pop_front().map(|line| format!("{}\n", line)))
    }
}

enum Event {
    Line(io::Result<Option<String>>),
    Interrupted,
}

/// Routes Ctrl-C to the prompt that is currently waiting, if any.
#[derive(Clone, Default)]
pub struct InterruptHub {
    listener: Arc<Mutex<Option<Sender<Event>>>>,
}

impl InterruptHub {
    /// Create a hub that is not connected to any signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hub fed by the process Ctrl-C handler.
    ///
    /// Outside of a prompt, Ctrl-C terminates the process with status 130.
    /// Can only be called once per process.
    pub fn install() -> Result<Self> {
        let hub = Self::new();
        let handler_hub = hub.clone();
        ctrlc::set_handler(move || {
            if !handler_hub.trigger() {
                std::process::exit(130);
            }
        })
        .map_err(|e| anyhow::anyhow!("Failed to install Ctrl-C handler: {}", e))?;
        Ok(hub)
    }

    /// Deliver an interrupt to the waiting prompt.
    ///
    /// Returns `false` when no prompt is waiting.
    pub fn trigger(&self) -> bool {
        match self.slot().take() {
            Some(tx) => tx.send(Event::Interrupted).is_ok(),
            None => false,
        }
    }

    fn arm(&self, tx: Sender<Event>) -> Armed<'_> {
        *self.slot() = Some(tx);
        Armed { hub: self }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Sender<Event>>> {
        self.listener.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Keeps the hub pointed at one prompt attempt until dropped.
struct Armed<'a> {
    hub: &'a InterruptHub,
}

impl Drop for Armed<'_> {
    fn drop(&mut self) {
        self.hub.slot().take();
    }
}

/// Why a number answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChoice {
    /// The answer is not a number.
    #[error("choose by number")]
    NotANumber,
    /// The number is outside `1..=max`.
    #[error("choose from 1 to {max}")]
    OutOfRange { max: usize },
}

/// Interpret one trimmed answer to a number prompt.
pub fn parse_choice(
    input: &str,
    max: usize,
    default: usize,
) -> std::result::Result<usize, InvalidChoice> {
    if input.is_empty() {
        return Ok(default);
    }

    let n: i64 = input.parse().map_err(|_| InvalidChoice::NotANumber)?;
    if n < 1 || n as u64 > max as u64 {
        return Err(InvalidChoice::OutOfRange { max });
    }
    Ok(n as usize)
}

/// Strip one `\n` and then one `\r` from the end of `line`.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Asks the operator for numbers and strings.
pub struct Prompter<W: Write> {
    lines: Arc<dyn LineSource>,
    interrupts: InterruptHub,
    out: W,
}

impl<W: Write> Prompter<W> {
    /// Create a prompter reading from `lines` and writing prompts to `out`.
    pub fn new(lines: Arc<dyn LineSource>, interrupts: InterruptHub, out: W) -> Self {
        Self {
            lines,
            interrupts,
            out,
        }
    }

    /// Ask for a number from 1 to `max`.
    ///
    /// An empty answer picks `default`. Invalid answers are reported and
    /// asked again; only an interrupt or a broken input stream fails.
    pub fn ask_number(&mut self, max: usize, default: usize) -> Result<usize> {
        loop {
            write!(self.out, "Your choice? [default: {}] ", default).ok();
            self.out.flush().ok();

            let line = self.read_attempt()?;
            let input = line.trim();
            debug!("Input: {:?}", input);

            match parse_choice(input, max, default) {
                Ok(n) => return Ok(n),
                Err(invalid) => {
                    writeln!(self.out, "  is an invalid choice: {}.\n", invalid).ok();
                }
            }
        }
    }

    /// Ask a free-form question. An empty answer picks `default`.
    pub fn ask_string(&mut self, query: &str, default: &str) -> Result<String> {
        write!(self.out, "{} [default: {}] ", query, default).ok();
        self.out.flush().ok();

        let line = self.read_attempt()?;
        let answer = trim_line_ending(&line);
        debug!("Input: {:?}", answer);

        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Wait for one line or an interrupt, whichever comes first.
    fn read_attempt(&mut self) -> Result<String> {
        let (tx, rx) = mpsc::channel();
        let _armed = self.interrupts.arm(tx.clone());

        let lines = Arc::clone(&self.lines);
        thread::spawn(move || {
            // The receiver is gone if the prompt was interrupted
            let _ = tx.send(Event::Line(lines.read_line()));
        });

        let event = rx.recv();
        match event {
            Ok(Event::Line(Ok(Some(line)))) => Ok(line),
            Ok(Event::Interrupted) => {
                writeln!(self.out).ok();
                Err(LcnsError::Interrupted)
            }
            Ok(Event::Line(Ok(None))) => {
                writeln!(self.out).ok();
                Err(LcnsError::Scan(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "end of input",
                )))
            }
            Ok(Event::Line(Err(e))) => {
                writeln!(self.out).ok();
                Err(LcnsError::Scan(e))
            }
            Err(_) => Err(LcnsError::Scan(io::Error::other("input reader stopped"))),
        }
    }
}
