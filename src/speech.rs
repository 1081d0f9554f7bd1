//! Spoken prompts
//!
//! The practice engine only ever tells an [`Announcer`] which word to say. It
//! never waits for speech to finish and never reads a result back.

use crate::core::Word;
use log::{debug, warn};
use std::process::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

/// A single piece of speech at a given rate (1.0 = normal speed)
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
}

/// The sequence spoken for one word: an instruction, then the word twice,
/// slowly
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPrompt {
    pub utterances: Vec<Utterance>,
}

impl SpeechPrompt {
    pub const INSTRUCTION: &'static str = "Spell the word";
    pub const INSTRUCTION_RATE: f32 = 0.5;
    pub const WORD_RATE: f32 = 0.4;

    #[must_use]
    pub fn for_word(word: &Word) -> Self {
        let spoken = |text: &str, rate| Utterance {
            text: text.to_string(),
            rate,
        };
        Self {
            utterances: vec![
                spoken(Self::INSTRUCTION, Self::INSTRUCTION_RATE),
                spoken(word.text(), Self::WORD_RATE),
                spoken(word.text(), Self::WORD_RATE),
            ],
        }
    }
}

/// Receiver of one-way "say this word" notifications
pub trait Announcer {
    fn announce(&mut self, word: &Word);
}

/// Announcer with no audio output
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&mut self, word: &Word) {
        debug!("announce '{word}' (silent)");
    }
}

/// Speaks through an external text-to-speech program such as `espeak` or
/// `say`
///
/// Each utterance runs `program args... <text>`. Any argument containing
/// `{rate}` has it replaced by the utterance rate. Utterances are spoken in
/// order on a detached thread. A new announcement cancels the one still
/// playing: its running process is killed and its remaining utterances are
/// skipped.
#[derive(Debug)]
pub struct CommandAnnouncer {
    program: String,
    args: Vec<String>,
    generation: Arc<AtomicU64>,
}

/// How often a playing prompt checks whether it was superseded
const CANCEL_POLL: Duration = Duration::from_millis(10);

impl CommandAnnouncer {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Arguments for one utterance, text last
    #[must_use]
    pub fn arguments_for(&self, utterance: &Utterance) -> Vec<String> {
        let rate = utterance.rate.to_string();
        self.args
            .iter()
            .map(|arg| arg.replace("{rate}", &rate))
            .chain(std::iter::once(utterance.text.clone()))
            .collect()
    }

    /// Stop the prompt that is currently playing, if any
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Run one utterance, killing it if `generation` moves past `ticket`
///
/// Returns false when the prompt should stop.
fn speak(program: &str, args: &[String], generation: &AtomicU64, ticket: u64) -> bool {
    let mut child = match Command::new(program).args(args).spawn() {
        Ok(child) => child,
        Err(e) => {
            warn!("speech command '{program}' failed: {e}");
            return false;
        }
    };

    loop {
        if generation.load(Ordering::SeqCst) != ticket {
            let _ = child.kill();
            let _ = child.wait();
            debug!("speech for '{}' cancelled", args.last().map_or("", String::as_str));
            return false;
        }
        match child.try_wait() {
            Ok(Some(_)) => return true,
            Ok(None) => thread::sleep(CANCEL_POLL),
            Err(e) => {
                warn!("speech command '{program}' failed: {e}");
                return false;
            }
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn announce(&mut self, word: &Word) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let program = self.program.clone();
        let generation = Arc::clone(&self.generation);
        let invocations: Vec<Vec<String>> = SpeechPrompt::for_word(word)
            .utterances
            .iter()
            .map(|utterance| self.arguments_for(utterance))
            .collect();

        thread::spawn(move || {
            for args in invocations {
                if generation.load(Ordering::SeqCst) != ticket
                    || !speak(&program, &args, &generation, ticket)
                {
                    return;
                }
            }
        });
    }
}

impl Drop for CommandAnnouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
