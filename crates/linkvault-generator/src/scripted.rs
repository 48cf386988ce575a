use crate::Generator;
use linkvault_core::{ShortCode, Strength};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A deterministic generator that replays a fixed script of candidates.
///
/// Once the script runs out it produces sequential codes like "seq000000",
/// "seq000001", etc. Strength is ignored. Meant for exercising the store's
/// collision handling, where the random generator would practically never
/// collide.
#[derive(Debug)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<String>>,
    counter: AtomicU64,
    prefix: String,
    repeat: Option<String>,
}

impl ScriptedGenerator {
    /// Creates a generator that first yields `candidates`, in order.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(candidates.into_iter().map(Into::into).collect()),
            counter: AtomicU64::new(0),
            prefix: "seq".to_string(),
            repeat: None,
        }
    }

    /// Creates a generator that always yields the same candidate.
    pub fn repeating(candidate: impl Into<String>) -> Self {
        Self {
            repeat: Some(candidate.into()),
            ..Self::new(Vec::<String>::new())
        }
    }

    /// Changes the prefix used once the script is exhausted.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Number of scripted candidates not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&self, _strength: Strength) -> ShortCode {
        let next = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        if let Some(code) = next {
            return ShortCode::new_unchecked(code);
        }

        if let Some(code) = &self.repeat {
            return ShortCode::new_unchecked(code.clone());
        }
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
