//! # Response Selection
//!
//! File: cli/src/selector.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ResponseSelector` owns the parsed corpora and answers a set of input
//! words: the first word that is a known trigger selects its stored reply,
//! otherwise a default reply is drawn uniformly at random.
//!
//! The random generator is a type parameter so tests can substitute a seeded
//! or fixed-sequence generator. [`Responder`] is the production flavour,
//! backed by an entropy-seeded `StdRng` and built from the corpus files.
//!
//! ## Examples
//!
//! ```rust
//! use rand::rngs::mock::StepRng;
//! use responder::corpus::{DefaultRecordParser, KeyedRecordParser};
//! use responder::ResponseSelector;
//!
//! let triggers = KeyedRecordParser::parse("hello,hi\nGreetings!\n".lines());
//! let defaults = DefaultRecordParser::parse("Tell me more.\n".lines());
//! let mut selector = ResponseSelector::with_rng(triggers, defaults, StepRng::new(0, 0));
//!
//! assert_eq!(selector.generate_response(["hi"]), "Greetings!");
//! assert_eq!(selector.generate_response(["weather"]), "Tell me more.");
//! ```
//!
use crate::core::config::Config;
use crate::corpus::{
    DefaultRecordParser, DefaultResponseList, KeyedRecordParser, TriggerResponseMap,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Production responder: corpora from disk, entropy-seeded generator.
pub type Responder = ResponseSelector<StdRng>;

/// Lookup-or-fallback over a [`TriggerResponseMap`] and a [`DefaultResponseList`].
#[derive(Debug)]
pub struct ResponseSelector<R> {
    responses: TriggerResponseMap,
    defaults: DefaultResponseList,
    rng: R,
}

impl<R: Rng> ResponseSelector<R> {
    pub fn with_rng(responses: TriggerResponseMap, defaults: DefaultResponseList, rng: R) -> Self {
        Self {
            responses,
            defaults,
            rng,
        }
    }

    /// Picks the reply for `words`.
    ///
    /// Words are tried in the iteration order of `words`. With a `HashSet`
    /// that order is arbitrary, so when several words are triggers for
    /// different replies any one of them may win. Never fails: with no match
    /// a default reply is returned.
    pub fn generate_response<I>(&mut self, words: I) -> &str
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in words {
            if let Some(response) = self.responses.get(word.as_ref()) {
                debug!("Matched trigger {:?}", word.as_ref());
                return response;
            }
        }
        pick_default_response(&mut self.rng, &self.defaults)
    }

    pub fn trigger_map(&self) -> &TriggerResponseMap {
        &self.responses
    }

    pub fn default_responses(&self) -> &DefaultResponseList {
        &self.defaults
    }
}

impl ResponseSelector<StdRng> {
    /// Reads `responses.txt` and `default.txt` from the working directory.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Reads the corpora named in `config`.
    ///
    /// Unreadable corpora are logged by the parsers and replaced by an empty
    /// map or the fallback-only default list.
    pub fn from_config(config: &Config) -> Self {
        let responses = KeyedRecordParser::load(&config.corpus.keyed_path());
        let defaults =
            DefaultRecordParser::load(&config.corpus.defaults_path(), &config.fallback_response);
        info!(
            "Responder ready: {} triggers, {} default responses",
            responses.len(),
            defaults.len()
        );
        Self::with_rng(responses, defaults, StdRng::from_entropy())
    }
}

impl Default for ResponseSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

// Index drawn from [0, len); `defaults` is never empty.
fn pick_default_response<'a, R: Rng>(rng: &mut R, defaults: &'a DefaultResponseList) -> &'a str {
    let index = rng.gen_range(0..defaults.len());
    debug!("No trigger matched, using default response #{}", index);
    defaults.as_slice()[index].as_str()
}
