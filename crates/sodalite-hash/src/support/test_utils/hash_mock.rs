// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock hash backend for testing.

use core::cell::Cell;
use std::rc::Rc;

use sodalite_core::ProviderError;

use crate::blake2b::Blake2bBackend;
use crate::traits::HashBackend;

/// Mock failure behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMockBehaviour {
    /// No failure.
    None,
    /// Fail init at call index (0-indexed).
    FailInitAt(usize),
    /// Fail update at call index (0-indexed).
    FailUpdateAt(usize),
    /// Fail finalize at call index (0-indexed).
    FailFinalizeAt(usize),
    /// Fail one-shot hash at call index (0-indexed).
    FailHashAt(usize),
}

#[derive(Debug, Default)]
struct Counters {
    init: Cell<usize>,
    update: Cell<usize>,
    finalize: Cell<usize>,
    hash: Cell<usize>,
}

fn bump(counter: &Cell<usize>) -> usize {
    let current = counter.get();
    counter.set(current + 1);
    current
}

/// Mock hash backend delegating to the real BLAKE2b backend.
///
/// Clones share their counters, so the states created by
/// [`GenericHash::init`](crate::GenericHash::init) report into the same mock.
#[derive(Debug, Clone)]
pub struct HashMock {
    backend: Blake2bBackend,
    behaviour: HashMockBehaviour,
    counters: Rc<Counters>,
}

impl HashMock {
    /// Creates a mock with the given behaviour.
    pub fn new(behaviour: HashMockBehaviour) -> Self {
        Self {
            backend: Blake2bBackend,
            behaviour,
            counters: Rc::new(Counters::default()),
        }
    }

    /// Changes the mock behaviour at runtime.
    ///
    /// Only affects this handle; states already created keep their own copy.
    pub fn change_behaviour(&mut self, behaviour: HashMockBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of backend init calls observed so far.
    pub fn init_count(&self) -> usize {
        self.counters.init.get()
    }

    /// Number of backend update calls observed so far.
    pub fn update_count(&self) -> usize {
        self.counters.update.get()
    }

    /// Number of backend finalize calls observed so far.
    pub fn finalize_count(&self) -> usize {
        self.counters.finalize.get()
    }

    /// Number of backend one-shot hash calls observed so far.
    pub fn hash_count(&self) -> usize {
        self.counters.hash.get()
    }

    /// Total backend calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.init_count() + self.update_count() + self.finalize_count() + self.hash_count()
    }
}

impl HashBackend for HashMock {
    type State = <Blake2bBackend as HashBackend>::State;

    fn init(&self, key: &[u8], outlen: usize) -> Result<Self::State, ProviderError> {
        let current = bump(&self.counters.init);

        if self.behaviour == HashMockBehaviour::FailInitAt(current) {
            return Err(ProviderError);
        }

        self.backend.init(key, outlen)
    }

    fn update(&self, state: &mut Self::State, input: &[u8]) -> Result<(), ProviderError> {
        let current = bump(&self.counters.update);

        if self.behaviour == HashMockBehaviour::FailUpdateAt(current) {
            return Err(ProviderError);
        }

        self.backend.update(state, input)
    }

    fn finalize(&self, state: Self::State, out: &mut [u8]) -> Result<(), ProviderError> {
        let current = bump(&self.counters.finalize);

        if self.behaviour == HashMockBehaviour::FailFinalizeAt(current) {
            return Err(ProviderError);
        }

        self.backend.finalize(state, out)
    }

    fn hash(&self, key: &[u8], input: &[u8], out: &mut [u8]) -> Result<(), ProviderError> {
        let current = bump(&self.counters.hash);

        if self.behaviour == HashMockBehaviour::FailHashAt(current) {
            return Err(ProviderError);
        }

        self.backend.hash(key, input, out)
    }
}
