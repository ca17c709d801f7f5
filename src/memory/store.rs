//! Pattern memory
//!
//! Owns one Hopfield network together with the log of pattern sources that
//! were learned into it. All access goes through a read-write lock, so
//! recalls may run side by side while learning and resizing are exclusive.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::MemoryConfig;
use crate::error::{MemoryError, Result};
use crate::hopfield::{HopfieldNetwork, RecallOutcome};

/// A learned pattern's external identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSource {
    /// Caller-supplied identifier (a URL, a file name, ...)
    pub id: String,
    /// When the pattern was learned
    pub learned_at: DateTime<Utc>,
}

impl PatternSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            learned_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
struct MemoryState {
    network: HopfieldNetwork,
    /// Append-only, never deduplicated
    sources: Vec<PatternSource>,
}

/// Shared associative memory
#[derive(Debug)]
pub struct PatternMemory {
    state: RwLock<MemoryState>,
}

impl PatternMemory {
    /// Create a memory with the given configuration
    pub fn new(config: &MemoryConfig) -> Result<Self> {
        config.validate()?;
        let network = HopfieldNetwork::with_config(config.neurons, config.hopfield())?;

        Ok(Self::from_network(network))
    }

    /// Wrap an existing network; the source log starts empty
    pub fn from_network(network: HopfieldNetwork) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                network,
                sources: Vec::new(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state.read().map_err(|_| MemoryError::StatePoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state.write().map_err(|_| MemoryError::StatePoisoned)
    }

    /// Learn a pattern and record where it came from
    pub fn add_pattern(&self, source: impl Into<String>, pattern: &[i8]) -> Result<PatternSource> {
        let mut state = self.write()?;
        state.network.learn(pattern)?;

        let source = PatternSource::new(source);
        log::info!("Added pattern {}", source.id);
        state.sources.push(source.clone());
        Ok(source)
    }

    /// Recall the closest learned pattern
    pub fn recognize(&self, probe: &[i8]) -> Result<RecallOutcome> {
        self.read()?.network.recall(probe)
    }

    /// Recall using the explicit per-neuron update loop
    pub fn recognize_explicitly(&self, probe: &[i8]) -> Result<RecallOutcome> {
        self.read()?.network.recall_explicit(probe)
    }

    /// Current neuron count
    pub fn neurons(&self) -> Result<usize> {
        Ok(self.read()?.network.size())
    }

    /// Side length of the square grid patterns are shown on
    pub fn side_length(&self) -> Result<usize> {
        Ok(self.read()?.network.side_length())
    }

    /// Change the neuron count, forgetting all patterns and sources
    pub fn set_neurons(&self, neurons: usize) -> Result<usize> {
        let mut state = self.write()?;
        state.network.resize(neurons)?;
        state.sources.clear();
        Ok(state.network.size())
    }

    /// Identifiers of all learned patterns, in learn order
    pub fn patterns(&self) -> Result<Vec<String>> {
        Ok(self.read()?.sources.iter().map(|s| s.id.clone()).collect())
    }

    /// Full source records, in learn order
    pub fn sources(&self) -> Result<Vec<PatternSource>> {
        Ok(self.read()?.sources.clone())
    }

    /// Run a closure against the network under the read lock
    pub fn with_network<T>(&self, f: impl FnOnce(&HopfieldNetwork) -> T) -> Result<T> {
        Ok(f(&self.read()?.network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_memory() -> PatternMemory {
        PatternMemory::new(&MemoryConfig::default().with_neurons(4)).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let memory = small_memory();

        memory.add_pattern("a.png", &[1, -1, 1, -1]).unwrap();
        memory.add_pattern("a.png", &[1, 1, -1, -1]).unwrap();

        assert_eq!(memory.patterns().unwrap(), vec!["a.png", "a.png"]);
        assert_eq!(memory.with_network(|n| n.pattern_count()).unwrap(), 2);
    }

    #[test]
    fn test_rejected_pattern_not_logged() {
        let memory = small_memory();

        assert!(memory.add_pattern("bad", &[1, -1]).is_err());
        assert!(memory.patterns().unwrap().is_empty());
    }

    #[test]
    fn test_set_neurons_clears_everything() {
        let memory = small_memory();
        memory.add_pattern("a", &[1, -1, 1, -1]).unwrap();

        assert_eq!(memory.set_neurons(9).unwrap(), 9);
        assert_eq!(memory.neurons().unwrap(), 9);
        assert_eq!(memory.side_length().unwrap(), 3);
        assert!(memory.patterns().unwrap().is_empty());
        assert!(memory.with_network(|n| n.weights().is_zero()).unwrap());
    }

    #[test]
    fn test_set_neurons_zero_keeps_state() {
        let memory = small_memory();
        memory.add_pattern("a", &[1, -1, 1, -1]).unwrap();

        assert!(matches!(
            memory.set_neurons(0),
            Err(MemoryError::Configuration { size: 0 })
        ));
        assert_eq!(memory.neurons().unwrap(), 4);
        assert_eq!(memory.patterns().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_recognize_variants_agree() {
        let memory = small_memory();
        memory.add_pattern("a", &[1, -1, 1, -1]).unwrap();

        let fast = memory.recognize(&[1, 1, 1, -1]).unwrap();
        let explicit = memory.recognize_explicitly(&[1, 1, 1, -1]).unwrap();

        assert_eq!(fast.pattern, vec![1, -1, 1, -1]);
        assert_eq!(fast.trajectory, explicit.trajectory);
    }

    #[test]
    fn test_concurrent_recalls() {
        let memory = std::sync::Arc::new(small_memory());
        memory.add_pattern("a", &[1, -1, 1, -1]).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let memory = memory.clone();
                std::thread::spawn(move || memory.recognize(&[1, -1, 1, 1]).unwrap().pattern)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec![1, -1, 1, -1]);
        }
    }
}
