//! Cache layer tests: coherence under invalidation and single-flight
//! computation under concurrent readers.
