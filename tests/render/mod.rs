//! Renderer tests: golden comparisons, idempotence, and cancellation.
