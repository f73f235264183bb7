//! CPU core tests.
