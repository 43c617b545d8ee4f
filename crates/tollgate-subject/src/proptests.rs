//! Property-based tests for subject matching.
