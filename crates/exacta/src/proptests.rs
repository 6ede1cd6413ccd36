//! Property-based tests for the textual boundary.
