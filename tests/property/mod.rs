//! Property-based tests for descriptor parsing
