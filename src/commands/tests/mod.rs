//! Tests for command helpers
