//! Tests for frames and resolution scaling
