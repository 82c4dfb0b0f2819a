//! Unit and behavioural tests for the task module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod memory_repository_tests;
