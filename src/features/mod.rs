//! Feature implementations for focusflow.

pub mod pomodoro;
