//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Passphrase prompting (`input`)
//! - Unlock date parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::prompt_passphrase;
pub use parsing::parse_unlock_date;
