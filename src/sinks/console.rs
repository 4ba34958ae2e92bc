//! Console sinks
//!
//! `Stdout` and `Stderr` report themselves interactive when attached to a
//! terminal, which enables colored labels.

use crate::core::Sink;
use std::io::{self, IsTerminal};

impl Sink for io::Stdout {
    fn is_interactive(&self) -> bool {
        IsTerminal::is_terminal(self)
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

impl Sink for io::Stderr {
    fn is_interactive(&self) -> bool {
        IsTerminal::is_terminal(self)
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_names() {
        assert_eq!(Sink::name(&io::stdout()), "stdout");
        assert_eq!(Sink::name(&io::stderr()), "stderr");
    }

    #[test]
    fn test_interactivity_matches_terminal_check() {
        let stdout = io::stdout();
        assert_eq!(stdout.is_interactive(), stdout.is_terminal());
    }
}
