use std::fmt;

/// One user gesture during a session. Typed as a line on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The screen's primary button (submit, release, continue...)
    Action,
    /// Purchasing org choice on the PR screen, 1-based
    PickOrg(u8),
    ToggleDocument,
    ToggleGuide,
    Restart,
    Quit,
}

impl Input {
    /// Parse one stdin line. Unrecognised text yields `None`.
    pub fn parse(line: &str) -> Option<Input> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" | "ok" => Some(Input::Action),
            "d" | "doc" => Some(Input::ToggleDocument),
            "g" | "guide" => Some(Input::ToggleGuide),
            "r" | "restart" => Some(Input::Restart),
            "q" | "quit" | "exit" => Some(Input::Quit),
            other => other.parse::<u8>().ok().filter(|n| *n > 0).map(Input::PickOrg),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Action => f.write_str("action"),
            Input::PickOrg(n) => write!(f, "pick-org {n}"),
            Input::ToggleDocument => f.write_str("toggle-document"),
            Input::ToggleGuide => f.write_str("toggle-guide"),
            Input::Restart => f.write_str("restart"),
            Input::Quit => f.write_str("quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(Input::parse(""), Some(Input::Action));
        assert_eq!(Input::parse("  N \n"), Some(Input::Action));
        assert_eq!(Input::parse("2"), Some(Input::PickOrg(2)));
        assert_eq!(Input::parse("d"), Some(Input::ToggleDocument));
        assert_eq!(Input::parse("G"), Some(Input::ToggleGuide));
        assert_eq!(Input::parse("restart"), Some(Input::Restart));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Input::parse("0"), None);
        assert_eq!(Input::parse("hello"), None);
        assert_eq!(Input::parse("-1"), None);
    }
}
