//! Category and payment-method selection
//!
//! Turns raw prompt input into a canonical list of labels. Input is either a
//! comma-separated list of 1-based indices into a fixed option list, or free
//! text taken verbatim. One classification step decides which; resolution
//! never validates free text against the option list.

/// The fixed category choices offered at the prompt
pub const CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Health",
    "Other",
];

/// The fixed payment-method choices offered at the prompt
pub const PAYMENT_METHODS: [&str; 5] = ["Cash", "Card", "Bank Transfer", "Mobile Payment", "Other"];

/// Classification of raw selector input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSelection {
    /// 1-based indices into the fixed option list
    ByIndex(Vec<usize>),
    /// Free-text labels, taken verbatim
    ByText(Vec<String>),
}

/// Classify raw input as an index list or free text
///
/// Input counts as an index list when it is one or more digit groups
/// separated by commas, each comma optionally followed by whitespace.
pub fn classify(raw: &str) -> ParsedSelection {
    if is_index_list(raw) {
        let indices = raw
            .split(',')
            // Oversized digit groups overflow usize; zero is out of range
            // either way and gets dropped during resolution.
            .map(|token| token.trim().parse().unwrap_or(0))
            .collect();
        ParsedSelection::ByIndex(indices)
    } else {
        let labels = raw
            .split(',')
            .map(|token| token.trim().to_string())
            .collect();
        ParsedSelection::ByText(labels)
    }
}

// Matches: digits, then any number of ("," whitespace* digits) groups.
fn is_index_list(raw: &str) -> bool {
    let mut chars = raw.chars().peekable();
    loop {
        let mut saw_digit = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_digit = true;
        }
        if !saw_digit {
            return false;
        }
        match chars.next() {
            None => return true,
            Some(',') => {
                while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
                    chars.next();
                }
            }
            Some(_) => return false,
        }
    }
}

/// Resolves raw input against one fixed option list
///
/// Two instances share this contract: the category selector falls back to
/// "Other" when an index selection survives with nothing in range, the
/// payment selector yields an empty selection instead. The asymmetry is
/// intentional and relied on by the shell (an empty payment selection means
/// "keep the current methods" during edits).
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    options: &'static [&'static str],
    empty_fallback: Option<&'static str>,
}

impl Selector {
    /// The category selector (falls back to "Other")
    pub fn categories() -> Self {
        Self {
            options: &CATEGORIES,
            empty_fallback: Some("Other"),
        }
    }

    /// The payment-method selector (no fallback; empty selection allowed)
    pub fn payment_methods() -> Self {
        Self {
            options: &PAYMENT_METHODS,
            empty_fallback: None,
        }
    }

    /// The fixed options, for prompt rendering
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Resolve raw input into a list of labels
    ///
    /// A blank input returns `default` verbatim when one is given; with no
    /// default a blank input behaves like an empty index selection.
    /// Out-of-range indices are silently dropped. Free text is split on
    /// commas, trimmed, and returned without validation.
    pub fn resolve(&self, raw: &str, default: &[String]) -> Vec<String> {
        if raw.trim().is_empty() {
            if !default.is_empty() {
                return default.to_vec();
            }
            return self.fallback();
        }

        match classify(raw) {
            ParsedSelection::ByIndex(indices) => {
                let picked: Vec<String> = indices
                    .iter()
                    .filter(|&&i| i >= 1 && i <= self.options.len())
                    .map(|&i| self.options[i - 1].to_string())
                    .collect();
                if picked.is_empty() {
                    self.fallback()
                } else {
                    picked
                }
            }
            ParsedSelection::ByText(labels) => labels,
        }
    }

    fn fallback(&self) -> Vec<String> {
        match self.empty_fallback {
            Some(label) => vec![label.to_string()],
            None => Vec::new(),
        }
    }
}
