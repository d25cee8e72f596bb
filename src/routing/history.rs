//! Web-history stack.
//!
//! # State
//! ```text
//! entries: [ "/", "/dashboard", "/x" ]
//!                       ^ position
//! push    → drops entries after position, appends, moves to the end
//! replace → overwrites the entry at position
//! go(n)   → moves position by n when the target exists
//! ```

/// Ordered list of visited full paths with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    position: usize,
}

impl History {
    /// Create a history holding a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// The entry under the cursor.
    pub fn location(&self) -> &str {
        &self.entries[self.position]
    }

    pub fn push(&mut self, full_path: impl Into<String>) {
        self.entries.truncate(self.position + 1);
        self.entries.push(full_path.into());
        self.position = self.entries.len() - 1;
    }

    pub fn replace(&mut self, full_path: impl Into<String>) {
        self.entries[self.position] = full_path.into();
    }

    /// Move the cursor by `delta`. Returns the new location, or `None`
    /// (leaving the cursor untouched) when the target is out of range.
    pub fn go(&mut self, delta: isize) -> Option<&str> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(self.location())
    }

    pub fn back(&mut self) -> Option<&str> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&str> {
        self.go(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
