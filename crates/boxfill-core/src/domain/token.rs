//! Resumption tokens for lazy neighborhoods.

/// Identifies "the Solution the caller is currently working from".
///
/// Some neighborhoods hand out their neighbors a few at a time. They keep
/// going through the same sequence while the caller passes the same token and
/// start over as soon as the token changes. Tokens only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResumeToken(u64);

impl ResumeToken {
    /// The token a fresh engine starts with.
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Returns the following token.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Advances this token in place.
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ResumeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
