//! Ordered class-token sequences

use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

/// An ordered sequence of utility class tokens.
///
/// Produced per render by variant resolution and discarded after use. Order
/// is significant: it is the precedence order the merge step honors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; 8]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a whitespace-separated class group and append its tokens
    pub fn push_group(&mut self, group: &str) {
        for token in group.split_ascii_whitespace() {
            self.tokens.push(token.to_string());
        }
    }

    pub fn push_token(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Build a list from class groups in precedence order
    pub fn from_groups<'a>(groups: impl IntoIterator<Item = &'a str>) -> Self {
        let mut list = Self::new();
        for group in groups {
            list.push_group(group);
        }
        list
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<&str> for ClassList {
    fn from(group: &str) -> Self {
        let mut list = Self::new();
        list.push_group(group);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_groups_preserves_order() {
        let list = ClassList::from_groups(["inline-flex items-center", "h-9 px-4"]);
        let tokens: Vec<&str> = list.tokens().collect();
        assert_eq!(tokens, vec!["inline-flex", "items-center", "h-9", "px-4"]);
    }

    #[test]
    fn test_display_joins_with_single_spaces() {
        let list = ClassList::from_groups(["a  b", " c "]);
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_empty() {
        let list = ClassList::from_groups([""]);
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }
}
