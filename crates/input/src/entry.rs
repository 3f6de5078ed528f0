//! Buffer for typing a field number one digit at a time.

/// Longest accepted entry; the largest board has 2400 fields.
const MAX_DIGITS: usize = 4;

/// Digits typed so far for the next field number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEntry {
    digits: String,
}

impl FieldEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns false when the buffer is full or `digit > 9`.
    pub fn push(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digits.len() >= MAX_DIGITS {
            return false;
        }
        // Leading zeros never start a valid field number.
        if self.digits.is_empty() && digit == 0 {
            return false;
        }
        self.digits.push(char::from(b'0' + digit));
        true
    }

    /// Remove the last digit. Returns false when empty.
    pub fn pop(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Current value without clearing.
    pub fn value(&self) -> Option<usize> {
        self.digits.parse().ok()
    }

    /// Take the typed field number and clear the buffer.
    pub fn take(&mut self) -> Option<usize> {
        let value = self.value();
        self.digits.clear();
        value
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_multi_digit_numbers() {
        let mut entry = FieldEntry::new();
        assert!(entry.push(1));
        assert!(entry.push(2));
        assert_eq!(entry.as_str(), "12");
        assert_eq!(entry.take(), Some(12));
        assert!(entry.is_empty());
        assert_eq!(entry.take(), None);
    }

    #[test]
    fn ignores_leading_zero_and_overflow() {
        let mut entry = FieldEntry::new();
        assert!(!entry.push(0));
        for d in [2, 4, 0, 0] {
            assert!(entry.push(d));
        }
        assert!(!entry.push(1));
        assert_eq!(entry.value(), Some(2400));
    }

    #[test]
    fn backspace_edits_last_digit() {
        let mut entry = FieldEntry::new();
        entry.push(4);
        entry.push(5);
        assert!(entry.pop());
        assert_eq!(entry.value(), Some(4));
        assert!(entry.pop());
        assert!(!entry.pop());
    }
}
