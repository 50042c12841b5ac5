//! Fixed-capacity diagnostic text record

use core::fmt;

use heapless::String;

/// Capacity of one record in bytes
pub const MESSAGE_SIZE: usize = 64;

/// One diagnostic line
///
/// Formatting never fails: text beyond [`MESSAGE_SIZE`] bytes is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticMessage {
    text: String<MESSAGE_SIZE>,
}

impl DiagnosticMessage {
    /// Empty record
    pub const EMPTY: Self = Self {
        text: String::new(),
    };

    /// Build a record from format arguments, truncating if needed
    ///
    /// ```
    /// use interconnect_core::diagnostics::DiagnosticMessage;
    ///
    /// let msg = DiagnosticMessage::from_args(format_args!("Cmd {:02}", 1));
    /// assert_eq!(msg.as_str(), "Cmd 01");
    /// ```
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        let mut msg = Self::EMPTY;
        let _ = fmt::Write::write_fmt(&mut msg, args);
        msg
    }

    /// Text of the record
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Check whether the record holds no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Write for DiagnosticMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let msg = DiagnosticMessage::from_args(format_args!("Cmd {:02}, Set Gpio: {:02} ", 11, 5));
        assert_eq!(msg.as_str(), "Cmd 11, Set Gpio: 05 ");
    }

    #[test]
    fn test_truncates_long_text() {
        let long = "0123456789".repeat(10);
        let msg = DiagnosticMessage::from_args(format_args!("{}", long));
        assert_eq!(msg.as_str().len(), MESSAGE_SIZE);
        assert_eq!(msg.as_str(), &long[..MESSAGE_SIZE]);
    }

    #[test]
    fn test_empty() {
        assert!(DiagnosticMessage::EMPTY.is_empty());
        assert!(!DiagnosticMessage::from_args(format_args!("x")).is_empty());
    }
}
