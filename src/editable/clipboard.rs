//! Process-local clipboard.
//!
//! An owned byte sequence, replaced wholesale by each copy or cut. It
//! persists across selection changes and edits until the next copy/cut
//! or process end; there is no system-clipboard integration.

/// Clipboard contents.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    data: Vec<u8>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents wholesale.
    pub fn set(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_wholesale() {
        let mut clip = Clipboard::new();
        assert!(clip.is_empty());

        clip.set(b"first".to_vec());
        assert_eq!(clip.data(), b"first");

        clip.set(b"xy".to_vec());
        assert_eq!(clip.data(), b"xy");
        assert_eq!(clip.len(), 2);
    }
}
