/// Thin wrapper around the system clipboard.
///
/// Copy failures are surfaced to the caller, which logs them and leaves the
/// displayed state untouched; the user only notices that the "copied"
/// confirmation never appears.
pub struct Clipboard;

impl Clipboard {
    /// Write text to the system clipboard
    pub fn copy(text: &str) -> Result<(), String> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_does_not_panic() {
        // Headless environments have no clipboard; both outcomes are fine,
        // the call just must not panic.
        let _ = Clipboard::copy("test");
    }
}
