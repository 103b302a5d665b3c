use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Destination for copied text. Copying is fire-and-forget: platform
/// failures are not reported back.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

/// Copies through the terminal using the OSC 52 escape sequence, which most
/// modern terminal emulators (and tmux with `set-clipboard on`) honour.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) {
        let sequence = osc52_sequence(text);
        let _ = self
            .out
            .write_all(sequence.as_bytes())
            .and_then(|_| self.out.flush());
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}
