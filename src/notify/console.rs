// Console notifier for the one-shot `add` / `get` commands
//
// Success lines go to stdout so they can be piped; everything else goes to
// stderr. Remembers whether an error or warning was raised so the command
// can exit non-zero.

use super::{Notifier, ToastId, ToastKind};
use std::io::Write;

pub struct ConsoleNotifier<O: Write, E: Write> {
    out: O,
    err: E,
    next_id: u64,
    failed: bool,
}

impl ConsoleNotifier<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleNotifier<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            next_id: 0,
            failed: false,
        }
    }

    /// Whether any error or warning was reported
    pub fn failed(&self) -> bool {
        self.failed
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Notifier for ConsoleNotifier<O, E> {
    fn loading(&mut self, message: &str) -> ToastId {
        self.next_id += 1;
        let _ = writeln!(self.err, "{} {}...", ToastKind::Loading.icon(), message);
        ToastId::from_raw(self.next_id)
    }

    fn success(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", ToastKind::Success.icon(), message);
    }

    fn warning(&mut self, message: &str) {
        self.failed = true;
        let _ = writeln!(self.err, "{} {}", ToastKind::Warning.icon(), message);
    }

    fn error(&mut self, message: &str) {
        self.failed = true;
        let _ = writeln!(self.err, "{} {}", ToastKind::Error.icon(), message);
    }

    // Lines already written cannot be taken back
    fn dismiss(&mut self, _id: ToastId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_goes_to_stdout_and_errors_to_stderr() {
        let mut notifier = ConsoleNotifier::new(Vec::new(), Vec::new());

        let id = notifier.loading("Adding text");
        notifier.dismiss(id);
        notifier.success("Text added");
        assert!(!notifier.failed());
        notifier.error("network down");
        assert!(notifier.failed());

        let (out, err) = notifier.into_parts();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(out, "✓ Text added\n");
        assert!(err.contains("Adding text..."));
        assert!(err.contains("✗ network down"));
    }

    #[test]
    fn loading_handles_are_distinct() {
        let mut notifier = ConsoleNotifier::new(Vec::new(), Vec::new());
        assert_ne!(notifier.loading("a"), notifier.loading("b"));
    }
}
