//! Colored terminal output for deployment operations.

use std::io::Write;

use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Consistent colored output: a glyph in color, then the message.
///
/// Holds no writer state; a buffer is created per message so the manager
/// stays `Clone` and can be shared between the dispatcher and the runner.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Create an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn paint(&self, glyph: &str, color: Color, bold: bool, message: &str) {
        let bufwtr = BufferWriter::stdout(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
        let _ = write!(&mut buffer, "{glyph}");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = bufwtr.print(&buffer);
    }

    /// Print an uncolored line.
    pub fn println(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a progress message.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            self.paint("→", Color::Cyan, false, message);
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.paint("✓", Color::Green, true, message);
        }
    }

    /// Print a warning.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            self.paint("⚠", Color::Yellow, true, message);
        }
    }

    /// Print a message only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            self.paint("·", Color::Blue, false, message);
        }
    }

    /// Print an indented line, used for streamed tool output.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("  {message}");
        }
    }

    /// Print an error to stderr. Never suppressed.
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(&mut buffer, "✗");
        let _ = buffer.reset();
        let _ = writeln!(&mut buffer, " {message}");
        let _ = bufwtr.print(&buffer);
    }
}
