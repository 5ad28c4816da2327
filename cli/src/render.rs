//! Elapsed time display
//!
//! A terminal gets one line rewritten in place with `\r`; anything else (a
//! pipe, a file) gets one line per update.

use std::io::{self, LineWriter, Write};
use std::time::Duration;

use stopwatch_core::Renderer;

/// Format as `H:MM'SS"mmm`. Hours are not padded, milliseconds are truncated.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!(
        "{}:{:02}'{:02}\"{:03}",
        total / 3600,
        total / 60 % 60,
        total % 60,
        elapsed.subsec_millis()
    )
}

/// Renderer for the stdout of this process, picked by whether it is a tty.
pub fn stdout_renderer() -> Box<dyn Renderer> {
    if atty::is(atty::Stream::Stdout) {
        tracing::debug!("stdout is a terminal, rewriting in place");
        Box::new(TerminalRenderer::new(io::stdout()))
    } else {
        Box::new(LineRenderer::new(io::stdout()))
    }
}

/// Rewrites a single line, flushing after every update
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn update(&mut self, elapsed: Duration) -> io::Result<()> {
        write!(self.out, "{}\r", format_elapsed(elapsed))?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Appends one line per update, line buffered
#[derive(Debug)]
pub struct LineRenderer<W: Write> {
    out: LineWriter<W>,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: LineWriter::new(out),
        }
    }

    pub fn get_ref(&self) -> &W {
        self.out.get_ref()
    }
}

impl<W: Write> Renderer for LineRenderer<W> {
    fn update(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "{}", format_elapsed(elapsed))
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00'00\"000");
    }

    #[test]
    fn test_format_components() {
        assert_eq!(
            format_elapsed(Duration::from_millis(3_723_456)),
            "1:02'03\"456"
        );
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "0:00'59\"999");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "0:01'00\"000");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "0:59'59\"000");
    }

    #[test]
    fn test_format_hours_unpadded() {
        assert_eq!(format_elapsed(Duration::from_secs(25 * 3600)), "25:00'00\"000");
        assert_eq!(format_elapsed(Duration::from_secs(100 * 3600 + 61)), "100:01'01\"000");
    }

    #[test]
    fn test_format_truncates_millis() {
        assert_eq!(
            format_elapsed(Duration::new(1, 999_999_999)),
            "0:00'01\"999"
        );
    }

    #[test]
    fn test_terminal_rewrites_line() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.init().unwrap();
        renderer.update(Duration::from_millis(100)).unwrap();
        renderer.update(Duration::from_millis(200)).unwrap();
        renderer.finish().unwrap();

        let output = String::from_utf8(renderer.get_ref().clone()).unwrap();
        assert_eq!(output, "0:00'00\"100\r0:00'00\"200\r\n");
    }

    #[test]
    fn test_lines_appended() {
        let mut renderer = LineRenderer::new(Vec::new());
        renderer.init().unwrap();
        renderer.update(Duration::from_millis(200)).unwrap();
        renderer.update(Duration::from_millis(400)).unwrap();
        renderer.finish().unwrap();

        let output = String::from_utf8(renderer.get_ref().clone()).unwrap();
        assert_eq!(output, "0:00'00\"200\n0:00'00\"400\n\n");
    }

    #[test]
    fn test_line_renderer_flushes_each_line() {
        let mut renderer = LineRenderer::new(Vec::new());
        renderer.update(Duration::from_secs(1)).unwrap();
        assert_eq!(renderer.get_ref().as_slice(), b"0:00'01\"000\n");
    }
}
