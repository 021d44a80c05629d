//! Line-oriented command shell
//!
//! Reads one command per line, dispatches it, and writes the reply.
//! A failing command never stops the loop; end of input or QUIT does.

use crate::config::ShellConfig;
use crate::dispatch::Dispatcher;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::info;

/// Interactive shell around one dispatcher (and so one engine)
pub struct Shell {
    dispatcher: Dispatcher,
    config: ShellConfig,
}

impl Shell {
    /// Create a shell from its configuration
    pub fn new(config: ShellConfig) -> Self {
        Shell {
            dispatcher: Dispatcher::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Run until end of input or QUIT/EXIT
    ///
    /// The prompt is only written when `interactive` is set.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        interactive: bool,
    ) -> anyhow::Result<()> {
        info!("nestkv shell started");

        // Lines are raw bytes: keys and values need not be UTF-8
        let mut buf = Vec::new();
        loop {
            if interactive {
                write!(output, "{}", self.config.prompt)?;
                output.flush().context("failed to flush output")?;
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read input")?;
            if read == 0 {
                break;
            }

            let line = trim_ascii(&buf);
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case(b"quit") || line.eq_ignore_ascii_case(b"exit") {
                break;
            }

            if self.config.echo {
                output.write_all(line)?;
                writeln!(output)?;
            }
            let reply = self.dispatcher.dispatch_line(line);
            writeln!(output, "{}", reply)?;
        }

        output.flush().context("failed to flush output")?;
        info!("nestkv shell stopped");
        Ok(())
    }

    /// Get reference to the dispatcher (for testing/inspection)
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

fn trim_ascii(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    fn run_script(config: ShellConfig, script: &[u8]) -> (Shell, String) {
        let mut shell = Shell::new(config);
        let mut out = Vec::new();
        shell.run(script, &mut out, false).unwrap();
        (shell, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_script_output() {
        let script = b"SET a 10\nBEGIN\nSET a 20\nGET a\n\nROLLBACK\nGET a\nCOMMIT\n";
        let (_, out) = run_script(ShellConfig::default(), script);

        assert_eq!(out, "OK\nOK\nOK\n20\nOK\n10\nERR no active transaction\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (shell, out) = run_script(ShellConfig::default(), b"BEGIN\nquit\nCOMMIT\n");

        assert_eq!(out, "OK\n");
        assert_eq!(shell.dispatcher().context().engine.depth(), 1);
    }

    #[test]
    fn test_echo_and_prompt() {
        let config = ShellConfig {
            echo: true,
            prompt: "kv> ".to_string(),
            ..ShellConfig::default()
        };
        let mut shell = Shell::new(config);
        let mut out = Vec::new();
        shell.run("GET a\n".as_bytes(), &mut out, true).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "kv> GET a\n(nil)\nkv> ");
    }

    #[test]
    fn test_non_utf8_line_does_not_stop_shell() {
        let script = b"SET a \xff\nSET b 1\n\xfe\nGET b\nGET a\n";
        let (shell, out) = run_script(ShellConfig::default(), script);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[..3], ["OK", "OK", "ERR invalid command name encoding"]);
        assert_eq!(lines[3], "1");
        assert_eq!(lines.len(), 5);

        let engine = &shell.dispatcher().context().engine;
        assert_eq!(engine.get(b"a"), Some(&Value::string(&b"\xff"[..])));
    }

    #[test]
    fn test_crlf_and_padding_are_trimmed() {
        let (_, out) = run_script(ShellConfig::default(), b"  SET a 1 \r\nGET a\r\n");
        assert_eq!(out, "OK\n1\n");
    }
}
