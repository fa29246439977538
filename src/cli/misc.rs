use std::{
    io::{BufRead, Write},
    path::Path,
};

use crossterm::{style::Stylize, tty::IsTty};

use pyre::{context::Context, types::err};

/// Where lines are read from, which determines whether a prompt is written.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Terminal,
}

/// Reads each line of `reader` to `context`, writing reports to standard output and warnings and errors to standard error.
///
/// Errors abandon a line, and reading continues with the next line.
/// This includes lines which are not valid UTF-8.
pub fn read_lines(context: &mut Context, mut reader: impl BufRead, source: Source) {
    let mut buffer = Vec::with_capacity(256);
    let mut line_number = 0;

    loop {
        if source == Source::Terminal {
            print!("> ");
            let _ = std::io::stdout().flush();
        }

        buffer.clear();
        match reader.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                error(e);
                break;
            }
        }

        let line = match std::str::from_utf8(&buffer) {
            Ok(line) => line,
            Err(e) => {
                error(format!("Line {line_number} is not valid UTF-8 ({e}), line skipped"));
                continue;
            }
        };

        match context.read_line(line.trim_end_matches(|c: char| c == '\n' || c == '\r')) {
            Ok(None) => {}

            Ok(Some(report)) => {
                for message in report.warnings() {
                    warning(message);
                }
                println!("{report}");
            }

            Err(e) => error(describe(&e)),
        }
    }

    if source == Source::Terminal {
        println!();
    }
}

/// Reads the file at `path` to `context`.
pub fn read_file(context: &mut Context, path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::open(path)?;
    log::info!("Reading statements from {path:?}");
    read_lines(context, std::io::BufReader::new(file), Source::File);
    Ok(())
}

fn describe(e: &err::ErrorKind) -> String {
    match e {
        err::ErrorKind::Parse(_) => format!("{e}, line skipped"),
        _ => e.to_string(),
    }
}

pub fn warning(message: impl std::fmt::Display) {
    match std::io::stderr().is_tty() {
        true => eprintln!("{} {message}", "Warning:".yellow()),
        false => eprintln!("Warning: {message}"),
    }
}

pub fn error(message: impl std::fmt::Display) {
    match std::io::stderr().is_tty() {
        true => eprintln!("{} {message}", "Error:".red()),
        false => eprintln!("Error: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn invalid_utf8_skips_line() {
        let mut context = Context::default();
        let bytes = b"+nasal => +voice\n\xff\xfe => +x\n+lateral => +sonorant\n".to_vec();

        read_lines(&mut context, Cursor::new(bytes), Source::File);

        assert_eq!(context.implication_db.count(), 2);
        assert_eq!(
            context.implication_db.to_string(),
            "{\n  [+nasal] => [+voice]\n  [+lateral] => [+sonorant]\n}"
        );
    }

    #[test]
    fn errors_skip_line() {
        let mut context = Context::default();
        let bytes = b"nasal : m\r\n`n` => +voice\n`m` => +voice".to_vec();

        read_lines(&mut context, Cursor::new(bytes), Source::File);

        assert_eq!(context.implication_db.count(), 1);
    }
}
