//! Console and file I/O as plain function calls.
//!
//! These are the only functions in the crate with side effects. Each one is
//! a thin wrapper over `std::io`/`std::fs` and reports failure through
//! `std::io::Result`.

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::text::{show_nested, show_opt, Show};
use crate::types::Sequence;

/// Run `write` against a locked stdout and flush before returning.
fn with_stdout(write: impl FnOnce(&mut io::StdoutLock<'_>) -> io::Result<()>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write(&mut handle)?;
    handle.flush()
}

pub fn put_str(s: &str) -> io::Result<()> {
    with_stdout(|out| put_str_to(out, s))
}

pub fn put_str_ln(s: &str) -> io::Result<()> {
    with_stdout(|out| put_str_ln_to(out, s))
}

pub fn put_str_to<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    out.write_all(s.as_bytes())?;
    log::trace!("wrote {} bytes", s.len());
    Ok(())
}

pub fn put_str_ln_to<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    out.write_all(s.as_bytes())?;
    out.write_all(b"\n")?;
    log::trace!("wrote {} bytes and a newline", s.len());
    Ok(())
}

pub fn put_char(c: char) -> io::Result<()> {
    with_stdout(|out| put_char_to(out, c))
}

pub fn put_char_to<W: Write>(out: &mut W, c: char) -> io::Result<()> {
    let mut buf = [0u8; 4];
    out.write_all(c.encode_utf8(&mut buf).as_bytes())
}

/// Write `value` followed by `end`.
pub fn print<T: Display>(value: &T, end: char) -> io::Result<()> {
    with_stdout(|out| print_to(out, value, end))
}

pub fn print_to<W: Write, T: Display>(out: &mut W, value: &T, end: char) -> io::Result<()> {
    write!(out, "{value}{end}")
}

/// Write `xs` as `[a,b,c]` followed by `end`.
pub fn print_seq<S>(xs: &S, end: char) -> io::Result<()>
where
    S: Sequence,
    S::Item: Display,
{
    with_stdout(|out| print_seq_to(out, xs, end))
}

pub fn print_seq_to<W, S>(out: &mut W, xs: &S, end: char) -> io::Result<()>
where
    W: Write,
    S: Sequence,
    S::Item: Display,
{
    print_to(out, &Show(xs), end)
}

/// Write `xxs` as `[[a,b],[c]]` followed by `end`.
pub fn print_nested<O>(xxs: &O, end: char) -> io::Result<()>
where
    O: Sequence,
    O::Item: Sequence,
    <O::Item as Sequence>::Item: Display,
{
    with_stdout(|out| print_nested_to(out, xxs, end))
}

pub fn print_nested_to<W, O>(out: &mut W, xxs: &O, end: char) -> io::Result<()>
where
    W: Write,
    O: Sequence,
    O::Item: Sequence,
    <O::Item as Sequence>::Item: Display,
{
    print_to(out, &show_nested(xxs), end)
}

/// Write the value, or `Nothing` when absent, followed by `end`.
pub fn print_opt<T: Display>(x: &Option<T>, end: char) -> io::Result<()> {
    with_stdout(|out| print_opt_to(out, x, end))
}

pub fn print_opt_to<W: Write, T: Display>(out: &mut W, x: &Option<T>, end: char) -> io::Result<()> {
    print_to(out, &show_opt(x), end)
}

/// Next non-whitespace character from standard input. `None` at end of input.
pub fn get_char() -> io::Result<Option<char>> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    get_char_from(&mut handle)
}

/// Leading whitespace, newlines included, is skipped. Invalid UTF-8 is an
/// `InvalidData` error.
pub fn get_char_from<R: Read>(input: &mut R) -> io::Result<Option<char>> {
    loop {
        let mut buf = [0u8; 4];
        if input.read(&mut buf[..1])? == 0 {
            return Ok(None);
        }
        let width = utf8_width(buf[0]).ok_or_else(invalid_utf8)?;
        input.read_exact(&mut buf[1..width])?;
        let c = std::str::from_utf8(&buf[..width])
            .map_err(|_| invalid_utf8())?
            .chars()
            .next()
            .ok_or_else(invalid_utf8)?;
        if !c.is_whitespace() {
            log::trace!("read character {c:?}");
            return Ok(Some(c));
        }
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}

/// One line from standard input, without its terminator. Empty at end of input.
pub fn get_line() -> io::Result<String> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    get_line_from(&mut handle)
}

pub fn get_line_from<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    log::trace!("read {read} bytes from line input");
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

pub fn read_file(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// First line of the file at `path`.
pub fn read_ln(path: impl AsRef<Path>) -> io::Result<String> {
    let path = path.as_ref();
    let mut reader = BufReader::new(fs::File::open(path)?);
    log::debug!("reading first line of {}", path.display());
    get_line_from(&mut reader)
}

/// Create or truncate `path` and write `content` to it.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Append `content` to `path`, creating it if needed.
pub fn append_file(path: impl AsRef<Path>, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    log::debug!("appended {} bytes to {}", content.len(), path.display());
    Ok(())
}
