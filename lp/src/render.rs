//! Incremental plan rendering
//!
//! Chunks print as they arrive. The first line of the plan (its title)
//! renders bold, even when the line is split across chunks.

use std::io::{self, Write};

use colored::Colorize;

/// Writes streamed chunks, emphasizing the first line
pub struct StreamPrinter<W: Write> {
    out: W,
    first_line_done: bool,
    wrote_any: bool,
}

impl<W: Write> StreamPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            first_line_done: false,
            wrote_any: false,
        }
    }

    /// Write one decoded chunk and flush so output appears immediately
    pub fn write_chunk(&mut self, chunk: &str) -> io::Result<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.wrote_any = true;

        if self.first_line_done {
            write!(self.out, "{}", chunk)?;
        } else {
            match chunk.find('\n') {
                Some(pos) => {
                    let (head, rest) = chunk.split_at(pos);
                    write!(self.out, "{}", head.bold())?;
                    write!(self.out, "{}", rest)?;
                    self.first_line_done = true;
                }
                None => {
                    write!(self.out, "{}", chunk.bold())?;
                }
            }
        }
        self.out.flush()
    }

    /// End the stream with a trailing newline if anything was printed
    pub fn finish(&mut self) -> io::Result<()> {
        if self.wrote_any {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(chunks: &[&str]) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        let mut printer = StreamPrinter::new(&mut buf);
        for chunk in chunks {
            printer.write_chunk(chunk).unwrap();
        }
        printer.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_chunks_concatenate_in_order() {
        assert_eq!(printed(&["Lesson ", "Plan body"]), "Lesson Plan body\n");
    }

    #[test]
    fn test_title_split_across_chunks_stays_one_line() {
        assert_eq!(
            printed(&["Water ", "Cycle\nObjectives follow"]),
            "Water Cycle\nObjectives follow\n"
        );
    }

    #[test]
    fn test_empty_stream_prints_nothing() {
        assert_eq!(printed(&[]), "");
        assert_eq!(printed(&[""]), "");
    }
}
