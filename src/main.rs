
use minicalc::calculate;

use std::io::{self, BufRead, Write};

/// Reads one expression from stdin and prints the result of
/// evaluating it. The trailing newline is whitespace as far as the
/// tokenizer is concerned, so no trimming is needed.
fn main() -> io::Result<()> {
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{}", calculate(&line))?;
  Ok(())
}
