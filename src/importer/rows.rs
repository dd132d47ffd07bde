//! Character-level CSV tokenizer.
//!
//! This stage cannot fail: any input splits into zero or more rows of cells.
//! It understands just enough CSV to round-trip what spreadsheet exports
//! produce. Double quotes toggle quoting, `""` inside a quoted region is a
//! literal quote, and separators inside quotes are ordinary text. Structural
//! damage like an unterminated quote never aborts the import; the text read
//! so far stands, and later stages judge each row on its own.

/// Scanner state: either inside a quoted region or not. Quoting changes the
/// meaning of commas, terminators, and the quote character itself.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
  Unquoted,
  Quoted,
}

/// Splits raw CSV text into rows of cells.
///
/// Rows end at `\n`, `\r\n`, or a bare `\r` outside quotes. Rows whose
/// cells are all blank after trimming are dropped, so stray newlines and
/// separator-only lines do not become phantom records.
pub fn scan_rows(text: &str) -> Vec<Vec<String>> {
  let mut rows: Vec<Vec<String>> = Vec::new();
  let mut row: Vec<String> = Vec::new();
  let mut cell = String::new();
  let mut state = ScanState::Unquoted;
  let mut chars = text.chars().peekable();

  while let Some(ch) = chars.next() {
    if state == ScanState::Quoted {
      if ch == '"' {
        if chars.peek() == Some(&'"') {
          chars.next();
          cell.push('"');
        } else {
          state = ScanState::Unquoted;
        }
      } else {
        cell.push(ch);
      }
      continue;
    }

    match ch {
      '"' => state = ScanState::Quoted,
      ',' => row.push(std::mem::take(&mut cell)),
      '\n' | '\r' => {
        if ch == '\r' && chars.peek() == Some(&'\n') {
          chars.next();
        }
        row.push(std::mem::take(&mut cell));
        flush_row(&mut rows, &mut row);
      }
      other => cell.push(other),
    }
  }

  // A final row without a trailing newline still counts.
  if !cell.is_empty() || !row.is_empty() {
    row.push(cell);
    flush_row(&mut rows, &mut row);
  }

  rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
  if row.iter().any(|cell| !cell.trim().is_empty()) {
    rows.push(std::mem::take(row));
  } else {
    row.clear();
  }
}
