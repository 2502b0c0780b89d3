//! Incremental JSON object scanner.
//!
//! Reply streams interleave small JSON control frames with literal text. A
//! frame is only ever recognized when it is anchored at the start of the
//! decode buffer, and it is only complete when brace depth returns to zero
//! outside a string literal. Tracking string and escape state keeps a `}`
//! inside a delta value from terminating the frame early, which a naive
//! first-`}` match would get wrong.

/// Result of scanning the decode buffer for a leading JSON object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The buffer does not start with `{`; the leading run is literal text
    NotObject,
    /// The buffer starts an object that has not closed yet; wait for more bytes
    Incomplete,
    /// A balanced object occupies the first `len` bytes of the buffer
    Complete {
        /// Byte length of the object, suitable for slicing the buffer
        len: usize,
    },
}

/// Scan for a complete JSON object anchored at the start of `buf`.
pub fn scan_object(buf: &str) -> Scan {
    let mut chars = buf.char_indices();
    match chars.next() {
        Some((_, '{')) => {}
        _ => return Scan::NotObject,
    }

    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in chars {
        if in_string {
            if escaped {
                escaped = false;
            } else {
                match ch {
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Scan::Complete {
                        len: idx + ch.len_utf8(),
                    };
                }
            }
            _ => {}
        }
    }

    Scan::Incomplete
}
