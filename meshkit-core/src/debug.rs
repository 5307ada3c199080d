//! Diagnostic output of describable values
//!
//! [`DebugOutput`] wraps any [`fmt::Write`] sink. Each printed item is
//! separated from the previous one by a space and the line is terminated
//! with `\n` once the output is finished or dropped:
//!
//! ```
//! use meshkit_core::{DebugOutput, Primitive};
//!
//! let mut out = String::new();
//! DebugOutput::new(&mut out).print(Primitive::TriangleFan);
//! assert_eq!(out, "Mesh::Primitive::TriangleFan\n");
//! ```

use crate::descriptor::Describable;
use std::fmt::{self, Write};

/// Best-effort diagnostic writer
///
/// Failures of the underlying sink are logged and otherwise ignored, printing
/// a value never fails the caller.
pub struct DebugOutput<'a, W: Write> {
    sink: &'a mut W,
    has_output: bool,
    finished: bool,
}

impl<'a, W: Write> DebugOutput<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            sink,
            has_output: false,
            finished: false,
        }
    }

    /// Print the debug label of a value
    pub fn print<T: Describable>(&mut self, value: T) -> &mut Self {
        let table = T::table();
        self.write_item(format_args!("{}::{}", table.family(), table.token_for(value)));
        self
    }

    /// Print the debug label of a raw code, `(invalid)` for unknown codes
    pub fn print_raw<T: Describable>(&mut self, raw: u32) -> &mut Self {
        let label = T::table().debug_label_for_raw(raw);
        self.write_item(format_args!("{}", label));
        self
    }

    pub fn print_str(&mut self, text: &str) -> &mut Self {
        self.write_item(format_args!("{}", text));
        self
    }

    /// Terminate the line
    pub fn finish(mut self) {
        self.terminate();
    }

    fn write_item(&mut self, item: fmt::Arguments<'_>) {
        let result = if self.has_output {
            self.sink.write_char(' ').and_then(|_| self.sink.write_fmt(item))
        } else {
            self.sink.write_fmt(item)
        };
        self.has_output = true;

        if let Err(e) = result {
            log::warn!("Debug output failed: {e}");
        }
    }

    fn terminate(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        if self.has_output {
            if let Err(e) = self.sink.write_char('\n') {
                log::warn!("Debug output failed: {e}");
            }
        }
    }
}

impl<W: Write> Drop for DebugOutput<'_, W> {
    fn drop(&mut self) {
        self.terminate();
    }
}
