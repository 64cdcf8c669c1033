//! Document model: the IR rendering rules build, and the printer that lays it out

mod document;
mod printer;

pub use document::{
    Document, empty, group, hard_line, indent, join, sequence, space, text, token,
};
pub use printer::{PrintError, PrintResult, Printer, PrinterOptions};
