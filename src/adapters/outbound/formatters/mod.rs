/// Formatters for rendering the report read model
mod text_formatter;

pub use text_formatter::PlainTextFormatter;
