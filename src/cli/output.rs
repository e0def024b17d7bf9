use crate::cli::args::OutputFormat;
use crate::core::fields::{render_value, Field};
use crate::domain::response::GlobusResponse;
use serde_json::Value;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;

/// How a response is rendered when text output is requested
#[derive(Debug, Clone)]
pub enum TextMode<'a> {
    /// One `Label: value` line per field
    Record(&'a [Field]),
    /// Header plus one row per list element
    Table(&'a [Field]),
    /// A caller formatted message
    Raw(String),
}

/// Output writer trait for different formats
pub trait OutputWriter {
    /// Render an API response in the configured format
    fn display(&mut self, response: &GlobusResponse, mode: TextMode<'_>) -> Result<(), OutputError>;

    /// Print a line regardless of format
    fn write_message(&mut self, message: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid JMESPath expression: {0}")]
    Query(String),
    #[error("{0}")]
    Usage(String),
}

impl From<OutputError> for crate::domain::error::GlobusCliError {
    fn from(err: OutputError) -> Self {
        match err {
            OutputError::Query(_) | OutputError::Usage(_) => Self::Usage(err.to_string()),
            OutputError::IoError(e) => Self::Io(e),
            OutputError::JsonError(_) => Self::Output(err.to_string()),
        }
    }
}

/// Console output writer
pub struct ConsoleWriter<W: Write = io::Stdout> {
    format: OutputFormat,
    jmespath: Option<String>,
    out: W,
}

impl ConsoleWriter<io::Stdout> {
    pub fn stdout(format: OutputFormat, jmespath: Option<String>) -> Self {
        Self::new(format, jmespath, io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(format: OutputFormat, jmespath: Option<String>, out: W) -> Self {
        Self {
            format,
            jmespath,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// A JMESPath query turns text output into JSON
    pub fn effective_format(&self) -> OutputFormat {
        match (self.format, &self.jmespath) {
            (OutputFormat::Text, Some(_)) => OutputFormat::Json,
            (format, _) => format,
        }
    }

    fn apply_query(&self, value: &Value) -> Result<Value, OutputError> {
        let Some(expr) = &self.jmespath else {
            return Ok(value.clone());
        };
        let compiled = jmespath::compile(expr).map_err(|e| OutputError::Query(e.to_string()))?;
        let data = jmespath::Variable::from_json(&value.to_string()).map_err(OutputError::Query)?;
        let result = compiled
            .search(data)
            .map_err(|e| OutputError::Query(e.to_string()))?;
        Ok(serde_json::to_value(&*result)?)
    }

    fn print_json(&mut self, value: &Value) -> Result<(), OutputError> {
        let value = self.apply_query(value)?;
        writeln!(self.out, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    fn print_unix(&mut self, value: &Value) -> Result<(), OutputError> {
        let value = self.apply_query(value)?;
        let mut lines = Vec::new();
        unix_lines(&value, &mut lines);
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn print_record(&mut self, doc: &Value, fields: &[Field]) -> Result<(), OutputError> {
        let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0) + 1;
        for field in fields {
            let label = format!("{}:", field.label);
            writeln!(self.out, "{label:<width$} {}", field.render(doc))?;
        }
        Ok(())
    }

    fn print_table<'v>(
        &mut self,
        rows: impl Iterator<Item = &'v Value>,
        fields: &[Field],
    ) -> Result<(), OutputError> {
        let mut builder = Builder::default();
        builder.push_record(fields.iter().map(|f| f.label.to_string()));
        for row in rows {
            builder.push_record(fields.iter().map(|f| f.render(row)));
        }

        let mut table = builder.build();
        table.with(Style::psql());
        writeln!(self.out, "{table}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn display(&mut self, response: &GlobusResponse, mode: TextMode<'_>) -> Result<(), OutputError> {
        match self.effective_format() {
            OutputFormat::Json => self.print_json(response.data()),
            OutputFormat::Unix => self.print_unix(response.data()),
            OutputFormat::Text => match mode {
                TextMode::Record(fields) if fields.is_empty() => Err(OutputError::Usage(
                    "text output requested, but no record fields were given".to_string(),
                )),
                TextMode::Table(fields) if fields.is_empty() => Err(OutputError::Usage(
                    "text output requested, but no table fields were given".to_string(),
                )),
                TextMode::Record(fields) => self.print_record(response.data(), fields),
                TextMode::Table(fields) => self.print_table(response.items(), fields),
                TextMode::Raw(message) => self.write_message(&message),
            },
        }
    }

    fn write_message(&mut self, message: &str) -> Result<(), OutputError> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }
}

/// Flatten a document into tab separated lines
fn unix_lines(value: &Value, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map {
                match entry {
                    Value::Object(_) => unix_lines(entry, lines),
                    Value::Array(items) if !items.iter().all(is_scalar) => {
                        items.iter().for_each(|item| unix_lines(item, lines))
                    }
                    _ => lines.push(format!("{key}\t{}", unix_scalar_row(entry))),
                }
            }
        }
        Value::Array(items) if items.iter().all(is_scalar) => {
            lines.push(unix_scalar_row(value));
        }
        Value::Array(items) => items.iter().for_each(|item| unix_lines(item, lines)),
        scalar => lines.push(unix_scalar_row(scalar)),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn unix_scalar_row(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(unix_scalar_row)
            .collect::<Vec<_>>()
            .join("\t"),
        other => render_value(other),
    }
}
