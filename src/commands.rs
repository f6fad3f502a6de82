//! Command execution and output formatting.

use crate::config::{DecodeConfig, OutputFormat};
use colored::Colorize;
use ircreply_core::{ParameterList, Record, Registry, ReplyCode, ReplyError, ReplySchema};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// One input line of the `decode` command.
#[derive(Debug, Deserialize)]
pub struct ReplyLine {
    pub code: ReplyCode,
    #[serde(default)]
    pub params: ParameterList,
}

/// Totals from a `decode` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub decoded: usize,
    pub failed: usize,
}

/// A failed input line, in machine-readable form.
#[derive(Debug, Serialize)]
struct Failure<'a> {
    line: usize,
    code: Option<ReplyCode>,
    error: &'a str,
    message: String,
}

/// Decodes JSON lines from `input`, writing one result per line to `output`.
pub fn decode_stream<R, W>(
    registry: &Registry,
    mut input: R,
    mut output: W,
    format: OutputFormat,
    settings: &DecodeConfig,
) -> Result<DecodeSummary, Box<dyn std::error::Error>>
where
    R: BufRead,
    W: Write,
{
    let mut summary = DecodeSummary::default();
    let mut buf = Vec::new();
    let mut lineno = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        // Invalid UTF-8 is reported per line, like bad JSON.
        let parsed = std::str::from_utf8(&buf)
            .map_err(|e| e.to_string())
            .and_then(|line| {
                if line.trim().is_empty() {
                    Ok(None)
                } else {
                    serde_json::from_str::<ReplyLine>(line)
                        .map(Some)
                        .map_err(|e| e.to_string())
                }
            });

        let failure = match parsed {
            Ok(None) => continue,
            Err(message) => Failure {
                line: lineno,
                code: None,
                error: "BAD_INPUT",
                message,
            },
            Ok(Some(reply)) => match decode_one(registry, reply.code, reply.params, settings.verify) {
                Ok(record) => {
                    summary.decoded += 1;
                    writeln!(output, "{}", format_record(&record, format)?)?;
                    continue;
                }
                Err(failure) => Failure {
                    line: lineno,
                    code: Some(reply.code),
                    error: failure.kind,
                    message: failure.message,
                },
            },
        };

        summary.failed += 1;
        tracing::debug!("line {}: {}", lineno, failure.message);
        writeln!(output, "{}", format_failure(&failure, format)?)?;
        if settings.fail_fast {
            break;
        }
    }

    Ok(summary)
}

struct DecodeFailure {
    kind: &'static str,
    message: String,
}

impl From<ReplyError> for DecodeFailure {
    fn from(e: ReplyError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

fn decode_one(
    registry: &Registry,
    code: ReplyCode,
    params: ParameterList,
    verify: bool,
) -> Result<Record, DecodeFailure> {
    let record = registry.decode(code, params.clone())?;
    if verify && record.encode() != (code, params) {
        return Err(DecodeFailure {
            kind: "ROUND_TRIP",
            message: format!("{} did not re-encode to its input", record.symbol()),
        });
    }
    Ok(record)
}

/// Decodes a single reply given on the command line.
pub fn parse(
    registry: &Registry,
    code: ReplyCode,
    params: Vec<String>,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let record = registry.decode(code, params)?;
    format_record(&record, format)
}

/// Lists the registry, or describes the schema named by `reply` (a code or
/// a symbol such as `RPL_NAMREPLY`).
pub fn schema(
    registry: &Registry,
    reply: Option<&str>,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match reply {
        None => format_schema_list(registry, format),
        Some(reply) => {
            let schema = match reply.parse::<ReplyCode>() {
                Ok(code) => registry.lookup(code),
                Err(_) => registry.lookup_symbol(&reply.to_ascii_uppercase()),
            }
            .ok_or_else(|| format!("unknown reply: {}", reply))?;
            format_schema(schema, format)
        }
    }
}

/// Formats a decoded record.
pub fn format_record(
    record: &Record,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            let header = format!("{} ({:03})", record.symbol(), record.code());
            let mut out = if record.is_error() {
                header.as_str().red().bold().to_string()
            } else {
                header.as_str().green().bold().to_string()
            };
            for field in record.fields() {
                let value = match field.value() {
                    Some(v) => v.to_string(),
                    None => "-".dimmed().to_string(),
                };
                out.push_str(&format!("\n  {}: {}", field.name().cyan(), value));
            }
            Ok(out)
        }
    }
}

fn format_failure(
    failure: &Failure<'_>,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(failure)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(failure)?),
        OutputFormat::Text => {
            let code = failure
                .code
                .map(|c| format!(" ({:03})", c))
                .unwrap_or_default();
            Ok(format!(
                "{}{}: {} {}",
                format!("line {}", failure.line).as_str().bold(),
                code,
                failure.error.red(),
                failure.message
            ))
        }
    }
}

#[derive(Serialize)]
struct SchemaSummary {
    code: ReplyCode,
    symbol: &'static str,
    name: &'static str,
}

fn format_schema_list(
    registry: &Registry,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let summaries: Vec<_> = registry
        .schemas()
        .map(|s| SchemaSummary {
            code: s.code(),
            symbol: s.symbol(),
            name: s.name(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&summaries)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|s| format!("{:03}  {:<24} {}", s.code, s.symbol, s.name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn format_schema(
    schema: &ReplySchema,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(schema)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(schema)?),
        OutputFormat::Text => {
            let mut out = format!(
                "{} ({:03}) {}\n  min params: {}",
                schema.symbol().bold(),
                schema.code(),
                schema.name(),
                schema.min_length()
            );
            for field in schema.fields() {
                out.push_str(&format!(
                    "\n  {} {:<16} {}",
                    format!("{:<28}", field.name).as_str().cyan(),
                    field.rule.to_string(),
                    field.ty
                ));
            }
            Ok(out)
        }
    }
}
