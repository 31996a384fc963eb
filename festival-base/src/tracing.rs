// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Tracing setup shared by the festival binaries.
//!
//! `RUST_LOG` sets the verbosity (default `info`), `RUST_LOG_FORMAT` one of `plain`,
//! `json` or `pretty`, and `RUST_LOG_SPAN_EVENTS` a comma-separated list of span
//! events to report. Colours are used only on a terminal and when `NO_COLOR` is unset.
//! If `FESTIVAL_LOG_DIR` is set, logs are also appended to `<log_name>.log` there.

use std::{
    env,
    fs::OpenOptions,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use is_terminal::IsTerminal as _;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::{Layer, SubscriberExt as _},
    registry::Registry,
    util::SubscriberInitExt as _,
    EnvFilter,
};

/// The output format of log lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(other.to_string()),
        }
    }
}

/// Logging settings read from the environment.
#[derive(Clone, Debug)]
pub struct LogSettings {
    pub format: LogFormat,
    pub span_events: FmtSpan,
    pub color: bool,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env(log_name: &str) -> Self {
        let format = env::var("RUST_LOG_FORMAT")
            .ok()
            .map(|value| {
                value.parse().unwrap_or_else(|unknown| {
                    eprintln!("Ignoring unknown RUST_LOG_FORMAT {unknown:?}");
                    LogFormat::Plain
                })
            })
            .unwrap_or_default();
        let span_events = env::var("RUST_LOG_SPAN_EVENTS")
            .map(|value| parse_span_events(&value))
            .unwrap_or(FmtSpan::NONE);
        let color = env::var_os("NO_COLOR").map_or(true, |value| value.is_empty())
            && std::io::stderr().is_terminal();
        let file = env::var_os("FESTIVAL_LOG_DIR")
            .map(|directory| Path::new(&directory).join(log_name).with_extension("log"));
        Self {
            format,
            span_events,
            color,
            file,
        }
    }

    fn layer<W>(&self, writer: W, ansi: bool) -> Box<dyn Layer<Registry> + Send + Sync>
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let layer = fmt::layer()
            .with_span_events(self.span_events.clone())
            .with_writer(writer)
            .with_ansi(ansi);
        match self.format {
            LogFormat::Plain => layer.boxed(),
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.pretty().boxed(),
        }
    }
}

/// Installs the global subscriber for the binary `log_name`.
pub fn init(log_name: &str) {
    let settings = LogSettings::from_env(log_name);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let file_layer = settings.file.as_ref().and_then(|path| {
        match OpenOptions::new().append(true).create(true).open(path) {
            Ok(file) => Some(settings.layer(Arc::new(file), false)),
            Err(error) => {
                eprintln!("Not logging to {}: {error}", path.display());
                None
            }
        }
    });
    let stderr_layer = settings.layer(std::io::stderr, settings.color);

    let layers = file_layer
        .into_iter()
        .chain([stderr_layer])
        .collect::<Vec<_>>();
    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .init();
}

/// Parses a list such as `new,close`. Unknown names are ignored.
pub fn parse_span_events(events: &str) -> FmtSpan {
    events
        .split(',')
        .map(|event| match event.trim() {
            "new" => FmtSpan::NEW,
            "enter" => FmtSpan::ENTER,
            "exit" => FmtSpan::EXIT,
            "close" => FmtSpan::CLOSE,
            "active" => FmtSpan::ACTIVE,
            "full" => FmtSpan::FULL,
            _ => FmtSpan::NONE,
        })
        .fold(FmtSpan::NONE, |events, event| events | event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_events_parsing() {
        assert_eq!(parse_span_events("new, close"), FmtSpan::NEW | FmtSpan::CLOSE);
        assert_eq!(parse_span_events("bogus"), FmtSpan::NONE);
        assert_eq!(parse_span_events("full"), FmtSpan::FULL);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::Plain));
        assert_eq!("yaml".parse::<LogFormat>(), Err("yaml".to_string()));
    }
}
