//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::BooliClient;
use crate::error::Result;
use crate::pagination::{Completion, RecordStream};
use crate::types::Query;
use futures::StreamExt;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing records to `out`
    pub async fn run<W: Write>(&self, client: &BooliClient, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Sold {
                filters,
                min_sold_date,
                max_sold_date,
            } => {
                let mut query = filters.to_query();
                if let Some(date) = min_sold_date {
                    query = query.min_sold_date(*date);
                }
                if let Some(date) = max_sold_date {
                    query = query.max_sold_date(*date);
                }
                self.print(client.sold(&query), out).await
            }
            Commands::Listings { filters } => {
                self.print(client.listings(&filters.to_query()), out).await
            }
            Commands::Areas { q } => {
                let query = match q {
                    Some(q) => Query::new().q(q),
                    None => Query::new(),
                };
                self.print(client.areas(&query), out).await
            }
        }
    }

    /// Drain a stream to the output
    async fn print<T, W>(&self, mut stream: RecordStream<T>, out: &mut W) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        let mut written = 0usize;
        while let Some(record) = stream.next().await {
            if self.cli.max_records.is_some_and(|max| written >= max) {
                stream.cancel();
                break;
            }
            self.write_record(&record, out)?;
            written += 1;
        }
        out.flush()?;

        match stream.finish().await {
            Completion::Failed { error, pages, .. } => {
                warn!("Stream ended after {pages} pages: {error}");
                Err(error)
            }
            completion => {
                info!(
                    "Wrote {written} records from {} pages",
                    completion.pages()
                );
                Ok(())
            }
        }
    }

    fn write_record<T, W>(&self, record: &T, out: &mut W) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        match self.cli.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, record).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
            OutputFormat::Pretty => writeln!(out, "{record}")?,
        }
        Ok(())
    }
}
