//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{parse_headers, BatchConfig};
use crate::error::Result;
use crate::pipeline::{BatchReport, Pipeline};
use crate::planner::EXTENSIONS;
use crate::types::SourceDescriptor;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command.
    ///
    /// Batch runs return `Ok` even when individual entries fail.
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                source,
                output,
                name,
                lang,
                headers,
            } => self.generate(source, output, name, lang, headers).await,
            Commands::Batch { config, output } => self.batch(config, output).await,
            Commands::Languages => {
                self.languages();
                Ok(())
            }
        }
    }

    async fn generate(
        &self,
        source: &str,
        output: &Path,
        name: &str,
        lang: &str,
        headers: &str,
    ) -> Result<()> {
        // Reject malformed headers before touching the network
        let headers = parse_headers(headers)?;

        let descriptor = SourceDescriptor::new(name, source)
            .with_lang(lang)
            .with_headers(headers);

        let result = Pipeline::new(output)?.run(&descriptor).await?;

        println!(
            "Types generated successfully: {}",
            result.output_path.display()
        );
        Ok(())
    }

    async fn batch(&self, config_path: &Path, output: &Path) -> Result<()> {
        let config = BatchConfig::from_file(config_path)?;
        info!(
            "Loaded {} sources from {}",
            config.len(),
            config_path.display()
        );

        let report = Pipeline::new(output)?.run_batch(&config).await;
        Self::print_report(&report);
        Ok(())
    }

    fn print_report(report: &BatchReport) {
        for outcome in &report.outcomes {
            match (&outcome.output_path, &outcome.error_message) {
                (Some(path), _) if outcome.success => {
                    println!("Types for {} generated: {}", outcome.name, path.display());
                }
                (_, message) => {
                    eprintln!(
                        "Error processing {}: {}",
                        outcome.name,
                        message.as_deref().unwrap_or("unknown error")
                    );
                }
            }
        }
        println!("{}", report.summary());
    }

    fn languages(&self) {
        for (lang, ext) in EXTENSIONS {
            println!("{lang:<12} .{ext}");
        }
    }
}
