//! Sort command implementation
//!
//! Pipeline: resolve options (config file, then flags), validate, read
//! entries, filter, sort, reverse, print.

use anyhow::Context;
use clap::{ArgAction, Args, ValueEnum};
use natsort_core::{
    check_intervals, check_values, natsort, par_natsort, CaseMode, FilterSpec, KeyOptions, NumberFormat,
    NumberType, NumberTypeSpec,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::commands::list::list_locales;
use crate::config::{CliConfig, FilterConfig, SortingConfig};
use crate::error::{CliError, CliResult};
use crate::input::EntrySource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for sorting entries
#[derive(Debug, Args, Default)]
pub struct SortArgs {
    /// Entries to sort; read from --input files or stdin when omitted
    #[arg(value_name = "ENTRIES")]
    pub entries: Vec<String>,

    /// Interpret entries as file paths
    #[arg(short, long)]
    pub paths: bool,

    /// Return the entries in reversed order
    #[arg(short, long)]
    pub reverse: bool,

    /// Parse numbers using the locale's separators
    #[arg(short, long)]
    pub locale: bool,

    /// Locale to use instead of the environment's (implies --locale)
    #[arg(long, value_name = "NAME")]
    pub locale_name: Option<String>,

    /// Keep only entries with a number in [LOW, HIGH] (repeatable)
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["LOW", "HIGH"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub filter: Vec<f64>,

    /// Drop entries with a number in [LOW, HIGH] (repeatable)
    #[arg(
        short = 'F',
        long,
        num_args = 2,
        value_names = ["LOW", "HIGH"],
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub reverse_filter: Vec<f64>,

    /// Drop entries containing exactly this number (repeatable)
    #[arg(short, long, value_name = "VALUE", allow_negative_numbers = true)]
    pub exclude: Vec<f64>,

    /// Kind of number to search for: int, float, real, digit, version
    /// (or i, f, r, d)
    #[arg(short = 't', long, value_name = "TYPE")]
    pub number_type: Option<NumberTypeSpec>,

    /// Treat a leading +/- as the sign of a number
    #[arg(short, long = "sign")]
    pub signed: bool,

    /// Do not fold exponents into float numbers
    #[arg(long)]
    pub noexp: bool,

    /// Compare text case-insensitively
    #[arg(short = 'c', long, conflicts_with = "lowercase_first")]
    pub ignore_case: bool,

    /// Sort lowercase letters before uppercase
    #[arg(long)]
    pub lowercase_first: bool,

    /// Sort numbers after text at the same position
    #[arg(long)]
    pub numbers_last: bool,

    /// Read entries from files, one per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Print the built-in locales and exit
    #[arg(long)]
    pub list_locales: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One entry per line
    Text,
    /// JSON array of entries with their input positions
    Json,
}

/// An input entry with its original position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Position in the input
    pub index: usize,
    /// Entry text
    pub text: String,
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl SortArgs {
    /// Execute the sort command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        if self.list_locales {
            let mut stdout = io::stdout().lock();
            return list_locales(&mut stdout);
        }

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        self.configure_threads(config.performance.worker_threads);

        let options = self.key_options(&config.sorting)?;
        let filter = self.filter_spec(&config.filter, NumberFormat::from(&options))?;
        let reverse = self.reverse || config.sorting.reverse;

        let entries = EntrySource::select(self.entries.clone(), self.input.clone()).read()?;
        log::info!("Read {} entries", entries.len());

        let sorted = sort_entries(
            entries,
            &options,
            &filter,
            reverse,
            config.performance.parallel_threshold,
        );
        log::info!("Writing {} entries", sorted.len());

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(CliError::ConfigError)?,
        };
        self.write_output(&sorted, format, config.output.pretty_json)
    }

    /// Build key options from the config file and flags
    pub fn key_options(&self, sorting: &SortingConfig) -> CliResult<KeyOptions> {
        let spec = match self.number_type {
            Some(spec) => spec,
            None => sorting
                .number_type
                .parse::<NumberTypeSpec>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        };

        let case = if self.ignore_case {
            CaseMode::IgnoreCase
        } else if self.lowercase_first {
            CaseMode::LowercaseFirst
        } else {
            parse_case(&sorting.case)?
        };

        let locale_name = self
            .locale_name
            .clone()
            .or_else(|| sorting.locale_name.clone());
        let locale_aware = self.locale || sorting.locale || locale_name.is_some();

        let mut builder = KeyOptions::builder()
            .signed(self.signed || sorting.signed)
            .number_type_spec(spec)
            .locale_aware(locale_aware)
            .as_path(self.paths || sorting.paths)
            .case(case)
            .numbers_first(sorting.numbers_first && !self.numbers_last);

        if spec.number_type == NumberType::Float {
            builder = builder.exponent(sorting.exponent && !self.noexp);
        }
        if let Some(name) = locale_name {
            builder = builder.locale_name(name);
        }

        let options = builder.build()?;
        log::debug!("Key options: {:?}", options);
        Ok(options)
    }

    /// Validate intervals and exclude values and build the filter
    ///
    /// Flags replace the config file's list for the same stage.
    pub fn filter_spec(
        &self,
        filter: &FilterConfig,
        format: NumberFormat,
    ) -> CliResult<FilterSpec> {
        let keep_pairs = pairs_or(&self.filter, &filter.keep);
        let exclude_pairs = pairs_or(&self.reverse_filter, &filter.exclude);
        let exclude_values = if self.exclude.is_empty() {
            filter.exclude_values.as_slice()
        } else {
            self.exclude.as_slice()
        };

        let keep = check_intervals(&keep_pairs).map_err(|source| CliError::InvalidFilter {
            flag: "--filter",
            source,
        })?;
        let exclude = check_intervals(&exclude_pairs).map_err(|source| CliError::InvalidFilter {
            flag: "--reverse-filter",
            source,
        })?;
        let values = check_values(exclude_values).map_err(|source| CliError::InvalidFilter {
            flag: "--exclude",
            source,
        })?;

        Ok(FilterSpec::new(keep, exclude, values, format))
    }

    fn write_output(
        &self,
        entries: &[Entry],
        format: OutputFormat,
        pretty: bool,
    ) -> CliResult<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        };

        for entry in entries {
            formatter.format_entry(&entry.text, entry.index)?;
        }
        formatter.finish()
    }

    fn configure_threads(&self, configured: usize) {
        let threads = self.threads.unwrap_or(configured);
        if threads == 0 {
            log::debug!("Using {} threads", num_cpus::get());
            return;
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            Ok(()) => log::debug!("Using {threads} threads"),
            Err(e) => log::warn!("Could not configure thread pool: {e}"),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when run more than once in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Filter, sort and optionally reverse the entries
pub fn sort_entries(
    entries: Vec<String>,
    options: &KeyOptions,
    filter: &FilterSpec,
    reverse: bool,
    parallel_threshold: usize,
) -> Vec<Entry> {
    let mut kept: Vec<Entry> = entries
        .into_iter()
        .enumerate()
        .filter(|(_, text)| filter.keep(text))
        .map(|(index, text)| Entry { index, text })
        .collect();

    if kept.len() >= parallel_threshold {
        par_natsort(&mut kept, options);
    } else {
        natsort(&mut kept, options);
    }

    if reverse {
        kept.reverse();
    }
    kept
}

fn pairs_or(flat: &[f64], fallback: &[(f64, f64)]) -> Vec<(f64, f64)> {
    if flat.is_empty() {
        fallback.to_vec()
    } else {
        flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect()
    }
}

fn parse_case(name: &str) -> CliResult<CaseMode> {
    match name.to_ascii_lowercase().as_str() {
        "sensitive" => Ok(CaseMode::Sensitive),
        "ignore" | "ignore-case" => Ok(CaseMode::IgnoreCase),
        "lowercase-first" => Ok(CaseMode::LowercaseFirst),
        other => Err(CliError::ConfigError(format!("unknown case policy: {other}")).into()),
    }
}
