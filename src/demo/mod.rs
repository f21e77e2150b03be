//! Demo driver: runs the sample queries over fixed datasets and prints
//! the results.
//!
//! The output is grouped in three sections:
//! - `simple` - one operator per query (filter, select, order, group, join,
//!   aggregate, first, distinct, set operations)
//! - `complex` - group-then-project, nested predicates, joins over courses
//! - `live` - indexed projection, zip, join vs. group join, ordering

pub mod datasets;
pub mod sections;

use std::io::{self, Write};

use clap::ValueEnum;
use thiserror::Error;

use crate::QueryError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Which demo section(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Section {
    #[default]
    All,
    Simple,
    Complex,
    Live,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::All => "all",
            Section::Simple => "simple",
            Section::Complex => "complex",
            Section::Live => "live",
        }
    }
}

/// Run `section` and write its text to `out`.
pub fn run<W: Write>(section: Section, out: &mut W) -> Result<(), DemoError> {
    tracing::debug!(section = section.name(), "running demo section");
    match section {
        Section::All => {
            sections::simple(out)?;
            writeln!(out)?;
            sections::complex(out)?;
            writeln!(out)?;
            sections::live(out)?;
        }
        Section::Simple => sections::simple(out)?,
        Section::Complex => sections::complex(out)?,
        Section::Live => sections::live(out)?,
    }
    Ok(())
}

/// Run `section` and return the printed text.
pub fn run_to_string(section: Section) -> Result<String, DemoError> {
    let mut buf = Vec::new();
    run(section, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
