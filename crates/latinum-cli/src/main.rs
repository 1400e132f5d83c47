//! Command-line front end to the Latin square enumerator.
//!
//! # Usage
//!
//! Print the four reduced squares of order 4:
//!
//! ```sh
//! latinum 4 --subset reduced
//! ```
//!
//! Count all squares of order 5:
//!
//! ```sh
//! latinum 5 --count
//! ```
//!
//! Print the canonical hashes of the first ten transposed squares of order 6:
//!
//! ```sh
//! latinum 6 --format hash --conjugate crs --limit 10
//! ```
//!
//! Set `RUST_LOG=debug` to see enumeration statistics.

use std::{
    io::{self, BufWriter, Write as _},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use latinum_core::Square;
use latinum_search::{Generator, SearchError, SymmetryMode};
use latinum_transform::{
    Conjugate, TransformError, conjugate_square, hash_square, to_orthogonal_array,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One row per line, squares separated by blank lines.
    Grid,
    /// One line of `(row, col, symbol)` triples per square.
    Triples,
    /// One canonical hash per line.
    Hash,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Order of the squares to enumerate.
    #[arg(value_name = "ORDER")]
    order: usize,

    /// Which squares to produce for each reduced square found: `reduced`,
    /// `symbol-isotropy-classes` or `all`.
    #[arg(long, value_name = "SUBSET", default_value_t = SymmetryMode::All)]
    subset: SymmetryMode,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "grid")]
    format: Format,

    /// Role conjugate applied to every square before printing: the new
    /// order of row, column and symbol, one of `rcs` (unchanged), `rsc`,
    /// `crs` (transpose), `csr`, `src` or `scr`.
    #[arg(long, value_name = "ROLES", default_value_t = Conjugate::Rcs)]
    conjugate: Conjugate,

    /// Stop after this many squares.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,

    /// Print only the number of squares.
    #[arg(long)]
    count: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Search(SearchError),
    #[display("{_0}")]
    Transform(TransformError),
    #[display("failed to write output: {_0}")]
    Io(io::Error),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mode = args.subset;
    let conjugate = args.conjugate;
    let generator = Generator::new(args.order, mode)?;
    log::info!("enumerating squares of order {} ({mode})", args.order);
    log::debug!("options: {args:?}");

    let mut squares = generator.latin_squares();
    let limit = args.limit.unwrap_or(usize::MAX);
    let mut out = BufWriter::new(io::stdout().lock());

    let mut produced = 0_usize;
    for square in squares.by_ref().take(limit) {
        produced += 1;
        if args.count {
            continue;
        }
        let square = match conjugate {
            Conjugate::Rcs => square,
            _ => conjugate_square(&square, conjugate)?,
        };
        write_square(&mut out, &square, args.format, produced == 1)?;
    }
    if args.count {
        writeln!(out, "{produced}")?;
    }
    out.flush()?;

    let stats = squares.stats();
    log::info!(
        "produced {produced} squares from {} reduced squares ({} nodes expanded, {} dead branches)",
        stats.canonical_squares(),
        stats.nodes_expanded(),
        stats.dead_branches()
    );
    Ok(())
}

fn write_square(
    out: &mut impl io::Write,
    square: &Square,
    format: Format,
    first: bool,
) -> Result<(), CliError> {
    match format {
        Format::Grid => {
            if !first {
                writeln!(out)?;
            }
            writeln!(out, "{square}")?;
        }
        Format::Triples => {
            let triples = to_orthogonal_array(square)
                .into_iter()
                .map(|t| format!("({}, {}, {})", t.row, t.col, t.symbol))
                .collect::<Vec<_>>();
            writeln!(out, "{}", triples.join(" "))?;
        }
        Format::Hash => writeln!(out, "{}", hash_square(square))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["latinum", "4"]).unwrap();
        assert_eq!(args.order, 4);
        assert_eq!(args.subset, SymmetryMode::All);
        assert_eq!(args.format, Format::Grid);
        assert_eq!(args.conjugate, Conjugate::Rcs);
        assert_eq!(args.limit, None);
        assert!(!args.count);
    }

    #[test]
    fn test_library_names_are_accepted() {
        let args = Args::try_parse_from([
            "latinum",
            "5",
            "--subset",
            "symbol-isotropy-classes",
            "--conjugate",
            "CRS",
            "--format",
            "hash",
            "--limit",
            "3",
        ])
        .unwrap();
        assert_eq!(args.subset, SymmetryMode::SymbolIsotropyClasses);
        assert_eq!(args.conjugate, Conjugate::Crs);
        assert_eq!(args.format, Format::Hash);
        assert_eq!(args.limit, Some(3));

        let args = Args::try_parse_from(["latinum", "3", "--subset", "symbol_isotropy_classes"]).unwrap();
        assert_eq!(args.subset, SymmetryMode::SymbolIsotropyClasses);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert!(Args::try_parse_from(["latinum", "4", "--subset", "everything"]).is_err());
        assert!(Args::try_parse_from(["latinum", "4", "--conjugate", "rrs"]).is_err());
    }

    #[test]
    fn test_help_describes_choices() {
        let help = Args::command().render_long_help().to_string();
        for name in ["symbol-isotropy-classes", "crs", "triples"] {
            assert!(help.contains(name), "help does not mention {name}");
        }
    }

    #[test]
    fn test_hash_output_for_large_order() {
        let square = Generator::new(8, SymmetryMode::Reduced)
            .unwrap()
            .latin_squares()
            .next()
            .unwrap();
        let mut out = Vec::new();
        write_square(&mut out, &square, Format::Hash, true).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert_eq!(line.trim_end(), hash_square(&square).to_string());
    }
}
