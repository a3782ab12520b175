//! cellref CLI - convert and expand spreadsheet cell references

use anyhow::{Context, Result};
use cellref_core::notation::{self, CellInput, CellRef, Notation};
use cellref_core::{column, CellAddress, RangeSet};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cellref")]
#[command(
    author,
    version,
    about = "Convert and expand spreadsheet cell references"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a column index to letters, or letters to an index
    Column {
        /// Column index (1-18278) or letters (A-ZZZ)
        value: String,
    },

    /// Convert one cell between A1 and (row, column) notation
    Cell {
        /// Cell reference, e.g. C7 or "(7, 3)"
        reference: String,
    },

    /// Expand a range expression into one address per line
    Expand {
        /// Range expression, e.g. "A1:C3,E5"
        range: String,

        /// Print (row, column) pairs instead of A1 text
        #[arg(long)]
        rc: bool,
    },

    /// Normalize a list of references to one notation
    Convert {
        /// References in A1 or "(row, column)" form
        #[arg(required = true)]
        references: Vec<String>,

        /// Target notation
        #[arg(short, long, value_enum, default_value = "a1")]
        to: Target,
    },

    /// Pair the cells of a range with values, in expansion order
    Bind {
        /// Range expression
        range: String,

        /// One value per expanded cell
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    A1,
    Rc,
}

impl From<Target> for Notation {
    fn from(target: Target) -> Self {
        match target {
            Target::A1 => Notation::A1,
            Target::Rc => Notation::Rc,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Column { value } => convert_column(&value),
        Commands::Cell { reference } => convert_cell(&reference),
        Commands::Expand { range, rc } => expand(&range, rc),
        Commands::Convert { references, to } => convert(&references, to.into()),
        Commands::Bind { range, values } => bind(&range, values),
    }
}

fn convert_column(value: &str) -> Result<()> {
    if let Ok(index) = value.parse::<u32>() {
        let letters = column::encode(index)
            .with_context(|| format!("Cannot encode column '{value}'"))?;
        println!("{letters}");
    } else {
        let index = column::decode(value)
            .with_context(|| format!("Cannot decode column '{value}'"))?;
        println!("{index}");
    }
    Ok(())
}

fn convert_cell(reference: &str) -> Result<()> {
    let cell = parse_reference(reference)
        .and_then(|cell| cell.resolve().map(|addr| (cell.notation(), addr)))
        .with_context(|| format!("Invalid cell reference '{reference}'"))?;

    let (source, addr) = cell;
    let target = match source {
        Notation::A1 => Notation::Rc,
        Notation::Rc => Notation::A1,
    };
    println!("{}", CellRef::from_address(addr, target));
    Ok(())
}

fn expand(range: &str, rc: bool) -> Result<()> {
    let set = RangeSet::parse(range).with_context(|| format!("Invalid range '{range}'"))?;

    for addr in &set {
        if rc {
            println!("{}", addr.to_rc_string());
        } else {
            println!("{addr}");
        }
    }
    Ok(())
}

fn convert(references: &[String], target: Notation) -> Result<()> {
    let refs = references
        .iter()
        .enumerate()
        .map(|(i, text)| parse_reference(text).map_err(|e| e.at_index(i)))
        .collect::<cellref_core::Result<Vec<_>>>()
        .context("Failed to read references")?;

    let converted = notation::convert(CellInput::List(refs), target)
        .context("Failed to convert references")?;

    for r in converted.into_vec() {
        println!("{r}");
    }
    Ok(())
}

fn bind(range: &str, values: Vec<String>) -> Result<()> {
    let set = RangeSet::parse(range).with_context(|| format!("Invalid range '{range}'"))?;
    let pairs = set
        .bind(values)
        .with_context(|| format!("Cannot bind values to '{range}'"))?;

    for (addr, value) in pairs {
        println!("{addr}\t{value}");
    }
    Ok(())
}

/// Read a reference as A1 text, or as numeric `(row, column)` text
fn parse_reference(text: &str) -> cellref_core::Result<CellRef> {
    if text.starts_with('(') {
        let (row, column) = CellAddress::parse_rc_text(text)?.to_rc();
        Ok(CellRef::Rc(row, column))
    } else {
        Ok(CellRef::A1(text.to_string()))
    }
}
