//! Printing of comparison results as a table.

use crate::{
    comparison::ComparisonResult,
    error::{Error, Result},
    num::Scientific,
};
use std::io::{self, Write};

const VALUE_WIDTH: usize = 13;
const COLUMN_NAMES: [&str; 4] = ["MSE_RHO", "MSE_U", "MAE_RHO", "MAE_U"];

/// Writes the table header, with the index column of the given width.
pub fn write_header<W: Write>(writer: &mut W, index_width: usize) -> io::Result<()> {
    write!(writer, "{:^width$}", "#it", width = index_width)?;
    for name in COLUMN_NAMES {
        write!(writer, "  {:^width$}", name, width = VALUE_WIDTH)?;
    }
    writeln!(writer)
}

/// Writes the table row for a single iteration.
pub fn write_row<W: Write>(
    writer: &mut W,
    result: &ComparisonResult,
    index_width: usize,
) -> io::Result<()> {
    writeln!(
        writer,
        "{:>width$}:  {}   {}   {}   {}",
        result.index,
        Scientific(result.mse_scalar()),
        Scientific(result.mse_vector()),
        Scientific(result.max_abs_err_scalar()),
        Scientific(result.max_abs_err_vector()),
        width = index_width
    )
}

/// Writes the header and one row per result, stopping at the first failed
/// iteration so that no rows follow it. The error of that iteration is returned.
pub fn write_table<W, I>(writer: &mut W, index_width: usize, results: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = Result<ComparisonResult>>,
{
    write_header(writer, index_width).map_err(Error::Output)?;
    for result in results {
        write_row(writer, &result?, index_width).map_err(Error::Output)?;
    }
    writer.flush().map_err(Error::Output)
}
