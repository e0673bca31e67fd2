use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::commands::load_extractor;
use gentables::util::read_text_input;

pub fn run(args: CheckArgs) -> Result<()> {
    let extractor = load_extractor(args.config.as_deref())?;
    let text = read_text_input(&args.input)?;
    let tables = extractor.extract(&text);

    info!(
        input = %args.input.display(),
        tables = tables.len(),
        "checking table shapes"
    );

    let mut malformed = 0usize;
    for (index, table) in tables.iter().enumerate() {
        match table.check_shape(index) {
            Ok(()) => info!(
                table = index,
                columns = table.column_count(),
                rows = table.rows.len(),
                "table shape ok"
            ),
            Err(err) => {
                malformed += 1;
                warn!(
                    table = err.table_index,
                    row = err.row_index,
                    expected = err.expected,
                    found = err.found,
                    "table shape mismatch"
                );
            }
        }
    }

    if malformed > 0 {
        bail!("{malformed} of {} tables are malformed", tables.len());
    }

    Ok(())
}
