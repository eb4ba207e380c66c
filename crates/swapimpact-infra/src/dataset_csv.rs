//! CSV export of the synthetic LCA dataset

use std::path::Path;

use swapimpact_domain::LcaRecord;
use swapimpact_types::Result;

/// Write records as CSV with a header row
pub fn export_dataset(records: &[LcaRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
