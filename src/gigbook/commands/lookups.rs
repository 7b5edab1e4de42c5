use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FeeRange;
use crate::source::DataSource;

pub fn categories<D: DataSource>(source: &D) -> Result<CmdResult> {
    let catalog = source.fetch()?;
    Ok(CmdResult::default().with_categories(catalog.categories))
}

pub fn locations<D: DataSource>(source: &D) -> Result<CmdResult> {
    let catalog = source.fetch()?;
    Ok(CmdResult::default().with_locations(catalog.locations))
}

/// Fee bands in display order. Static, so no fetch is involved.
pub fn fee_ranges() -> Vec<&'static str> {
    FeeRange::labels()
}
