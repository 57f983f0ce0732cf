//! Sector aggregation: grouping, totals, and weighted metrics.

mod sector;

pub use sector::{
    aggregate_by_sector, aggregate_with_descriptor, sector_label, MemberTile, SectorGroup,
    OTHER_SECTOR,
};
