//! The embedded dataset.

use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::model::MasterData;

/// The dataset shipped with the crate.
pub const MASTER_JSON: &str = include_str!("../data/master.json");

static EMBEDDED: OnceCell<MasterData> = OnceCell::new();

impl MasterData {
    /// The embedded dataset, parsed on first use.
    pub fn embedded() -> Result<&'static MasterData> {
        EMBEDDED.get_or_try_init(|| {
            log::debug!("parsing embedded dataset ({} bytes)", MASTER_JSON.len());
            MasterData::from_json_str(MASTER_JSON)
        })
    }

    /// Parses a dataset in the embedded layout.
    pub fn from_json_str(json: &str) -> Result<MasterData> {
        Ok(serde_json::from_str(json)?)
    }
}
