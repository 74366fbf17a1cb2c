use serde::{Deserialize, Serialize};

/// Body of the `/height` endpoint. `None` until the archive has indexed anything.
#[derive(Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct ArchiveHeight {
    pub height: Option<u64>,
}
