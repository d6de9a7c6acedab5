use serde::{Deserialize, Serialize};

/// One app entry from the embedded `APPS` array.
///
/// Records carry no identity beyond their position in the list: reordering
/// changes display priority on the page and must survive a round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    pub icon: String,
    pub locker_id: String,
    pub platforms: Vec<String>,
    pub trending: bool,
    pub featured: bool,
}

impl Default for AppRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: String::new(),
            locker_id: String::new(),
            platforms: Vec::new(),
            trending: false,
            featured: false,
        }
    }
}
