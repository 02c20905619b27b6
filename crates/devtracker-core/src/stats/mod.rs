//! Today's coding statistics.
//!
//! Read-only display data. There is no real activity measurement behind
//! this -- the dashboard ships a fixed snapshot, matching the original
//! design where stats were a static fixture.

use serde::{Deserialize, Serialize};

/// Per-language share of today's activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    /// 0..=100.
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingStats {
    pub total_minutes: u32,
    pub languages: Vec<LanguageStat>,
}

impl CodingStats {
    /// The fixed snapshot shown on the stats card.
    pub fn today() -> Self {
        Self {
            total_minutes: 120,
            languages: vec![
                LanguageStat {
                    name: "JavaScript".into(),
                    percentage: 80,
                },
                LanguageStat {
                    name: "HTML".into(),
                    percentage: 90,
                },
                LanguageStat {
                    name: "CSS".into(),
                    percentage: 80,
                },
            ],
        }
    }
}

impl Default for CodingStats {
    fn default() -> Self {
        Self::today()
    }
}
