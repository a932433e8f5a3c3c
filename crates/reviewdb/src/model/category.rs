use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Category
///
/// Fixed enumeration of indicator buckets. Wire tags are the upstream
/// service's uppercase labels.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Worst,
    Normal,
    Good,
    Excellent,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Worst => "WORST",
            Self::Normal => "NORMAL",
            Self::Good => "GOOD",
            Self::Excellent => "EXCELLENT",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_tags_match_display_labels() {
        for category in [
            Category::Worst,
            Category::Normal,
            Category::Good,
            Category::Excellent,
        ] {
            let tag = serde_json::to_value(category).unwrap();

            assert_eq!(tag, serde_json::Value::String(category.to_string()));
        }
    }
}
