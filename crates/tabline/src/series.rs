//! Display names and colours for series keys.

use serde::{Deserialize, Serialize};

/// Line colours assigned to series in order, wrapping around.
pub const PALETTE: [&str; 8] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#0088fe", "#00c49f", "#ff8042", "#a4de6c",
];

/// Presentation attributes for one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    /// Data key in each point.
    pub key: String,
    /// Legend name.
    pub name: String,
    pub color: String,
}

/// Capitalize the first character of a series key.
pub fn display_name(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Assign names and palette colours to series keys in order.
pub fn assign_colors(keys: &[String]) -> Vec<SeriesStyle> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| SeriesStyle {
            key: key.clone(),
            name: display_name(key),
            color: PALETTE[i % PALETTE.len()].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("sales"), "Sales");
        assert_eq!(display_name("Sales"), "Sales");
        assert_eq!(display_name("über"), "Über");
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("1st"), "1st");
    }

    #[test]
    fn test_assign_colors_wraps() {
        let keys: Vec<String> = (0..10).map(|i| format!("s{}", i)).collect();
        let styles = assign_colors(&keys);

        assert_eq!(styles.len(), 10);
        assert_eq!(styles[0].name, "S0");
        assert_eq!(styles[0].color, PALETTE[0]);
        assert_eq!(styles[8].color, PALETTE[0]);
        assert_eq!(styles[9].color, PALETTE[1]);
    }
}
