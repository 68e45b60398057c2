use serde::{Deserialize, Serialize};

/// The persisted record
///
/// Every field defaults when missing, so older or partial files still load.
/// `board` holds 20 rows of 10 cells, each a `#rrggbb` color name or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    pub high_score: u32,
    pub score: u32,
    pub level: u32,
    /// Fall interval in milliseconds
    pub speed: u32,
    pub combo: u32,
    pub lines_cleared: u32,
    pub board: Vec<Vec<Option<String>>>,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            high_score: 0,
            score: 0,
            level: 1,
            speed: 1000,
            combo: 0,
            lines_cleared: 0,
            board: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_loads_with_defaults() {
        let state: SavedState = serde_json::from_str(r#"{"high_score": 4200}"#).unwrap();
        assert_eq!(state.high_score, 4200);
        assert_eq!(state.level, 1);
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_board_cells_serialize_as_names_or_null() {
        let state = SavedState {
            board: vec![vec![Some("#ff0000".to_string()), None]],
            ..SavedState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["board"][0][0], "#ff0000");
        assert!(json["board"][0][1].is_null());
        assert_eq!(json["speed"], 1000);
    }
}
