use super::super::domain::ScoreLevel;

/// Lower bounds (inclusive) for each band above `Critical`, best first.
const THRESHOLDS: [(u8, ScoreLevel); 4] = [
    (85, ScoreLevel::Excellent),
    (70, ScoreLevel::Good),
    (55, ScoreLevel::Average),
    (40, ScoreLevel::Concern),
];

/// Maps a percentage onto its qualitative band.
///
/// Dimension and overall scores both classify through here; no other code compares
/// against the breakpoints.
pub fn classify_level(percentage: u8) -> ScoreLevel {
    THRESHOLDS
        .iter()
        .find(|(floor, _)| percentage >= *floor)
        .map(|(_, level)| *level)
        .unwrap_or(ScoreLevel::Critical)
}

/// Inclusive lower bound of a band, for display.
pub fn level_floor(level: ScoreLevel) -> u8 {
    THRESHOLDS
        .iter()
        .find(|(_, candidate)| *candidate == level)
        .map(|(floor, _)| *floor)
        .unwrap_or(0)
}
