//! Nielsen's ten usability heuristics.
//!
//! The evaluation framework is fixed: exactly ten criteria, in a fixed
//! order. Downstream scoring refers to a heuristic by its position in
//! this list, so the order must never change.

/// The ten heuristics in evaluation order.
pub const NIELSEN_HEURISTICS: [&str; 10] = [
    "Visibility of system status",
    "Match between system and the real world",
    "User control and freedom",
    "Consistency and standards",
    "Error prevention",
    "Recognition rather than recall",
    "Flexibility and efficiency of use",
    "Aesthetic and minimalist design",
    "Help users recognize, diagnose, and recover from errors",
    "Help and documentation",
];

/// All heuristics in evaluation order.
pub fn all() -> &'static [&'static str] {
    &NIELSEN_HEURISTICS
}

/// Look up a heuristic by its position (0-indexed).
#[allow(dead_code)] // Used when mapping scores back to criteria
pub fn get(index: usize) -> Option<&'static str> {
    NIELSEN_HEURISTICS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_ten_heuristics() {
        assert_eq!(all().len(), 10);
    }

    #[test]
    fn test_fixed_order() {
        assert_eq!(all().first(), Some(&"Visibility of system status"));
        assert_eq!(get(4), Some("Error prevention"));
        assert_eq!(all().last(), Some(&"Help and documentation"));
    }

    #[test]
    fn test_stable_across_reads() {
        assert_eq!(all(), all());
        assert_eq!(get(10), None);
    }
}
