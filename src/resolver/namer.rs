//! Solution configuration naming.
//!
//! The host correlates the solution-level selection with per-project
//! contexts through a composite `NAME|PLATFORM` key. Pipes inside either
//! part are not escaped, so `"A|B" + "C"` and `"A" + "B|C"` produce the
//! same key.

use crate::core::SolutionConfigurationPair;

/// Separator between configuration and platform in a composite key.
pub const KEY_SEPARATOR: char = '|';

/// Format a solution configuration as its composite key, e.g. `Debug|x64`.
pub fn solution_configuration_name(config: &SolutionConfigurationPair) -> String {
    let mut key = String::with_capacity(config.name.len() + config.platform_name.len() + 1);
    key.push_str(&config.name);
    key.push(KEY_SEPARATOR);
    key.push_str(&config.platform_name);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let pair = SolutionConfigurationPair::new("Debug", "x64");
        assert_eq!(solution_configuration_name(&pair), "Debug|x64");
    }

    #[test]
    fn test_name_matches_display() {
        let pair = SolutionConfigurationPair::new("Release", "Any CPU");
        assert_eq!(solution_configuration_name(&pair), pair.to_string());
    }

    #[test]
    fn test_embedded_pipes_collide() {
        let left = SolutionConfigurationPair::new("A|B", "C");
        let right = SolutionConfigurationPair::new("A", "B|C");
        assert_eq!(
            solution_configuration_name(&left),
            solution_configuration_name(&right)
        );
    }

    #[test]
    fn test_empty_parts() {
        let pair = SolutionConfigurationPair::new("", "");
        assert_eq!(solution_configuration_name(&pair), "|");
    }
}
