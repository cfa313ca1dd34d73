//! Constraint-configuration file grammar.
//!
//! A small line-oriented format for declaring constraint tags, soft
//! weights, grid settings, and goals. Blank lines and `#` comments are
//! ignored. Directives:
//!
//! | Prefix | Form |
//! |--------|------|
//! | `HARD:` | `HARD: NAME \| description` |
//! | `SOFT:` | `SOFT: NAME \| description \| weight=<float>` |
//! | `CONFIG:` | `CONFIG: KEY = VALUE` |
//! | `GOAL:` | `GOAL: free-text` |
//!
//! The tags are declarative: the engine's hard constraints are fixed, so
//! `HARD:`/`SOFT:` lines exist for reporting and documentation. `CONFIG:`
//! recognizes `PERIODS_PER_DAY` and `DAYS_PER_WEEK`; unknown keys are
//! preserved but ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TimeConfig;

/// The constraint vocabulary.
///
/// Names outside the known set parse into [`ConstraintName::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintName {
    NoTeacherConflict,
    NoStudentConflict,
    NoRoomConflict,
    RoomCapacity,
    TeacherQualified,
    TeacherAvailability,
    RoomFeatures,
    GradeRestriction,
    TeacherMaxSections,
    BalancedSections,
    StudentElectivePreference,
    MinimizeGaps,
    TeacherPreferences,
    LunchAvailability,
    /// Any name outside the known vocabulary.
    Custom(String),
}

impl ConstraintName {
    /// Parses a name, mapping unknown names to `Custom`.
    pub fn parse(name: &str) -> Self {
        match name {
            "NO_TEACHER_CONFLICT" => Self::NoTeacherConflict,
            "NO_STUDENT_CONFLICT" => Self::NoStudentConflict,
            "NO_ROOM_CONFLICT" => Self::NoRoomConflict,
            "ROOM_CAPACITY" => Self::RoomCapacity,
            "TEACHER_QUALIFIED" => Self::TeacherQualified,
            "TEACHER_AVAILABILITY" => Self::TeacherAvailability,
            "ROOM_FEATURES" => Self::RoomFeatures,
            "GRADE_RESTRICTION" => Self::GradeRestriction,
            "TEACHER_MAX_SECTIONS" => Self::TeacherMaxSections,
            "BALANCED_SECTIONS" => Self::BalancedSections,
            "STUDENT_ELECTIVE_PREFERENCE" => Self::StudentElectivePreference,
            "MINIMIZE_GAPS" => Self::MinimizeGaps,
            "TEACHER_PREFERENCES" => Self::TeacherPreferences,
            "LUNCH_AVAILABILITY" => Self::LunchAvailability,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// A declared hard-constraint tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardConstraint {
    /// Constraint name.
    pub name: ConstraintName,
    /// Free-text description.
    pub description: String,
}

/// A declared soft-constraint tag with weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftConstraint {
    /// Constraint name.
    pub name: ConstraintName,
    /// Free-text description.
    pub description: String,
    /// Weight in `[0, 1]`.
    pub weight: f64,
}

/// A parsed constraint-configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintConfig {
    /// Declared hard-constraint tags, in file order.
    pub hard: Vec<HardConstraint>,
    /// Declared soft-constraint tags, in file order.
    pub soft: Vec<SoftConstraint>,
    /// `CONFIG:` key-value pairs, in file order, unknown keys included.
    pub settings: Vec<(String, String)>,
    /// `GOAL:` lines, in file order.
    pub goals: Vec<String>,
}

/// A malformed directive, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ConfigParseError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong.
    pub message: String,
}

impl ConstraintConfig {
    /// Parses a configuration document.
    pub fn parse(text: &str) -> Result<Self, ConfigParseError> {
        let mut config = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let number = idx + 1;

            if let Some(rest) = line.strip_prefix("HARD:") {
                config.hard.push(parse_hard(rest, number)?);
            } else if let Some(rest) = line.strip_prefix("SOFT:") {
                config.soft.push(parse_soft(rest, number)?);
            } else if let Some(rest) = line.strip_prefix("CONFIG:") {
                config.settings.push(parse_setting(rest, number)?);
            } else if let Some(rest) = line.strip_prefix("GOAL:") {
                config.goals.push(rest.trim().to_string());
            } else {
                return Err(ConfigParseError {
                    line: number,
                    message: format!("unrecognized directive: '{line}'"),
                });
            }
        }

        Ok(config)
    }

    /// Looks up a `CONFIG:` value by key (first occurrence wins).
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `PERIODS_PER_DAY` setting, if present and numeric.
    pub fn periods_per_day(&self) -> Option<u32> {
        self.setting("PERIODS_PER_DAY")?.parse().ok()
    }

    /// The `DAYS_PER_WEEK` setting, if present and numeric.
    pub fn days_per_week(&self) -> Option<u32> {
        self.setting("DAYS_PER_WEEK")?.parse().ok()
    }

    /// Builds a [`TimeConfig`] when both grid settings are present.
    pub fn time_config(&self) -> Option<TimeConfig> {
        Some(TimeConfig::new(self.periods_per_day()?, self.days_per_week()?))
    }
}

fn parse_hard(rest: &str, line: usize) -> Result<HardConstraint, ConfigParseError> {
    let (name, description) = rest.split_once('|').ok_or_else(|| ConfigParseError {
        line,
        message: "HARD directive needs 'NAME | description'".to_string(),
    })?;

    Ok(HardConstraint {
        name: ConstraintName::parse(name.trim()),
        description: description.trim().to_string(),
    })
}

fn parse_soft(rest: &str, line: usize) -> Result<SoftConstraint, ConfigParseError> {
    let mut parts = rest.splitn(3, '|');
    let name = parts.next().unwrap_or_default().trim();
    let description = parts.next().map(str::trim);
    let weight_field = parts.next().map(str::trim);

    let (description, weight_field) = match (description, weight_field) {
        (Some(d), Some(w)) => (d, w),
        _ => {
            return Err(ConfigParseError {
                line,
                message: "SOFT directive needs 'NAME | description | weight=<float>'".to_string(),
            })
        }
    };

    let weight: f64 = weight_field
        .strip_prefix("weight=")
        .and_then(|w| w.trim().parse().ok())
        .ok_or_else(|| ConfigParseError {
            line,
            message: format!("expected 'weight=<float>', got '{weight_field}'"),
        })?;

    if !(0.0..=1.0).contains(&weight) {
        return Err(ConfigParseError {
            line,
            message: format!("weight {weight} is outside [0, 1]"),
        });
    }

    Ok(SoftConstraint {
        name: ConstraintName::parse(name),
        description: description.to_string(),
        weight,
    })
}

fn parse_setting(rest: &str, line: usize) -> Result<(String, String), ConfigParseError> {
    let (key, value) = rest.split_once('=').ok_or_else(|| ConfigParseError {
        line,
        message: "CONFIG directive needs 'KEY = VALUE'".to_string(),
    })?;

    Ok((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# School constraint configuration

HARD: NO_TEACHER_CONFLICT | A teacher cannot be in two rooms at once
HARD: ROOM_CAPACITY | Section size within room capacity
SOFT: BALANCED_SECTIONS | Keep section sizes even | weight=0.6
SOFT: STUDENT_ELECTIVE_PREFERENCE | Honor elective rankings | weight=0.4

CONFIG: PERIODS_PER_DAY = 7
CONFIG: DAYS_PER_WEEK = 5
CONFIG: SEMESTER = fall

GOAL: Every senior gets Government
";

    #[test]
    fn test_parse_sample() {
        let config = ConstraintConfig::parse(SAMPLE).unwrap();

        assert_eq!(config.hard.len(), 2);
        assert_eq!(config.hard[0].name, ConstraintName::NoTeacherConflict);
        assert_eq!(config.hard[1].name, ConstraintName::RoomCapacity);

        assert_eq!(config.soft.len(), 2);
        assert_eq!(config.soft[0].name, ConstraintName::BalancedSections);
        assert!((config.soft[0].weight - 0.6).abs() < 1e-10);

        assert_eq!(config.goals, vec!["Every senior gets Government"]);
    }

    #[test]
    fn test_config_settings() {
        let config = ConstraintConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.periods_per_day(), Some(7));
        assert_eq!(config.days_per_week(), Some(5));
        assert_eq!(config.setting("SEMESTER"), Some("fall"));
        assert_eq!(config.setting("NOPE"), None);
        assert_eq!(config.time_config(), Some(TimeConfig::new(7, 5)));
    }

    #[test]
    fn test_unknown_name_maps_to_custom() {
        let config = ConstraintConfig::parse("HARD: NO_GYM_MONDAYS | gym closed\n").unwrap();
        assert_eq!(
            config.hard[0].name,
            ConstraintName::Custom("NO_GYM_MONDAYS".to_string())
        );
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let config = ConstraintConfig::parse("\n   \n# just a comment\n").unwrap();
        assert_eq!(config, ConstraintConfig::default());
    }

    #[test]
    fn test_hard_missing_separator() {
        let err = ConstraintConfig::parse("HARD: NO_TEACHER_CONFLICT\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.message.contains("NAME | description"));
    }

    #[test]
    fn test_soft_missing_weight() {
        let err = ConstraintConfig::parse("SOFT: BALANCED_SECTIONS | even sizes\n").unwrap_err();
        assert!(err.message.contains("weight=<float>"));
    }

    #[test]
    fn test_soft_bad_weight_literal() {
        let err =
            ConstraintConfig::parse("SOFT: BALANCED_SECTIONS | even | weight=heavy\n").unwrap_err();
        assert!(err.message.contains("weight=<float>"));
    }

    #[test]
    fn test_soft_weight_out_of_range() {
        let err =
            ConstraintConfig::parse("SOFT: BALANCED_SECTIONS | even | weight=1.5\n").unwrap_err();
        assert!(err.message.contains("outside [0, 1]"));
    }

    #[test]
    fn test_unrecognized_directive() {
        let err = ConstraintConfig::parse("GOAL: fine\nWHAT: is this\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("unrecognized"));
    }

    #[test]
    fn test_config_missing_equals() {
        let err = ConstraintConfig::parse("CONFIG: PERIODS_PER_DAY 7\n").unwrap_err();
        assert!(err.message.contains("KEY = VALUE"));
    }

    #[test]
    fn test_unknown_config_key_preserved() {
        let config = ConstraintConfig::parse("CONFIG: BELL_SCHEDULE = rotating\n").unwrap();
        assert_eq!(config.settings, vec![(
            "BELL_SCHEDULE".to_string(),
            "rotating".to_string()
        )]);
        assert_eq!(config.time_config(), None);
    }
}
