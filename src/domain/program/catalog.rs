//! Program catalogs - the built-in 12-week plan and YAML catalog documents.
//!
//! External catalog input is parsed into plain documents first and only
//! becomes a [`Program`] after validation, so nothing downstream ever sees
//! an unchecked catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{ActivityId, SegmentId, ValidationError};

use super::{Activity, Program, Segment};

/// Errors raised while turning an external document into a program.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(String),

    #[error("Catalog document is malformed: {0}")]
    Malformed(String),

    #[error("Catalog is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Serialized form of a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub segments: Vec<SegmentDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDocument {
    pub id: String,
    /// Optional explicit position; must match document order when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub title: String,
    pub activities: Vec<ActivityDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDocument {
    pub id: String,
    /// Defaults to the 1-based position within the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub duration_seconds: u32,
}

impl CatalogDocument {
    /// Validates the document and builds a program from it.
    pub fn into_program(self) -> Result<Program, ValidationError> {
        let mut segments = Vec::with_capacity(self.segments.len());

        for (position, doc) in self.segments.into_iter().enumerate() {
            if let Some(index) = doc.index {
                if index != position {
                    return Err(ValidationError::invalid_format(
                        "segment_index",
                        format!(
                            "segment '{}' declares index {} but is at position {}",
                            doc.id, index, position
                        ),
                    ));
                }
            }

            let activities = doc
                .activities
                .into_iter()
                .enumerate()
                .map(|(i, a)| {
                    Activity::new(
                        ActivityId::new(a.id)?,
                        a.ordinal.unwrap_or(i as u32 + 1),
                        a.title,
                        a.duration_seconds,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?;

            segments.push(Segment::new(SegmentId::new(doc.id)?, doc.title, activities)?);
        }

        Program::new(segments)
    }

    /// Builds the document form of an existing program.
    pub fn from_program(program: &Program) -> Self {
        let segments = program
            .segments()
            .iter()
            .map(|s| SegmentDocument {
                id: s.id().to_string(),
                index: Some(s.index()),
                title: s.title().to_string(),
                activities: s
                    .activities()
                    .iter()
                    .map(|a| ActivityDocument {
                        id: a.id().to_string(),
                        ordinal: Some(a.ordinal()),
                        title: a.title().to_string(),
                        duration_seconds: a.duration_seconds(),
                    })
                    .collect(),
            })
            .collect();
        Self { segments }
    }
}

/// Parses and validates a YAML catalog.
pub fn parse_catalog_yaml(yaml: &str) -> Result<Program, CatalogError> {
    let document: CatalogDocument =
        serde_yaml::from_str(yaml).map_err(|e| CatalogError::Malformed(e.to_string()))?;
    Ok(document.into_program()?)
}

/// Number of weeks in the built-in plan.
pub const REFERENCE_WEEKS: usize = 12;

/// Training days used by every week of the built-in plan (Mon/Wed/Fri).
const REFERENCE_DAY_NUMBERS: [u32; 3] = [1, 3, 5];

static REFERENCE_PROGRAM: Lazy<Program> = Lazy::new(|| {
    build_reference_program().expect("built-in catalog must satisfy program invariants")
});

/// The built-in 12-week core programme.
///
/// # Panics
///
/// Never in practice: the catalog is constant data covered by tests.
pub fn reference_program() -> &'static Program {
    &REFERENCE_PROGRAM
}

fn build_reference_program() -> Result<Program, ValidationError> {
    let fixed_weeks: [(&str, [(&str, u32); 3]); 3] = [
        (
            "Anatomical Core Foundations",
            [("Front Plank", 30), ("Bird-dog Control", 45), ("Dead Bug", 60)],
        ),
        (
            "Neuromuscular Stability",
            [
                ("Plank with Shoulder Tap", 45),
                ("Single-arm Farmer's Walk", 60),
                ("Pallof Press", 45),
            ],
        ),
        (
            "Maximal Neuromuscular Power",
            [
                ("Lower Body: Power and Stability", 60),
                ("Steel Core: Anti-Rotation", 45),
                ("Upper Body: Functional Hypertrophy", 60),
            ],
        ),
    ];
    let specialisation_days: [(&str, u32); 3] = [
        ("Advanced Isometric Strength", 45),
        ("Dynamic Power", 50),
        ("Metabolic Endurance", 60),
    ];

    let mut segments = Vec::with_capacity(REFERENCE_WEEKS);
    for week in 1..=REFERENCE_WEEKS {
        let (title, days) = match fixed_weeks.get(week - 1) {
            Some((title, days)) => (title.to_string(), *days),
            None => (
                format!("Specialisation Phase {}", week - fixed_weeks.len()),
                specialisation_days,
            ),
        };

        let activities = days
            .iter()
            .zip(REFERENCE_DAY_NUMBERS)
            .map(|((day_title, duration), day)| {
                Activity::new(
                    ActivityId::new(format!("w{}d{}", week, day))?,
                    day,
                    *day_title,
                    *duration,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        segments.push(Segment::new(
            SegmentId::new(format!("week{}", week))?,
            title,
            activities,
        )?);
    }

    Program::new(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_program_has_twelve_weeks_of_three_days() {
        let program = reference_program();
        assert_eq!(program.len(), REFERENCE_WEEKS);
        assert_eq!(program.total_activities(), 36);
        assert!(program.segments().iter().all(|s| s.activities().len() == 3));
    }

    #[test]
    fn reference_program_uses_stable_ids() {
        let program = reference_program();
        let first = &program.segments()[0];
        let last = &program.segments()[11];

        assert_eq!(first.id().as_str(), "week1");
        let ids: Vec<&str> = first.activity_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["w1d1", "w1d3", "w1d5"]);
        assert_eq!(last.id().as_str(), "week12");
        assert!(last.contains_activity(&ActivityId::new("w12d5").unwrap()));
    }

    #[test]
    fn reference_program_names_specialisation_weeks() {
        let program = reference_program();
        assert_eq!(program.segments()[3].title(), "Specialisation Phase 1");
        assert_eq!(program.segments()[11].title(), "Specialisation Phase 9");
    }

    #[test]
    fn parse_catalog_yaml_builds_program() {
        let yaml = r#"
segments:
  - id: week1
    title: Foundations
    activities:
      - { id: a1, title: Plank, duration_seconds: 30 }
      - { id: a2, ordinal: 3, title: Dead bug, duration_seconds: 60 }
  - id: week2
    index: 1
    title: Stability
    activities:
      - { id: b1, title: Pallof press }
"#;
        let program = parse_catalog_yaml(yaml).unwrap();
        assert_eq!(program.len(), 2);
        let week1 = &program.segments()[0];
        assert_eq!(week1.activities()[0].ordinal(), 1);
        assert_eq!(week1.activities()[1].ordinal(), 3);
        assert_eq!(program.segments()[1].activities()[0].duration_seconds(), 0);
    }

    #[test]
    fn parse_catalog_yaml_rejects_index_gaps() {
        let yaml = r#"
segments:
  - id: week1
    title: Foundations
    activities:
      - { id: a1, title: Plank }
  - id: week3
    index: 2
    title: Gap
    activities:
      - { id: c1, title: Plank }
"#;
        match parse_catalog_yaml(yaml) {
            Err(CatalogError::Invalid(ValidationError::InvalidFormat { field, .. })) => {
                assert_eq!(field, "segment_index")
            }
            other => panic!("Expected index validation error, got {:?}", other),
        }
    }

    #[test]
    fn parse_catalog_yaml_rejects_empty_segment() {
        let yaml = r#"
segments:
  - id: week1
    title: Foundations
    activities: []
"#;
        assert!(matches!(
            parse_catalog_yaml(yaml),
            Err(CatalogError::Invalid(ValidationError::EmptyField { .. }))
        ));
    }

    #[test]
    fn parse_catalog_yaml_rejects_negative_duration() {
        let yaml = r#"
segments:
  - id: week1
    title: Foundations
    activities:
      - { id: a1, title: Plank, duration_seconds: -5 }
"#;
        assert!(matches!(
            parse_catalog_yaml(yaml),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn document_round_trips_reference_program() {
        let document = CatalogDocument::from_program(reference_program());
        let yaml = serde_yaml::to_string(&document).unwrap();
        let reparsed = parse_catalog_yaml(&yaml).unwrap();
        assert_eq!(&reparsed, reference_program());
    }
}
