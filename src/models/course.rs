//! Course model.
//!
//! A course offers one or more lecture sections and, optionally, lab
//! sections. A schedulable course has at least one lecture; a course
//! with labs requires one lecture and one lab to be chosen together.

use serde::{Deserialize, Serialize};

use super::Section;

/// A catalog course. Immutable input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Offering school.
    #[serde(default)]
    pub school: String,
    /// Department name.
    pub department: String,
    /// Course title.
    pub title: String,
    /// Catalog number (e.g. "CS 131"). Used as the course label in conflicts.
    pub catalog_number: String,
    /// Credit units. `None` = variable or unknown.
    pub units: Option<f64>,
    /// Catalog description.
    #[serde(default)]
    pub description: String,
    /// Course level (e.g. "Undergraduate").
    #[serde(default)]
    pub level: String,
    /// Offered sections.
    pub sections: CourseSections,
}

/// Lecture and lab offerings of a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSections {
    /// Lecture sections.
    pub lecture: Vec<Section>,
    /// Lab sections. `None` or empty = no lab required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<Vec<Section>>,
}

impl Course {
    /// Creates a new course with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            school: String::new(),
            department: String::new(),
            title: String::new(),
            catalog_number: String::new(),
            units: None,
            description: String::new(),
            level: String::new(),
            sections: CourseSections::default(),
        }
    }

    /// Sets the catalog number.
    pub fn with_catalog_number(mut self, catalog_number: impl Into<String>) -> Self {
        self.catalog_number = catalog_number.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the credit units.
    pub fn with_units(mut self, units: f64) -> Self {
        self.units = Some(units);
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a lecture section.
    pub fn with_lecture(mut self, section: Section) -> Self {
        self.sections.lecture.push(section);
        self
    }

    /// Adds a lab section.
    pub fn with_lab(mut self, section: Section) -> Self {
        self.sections.lab.get_or_insert_with(Vec::new).push(section);
        self
    }

    /// Lecture options.
    pub fn lectures(&self) -> &[Section] {
        &self.sections.lecture
    }

    /// Lab options, empty if the course has none.
    pub fn labs(&self) -> &[Section] {
        self.sections.lab.as_deref().unwrap_or(&[])
    }

    /// Whether a lab must be chosen alongside the lecture.
    pub fn has_labs(&self) -> bool {
        !self.labs().is_empty()
    }

    /// Number of (lecture, lab) combinations, ignoring conflicts.
    pub fn option_count(&self) -> usize {
        self.lectures().len() * self.labs().len().max(1)
    }
}
