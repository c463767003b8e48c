//! Form state for the group-creation page.
//!
//! The draft is replaced wholesale on every edit so one field can never
//! clobber the other, and feedback is rebuilt from each submission outcome
//! so at most one banner is populated at a time.

use shared::{CourseLevel, CourseSelection, CreateGroupRequest, GroupField, SubmissionOutcome};

/// The in-progress group being edited, before the backend has seen it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub course: Option<CourseLevel>,
}

impl GroupDraft {
    /// New draft with the name replaced and the course carried over.
    pub fn with_name(&self, name: String) -> Self {
        Self {
            name,
            course: self.course,
        }
    }

    /// New draft with the course replaced and the name carried over.
    pub fn with_course(&self, course: Option<CourseLevel>) -> Self {
        Self {
            name: self.name.clone(),
            course,
        }
    }

    /// Wire payload built strictly from the current fields. An unselected
    /// course serializes as the empty string; rejecting it is the backend's
    /// job.
    pub fn to_request(&self) -> CreateGroupRequest {
        CreateGroupRequest {
            group_name: self.name.clone(),
            courses: CourseSelection {
                english_course: self
                    .course
                    .map(|course| course.as_str().to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

/// Transient feedback shown around the form. At most one member is populated
/// at a time; every submission attempt starts from the cleared default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFormFeedback {
    pub group_name_error: Option<String>,
    pub course_error: Option<String>,
    pub success: bool,
    pub failure: Option<String>,
}

impl GroupFormFeedback {
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Created => Self {
                success: true,
                ..Self::default()
            },
            SubmissionOutcome::FieldRejected {
                field: GroupField::GroupName,
                message,
            } => Self {
                group_name_error: Some(message.clone()),
                ..Self::default()
            },
            SubmissionOutcome::FieldRejected {
                field: GroupField::EnglishCourse,
                message,
            } => Self {
                course_error: Some(message.clone()),
                ..Self::default()
            },
            // Unrecognized field identifiers surface nothing.
            SubmissionOutcome::UnknownFieldRejected { .. } => Self::default(),
            SubmissionOutcome::Failed { message } => Self {
                failure: Some(message.clone()),
                ..Self::default()
            },
        }
    }
}
