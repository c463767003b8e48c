use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Role Types
// ============================================================================

/// Session roles as reported by the backend's `/auth` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Profesor,
    Alumno,
    Usuario,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Profesor => "profesor",
            Role::Alumno => "alumno",
            Role::Usuario => "usuario",
        }
    }

    /// English display name, used when telling a user which role a page needs.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Profesor => "teacher",
            Role::Alumno => "student",
            Role::Usuario => "user",
        }
    }

    pub fn can_manage_groups(&self) -> bool {
        matches!(self, Role::Profesor)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profesor" => Ok(Role::Profesor),
            "alumno" => Ok(Role::Alumno),
            "usuario" => Ok(Role::Usuario),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Course Types
// ============================================================================

/// English course levels offered by the academy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    #[serde(rename = "APRENDIZAJELIBRE")]
    FreeLearning,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::A1 => "A1",
            CourseLevel::A2 => "A2",
            CourseLevel::B1 => "B1",
            CourseLevel::B2 => "B2",
            CourseLevel::C1 => "C1",
            CourseLevel::C2 => "C2",
            CourseLevel::FreeLearning => "APRENDIZAJELIBRE",
        }
    }

    /// Display text for the course dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::FreeLearning => "Free learning",
            other => other.as_str(),
        }
    }

    /// All levels in dropdown order, free learning last.
    pub fn all() -> [CourseLevel; 7] {
        [
            CourseLevel::A1,
            CourseLevel::A2,
            CourseLevel::B1,
            CourseLevel::B2,
            CourseLevel::C1,
            CourseLevel::C2,
            CourseLevel::FreeLearning,
        ]
    }
}

impl FromStr for CourseLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A1" => Ok(CourseLevel::A1),
            "A2" => Ok(CourseLevel::A2),
            "B1" => Ok(CourseLevel::B1),
            "B2" => Ok(CourseLevel::B2),
            "C1" => Ok(CourseLevel::C1),
            "C2" => Ok(CourseLevel::C2),
            "APRENDIZAJELIBRE" => Ok(CourseLevel::FreeLearning),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Group Types
// ============================================================================

/// Course selection nested inside the group payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSelection {
    #[serde(rename = "cursoDeIngles")]
    pub english_course: String,
}

/// Body of `POST /grupos/new`. Field names follow the backend's wire
/// contract; the course string is empty while nothing is selected and the
/// backend rejects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    #[serde(rename = "nombreGrupo")]
    pub group_name: String,
    #[serde(rename = "cursos")]
    pub courses: CourseSelection,
}

// ============================================================================
// Validation Types
// ============================================================================

/// Rejection body returned with status 203. Both fields default to empty so
/// a malformed body reconciles like an unrecognized field instead of failing
/// to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRejection {
    #[serde(default)]
    pub field: String,
    #[serde(rename = "defaultMessage", default)]
    pub default_message: String,
}

/// Group form fields the backend reports validation errors against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    GroupName,
    EnglishCourse,
}

impl GroupField {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::GroupName => "nombreGrupo",
            GroupField::EnglishCourse => "grupo.cursoDeIngles",
        }
    }
}

impl FromStr for GroupField {
    type Err = ();

    // Wire identifiers are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombreGrupo" => Ok(GroupField::GroupName),
            "grupo.cursoDeIngles" => Ok(GroupField::EnglishCourse),
            _ => Err(()),
        }
    }
}

/// Result of submitting a group, derived from the HTTP status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 201: the group was created.
    Created,
    /// 203: the backend rejected one of the fields this form renders.
    FieldRejected { field: GroupField, message: String },
    /// 203 naming a field identifier this form does not render. No feedback
    /// is shown for these.
    UnknownFieldRejected { field: String },
    /// Any other status. The body is displayed verbatim.
    Failed { message: String },
}

impl SubmissionOutcome {
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            201 => SubmissionOutcome::Created,
            203 => {
                let rejection: ValidationRejection =
                    serde_json::from_str(body).unwrap_or_default();
                match rejection.field.parse::<GroupField>() {
                    Ok(field) => SubmissionOutcome::FieldRejected {
                        field,
                        message: rejection.default_message,
                    },
                    Err(()) => SubmissionOutcome::UnknownFieldRejected {
                        field: rejection.field,
                    },
                }
            }
            _ => SubmissionOutcome::Failed {
                message: body.to_string(),
            },
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SubmissionOutcome::Created)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions() {
        assert!(Role::Profesor.can_manage_groups());
        assert!(!Role::Alumno.can_manage_groups());
        assert!(!Role::Usuario.can_manage_groups());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("profesor".parse(), Ok(Role::Profesor));
        assert_eq!("ALUMNO".parse(), Ok(Role::Alumno));
        assert_eq!("Usuario".parse(), Ok(Role::Usuario));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_course_level_from_str() {
        assert_eq!("A1".parse(), Ok(CourseLevel::A1));
        assert_eq!("b2".parse(), Ok(CourseLevel::B2));
        assert_eq!("APRENDIZAJELIBRE".parse(), Ok(CourseLevel::FreeLearning));
        assert!("D1".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn test_course_level_wire_values() {
        assert_eq!(CourseLevel::C2.as_str(), "C2");
        assert_eq!(CourseLevel::FreeLearning.as_str(), "APRENDIZAJELIBRE");
        assert_eq!(CourseLevel::FreeLearning.label(), "Free learning");
        assert_eq!(CourseLevel::all().len(), 7);
    }

    #[test]
    fn test_create_group_request_wire_names() {
        let request = CreateGroupRequest {
            group_name: "Grupo C4".to_string(),
            courses: CourseSelection {
                english_course: CourseLevel::A1.as_str().to_string(),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["nombreGrupo"], "Grupo C4");
        assert_eq!(json["cursos"]["cursoDeIngles"], "A1");
    }

    #[test]
    fn test_group_field_from_str() {
        assert_eq!("nombreGrupo".parse(), Ok(GroupField::GroupName));
        assert_eq!("grupo.cursoDeIngles".parse(), Ok(GroupField::EnglishCourse));
        assert!("descripcion".parse::<GroupField>().is_err());
        // Identifiers are exact, not case-insensitive.
        assert!("NOMBREGRUPO".parse::<GroupField>().is_err());
    }

    #[test]
    fn test_reconcile_created() {
        let outcome = SubmissionOutcome::from_response(201, "");
        assert_eq!(outcome, SubmissionOutcome::Created);
        assert!(outcome.is_created());
    }

    #[test]
    fn test_reconcile_group_name_rejection() {
        let body = r#"{"field":"nombreGrupo","defaultMessage":"size must be between 5 and 15"}"#;
        assert_eq!(
            SubmissionOutcome::from_response(203, body),
            SubmissionOutcome::FieldRejected {
                field: GroupField::GroupName,
                message: "size must be between 5 and 15".to_string(),
            }
        );
    }

    #[test]
    fn test_reconcile_course_rejection() {
        let body = r#"{"field":"grupo.cursoDeIngles","defaultMessage":"must not be empty"}"#;
        assert_eq!(
            SubmissionOutcome::from_response(203, body),
            SubmissionOutcome::FieldRejected {
                field: GroupField::EnglishCourse,
                message: "must not be empty".to_string(),
            }
        );
    }

    #[test]
    fn test_reconcile_unknown_field() {
        let body = r#"{"field":"grupo.horario","defaultMessage":"must not be null"}"#;
        assert_eq!(
            SubmissionOutcome::from_response(203, body),
            SubmissionOutcome::UnknownFieldRejected {
                field: "grupo.horario".to_string(),
            }
        );
    }

    #[test]
    fn test_reconcile_malformed_rejection_body() {
        assert_eq!(
            SubmissionOutcome::from_response(203, "not json"),
            SubmissionOutcome::UnknownFieldRejected {
                field: String::new(),
            }
        );
    }

    #[test]
    fn test_reconcile_other_status() {
        let outcome = SubmissionOutcome::from_response(500, "This group already exists");
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                message: "This group already exists".to_string(),
            }
        );
        assert!(!outcome.is_created());
    }
}
