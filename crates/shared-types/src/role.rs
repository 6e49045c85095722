use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::section::{AdminSection, DashboardSection, SectionEntry, SectionId, StudentSection, TeacherSection};

/// Dashboard context a shell is mounted for. Fixed for the shell's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    /// Lowercase key, also the route segment for the role's dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(AppError::unknown_role(s)),
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            Role::Student => "الطالب",
            Role::Teacher => "المدرس",
            Role::Admin => "الإدارة",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }

    /// Ordered menu entries for this role.
    pub fn sections(self) -> Vec<SectionEntry> {
        match self {
            Role::Student => entries::<StudentSection>(),
            Role::Teacher => entries::<TeacherSection>(),
            Role::Admin => entries::<AdminSection>(),
        }
    }

    /// Section a freshly mounted shell starts on.
    pub fn default_section(self) -> SectionId {
        match self {
            Role::Student => StudentSection::DEFAULT.into(),
            Role::Teacher => TeacherSection::DEFAULT.into(),
            Role::Admin => AdminSection::DEFAULT.into(),
        }
    }
}

fn entries<S: DashboardSection>() -> Vec<SectionEntry> {
    S::ALL.iter().map(|s| s.descriptor().into()).collect()
}
