use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::AppError;
use crate::icon::IconRef;
use crate::locale::Language;
use crate::role::Role;

/// Menu entry for one section of a role's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor<S> {
    pub id: S,
    /// Stable lowercase key used in URLs and logs.
    pub key: &'static str,
    pub label_ar: &'static str,
    pub label_en: &'static str,
    pub icon: IconRef,
}

impl<S> SectionDescriptor<S> {
    pub fn label(&self, lang: Language) -> &'static str {
        lang.pick(self.label_ar, self.label_en)
    }
}

/// A role's closed set of selectable sections.
///
/// `ALL` is the menu order and never changes at runtime. `DEFAULT` is the
/// first entry of `ALL`; unknown keys resolve to it.
pub trait DashboardSection:
    Copy
    + Eq
    + Hash
    + Debug
    + Send
    + Sync
    + Into<SectionId>
    + TryFrom<SectionId, Error = AppError>
    + 'static
{
    const ROLE: Role;
    const ALL: &'static [Self];
    const DEFAULT: Self;

    fn descriptor(self) -> SectionDescriptor<Self>;

    fn key(self) -> &'static str {
        self.descriptor().key
    }

    fn label(self, lang: Language) -> &'static str {
        self.descriptor().label(lang)
    }

    /// Strict lookup by key.
    fn parse(key: &str) -> Result<Self, AppError> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.key() == key)
            .ok_or_else(|| AppError::unknown_section(Self::ROLE.as_str(), key))
    }

    /// Lookup by key with fallback to [`DashboardSection::DEFAULT`].
    fn resolve(key: &str) -> Self {
        Self::parse(key).unwrap_or(Self::DEFAULT)
    }
}

// ─── Student ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentSection {
    Courses,
    Schedule,
    Recordings,
    Homework,
    Quizzes,
    Achievements,
    Contact,
}

impl DashboardSection for StudentSection {
    const ROLE: Role = Role::Student;
    const ALL: &'static [Self] = &[
        StudentSection::Courses,
        StudentSection::Schedule,
        StudentSection::Recordings,
        StudentSection::Homework,
        StudentSection::Quizzes,
        StudentSection::Achievements,
        StudentSection::Contact,
    ];
    const DEFAULT: Self = StudentSection::Courses;

    fn descriptor(self) -> SectionDescriptor<Self> {
        let (key, label_ar, label_en, icon) = match self {
            StudentSection::Courses => ("courses", "كورساتي", "My Courses", IconRef::BookOpen),
            StudentSection::Schedule => ("schedule", "الجدول", "Schedule", IconRef::Calendar),
            StudentSection::Recordings => (
                "recordings",
                "المحاضرات المسجلة",
                "Recorded Lessons",
                IconRef::Video,
            ),
            StudentSection::Homework => ("homework", "الواجبات", "Homework", IconRef::PenTool),
            StudentSection::Quizzes => ("quizzes", "الكويزات", "Quizzes", IconRef::Brain),
            StudentSection::Achievements => {
                ("achievements", "إنجازاتي", "Achievements", IconRef::Trophy)
            }
            StudentSection::Contact => ("contact", "تواصل معنا", "Contact", IconRef::Phone),
        };
        SectionDescriptor {
            id: self,
            key,
            label_ar,
            label_en,
            icon,
        }
    }
}

// ─── Teacher ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherSection {
    Courses,
    Students,
    Homework,
    Content,
    Schedule,
    Reports,
    Contact,
}

impl DashboardSection for TeacherSection {
    const ROLE: Role = Role::Teacher;
    const ALL: &'static [Self] = &[
        TeacherSection::Courses,
        TeacherSection::Students,
        TeacherSection::Homework,
        TeacherSection::Content,
        TeacherSection::Schedule,
        TeacherSection::Reports,
        TeacherSection::Contact,
    ];
    const DEFAULT: Self = TeacherSection::Courses;

    fn descriptor(self) -> SectionDescriptor<Self> {
        let (key, label_ar, label_en, icon) = match self {
            TeacherSection::Courses => ("courses", "كورساتي", "My Courses", IconRef::BookOpen),
            TeacherSection::Students => ("students", "الطلاب", "Students", IconRef::Users),
            TeacherSection::Homework => ("homework", "الواجبات", "Homework", IconRef::FileText),
            TeacherSection::Content => ("content", "المحتوى", "Content", IconRef::Video),
            TeacherSection::Schedule => ("schedule", "الجدول", "Schedule", IconRef::Calendar),
            TeacherSection::Reports => ("reports", "التقارير", "Reports", IconRef::Activity),
            TeacherSection::Contact => {
                ("contact", "تواصل مع الإدارة", "Contact Admin", IconRef::Phone)
            }
        };
        SectionDescriptor {
            id: self,
            key,
            label_ar,
            label_en,
            icon,
        }
    }
}

// ─── Admin ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminSection {
    Users,
    Link,
    Academic,
    Schedule,
    Reports,
    Notifications,
    Settings,
}

impl DashboardSection for AdminSection {
    const ROLE: Role = Role::Admin;
    const ALL: &'static [Self] = &[
        AdminSection::Users,
        AdminSection::Link,
        AdminSection::Academic,
        AdminSection::Schedule,
        AdminSection::Reports,
        AdminSection::Notifications,
        AdminSection::Settings,
    ];
    const DEFAULT: Self = AdminSection::Users;

    fn descriptor(self) -> SectionDescriptor<Self> {
        let (key, label_ar, label_en, icon) = match self {
            AdminSection::Users => ("users", "إدارة المستخدمين", "User Management", IconRef::Users),
            AdminSection::Link => ("link", "ربط ولي الأمر", "Link Parent-Student", IconRef::Link),
            AdminSection::Academic => {
                ("academic", "الإعداد الأكاديمي", "Academic Setup", IconRef::BookOpen)
            }
            AdminSection::Schedule => {
                ("schedule", "إدارة الجدول", "Schedule Management", IconRef::Calendar)
            }
            AdminSection::Reports => {
                ("reports", "التقارير", "Reports & Monitoring", IconRef::Activity)
            }
            AdminSection::Notifications => {
                ("notifications", "الإشعارات", "Notifications", IconRef::Bell)
            }
            AdminSection::Settings => ("settings", "الإعدادات", "Settings", IconRef::Settings),
        };
        SectionDescriptor {
            id: self,
            key,
            label_ar,
            label_en,
            icon,
        }
    }
}

// ─── Role-tagged view ──────────────────────────────────────────────────

/// A section of any role's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "section", rename_all = "lowercase")]
pub enum SectionId {
    Student(StudentSection),
    Teacher(TeacherSection),
    Admin(AdminSection),
}

impl SectionId {
    pub fn role(&self) -> Role {
        match self {
            SectionId::Student(_) => Role::Student,
            SectionId::Teacher(_) => Role::Teacher,
            SectionId::Admin(_) => Role::Admin,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Student(s) => s.key(),
            SectionId::Teacher(s) => s.key(),
            SectionId::Admin(s) => s.key(),
        }
    }

    pub fn entry(&self) -> SectionEntry {
        match *self {
            SectionId::Student(s) => s.descriptor().into(),
            SectionId::Teacher(s) => s.descriptor().into(),
            SectionId::Admin(s) => s.descriptor().into(),
        }
    }
}

impl From<StudentSection> for SectionId {
    fn from(s: StudentSection) -> Self {
        SectionId::Student(s)
    }
}

impl From<TeacherSection> for SectionId {
    fn from(s: TeacherSection) -> Self {
        SectionId::Teacher(s)
    }
}

impl From<AdminSection> for SectionId {
    fn from(s: AdminSection) -> Self {
        SectionId::Admin(s)
    }
}

impl TryFrom<SectionId> for StudentSection {
    type Error = AppError;

    fn try_from(id: SectionId) -> Result<Self, Self::Error> {
        match id {
            SectionId::Student(s) => Ok(s),
            other => Err(AppError::unknown_section(Role::Student.as_str(), other.key())),
        }
    }
}

impl TryFrom<SectionId> for TeacherSection {
    type Error = AppError;

    fn try_from(id: SectionId) -> Result<Self, Self::Error> {
        match id {
            SectionId::Teacher(s) => Ok(s),
            other => Err(AppError::unknown_section(Role::Teacher.as_str(), other.key())),
        }
    }
}

impl TryFrom<SectionId> for AdminSection {
    type Error = AppError;

    fn try_from(id: SectionId) -> Result<Self, Self::Error> {
        match id {
            SectionId::Admin(s) => Ok(s),
            other => Err(AppError::unknown_section(Role::Admin.as_str(), other.key())),
        }
    }
}

/// Role-erased menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub key: &'static str,
    pub label_ar: &'static str,
    pub label_en: &'static str,
    pub icon: IconRef,
}

impl SectionEntry {
    pub fn label(&self, lang: Language) -> &'static str {
        lang.pick(self.label_ar, self.label_en)
    }
}

impl<S: DashboardSection> From<SectionDescriptor<S>> for SectionEntry {
    fn from(d: SectionDescriptor<S>) -> Self {
        Self {
            id: d.id.into(),
            key: d.key,
            label_ar: d.label_ar,
            label_en: d.label_en,
            icon: d.icon,
        }
    }
}

/// Role-keyed lookups over the per-role section sets.
pub struct SectionRegistry;

impl SectionRegistry {
    /// Ordered entries for `role`, in sidebar order.
    pub fn entries(role: Role) -> Vec<SectionEntry> {
        role.sections()
    }

    pub fn contains(role: Role, id: SectionId) -> bool {
        Self::entries(role).iter().any(|e| e.id == id)
    }

    /// Strict lookup of `key` within `role`'s set.
    pub fn lookup(role: Role, key: &str) -> Result<SectionId, AppError> {
        Ok(match role {
            Role::Student => StudentSection::parse(key)?.into(),
            Role::Teacher => TeacherSection::parse(key)?.into(),
            Role::Admin => AdminSection::parse(key)?.into(),
        })
    }

    /// Lookup with fallback to the role's first section.
    pub fn resolve(role: Role, key: &str) -> SectionId {
        Self::lookup(role, key).unwrap_or_else(|_| role.default_section())
    }
}
