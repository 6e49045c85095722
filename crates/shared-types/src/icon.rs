use serde::{Deserialize, Serialize};

/// Framework-neutral reference to a navigation icon.
///
/// The UI crate maps each variant to a concrete lucide glyph; this crate
/// only needs to name them so the section registry stays renderer-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconRef {
    BookOpen,
    Calendar,
    Video,
    PenTool,
    Brain,
    Trophy,
    Phone,
    Users,
    FileText,
    Activity,
    Link,
    Bell,
    Settings,
    ChevronLeft,
    ChevronRight,
}
