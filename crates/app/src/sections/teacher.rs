use shared_types::{Language, TeacherSection};

use super::SectionView;

impl SectionView for TeacherSection {
    fn summary(self, lang: Language) -> &'static str {
        match self {
            TeacherSection::Courses => lang.pick("الكورسات التي تدرّسها", "Courses you teach"),
            TeacherSection::Students => lang.pick("متابعة أداء الطلاب", "Follow student performance"),
            TeacherSection::Homework => lang.pick("إنشاء الواجبات وتصحيحها", "Create and grade homework"),
            TeacherSection::Content => lang.pick("رفع الحصص والملفات", "Upload lessons and files"),
            TeacherSection::Schedule => lang.pick("جدول حصصك الأسبوعي", "Your weekly timetable"),
            TeacherSection::Reports => lang.pick("تقارير شهرية عن فصولك", "Monthly class reports"),
            TeacherSection::Contact => lang.pick("راسل إدارة المنصة", "Message the platform admins"),
        }
    }
}
