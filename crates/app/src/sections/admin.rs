use shared_types::{AdminSection, Language};

use super::SectionView;

impl SectionView for AdminSection {
    fn summary(self, lang: Language) -> &'static str {
        match self {
            AdminSection::Users => lang.pick(
                "إضافة المستخدمين وتعديل صلاحياتهم",
                "Add users and manage their roles",
            ),
            AdminSection::Link => lang.pick(
                "ربط حسابات أولياء الأمور بالطلاب",
                "Connect parent accounts to students",
            ),
            AdminSection::Academic => lang.pick("المراحل والمواد والفصول", "Grades, subjects and classes"),
            AdminSection::Schedule => lang.pick("توزيع الحصص على المدرسين", "Assign sessions to teachers"),
            AdminSection::Reports => lang.pick("مؤشرات نشاط المنصة", "Platform activity at a glance"),
            AdminSection::Notifications => lang.pick(
                "إرسال الإشعارات للمستخدمين",
                "Send notifications to users",
            ),
            AdminSection::Settings => lang.pick("الإعدادات العامة للمنصة", "General platform settings"),
        }
    }
}
