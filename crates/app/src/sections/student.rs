use shared_types::{Language, StudentSection};

use super::SectionView;

impl SectionView for StudentSection {
    fn summary(self, lang: Language) -> &'static str {
        match self {
            StudentSection::Courses => lang.pick(
                "تابع تقدمك في كل مادة",
                "Track your progress in every subject",
            ),
            StudentSection::Schedule => lang.pick("مواعيد حصص الأسبوع", "This week's class times"),
            StudentSection::Recordings => lang.pick(
                "شاهد الحصص السابقة في أي وقت",
                "Watch past lessons any time",
            ),
            StudentSection::Homework => lang.pick(
                "الواجبات المطلوبة ومواعيد التسليم",
                "Assignments and due dates",
            ),
            StudentSection::Quizzes => lang.pick(
                "اختبر نفسك بكويزات قصيرة",
                "Test yourself with short quizzes",
            ),
            StudentSection::Achievements => lang.pick(
                "النقاط والأوسمة التي حققتها",
                "Points and badges you have earned",
            ),
            StudentSection::Contact => lang.pick(
                "تواصل مع مدرسيك وفريق الإدارة",
                "Reach your teachers and the admin team",
            ),
        }
    }
}
