use pretty_assertions::assert_eq;
use shared_types::{
    AdminSection, AppErrorKind, Language, Role, SectionId, SectionRegistry, StudentSection,
    TeacherSection,
};

#[test]
fn test_every_role_has_seven_sections() {
    for role in Role::ALL {
        assert_eq!(SectionRegistry::entries(role).len(), 7, "{role:?}");
    }
}

#[test]
fn test_menu_order_is_stable() {
    let first = SectionRegistry::entries(Role::Teacher);
    let second = SectionRegistry::entries(Role::Teacher);
    assert_eq!(first, second);
}

#[test]
fn test_first_entry_is_the_default() {
    for role in Role::ALL {
        assert_eq!(SectionRegistry::entries(role)[0].id, role.default_section());
    }
}

#[test]
fn test_lookup_is_scoped_to_role() {
    assert_eq!(
        SectionRegistry::lookup(Role::Teacher, "students").unwrap(),
        SectionId::Teacher(TeacherSection::Students)
    );
    let err = SectionRegistry::lookup(Role::Student, "students").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::UnknownSection);
}

#[test]
fn test_resolve_falls_back_to_first_section() {
    assert_eq!(
        SectionRegistry::resolve(Role::Admin, "nonexistent"),
        SectionId::Admin(AdminSection::Users)
    );
    assert_eq!(
        SectionRegistry::resolve(Role::Student, "quizzes"),
        SectionId::Student(StudentSection::Quizzes)
    );
}

#[test]
fn test_entries_carry_both_labels() {
    for role in Role::ALL {
        for entry in SectionRegistry::entries(role) {
            assert!(!entry.label(Language::Ar).is_empty());
            assert!(!entry.label(Language::En).is_empty());
            assert_ne!(entry.label(Language::Ar), entry.label(Language::En));
        }
    }
}

#[test]
fn test_section_id_serializes_role_tagged() {
    let id = SectionId::Student(StudentSection::Quizzes);
    let json = serde_json::to_value(id).unwrap();
    assert_eq!(json, serde_json::json!({"role": "student", "section": "quizzes"}));

    let back: SectionId = serde_json::from_value(json).unwrap();
    assert_eq!(back, id);
}
