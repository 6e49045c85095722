use pretty_assertions::assert_eq;
use shared_types::{Edge, IconRef, Language, LocaleDirection, TextDirection};

#[test]
fn test_arabic_is_rtl() {
    let direction = LocaleDirection::for_language(Language::Ar);
    assert_eq!(direction.direction, TextDirection::Rtl);
    assert!(direction.is_rtl);
}

#[test]
fn test_english_is_ltr() {
    let direction = LocaleDirection::for_language(Language::En);
    assert_eq!(direction.direction, TextDirection::Ltr);
    assert!(!direction.is_rtl);
}

#[test]
fn test_direction_mapping_is_a_bijection() {
    let directions: Vec<TextDirection> = Language::ALL
        .iter()
        .map(|lang| LocaleDirection::for_language(*lang).direction)
        .collect();
    assert_eq!(directions.len(), 2);
    assert_ne!(directions[0], directions[1]);
}

#[test]
fn test_sidebar_anchors_to_leading_edge() {
    assert_eq!(LocaleDirection::for_language(Language::Ar).leading_edge(), Edge::Right);
    assert_eq!(LocaleDirection::for_language(Language::En).leading_edge(), Edge::Left);
}

#[test]
fn test_forward_chevron_points_toward_reading_direction() {
    assert_eq!(
        LocaleDirection::for_language(Language::Ar).forward_chevron(),
        IconRef::ChevronLeft
    );
    assert_eq!(
        LocaleDirection::for_language(Language::En).forward_chevron(),
        IconRef::ChevronRight
    );
}

#[test]
fn test_mirrored_layout_classes() {
    let ar = LocaleDirection::for_language(Language::Ar);
    let en = LocaleDirection::for_language(Language::En);
    assert_eq!(ar.row_class(), "flex-row-reverse");
    assert_eq!(en.row_class(), "flex-row");
    assert_eq!(ar.text_align_class(), "text-right");
    assert_eq!(en.text_align_class(), "text-left");
}
