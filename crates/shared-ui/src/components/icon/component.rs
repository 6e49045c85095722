use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBell, LdBookOpen, LdBrain, LdCalendar, LdChevronLeft, LdChevronRight,
    LdFileText, LdLink, LdPenTool, LdPhone, LdSettings, LdTrophy, LdUsers, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::IconRef;

/// Render a lucide glyph for an [`IconRef`].
#[component]
pub fn NavIcon(icon: IconRef, #[props(default = 20)] size: u32) -> Element {
    match icon {
        IconRef::BookOpen => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        IconRef::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        IconRef::Video => rsx! { Icon::<LdVideo> { icon: LdVideo, width: size, height: size } },
        IconRef::PenTool => rsx! { Icon::<LdPenTool> { icon: LdPenTool, width: size, height: size } },
        IconRef::Brain => rsx! { Icon::<LdBrain> { icon: LdBrain, width: size, height: size } },
        IconRef::Trophy => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: size, height: size } },
        IconRef::Phone => rsx! { Icon::<LdPhone> { icon: LdPhone, width: size, height: size } },
        IconRef::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        IconRef::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        IconRef::Activity => rsx! { Icon::<LdActivity> { icon: LdActivity, width: size, height: size } },
        IconRef::Link => rsx! { Icon::<LdLink> { icon: LdLink, width: size, height: size } },
        IconRef::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        IconRef::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        IconRef::ChevronLeft => {
            rsx! { Icon::<LdChevronLeft> { icon: LdChevronLeft, width: size, height: size } }
        }
        IconRef::ChevronRight => {
            rsx! { Icon::<LdChevronRight> { icon: LdChevronRight, width: size, height: size } }
        }
    }
}
