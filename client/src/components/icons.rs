//! Inline SVG icons (24px stroke set).

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowLeft,
    ArrowRight,
    Calendar,
    ChevronDown,
    Close,
    Help,
    Info,
    Link,
    Mail,
    Menu,
    Message,
    Monitor,
    Moon,
    QrCode,
    Search,
    Sun,
    Tag,
    Users,
    VolumeOff,
    VolumeOn,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowLeft => &["M19 12H5", "M12 19l-7-7 7-7"],
            Self::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Self::Calendar => &["M3 4h18v18H3z", "M16 2v4", "M8 2v4", "M3 10h18"],
            Self::ChevronDown => &["M6 9l6 6 6-6"],
            Self::Close => &["M18 6L6 18", "M6 6l12 12"],
            Self::Help => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            Self::Info => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 16v-4", "M12 8h.01"],
            Self::Link => &[
                "M10 13a5 5 0 0 0 7.5.5l3-3a5 5 0 0 0-7-7l-1.7 1.7",
                "M14 11a5 5 0 0 0-7.5-.5l-3 3a5 5 0 0 0 7 7l1.7-1.7",
            ],
            Self::Mail => &["M4 4h16v16H4z", "M22 6l-10 7L2 6"],
            Self::Menu => &["M3 12h18", "M3 6h18", "M3 18h18"],
            Self::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Monitor => &["M2 3h20v14H2z", "M8 21h8", "M12 17v4"],
            Self::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"],
            Self::QrCode => &["M3 3h7v7H3z", "M14 3h7v7h-7z", "M3 14h7v7H3z", "M14 14h3v3h-3z", "M20 20h1v1h-1z"],
            Self::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            Self::Sun => &[
                "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
                "M12 1v2",
                "M12 21v2",
                "M4.2 4.2l1.4 1.4",
                "M18.4 18.4l1.4 1.4",
                "M1 12h2",
                "M21 12h2",
                "M4.2 19.8l1.4-1.4",
                "M18.4 5.6l1.4-1.4",
            ],
            Self::Tag => &["M20.6 13.4l-7.2 7.2a2 2 0 0 1-2.8 0L2 12V2h10l8.6 8.6a2 2 0 0 1 0 2.8z", "M7 7h.01"],
            Self::Users => &[
                "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M23 21v-2a4 4 0 0 0-3-3.9",
                "M16 3.1a4 4 0 0 1 0 7.8",
            ],
            Self::VolumeOff => &["M11 5L6 9H2v6h4l5 4z", "M23 9l-6 6", "M17 9l6 6"],
            Self::VolumeOn => &["M11 5L6 9H2v6h4l5 4z", "M15.5 8.5a5 5 0 0 1 0 7", "M19 5a10 10 0 0 1 0 14"],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
