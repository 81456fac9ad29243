//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::StatIcon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuBuilding2 as Building, LuCalendar as Calendar,
        LuChevronDown as ChevronDown, LuCircleAlert as Alert, LuCircleCheck as Check,
        LuClock as Clock, LuExternalLink as ExternalLink, LuHeart as Heart, LuMapPin as MapPin,
        LuPhone as Phone, LuSearch as Search, LuSend as Send, LuStar as Star, LuUsers as Users,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBoxArrowUpRight as ExternalLink, BsBuilding as Building,
        BsCalendarEvent as Calendar, BsCheckCircleFill as Check, BsChevronDown as ChevronDown,
        BsClock as Clock, BsExclamationCircleFill as Alert, BsGeoAltFill as MapPin,
        BsHeartFill as Heart, BsPeople as Users, BsSearch as Search, BsSend as Send,
        BsStarFill as Star, BsTelephone as Phone, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(BUILDING, Building);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(ALERT, Alert);
themed_icon!(CHECK, Check);
themed_icon!(CLOCK, Clock);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(HEART, Heart);
themed_icon!(MAP_PIN, MapPin);
themed_icon!(PHONE, Phone);
themed_icon!(SEARCH, Search);
themed_icon!(SEND, Send);
themed_icon!(STAR, Star);
themed_icon!(USERS, Users);

/// Icon for a statistic card.
pub const fn stat_icon(icon: StatIcon) -> Icon {
    match icon {
        StatIcon::Building => BUILDING,
        StatIcon::People => USERS,
        StatIcon::Calendar => CALENDAR,
        StatIcon::Heart => HEART,
    }
}
