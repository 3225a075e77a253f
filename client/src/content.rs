//! Static city content shown on the panels.
//!
//! Opaque display data: the core never reads it, and nothing here changes at
//! runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use sheher::feedback::FeedbackKind;
use sheher::view::{RouteChoice, Tab};

pub const GREETING: &str = "Khamma Ghani 🙏";
pub const TAGLINE: &str = "Udaipur bolto sheher";
pub const LOGIN_INVITE: &str = "Apne sheher me aao";
pub const LOGIN_FOOTER: &str = "Apno sheher, apni zimmedari";
pub const DEMO_CREDENTIALS_HINT: &str = "Username: admin | Password: password";
pub const THANK_YOU: &str = "Dhanyavaad! Aapki madad ka dhanyavaad.";
pub const NARRATOR_TITLE: &str = "Sheher kahe...";
pub const ROUTES_FEEDBACK_PROMPT: &str = "Ee rasto kaiso laagyo?";
pub const UPDATES_FEEDBACK_PROMPT: &str = "Aaj ri khabar kaisi lagi?";
pub const UPDATES_TITLE: &str = "Aaj ri khabar";
pub const PLACES_TITLE: &str = "Heritage ri jagah";
pub const VISIT_TIP: &str = "💫 Yaad rakho: Apni heritage sambhalo. Saaf-suthra rakho, maan rakho.";

/// One time-slotted city update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CityUpdate {
    pub period: &'static str,
    pub time: &'static str,
    pub message: &'static str,
}

pub const CITY_UPDATES: [CityUpdate; 3] = [
    CityUpdate {
        period: "🌅 Subah",
        time: "Subah (7 baje)",
        message: "City Palace aaju shaant re. Ghoomne ka accho time hai.",
    },
    CityUpdate {
        period: "🌞 Dopahar",
        time: "Dopahar (2 baje)",
        message: "Hawa Mahal jaane ka rasto thoda rujh re. Baad me jana theek rahega.",
    },
    CityUpdate {
        period: "🌆 Shaam",
        time: "Shaam (6 baje)",
        message: "Lake ke kinare sunset dekhne bahut log aawo. Shanti se baitho.",
    },
];

/// Highlighted card on the updates panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeCard {
    pub title: &'static str,
    pub message: &'static str,
}

pub const LAKE_STATUS: NoticeCard = NoticeCard {
    title: "Pichola ri haalat",
    message: "Aaj thodi naram hai. Paani sambhaljo. Lake saaf rakho, apno Udaipur sundar rakho.",
};

pub const WEATHER_NOTE: NoticeCard = NoticeCard {
    title: "Mausam ri baat",
    message: "Aaj thandi hawa chaal ri hai. Shawl leke niklo. Shaam tak suhano mausam rahego.",
};

/// Point of interest on the places panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeritagePlace {
    pub name: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub timings: &'static str,
}

pub const HERITAGE_PLACES: [HeritagePlace; 3] = [
    HeritagePlace {
        name: "City Palace",
        description: "Apno sheher ro dil. Mewadon ri kahani yaade bolti.",
        tagline: "Mewar ri pehchan.",
        timings: "Subah (9) - Shaam (5)",
    },
    HeritagePlace {
        name: "Lake Pichola",
        description: "Udaipur ri aankh. Shanti ane sukoon ko nivas.",
        tagline: "Jeevan ka aaina.",
        timings: "Poora din khula",
    },
    HeritagePlace {
        name: "Saheliyon ki Bari",
        description: "Rani-maharaniyon ro bageeche. Hara-bhara shaant thikana.",
        tagline: "Prakriti ane kala ka sangam.",
        timings: "Subah (8) - Shaam (7)",
    },
];

#[must_use]
pub fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Routes => "Rasta",
        Tab::Updates => "Khabar",
        Tab::Places => "Jagah",
    }
}

#[must_use]
pub fn route_label(route: RouteChoice) -> &'static str {
    match route {
        RouteChoice::Fast => "Fast Rasto",
        RouteChoice::Calm => "Shaant Rasto 🌿",
    }
}

/// What the narrator card says about the chosen route.
#[must_use]
pub fn route_narration(route: RouteChoice) -> &'static str {
    match route {
        RouteChoice::Calm => "Ee rasto subah-subah shaant re. Dheere chalo, aaram se.",
        RouteChoice::Fast => "Ee rasto tez re, par thodi bheed ho sakti hai.",
    }
}

/// Emoji and caption for a feedback button.
#[must_use]
pub fn feedback_label(kind: FeedbackKind) -> (&'static str, &'static str) {
    match kind {
        FeedbackKind::Calm => ("😊", "Shaant"),
        FeedbackKind::Okay => ("😐", "Theek-thaak"),
        FeedbackKind::Heavy => ("😟", "Bojh laagyo"),
        FeedbackKind::Helpful => ("😊", "Madad mili"),
        FeedbackKind::NotUseful => ("😟", "Kaam na aai"),
    }
}
