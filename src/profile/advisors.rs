//! Static advisor directory and study groups.

use super::store::UserRecord;

pub const DEFAULT_ADVISOR_PHOTO: &str = "../assets/default-avatar.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisor {
    pub name: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub knowledge: &'static str,
    pub contact: &'static str,
    pub avatar: &'static str,
}

impl Advisor {
    /// Text fields of the advisor card, keyed by element id.
    pub fn fields(&self) -> [(&'static str, &'static str); 5] {
        [
            ("adv-name", self.name),
            ("adv-role", self.position),
            ("adv-dept", self.department),
            ("adv-field", self.knowledge),
            ("adv-contact", self.contact),
        ]
    }

    pub fn photo(&self) -> &'static str {
        if self.avatar.is_empty() {
            DEFAULT_ADVISOR_PHOTO
        } else {
            self.avatar
        }
    }
}

/// What the advisor page shows for the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorView {
    /// Nobody is signed in; the page sends the visitor home.
    NoSession,
    /// The user's group has no advisor.
    Unassigned,
    Assigned(&'static Advisor),
}

impl AdvisorView {
    pub fn for_user(user: Option<&UserRecord>) -> Self {
        let Some(user) = user else { return Self::NoSession };
        match user.group.as_deref().and_then(advisor_for_group) {
            Some(advisor) => Self::Assigned(advisor),
            None => Self::Unassigned,
        }
    }
}

pub const GROUPS: [&str; 5] =
    ["ПИ 24-21", "ПИ 21-25", "ПИ 23-25", "ИС 11-25", "ИС 15-25"];

pub const ADVISORS: [Advisor; 5] = [
    Advisor {
        name: "Айгуль Тулегенова",
        position: "Старший эдвайзер",
        department: "Факультет Информационных технологий",
        knowledge: "Программная инженерия, базы данных",
        contact: "a.tulegenova@atu.edu.kz | +7 (727) 321-11-22",
        avatar: "../assets/advisors/aigul.jpg",
    },
    Advisor {
        name: "Александр Ким",
        position: "Эдвайзер кафедры ИС",
        department: "Кафедра Информационных систем",
        knowledge: "Сетевые технологии, кибербезопасность",
        contact: "a.kim@atu.edu.kz | +7 (727) 330-55-91",
        avatar: "../assets/advisors/kim.jpg",
    },
    Advisor {
        name: "Жанар Ахметова",
        position: "Эдвайзер",
        department: "Факультет Цифровых технологий",
        knowledge: "Информационные системы, аналитика данных",
        contact: "zh.akhmetova@atu.edu.kz | +7 (727) 318-20-48",
        avatar: "../assets/advisors/zh_akhmetova.jpg",
    },
    Advisor {
        name: "Руслан Ермеков",
        position: "Эдвайзер кафедры ПИ",
        department: "Кафедра программной инженерии",
        knowledge: "Frontend, Backend, JavaScript",
        contact: "r.yermekov@atu.edu.kz | +7 (727) 335-60-19",
        avatar: "../assets/advisors/ermekov.jpg",
    },
    Advisor {
        name: "Динара Сарсенова",
        position: "Эдвайзер",
        department: "Факультет информационных технологий",
        knowledge: "Информационная безопасность, базы данных",
        contact: "d.sarsenova@atu.edu.kz | +7 (727) 314-77-12",
        avatar: "../assets/advisors/sarsenova.jpg",
    },
];

const GROUP_ADVISORS: [(&str, &str); 5] = [
    ("ПИ 24-21", "Руслан Ермеков"),
    ("ПИ 21-25", "Айгуль Тулегенова"),
    ("ПИ 23-25", "Динара Сарсенова"),
    ("ИС 11-25", "Александр Ким"),
    ("ИС 15-25", "Жанар Ахметова"),
];

pub fn advisor_for_group(group: &str) -> Option<&'static Advisor> {
    let (_, name) = GROUP_ADVISORS.iter().find(|(g, _)| *g == group)?;
    ADVISORS.iter().find(|a| a.name == *name)
}

/// Maps a uniform roll in `[0, 1)` onto one of [`GROUPS`].
pub fn random_group(roll: f64) -> &'static str {
    let i = (roll.clamp(0.0, 1.0) * GROUPS.len() as f64) as usize;
    GROUPS[i.min(GROUPS.len() - 1)]
}
