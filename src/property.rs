//! Curated site content: image sequences for the carousels, the feature
//! showcase entries and the unit plans. Sequences are fixed at configuration
//! time and non-empty; imagery ships with the deployed assets directory.

pub static HERO_IMAGES: [&str; 4] = [
    "/assets/day-b4.png",
    "/assets/night-b1.png",
    "/assets/day-b2.png",
    "/assets/night-a1.png",
];

/// Shared by the lifestyle slider and the lightbox gallery.
pub static GALLERY_IMAGES: [&str; 11] = [
    "/assets/day-b4.png",
    "/assets/night-b1.png",
    "/assets/day-b2.png",
    "/assets/night-a1.png",
    "/assets/day-a1.png",
    "/assets/day-a2.png",
    "/assets/day-b3.png",
    "/assets/terrace-1.png",
    "/assets/terrace-2.png",
    "/assets/night-b3.png",
    "/assets/night-a2.png",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyFeature {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tag: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [PropertyFeature; 4] = [
    PropertyFeature {
        title: "幾何美學",
        subtitle: "Modern Geometry",
        tag: "Exterior",
        image: "/assets/day-b3.png",
        description: "純粹的幾何線條，勾勒出當代建築的力度。白色量體與光影交織，展現極簡主義的深邃內涵。",
    },
    PropertyFeature {
        title: "層疊綠意",
        subtitle: "Vertical Garden",
        tag: "Nature",
        image: "/assets/terrace-1.png",
        description: "戶戶規劃寬敞露台，將自然綠意垂直延伸。每一次呼吸，都是芬多精的洗禮。",
    },
    PropertyFeature {
        title: "極致採光",
        subtitle: "Natural Light",
        tag: "WIND/LIGHT",
        image: "/assets/day-b2.png",
        description: "大面落地窗設計，引進充沛自然光線。室內外界線消弭，空間更顯開闊通透。",
    },
    PropertyFeature {
        title: "空中花園",
        subtitle: "Rooftop Lounge",
        tag: "Lifestyle",
        image: "/assets/terrace-2.png",
        description: "頂樓空中花園，盡覽城市天際線。是晨間瑜伽或夜間小酌的最佳場域。",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitPlan {
    pub name: &'static str,
    pub unit_type: &'static str,
    pub details: &'static [&'static str],
}

pub static UNIT_PLANS: [UnitPlan; 3] = [
    UnitPlan {
        name: "微風透天",
        unit_type: "Townhouse",
        details: &[
            "建坪 37.65 坪",
            "地坪 24.91 坪",
            "私人雙車",
            "景觀露台",
            "前後採光",
            "即刻入住",
        ],
    },
    UnitPlan {
        name: "花園別墅",
        unit_type: "NATURE VILLA",
        details: &[
            "建坪 48.03 坪",
            "地坪 36.83 坪",
            "私人雙車",
            "景觀大露台",
            "三面採光",
            "即刻入住",
        ],
    },
    UnitPlan {
        name: "VIP 賞屋",
        unit_type: "Private Tour",
        details: &["專人導覽", "專屬停車", "深度體驗"],
    },
];

pub const BOOKING_URL: &str = "https://airtable.com/appOXggP5iMqw6b2k/pagDfvjwcVkEvbFYZ/form";
