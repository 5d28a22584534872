//! Static catalog of wellness services and specialists.
//!
//! Mock data only. Lookups by id fall back to the id itself so that an
//! unknown selection still renders.

/// A bookable wellness service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub id: &'static str,
    /// Card title on the service screen
    pub title: &'static str,
    /// Name used on the review and confirmation screens
    pub session_name: &'static str,
    pub description: &'static str,
    /// What the guide says once this service is chosen
    pub guide_hint: &'static str,
    pub toast_title: &'static str,
    pub toast_message: &'static str,
}

/// A specialist the user can book with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specialist {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub rating: f32,
    pub specialties: [&'static str; 2],
}

pub const SERVICES: [Service; 4] = [
    Service {
        id: "spa",
        title: "Spa Treatment",
        session_name: "Spa Treatment",
        description: "Relax with our therapeutic spa treatments designed to calm your mind and body.",
        guide_hint: "Spa treatments help your body relax and rejuvenate!",
        toast_title: "✨ Spa Magic Selected",
        toast_message: "You've chosen a relaxing spa journey. Bubbles of tranquility await!",
    },
    Service {
        id: "yoga",
        title: "Yoga Session",
        session_name: "Yoga Session",
        description: "Stretch, strengthen, and find your inner balance with our yoga classes.",
        guide_hint: "Yoga brings balance to both body and mind.",
        toast_title: "🧘 Yoga Path Selected",
        toast_message: "The yoga journey will bring balance to your energy. Breathe deeply!",
    },
    Service {
        id: "therapy",
        title: "Therapy",
        session_name: "Therapy Session",
        description: "Professional mental wellness therapy sessions to support your emotional health.",
        guide_hint: "A journey of healing begins with a single step.",
        toast_title: "💫 Therapy Quest Selected",
        toast_message: "You've chosen the path of inner healing. Your guide awaits!",
    },
    Service {
        id: "meditation",
        title: "Meditation",
        session_name: "Meditation Session",
        description: "Guided meditation sessions to help reduce stress and increase mindfulness.",
        guide_hint: "Meditation brings clarity and inner peace.",
        toast_title: "🌟 Meditation Circle Selected",
        toast_message: "The meditation journey will calm your mind. Peace surrounds you!",
    },
];

pub const SPECIALISTS: [Specialist; 4] = [
    Specialist {
        id: "emma",
        name: "Emma Johnson",
        title: "Wellness Expert",
        rating: 4.9,
        specialties: ["Massage Therapy", "Aromatherapy"],
    },
    Specialist {
        id: "michael",
        name: "Michael Chen",
        title: "Yoga Instructor",
        rating: 4.8,
        specialties: ["Hatha Yoga", "Meditation"],
    },
    Specialist {
        id: "sarah",
        name: "Sarah Williams",
        title: "Therapist",
        rating: 5.0,
        specialties: ["Cognitive Therapy", "Stress Management"],
    },
    Specialist {
        id: "david",
        name: "David Patel",
        title: "Meditation Guide",
        rating: 4.7,
        specialties: ["Mindfulness", "Sound Healing"],
    },
];

/// Find a service by id
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Find a specialist by id
pub fn find_specialist(id: &str) -> Option<&'static Specialist> {
    SPECIALISTS.iter().find(|s| s.id == id)
}

/// Session name for a service id, or the id when it is not in the catalog
pub fn service_name(id: &str) -> &str {
    find_service(id).map(|s| s.session_name).unwrap_or(id)
}

/// Full name for a specialist id, or the id when it is not in the catalog
pub fn specialist_name(id: &str) -> &str {
    find_specialist(id).map(|s| s.name).unwrap_or(id)
}
