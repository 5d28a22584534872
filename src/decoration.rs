/// Decorative randomness
///
/// Sparkle positions, the quote of the day, the testimonial carousel and the
/// assistant tips. This is seeded on its own and never looks at wizard state,
/// so the booking flow stays deterministic whatever the frontend draws around it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sparkles drawn on every screen change
pub const DEFAULT_SPARKLE_COUNT: usize = 15;

/// One sparkle particle, positioned in percent of the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    /// Seconds
    pub duration: f32,
    /// Seconds
    pub delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub service: &'static str,
    pub text: &'static str,
}

pub const QUOTES: [Quote; 3] = [
    Quote {
        text: "Peace comes from within. Do not seek it without.",
        author: "Buddha",
    },
    Quote {
        text: "The greatest weapon against stress is our ability to choose one thought over another.",
        author: "William James",
    },
    Quote {
        text: "In the midst of movement and chaos, keep stillness inside of you.",
        author: "Deepak Chopra",
    },
];

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        author: "Jessica M.",
        service: "spa",
        text: "The spa treatment was absolutely divine. I felt years of stress melt away with each moment. The staff was attentive and professional.",
    },
    Testimonial {
        author: "Robert L.",
        service: "yoga",
        text: "I've tried many yoga studios, but none compare to the peaceful atmosphere and expert guidance I received here. I'll definitely be back!",
    },
    Testimonial {
        author: "Angela T.",
        service: "therapy",
        text: "My therapy sessions have been transformative. I've gained new perspectives and tools to manage my stress and anxiety in a healthy way.",
    },
    Testimonial {
        author: "Daniel K.",
        service: "meditation",
        text: "The guided meditation was exactly what I needed. The peaceful environment and expert instruction helped me achieve a level of calm I hadn't experienced before.",
    },
];

/// Wellness assistant tips, shown one at a time
pub const TIPS: [&str; 5] = [
    "Take your time exploring our services - each is designed to nurture a different aspect of wellness.",
    "Our specialists are certified professionals with years of experience in their fields.",
    "Not sure what you need? Try our spa treatment for overall relaxation and rejuvenation.",
    "Booking multiple sessions? We offer package discounts for regular clients.",
    "Remember to arrive 15 minutes before your scheduled appointment time.",
];

/// Seeded generator for decorative parameters
pub struct DecorationGenerator {
    rng: StdRng,
}

impl DecorationGenerator {
    /// Same seed, same decorations
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, random otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn sparkles(&mut self, count: usize) -> Vec<Sparkle> {
        (0..count)
            .map(|_| Sparkle {
                x: self.rng.gen_range(0.0..100.0),
                y: self.rng.gen_range(0.0..100.0),
                duration: 0.8 + self.rng.gen::<f32>(),
                delay: self.rng.gen_range(0.0..0.3),
            })
            .collect()
    }

    pub fn quote(&mut self) -> Quote {
        QUOTES[self.rng.gen_range(0..QUOTES.len())]
    }

    /// Testimonial for carousel position `index`; wraps around
    pub fn testimonial(index: usize) -> Testimonial {
        TESTIMONIALS[index % TESTIMONIALS.len()]
    }

    /// Assistant tip at `index`; wraps around
    pub fn tip(index: usize) -> &'static str {
        TIPS[index % TIPS.len()]
    }
}
