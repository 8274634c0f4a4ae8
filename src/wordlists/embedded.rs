//! Greeting-themed target words compiled into the binary.

/// Candidate target words for a randomly chosen puzzle
pub const GREETINGS: &[&str] = &[
    "HAPPY", "PARTY", "CAKES", "CANDY", "CHEER", "SMILE", "HEART", "SWEET", "TOAST", "MUSIC",
    "DANCE", "GIFTS", "BLOOM", "SUGAR", "HONEY", "LAUGH", "MAGIC", "PEACH", "FEAST", "SPARK",
    "CREAM", "BERRY", "LIGHT", "STARS", "HUGGY", "JOLLY", "MERRY", "WINGS", "DREAM", "GRACE",
];

/// Number of embedded greeting words
pub const GREETINGS_COUNT: usize = GREETINGS.len();
