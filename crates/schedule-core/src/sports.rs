/// Sport names reserved for general/ceremony rows. Entries carrying one of
/// these get a dedicated top lane and never appear in the sport facet.
pub const DEFAULT_GENERAL_SPORTS: [&str; 2] = ["General", "Ceremony"];

const DISPLAY_NAMES: [(&str, &str); 18] = [
    ("Alpine", "Alpin"),
    ("Biathlon", "Skidskytte"),
    ("Bobsled", "Bob"),
    ("Ceremony", "Ceremoni"),
    ("Cross-Country", "Längdskidor"),
    ("Curling", "Curling"),
    ("Figure Skating", "Konståkning"),
    ("Freestyle", "Freestyle"),
    ("General", "Allmänt"),
    ("Ice Hockey", "Ishockey"),
    ("Luge", "Rodel"),
    ("Nordic Combined", "Nordisk kombination"),
    ("Short Track", "Kortbaneskridskor"),
    ("Skeleton", "Skeleton"),
    ("Ski Jumping", "Backhoppning"),
    ("Ski Mountaineering", "Skidalpinism"),
    ("Snowboard", "Snowboard"),
    ("Speed Skating", "Skridskor"),
];

/// Swedish display name for a sport category; unknown names pass through.
pub fn sport_display_name(sport: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(name, _)| *name == sport)
        .map(|(_, display)| *display)
        .unwrap_or(sport)
}
