use serde::{Deserialize, Serialize};

/// One playable god as scraped from its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GodRecord {
    pub name: String,
    pub link: String,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
    pub icon_url: Option<String>,
    pub card_image_url: Option<String>,
    pub summary: Summary,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub pantheon: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub class: String,
    pub pros: String,
    pub difficulty: String,
    pub release_date: String,
    pub favor: u32,
    pub gems: u32,
    pub voicelines: String,
    pub voice_actor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: String,
    pub mana: String,
    pub speed: String,
    pub range: String,
    pub attack_speed: String,
    pub basic_attack: BasicAttack,
    pub protection: Protection,
    pub regen: Regen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAttack { pub damage: String, pub progression: String }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protection { pub physical: String, pub magical: String }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regen { pub hp5: String, pub mp5: String }

// Run summary envelope payload
#[derive(Debug, Serialize)]
pub struct ScrapeSummary {
    pub listed: usize,
    pub records: usize,
    pub broken_links: usize,
    pub output: String,
}
