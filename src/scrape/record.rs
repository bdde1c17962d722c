use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::error::ScrapeError;
use super::normalize::{absolute_url, canonical_image_url, normalize, parse_count};
use super::types::{BasicAttack, GodRecord, Protection, Regen, Stats, Summary};

const NAME: &str = ".title";
const INFOBOX_ROWS: &str = ".infobox > tbody > tr";

/// What to read out of a located cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// All text under the cell.
    Text,
    /// Text of the first element child, which must be this tag.
    Wrapped(&'static str),
    /// `href` of an anchor child; may be absent.
    Href,
    /// `data-src` of `a:nth-child(1) > img:nth-child(1)`.
    Image,
}

/// Where one infobox field lives. `row` and `column` are 1-based like the
/// markup's `nth-child`; `label` is the row's first-cell caption when it has one.
#[derive(Clone, Copy, Debug)]
pub struct Locator {
    pub field: &'static str,
    pub label: Option<&'static str>,
    pub row: usize,
    pub column: usize,
    pub cell: Cell,
}

const fn at(field: &'static str, label: Option<&'static str>, row: usize, column: usize, cell: Cell) -> Locator {
    Locator { field, label, row, column, cell }
}

// Infobox layout, in row order. A layout change is an edit here.
const CARD: Locator = at("card_image_url", None, 2, 1, Cell::Image);
const TITLE: Locator = at("summary.title", None, 4, 2, Cell::Wrapped("b"));
const PANTHEON: Locator = at("summary.pantheon", Some("Pantheon"), 5, 2, Cell::Text);
const KIND: Locator = at("summary.type", Some("Type"), 6, 2, Cell::Text);
const CLASS: Locator = at("summary.class", Some("Class"), 7, 2, Cell::Text);
const PROS: Locator = at("summary.pros", Some("Pros"), 8, 2, Cell::Text);
const DIFFICULTY: Locator = at("summary.difficulty", Some("Difficulty"), 9, 2, Cell::Text);
const RELEASE_DATE: Locator = at("summary.release_date", Some("Release date"), 10, 2, Cell::Text);
const FAVOR: Locator = at("summary.favor", Some("Favor"), 11, 2, Cell::Text);
const GEMS: Locator = at("summary.gems", Some("Gems"), 12, 2, Cell::Text);
const VOICELINES: Locator = at("summary.voicelines", Some("Voicelines"), 13, 2, Cell::Href);
const VOICE_ACTOR: Locator = at("summary.voice_actor", Some("Voice actor"), 14, 2, Cell::Text);
const HEALTH: Locator = at("stats.health", Some("Health"), 16, 2, Cell::Wrapped("font"));
const MANA: Locator = at("stats.mana", Some("Mana"), 17, 2, Cell::Wrapped("font"));
const SPEED: Locator = at("stats.speed", Some("Speed"), 18, 2, Cell::Text);
const RANGE: Locator = at("stats.range", Some("Range"), 19, 2, Cell::Text);
const ATTACK_SPEED: Locator = at("stats.attack_speed", Some("Attack/Sec"), 20, 2, Cell::Text);
const DAMAGE: Locator = at("stats.basic_attack.damage", Some("Damage"), 22, 2, Cell::Text);
const PROGRESSION: Locator = at("stats.basic_attack.progression", Some("Progression"), 23, 2, Cell::Text);
const PHYSICAL: Locator = at("stats.protection.physical", Some("Physical"), 25, 2, Cell::Text);
const MAGICAL: Locator = at("stats.protection.magical", Some("Magical"), 26, 2, Cell::Text);
const HP5: Locator = at("stats.regen.hp5", Some("HP5"), 28, 2, Cell::Text);
const MP5: Locator = at("stats.regen.mp5", Some("MP5"), 29, 2, Cell::Text);

/// Builds a record from one detail page. Neighbor links and the icon are
/// filled in later by the linking pass.
pub fn extract_record(doc: &Html, link: &str, base: &Url) -> Result<GodRecord, ScrapeError> {
    let name_sel = Selector::parse(NAME).map_err(|_| ScrapeError::missing("name", link))?;
    let name = doc
        .select(&name_sel)
        .next()
        .map(|el| normalize(Some(&el.text().collect::<String>())))
        .ok_or_else(|| ScrapeError::missing("name", link))?;

    let infobox = Infobox::new(doc, link)?;

    let voicelines_href = infobox.read(&VOICELINES)?;
    let voicelines = absolute_url(base, &normalize(voicelines_href.as_deref()))?;

    Ok(GodRecord {
        name,
        link: link.to_string(),
        prev_link: None,
        next_link: None,
        icon_url: None,
        card_image_url: Some(infobox.field(&CARD)?),
        summary: Summary {
            title: infobox.field(&TITLE)?,
            pantheon: infobox.field(&PANTHEON)?,
            kind: infobox.field(&KIND)?,
            class: infobox.field(&CLASS)?,
            pros: infobox.field(&PROS)?,
            difficulty: infobox.field(&DIFFICULTY)?,
            release_date: infobox.field(&RELEASE_DATE)?,
            favor: infobox.count(&FAVOR)?,
            gems: infobox.count(&GEMS)?,
            voicelines,
            voice_actor: infobox.field(&VOICE_ACTOR)?,
        },
        stats: Stats {
            health: infobox.field(&HEALTH)?,
            mana: infobox.field(&MANA)?,
            speed: infobox.field(&SPEED)?,
            range: infobox.field(&RANGE)?,
            attack_speed: infobox.field(&ATTACK_SPEED)?,
            basic_attack: BasicAttack {
                damage: infobox.field(&DAMAGE)?,
                progression: infobox.field(&PROGRESSION)?,
            },
            protection: Protection {
                physical: infobox.field(&PHYSICAL)?,
                magical: infobox.field(&MAGICAL)?,
            },
            regen: Regen {
                hp5: infobox.field(&HP5)?,
                mp5: infobox.field(&MP5)?,
            },
        },
    })
}

struct Infobox<'a> {
    rows: Vec<ElementRef<'a>>,
    page: &'a str,
}

impl<'a> Infobox<'a> {
    fn new(doc: &'a Html, page: &'a str) -> Result<Self, ScrapeError> {
        let sel = Selector::parse(INFOBOX_ROWS).map_err(|_| ScrapeError::missing("infobox", page))?;
        let rows: Vec<_> = doc.select(&sel).collect();
        if rows.is_empty() {
            return Err(ScrapeError::missing("infobox", page));
        }
        Ok(Self { rows, page })
    }

    fn missing(&self, loc: &Locator) -> ScrapeError {
        ScrapeError::missing(loc.field, self.page)
    }

    // Caption match first, positional row as the fallback.
    fn row(&self, loc: &Locator) -> Option<ElementRef<'a>> {
        loc.label
            .and_then(|label| {
                self.rows.iter().copied().find(|row| {
                    children(*row)
                        .next()
                        .map(|first| caption_matches(&first.text().collect::<String>(), label))
                        .unwrap_or(false)
                })
            })
            .or_else(|| self.rows.get(loc.row.checked_sub(1)?).copied())
    }

    fn cell(&self, loc: &Locator) -> Result<ElementRef<'a>, ScrapeError> {
        let row = self.row(loc).ok_or_else(|| self.missing(loc))?;
        children(row)
            .nth(loc.column.saturating_sub(1))
            .ok_or_else(|| self.missing(loc))
    }

    /// Reads a cell the way its locator's shape says. Only `Href` may come
    /// back empty.
    fn read(&self, loc: &Locator) -> Result<Option<String>, ScrapeError> {
        let cell = self.cell(loc)?;
        let value = match loc.cell {
            Cell::Text => Some(normalize(Some(&cell.text().collect::<String>()))),
            Cell::Wrapped(tag) => {
                let node = nth_child_named(cell, 0, tag).ok_or_else(|| self.missing(loc))?;
                Some(normalize(Some(&node.text().collect::<String>())))
            }
            Cell::Href => children(cell)
                .find(|el| el.value().name() == "a")
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
            Cell::Image => {
                let src = nth_child_named(cell, 0, "a")
                    .and_then(|a| nth_child_named(a, 0, "img"))
                    .and_then(|img| img.value().attr("data-src"))
                    .ok_or_else(|| self.missing(loc))?;
                Some(canonical_image_url(src))
            }
        };
        Ok(value)
    }

    fn field(&self, loc: &Locator) -> Result<String, ScrapeError> {
        self.read(loc)?.ok_or_else(|| self.missing(loc))
    }

    fn count(&self, loc: &Locator) -> Result<u32, ScrapeError> {
        let raw = self.field(loc)?;
        parse_count(&raw).ok_or_else(|| ScrapeError::FieldParse {
            field: loc.field,
            raw,
            url: self.page.to_string(),
        })
    }
}

fn children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

fn nth_child_named<'a>(el: ElementRef<'a>, n: usize, tag: &str) -> Option<ElementRef<'a>> {
    children(el).nth(n).filter(|child| child.value().name() == tag)
}

fn caption_matches(raw: &str, label: &str) -> bool {
    let caption = normalize(Some(raw));
    caption.trim_end_matches(':').trim().eq_ignore_ascii_case(label)
}
