// HTML builders shaped like the wiki's listing and detail pages.

use super::fetch::StaticFetcher;

pub const BASE: &str = "https://smite.fandom.com";
pub const LISTING: &str = "https://smite.fandom.com/wiki/List_of_gods";

pub fn god_url(name: &str) -> String {
    format!("{BASE}/wiki/{name}")
}

pub fn icon_raw(name: &str) -> String {
    format!("https://static.wikia.nocookie.net/smite/images/0/0a/T_{name}_Icon.png/revision/latest/scale-to-width-down/50?cb=20230101")
}

pub fn icon(name: &str) -> String {
    format!("https://static.wikia.nocookie.net/smite/images/0/0a/T_{name}_Icon.png")
}

pub fn card(name: &str) -> String {
    format!("https://static.wikia.nocookie.net/smite/images/1/1b/T_{name}_Default_Card.png")
}

pub fn listing_page(names: &[&str]) -> String {
    let mut rows = String::from("<tr><th>Icon</th><th>Name</th><th>Pantheon</th></tr>\n");
    for name in names {
        rows.push_str(&format!(
            "<tr><td><img src=\"x.png\"></td><td><a href=\"/wiki/{name}\" title=\"{name}\">{name}</a></td><td>Greek</td></tr>\n"
        ));
    }
    format!("<html><body><table class=\"blue-window\"><tbody>\n{rows}</tbody></table></body></html>")
}

pub struct GodPage {
    pub name: String,
    pub favor: String,
    pub gems: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub shifted: bool,
    pub with_voicelines: bool,
}

impl GodPage {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            favor: "\n5,500\n".to_string(),
            gems: "200".to_string(),
            prev: None,
            next: None,
            shifted: false,
            with_voicelines: true,
        }
    }

    pub fn favor(mut self, raw: &str) -> Self { self.favor = raw.to_string(); self }
    pub fn gems(mut self, raw: &str) -> Self { self.gems = raw.to_string(); self }
    pub fn prev(mut self, name: &str) -> Self { self.prev = Some(name.to_string()); self }
    pub fn next(mut self, name: &str) -> Self { self.next = Some(name.to_string()); self }
    pub fn shifted(mut self) -> Self { self.shifted = true; self }
    pub fn without_voicelines(mut self) -> Self { self.with_voicelines = false; self }

    pub fn html(&self) -> String {
        let name = &self.name;
        let slot = |neighbor: &Option<String>| match neighbor {
            Some(n) => format!(
                "<span><a href=\"/wiki/{n}\">{n}</a><span><a href=\"/wiki/{n}\"><img data-src=\"{}\" src=\"data:image/gif;base64,R0lGOD\"></a></span></span>",
                icon_raw(n)
            ),
            None => "<span></span>".to_string(),
        };
        let voicelines = if self.with_voicelines {
            format!("<a href=\"/wiki/{name}_voicelines\">Voicelines</a>")
        } else {
            "None".to_string()
        };
        let extra = if self.shifted { "<tr><td>Alias:</td><td>Something</td></tr>" } else { "" };

        format!(
            r#"<html><body>
<h1 class="title">
{name}
</h1>
<div class="blue-window"><p>{prev}{next}</p></div>
<table class="infobox"><tbody>
<tr><th colspan="2">{name}</th></tr>
<tr><td colspan="2"><a href="/wiki/File:{name}.png"><img data-src="{card}/revision/latest?cb=123" src="data:image/gif;base64,R0lGOD"></a></td></tr>
<tr><td colspan="2">God</td></tr>
<tr><td></td><td><b>Hero of the
Trojan War</b></td></tr>
{extra}
<tr><td>Pantheon:</td><td>
Greek
</td></tr>
<tr><td>Type:</td><td>Melee, Physical</td></tr>
<tr><td>Class:</td><td>Warrior</td></tr>
<tr><td>Pros:</td><td>High Defense, High Area Damage</td></tr>
<tr><td>Difficulty:</td><td>Average</td></tr>
<tr><td>Release date:</td><td>June 14, 2016</td></tr>
<tr><td>Favor:</td><td>{favor}</td></tr>
<tr><td>Gems:</td><td>{gems}</td></tr>
<tr><td>Voicelines:</td><td>{voicelines}</td></tr>
<tr><td>Voice actor:</td><td>Chris Guerrero</td></tr>
<tr><th colspan="2">Stats</th></tr>
<tr><td>Health:</td><td><font>599</font> (+80)</td></tr>
<tr><td>Mana:</td><td><font>200</font> (+35)</td></tr>
<tr><td>Speed:</td><td>375</td></tr>
<tr><td>Range:</td><td>12</td></tr>
<tr><td>Attack/Sec:</td><td>0.95 (+1.2%)</td></tr>
<tr><th colspan="2">Basic Attack</th></tr>
<tr><td>Damage:</td><td>39 (+2.25)</td></tr>
<tr><td>Progression:</td><td>1/1/1.5x damage and swing time</td></tr>
<tr><th colspan="2">Protections</th></tr>
<tr><td>Physical:</td><td>23 (+3)</td></tr>
<tr><td>Magical:</td><td>30 (+0.9)</td></tr>
<tr><th colspan="2">Regen</th></tr>
<tr><td>HP5:</td><td>9 (+0.72)</td></tr>
<tr><td>MP5:</td><td>4.7 (+0.4)</td></tr>
</tbody></table>
</body></html>"#,
            prev = slot(&self.prev),
            next = slot(&self.next),
            card = card(name),
            favor = self.favor,
            gems = self.gems,
        )
    }
}

/// A consistent site: listing in the given order, each page linking to its
/// listing neighbors.
pub fn site(names: &[&str]) -> StaticFetcher {
    let mut fetcher = StaticFetcher::new().page(LISTING, listing_page(names));
    for (i, name) in names.iter().enumerate() {
        let mut page = GodPage::new(name);
        if i > 0 { page = page.prev(names[i - 1]); }
        if i + 1 < names.len() { page = page.next(names[i + 1]); }
        fetcher = fetcher.page(god_url(name), page.html());
    }
    fetcher
}
