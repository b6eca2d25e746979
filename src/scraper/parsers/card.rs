//! Card detail page parser for gatherer.wizards.com.
//!
//! A detail page holds one `td.cardComponentContainer` per card face. Split,
//! flip, transform and meld cards put several faces on the same page, so the
//! parser first picks the fragment for the requested face and then runs every
//! field extractor against it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::row::{element_text, find_row, require_row, selector, value_cell, value_text};
use crate::scraper::error::ScrapeError;

/// Query parameter naming the face of a multi-faced card
pub const PART_PARAM: &str = "part";

static FRAGMENT: LazyLock<Selector> = LazyLock::new(|| selector("td.cardComponentContainer"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static CARD_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img[id*='cardImage']"));
static VALUE: LazyLock<Selector> = LazyLock::new(|| selector("div.value"));
static TEXT_BOX: LazyLock<Selector> = LazyLock::new(|| selector("div.cardtextbox"));
static DIV: LazyLock<Selector> = LazyLock::new(|| selector("div"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));

static MANA_SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name=([0-9WUBRGXP]+)").expect("valid regex"));
static PRINTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \((.*)\)").expect("valid regex"));
static SYMBOL_IMG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img[^>]*alt="([^"]+)"[^>]*>"#).expect("valid regex"));
static DIV_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?div[^>]*>").expect("valid regex"));
static ITALIC_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)i>").expect("valid regex"));

/// Rarity label to the print sets carrying that rarity, in first-seen order.
pub type Rarities = IndexMap<String, Vec<String>>;

/// Card data parsed from a detail page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardData {
    pub url: String,
    pub name: String,
    pub img_url: String,
    pub mana_cost: Vec<String>,
    pub rarities: Rarities,
    pub sets: Vec<String>,
    pub text: String,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub colors: Vec<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub assoc_card: Option<String>,
}

/// Value of a P/T row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerToughness {
    Creature { power: String, toughness: String },
    Loyalty(String),
}

impl PowerToughness {
    /// `"2 / 3"` is a creature, a value without `/` is planeswalker loyalty.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('/') {
            Some((power, toughness)) => Self::Creature {
                power: power.trim().to_string(),
                toughness: toughness.trim().to_string(),
            },
            None => Self::Loyalty(raw.trim().to_string()),
        }
    }
}

/// Parser for card detail pages
pub struct CardParser;

impl CardParser {
    /// Parse the card addressed by `url` out of its detail page.
    pub fn parse(html: &str, url: &Url) -> Result<CardData, ScrapeError> {
        let document = Html::parse_document(html);
        let fragments: Vec<ElementRef<'_>> = document.select(&FRAGMENT).collect();
        let wanted = Self::wanted_name(&document, url)?;
        let card = Self::select_fragment(&fragments, &wanted)?.ok_or_else(|| {
            ScrapeError::CardNotFound {
                name: wanted.clone(),
                url: url.to_string(),
            }
        })?;

        let mana_cost = Self::parse_mana_cost(card)?;
        let rarities = Self::parse_rarities(card)?;
        let sets = Self::sets(&rarities);
        let colors = Self::parse_colors(card, &mana_cost)?;
        let (types, subtypes) = Self::parse_types(card)?;
        let (power, toughness, loyalty) = match Self::parse_power_toughness(card)? {
            Some(PowerToughness::Creature { power, toughness }) => {
                (Some(power), Some(toughness), None)
            }
            Some(PowerToughness::Loyalty(loyalty)) => (None, None, Some(loyalty)),
            None => (None, None, None),
        };

        Ok(CardData {
            url: url.to_string(),
            name: Self::parse_name(card)?,
            img_url: Self::parse_img_url(card, url)?,
            mana_cost,
            rarities,
            sets,
            text: Self::parse_text(card)?,
            types,
            subtypes,
            colors,
            power,
            toughness,
            loyalty,
            assoc_card: Self::parse_assoc_card(&fragments, card)?,
        })
    }

    /// First fragment named `wanted`. Empty placeholders are skipped; any
    /// other fragment with a broken name row fails the whole page.
    fn select_fragment<'a>(
        fragments: &[ElementRef<'a>],
        wanted: &str,
    ) -> Result<Option<ElementRef<'a>>, ScrapeError> {
        for fragment in fragments.iter().copied().filter(|f| has_content(*f)) {
            if Self::parse_name(fragment)? == wanted {
                return Ok(Some(fragment));
            }
        }
        Ok(None)
    }

    /// Face requested through `part=`, else the page title minus its
    /// trailing parenthetical.
    fn wanted_name(document: &Html, url: &Url) -> Result<String, ScrapeError> {
        if let Some((_, part)) = url.query_pairs().find(|(key, _)| key == PART_PARAM) {
            return Ok(part.into_owned());
        }

        let title = document
            .select(&TITLE)
            .next()
            .map(element_text)
            .ok_or_else(|| ScrapeError::malformed("page has no title"))?;

        let name = match title.rfind('(') {
            Some(idx) => &title[..idx],
            None => title.as_str(),
        };
        Ok(name.trim().to_string())
    }

    fn parse_name(card: ElementRef<'_>) -> Result<String, ScrapeError> {
        value_text(require_row(card, "nameRow")?)
    }

    fn parse_img_url(card: ElementRef<'_>, page_url: &Url) -> Result<String, ScrapeError> {
        let src = card
            .select(&CARD_IMAGE)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or_else(|| ScrapeError::malformed("missing card image"))?;

        page_url
            .join(src)
            .map(String::from)
            .map_err(|e| ScrapeError::malformed(format!("bad card image src '{}': {}", src, e)))
    }

    fn parse_mana_cost(card: ElementRef<'_>) -> Result<Vec<String>, ScrapeError> {
        let Some(row) = find_row(card, "manaRow") else {
            return Ok(Vec::new());
        };

        let value = row
            .select(&VALUE)
            .next()
            .ok_or_else(|| ScrapeError::malformed("mana row has no value"))?;

        value
            .select(&IMG)
            .map(|img| {
                let src = img.value().attr("src").unwrap_or_default();
                MANA_SYMBOL_RE
                    .captures(src)
                    .map(|caps| caps[1].to_string())
                    .ok_or_else(|| {
                        ScrapeError::malformed(format!("unrecognized mana symbol '{}'", src))
                    })
            })
            .collect()
    }

    fn parse_rarities(card: ElementRef<'_>) -> Result<Rarities, ScrapeError> {
        let mut rarities = Rarities::new();

        if let Some(row) = find_row(card, "otherSetsRow") {
            for img in row.select(&IMG) {
                let title = img.value().attr("title").unwrap_or_default();
                let caps = PRINTING_RE.captures(title).ok_or_else(|| {
                    ScrapeError::malformed(format!("unrecognized printing '{}'", title))
                })?;
                rarities
                    .entry(caps[2].to_string())
                    .or_default()
                    .push(caps[1].to_string());
            }
            return Ok(rarities);
        }

        // Single printing: set from the expansion link, rarity from its own row
        let set = require_row(card, "currentSetSymbol")?
            .select(&LINK)
            .nth(1)
            .map(element_text)
            .ok_or_else(|| ScrapeError::malformed("expansion row has no set link"))?;
        let rarity = value_cell(require_row(card, "rarityRow")?)?
            .select(&SPAN)
            .next()
            .map(element_text)
            .ok_or_else(|| ScrapeError::malformed("rarity row has no rarity"))?;

        rarities.insert(rarity, vec![set]);
        Ok(rarities)
    }

    /// Sorted union of every rarity bucket.
    pub fn sets(rarities: &Rarities) -> Vec<String> {
        rarities
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn parse_text(card: ElementRef<'_>) -> Result<String, ScrapeError> {
        let Some(row) = find_row(card, "textRow") else {
            return Ok(String::new());
        };

        let boxes: Vec<String> = row
            .select(&TEXT_BOX)
            .map(|text_box| rewrite_text_markup(&text_box.html()))
            .collect();

        Ok(boxes.join("\n").trim().to_string())
    }

    fn parse_types(card: ElementRef<'_>) -> Result<(Vec<String>, Vec<String>), ScrapeError> {
        let line = value_text(require_row(card, "typeRow")?)?;
        Ok(split_type_line(&line))
    }

    fn parse_colors(
        card: ElementRef<'_>,
        mana_cost: &[String],
    ) -> Result<Vec<String>, ScrapeError> {
        match find_row(card, "colorIndicatorRow") {
            Some(row) => Ok(vec![value_text(row)?]),
            None => Ok(colors_from_mana_cost(mana_cost)),
        }
    }

    fn parse_power_toughness(card: ElementRef<'_>) -> Result<Option<PowerToughness>, ScrapeError> {
        find_row(card, "ptRow")
            .map(|row| value_text(row).map(|raw| PowerToughness::parse(&raw)))
            .transpose()
    }

    /// Name of the first other face with any content.
    ///
    /// Pages with more than two faces, or with decorative non-empty
    /// containers, can yield the wrong face.
    fn parse_assoc_card(
        fragments: &[ElementRef<'_>],
        card: ElementRef<'_>,
    ) -> Result<Option<String>, ScrapeError> {
        fragments
            .iter()
            .copied()
            .find(|other| other.id() != card.id() && has_content(*other))
            .map(Self::parse_name)
            .transpose()
    }
}

/// False for empty placeholder containers.
fn has_content(fragment: ElementRef<'_>) -> bool {
    fragment.select(&DIV).next().is_some()
}

/// Rewrite one serialized text box: symbol images become `<symbol>`, divs
/// are dropped, italics become `<nrt>` (not rule text).
pub fn rewrite_text_markup(markup: &str) -> String {
    let text = SYMBOL_IMG_RE.replace_all(markup, r#"<symbol type="$1">"#);
    let text = DIV_TAG_RE.replace_all(&text, "");
    let text = ITALIC_TAG_RE.replace_all(&text, "<${1}nrt>");
    text.into_owned()
}

/// Split a type line on the em dash into types and subtypes.
pub fn split_type_line(line: &str) -> (Vec<String>, Vec<String>) {
    let words = |s: &str| s.split_whitespace().map(String::from).collect::<Vec<_>>();
    match line.split_once('—') {
        Some((types, subtypes)) => (words(types), words(subtypes)),
        None => (words(line), Vec::new()),
    }
}

/// Colors implied by the colored mana symbols, sorted by name.
pub fn colors_from_mana_cost(mana_cost: &[String]) -> Vec<String> {
    mana_cost
        .iter()
        .filter_map(|symbol| match symbol.as_str() {
            "W" => Some("White"),
            "U" => Some("Blue"),
            "B" => Some("Black"),
            "R" => Some("Red"),
            "G" => Some("Green"),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
