//! HTML builders mirroring the Gatherer card detail template.

const ID_PREFIX: &str = "ctl00_ctl00_ctl00_MainContent_SubContent_SubContent";

/// A label/value row: label, whitespace, whitespace, value cell.
pub fn row(marker: &str, label: &str, value_html: &str) -> String {
    format!(
        "<div id=\"{ID_PREFIX}_{marker}\" class=\"row\">\n    <div class=\"label\">{label}</div>\n    <div class=\"value\">\n        {value_html}</div>\n</div>\n"
    )
}

pub fn name_row(name: &str) -> String {
    row("nameRow", "Card Name:", name)
}

pub fn mana_row(symbols: &[&str]) -> String {
    let imgs: String = symbols
        .iter()
        .map(|s| {
            format!(
                "<img src=\"/Handlers/Image.ashx?size=medium&amp;name={s}&amp;type=symbol\" alt=\"{s}\" align=\"absbottom\">"
            )
        })
        .collect();
    row("manaRow", "Mana Cost:", &imgs)
}

pub fn type_row(types: &str) -> String {
    row("typeRow", "Types:", types)
}

pub fn text_row(boxes: &[&str]) -> String {
    let boxes: String = boxes
        .iter()
        .map(|b| format!("<div class=\"cardtextbox\">{b}</div>"))
        .collect();
    row("textRow", "Card Text:", &boxes)
}

pub fn pt_row(value: &str) -> String {
    row("ptRow", "P/T:", value)
}

pub fn color_indicator_row(color: &str) -> String {
    row("colorIndicatorRow", "Color Indicator:", color)
}

/// Expansion and rarity rows of a card printed in a single set.
pub fn single_printing_rows(set: &str, rarity: &str) -> String {
    let search = "/Pages/Search/Default.aspx?action=advanced&amp;set=[%22Set%22]";
    let symbol = format!(
        "<a href=\"{search}\"><img title=\"{set} ({rarity})\" alt=\"{set} ({rarity})\"></a>\n        <a href=\"{search}\">{set}</a>"
    );
    let mut rows = row("currentSetSymbol", "Expansion:", &symbol);
    rows.push_str(&row(
        "rarityRow",
        "Rarity:",
        &format!("<span class=\"{}\">{rarity}</span>", rarity.to_lowercase()),
    ));
    rows
}

/// "All sets" row of a reprinted card, one `(set, rarity)` per symbol.
pub fn other_sets_row(printings: &[(&str, &str)]) -> String {
    let imgs: String = printings
        .iter()
        .map(|(set, rarity)| {
            format!(
                "<a href=\"Details.aspx?multiverseid=1\"><img title=\"{set} ({rarity})\" src=\"../../Handlers/Image.ashx?type=symbol\" alt=\"{set} ({rarity})\"></a>"
            )
        })
        .collect();
    row("otherSetsRow", "All Sets:", &imgs)
}

/// One `cardComponentContainer` cell holding a card image and the given rows.
pub fn fragment(multiverse_id: u32, rows: &[String]) -> String {
    format!(
        "<td class=\"cardComponentContainer\">\n<div id=\"{ID_PREFIX}_cardComponent{multiverse_id}\">\n<img id=\"{ID_PREFIX}_cardImage\" src=\"../../Handlers/Image.ashx?multiverseid={multiverse_id}&amp;type=card\" alt=\"\">\n{}</div>\n</td>\n",
        rows.concat()
    )
}

/// Placeholder container without any card content
pub fn empty_fragment() -> String {
    "<td class=\"cardComponentContainer\"></td>\n".to_string()
}

/// Full detail page with the given `<title>` and fragments.
pub fn page(title: &str, fragments: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>\r\n\t{title} - Gatherer - Magic: The Gathering\r\n</title></head>\n<body>\n<table class=\"cardDetails\"><tr>\n{}</tr></table>\n</body>\n</html>",
        fragments.concat()
    )
}

/// Gravecrawler: single printing creature with reminder text.
pub fn gravecrawler_page() -> String {
    page(
        "Gravecrawler (Dark Ascension)",
        &[fragment(
            222902,
            &[
                name_row("Gravecrawler"),
                mana_row(&["B"]),
                type_row("Creature  — Zombie"),
                text_row(&[
                    "Gravecrawler can't block.",
                    "Gravecrawler can be cast from your graveyard as long as you control a Zombie. <i>(You still pay its costs.)</i>",
                ]),
                pt_row("2 / 1"),
                single_printing_rows("Dark Ascension", "Rare"),
            ],
        )],
    )
}

/// Fire // Ice: split card, two faces on one page, reprinted.
pub fn fire_ice_page() -> String {
    let printings = [
        ("Apocalypse", "Uncommon"),
        ("Modern Masters", "Uncommon"),
        ("Commander 2013", "Uncommon"),
        ("Magic Online Promos", "Rare"),
    ];
    page(
        "Fire // Ice (Fire)",
        &[
            fragment(
                27165,
                &[
                    name_row("Fire"),
                    mana_row(&["1", "R"]),
                    type_row("Instant"),
                    text_row(&[
                        "Fire deals 2 damage divided as you choose among one or two targets.",
                    ]),
                    other_sets_row(&printings),
                ],
            ),
            fragment(
                27166,
                &[
                    name_row("Ice"),
                    mana_row(&["1", "U"]),
                    type_row("Instant"),
                    text_row(&[
                        "Tap target permanent.",
                        "Draw a card.",
                    ]),
                    other_sets_row(&printings),
                ],
            ),
        ],
    )
}

/// Sorin, Lord of Innistrad: planeswalker with loyalty and inline symbols.
pub fn sorin_page() -> String {
    page(
        "Sorin, Lord of Innistrad (Dark Ascension)",
        &[fragment(
            249985,
            &[
                name_row("Sorin, Lord of Innistrad"),
                mana_row(&["2", "W", "B"]),
                type_row("Planeswalker  — Sorin"),
                text_row(&[
                    "+1: Create a 1/1 black Vampire creature token with lifelink.",
                    "<img src=\"/Handlers/Image.ashx?size=small&amp;name=W&amp;type=symbol\" alt=\"White\" align=\"absbottom\">: Gain 1 life.",
                ]),
                pt_row("3"),
                single_printing_rows("Dark Ascension", "Mythic Rare"),
            ],
        )],
    )
}

/// Huntmaster of the Fells: transform card, the back face has a color indicator.
pub fn huntmaster_page() -> String {
    page(
        "Huntmaster of the Fells (Dark Ascension)",
        &[
            fragment(
                262875,
                &[
                    name_row("Huntmaster of the Fells"),
                    mana_row(&["2", "R", "G"]),
                    type_row("Creature  — Human Werewolf"),
                    pt_row("2 / 2"),
                    single_printing_rows("Dark Ascension", "Mythic Rare"),
                ],
            ),
            fragment(
                262699,
                &[
                    name_row("Ravager of the Fells"),
                    color_indicator_row("Red, Green"),
                    type_row("Creature  — Werewolf"),
                    pt_row("4 / 4"),
                    single_printing_rows("Dark Ascension", "Mythic Rare"),
                ],
            ),
        ],
    )
}

/// Listing page in the "text spoiler" layout.
pub fn spoiler_page(links: &[(&str, &str)]) -> String {
    let rows: String = links
        .iter()
        .map(|(href, text)| {
            format!(
                "<tr><td>Name</td><td><a class=\"nameLink\" href=\"{href}\">{text}</a></td></tr>\n<tr><td>Cost:</td><td>1R</td></tr>\n"
            )
        })
        .collect();
    format!(
        "<html><head><title>Card Search - Search: +[\"Dark Ascension\"] - Gatherer</title></head>\n<body>\n<div class=\"textspoiler\"><table>\n{rows}</table></div>\n</body></html>"
    )
}
