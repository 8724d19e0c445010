//! Built-in default catalog, one TOML document per section.

use crate::model::SectionId;

#[must_use]
pub const fn source(id: SectionId) -> &'static str {
    match id {
        SectionId::Gold => GOLD,
        SectionId::Currency => CURRENCY,
        SectionId::Uniques => UNIQUES,
        SectionId::VaultKeys => VAULT_KEYS,
        SectionId::Jewels => JEWELS,
        SectionId::UncutGems => UNCUT_GEMS,
        SectionId::Charms => CHARMS,
        SectionId::BaseItems => BASE_ITEMS,
        SectionId::Others => OTHERS,
        SectionId::Leveling => LEVELING,
        SectionId::ClassSelection => CLASS_SELECTION,
    }
}

const GOLD: &str = r#"
id = "gold"

[[rules]]
id = "gold_high"
code = "gold"
name = "Gold (large stack)"
[rules.conditions]
baseType = ["Gold"]
stackSize = { operator = ">=", value = 1000 }
[rules.styles]
fontSize = 40
textColor = { r = 255, g = 215, b = 0, a = 255 }
borderColor = { r = 255, g = 215, b = 0, a = 255 }
minimapIcon = { size = 2, color = "Yellow", shape = "Circle" }

[[rules]]
id = "gold_medium"
code = "gold"
name = "Gold (medium stack)"
[rules.conditions]
baseType = ["Gold"]
stackSize = { operator = ">=", value = 300 }
[rules.styles]
fontSize = 35
textColor = { r = 255, g = 215, b = 0, a = 255 }

[[rules]]
id = "gold_default"
code = "gold"
name = "Gold"
[rules.conditions]
baseType = ["Gold"]
[rules.styles]
textColor = { r = 210, g = 178, b = 135, a = 255 }
"#;

const CURRENCY: &str = r#"
id = "currency"
tierThreshold = "E"

[[rules]]
id = "currency_s"
code = "currency"
name = "Currency S tier"
tier = "S"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Mirror of Kalandra", "Divine Orb", "Perfect Jeweller's Orb"]
[rules.styles]
fontSize = 45
textColor = { r = 255, g = 0, b = 0, a = 255 }
borderColor = { r = 255, g = 0, b = 0, a = 255 }
backgroundColor = { r = 255, g = 255, b = 255, a = 255 }
playEffect = "Red"
minimapIcon = { size = 0, color = "Red", shape = "Star" }
sound = { path = "1_currency_s.mp3", volume = 300 }

[[rules]]
id = "currency_a"
code = "currency"
name = "Currency A tier"
tier = "A"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Exalted Orb", "Orb of Annulment", "Greater Jeweller's Orb"]
[rules.styles]
fontSize = 42
textColor = { r = 0, g = 0, b = 0, a = 255 }
borderColor = { r = 0, g = 0, b = 0, a = 255 }
backgroundColor = { r = 240, g = 90, b = 35, a = 255 }
playEffect = "Orange"
minimapIcon = { size = 0, color = "Orange", shape = "Circle" }
sound = { path = "2_currency_a.mp3", volume = 300 }

[[rules]]
id = "currency_b"
code = "currency"
name = "Currency B tier"
tier = "B"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Chaos Orb", "Vaal Orb", "Regal Orb"]
[rules.styles]
fontSize = 40
textColor = { r = 0, g = 0, b = 0, a = 255 }
backgroundColor = { r = 250, g = 170, b = 25, a = 255 }
playEffect = "Yellow"
minimapIcon = { size = 1, color = "Yellow", shape = "Circle" }
sound = { path = "3_currency_b.mp3", volume = 300 }

[[rules]]
id = "currency_c"
code = "currency"
name = "Currency C tier"
tier = "C"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Orb of Alchemy", "Artificer's Orb", "Lesser Jeweller's Orb"]
[rules.styles]
fontSize = 38
textColor = { r = 250, g = 170, b = 25, a = 255 }
borderColor = { r = 250, g = 170, b = 25, a = 255 }
sound = { path = "4_currency_c.mp3", volume = 300 }

[[rules]]
id = "currency_d"
code = "currency"
name = "Currency D tier"
tier = "D"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Orb of Augmentation", "Orb of Transmutation", "Blacksmith's Whetstone"]
[rules.styles]
fontSize = 35
textColor = { r = 170, g = 158, b = 130, a = 255 }

[[rules]]
id = "currency_e"
code = "currency"
name = "Currency E tier"
tier = "E"
[rules.conditions]
class = ["Stackable Currency"]
baseType = ["Scroll of Wisdom", "Armourer's Scrap"]
[rules.styles]
fontSize = 30

[[rules]]
id = "currency_stack"
code = "currency"
name = "Currency stacks"
[rules.conditions]
class = ["Stackable Currency"]
stackSize = { operator = ">=", value = 10 }
[rules.styles]
borderColor = { r = 170, g = 158, b = 130, a = 255 }
sound = { path = "10_stack.mp3", volume = 200 }
"#;

const UNIQUES: &str = r#"
id = "uniques"

[[rules]]
id = "uniques_top"
code = "uniques"
name = "Top unique items"
[rules.conditions]
rarity = { operator = "==", value = "Unique" }
baseType = ["Heavy Belt", "Gold Ring", "Solar Amulet"]
[rules.styles]
fontSize = 45
textColor = { r = 175, g = 96, b = 37, a = 255 }
borderColor = { r = 175, g = 96, b = 37, a = 255 }
backgroundColor = { r = 255, g = 255, b = 255, a = 255 }
playEffect = "Brown"
minimapIcon = { size = 0, color = "Brown", shape = "Star" }
sound = { path = "5_item_t1.mp3", volume = 300 }

[[rules]]
id = "uniques_default"
code = "uniques"
name = "Unique items"
[rules.conditions]
rarity = { operator = "==", value = "Unique" }
[rules.styles]
fontSize = 38
textColor = { r = 175, g = 96, b = 37, a = 255 }
borderColor = { r = 175, g = 96, b = 37, a = 255 }
minimapIcon = { size = 1, color = "Brown", shape = "Pentagon" }
"#;

const VAULT_KEYS: &str = r#"
id = "vault-keys"

[[rules]]
id = "vault_keys_all"
code = "vault-keys"
name = "Vault keys"
[rules.conditions]
class = ["Vault Keys"]
[rules.styles]
fontSize = 40
textColor = { r = 255, g = 255, b = 255, a = 255 }
borderColor = { r = 160, g = 80, b = 255, a = 255 }
playEffect = "Pink"
minimapIcon = { size = 1, color = "Pink", shape = "Kite" }
"#;

const JEWELS: &str = r#"
id = "jewels"

[[rules]]
id = "jewels_rare"
code = "jewels"
name = "Rare jewels"
[rules.conditions]
class = ["Jewels"]
rarity = { operator = "==", value = "Rare" }
[rules.styles]
fontSize = 40
textColor = { r = 255, g = 255, b = 119, a = 255 }
borderColor = { r = 255, g = 255, b = 119, a = 255 }
minimapIcon = { size = 1, color = "Yellow", shape = "Diamond" }

[[rules]]
id = "jewels_magic"
code = "jewels"
name = "Magic jewels"
[rules.conditions]
class = ["Jewels"]
rarity = { operator = "==", value = "Magic" }
[rules.styles]
fontSize = 36
textColor = { r = 136, g = 136, b = 255, a = 255 }
"#;

const UNCUT_GEMS: &str = r#"
id = "uncut-gems"

[[rules]]
id = "uncut_gems_high"
code = "uncut-gems"
name = "High level uncut gems"
[rules.conditions]
class = ["Uncut Skill Gems", "Uncut Support Gems", "Uncut Spirit Gems"]
itemLevel = { operator = ">=", value = 19 }
[rules.styles]
fontSize = 42
textColor = { r = 20, g = 240, b = 240, a = 255 }
borderColor = { r = 20, g = 240, b = 240, a = 255 }
playEffect = "Cyan"
minimapIcon = { size = 0, color = "Cyan", shape = "Triangle" }

[[rules]]
id = "uncut_gems_default"
code = "uncut-gems"
name = "Uncut gems"
[rules.conditions]
class = ["Uncut Skill Gems", "Uncut Support Gems", "Uncut Spirit Gems"]
[rules.styles]
fontSize = 36
textColor = { r = 20, g = 240, b = 240, a = 255 }
"#;

const CHARMS: &str = r#"
id = "charms"

[[rules]]
id = "charms_quality"
code = "charms"
name = "Quality charms"
[rules.conditions]
class = ["Charms"]
quality = { operator = ">=", value = 15 }
[rules.styles]
fontSize = 38
borderColor = { r = 120, g = 200, b = 120, a = 255 }

[[rules]]
id = "charms_default"
code = "charms"
name = "Charms"
disposition = "hide"
[rules.conditions]
class = ["Charms"]
"#;

const BASE_ITEMS: &str = r#"
id = "base-items"

[[rules]]
id = "base_items_endgame"
code = "base-items"
name = "Endgame crafting bases"
[rules.conditions]
rarity = { operator = "==", value = "Normal" }
itemLevel = { operator = ">=", value = 82 }
baseType = ["Sapphire Ring", "Stellar Amulet", "Utility Belt"]
[rules.styles]
fontSize = 38
textColor = { r = 255, g = 255, b = 255, a = 255 }
borderColor = { r = 200, g = 200, b = 200, a = 255 }
minimapIcon = { size = 2, color = "White", shape = "Square" }
sound = { path = "7_item_t3.mp3", volume = 200 }
"#;

const OTHERS: &str = r#"
id = "others"

[[rules]]
id = "others_waystones"
code = "waystones"
name = "Waystones"
[rules.conditions]
class = ["Waystones"]
[rules.styles]
fontSize = 40
textColor = { r = 255, g = 255, b = 255, a = 255 }
borderColor = { r = 255, g = 255, b = 255, a = 255 }
minimapIcon = { size = 1, color = "White", shape = "Square" }
sound = { path = "9_maps.mp3", volume = 300 }

[[rules]]
id = "others_flasks"
code = "flasks"
name = "Flasks"
[rules.conditions]
class = ["Life Flasks", "Mana Flasks"]
quality = { operator = ">=", value = 10 }
[rules.styles]
fontSize = 35
sound = { path = "8_flask.mp3", volume = 200 }

[[rules]]
id = "others_normal_hide"
code = "normal"
name = "Normal equipment"
disposition = "hide"
[rules.conditions]
rarity = { operator = "==", value = "Normal" }
areaLevel = { minLevel = 65, maxLevel = 100 }
"#;

const LEVELING: &str = r#"
id = "leveling"

[[rules]]
id = "leveling_rares"
code = "leveling"
name = "Leveling rares"
[rules.conditions]
rarity = { operator = "==", value = "Rare" }
areaLevel = { minLevel = 1, maxLevel = 64 }
[rules.styles]
fontSize = 38
textColor = { r = 255, g = 255, b = 119, a = 255 }
borderColor = { r = 255, g = 255, b = 119, a = 255 }

[[rules]]
id = "leveling_magic"
code = "leveling"
name = "Leveling magic items"
[rules.conditions]
rarity = { operator = "==", value = "Magic" }
areaLevel = { minLevel = 1, maxLevel = 30 }
[rules.styles]
fontSize = 34
textColor = { r = 136, g = 136, b = 255, a = 255 }
"#;

const CLASS_SELECTION: &str = r#"
id = "class-selection"

[[rules]]
id = "class_bows"
code = "bows"
name = "Bows"
[rules.conditions]
class = ["Bows"]
areaLevel = { operator = "<=", value = 65 }
[rules.styles]
fontSize = 38
borderColor = { r = 100, g = 200, b = 100, a = 255 }

[[rules]]
id = "class_quivers"
code = "quivers"
name = "Quivers"
[rules.conditions]
class = ["Quivers"]
areaLevel = { operator = "<=", value = 65 }
[rules.styles]
fontSize = 38
borderColor = { r = 100, g = 200, b = 100, a = 255 }

[[rules]]
id = "class_crossbows"
code = "crossbows"
name = "Crossbows"
[rules.conditions]
class = ["Crossbows"]
areaLevel = { operator = "<=", value = 65 }
[rules.styles]
fontSize = 38
borderColor = { r = 100, g = 200, b = 100, a = 255 }

[[rules]]
id = "class_wands"
code = "wands"
name = "Wands"
[rules.conditions]
class = ["Wands"]
areaLevel = { operator = "<=", value = 65 }
[rules.styles]
fontSize = 38
borderColor = { r = 100, g = 200, b = 100, a = 255 }

[[rules]]
id = "class_staves"
code = "staves"
name = "Staves"
[rules.conditions]
class = ["Staves"]
areaLevel = { operator = "<=", value = 65 }
[rules.styles]
fontSize = 38
borderColor = { r = 100, g = 200, b = 100, a = 255 }
"#;
