use std::fmt::Write;

use tracing::debug;

use crate::model::{
    Color, CompareCondition, Condition, FilterConfiguration, Platform, RangeCondition, Rule,
    Scalar, Sound, StyleSpec,
};

/// Substituted when a comparison has no value.
pub const MISSING_VALUE_FALLBACK: i64 = 0;
/// Substituted for a missing lower range bound.
pub const RANGE_MIN_FALLBACK: i64 = 1;
/// Substituted for a missing upper range bound.
pub const RANGE_MAX_FALLBACK: i64 = 100;
/// Volume used when a sound descriptor carries none.
pub const DEFAULT_SOUND_VOLUME: u16 = 300;
/// Directory the client resolves custom sound files against.
pub const SOUND_DIRECTORY: &str = "custom_sound/";

const INDENT: &str = "    ";

pub fn write_block(out: &mut String, rule: &Rule, config: &FilterConfiguration) {
    writeln!(out, "# {}", single_line(rule.label())).ok();
    writeln!(out, "# [RID: {}]", rule.id).ok();
    writeln!(out, "{}", rule.disposition.keyword()).ok();

    for (key, condition) in &rule.conditions {
        write_condition(out, rule, key, condition);
    }
    write_styles(out, rule, &rule.styles, config);

    writeln!(out).ok();
}

fn write_condition(out: &mut String, rule: &Rule, key: &str, condition: &Condition) {
    let key = capitalize(key);
    match condition {
        Condition::Compare(CompareCondition { operator, value }) => match value {
            Some(Scalar::Bool(flag)) => {
                writeln!(out, "{INDENT}{key} {}", bool_literal(*flag)).ok();
            }
            Some(scalar) => {
                writeln!(out, "{INDENT}{key} {operator} {}", scalar_literal(scalar)).ok();
            }
            None => {
                debug!(rule = %rule.id, condition = %key, "missing comparison value, using fallback");
                writeln!(out, "{INDENT}{key} {operator} {MISSING_VALUE_FALLBACK}").ok();
            }
        },
        Condition::Range(RangeCondition {
            min_level,
            max_level,
        }) => {
            if min_level.is_none() || max_level.is_none() {
                debug!(rule = %rule.id, condition = %key, "missing range bound, using fallback");
            }
            let min = min_level.unwrap_or(RANGE_MIN_FALLBACK);
            let max = max_level.unwrap_or(RANGE_MAX_FALLBACK);
            writeln!(out, "{INDENT}{key} >= {min}").ok();
            writeln!(out, "{INDENT}{key} <= {max}").ok();
        }
        Condition::Flag(flag) => {
            writeln!(out, "{INDENT}{key} {}", bool_literal(*flag)).ok();
        }
        Condition::List(items) => {
            if items.is_empty() {
                return;
            }
            let quoted: Vec<String> = items.iter().map(|item| quote(item)).collect();
            writeln!(out, "{INDENT}{key} == {}", quoted.join(" ")).ok();
        }
    }
}

fn write_styles(out: &mut String, rule: &Rule, styles: &StyleSpec, config: &FilterConfiguration) {
    if let Some(size) = styles.font_size.value() {
        writeln!(out, "{INDENT}SetFontSize {size}").ok();
    }
    if let Some(color) = styles.text_color.value() {
        writeln!(out, "{INDENT}SetTextColor {}", color_literal(color)).ok();
    }
    if let Some(color) = styles.border_color.value() {
        writeln!(out, "{INDENT}SetBorderColor {}", color_literal(color)).ok();
    }
    if let Some(color) = styles.background_color.value() {
        writeln!(out, "{INDENT}SetBackgroundColor {}", color_literal(color)).ok();
    }
    if let Some(effect) = styles.play_effect.value() {
        writeln!(out, "{INDENT}PlayEffect {}", effect.as_str()).ok();
    }
    if let Some(icon) = styles.minimap_icon.value() {
        writeln!(
            out,
            "{INDENT}MinimapIcon {} {} {}",
            icon.size,
            icon.color.as_str(),
            icon.shape.as_str()
        )
        .ok();
    }
    if config.mute_sounds {
        return;
    }
    if let Some(sound) = styles.sound.value() {
        write_sound(out, rule, sound, config.platform);
    }
}

fn write_sound(out: &mut String, rule: &Rule, sound: &Sound, platform: Platform) {
    match (platform, sound) {
        (Platform::Pc, Sound::File { path, volume }) => {
            let path = if path.starts_with(SOUND_DIRECTORY) {
                path.clone()
            } else {
                format!("{SOUND_DIRECTORY}{path}")
            };
            let volume = volume.unwrap_or(DEFAULT_SOUND_VOLUME);
            writeln!(out, "{INDENT}CustomAlertSound {} {volume}", quote(&path)).ok();
        }
        (Platform::Console, Sound::Slot { id, volume }) => {
            let volume = volume.unwrap_or(DEFAULT_SOUND_VOLUME);
            writeln!(out, "{INDENT}PlayAlertSound {id} {volume}").ok();
        }
        (platform, _) => {
            debug!(rule = %rule.id, %platform, "sound descriptor does not match platform, skipped");
        }
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

const fn bool_literal(flag: bool) -> &'static str {
    if flag { "True" } else { "False" }
}

fn scalar_literal(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Bool(flag) => bool_literal(*flag).to_string(),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Text(s) if s.chars().any(char::is_whitespace) => quote(s),
        Scalar::Text(s) => s.replace('"', ""),
    }
}

/// The rule format has no escape sequence, so embedded quotes are dropped.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', ""))
}

fn color_literal(color: &Color) -> String {
    match color.a {
        Some(a) => format!("{} {} {} {a}", color.r, color.g, color.b),
        None => format!("{} {} {}", color.r, color.g, color.b),
    }
}

fn single_line(label: &str) -> String {
    label.lines().collect::<Vec<_>>().join(" ")
}
