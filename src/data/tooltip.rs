//! Hover tooltip content built from the attributes route.
//!
//! The backend sends a flat list of attribute lines in which section titles
//! and section members are marked with plain-text tags. The builder turns
//! that list into titled sections so the frontend never inspects strings.

use crate::protocol::{Affinity, AttributesResponse};

/// Heading used for pet bonuses
pub const PETS_TITLE: &str = "Bonus to All Pets";

/// A titled group of attribute lines
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSection {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

/// Everything shown when hovering a star
#[derive(Debug, Clone, PartialEq)]
pub struct StarTooltip {
    pub name: String,
    pub sections: Vec<TooltipSection>,
    pub requirements: Vec<(Affinity, i32)>,
    pub bonuses: Vec<(Affinity, i32)>,
}

/// Which section a tagged line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Pets,
    Attributes,
    Abilities,
    Skill,
    SecondSkill,
}

/// Classification of a single backend line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    /// Title line for a section
    Title(SectionKind, String),
    /// Line belonging to a tagged section, tag removed
    Member(SectionKind, String),
    Plain(String),
}

fn tidy(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_word(line: &str, word: &str) -> bool {
    line.split_whitespace().any(|w| w == word)
}

/// Remove the first occurrence of a marker word and tidy whitespace
fn strip_word(line: &str, word: &str) -> String {
    let mut removed = false;
    line.split_whitespace()
        .filter(|w| {
            if !removed && *w == word {
                removed = true;
                false
            } else {
                true
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn classify(line: &str) -> LineKind {
    const TITLES: [(&str, SectionKind); 2] = [
        ("Attributes", SectionKind::Attributes),
        ("Abilities", SectionKind::Abilities),
    ];
    const MARKED_TITLES: [(&str, SectionKind); 2] = [
        ("specific", SectionKind::Skill),
        ("particular", SectionKind::SecondSkill),
    ];
    const TAGS: [(&str, SectionKind); 5] = [
        ("pets", SectionKind::Pets),
        ("attr", SectionKind::Attributes),
        ("abl", SectionKind::Abilities),
        ("skl", SectionKind::Skill),
        ("acv", SectionKind::SecondSkill),
    ];

    if let Some((_, kind)) = TITLES.iter().find(|(word, _)| has_word(line, word)) {
        return LineKind::Title(*kind, tidy(line));
    }
    if let Some((word, kind)) = MARKED_TITLES.iter().find(|(word, _)| has_word(line, word)) {
        return LineKind::Title(*kind, strip_word(line, word));
    }
    if let Some((word, kind)) = TAGS.iter().find(|(word, _)| has_word(line, word)) {
        return LineKind::Member(*kind, strip_word(line, word));
    }
    LineKind::Plain(tidy(line))
}

impl StarTooltip {
    /// Build a tooltip; the last attribute line is the star's display name
    pub fn from_response(response: &AttributesResponse, fallback_name: &str) -> Self {
        let mut lines = response.result.clone();
        let name = lines
            .pop()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let mut titles: Vec<(SectionKind, String)> = Vec::new();
        let mut plain = Vec::new();
        let mut tagged: Vec<(SectionKind, Vec<String>)> = Vec::new();

        for line in &lines {
            match classify(line) {
                LineKind::Title(kind, title) => {
                    if !titles.iter().any(|(k, _)| *k == kind) {
                        titles.push((kind, title));
                    }
                }
                LineKind::Member(kind, text) => {
                    match tagged.iter_mut().find(|(k, _)| *k == kind) {
                        Some((_, members)) => members.push(text),
                        None => tagged.push((kind, vec![text])),
                    }
                }
                LineKind::Plain(text) if !text.is_empty() => plain.push(text),
                LineKind::Plain(_) => {}
            }
        }

        let mut sections = Vec::new();
        if !plain.is_empty() {
            sections.push(TooltipSection {
                title: None,
                lines: plain,
            });
        }
        for (kind, members) in tagged {
            let title = match kind {
                SectionKind::Pets => Some(PETS_TITLE.to_string()),
                _ => titles
                    .iter()
                    .find(|(k, _)| *k == kind)
                    .map(|(_, title)| title.clone()),
            };
            sections.push(TooltipSection {
                title,
                lines: members,
            });
        }

        Self {
            name,
            sections,
            requirements: response.requirements(),
            bonuses: response.bonuses(),
        }
    }

    /// Total number of text rows needed to draw the tooltip body
    pub fn body_height(&self) -> usize {
        let sections: usize = self
            .sections
            .iter()
            .map(|s| s.lines.len() + usize::from(s.title.is_some()))
            .sum();
        let gaps = self.sections.len().saturating_sub(1);
        let affinity_rows = usize::from(!self.requirements.is_empty())
            + usize::from(!self.bonuses.is_empty());
        sections + gaps + affinity_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(lines: &[&str]) -> AttributesResponse {
        AttributesResponse {
            result: lines.iter().map(|s| s.to_string()).collect(),
            first_affinity: Some("Points_of_Primordial".into()),
            first_affinity_value: Some(1),
            second_affinity: None,
            second_affinity_value: None,
            third_affinity: None,
            third_affinity_value: None,
            first_bonus: Some("Points_of_Primordial".into()),
            first_bonus_value: Some(4),
            second_bonus: None,
            second_bonus_value: None,
        }
    }

    #[test]
    fn test_plain_attributes() {
        let tooltip = StarTooltip::from_response(
            &response(&["15 Physique", "pets 4% Health", "Hound"]),
            "fallback",
        );

        assert_eq!(tooltip.name, "Hound");
        assert_eq!(tooltip.sections.len(), 2);
        assert_eq!(tooltip.sections[0].title, None);
        assert_eq!(tooltip.sections[0].lines, vec!["15 Physique"]);
        assert_eq!(tooltip.sections[1].title.as_deref(), Some(PETS_TITLE));
        assert_eq!(tooltip.sections[1].lines, vec!["4% Health"]);
        assert_eq!(tooltip.requirements, vec![(Affinity::Primordial, 1)]);
        assert_eq!(tooltip.bonuses, vec![(Affinity::Primordial, 4)]);
    }

    #[test]
    fn test_titled_sections() {
        let tooltip = StarTooltip::from_response(
            &response(&[
                "2 Second Skill Recharge",
                "30 Offensive Ability attr",
                "Summon Attributes",
                "120 Fire Damage skl",
                "Flame Torrent specific",
                "5% Health attr",
                "Vulnerable targets take 10% more damage",
                "Falcon Swoop",
            ]),
            "fallback",
        );

        assert_eq!(tooltip.name, "Falcon Swoop");
        assert_eq!(tooltip.sections.len(), 3);
        assert_eq!(
            tooltip.sections[0].lines,
            vec![
                "2 Second Skill Recharge",
                "Vulnerable targets take 10% more damage"
            ]
        );
        assert_eq!(tooltip.sections[1].title.as_deref(), Some("Summon Attributes"));
        assert_eq!(
            tooltip.sections[1].lines,
            vec!["30 Offensive Ability", "5% Health"]
        );
        assert_eq!(tooltip.sections[2].title.as_deref(), Some("Flame Torrent"));
        assert_eq!(tooltip.sections[2].lines, vec!["120 Fire Damage"]);
    }

    #[test]
    fn test_empty_result_uses_fallback_name() {
        let tooltip = StarTooltip::from_response(&response(&[]), "Turtle Shell");
        assert_eq!(tooltip.name, "Turtle Shell");
        assert!(tooltip.sections.is_empty());
        assert_eq!(tooltip.body_height(), 2);
    }

    #[test]
    fn test_body_height() {
        let tooltip = StarTooltip::from_response(
            &response(&["15 Physique", "pets 4% Health", "Hound"]),
            "fallback",
        );
        // 1 plain + (title + 1) pets + 1 gap + requirement row + bonus row
        assert_eq!(tooltip.body_height(), 6);
    }
}
