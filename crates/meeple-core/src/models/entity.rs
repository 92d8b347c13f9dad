use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What kind of span an entity was mined from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ListItem,
    Emphasized,
    QuestionSubject,
    ProperNoun,
}

/// A salient text span mined from conversation history, used to resolve
/// elliptical follow-up questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
    /// Turn index the span was last seen in; higher = more recent.
    pub position: usize,
    /// Heuristic importance in [0, 1].
    pub salience: f64,
}

impl Entity {
    pub fn new(text: impl Into<String>, kind: EntityKind, position: usize, salience: f64) -> Self {
        Self {
            text: text.into(),
            kind,
            position,
            salience: salience.clamp(0.0, 1.0),
        }
    }

    /// Deduplicate case-insensitively on `text`, preserving first-seen order.
    ///
    /// The surviving record keeps the maximum salience and the most recent
    /// position seen across duplicates.
    pub fn merge(entities: Vec<Entity>) -> Vec<Entity> {
        let mut out: Vec<Entity> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entity in entities {
            let key = entity.text.to_lowercase();
            match index.get(&key) {
                Some(&i) => {
                    let kept = &mut out[i];
                    if entity.salience > kept.salience {
                        kept.salience = entity.salience;
                    }
                    if entity.position > kept.position {
                        kept.position = entity.position;
                    }
                }
                None => {
                    index.insert(key, out.len());
                    out.push(entity);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_case_insensitive_and_keeps_max_salience() {
        let merged = Entity::merge(vec![
            Entity::new("Fleet", EntityKind::ProperNoun, 0, 0.7),
            Entity::new("fleet", EntityKind::Emphasized, 2, 0.9),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Fleet");
        assert_eq!(merged[0].salience, 0.9);
        assert_eq!(merged[0].position, 2);
    }

    #[test]
    fn merge_keeps_latest_position_even_from_lower_salience() {
        let merged = Entity::merge(vec![
            Entity::new("Raiders", EntityKind::QuestionSubject, 3, 1.0),
            Entity::new("raiders", EntityKind::ListItem, 5, 0.8),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].salience, 1.0);
        assert_eq!(merged[0].position, 5);
    }

    #[test]
    fn salience_is_clamped() {
        let e = Entity::new("x", EntityKind::ListItem, 0, 1.7);
        assert_eq!(e.salience, 1.0);
    }
}
