//! Design studio configurator: the draft a client builds before submitting
//! a request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keys;
use crate::view_model::ViewModel;

/// Piece of jewelry being designed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JewelryType {
    #[default]
    Ring,
    Necklace,
    Bracelet,
    Earrings,
}

impl JewelryType {
    pub fn all() -> &'static [JewelryType] {
        &[
            JewelryType::Ring,
            JewelryType::Necklace,
            JewelryType::Bracelet,
            JewelryType::Earrings,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            JewelryType::Ring => "Ring",
            JewelryType::Necklace => "Necklace",
            JewelryType::Bracelet => "Bracelet",
            JewelryType::Earrings => "Earrings",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    #[default]
    Gold,
    #[serde(rename = "Rose Gold")]
    RoseGold,
    Platinum,
    Silver,
}

impl Metal {
    pub fn all() -> &'static [Metal] {
        &[Metal::Gold, Metal::RoseGold, Metal::Platinum, Metal::Silver]
    }

    pub fn label(self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::RoseGold => "Rose Gold",
            Metal::Platinum => "Platinum",
            Metal::Silver => "Silver",
        }
    }

    /// Fill colour of the metal band in the preview.
    pub fn fill(self) -> &'static str {
        match self {
            Metal::Platinum => "#cfd4da",
            Metal::Silver => "#c6cdd6",
            Metal::RoseGold => "#e0a899",
            Metal::Gold => "#d6b46a",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gem {
    #[default]
    Diamond,
    Emerald,
    Ruby,
    Sapphire,
}

impl Gem {
    pub fn all() -> &'static [Gem] {
        &[Gem::Diamond, Gem::Emerald, Gem::Ruby, Gem::Sapphire]
    }

    pub fn label(self) -> &'static str {
        match self {
            Gem::Diamond => "Diamond",
            Gem::Emerald => "Emerald",
            Gem::Ruby => "Ruby",
            Gem::Sapphire => "Sapphire",
        }
    }

    /// Fill colour of the stone in the preview.
    pub fn fill(self) -> &'static str {
        match self {
            Gem::Emerald => "#2fbf71",
            Gem::Ruby => "#e54557",
            Gem::Sapphire => "#3b6ef6",
            Gem::Diamond => "#f2f2f4",
        }
    }
}

/// Returned when a label does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option: {}", self.0)
    }
}

macro_rules! labelled_option {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownOption;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <$ty>::all()
                    .iter()
                    .copied()
                    .find(|o| o.label() == s)
                    .ok_or_else(|| UnknownOption(s.to_string()))
            }
        }
    };
}

labelled_option!(JewelryType);
labelled_option!(Metal);
labelled_option!(Gem);

/// The configurator state. Always fully populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignDraft {
    #[serde(rename = "type")]
    pub kind: JewelryType,
    pub metal: Metal,
    pub gem: Gem,
    pub notes: String,
}

impl DesignDraft {
    /// Summary stored on a submitted request, e.g. "Gold Ring with Diamond".
    pub fn summary(&self) -> String {
        format!("{} {} with {}", self.metal, self.kind, self.gem)
    }

    /// Preview caption, e.g. "Gold Ring • Diamond".
    pub fn preview_label(&self) -> String {
        format!("{} {} • {}", self.metal, self.kind, self.gem)
    }

    /// Shallow-merge `patch` onto this draft.
    pub fn merge(mut self, patch: DraftPatch) -> Self {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(metal) = patch.metal {
            self.metal = metal;
        }
        if let Some(gem) = patch.gem {
            self.gem = gem;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self
    }
}

/// Stored drafts are merged onto the default one field at a time, so a
/// partial or partly unrecognised object still yields a complete draft.
impl<'de> Deserialize<'de> for DesignDraft {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Stored {
            #[serde(rename = "type")]
            kind: Option<String>,
            metal: Option<String>,
            gem: Option<String>,
            notes: Option<String>,
        }

        let stored = Stored::deserialize(deserializer)?;
        let patch = DraftPatch {
            kind: stored.kind.and_then(|s| s.parse().ok()),
            metal: stored.metal.and_then(|s| s.parse().ok()),
            gem: stored.gem.and_then(|s| s.parse().ok()),
            notes: stored.notes,
        };
        Ok(DesignDraft::default().merge(patch))
    }
}

/// Partial update of a draft. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub kind: Option<JewelryType>,
    pub metal: Option<Metal>,
    pub gem: Option<Gem>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignAction {
    SelectType(JewelryType),
    SelectMetal(Metal),
    SelectGem(Gem),
    EditNotes(String),
    Patch(DraftPatch),
}

impl From<DesignAction> for DraftPatch {
    fn from(action: DesignAction) -> Self {
        match action {
            DesignAction::SelectType(kind) => DraftPatch {
                kind: Some(kind),
                ..Default::default()
            },
            DesignAction::SelectMetal(metal) => DraftPatch {
                metal: Some(metal),
                ..Default::default()
            },
            DesignAction::SelectGem(gem) => DraftPatch {
                gem: Some(gem),
                ..Default::default()
            },
            DesignAction::EditNotes(notes) => DraftPatch {
                notes: Some(notes),
                ..Default::default()
            },
            DesignAction::Patch(patch) => patch,
        }
    }
}

/// One selectable option button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionButton<T> {
    pub value: T,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignView {
    pub draft: DesignDraft,
    pub types: Vec<OptionButton<JewelryType>>,
    pub metals: Vec<OptionButton<Metal>>,
    pub gems: Vec<OptionButton<Gem>>,
    pub preview_label: String,
    pub metal_fill: &'static str,
    pub gem_fill: &'static str,
}

/// The configurator slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignStudio;

impl ViewModel for DesignStudio {
    type State = DesignDraft;
    type Action = DesignAction;
    type View = DesignView;

    fn key(&self) -> &'static str {
        keys::DESIGN_DRAFT
    }

    fn default_state(&self) -> DesignDraft {
        DesignDraft::default()
    }

    fn mutate(&self, state: DesignDraft, action: DesignAction) -> Result<DesignDraft> {
        Ok(state.merge(action.into()))
    }

    fn render(&self, draft: &DesignDraft) -> DesignView {
        DesignView {
            types: buttons(JewelryType::all(), draft.kind, JewelryType::label),
            metals: buttons(Metal::all(), draft.metal, Metal::label),
            gems: buttons(Gem::all(), draft.gem, Gem::label),
            preview_label: draft.preview_label(),
            metal_fill: draft.metal.fill(),
            gem_fill: draft.gem.fill(),
            draft: draft.clone(),
        }
    }
}

fn buttons<T: Copy + PartialEq>(
    all: &[T],
    selected: T,
    label: fn(T) -> &'static str,
) -> Vec<OptionButton<T>> {
    all.iter()
        .map(|&value| OptionButton {
            value,
            label: label(value),
            active: value == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    #[test]
    fn patch_changes_only_named_fields() {
        let draft = DesignDraft {
            kind: JewelryType::Ring,
            metal: Metal::Gold,
            gem: Gem::Diamond,
            notes: String::new(),
        };
        let next = DesignStudio
            .mutate(draft, DesignAction::SelectMetal(Metal::Platinum))
            .unwrap();
        assert_eq!(
            next,
            DesignDraft {
                kind: JewelryType::Ring,
                metal: Metal::Platinum,
                gem: Gem::Diamond,
                notes: String::new(),
            }
        );
    }

    #[test]
    fn partial_stored_draft_fills_defaults() {
        let draft: DesignDraft = serde_json::from_str(r#"{"metal":"Silver"}"#).unwrap();
        assert_eq!(draft.kind, JewelryType::Ring);
        assert_eq!(draft.metal, Metal::Silver);
        assert_eq!(draft.gem, Gem::Diamond);
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn unrecognised_stored_field_keeps_default() {
        let draft: DesignDraft =
            serde_json::from_str(r#"{"type":"Tiara","gem":"Ruby","notes":"engrave"}"#).unwrap();
        assert_eq!(draft.kind, JewelryType::Ring);
        assert_eq!(draft.gem, Gem::Ruby);
        assert_eq!(draft.notes, "engrave");
    }

    #[test]
    fn stored_format_matches_existing_keys() {
        let draft = DesignDraft {
            kind: JewelryType::Necklace,
            metal: Metal::RoseGold,
            gem: Gem::Emerald,
            notes: "long chain".into(),
        };
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r#"{"type":"Necklace","metal":"Rose Gold","gem":"Emerald","notes":"long chain"}"#
        );
    }

    #[test]
    fn render_marks_active_options_and_preview() {
        let draft = DesignDraft {
            kind: JewelryType::Bracelet,
            metal: Metal::Platinum,
            gem: Gem::Sapphire,
            notes: String::new(),
        };
        let view = DesignStudio.render(&draft);
        assert_eq!(view.preview_label, "Platinum Bracelet • Sapphire");
        assert_eq!(view.metal_fill, "#cfd4da");
        assert_eq!(view.gem_fill, "#3b6ef6");
        let active: Vec<_> = view.types.iter().filter(|b| b.active).map(|b| b.label).collect();
        assert_eq!(active, vec!["Bracelet"]);
        assert_eq!(view, DesignStudio.render(&draft));
    }

    #[test]
    fn persisted_draft_round_trips() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, DesignStudio);
        binding
            .dispatch(DesignAction::Patch(DraftPatch {
                kind: Some(JewelryType::Earrings),
                gem: Some(Gem::Ruby),
                notes: Some("pair".into()),
                ..Default::default()
            }))
            .unwrap();
        let loaded = binding.load();
        assert_eq!(loaded.kind, JewelryType::Earrings);
        assert_eq!(loaded.gem, Gem::Ruby);
        assert_eq!(loaded.notes, "pair");
        assert!(store.get(keys::DESIGN_DRAFT).is_some());
    }

    #[test]
    fn summary_reads_metal_type_gem() {
        assert_eq!(DesignDraft::default().summary(), "Gold Ring with Diamond");
    }
}
