//! Payment milestone checklist.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::keys;
use crate::view_model::ViewModel;

/// A known payment milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub id: &'static str,
    pub label: &'static str,
}

pub const STAGES: &[Stage] = &[
    Stage {
        id: "s1",
        label: "Deposit",
    },
    Stage {
        id: "s2",
        label: "Design approval",
    },
    Stage {
        id: "s3",
        label: "Final payment",
    },
];

/// Stage id → paid. Ids outside [`STAGES`] are kept but never shown.
pub type StageMap = BTreeMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkStage {
    pub stage: String,
    pub paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRow {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentsView {
    pub stages: Vec<StageRow>,
    pub percent: u8,
    /// CSS width of the progress bar.
    pub bar_width: String,
    pub label: String,
}

/// Rounded share of `done` over `total`, 0 when there are no stages.
pub fn completion_percent(done: usize, total: usize) -> u8 {
    let pct = (done as f64 / total.max(1) as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// The payment stage slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payments;

impl ViewModel for Payments {
    type State = StageMap;
    type Action = MarkStage;
    type View = PaymentsView;

    fn key(&self) -> &'static str {
        keys::PAYMENT_STAGES
    }

    fn default_state(&self) -> StageMap {
        STAGES.iter().map(|s| (s.id.to_string(), false)).collect()
    }

    fn mutate(&self, mut stages: StageMap, mark: MarkStage) -> Result<StageMap> {
        stages.insert(mark.stage, mark.paid);
        Ok(stages)
    }

    fn render(&self, stages: &StageMap) -> PaymentsView {
        let rows: Vec<StageRow> = STAGES
            .iter()
            .map(|s| StageRow {
                id: s.id,
                label: s.label,
                checked: stages.get(s.id).copied().unwrap_or(false),
            })
            .collect();
        let done = rows.iter().filter(|r| r.checked).count();
        let percent = completion_percent(done, rows.len());
        PaymentsView {
            stages: rows,
            percent,
            bar_width: format!("{percent}%"),
            label: format!("{percent}% complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::view_model::Binding;

    fn map(pairs: &[(&str, bool)]) -> StageMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn two_of_three_is_67_percent() {
        let view = Payments.render(&map(&[("s1", true), ("s2", true), ("s3", false)]));
        assert_eq!(view.percent, 67);
        assert_eq!(view.label, "67% complete");
        assert_eq!(view.bar_width, "67%");
    }

    #[test]
    fn missing_and_unknown_stages() {
        let view = Payments.render(&map(&[("s2", true), ("s9", true)]));
        let checked: Vec<_> = view.stages.iter().map(|r| r.checked).collect();
        assert_eq!(checked, vec![false, true, false]);
        assert_eq!(view.percent, 33);
    }

    #[test]
    fn no_stages_is_zero() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(3, 3), 100);
    }

    #[test]
    fn marking_persists_whole_map() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, Payments);
        assert_eq!(binding.current_view().percent, 0);

        let view = binding
            .dispatch(MarkStage {
                stage: "s1".into(),
                paid: true,
            })
            .unwrap();
        assert_eq!(view.percent, 33);
        assert_eq!(
            store.get(keys::PAYMENT_STAGES).as_deref(),
            Some(r#"{"s1":true,"s2":false,"s3":false}"#)
        );
    }
}
