//! Display slots
//!
//! The three dashboard cards. Each holds a loading placeholder, a metric, or
//! the error marker, and is only ever overwritten as a whole set.

use crate::consts::cli_consts::{ERROR_TEXT, LOADING_TEXT};
use crate::metrics::AggregateMetrics;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SlotId {
    Techniques,
    States,
    Municipalities,
}

impl SlotId {
    pub const ALL: [SlotId; 3] = [SlotId::Techniques, SlotId::States, SlotId::Municipalities];

    /// Stable identifier of the card.
    pub fn id(&self) -> &'static str {
        match self {
            SlotId::Techniques => "card-tecnicas",
            SlotId::States => "card-estados",
            SlotId::Municipalities => "card-municipios",
        }
    }

    /// Noun appended to the count.
    pub fn noun(&self) -> &'static str {
        match self {
            SlotId::Techniques => "técnicas",
            SlotId::States => "estados",
            SlotId::Municipalities => "municipios",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SlotValue {
    #[default]
    Loading,
    Metric(usize),
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySlots {
    techniques: SlotValue,
    states: SlotValue,
    municipalities: SlotValue,
}

impl DisplaySlots {
    pub fn from_metrics(metrics: &AggregateMetrics) -> Self {
        Self {
            techniques: SlotValue::Metric(metrics.techniques),
            states: SlotValue::Metric(metrics.states),
            municipalities: SlotValue::Metric(metrics.municipalities),
        }
    }

    pub fn failed() -> Self {
        Self {
            techniques: SlotValue::Error,
            states: SlotValue::Error,
            municipalities: SlotValue::Error,
        }
    }

    pub fn get(&self, slot: SlotId) -> SlotValue {
        match slot {
            SlotId::Techniques => self.techniques,
            SlotId::States => self.states,
            SlotId::Municipalities => self.municipalities,
        }
    }

    /// Text shown in the card, e.g. `"12 técnicas"`.
    pub fn text(&self, slot: SlotId) -> String {
        match self.get(slot) {
            SlotValue::Loading => LOADING_TEXT.to_string(),
            SlotValue::Metric(n) => format!("{} {}", n, slot.noun()),
            SlotValue::Error => ERROR_TEXT.to_string(),
        }
    }
}

/// Handle shared between the loader, which writes, and the UI, which reads.
#[derive(Debug, Clone, Default)]
pub struct SharedSlots {
    inner: Arc<RwLock<DisplaySlots>>,
}

impl SharedSlots {
    pub async fn snapshot(&self) -> DisplaySlots {
        self.inner.read().await.clone()
    }

    /// Put every slot back to the loading placeholder.
    pub async fn reset(&self) {
        *self.inner.write().await = DisplaySlots::default();
    }

    pub async fn publish(&self, metrics: &AggregateMetrics) {
        *self.inner.write().await = DisplaySlots::from_metrics(metrics);
    }

    pub async fn fail(&self) {
        *self.inner.write().await = DisplaySlots::failed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_metrics_with_their_noun() {
        let slots = DisplaySlots::from_metrics(&AggregateMetrics {
            techniques: 2,
            states: 1,
            municipalities: 2,
        });
        assert_eq!(slots.text(SlotId::Techniques), "2 técnicas");
        assert_eq!(slots.text(SlotId::States), "1 estados");
        assert_eq!(slots.text(SlotId::Municipalities), "2 municipios");
    }

    #[test]
    fn new_slots_show_the_placeholder() {
        let slots = DisplaySlots::default();
        for slot in SlotId::ALL {
            assert_eq!(slots.get(slot), SlotValue::Loading);
            assert_eq!(slots.text(slot), "Cargando...");
        }
    }

    #[test]
    fn failure_marks_every_slot() {
        let slots = DisplaySlots::failed();
        for slot in SlotId::ALL {
            assert_eq!(slots.text(slot), "Error");
        }
    }

    #[test]
    fn slot_ids_are_stable() {
        let ids: Vec<_> = SlotId::ALL.iter().map(SlotId::id).collect();
        assert_eq!(ids, vec!["card-tecnicas", "card-estados", "card-municipios"]);
    }

    #[tokio::test]
    async fn shared_slots_are_overwritten_wholesale() {
        let shared = SharedSlots::default();
        shared
            .publish(&AggregateMetrics {
                techniques: 5,
                states: 3,
                municipalities: 4,
            })
            .await;
        assert_eq!(shared.snapshot().await.get(SlotId::States), SlotValue::Metric(3));

        shared.fail().await;
        assert_eq!(shared.snapshot().await, DisplaySlots::failed());

        shared.reset().await;
        assert_eq!(shared.snapshot().await, DisplaySlots::default());
    }
}
