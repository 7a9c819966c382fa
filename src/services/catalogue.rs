use crate::domain::constants::seed_cards;
use crate::domain::models::Card;
use crate::services::errors::ShopError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Durable slot for the catalogue. Every mutation rewrites the full list.
pub trait CatalogueSnapshot {
    fn read(&self) -> anyhow::Result<Option<Vec<Card>>>;
    fn write(&mut self, cards: &[Card]) -> anyhow::Result<()>;
}

/// JSON file named after the slot, inside the data directory.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn in_dir(dir: &Path, slot: &str) -> Self {
        Self {
            path: dir.join(format!("{}.json", slot)),
        }
    }
}

impl CatalogueSnapshot for FileSnapshot {
    fn read(&self) -> anyhow::Result<Option<Vec<Card>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let cards = serde_json::from_str(&raw)
            .with_context(|| format!("invalid catalogue snapshot {}", self.path.display()))?;
        Ok(Some(cards))
    }

    fn write(&mut self, cards: &[Card]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(cards)?)?;
        tracing::debug!(path = %self.path.display(), cards = cards.len(), "catalogue snapshot written");
        Ok(())
    }
}

/// Fields collected by the admin form before a card exists.
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub title: String,
    pub category: String,
    pub image_url: String,
}

pub struct CatalogueStore<S: CatalogueSnapshot> {
    cards: Vec<Card>,
    snapshot: S,
}

impl<S: CatalogueSnapshot> CatalogueStore<S> {
    /// Hydrates from the snapshot if one was ever written, else from the seed list.
    pub fn load(snapshot: S) -> anyhow::Result<Self> {
        let cards = match snapshot.read()? {
            Some(cards) => cards,
            None => {
                tracing::debug!("no catalogue snapshot, using seed list");
                seed_cards()
            }
        };
        Ok(Self { cards, snapshot })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Prepends `card` and persists.
    pub fn add(&mut self, card: Card) -> anyhow::Result<()> {
        self.cards.insert(0, card);
        self.persist()
    }

    /// Drops every card with `id` and persists. Returns how many went.
    pub fn remove(&mut self, id: &str) -> anyhow::Result<usize> {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.persist()?;
        Ok(before.saturating_sub(self.cards.len()))
    }

    /// Builds a card from an admin draft. Ids are creation milliseconds,
    /// bumped past any id already in the catalogue.
    pub fn card_from_draft(&self, draft: CardDraft, now_ms: i64) -> Result<Card, ShopError> {
        for (field, value) in [
            ("title", &draft.title),
            ("category", &draft.category),
            ("image", &draft.image_url),
        ] {
            if value.trim().is_empty() {
                return Err(ShopError::MissingField(field));
            }
        }
        let mut stamp = now_ms;
        while self.find(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        Ok(Card {
            id: stamp.to_string(),
            title: draft.title.trim().to_string(),
            category: draft.category.trim().to_string(),
            image_url: draft.image_url.trim().to_string(),
        })
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        self.snapshot.write(&self.cards)
    }
}

#[cfg(test)]
pub mod testing {
    use super::CatalogueSnapshot;
    use crate::domain::models::Card;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory slot; clones share the same slot so a reload sees prior writes.
    #[derive(Clone, Default)]
    pub struct MemorySnapshot {
        slot: Rc<RefCell<Option<String>>>,
    }

    impl MemorySnapshot {
        pub fn writes_seen(&self) -> bool {
            self.slot.borrow().is_some()
        }
    }

    impl CatalogueSnapshot for MemorySnapshot {
        fn read(&self) -> anyhow::Result<Option<Vec<Card>>> {
            match self.slot.borrow().as_deref() {
                Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
                None => Ok(None),
            }
        }

        fn write(&mut self, cards: &[Card]) -> anyhow::Result<()> {
            *self.slot.borrow_mut() = Some(serde_json::to_string(cards)?);
            Ok(())
        }
    }
}
