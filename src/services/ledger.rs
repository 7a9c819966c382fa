use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Card id → requested quantity. Zero-count entries are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionLedger {
    entries: IndexMap<String, u32>,
}

impl SelectionLedger {
    /// Moves the quantity of `id` by `delta`, flooring at zero.
    pub fn adjust(&mut self, id: &str, delta: i64) -> u32 {
        let current = i64::from(self.quantity(id));
        self.store(id, clamp(current.saturating_add(delta)))
    }

    /// Replaces the quantity of `id`; negative input counts as zero.
    pub fn set_exact(&mut self, id: &str, value: i64) -> u32 {
        self.store(id, clamp(value))
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.entries
            .values()
            .fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    /// Index-like ids (`"0"`, `"7"`, `"42"`) come first in numeric order,
    /// then every other id in first-selection order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        let (mut indexed, rest): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .map(|(id, n)| (id.as_str(), *n))
            .partition(|(id, _)| index_key(id).is_some());
        indexed.sort_by_key(|(id, _)| index_key(id));
        indexed.into_iter().chain(rest)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn store(&mut self, id: &str, next: u32) -> u32 {
        if next == 0 {
            self.entries.shift_remove(id);
        } else if let Some(slot) = self.entries.get_mut(id) {
            *slot = next;
        } else {
            self.entries.insert(id.to_string(), next);
        }
        next
    }
}

/// Canonical array-index form: digits only, no leading zero, below `u32::MAX`.
fn index_key(id: &str) -> Option<u32> {
    let n: u32 = id.parse().ok()?;
    (n != u32::MAX && n.to_string() == id).then_some(n)
}

fn clamp(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Reads a quantity typed into a free-text field. Leading digits win
/// (`"12abc"` is 12, `"3.7"` is 3); anything without digits is 0.
pub fn parse_quantity(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if !seen {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}
