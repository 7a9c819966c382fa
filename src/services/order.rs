//! Order packaging and delivery.
//!
//! Delivery is at-most-once with no confirmation: one POST per checkout,
//! no retry, the response is never read, and transport failures only
//! produce a log line. The wizard reaches `summary` whatever happens here.

use crate::domain::constants::{STORE_NAME, UNKNOWN_CARD_TITLE, UNKNOWN_DESIGN_TITLE};
use crate::domain::models::{
    Card, KitConfig, OrderDetails, OrderPayload, SubmitReport, SummaryLine,
};
use crate::services::errors::ShopError;
use crate::services::ledger::SelectionLedger;
use crate::services::wizard::Wizard;
use std::thread::JoinHandle;
use std::time::Duration;

fn resolve<'a>(cards: &'a [Card], id: &str, fallback: &'a str) -> &'a str {
    cards
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.title.as_str())
        .unwrap_or(fallback)
}

/// `"<count>x <title>"` per ledger entry, joined with `", "`.
pub fn build_manifest(ledger: &SelectionLedger, cards: &[Card]) -> String {
    ledger
        .entries()
        .map(|(id, count)| format!("{}x {}", count, resolve(cards, id, UNKNOWN_CARD_TITLE)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn summary_lines(ledger: &SelectionLedger, cards: &[Card]) -> Vec<SummaryLine> {
    ledger
        .entries()
        .map(|(id, count)| SummaryLine {
            title: resolve(cards, id, UNKNOWN_DESIGN_TITLE).to_string(),
            count,
        })
        .collect()
}

pub fn build_payload(
    details: &OrderDetails,
    kit: &KitConfig,
    manifest: String,
    date: String,
) -> OrderPayload {
    OrderPayload {
        date,
        customer_name: details.name.clone(),
        email: details.email.clone(),
        address: details.address.clone(),
        pack_size: kit.pack_size_label(),
        manifest,
    }
}

pub fn summary_text(kit: &KitConfig, details: &OrderDetails, lines: &[SummaryLine]) -> String {
    let mut text = format!("ORDER SUMMARY: {}\n", STORE_NAME.to_uppercase());
    text.push_str("====================================\n");
    text.push_str(&format!("Kit: {} ({} cards)\n", kit.label, kit.size));
    text.push_str(&format!("Customer: {}\n", details.name));
    text.push_str(&format!("Email: {}\n", details.email));
    text.push_str(&format!("Shipping: {}\n\n", details.address));
    text.push_str("SELECTED CURATION:\n");
    for line in lines {
        text.push_str(&format!("- {}x {}\n", line.count, line.title));
    }
    text
}

pub fn mailto_link(recipient: &str, details: &OrderDetails, summary: &str) -> String {
    format!(
        "mailto:{}?subject=New Curation: {}&body={}",
        recipient,
        details.name,
        urlencoding::encode(summary)
    )
}

/// Outbound seam for completed orders.
pub trait OrderSink {
    /// Starts delivery and returns at once. Never reports failure.
    fn dispatch(&mut self, payload: &OrderPayload);

    /// Blocks until started deliveries have finished or timed out.
    fn settle(&mut self) {}

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Checkout → summary: records the details, then hands the payload to `sink`.
/// The step change happens before dispatch and does not depend on it.
pub fn submit_order(
    wizard: &mut Wizard,
    cards: &[Card],
    details: OrderDetails,
    sink: &mut dyn OrderSink,
    date: String,
) -> Result<SubmitReport, ShopError> {
    let kit = wizard.submit(details.clone())?;
    let manifest = build_manifest(&wizard.session().ledger, cards);
    let payload = build_payload(&details, &kit, manifest.clone(), date);
    sink.dispatch(&payload);
    Ok(SubmitReport {
        step: wizard.step(),
        kit: kit.label.to_string(),
        order: details,
        manifest,
        dispatched: sink.is_enabled(),
    })
}

/// Used when no endpoint is configured.
pub struct DisabledSink;

impl OrderSink for DisabledSink {
    fn dispatch(&mut self, _payload: &OrderPayload) {
        tracing::debug!("order sync disabled, no endpoint configured");
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

pub struct HttpOrderSink {
    client: reqwest::blocking::Client,
    endpoint: String,
    in_flight: Vec<JoinHandle<()>>,
}

impl HttpOrderSink {
    pub fn new(endpoint: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms.max(1)))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            in_flight: Vec::new(),
        })
    }
}

impl OrderSink for HttpOrderSink {
    fn dispatch(&mut self, payload: &OrderPayload) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = payload.clone();
        let spawned = std::thread::Builder::new()
            .name("order-sync".to_string())
            .spawn(move || match client.post(&endpoint).json(&body).send() {
                Ok(_) => tracing::debug!(%endpoint, "order sync request sent"),
                Err(e) => tracing::warn!(%endpoint, error = %e, "failed to sync order"),
            });
        match spawned {
            Ok(handle) => self.in_flight.push(handle),
            Err(e) => tracing::warn!(error = %e, "could not start order sync"),
        }
    }

    fn settle(&mut self) {
        for handle in self.in_flight.drain(..) {
            let _ = handle.join();
        }
    }
}

/// Keeps every dispatched payload in memory.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Vec<OrderPayload>,
}

#[cfg(test)]
impl OrderSink for RecordingSink {
    fn dispatch(&mut self, payload: &OrderPayload) {
        self.sent.push(payload.clone());
    }
}
