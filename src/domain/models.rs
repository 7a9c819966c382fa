use crate::cli::KitType;
use crate::services::ledger::SelectionLedger;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Kept as `imageUrl` so snapshots written by the web storefront still load.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct KitConfig {
    pub kit: KitType,
    pub label: &'static str,
    pub size: u32,
    pub price: &'static str,
    pub description: &'static str,
}

impl KitConfig {
    pub fn pack_size_label(&self) -> String {
        format!("{} Cards", self.size)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub name: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    KitSelection,
    Gallery,
    Checkout,
    Summary,
    Admin,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::KitSelection => "kit-selection",
            Step::Gallery => "gallery",
            Step::Checkout => "checkout",
            Step::Summary => "summary",
            Step::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wizard session persisted between invocations.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Session {
    #[serde(default)]
    pub step: Step,
    #[serde(default)]
    pub kit: Option<KitType>,
    #[serde(default)]
    pub ledger: SelectionLedger,
    #[serde(default)]
    pub order: Option<OrderDetails>,
}

/// Body sent to the order endpoint. Field names match the sheet integration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub date: String,
    pub customer_name: String,
    pub email: String,
    pub address: String,
    pub pack_size: String,
    pub manifest: String,
}

#[derive(Serialize, Clone)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub quantity: u32,
}

#[derive(Serialize, Clone)]
pub struct ProgressReport {
    pub total: u32,
    pub target: u32,
    pub status: String,
    pub headline: String,
    pub message: String,
    pub percentage: f64,
    pub can_continue: bool,
}

#[derive(Serialize)]
pub struct LedgerUpdate {
    pub id: String,
    pub quantity: u32,
    pub progress: ProgressReport,
}

#[derive(Serialize, Debug)]
pub struct SubmitReport {
    pub step: Step,
    pub kit: String,
    pub order: OrderDetails,
    pub manifest: String,
    /// Whether a delivery attempt was started; never a delivery confirmation.
    pub dispatched: bool,
}

#[derive(Serialize)]
pub struct SummaryLine {
    pub title: String,
    pub count: u32,
}

#[derive(Serialize)]
pub struct SummaryReport {
    pub kit: String,
    pub size: u32,
    pub order: OrderDetails,
    pub items: Vec<SummaryLine>,
    pub text: String,
    pub mailto: String,
}

#[derive(Serialize)]
pub struct StepReport {
    pub step: Step,
    pub kit: Option<KitType>,
    pub total_selected: u32,
    /// Wizard actions the current step accepts.
    pub actions: Vec<&'static str>,
}
