//! Display-ready models, fully formatted; renderers only lay them out.

use phongtro_core::StatusBadge;

#[derive(Debug, Clone)]
pub struct RentalCardView {
    pub id: String,
    pub tenant: String,
    pub room: String,
    pub start_date: String,
    pub guest_count: u32,
    pub rent: String,
    pub badge: StatusBadge,
    pub priority: StatusBadge,
    pub unread: bool,
}

#[derive(Debug, Clone)]
pub struct RentalDetailView {
    pub id: String,
    pub badge: StatusBadge,
    pub priority: StatusBadge,
    /// Labelled lines in display order.
    pub fields: Vec<(&'static str, String)>,
    pub message: Option<String>,
    pub response_message: Option<String>,
    pub agreement_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WithdrawalCardView {
    pub id: String,
    pub tenant: String,
    pub room: String,
    pub amount: String,
    pub kind: &'static str,
    pub badge: StatusBadge,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct WithdrawalDetailView {
    pub id: String,
    pub badge: StatusBadge,
    pub fields: Vec<(&'static str, String)>,
    pub reason: String,
    pub response_note: Option<String>,
}
