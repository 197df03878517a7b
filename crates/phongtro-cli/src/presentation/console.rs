//! Plain-text rendering for list and detail commands.

use super::view_models::{
    RentalCardView, RentalDetailView, WithdrawalCardView, WithdrawalDetailView,
};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use phongtro_core::{StatusBadge, Tone};

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

fn paint(text: &str, tone: Tone) -> String {
    if !use_color() {
        return text.to_string();
    }
    match tone {
        Tone::Amber => text.yellow().to_string(),
        Tone::Green => text.green().to_string(),
        Tone::Red => text.red().to_string(),
        Tone::Gray => text.bright_black().to_string(),
        Tone::Blue => text.blue().to_string(),
    }
}

fn badge_text(badge: &StatusBadge) -> String {
    match badge.sub_label {
        Some(sub) => format!("{} ({})", badge.label, sub),
        None => badge.label.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

pub fn render_rental_list(cards: &[RentalCardView]) {
    if cards.is_empty() {
        println!("No rental requests.");
        return;
    }

    let room_width = term_width().saturating_sub(70).clamp(12, 32);
    for card in cards {
        let marker = if card.unread { "●" } else { " " };
        println!(
            "{} {:<10} {:<20} {:<room_width$} {:>10} {:>2} {:>14}  {}",
            paint(marker, Tone::Blue),
            card.id,
            truncate(&card.tenant, 20),
            truncate(&card.room, room_width),
            card.start_date,
            card.guest_count,
            card.rent,
            paint(&badge_text(&card.badge), card.badge.tone),
        );
    }
    println!("\n{} request(s)", cards.len());
}

pub fn render_rental_detail(detail: &RentalDetailView) {
    println!(
        "{}  {}",
        detail.id,
        paint(&badge_text(&detail.badge), detail.badge.tone)
    );
    println!("Ưu tiên: {}", paint(detail.priority.label, detail.priority.tone));
    println!();

    for (label, value) in &detail.fields {
        println!("  {:<18} {}", format!("{}:", label), value);
    }
    if let Some(message) = &detail.message {
        println!("\n  Lời nhắn: {}", message);
    }
    if let Some(response) = &detail.response_message {
        println!("  Phản hồi: {}", response);
    }
    if let Some(agreement) = &detail.agreement_id {
        println!("\n  Hợp đồng: phongtro agreement download {}", agreement);
    }
}

pub fn render_withdrawal_list(cards: &[WithdrawalCardView]) {
    if cards.is_empty() {
        println!("No withdrawal requests.");
        return;
    }

    for card in cards {
        println!(
            "{:<10} {:<20} {:<16} {:>14} {:>10}  {}",
            card.id,
            truncate(&card.tenant, 20),
            card.kind,
            card.amount,
            card.created_at,
            paint(&badge_text(&card.badge), card.badge.tone),
        );
    }
    println!("\n{} request(s)", cards.len());
}

pub fn render_withdrawal_detail(detail: &WithdrawalDetailView) {
    println!(
        "{}  {}",
        detail.id,
        paint(&badge_text(&detail.badge), detail.badge.tone)
    );
    println!();

    for (label, value) in &detail.fields {
        println!("  {:<18} {}", format!("{}:", label), value);
    }
    println!("\n  Lý do: {}", detail.reason);
    if let Some(note) = &detail.response_note {
        println!("  Ghi chú của chủ nhà: {}", note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Phòng 101", 20), "Phòng 101");
        assert_eq!(truncate("Nhà trọ Bình An quận 7", 10), "Nhà trọ B…");
    }

    #[test]
    fn test_badge_text_includes_sub_label() {
        let badge = StatusBadge {
            label: "Đã chấp nhận",
            tone: Tone::Green,
            sub_label: Some("Chờ thanh toán"),
        };
        assert_eq!(badge_text(&badge), "Đã chấp nhận (Chờ thanh toán)");
    }
}
