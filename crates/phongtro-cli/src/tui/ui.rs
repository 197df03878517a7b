use super::app::{App, Tab};
use crate::presentation::presenters;
use phongtro_core::{ActiveModal, REJECT_REASONS, StatusBadge, Tone, WithdrawalModal};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Amber => Color::Yellow,
        Tone::Green => Color::Green,
        Tone::Red => Color::Red,
        Tone::Gray => Color::DarkGray,
        Tone::Blue => Color::Cyan,
    }
}

fn badge_span(badge: &StatusBadge) -> Span<'static> {
    let text = match badge.sub_label {
        Some(sub) => format!("{} ({})", badge.label, sub),
        None => badge.label.to_string(),
    };
    Span::styled(text, Style::default().fg(tone_color(badge.tone)))
}

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(0),    // Request list
            Constraint::Length(1), // Status / error line
            Constraint::Length(1), // Footer (Help)
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_list(f, chunks[1], app);
    render_status(f, chunks[2], app);
    render_footer(f, chunks[3]);

    match app.tab {
        Tab::Rentals => match app.rentals.modal() {
            ActiveModal::None => {}
            ActiveModal::Details => render_rental_details(f, app),
            ActiveModal::Accept => render_accept_form(f, app),
            ActiveModal::Reject => render_reject_form(f, app),
        },
        Tab::Withdrawals => match app.withdrawals.modal() {
            WithdrawalModal::None => {}
            WithdrawalModal::Details => render_withdrawal_details(f, app),
            WithdrawalModal::Approve => render_approve_form(f, app),
            WithdrawalModal::Reject => render_withdrawal_reject_form(f, app),
        },
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let tab_style = |active: bool| {
        if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let title = Line::from(vec![
        Span::styled(
            "PHONGTRO",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" :: "),
        Span::styled(
            format!("Yêu cầu thuê ({})", app.rentals.requests().len()),
            tab_style(app.tab == Tab::Rentals),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Yêu cầu rút tiền ({})", app.withdrawals.requests().len()),
            tab_style(app.tab == Tab::Withdrawals),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    f.render_widget(block, area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let (items, cursor): (Vec<ListItem>, usize) = match app.tab {
        Tab::Rentals => {
            let items = app
                .rentals
                .requests()
                .iter()
                .map(|request| {
                    let card = presenters::present_rental_card(request);
                    let marker = if card.unread { "● " } else { "  " };
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Cyan)),
                        Span::raw(format!(
                            "{:<10} {:<20} {:>10} {:>12}  ",
                            card.id, card.tenant, card.start_date, card.rent
                        )),
                        badge_span(&card.badge),
                    ]))
                })
                .collect();
            (items, app.rental_cursor)
        }
        Tab::Withdrawals => {
            let items = app
                .withdrawals
                .requests()
                .iter()
                .map(|request| {
                    let card = presenters::present_withdrawal_card(request);
                    ListItem::new(Line::from(vec![
                        Span::raw(format!(
                            "  {:<10} {:<20} {:<14} {:>14}  ",
                            card.id, card.tenant, card.kind, card.amount
                        )),
                        badge_span(&card.badge),
                    ]))
                })
                .collect();
            (items, app.withdrawal_cursor)
        }
    };

    let empty = items.is_empty();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if !empty {
        state.select(Some(cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.modal_error() {
        Line::from(Span::styled(error, Style::default().fg(Color::Red)))
    } else if let Some(status) = &app.status {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer_line = Line::from(vec![
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw("switch "),
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw("move "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw("details "),
        Span::styled("[a]", Style::default().fg(Color::Yellow)),
        Span::raw("ccept/approve "),
        Span::styled("[x]", Style::default().fg(Color::Yellow)),
        Span::raw("reject "),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh"),
    ]);
    f.render_widget(Paragraph::new(footer_line), area);
}

/// Centered popup rect.
fn modal_area(f: &Frame, width: u16, height: u16) -> Rect {
    let area = f.area();
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
}

fn error_line(app: &App) -> Option<Line<'static>> {
    app.modal_error()
        .map(|error| Line::from(Span::styled(error, Style::default().fg(Color::Red))))
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let cursor = if active { "█" } else { "" };
    Line::from(vec![
        Span::styled(
            format!("{:<16}", label),
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        Span::raw(format!("{}{}", value, cursor)),
    ])
}

fn render_rental_details(f: &mut Frame, app: &App) {
    let Some(request) = app.rentals.selected() else {
        return;
    };
    let detail = presenters::present_rental_detail(request);

    let mut lines = vec![Line::from(vec![
        Span::raw(detail.id.clone()),
        Span::raw("  "),
        badge_span(&detail.badge),
        Span::raw("  "),
        badge_span(&detail.priority),
    ])];
    lines.push(Line::from(""));
    for (label, value) in &detail.fields {
        lines.push(Line::from(format!("{:<18} {}", format!("{}:", label), value)));
    }
    if let Some(message) = &detail.message {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Lời nhắn: {}", message)));
    }
    if let Some(response) = &detail.response_message {
        lines.push(Line::from(format!("Phản hồi: {}", response)));
    }

    let area = modal_area(f, 70, lines.len() as u16 + 4);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(modal_block("Chi tiết yêu cầu thuê"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_withdrawal_details(f: &mut Frame, app: &App) {
    let Some(request) = app.withdrawals.selected() else {
        return;
    };
    let detail = presenters::present_withdrawal_detail(request);

    let mut lines = vec![Line::from(vec![
        Span::raw(detail.id.clone()),
        Span::raw("  "),
        badge_span(&detail.badge),
    ])];
    lines.push(Line::from(""));
    for (label, value) in &detail.fields {
        lines.push(Line::from(format!("{:<18} {}", format!("{}:", label), value)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Lý do: {}", detail.reason)));
    if let Some(note) = &detail.response_note {
        lines.push(Line::from(format!("Ghi chú: {}", note)));
    }

    let area = modal_area(f, 70, lines.len() as u16 + 4);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(modal_block("Chi tiết yêu cầu rút tiền"))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_accept_form(f: &mut Frame, app: &App) {
    let Some(request) = app.rentals.selected() else {
        return;
    };

    let mut lines = vec![
        Line::from(format!(
            "{} - {}",
            request.tenant.full_name, request.room.title
        )),
        // Read-only reference: pricing is fixed to the room listing.
        Line::from(Span::styled(
            format!(
                "Giá phòng {} / cọc {}",
                phongtro_core::format::format_vnd(request.room.base_rent),
                phongtro_core::format::format_vnd(request.room.deposit),
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        field_line(
            "Lời phản hồi",
            &app.accept_form.message,
            app.accept_form.field == 0,
        ),
        field_line(
            "Ngày nhận phòng",
            &app.accept_form.start_date,
            app.accept_form.field == 1,
        ),
        field_line(
            "Ngày trả phòng",
            &app.accept_form.end_date,
            app.accept_form.field == 2,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] gửi  [Tab] trường kế  [Esc] đóng",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = error_line(app) {
        lines.push(error);
    }

    let area = modal_area(f, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(modal_block("Chấp nhận yêu cầu thuê")),
        area,
    );
}

fn render_reject_form(f: &mut Frame, app: &App) {
    let Some(request) = app.rentals.selected() else {
        return;
    };

    let reason = REJECT_REASONS[app.reject_form.reason_index];
    let mut lines = vec![
        Line::from(format!(
            "{} - {}",
            request.tenant.full_name, request.room.title
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Lý do (←/→):    ", Style::default().fg(Color::DarkGray)),
            Span::styled(reason, Style::default().fg(Color::Yellow)),
        ]),
        field_line("Ghi chú", &app.reject_form.note, true),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] gửi  [←/→] chọn lý do  [Esc] đóng",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = error_line(app) {
        lines.push(error);
    }

    let area = modal_area(f, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(modal_block("Từ chối yêu cầu thuê")),
        area,
    );
}

fn render_approve_form(f: &mut Frame, app: &App) {
    let Some(request) = app.withdrawals.selected() else {
        return;
    };

    let mut lines = vec![
        Line::from(format!(
            "{} - yêu cầu {}",
            request.tenant.full_name,
            phongtro_core::format::format_vnd(request.amount),
        )),
        Line::from(""),
        field_line(
            "Khấu trừ (VND)",
            &app.approve_form.deduction,
            app.approve_form.field == 0,
        ),
        field_line(
            "Lý do khấu trừ",
            &app.approve_form.reason,
            app.approve_form.field == 1,
        ),
        field_line("Ghi chú", &app.approve_form.note, app.approve_form.field == 2),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] duyệt  [Tab] trường kế  [Esc] đóng",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = error_line(app) {
        lines.push(error);
    }

    let area = modal_area(f, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(modal_block("Duyệt yêu cầu rút tiền")),
        area,
    );
}

fn render_withdrawal_reject_form(f: &mut Frame, app: &App) {
    let Some(request) = app.withdrawals.selected() else {
        return;
    };

    let mut lines = vec![
        Line::from(format!(
            "{} - yêu cầu {}",
            request.tenant.full_name,
            phongtro_core::format::format_vnd(request.amount),
        )),
        Line::from(""),
        field_line("Ghi chú", &app.withdrawal_note, true),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] gửi  [Esc] đóng",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(error) = error_line(app) {
        lines.push(error);
    }

    let area = modal_area(f, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(modal_block("Từ chối yêu cầu rút tiền")),
        area,
    );
}
