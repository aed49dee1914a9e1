use crate::model::Unit;
use crate::ui::app::{App, EditField, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Brandbook colors
#[allow(dead_code)]
const BRAND_BG: Color = Color::Rgb(0xED, 0xED, 0xED); // #ededed - tło
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c - główny ciemny
#[allow(dead_code)]
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71 - akcent niebieski (reserved)
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0 - tło zaznaczenia
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68 - zielony (count)
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c - pomarańczowy (edited)
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - przygaszony (footer)

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const EDITED_COLOR: Color = BRAND_ORANGE;
const COUNT_COLOR: Color = BRAND_GREEN;

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        app,
        " ←→ Panel | ↑↓ Select | Enter Classify | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " IFC Takeoff | {} | {} groups | {} elements ",
        app.model_name,
        app.rows.len(),
        app.total_elements
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(22), // Categories
        Constraint::Percentage(78), // Groups
    ])
    .split(area);

    draw_categories(frame, chunks[0], app);
    draw_groups(frame, chunks[1], app);
}

fn draw_categories(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Categories;

    // Build items: "All" first, then categories
    let mut items: Vec<ListItem> = Vec::new();

    let all_selected = app.selected_category == 0;
    let all_style = if all_selected && is_focused {
        SELECTED_STYLE
    } else if all_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let all_marker = if all_selected && is_focused { " ◄" } else { "" };
    items.push(ListItem::new(Line::from(vec![
        Span::styled("All", all_style),
        Span::raw(" "),
        Span::styled(
            format!("({})", app.total_elements),
            Style::default().fg(COUNT_COLOR),
        ),
        Span::styled(all_marker, Style::default().fg(BRAND_ORANGE)),
    ])));

    for (i, category) in app.categories.iter().enumerate() {
        let is_selected = (i + 1) == app.selected_category;
        let style = if is_selected && is_focused {
            SELECTED_STYLE
        } else if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let marker = if is_selected && is_focused { " ◄" } else { "" };
        let count = app.category_instance_count(category);

        let content = Line::from(vec![
            Span::styled(category.clone(), style),
            Span::raw(" "),
            Span::styled(format!("({count})"), Style::default().fg(COUNT_COLOR)),
            Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
        ]);

        items.push(ListItem::new(content));
    }

    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    let title = format!(" Categories ({}) ", app.categories.len() + 1); // +1 for "All"
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

fn draw_groups(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Rows;
    let filtered_rows = app.filtered_rows();

    // Calculate visible area (subtract 3 for borders and header)
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_row >= visible_rows {
        app.selected_row - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec![
        "Type Name", "Szt.", "Area", "Volume", "Unit", "Measured", "Code",
    ])
    .style(HEADER_STYLE)
    .height(1);

    let table_rows: Vec<Row> = filtered_rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, row)| {
            let is_selected = i == app.selected_row;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else if row.is_edited {
                Style::default().fg(EDITED_COLOR)
            } else {
                Style::default()
            };

            Row::new(vec![
                row.display_name.clone(),
                row.instance_count.to_string(),
                format!("{:.2}", row.sum_area),
                format!("{:.2}", row.sum_volume),
                row.preferred_unit.label().to_string(),
                format!("{:.2}", row.measured_value),
                row.full_code.clone().unwrap_or_else(|| "-".to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(8),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(8),
        Constraint::Percentage(14),
        Constraint::Percentage(12),
    ];

    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    let title = format!(
        " {} ({} groups) ",
        app.selected_category_name(),
        filtered_rows.len()
    );
    let table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(table, area);

    // Draw scrollbar if needed
    if filtered_rows.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(filtered_rows.len()).position(app.selected_row);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, help: &str) {
    let text = match &app.status {
        Some(status) => format!(" {status} "),
        None => help.to_string(),
    };
    let style = if app.status.is_some() {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default().fg(BRAND_MUTED)
    };

    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_row_detail(frame: &mut Frame, app: &App) {
    let row = match app.selected_row_data() {
        Some(r) => r,
        None => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: type name
        Constraint::Length(3), // Info line
        Constraint::Length(9), // Quantities
        Constraint::Min(8),    // Classification
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(" Type: {} ", row.display_name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let marks = if row.marks.is_empty() {
        "-"
    } else {
        row.marks.as_str()
    };
    let remarks = if row.remarks.is_empty() {
        "-"
    } else {
        row.remarks.as_str()
    };
    let info_text = format!(
        "{}  |  Marks: {}  |  Remarks: {}",
        row.category, marks, remarks
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    draw_quantities(frame, chunks[2], app, row);
    draw_classification(frame, chunks[3], app);

    let help = if app.edit.is_some() {
        " Type value | Enter Commit | Esc Cancel "
    } else {
        " e Code | n Name | u Unit | s Save | Esc Back | q Quit "
    };
    draw_footer(frame, chunks[4], app, help);
}

fn draw_quantities(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    row: &crate::model::ClassifiedRow,
) {
    let preferred = app
        .draft
        .as_ref()
        .map_or(row.preferred_unit, |d| d.preferred_unit);

    let entries: [(Unit, String); 5] = [
        (Unit::Ut, row.instance_count.to_string()),
        (Unit::Ml, format!("{:.2}", row.sum_length)),
        (Unit::M2, format!("{:.2}", row.sum_area)),
        (Unit::M3, format!("{:.2}", row.sum_volume)),
        (Unit::Kg, format!("{:.2}", row.sum_mass)),
    ];

    let rows: Vec<Row> = entries
        .iter()
        .map(|(unit, value)| {
            let marker = if *unit == preferred { "◄ preferred" } else { "" };
            let style = if *unit == preferred {
                Style::default().fg(COUNT_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![unit.label().to_string(), value.clone(), marker.to_string()])
                .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(40),
        Constraint::Percentage(40),
    ];
    let header = Row::new(vec!["Unit", "Total", ""]).style(HEADER_STYLE);

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Quantities ")
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn draw_classification(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(draft) = &app.draft {
        let code_value = |code: &Option<String>| {
            code.clone().unwrap_or_else(|| "-".to_string())
        };
        lines.push(Line::from(vec![
            Span::styled("Custom name: ", Style::default().fg(BRAND_MUTED)),
            Span::raw(code_value(&draft.custom_name)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Chapter:     ", Style::default().fg(BRAND_MUTED)),
            Span::raw(code_value(&draft.chapter_code)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Subchapter:  ", Style::default().fg(BRAND_MUTED)),
            Span::raw(code_value(&draft.subchapter_code)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Sub-sub:     ", Style::default().fg(BRAND_MUTED)),
            Span::raw(code_value(&draft.subsubchapter_code)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Full code:   ", Style::default().fg(BRAND_MUTED)),
            Span::styled(
                code_value(&draft.full_code),
                Style::default().fg(EDITED_COLOR),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Unit / order: ", Style::default().fg(BRAND_MUTED)),
            Span::raw(format!(
                "{} / {}",
                draft.preferred_unit,
                draft.display_order
            )),
        ]));
    }

    if let Some(field) = app.edit {
        let label = match field {
            EditField::CodePath => "Code path: ",
            EditField::CustomName => "Name: ",
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(BRAND_ORANGE)),
            Span::raw(app.input.clone()),
            Span::styled("▌", Style::default().fg(BRAND_ORANGE)),
        ]));
    }

    let block = Paragraph::new(lines).block(
        Block::default()
            .title(" Classification ")
            .borders(Borders::ALL),
    );
    frame.render_widget(block, area);
}
