use jobscout_core::{AppViewModel, JobCardView};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use crate::platform::form::{FormField, SearchForm};

pub fn draw(frame: &mut Frame, view: &AppViewModel, form: &SearchForm) {
    let areas = layout::screen_areas(frame.area());

    let title = Line::from(Span::styled(
        APP_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title), areas.title);

    draw_form(frame, areas.form, form);

    let pager = pager_line(view);
    frame.render_widget(Paragraph::new(pager.clone()), areas.pager_top);
    draw_results(frame, areas.results, view);
    frame.render_widget(Paragraph::new(pager), areas.pager_bottom);

    frame.render_widget(
        Paragraph::new(HINT_LINE).style(Style::default().fg(Color::DarkGray)),
        areas.hints,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, form: &SearchForm) {
    let (description_area, location_area, toggle_area) = layout::form_columns(area);

    draw_input(
        frame,
        description_area,
        LABEL_DESCRIPTION,
        form.description.value(),
        form.focus == FormField::Description,
    );
    draw_input(
        frame,
        location_area,
        LABEL_LOCATION,
        form.location.value(),
        form.focus == FormField::Location,
    );

    let toggle_label = if form.full_time {
        LABEL_FULL_TIME_ON
    } else {
        LABEL_FULL_TIME_OFF
    };
    frame.render_widget(
        Paragraph::new(toggle_label).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(form.focus == FormField::FullTime)),
        ),
        toggle_area,
    );

    // Terminal cursor tracks the focused text input.
    if let Some(cursor) = form.focused_cursor() {
        let input_area = match form.focus {
            FormField::Description => description_area,
            FormField::Location => location_area,
            FormField::FullTime => return,
        };
        frame.set_cursor_position((input_area.x + 1 + cursor as u16, input_area.y + 1));
    }
}

fn draw_input(frame: &mut Frame, area: Rect, title: &'static str, value: &str, focused: bool) {
    frame.render_widget(
        Paragraph::new(value.to_string()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(focus_style(focused)),
        ),
        area,
    );
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn pager_line(view: &AppViewModel) -> Line<'static> {
    let enabled = Style::default().fg(Color::Cyan);
    let disabled = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled(
            "<< Prev",
            if view.prev_enabled { enabled } else { disabled },
        ),
        Span::raw(format!("   Page {}   ", view.page)),
        Span::styled(
            "Next >>",
            if view.next_enabled { enabled } else { disabled },
        ),
    ])
}

fn draw_results(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Jobs ({})", view.job_count));

    if view.loading {
        frame.render_widget(Paragraph::new(LOADING_LINE).block(block), area);
        return;
    }

    if view.error.is_some() {
        // Failure detail is in the log; the screen keeps it generic.
        let line = Line::from(Span::styled(ERROR_LINE, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let items: Vec<ListItem> = view.jobs.iter().map(job_row).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn job_row(job: &JobCardView) -> ListItem<'static> {
    let title_line = Line::from(Span::styled(
        job.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let mut meta = Vec::new();
    if let Some(company) = &job.company {
        meta.push(company.clone());
    }
    if let Some(location) = &job.location {
        meta.push(location.clone());
    }
    if let Some(kind) = &job.kind {
        meta.push(kind.clone());
    }
    if let Some(created_at) = &job.created_at {
        meta.push(created_at.clone());
    }
    let meta_line = Line::from(Span::styled(
        format!("  {}", meta.join(" | ")),
        Style::default().fg(Color::Gray),
    ));

    ListItem::new(vec![title_line, meta_line])
}
