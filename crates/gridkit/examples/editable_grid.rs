use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use gridkit::context_menu::ContextMenuAction;
use gridkit::context_menu::ContextMenuState;
use gridkit::context_menu::MenuItem;
use gridkit::context_menu::MenuView;
use gridkit::context_menu::Position;
use gridkit::crossterm_input::input_event_from_crossterm;
use gridkit::detail_row::DetailRow;
use gridkit::detail_row::DetailTone;
use gridkit::edit::EditBindings;
use gridkit::edit::EditSession;
use gridkit::input::InputEvent;
use gridkit::input::KeyCode;
use gridkit::input::MouseButton;
use gridkit::input::MouseEventKind;
use gridkit::render;
use gridkit::selection::RowSelection;
use gridkit::theme::Theme;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

const COL_WIDTHS: [u16; 3] = [6, 14, 14];

struct App {
    rows: Vec<(u64, String, String)>,
    selection: RowSelection<u64>,
    edit: EditSession<u64, usize>,
    bindings: EditBindings,
    menu: ContextMenuState,
    menu_view: MenuView,
    menu_row: Option<u64>,
    expanded: Option<u64>,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rows: Vec<(u64, String, String)> = [
        (1, "Ada", "Lovelace"),
        (2, "Grace", "Hopper"),
        (3, "Edsger", "Dijkstra"),
        (4, "Barbara", "Liskov"),
        (5, "Tony", "Hoare"),
    ]
    .into_iter()
    .map(|(k, a, b)| (k, a.to_string(), b.to_string()))
    .collect();

    let mut selection = RowSelection::new_uncontrolled();
    selection.set_row_keys(rows.iter().map(|r| r.0).collect());

    let mut app = App {
        rows,
        selection,
        edit: EditSession::new(),
        bindings: EditBindings::default(),
        menu: ContextMenuState::closed(),
        menu_view: MenuView::new(),
        menu_row: None,
        expanded: None,
    };

    let res = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let theme = Theme::dark();
    loop {
        terminal.draw(|f| draw(f, app, &theme))?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(event) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };

        // The open menu captures pointer events first.
        if app.menu.open {
            match app.menu_view.handle_event(&app.menu, event) {
                ContextMenuAction::Activated { index } => {
                    run_menu_action(app, index);
                    app.menu = ContextMenuState::closed();
                    continue;
                }
                ContextMenuAction::Dismissed => {
                    app.menu = ContextMenuState::closed();
                    continue;
                }
                ContextMenuAction::Redraw => continue,
                ContextMenuAction::None => {}
            }
        }

        match event {
            InputEvent::Key(key) if app.edit.is_editing() => {
                if app.bindings.is_save(&key) {
                    if let Some(commit) = app.edit.save_edit() {
                        apply_commit(app, commit.row, commit.column, commit.value);
                    }
                } else if app.bindings.is_cancel(&key) {
                    app.edit.cancel_edit();
                } else if let KeyCode::Char(c) = key.code {
                    let mut value = app.edit.value().unwrap_or_default().to_string();
                    value.push(c);
                    app.edit.set_value(value);
                } else if key.code == KeyCode::Backspace {
                    let mut value = app.edit.value().unwrap_or_default().to_string();
                    value.pop();
                    app.edit.set_value(value);
                }
            }
            InputEvent::Key(key) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('a') => {
                    let all = app.selection.selected_count() < app.rows.len();
                    app.selection.select_all(all);
                }
                _ => {}
            },
            InputEvent::Mouse(m) => match m.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(key) = row_key_at(app, m.y) {
                        let now = !app.selection.is_selected(&key);
                        app.selection.select_row(key, now);
                    }
                }
                MouseEventKind::Down(MouseButton::Right) => {
                    if let Some(key) = row_key_at(app, m.y) {
                        app.menu_row = Some(key);
                        app.menu = ContextMenuState::open_at(
                            vec![
                                MenuItem::new("Edit first name"),
                                MenuItem::new("Toggle details"),
                                MenuItem::new("Clear selection"),
                            ],
                            Position::new(m.x, m.y),
                        );
                    }
                }
                _ => {}
            },
        }
    }
}

fn run_menu_action(app: &mut App, index: usize) {
    let Some(key) = app.menu_row else {
        return;
    };
    match index {
        0 => {
            if let Some(row) = app.rows.iter().find(|r| r.0 == key) {
                app.edit.start_edit(key, 1, row.1.clone());
            }
        }
        1 => {
            app.expanded = if app.expanded == Some(key) {
                None
            } else {
                Some(key)
            };
        }
        2 => {
            app.selection.select_all(false);
        }
        _ => {}
    }
}

fn apply_commit(app: &mut App, row: u64, column: usize, value: String) {
    if let Some(r) = app.rows.iter_mut().find(|r| r.0 == row) {
        match column {
            1 => r.1 = value,
            2 => r.2 = value,
            _ => {}
        }
    }
}

fn row_key_at(app: &App, y: u16) -> Option<u64> {
    // Header occupies row 0; an expanded detail row shifts everything below
    // it down by one.
    let mut screen_y = 1u16;
    for row in &app.rows {
        if y == screen_y {
            return Some(row.0);
        }
        screen_y += 1;
        if app.expanded == Some(row.0) {
            screen_y += 1;
        }
    }
    None
}

fn draw(f: &mut ratatui::Frame<'_>, app: &App, theme: &Theme) {
    let area = f.area();
    let buf = f.buffer_mut();

    let total_w: u16 = COL_WIDTHS.iter().sum();
    render::render_str_clipped(0, 0, total_w, buf, "key   first         last", theme.accent);

    let mut y = 1u16;
    for row in &app.rows {
        if y >= area.height {
            break;
        }
        let selected = app.selection.is_selected(&row.0);
        let style = if selected {
            theme.accent
        } else {
            theme.text_primary
        };
        let marker = if selected { ">" } else { " " };

        let first = match app.edit.editing() {
            Some(cell) if cell.row == row.0 && cell.column == 1 => {
                format!("[{}]", cell.value)
            }
            _ => row.1.clone(),
        };
        let line = format!("{marker}{:<5}{first:<14}{:<14}", row.0, row.2);
        render::render_str_clipped(0, y, total_w, buf, &line, style);
        y += 1;

        if app.expanded == Some(row.0) && y < area.height {
            let detail = DetailRow::new(format!("  {} {} (demo detail row)", row.1, row.2), 3)
                .with_tone(DetailTone::Dark);
            detail.render(Rect::new(0, y, area.width, 1), buf, &COL_WIDTHS, theme);
            y += 1;
        }
    }

    let help = "click select | right-click menu | a all | q quit";
    if area.height > 0 {
        render::render_str_clipped(0, area.height - 1, area.width, buf, help, theme.text_muted);
    }

    app.menu_view.render(&app.menu, buf, theme);
}
