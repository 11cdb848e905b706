use crate::render;
use crate::theme::Theme;
use gridkit_core::input::InputEvent;
use gridkit_core::input::MouseButton;
use gridkit_core::input::MouseEvent;
use gridkit_core::input::MouseEventKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Screen coordinate the menu is anchored to, typically taken straight from
/// the triggering right-click event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Host-owned menu state. The overlay renders and interprets events against
/// this; it never mutates it. Closing the menu means the host dropping or
/// replacing this value, so nothing from one open can leak into the next.
#[derive(Clone, Debug, Default)]
pub struct ContextMenuState {
    pub items: Vec<MenuItem>,
    pub position: Position,
    pub open: bool,
}

impl ContextMenuState {
    pub fn open_at(items: Vec<MenuItem>, position: Position) -> Self {
        Self {
            items,
            position,
            open: true,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    /// The overlay bounds: anchored at the literal position, one row per
    /// item, wide enough for the widest label plus a one-column pad on each
    /// side. No viewport clamping; hosts wanting the menu kept on screen
    /// supply a clamped position.
    pub fn area(&self) -> Rect {
        let label_w = self
            .items
            .iter()
            .map(|item| item.label.as_str().width())
            .max()
            .unwrap_or(0);
        let width = (label_w + 2).min(u16::MAX as usize) as u16;
        let height = self.items.len().min(u16::MAX as usize) as u16;
        Rect::new(self.position.x, self.position.y, width, height)
    }
}

/// What the host should do in response to an event routed to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextMenuAction {
    None,
    Redraw,
    /// The item at `index` was activated. Run its action, then close the
    /// menu: activation always closes, even if the action does nothing.
    Activated { index: usize },
    /// The pointer left the overlay or pressed outside it. Close the menu;
    /// no item was activated.
    Dismissed,
}

/// Renders a [`ContextMenuState`] and maps pointer events onto it.
///
/// The only state the view holds is the hovered row, and that is cleared on
/// every activation or dismissal.
#[derive(Clone, Debug, Default)]
pub struct MenuView {
    hover: Option<usize>,
}

impl MenuView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn handle_event(&mut self, state: &ContextMenuState, event: InputEvent) -> ContextMenuAction {
        if !state.open {
            return ContextMenuAction::None;
        }
        match event {
            InputEvent::Mouse(m) => self.handle_mouse(state, m),
            InputEvent::Key(_) => ContextMenuAction::None,
        }
    }

    pub fn render(&self, state: &ContextMenuState, buf: &mut Buffer, theme: &Theme) {
        if !state.open || state.items.is_empty() {
            return;
        }
        let area = state.area();
        render::fill(area, buf, theme.menu_bg);
        for (i, item) in state.items.iter().enumerate() {
            let style = if self.hover == Some(i) {
                theme.menu_hover
            } else {
                theme.menu_bg
            };
            let y = area.y + i as u16;
            if self.hover == Some(i) {
                render::fill(Rect::new(area.x, y, area.width, 1), buf, style);
            }
            render::render_str_clipped(
                area.x + 1,
                y,
                area.width.saturating_sub(2),
                buf,
                &item.label,
                style,
            );
        }
    }

    fn handle_mouse(&mut self, state: &ContextMenuState, m: MouseEvent) -> ContextMenuAction {
        let area = state.area();
        let inside = hit(area, m.x, m.y);
        match m.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                let index = (m.y - area.y) as usize;
                self.hover = None;
                ContextMenuAction::Activated { index }
            }
            MouseEventKind::Down(_) => {
                // Any other press, inside or out, dismisses without
                // activating.
                self.hover = None;
                ContextMenuAction::Dismissed
            }
            MouseEventKind::Moved if inside => {
                let index = (m.y - area.y) as usize;
                if self.hover == Some(index) {
                    ContextMenuAction::None
                } else {
                    self.hover = Some(index);
                    ContextMenuAction::Redraw
                }
            }
            MouseEventKind::Moved => {
                // Pointer-exit dismissal.
                self.hover = None;
                ContextMenuAction::Dismissed
            }
            MouseEventKind::Up(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                ContextMenuAction::None
            }
        }
    }
}

fn hit(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
