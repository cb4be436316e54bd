//! Memory pane rendering with globals, call frames and their scopes
//!
//! # Layout
//!
//! ```text
//! ▸ Globals │ global_scope
//! 0x000f4240 g : 0                    int
//!
//! ▸ Frame 0 │ main()
//!   ┄ main.scope_01
//! 0x000f424c x : 3                    int
//!   ┄ main.scope_00
//! 0x000f4244 p : 0x000f4240          int*
//! ```
//!
//! Frames are listed outermost call first; inside a frame, scopes are listed
//! innermost first, which is the order names are resolved in. Values are
//! looked up without materializing unwritten cells, so drawing the pane never
//! changes memory.

use super::theme::DEFAULT_THEME;
use crate::memory::scope::Scope;
use crate::memory::value::{Address, Value};
use crate::memory::Memory;
use crate::types::TypeSystem;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Scroll state for the memory pane
#[derive(Debug, Default)]
pub struct MemoryScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Data needed to render the memory pane
pub struct MemoryRenderData<'a, T: TypeSystem> {
    pub memory: &'a Memory<T>,
    /// Address to highlight, e.g. the target of a failed access
    pub error_address: Option<Address>,
}

/// Render the memory pane
pub fn render_memory_pane<T: TypeSystem>(
    frame: &mut ratatui::Frame,
    area: Rect,
    data: MemoryRenderData<T>,
    is_focused: bool,
    scroll_state: &mut MemoryScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Memory ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let content_width = area.width.saturating_sub(2) as usize; // borders only
    let memory = data.memory;
    let mut all_items = Vec::new();

    all_items.push(ListItem::new(section_header(
        "Globals",
        memory.global_scope().name(),
    )));
    push_bindings(&mut all_items, memory.global_scope(), &data, content_width);

    let frames = memory.call_stack().frames();
    for (depth, stack_frame) in frames.iter().enumerate() {
        all_items.push(ListItem::new(Line::from("")));
        all_items.push(ListItem::new(section_header(
            &format!("Frame {}", depth),
            &format!("{}()", stack_frame.name()),
        )));

        for scope in stack_frame.scopes() {
            all_items.push(ListItem::new(Line::from(vec![
                Span::styled("  ┄ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    scope.name().to_string(),
                    Style::default().fg(DEFAULT_THEME.scope_name),
                ),
            ])));
            push_bindings(&mut all_items, scope, &data, content_width);
        }
    }

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Auto-scroll to the bottom only when content grows
    if total_items > scroll_state.prev_item_count {
        scroll_state.offset = total_items.saturating_sub(visible_height);
    } else {
        let max_scroll = total_items.saturating_sub(visible_height);
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    }
    scroll_state.prev_item_count = total_items;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

fn section_header(label: &str, name: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            name.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn push_bindings<T: TypeSystem>(
    items: &mut Vec<ListItem<'static>>,
    scope: &Scope,
    data: &MemoryRenderData<T>,
    content_width: usize,
) {
    if scope.is_empty() {
        items.push(
            ListItem::new("  (empty)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
        return;
    }

    for (name, addr) in scope.bindings() {
        let addr_style = if Some(addr) == data.error_address {
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let stored = data.memory.raw_value(addr);
        let (value_text, value_style) = match stored {
            Some(value) if value.is_pointer() => {
                (value.to_string(), Style::default().fg(DEFAULT_THEME.pointer))
            }
            Some(Value::Null) => (
                Value::Null.to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Some(value) => (value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            None => (
                "[uninit]".to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ),
        };
        let type_str = stored
            .and_then(Value::type_name)
            .unwrap_or_default()
            .to_string();

        // addr(10) + " " + name + " : " + value
        let left_width = 14 + name.len() + value_text.len();
        let padding = content_width.saturating_sub(left_width + type_str.len());

        let line = Line::from(vec![
            Span::styled(format!("0x{:08x} ", addr), addr_style),
            Span::styled(format!("{} ", name), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(": ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(value_text, value_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(type_str, Style::default().fg(DEFAULT_THEME.type_name)),
        ]);
        items.push(ListItem::new(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CTypes;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn draw(
        memory: &Memory<CTypes>,
        error_address: Option<Address>,
        height: u16,
        state: &mut MemoryScrollState,
    ) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                let data = MemoryRenderData {
                    memory,
                    error_address,
                };
                render_memory_pane(f, area, data, true, state);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_renders_globals_and_frames() {
        let mut mem = Memory::new(CTypes::new());
        mem.declare("int", "g");
        mem.enter_call("main").unwrap();
        mem.declare("int*", "p");
        mem.enter_block().unwrap();
        mem.declare("int", "x");
        mem.write("x", Value::int("int", 3)).unwrap();

        let buffer = draw(&mem, None, 20, &mut MemoryScrollState::default());
        let screen = rows(&buffer).join("\n");
        assert!(screen.contains("Memory"));
        assert!(screen.contains("Globals │ global_scope"));
        assert!(screen.contains("0x000f4240 g : 0"));
        assert!(screen.contains("Frame 0 │ main()"));
        assert!(screen.contains("main.scope_01"));
        assert!(screen.contains("x : 3"));
        assert!(screen.contains("p : NULL"));
        assert!(screen.contains("int*"));

        // Innermost scope is listed before the base scope
        let inner = screen.find("main.scope_01").unwrap();
        let base = screen.find("main.scope_00").unwrap();
        assert!(inner < base);
    }

    #[test]
    fn test_error_address_highlighted() {
        let mut mem = Memory::new(CTypes::new());
        mem.declare("int", "a");
        let bad = mem.declare("int", "b");

        let buffer = draw(&mem, Some(bad), 10, &mut MemoryScrollState::default());
        let width = buffer.area.width as usize;
        let lines = rows(&buffer);
        let row_a = lines.iter().position(|r| r.contains(" a : ")).unwrap();
        let row_b = lines.iter().position(|r| r.contains(" b : ")).unwrap();

        // Content starts right after the left border
        assert_eq!(buffer.content[row_b * width + 1].fg, DEFAULT_THEME.error);
        assert_eq!(buffer.content[row_a * width + 1].fg, DEFAULT_THEME.comment);
    }

    #[test]
    fn test_scroll_follows_growth() {
        let mut mem = Memory::new(CTypes::new());
        for i in 0..20 {
            mem.declare("int", &format!("v{}", i));
        }
        let mut state = MemoryScrollState::default();
        let screen = rows(&draw(&mem, None, 8, &mut state));
        // 1 header + 20 bindings, 6 visible rows
        assert_eq!(state.prev_item_count, 21);
        assert_eq!(state.offset, 15);
        assert!(screen.iter().any(|row| row.contains("v19")));
        assert!(!screen.iter().any(|row| row.contains("v0 ")));
    }
}
