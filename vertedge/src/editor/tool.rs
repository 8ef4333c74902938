use serde::{Deserialize, Serialize};

use super::input::Modifiers;
use crate::model::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Move,
    Draw,
    Erase,
    Style,
    Grid,
    Capture,
    Data,
    Load,
    Save,
    Help,
}

impl Tool {
    /// Whether pointer presses resolve the element under the cursor.
    pub fn allows_selection(self) -> bool {
        !matches!(self, Tool::Move | Tool::Capture)
    }

    /// Highlight colour while this tool is active.
    pub fn accent(self, default: &str) -> &str {
        match self {
            Tool::Draw => color::GREEN_DARK,
            Tool::Erase => color::RED,
            _ => default,
        }
    }
}

/// A key plus the Ctrl modifier it requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
}

impl Shortcut {
    pub const fn key(key: &'static str) -> Self {
        Self { key, ctrl: false }
    }

    pub const fn ctrl(key: &'static str) -> Self {
        Self { key, ctrl: true }
    }

    pub fn matches(&self, key: &str, mods: Modifiers) -> bool {
        self.ctrl == mods.ctrl && self.key.eq_ignore_ascii_case(key)
    }
}

#[derive(Clone, Debug)]
pub struct ToolEntry {
    pub tool: Tool,
    pub id: &'static str,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
}

/// The tool palette, in toolbar order.
#[derive(Clone, Debug)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ToolRegistry {
    pub fn standard() -> Self {
        let e = |tool, id, label, shortcut| ToolEntry { tool, id, label, shortcut };
        Self {
            entries: vec![
                e(Tool::Select, "select", "Select", Some(Shortcut::key("v"))),
                e(Tool::Move, "move", "Move", Some(Shortcut::key("m"))),
                e(Tool::Draw, "draw", "Draw", Some(Shortcut::key("d"))),
                e(Tool::Erase, "erase", "Erase", Some(Shortcut::key("x"))),
                e(Tool::Style, "style", "Style", Some(Shortcut::ctrl("s"))),
                e(Tool::Grid, "grid", "Grid", Some(Shortcut::key("g"))),
                e(Tool::Capture, "capture", "Capture", None),
                e(Tool::Data, "data", "View Data", None),
                e(Tool::Load, "load", "Load", Some(Shortcut::ctrl("o"))),
                e(Tool::Save, "save", "Save", Some(Shortcut::key("s"))),
                e(Tool::Help, "help", "Help", Some(Shortcut::key("h"))),
            ],
        }
    }

    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn by_shortcut(&self, key: &str, mods: Modifiers) -> Option<Tool> {
        self.entries
            .iter()
            .find(|e| e.shortcut.as_ref().is_some_and(|s| s.matches(key, mods)))
            .map(|e| e.tool)
    }

    pub fn by_id(&self, id: &str) -> Option<Tool> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.tool)
    }

    pub fn id_of(&self, tool: Tool) -> &'static str {
        self.entries.iter().find(|e| e.tool == tool).map_or("select", |e| e.id)
    }
}
