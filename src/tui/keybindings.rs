//! Keybinding definitions
//!
//! Defines the keyboard shortcuts shown in the help dialog. The handler in
//! `handler.rs` implements the same bindings.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Alternative keys, for display only
    pub aliases: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Moving between steps
    Navigation,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Navigation => "Navigation",
            Self::Dialog => "Dialogs",
        }
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        aliases: "Esc",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        aliases: "",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        aliases: "",
        description: "Help",
        context: KeyContext::Global,
    },
    // Navigation
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        aliases: "h/p",
        description: "Previous step",
        context: KeyContext::Navigation,
    },
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        aliases: "l/n/Space",
        description: "Next step",
        context: KeyContext::Navigation,
    },
    Keybinding {
        key: KeyCode::Char('1'),
        modifiers: KeyModifiers::NONE,
        aliases: "..5",
        description: "Jump to step",
        context: KeyContext::Navigation,
    },
    Keybinding {
        key: KeyCode::Home,
        modifiers: KeyModifiers::NONE,
        aliases: "g",
        description: "First step",
        context: KeyContext::Navigation,
    },
    Keybinding {
        key: KeyCode::End,
        modifiers: KeyModifiers::NONE,
        aliases: "G",
        description: "Last step",
        context: KeyContext::Navigation,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        aliases: "any key",
        description: "Close dialog",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };
    parts.push(key_str);

    let formatted = parts.join("+");
    if kb.aliases.is_empty() {
        formatted
    } else if kb.aliases.starts_with("..") {
        format!("{}{}", formatted, kb.aliases)
    } else {
        format!("{}/{}", formatted, kb.aliases)
    }
}
