//! The step catalog and materials checklist
//!
//! Both lists are fixed at build time and never change at runtime.

use super::material::Material;
use super::step::Step;

/// Heading shown above the guide
pub const GUIDE_TITLE: &str = "AP Statistics: Using Grok to Help You Learn";

/// The ordered study workflow
pub static STEPS: [Step; 5] = [
    Step {
        title: "1. Set Up",
        icon: "📝",
        content: "Grab your materials: pencil, paper, calculator, formula sheet, laptop, and headphones (optional)",
        tips: &[
            "Find a quiet place to focus",
            "Make sure your laptop is charged",
        ],
    },
    Step {
        title: "2. Prepare Grok",
        icon: "🤖",
        content: "Open Grok and set up the AI tutor for your specific video",
        tips: &[
            "Copy the provided AP Statistics tutor prompt",
            "Start a new conversation in Grok",
        ],
    },
    Step {
        title: "3. Watch Video",
        icon: "📺",
        content: "Actively watch the video (starting with the lowest topic number)",
        tips: &["Take notes on paper", "Work through every example shown"],
    },
    Step {
        title: "4. Ask Questions",
        icon: "❓",
        content: "If you get confused during the video, pause and ask Grok for help",
        tips: &[
            "Be specific about what confused you",
            "Return to the video once you understand",
        ],
    },
    Step {
        title: "5. Practice Problems",
        icon: "🧩",
        content: "After the video, use Grok to work through the practice problems",
        tips: &[
            "Start with multiple choice",
            "Let Grok guide you through free response questions",
        ],
    },
];

/// Materials checklist, shown on every step
pub static MATERIALS: [Material; 7] = [
    Material {
        icon: "📄",
        label: "Paper",
    },
    Material {
        icon: "✏️",
        label: "Pencil",
    },
    Material {
        icon: "🧮",
        label: "Calculator",
    },
    Material {
        icon: "💻",
        label: "Laptop",
    },
    Material {
        icon: "🎧",
        label: "Headphones (optional)",
    },
    Material {
        icon: "📋",
        label: "Clipboard",
    },
    Material {
        icon: "📑",
        label: "AP Exam Formula Sheet",
    },
];

/// Read-only view over a step list
///
/// The navigator and renderers work against a `Catalog` rather than the
/// static arrays directly, so tests can drive them with shorter lists.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    steps: &'static [Step],
}

impl Catalog {
    /// Wrap a non-empty step list
    ///
    /// Returns `None` for an empty list, since an empty guide has no valid
    /// current step.
    pub fn new(steps: &'static [Step]) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    /// The built-in study workflow
    pub fn builtin() -> Self {
        Self { steps: &STEPS }
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a catalog holds at least one step
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Get a step by zero-based index
    pub fn get(&self, index: usize) -> Option<&'static Step> {
        self.steps.get(index)
    }

    /// All steps in order
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
