//! Static catalog of Nielsen's ten usability heuristics.
//!
//! Reference data only: ids, titles, and display text. Evaluators are keyed
//! by id; titles are copied into each score so results render without a
//! catalog lookup.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HeuristicDefinition {
    pub id: u8,
    pub title: &'static str,
    pub short_title: &'static str,
    pub description: &'static str,
    pub key_principles: &'static [&'static str],
    pub examples: &'static [&'static str],
}

pub static HEURISTICS: [HeuristicDefinition; 10] = [
    HeuristicDefinition {
        id: 1,
        title: "Visibility of system status",
        short_title: "System Status",
        description: "Users should always be aware of what is going on within the system. \
            Keeping them informed through appropriate, timely, and actionable feedback helps \
            them understand the outcome of their prior interactions and determine what to do next.",
        key_principles: &[
            "Users should always be aware of what is going on within the system",
            "Convey progress of tasks",
            "Display appropriate loading indicators and status messages",
            "Clear and immediate presentation of system feedback",
        ],
        examples: &[
            "Loading indicators",
            "Progress bars",
            "Status messages",
            "System availability indicators",
        ],
    },
    HeuristicDefinition {
        id: 2,
        title: "Match between system and the real world",
        short_title: "Real World Match",
        description: "The system's design, concepts, and actions should be familiar and \
            consistent with a user's expectations of the real world. It should use language \
            and interaction patterns that users are accustomed to in their everyday experiences.",
        key_principles: &[
            "Use familiar language and interaction patterns",
            "Draw upon user's existing knowledge and experiences",
            "Avoid jargon",
            "Use intuitive terminology, icons, and metaphors",
        ],
        examples: &[
            "Calendar applications",
            "Weather symbols",
            "Trash/recycle bin icons",
            "File folder metaphors",
        ],
    },
    HeuristicDefinition {
        id: 3,
        title: "User control and freedom",
        short_title: "User Control",
        description: "Users require control over the system and should be enabled to easily \
            undo actions or exit undesirable states. Including clear and accessible navigation \
            helps users reduce fear of making mistakes.",
        key_principles: &[
            "Enable easy undo actions",
            "Provide clear Cancel and Back options",
            "Require confirmation for irreversible actions",
            "Facilitate backwards navigation",
        ],
        examples: &[
            "Undo functionality",
            "Cancel buttons",
            "Back navigation",
            "Emergency exits from processes",
        ],
    },
    HeuristicDefinition {
        id: 4,
        title: "Consistency and standards",
        short_title: "Consistency",
        description: "Maintaining consistency within the application is as important as \
            adhering to established conventions and industry practices. Users expect words \
            and interactions to have the same meanings across different situations.",
        key_principles: &[
            "Maintain internal consistency",
            "Follow industry conventions",
            "Use familiar patterns users are accustomed to",
            "Ensure consistency across all system layers",
        ],
        examples: &[
            "Consistent button styles",
            "Standard navigation patterns",
            "Uniform terminology",
            "Platform-specific conventions",
        ],
    },
    HeuristicDefinition {
        id: 5,
        title: "Error prevention",
        short_title: "Error Prevention",
        description: "Emphasizing error prevention is more significant than providing \
            effective error messaging alone. Errors can be avoided by providing helpful \
            constraints, defaults, or useful suggestions.",
        key_principles: &[
            "Prevent errors before they occur",
            "Provide helpful constraints and defaults",
            "Focus on high-cost errors first",
            "Offer useful suggestions",
        ],
        examples: &[
            "Form validation",
            "Date picker constraints",
            "Auto-complete suggestions",
            "Confirmation dialogs",
        ],
    },
    HeuristicDefinition {
        id: 6,
        title: "Recognition rather than recall",
        short_title: "Recognition vs Recall",
        description: "Facilitating user recognition of options, actions, and information is \
            easier than having them recall information from memory. Present relevant choices, \
            visual cues, and clear labels.",
        key_principles: &[
            "Make options visible rather than memorable",
            "Provide relevant choices and visual cues",
            "Use clear labels and prompts",
            "Organize content into recognizable chunks",
        ],
        examples: &[
            "Menu systems",
            "Icon-based navigation",
            "Contextual help",
            "Visual cues and prompts",
        ],
    },
    HeuristicDefinition {
        id: 7,
        title: "Flexibility and efficiency of use",
        short_title: "Flexibility",
        description: "Effective design caters to both novice and expert users. The system \
            should provide easy navigation for new users while empowering expert users with \
            speed and efficiency tools.",
        key_principles: &[
            "Cater to both novice and expert users",
            "Allow user customization and preferences",
            "Provide shortcuts and accelerators",
            "Offer advanced search and filtering options",
        ],
        examples: &[
            "Keyboard shortcuts",
            "Customizable interfaces",
            "Advanced search filters",
            "Power user tools",
        ],
    },
    HeuristicDefinition {
        id: 8,
        title: "Aesthetic and minimalist design",
        short_title: "Minimalist Design",
        description: "The system's aesthetic should be visually appealing and purposefully \
            focus users' attention by removing clutter and providing clear hierarchy within \
            the interface.",
        key_principles: &[
            "Remove clutter and visual noise",
            "Provide clear visual hierarchy",
            "Prioritize content supporting primary goals",
            "Use ample white space and clean typography",
        ],
        examples: &[
            "Clean layouts",
            "Minimal color palettes",
            "Clear typography",
            "Focused content presentation",
        ],
    },
    HeuristicDefinition {
        id: 9,
        title: "Help users recognize, diagnose, and recover from errors",
        short_title: "Error Recovery",
        description: "Errors are inevitable, so provide messaging that clearly spells out \
            the problem and constructively suggests a solution in plain and simple language.",
        key_principles: &[
            "Clearly explain the problem",
            "Suggest constructive solutions",
            "Use plain, human-centered language",
            "Employ standard visual cues for errors",
        ],
        examples: &[
            "Clear error messages",
            "Solution suggestions",
            "Red text for errors",
            "Recovery instructions",
        ],
    },
    HeuristicDefinition {
        id: 10,
        title: "Help and documentation",
        short_title: "Help & Documentation",
        description: "Supply comprehensive help guides and documentation for users. \
            Accessible and searchable documentation provides necessary assistance to help \
            users complete tasks and resolve issues.",
        key_principles: &[
            "Provide comprehensive help guides",
            "Make documentation searchable and accessible",
            "Keep documentation concise and action-oriented",
            "Include FAQ and Help Center sections",
        ],
        examples: &[
            "Help centers",
            "FAQ sections",
            "User guides",
            "Contextual help",
        ],
    },
];

pub fn all() -> &'static [HeuristicDefinition] {
    &HEURISTICS
}

pub fn find(id: u8) -> Option<&'static HeuristicDefinition> {
    HEURISTICS.iter().find(|h| h.id == id)
}
