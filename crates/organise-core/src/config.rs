//! Storage keys and fixed limits.

// Grocery list
pub const GROCERY_ITEMS_KEY: &str = "courses_items";
pub const GROCERY_HISTORY_KEY: &str = "courses_history";
pub const GROCERY_STORE_MODE_KEY: &str = "courses_store_mode";
/// Next grocery id, so ids of deleted items are never reused
pub const GROCERY_NEXT_ID_KEY: &str = "courses_next_id";
/// Pre-categorization key, migrated then removed on first load
pub const GROCERY_LEGACY_KEY: &str = "listeCourses";

pub const HISTORY_CAPACITY: usize = 50;
pub const SUGGESTION_MIN_CHARS: usize = 2;
pub const SUGGESTION_LIMIT: usize = 5;

// To-do list
pub const TODO_TASKS_KEY: &str = "todoTasks";
pub const TODO_NEXT_ID_KEY: &str = "todo_next_id";

// Chores
pub const CHORES_KEY: &str = "tachesMenageres";
pub const PEOPLE_KEY: &str = "household_people";
pub const CHORES_NEXT_ID_KEY: &str = "chores_next_id";

// Week planner
pub const PLANNING_KEY: &str = "planning_semaine";

// Gift list
pub const GIFT_EVENT_KEY_PREFIX: &str = "giftEvent_";
pub const GIFT_EVENT_ID_LEN: usize = 8;

// Checklists
pub const CHECKLIST_KEY_PREFIX: &str = "checklist_";
pub const DEFAULT_CHECKLIST: &str = "demenagement";

/// Storage key for a gift event
pub fn gift_event_key(event_id: &str) -> String {
    format!("{}{}", GIFT_EVENT_KEY_PREFIX, event_id)
}

/// Storage key for a checklist type
pub fn checklist_key(checklist_type: &str) -> String {
    format!("{}{}", CHECKLIST_KEY_PREFIX, checklist_type)
}

/// A built-in checklist
pub struct ChecklistTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub entries: &'static [&'static str],
}

/// Built-in checklist templates
pub const CHECKLIST_TEMPLATES: &[ChecklistTemplate] = &[
    ChecklistTemplate {
        slug: "demenagement",
        title: "Déménagement",
        entries: &[
            "Résilier ou transférer le bail",
            "Réserver le camion ou les déménageurs",
            "Faire suivre le courrier",
            "Changer l'adresse auprès de la banque",
            "Transférer l'électricité et le gaz",
            "Transférer la box internet",
            "Relever les compteurs",
            "Préparer les cartons",
            "Faire l'état des lieux de sortie",
        ],
    },
    ChecklistTemplate {
        slug: "vacances",
        title: "Départ en vacances",
        entries: &[
            "Vérifier les papiers d'identité",
            "Réserver le logement",
            "Préparer la trousse à pharmacie",
            "Faire les valises",
            "Prévenir les voisins",
            "Arroser les plantes",
            "Vider le réfrigérateur",
            "Fermer l'eau et les volets",
        ],
    },
    ChecklistTemplate {
        slug: "rentree",
        title: "Rentrée scolaire",
        entries: &[
            "Acheter les fournitures",
            "Couvrir les livres",
            "Étiqueter les affaires",
            "Remplir les fiches d'inscription",
            "Prendre l'assurance scolaire",
            "Préparer le cartable",
        ],
    },
];

/// Template entries for a checklist type; unknown types start empty
pub fn checklist_template(checklist_type: &str) -> &'static [&'static str] {
    CHECKLIST_TEMPLATES
        .iter()
        .find(|t| t.slug == checklist_type)
        .map(|t| t.entries)
        .unwrap_or(&[])
}
