use egui::{Pos2, Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};

mod style;

pub use style::{StyleMap, parse_color, parse_px};

/// Stable identifier of a placed element. Assigned by the owning document,
/// unique within it and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Closed set of placeable element kinds. Every per-kind behavior (render
/// template, defaults, editable fields) is a total match over this enum,
/// so adding a kind is one variant plus the corresponding arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    Heading,
    Paragraph,
    Button,
    Image,
    Container,
    Card,
    ProductCard,
    ContactForm,
}

/// Which property-panel sections apply to a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    pub content: bool,
    pub font: bool,
    pub background: bool,
}

impl ElementKind {
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Text,
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::Button,
        ElementKind::Image,
        ElementKind::Container,
        ElementKind::Card,
        ElementKind::ProductCard,
        ElementKind::ContactForm,
    ];

    /// Human-facing name used in panels and history descriptions
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Heading => "Heading",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image",
            ElementKind::Container => "Container",
            ElementKind::Card => "Card",
            ElementKind::ProductCard => "Product Card",
            ElementKind::ContactForm => "Contact Form",
        }
    }

    /// Initial content for a freshly added element
    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Text => "New Text",
            ElementKind::Button => "Click Me",
            _ => "",
        }
    }

    /// Render-time fallback shown when the content is empty. Empty content
    /// is valid stored state; this only affects what gets painted.
    pub fn placeholder(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Heading => "Heading",
            ElementKind::Paragraph => "Paragraph text",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image caption",
            ElementKind::Container => "Container",
            ElementKind::Card => "Card",
            ElementKind::ProductCard => "Product",
            ElementKind::ContactForm => "Contact form",
        }
    }

    /// Footprint used when the element has no explicit size
    pub fn intrinsic_size(self) -> Vec2 {
        match self {
            ElementKind::Text => vec2(120.0, 28.0),
            ElementKind::Heading => vec2(240.0, 44.0),
            ElementKind::Paragraph => vec2(280.0, 80.0),
            ElementKind::Button => vec2(120.0, 40.0),
            ElementKind::Image => vec2(200.0, 140.0),
            ElementKind::Container => vec2(320.0, 200.0),
            ElementKind::Card => vec2(220.0, 160.0),
            ElementKind::ProductCard => vec2(200.0, 240.0),
            ElementKind::ContactForm => vec2(260.0, 220.0),
        }
    }

    /// Kind-appropriate starting styles
    pub fn default_style(self) -> StyleMap {
        match self {
            ElementKind::Text | ElementKind::Paragraph => {
                [("fontSize", "16px"), ("color", "#000000")]
                    .into_iter()
                    .collect()
            }
            ElementKind::Heading => [("fontSize", "28px"), ("color", "#000000")]
                .into_iter()
                .collect(),
            ElementKind::Button => [
                ("fontSize", "16px"),
                ("color", "#ffffff"),
                ("backgroundColor", "#3b82f6"),
                ("borderRadius", "6px"),
            ]
            .into_iter()
            .collect(),
            ElementKind::Image | ElementKind::Container => StyleMap::new(),
            ElementKind::Card | ElementKind::ProductCard | ElementKind::ContactForm => {
                [("backgroundColor", "#ffffff"), ("borderRadius", "8px")]
                    .into_iter()
                    .collect()
            }
        }
    }

    /// Whether double-click opens the in-place text editor
    pub fn supports_inline_edit(self) -> bool {
        matches!(self, ElementKind::Text | ElementKind::Button)
    }

    /// Property-panel sections applicable to this kind
    pub fn field_set(self) -> FieldSet {
        match self {
            ElementKind::Text | ElementKind::Heading | ElementKind::Paragraph => FieldSet {
                content: true,
                font: true,
                background: false,
            },
            ElementKind::Button => FieldSet {
                content: true,
                font: true,
                background: true,
            },
            ElementKind::Image => FieldSet {
                content: true,
                font: false,
                background: false,
            },
            ElementKind::Container => FieldSet {
                content: false,
                font: false,
                background: true,
            },
            ElementKind::Card | ElementKind::ProductCard | ElementKind::ContactForm => FieldSet {
                content: true,
                font: true,
                background: true,
            },
        }
    }
}

/// A placed visual object on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub content: String,
    pub position: Pos2,
    /// `None` means intrinsic sizing for the kind
    pub size: Option<Vec2>,
    pub style: StyleMap,
}

impl Element {
    /// Effective on-canvas footprint, explicit size or the kind's intrinsic
    pub fn footprint(&self) -> Vec2 {
        self.size.unwrap_or_else(|| self.kind.intrinsic_size())
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.footprint())
    }

    pub fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().contains(pos)
    }

    /// Content to paint, falling back to the kind's placeholder when empty
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            self.kind.placeholder()
        } else {
            &self.content
        }
    }
}

/// Element data without an identity, used to describe preset collections.
/// Ids are assigned by the document when the blueprint is instantiated.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBlueprint {
    pub kind: ElementKind,
    pub content: String,
    pub position: Pos2,
    pub size: Option<Vec2>,
    pub style: StyleMap,
}

impl ElementBlueprint {
    pub fn new(kind: ElementKind, content: impl Into<String>, position: Pos2) -> Self {
        Self {
            kind,
            content: content.into(),
            position,
            size: None,
            style: kind.default_style(),
        }
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, key: &str, value: &str) -> Self {
        self.style.set(key, value);
        self
    }
}
