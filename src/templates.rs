use crate::element::{ElementBlueprint, ElementKind};
use egui::{pos2, vec2};

/// A prebuilt element collection, loadable into the editor in one step
#[derive(Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
    builder: fn() -> Vec<ElementBlueprint>,
}

impl Template {
    /// Fresh blueprint list for this template. Ids are assigned by the
    /// document on load.
    pub fn blueprints(&self) -> Vec<ElementBlueprint> {
        (self.builder)()
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Static template catalog shown in the gallery and the library panel
pub fn catalog() -> &'static [Template] {
    &CATALOG
}

static CATALOG: [Template; 6] = [
    Template {
        name: "Landing Page",
        category: "Business",
        tags: &["hero", "cta", "startup"],
        description: "Hero heading, supporting copy and a call to action.",
        builder: landing_page,
    },
    Template {
        name: "Portfolio",
        category: "Personal",
        tags: &["showcase", "cards", "creative"],
        description: "A personal intro with project cards.",
        builder: portfolio,
    },
    Template {
        name: "Online Store",
        category: "Commerce",
        tags: &["shop", "products", "pricing"],
        description: "Storefront heading with a row of product cards.",
        builder: online_store,
    },
    Template {
        name: "Blog",
        category: "Content",
        tags: &["articles", "writing"],
        description: "Masthead plus article teasers.",
        builder: blog,
    },
    Template {
        name: "Restaurant",
        category: "Business",
        tags: &["menu", "food", "local"],
        description: "Menu highlights and a reservation button.",
        builder: restaurant,
    },
    Template {
        name: "Contact",
        category: "Business",
        tags: &["form", "support"],
        description: "A simple get-in-touch page with a contact form.",
        builder: contact,
    },
];

fn landing_page() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "Build something people love", pos2(80.0, 60.0))
            .with_size(vec2(560.0, 52.0))
            .with_style("fontSize", "36px"),
        ElementBlueprint::new(
            ElementKind::Paragraph,
            "Ship your next idea faster with a page that converts.",
            pos2(80.0, 130.0),
        )
        .with_size(vec2(480.0, 60.0))
        .with_style("color", "#475569"),
        ElementBlueprint::new(ElementKind::Button, "Get Started", pos2(80.0, 210.0))
            .with_size(vec2(150.0, 44.0)),
        ElementBlueprint::new(ElementKind::Image, "Product screenshot", pos2(80.0, 290.0))
            .with_size(vec2(520.0, 220.0)),
    ]
}

fn portfolio() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "Jane Doe — Designer", pos2(80.0, 50.0))
            .with_size(vec2(460.0, 44.0)),
        ElementBlueprint::new(
            ElementKind::Paragraph,
            "Selected work from the last few years.",
            pos2(80.0, 110.0),
        ),
        ElementBlueprint::new(ElementKind::Card, "Brand refresh", pos2(80.0, 190.0)),
        ElementBlueprint::new(ElementKind::Card, "Mobile app", pos2(330.0, 190.0)),
        ElementBlueprint::new(ElementKind::Card, "Design system", pos2(580.0, 190.0)),
    ]
}

fn online_store() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "The Summer Collection", pos2(80.0, 50.0))
            .with_size(vec2(480.0, 44.0)),
        ElementBlueprint::new(ElementKind::ProductCard, "Linen Shirt", pos2(80.0, 130.0)),
        ElementBlueprint::new(ElementKind::ProductCard, "Canvas Tote", pos2(310.0, 130.0)),
        ElementBlueprint::new(ElementKind::ProductCard, "Straw Hat", pos2(540.0, 130.0)),
        ElementBlueprint::new(ElementKind::Button, "Shop All", pos2(80.0, 400.0)),
    ]
}

fn blog() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "Field Notes", pos2(80.0, 50.0)),
        ElementBlueprint::new(
            ElementKind::Paragraph,
            "Essays on craft, tools and process.",
            pos2(80.0, 110.0),
        ),
        ElementBlueprint::new(ElementKind::Card, "On starting small", pos2(80.0, 180.0))
            .with_size(vec2(540.0, 120.0)),
        ElementBlueprint::new(ElementKind::Card, "Tools I keep coming back to", pos2(80.0, 320.0))
            .with_size(vec2(540.0, 120.0)),
    ]
}

fn restaurant() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "Trattoria Sole", pos2(80.0, 50.0))
            .with_style("color", "#7c2d12"),
        ElementBlueprint::new(
            ElementKind::Paragraph,
            "Seasonal plates, wood-fired pizza, local wine.",
            pos2(80.0, 110.0),
        ),
        ElementBlueprint::new(ElementKind::Image, "Dining room", pos2(80.0, 180.0))
            .with_size(vec2(300.0, 200.0)),
        ElementBlueprint::new(ElementKind::Card, "Today's menu", pos2(420.0, 180.0))
            .with_size(vec2(240.0, 200.0)),
        ElementBlueprint::new(ElementKind::Button, "Reserve a table", pos2(80.0, 410.0))
            .with_size(vec2(170.0, 44.0))
            .with_style("backgroundColor", "#b45309"),
    ]
}

fn contact() -> Vec<ElementBlueprint> {
    vec![
        ElementBlueprint::new(ElementKind::Heading, "Get in touch", pos2(80.0, 50.0)),
        ElementBlueprint::new(
            ElementKind::Paragraph,
            "We usually reply within one business day.",
            pos2(80.0, 110.0),
        ),
        ElementBlueprint::new(ElementKind::ContactForm, "Send us a message", pos2(80.0, 180.0))
            .with_size(vec2(320.0, 260.0)),
    ]
}
