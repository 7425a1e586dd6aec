use crate::document::Document;
use crate::element::{Element, ElementId, ElementKind};
use egui::{Align2, Color32, FontId, Painter, Rect, Stroke, pos2, vec2};

/// Accent used for the selection outline
const SELECTION_COLOR: Color32 = Color32::from_rgb(59, 130, 246);
const HOVER_COLOR: Color32 = Color32::from_rgb(148, 163, 184);

/// Paints the canvas: background, every element with its kind's visual
/// template, and the selection/hover affordances. Purely presentational;
/// all interaction goes through the editor's pointer entry points.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        painter: &Painter,
        canvas_rect: Rect,
        document: &Document,
        selected: Option<ElementId>,
        hovered: Option<ElementId>,
    ) {
        painter.rect_filled(canvas_rect, 0.0, Color32::from_gray(250));
        painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::from_gray(220)));

        if document.is_empty() {
            painter.text(
                canvas_rect.center(),
                Align2::CENTER_CENTER,
                "The canvas is empty. Add elements from the library,\nor start from a template.",
                FontId::proportional(15.0),
                Color32::from_gray(150),
            );
            return;
        }

        // Insertion order is paint order; the last element ends up on top
        for element in document.elements() {
            let rect = element.rect().translate(canvas_rect.min.to_vec2());
            self.paint_element(painter, element, rect);
        }

        for element in document.elements() {
            let rect = element.rect().translate(canvas_rect.min.to_vec2());
            if selected == Some(element.id) {
                painter.rect_stroke(rect.expand(2.0), 2.0, Stroke::new(2.0, SELECTION_COLOR));
            } else if hovered == Some(element.id) {
                painter.rect_stroke(rect.expand(2.0), 2.0, Stroke::new(1.0, HOVER_COLOR));
            }
        }
    }

    fn paint_element(&self, painter: &Painter, element: &Element, rect: Rect) {
        let style = &element.style;
        let text_color = style.color("color").unwrap_or(Color32::BLACK);
        let font_size = style
            .length("fontSize")
            .unwrap_or(match element.kind {
                ElementKind::Heading => 28.0,
                _ => 16.0,
            })
            .max(1.0);
        let rounding = style.length("borderRadius").unwrap_or(0.0);
        let padding = style.length("padding").unwrap_or(8.0);

        match element.kind {
            ElementKind::Text | ElementKind::Heading => {
                if let Some(bg) = style.color("backgroundColor") {
                    painter.rect_filled(rect, rounding, bg);
                }
                painter.text(
                    rect.left_center(),
                    Align2::LEFT_CENTER,
                    element.display_content(),
                    FontId::proportional(font_size),
                    text_color,
                );
            }
            ElementKind::Paragraph => {
                if let Some(bg) = style.color("backgroundColor") {
                    painter.rect_filled(rect, rounding, bg);
                }
                let galley = painter.layout(
                    element.display_content().to_owned(),
                    FontId::proportional(font_size),
                    text_color,
                    rect.width(),
                );
                painter.galley(rect.min, galley, text_color);
            }
            ElementKind::Button => {
                let bg = style
                    .color("backgroundColor")
                    .unwrap_or(Color32::from_rgb(59, 130, 246));
                painter.rect_filled(rect, rounding, bg);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    element.display_content(),
                    FontId::proportional(font_size),
                    text_color,
                );
            }
            ElementKind::Image => {
                painter.rect_filled(rect, rounding, Color32::from_gray(229));
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(200)));
                painter.text(
                    rect.center() - vec2(0.0, 10.0),
                    Align2::CENTER_CENTER,
                    "🖼",
                    FontId::proportional(24.0),
                    Color32::from_gray(140),
                );
                painter.text(
                    rect.center() + vec2(0.0, 16.0),
                    Align2::CENTER_CENTER,
                    element.display_content(),
                    FontId::proportional(12.0),
                    Color32::from_gray(120),
                );
            }
            ElementKind::Container => {
                if let Some(bg) = style.color("backgroundColor") {
                    painter.rect_filled(rect, rounding, bg);
                }
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(180)));
                painter.text(
                    rect.left_top() + vec2(padding, padding),
                    Align2::LEFT_TOP,
                    element.display_content(),
                    FontId::proportional(12.0),
                    Color32::from_gray(150),
                );
            }
            ElementKind::Card => {
                let bg = style.color("backgroundColor").unwrap_or(Color32::WHITE);
                painter.rect_filled(rect, rounding, bg);
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(210)));
                painter.text(
                    rect.left_top() + vec2(padding, padding),
                    Align2::LEFT_TOP,
                    element.display_content(),
                    FontId::proportional(font_size),
                    text_color,
                );
                painter.text(
                    rect.left_top() + vec2(padding, padding + font_size + 8.0),
                    Align2::LEFT_TOP,
                    "Card body text",
                    FontId::proportional(12.0),
                    Color32::from_gray(130),
                );
            }
            ElementKind::ProductCard => {
                let bg = style.color("backgroundColor").unwrap_or(Color32::WHITE);
                painter.rect_filled(rect, rounding, bg);
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(210)));
                let image_area = Rect::from_min_size(
                    rect.min,
                    vec2(rect.width(), (rect.height() * 0.55).max(0.0)),
                );
                painter.rect_filled(image_area, rounding, Color32::from_gray(235));
                painter.text(
                    pos2(rect.min.x + padding, image_area.max.y + padding),
                    Align2::LEFT_TOP,
                    element.display_content(),
                    FontId::proportional(font_size),
                    text_color,
                );
                painter.text(
                    pos2(rect.min.x + padding, image_area.max.y + padding + font_size + 6.0),
                    Align2::LEFT_TOP,
                    "$49.00",
                    FontId::proportional(13.0),
                    Color32::from_gray(100),
                );
            }
            ElementKind::ContactForm => {
                let bg = style.color("backgroundColor").unwrap_or(Color32::WHITE);
                painter.rect_filled(rect, rounding, bg);
                painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(210)));
                painter.text(
                    rect.left_top() + vec2(padding, padding),
                    Align2::LEFT_TOP,
                    element.display_content(),
                    FontId::proportional(font_size),
                    text_color,
                );
                let field_width = (rect.width() - padding * 2.0).max(0.0);
                let mut y = rect.min.y + padding + font_size + 10.0;
                for _ in 0..3 {
                    let field =
                        Rect::from_min_size(pos2(rect.min.x + padding, y), vec2(field_width, 26.0));
                    if field.max.y > rect.max.y {
                        break;
                    }
                    painter.rect_filled(field, 4.0, Color32::from_gray(243));
                    painter.rect_stroke(field, 4.0, Stroke::new(1.0, Color32::from_gray(220)));
                    y += 34.0;
                }
                let submit = Rect::from_min_size(
                    pos2(rect.min.x + padding, y),
                    vec2(90.0_f32.min(field_width), 28.0),
                );
                if submit.max.y <= rect.max.y {
                    painter.rect_filled(submit, 4.0, Color32::from_rgb(59, 130, 246));
                    painter.text(
                        submit.center(),
                        Align2::CENTER_CENTER,
                        "Send",
                        FontId::proportional(13.0),
                        Color32::WHITE,
                    );
                }
            }
        }
    }
}
