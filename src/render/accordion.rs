//! Bootstrap accordion

use super::markup::Element;
use super::{LeafView, Renderer};
use crate::key::INPUT_PREFIX;

/// Bootstrap markup; each header button targets its body by id
#[derive(Debug, Clone)]
pub struct AccordionRenderer {
    container_id: String,
}

impl AccordionRenderer {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    /// DOM id of a group's collapsible body
    pub fn body_id(group: &str) -> String {
        format!("{INPUT_PREFIX}{group}")
    }
}

impl Renderer for AccordionRenderer {
    fn wrap_all(&self, groups: &str) -> String {
        Element::new("div")
            .class("accordion p-4 m-3")
            .attr("id", &self.container_id)
            .child(groups)
            .render()
    }

    fn render_group(&self, group: &str, title: &str, body: &str) -> String {
        let body_id = Self::body_id(group);

        let button = Element::new("button")
            .class("accordion-button collapsed")
            .attr("type", "button")
            .attr("data-bs-toggle", "collapse")
            .attr("data-bs-target", format!("#{body_id}"))
            .attr("aria-expanded", "false")
            .attr("aria-controls", &body_id)
            .text(title);
        let header = Element::new("h2")
            .class("accordion-header")
            .child(button.render());
        let collapse = Element::new("div")
            .attr("id", &body_id)
            .class("accordion-collapse collapse")
            .attr("data-bs-parent", format!("#{}", self.container_id))
            .child(Element::new("div").class("accordion-body").child(body).render());

        Element::new("div")
            .class("accordion-item")
            .child(header.render())
            .child(collapse.render())
            .render()
    }

    fn render_leaf(&self, leaf: &LeafView<'_>) -> String {
        let input = Element::new("input")
            .attr("type", "checkbox")
            .attr("name", leaf.key.input_name())
            .flag("checked", leaf.checked)
            .class("form-check-input");
        let label = Element::new("label")
            .class("form-check-label")
            .child(input.render())
            .child(" ")
            .child(Element::new("span").text(leaf.label).render());

        Element::new("div")
            .class("form-check")
            .child(label.render())
            .render()
    }
}
