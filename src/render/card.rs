//! daisyUI card with collapse panels

use super::markup::Element;
use super::{LeafView, Renderer};

/// daisyUI markup; panels open on focus, no script involved
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl Renderer for CardRenderer {
    fn wrap_all(&self, groups: &str) -> String {
        Element::new("div")
            .class("ui-manager card bg-base-100 w-96 shadow-xl")
            .child(Element::new("div").class("card-body").child(groups).render())
            .render()
    }

    fn render_group(&self, _group: &str, title: &str, body: &str) -> String {
        let header = Element::new("div")
            .class("collapse-title text-xl font-medium")
            .text(title);
        let content = Element::new("div").class("collapse-content").child(body);

        Element::new("div")
            .attr("tabindex", "0")
            .class("collapse collapse-plus border-base-300 bg-base-200 border")
            .child(header.render())
            .child(content.render())
            .render()
    }

    fn render_leaf(&self, leaf: &LeafView<'_>) -> String {
        let input = Element::new("input")
            .attr("type", "checkbox")
            .class("checkbox checkbox-success")
            .attr("name", leaf.key.input_name())
            .flag("checked", leaf.checked);
        let label = Element::new("label")
            .class("cursor-pointer label")
            .child(input.render())
            .child(" ")
            .child(Element::new("span").class("label-text").text(leaf.label).render());

        Element::new("div")
            .class("form-control")
            .child(label.render())
            .render()
    }
}
