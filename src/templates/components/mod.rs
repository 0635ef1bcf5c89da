use maud::{html, Markup};

pub mod notice;

pub use notice::notice_banner;

/// A labelled single-line input.
pub fn text_field(label: &str, name: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value) placeholder=(placeholder);
        }
    }
}

pub fn section_title(title: &str) -> Markup {
    html! {
        div class="section-title" { (title) }
    }
}
