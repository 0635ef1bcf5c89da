use crate::domain::view::Notice;
use maud::{html, Markup, PreEscaped};

/// Dismissible notices hide themselves after this long.
const AUTO_HIDE_MS: u32 = 5000;

pub fn notice_banner(notice: &Notice) -> Markup {
    html! {
        div class="notice" id="notice" role="alert" {
            (notice.message)
            @if notice.dismissible {
                button type="button" aria-label="Dismiss"
                    onclick="this.parentElement.remove()" { "×" }
                script {
                    (PreEscaped(format!(
                        "setTimeout(function(){{var n=document.getElementById('notice');if(n)n.remove();}},{AUTO_HIDE_MS});"
                    )))
                }
            }
        }
    }
}
