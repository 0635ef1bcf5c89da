// templates/pages/property.rs

use crate::domain::format::{
    mailto_href, numbers, or_placeholder, sms_href, tel_href, visible_comps, visible_features,
    DASH,
};
use crate::domain::view::PreviewMode;
use crate::domain::ListingRecord;
use crate::templates::page_layout;
use maud::{html, Markup, PreEscaped};
use url::Url;

const COPY_SCRIPT: &str = r#"
function copyShareLink(btn) {
  var url = document.getElementById('share-url').value;
  navigator.clipboard.writeText(url).then(function () {
    btn.textContent = 'Copied!';
    setTimeout(function () { btn.textContent = 'Copy Link'; }, 2000);
  });
}
"#;

/// The read-only listing page.
///
/// Creators get a top bar with the share link and a way back to the form;
/// shared viewers only see the listing.
pub fn property_page(record: &ListingRecord, mode: PreviewMode, share_url: &Url) -> Markup {
    let title = or_placeholder(&record.address, "Property Listing");

    page_layout(
        title,
        html! {
            @if mode == PreviewMode::Creator {
                (creator_bar(record, share_url))
            }
            main {
                (hero(record))
                (photos(record))
                (showings(record))
                (about_the_home(record))
                div class="warning" {
                    "DO NOT CONTACT SELLER OR GO ON PROPERTY WITHOUT EXPRESS PERMISSION"
                }
                (features(record))
                (numbers_section(record))
                (comps_section(record))
                div class="red-banner" { "SELLER FINANCING AVAILABLE*" }
                (contact(record))
                (fine_print())
            }
        },
    )
}

fn creator_bar(record: &ListingRecord, share_url: &Url) -> Markup {
    // The record travels back in a hidden field; nothing is kept server-side.
    let payload = serde_json::to_string(record).unwrap_or_default();

    html! {
        div class="top-bar" {
            form method="post" action="/edit" style="margin: 0;" {
                input type="hidden" name="record" value=(payload);
                button type="submit" { "← Edit" }
            }
            input type="text" id="share-url" readonly value=(share_url.as_str())
                onclick="this.select()";
            button type="button" onclick="copyShareLink(this)" { "Copy Link" }
            script { (PreEscaped(COPY_SCRIPT)) }
        }
    }
}

fn hero(record: &ListingRecord) -> Markup {
    html! {
        div class="hero" {
            @if !record.hero_image_url.trim().is_empty() {
                img src=(record.hero_image_url) alt="Property";
            }
            div class="hero-overlay" {
                h1 { (or_placeholder(&record.address, "Property Address")) }
                @if !record.asking_price.trim().is_empty() {
                    div class="asking-price" style="font-size: 28px; font-weight: 700;" {
                        (record.asking_price)
                    }
                }
                p { (or_placeholder(&record.short_description, "Property description goes here.")) }
            }
        }
    }
}

fn photos(record: &ListingRecord) -> Markup {
    html! {
        div class="photos" {
            @for (i, url) in [&record.photo1_url, &record.photo2_url].into_iter().enumerate() {
                @if url.trim().is_empty() {
                    div class="photo-placeholder" {}
                } @else {
                    img src=(url) alt=(format!("Property {}", i + 1));
                }
            }
        }
    }
}

fn showings(record: &ListingRecord) -> Markup {
    html! {
        div class="showings" {
            div style="font-weight: 700; text-transform: uppercase; letter-spacing: 2px;" {
                "Call/Text for Showings"
            }
            a href=(tel_href(&record.call_number)) {
                (or_placeholder(&record.call_number, DASH))
            }
        }
    }
}

fn about_the_home(record: &ListingRecord) -> Markup {
    let facts = [
        ("Beds", &record.beds),
        ("Baths", &record.baths),
        ("SQFT", &record.sqft),
        ("Year Built", &record.year_built),
    ];

    html! {
        section class="section" {
            div class="section-inner" {
                h2 { "About the Home" }
                div class="facts" {
                    @for (label, value) in facts {
                        div { (label) ": " (or_placeholder(value, DASH)) }
                    }
                }
            }
        }
    }
}

fn features(record: &ListingRecord) -> Markup {
    let features = visible_features(record);

    html! {
        @if !features.is_empty() {
            section class="section features" {
                div class="section-inner" {
                    h2 { "Additional Features" }
                    ul {
                        @for feature in &features {
                            li class="feature" { (feature) }
                        }
                    }
                }
            }
        }
    }
}

fn numbers_section(record: &ListingRecord) -> Markup {
    html! {
        section class="section" {
            div class="section-inner" {
                h2 { "Numbers" }
                div class="numbers" {
                    @for tile in numbers(record) {
                        div {
                            div class="number-value" { (tile.value) }
                            div class="number-label" { (tile.label) }
                        }
                    }
                }
                @if !record.photos_link.trim().is_empty() {
                    div style="text-align: center; margin-top: 30px;" {
                        a class="button-link" href=(record.photos_link) target="_blank" rel="noopener noreferrer" {
                            "Click here to see photos"
                        }
                    }
                }
            }
        }
    }
}

fn comps_section(record: &ListingRecord) -> Markup {
    let comps = visible_comps(record);

    html! {
        section class="section" {
            div class="section-inner" {
                h2 { "Comps" }
                div class="comps" {
                    div {
                        @for comp in &comps {
                            div class="comp" {
                                div class="comp-address" { (comp.address) }
                                div class="comp-details" { (comp.details) }
                            }
                        }
                        @if comps.is_empty() {
                            div class="muted" { "No comps entered" }
                        }
                    }
                    div style="display: flex; justify-content: center;" {
                        @if record.map_image_url.trim().is_empty() {
                            div class="map-placeholder" { "No map image" }
                        } @else {
                            img src=(record.map_image_url) alt="Comps Map" style="max-width: 288px; max-height: 288px;";
                        }
                    }
                }
            }
        }
    }
}

fn contact(record: &ListingRecord) -> Markup {
    html! {
        section class="section contact" {
            div class="contact-name" { (or_placeholder(&record.contact_name, "Contact Name")) }
            div class="grid-2" {
                div {
                    "CALL: "
                    a href=(tel_href(&record.call_number)) { (or_placeholder(&record.call_number, DASH)) }
                }
                div {
                    "TEXT: "
                    a href=(sms_href(&record.text_number)) { (or_placeholder(&record.text_number, DASH)) }
                }
            }
            @if !record.email.trim().is_empty() {
                div style="margin-top: 12px;" {
                    "OR EMAIL ME AT: "
                    a href=(mailto_href(&record.email)) { (record.email.to_uppercase()) }
                }
            }
        }
    }
}

fn fine_print() -> Markup {
    html! {
        p class="fine-print" {
            "The estimates and assumptions presented above are not a guarantee for the performance of an investment. "
            "Prospective buyers should independently analyze and verify all assumptions on renovation costs, rental incomes, and comparable information contained above. "
            "Seller is marketing an assignable contract."
            br; br;
            "*Seller financing available for select properties at Seller's sole discretion. "
            "Financing may be subject to credit score and background check. Other restrictions may apply. Call for more information."
        }
    }
}
