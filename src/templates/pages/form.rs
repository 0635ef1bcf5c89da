// templates/pages/form.rs

use crate::domain::view::Notice;
use crate::domain::ListingRecord;
use crate::templates::components::{notice_banner, section_title, text_field};
use crate::templates::page_layout;
use maud::{html, Markup};

/// The editing form. `record` pre-fills every input, so a failed save or an
/// "edit" from the preview loses nothing.
pub fn form_page(record: &ListingRecord, notice: Option<&Notice>) -> Markup {
    page_layout(
        "Property Listing Generator",
        html! {
            @if let Some(notice) = notice {
                (notice_banner(notice))
            }
            div class="form-page" {
                div class="form-wrap" {
                    header style="text-align: center; margin-bottom: 30px;" {
                        h1 { "Property Listing Generator" }
                        p class="muted" { "Fill in details below to create a shareable property page" }
                    }

                    form class="form-card" method="post" action="/listings" {
                        (property_info(record))
                        (about_the_home(record))
                        (the_numbers(record))
                        (image_urls(record))
                        (comps(record))
                        (features(record))
                        (contact(record))

                        button type="submit" class="primary" { "Save & Generate Property Page →" }
                    }
                }
            }
        },
    )
}

fn property_info(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("Property Info"))
            div class="field" {
                label for="address" { "Full Property Address" }
                input type="text" id="address" name="address" required
                    value=(record.address)
                    placeholder="39 Crompton Pl, Palm Coast, FL 32137";
            }
            (text_field("Asking Price", "askingPrice", &record.asking_price, "$199,900"))
            div class="field" {
                label for="shortDescription" { "Short Description" }
                textarea id="shortDescription" name="shortDescription" rows="3"
                    placeholder="Rare opportunity for golf course living..." {
                    (record.short_description)
                }
            }
        }
    }
}

fn about_the_home(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("About the Home"))
            div class="grid-3" {
                (text_field("Beds", "beds", &record.beds, "3"))
                (text_field("Baths", "baths", &record.baths, "2"))
                (text_field("SQFT", "sqft", &record.sqft, "1483/1873"))
                (text_field("Year Built", "yearBuilt", &record.year_built, "1974"))
            }
        }
    }
}

fn the_numbers(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("The Numbers"))
            div class="grid-3" {
                (text_field("ARV Opinion ($)", "arv", &record.arv, "325000"))
                (text_field("Rehab Estimate", "rehabEstimate", &record.rehab_estimate, "Moderate, Light, $85,000, etc."))
                (text_field("Est. Monthly Rent ($)", "monthlyRent", &record.monthly_rent, "2000"))
            }
        }
    }
}

fn image_urls(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("Image URLs"))
            p class="hint" { "Paste direct image URLs from Imgur, Dropbox, Google Drive, etc." }
            (text_field("Hero / Banner Image URL", "heroImageUrl", &record.hero_image_url, "https://..."))
            (text_field("Property Photo 1 URL", "photo1Url", &record.photo1_url, "https://..."))
            (text_field("Property Photo 2 URL", "photo2Url", &record.photo2_url, "https://..."))
            (text_field("Comps Map Image URL", "mapImageUrl", &record.map_image_url, "https://..."))
            (text_field("Link to Full Photo Gallery", "photosLink", &record.photos_link, "https://dropbox.com/..."))
        }
    }
}

fn comps(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("Comps (up to 4)"))
            @for (i, comp) in record.comps.iter().enumerate() {
                div class="comp-slot grid-2" {
                    (text_field(
                        &format!("Comp {} Address", i + 1),
                        &format!("comp{}Address", i + 1),
                        &comp.address,
                        "16 Courtney Pl, Palm Coast, FL",
                    ))
                    (text_field(
                        "Details",
                        &format!("comp{}Details", i + 1),
                        &comp.details,
                        "2 Bed | 2 Bath | 1510 SQFT | SOLD FOR $352,500 ON 10/29/2025",
                    ))
                }
            }
        }
    }
}

fn features(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("Additional Features (Optional)"))
            label style="display: flex; align-items: center; gap: 8px; margin-bottom: 12px;" {
                input type="checkbox" name="showFeatures" value="on" checked[record.show_features];
                "Include additional features section on property page"
            }
            @for (i, feature) in record.features.iter().enumerate() {
                div class="field" {
                    input type="text"
                        name=(format!("feature{}", i + 1))
                        value=(feature)
                        aria-label=(format!("Feature {}", i + 1))
                        placeholder=(format!("Feature {} (e.g. \"New roof installed 2024\")", i + 1));
                }
            }
            p class="hint" { "Leave fields blank to use fewer than 5. Only filled lines will display." }
        }
    }
}

fn contact(record: &ListingRecord) -> Markup {
    html! {
        section class="form-section" {
            (section_title("Contact Info"))
            div class="grid-2" {
                (text_field("Contact Name", "contactName", &record.contact_name, "Jane Smith"))
                (text_field("Call Number", "callNumber", &record.call_number, "904-346-0600"))
                (text_field("Text Number", "textNumber", &record.text_number, "904-349-4000"))
                (text_field("Email", "email", &record.email, "jane@example.com"))
            }
        }
    }
}
