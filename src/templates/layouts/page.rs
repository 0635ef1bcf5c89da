use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: Arial, sans-serif; color: #222; background: #fff; }
a { color: inherit; }
.notice { position: fixed; top: 16px; right: 16px; z-index: 100; background: #e53e3e; color: #fff; padding: 10px 18px; border-radius: 8px; font-size: 14px; box-shadow: 0 2px 8px rgba(0,0,0,0.2); }
.notice button { margin-left: 12px; background: none; border: none; color: #fff; font-size: 16px; cursor: pointer; }
.form-page { min-height: 100vh; background: #f5f5f5; }
.form-wrap { max-width: 700px; margin: 0 auto; padding: 40px 16px; }
.form-card { background: #fff; border-radius: 8px; padding: 30px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.form-section { margin-bottom: 28px; }
.section-title { font-size: 18px; font-weight: 700; margin-bottom: 12px; padding-bottom: 8px; border-bottom: 2px solid #222; }
.field { margin-bottom: 12px; }
.field label { display: block; font-size: 11px; font-weight: 700; text-transform: uppercase; letter-spacing: 1px; color: #666; margin-bottom: 4px; }
.field input, .field textarea { width: 100%; padding: 10px 14px; border: 1px solid #ccc; border-radius: 6px; font-size: 14px; font-family: inherit; }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.grid-3 { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 12px; }
.comp-slot { padding: 12px; background: #f9f9f9; border-radius: 6px; margin-bottom: 10px; }
.hint { font-size: 12px; color: #999; }
.primary { width: 100%; padding: 14px; font-size: 16px; font-weight: 700; text-transform: uppercase; letter-spacing: 2px; border: none; border-radius: 6px; color: #fff; background: #222; cursor: pointer; }
.top-bar { position: sticky; top: 0; z-index: 50; background: rgba(255,255,255,0.95); box-shadow: 0 1px 4px rgba(0,0,0,0.1); padding: 10px 16px; display: flex; align-items: center; gap: 12px; }
.top-bar input { flex: 1; padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px; font-size: 13px; }
.hero { position: relative; height: 500px; background: #555; }
.hero img { width: 100%; height: 500px; object-fit: cover; display: block; }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(0,0,0,0.15), rgba(0,0,0,0.5)); display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 20px; color: #fff; }
.section { padding: 30px 16px; }
.section-inner { max-width: 900px; margin: 0 auto; }
.section h2 { font-size: 24px; font-weight: 700; text-align: center; text-transform: uppercase; letter-spacing: 2px; margin: 0 0 24px 0; }
.photos { display: grid; grid-template-columns: 1fr 1fr; }
.photos img, .photo-placeholder { width: 100%; height: 280px; object-fit: cover; background: #ddd; }
.showings { text-align: center; padding: 24px 16px; }
.showings a { font-size: 32px; font-weight: 700; color: #cc0000; text-decoration: none; }
.facts { text-align: center; font-size: 18px; line-height: 1.8; }
.warning, .red-banner { background: #cc0000; color: #fff; text-align: center; font-weight: 700; padding: 16px; }
.numbers { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 30px; text-align: center; }
.number-value { font-size: 32px; font-weight: 700; margin-bottom: 8px; }
.comps { display: grid; grid-template-columns: 1fr 1fr; gap: 30px; align-items: start; }
.comp { margin-bottom: 20px; }
.comp-address { font-size: 16px; font-weight: 700; }
.comp-details { font-size: 14px; color: #555; margin-top: 4px; }
.map-placeholder { width: 288px; height: 288px; background: #eee; display: flex; align-items: center; justify-content: center; color: #aaa; }
.button-link { display: inline-block; padding: 14px 32px; background: #222; color: #fff; text-decoration: none; font-weight: 700; font-size: 14px; text-transform: uppercase; letter-spacing: 2px; }
.contact { text-align: center; }
.contact-name { font-size: 28px; font-weight: 700; margin-bottom: 12px; }
.fine-print { font-size: 11px; color: #777; line-height: 1.6; max-width: 900px; margin: 0 auto; padding: 30px 16px; }
.muted { color: #999; }
.error-page { max-width: 720px; margin: 4rem auto; padding: 1rem; }
@media (max-width: 768px) {
  .hero, .hero img { height: 300px; }
  .photos, .numbers, .comps, .grid-2, .grid-3 { grid-template-columns: 1fr; }
}
"#;

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (content)
            }
        }
    }
}
