//! HTML rendering
//!
//! Server-rendered pages: home, search results, and the static category
//! pages. Thin views over the match results; every interpolated value goes
//! through html-escape.

use html_escape::encode_text;

use crate::pages::Category;
use crate::routes::MedCard;

const STYLE: &str = r#"
    body { background-color: #f9fafc; font-family: Arial, sans-serif; margin: 0; }
    .custom-header {
        display: flex; justify-content: space-between; align-items: center;
        background: #eaf6ff; padding: 15px 40px;
    }
    .logo { font-size: 26px; font-weight: bold; color: #0077cc; }
    .logo span { color: #00aaff; }
    .content { max-width: 960px; margin: 0 auto; padding: 20px; }
    .med-card {
        background: white; padding: 25px; border-radius: 12px;
        border-left: 6px solid #00aaff; box-shadow: 0 4px 15px rgba(0,0,0,0.05);
        margin: 20px 0;
    }
    .product-card {
        background: white; padding: 15px; border-radius: 12px;
        box-shadow: 0 4px 10px rgba(0,0,0,0.05);
        margin-bottom: 25px;
    }
    .upload-box {
        background: #fff; padding: 20px; border-radius: 10px;
        border: 1px dashed #00aaff; margin-top: 30px;
    }
    .notice { background: #fff8e1; padding: 12px 16px; border-radius: 8px; margin: 15px 0; }
    footer { padding: 30px; background: #eaf6ff; margin-top: 40px; text-align: center; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="custom-header">
    <div class="logo">Medi-<span>Bot</span></div>
    <div>Contact</div>
</div>
<div class="content">
{body}
</div>
<footer>Medi Bot | Mirpur, Dhaka | medibot@gmail.com</footer>
</body>
</html>"#,
        title = encode_text(title),
        body = body,
    )
}

/// Home page: category links, search form, prescription upload form.
pub fn home(catalog_count: usize, catalog_error: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(err) = catalog_error {
        body.push_str(&format!(
            r#"<div class="notice">Medicine data could not be loaded ({}). Search is running with an empty catalog.</div>"#,
            encode_text(err)
        ));
    }

    body.push_str("<h3>Categories</h3><ul>");
    for category in Category::ALL {
        body.push_str(&format!(
            r#"<li><a href="/pages/{}">{}</a></li>"#,
            category.slug(),
            encode_text(category.title()),
        ));
    }
    body.push_str("</ul>");

    body.push_str(&format!(
        r#"<h3>Find Medicine Information</h3>
<p>{} medicines on file.</p>
<form action="/search" method="get">
    <input type="text" name="q" placeholder="Napa, Sergel..." size="40">
    <button type="submit">Search</button>
</form>
<div class="upload-box">
    <h4>Upload Prescription</h4>
    <p>Crop the medicine area for better accuracy</p>
    <form action="/prescriptions" method="post" enctype="multipart/form-data">
        <input type="file" name="image" accept="image/jpeg,image/png">
        <button type="submit">Read Prescription</button>
    </form>
</div>"#,
        catalog_count
    ));

    page("Medi-Bot", &body)
}

/// Search / prescription results page.
pub fn results(heading: &str, cards: &[MedCard], empty_hint: &str) -> String {
    let mut body = format!("<h3>{}</h3>", encode_text(heading));

    if cards.is_empty() {
        body.push_str(&format!(
            r#"<div class="notice">{}</div>"#,
            encode_text(empty_hint)
        ));
    }

    for card in cards {
        body.push_str(&med_card(card));
    }

    body.push_str(r#"<p><a href="/">Back to Home Page</a></p>"#);
    page("Results - Medi-Bot", &body)
}

fn med_card(card: &MedCard) -> String {
    let summary = card
        .summary
        .as_deref()
        .map(|s| format!("<p>{}</p>", encode_text(s)))
        .unwrap_or_else(|| "<p><i>Summary unavailable.</i></p>".to_string());

    format!(
        r#"<div class="med-card">
    <h2>{name}</h2>
    <p><i>By {company}</i></p>
    {summary}
    <hr>
    <p><b>Indication:</b> {indication}</p>
    <p><b>Active Ingredient:</b> {ingredient}</p>
    <p><b>Pregnancy:</b> {pregnancy}</p>
    <p><b>Side Effects:</b> {side_effects}</p>
</div>"#,
        name = encode_text(&card.drug_name),
        company = encode_text(&card.company_name),
        summary = summary,
        indication = encode_text(&card.indication),
        ingredient = encode_text(&card.active_ingredient),
        pregnancy = encode_text(&card.pregnancy_safety),
        side_effects = encode_text(&card.side_effects),
    )
}

/// Static category page.
pub fn category(category: Category) -> String {
    let mut body = format!(
        "<h1>{}</h1><p>{}</p>",
        encode_text(category.title()),
        encode_text(category.tagline()),
    );

    for product in category.products() {
        body.push_str(&format!(
            r#"<div class="product-card">
    <h3>{name}</h3>
    <p><b>Why Use:</b> {why_use}</p>
    <p><b>Dosage:</b> {dosage}</p>
    <p><b>Limitations:</b> {limitations}</p>
</div>"#,
            name = encode_text(product.name),
            why_use = encode_text(product.why_use),
            dosage = encode_text(product.dosage),
            limitations = encode_text(product.limitations),
        ));
    }

    body.push_str(r#"<p><a href="/">Back to Home Page</a></p>"#);
    page(category.title(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn med_card_escapes_record_fields() {
        let card = MedCard {
            drug_name: "<script>alert(1)</script>".to_string(),
            company_name: "Acme & Co".to_string(),
            summary: None,
            indication: String::new(),
            active_ingredient: String::new(),
            pregnancy_safety: String::new(),
            side_effects: String::new(),
        };

        let html = med_card(&card);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("Summary unavailable"));
    }

    #[test]
    fn home_surfaces_catalog_load_failure() {
        let html = home(0, Some("Catalog file not found: data/medicines.json"));
        assert!(html.contains("empty catalog"));
        assert!(html.contains("Catalog file not found"));
    }

    #[test]
    fn category_page_lists_all_products() {
        let html = category(Category::SkinCare);
        assert!(html.contains("Vitamin C Serum"));
        assert!(html.contains("Toning Mist"));
    }
}
