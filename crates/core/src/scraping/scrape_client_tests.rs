//! Tests for unit-limit extraction against captured markup.

use crate::scraping::extract_unit_limit;

const URL: &str = "https://stablebonds.in/bonds/ugro/INE583D07570";

#[test]
fn test_extracts_from_primary_selector() {
    let html = r#"
        <html><body>
          <aside>
            <input class="unit-selector-input border-black-20" type="number"
                   inputmode="numeric" min="1" max="142" value="1">
          </aside>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), Some(142));
}

#[test]
fn test_falls_back_when_class_renamed() {
    // Deploy renamed the input class; the aside-scoped selector still hits.
    let html = r#"
        <html><body>
          <aside>
            <input class="qty-input" type="number" min="1" max="37">
          </aside>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), Some(37));
}

#[test]
fn test_inputmode_fallback_outside_aside() {
    let html = r#"
        <html><body>
          <div class="purchase-panel">
            <input type="number" inputmode="numeric" max="5">
          </div>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), Some(5));
}

#[test]
fn test_missing_max_attribute_yields_none() {
    let html = r#"
        <html><body>
          <aside><input class="unit-selector-input" type="number" min="1"></aside>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), None);
}

#[test]
fn test_non_numeric_max_yields_none() {
    let html = r#"
        <html><body>
          <aside><input class="unit-selector-input" type="number" max="lots"></aside>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), None);
}

#[test]
fn test_no_matching_element_yields_none() {
    let html = "<html><body><p>Sold out</p></body></html>";
    assert_eq!(extract_unit_limit(html, URL), None);
}

#[test]
fn test_ignores_unrelated_number_inputs() {
    // A text search box and a non-numeric number input elsewhere on the
    // page must not be picked over the unit selector.
    let html = r#"
        <html><body>
          <header><input type="text" name="q"></header>
          <aside>
            <input class="unit-selector-input" type="number" max="61">
          </aside>
        </body></html>
    "#;
    assert_eq!(extract_unit_limit(html, URL), Some(61));
}
